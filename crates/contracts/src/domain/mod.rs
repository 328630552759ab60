pub mod a001_project;
pub mod a002_integration;
pub mod common;
