pub mod a002_integration;
