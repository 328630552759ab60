pub mod api_utils;
pub mod components;
pub mod error;
pub mod event_bus;
pub mod http;
pub mod icons;
pub mod list_page;
pub mod modal_frame;
pub mod query;
