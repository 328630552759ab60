pub mod events;
pub mod list_page;
