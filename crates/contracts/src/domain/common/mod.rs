//! Common types and traits for all list records

pub mod item_id;

// Re-exports
pub use item_id::{parse_item_id, Identifiable, ItemId};
