//! Data models
//!
//! Catalog entries are immutable; cart lines and orders are serialized as JSON
//! slices by the client's durable storage.

pub mod cart;
pub mod menu_item;
pub mod order;
pub mod user;

// Re-exports
pub use cart::*;
pub use menu_item::*;
pub use order::*;
pub use user::*;
