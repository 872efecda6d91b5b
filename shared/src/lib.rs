//! Shared types for Gobite
//!
//! Domain types used by the ordering client and any presentation surface:
//! catalog entries, configured cart lines, orders and the diner identity,
//! plus the static menu catalog.

pub mod catalog;
pub mod models;
pub mod util;

// Re-exports
pub use models::*;
pub use rust_decimal::Decimal;
pub use serde::{Deserialize, Serialize};
