//! Session module
//!
//! - **store**: [`SessionStore`], the single owner of identity, cart, table
//!   binding and order history
//! - **storage**: durable key-value storage ([`KvStorage`], [`RedbStorage`])
//!
//! # Data Flow
//!
//! ```text
//! caller → SessionStore op → new slice → KvStorage::write_batch (redb txn)
//!                                              ↓ ok
//!                                     in-memory state replaced
//! ```

pub mod storage;
pub mod store;


pub use storage::{KvStorage, RedbStorage, StorageError, StorageOp, StorageResult};
pub use store::{SessionStore, DEFAULT_RESTAURANT_ID};
