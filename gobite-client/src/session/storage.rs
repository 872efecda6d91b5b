//! Durable key-value storage for session state
//!
//! # Keys
//!
//! | Key | Value | Purpose |
//! |-----|-------|---------|
//! | `gobite_user` | `UserIdentity` | Logged-in diner |
//! | `gobite_cart` | `Vec<CartLine>` | Cart contents |
//! | `gobite_orders` | `Vec<Order>` | Order history, most recent first |
//! | `gobite_table` | `String` | Last bound table number |
//!
//! Values are JSON-encoded. Every slice is rewritten in full on change.
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns, and a batch of
//! writes lands in a single write transaction, so either all of it is visible
//! after a restart or none of it is.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Single table holding every slice: key = slice name, value = JSON bytes
const SESSION_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("session_state");

pub const USER_KEY: &str = "gobite_user";
pub const CART_KEY: &str = "gobite_cart";
pub const ORDERS_KEY: &str = "gobite_orders";
pub const TABLE_KEY: &str = "gobite_table";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// One write in a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageOp<'a> {
    Put { key: &'a str, value: Vec<u8> },
    Remove { key: &'a str },
}

impl<'a> StorageOp<'a> {
    /// JSON-encode `value` under `key`
    pub fn put_json<T: serde::Serialize + ?Sized>(key: &'a str, value: &T) -> StorageResult<Self> {
        Ok(StorageOp::Put {
            key,
            value: serde_json::to_vec(value)?,
        })
    }
}

/// String-keyed persistent store scoped to the client installation
pub trait KvStorage: Send + Sync {
    /// Read the raw value for `key`
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Apply all writes atomically
    fn write_batch(&self, ops: &[StorageOp<'_>]) -> StorageResult<()>;
}

/// Session storage backed by redb
#[derive(Clone)]
pub struct RedbStorage {
    db: Arc<Database>,
}

impl RedbStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (nothing survives the process)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        // Create the table up front so reads never hit a missing table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(SESSION_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStorage for RedbStorage {
    fn get(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(SESSION_TABLE)?;

        match table.get(key)? {
            Some(value) => Ok(Some(value.value().to_vec())),
            None => Ok(None),
        }
    }

    fn write_batch(&self, ops: &[StorageOp<'_>]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(SESSION_TABLE)?;
            for op in ops {
                match op {
                    StorageOp::Put { key, value } => {
                        table.insert(*key, value.as_slice())?;
                    }
                    StorageOp::Remove { key } => {
                        table.remove(*key)?;
                    }
                }
            }
        }
        write_txn.commit()?;
        Ok(())
    }
}
