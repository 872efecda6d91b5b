use crate::session::storage::StorageError;
use thiserror::Error;

/// Session store errors
///
/// Unknown line ids and non-positive quantities are not errors; the only
/// failures are persistence failures and checking out an empty cart.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Cart is empty")]
    EmptyCart,
}

/// Simulated one-time-code authentication errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Name and phone are required")]
    MissingDetails,

    #[error("Invalid OTP. Use {hint}")]
    InvalidCode { hint: String },

    #[error("Verification step not reached")]
    NotAwaitingCode,

    #[error("Cancelled")]
    Cancelled,
}

/// Timer-driven flow errors
#[derive(Debug, Error)]
pub enum FlowError {
    #[error("Cancelled before completion")]
    Cancelled,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type StoreResult<T> = Result<T, StoreError>;
