//! Core module - configuration and error definitions
//!
//! - [`Config`] - client configuration
//! - [`StoreError`] / [`AuthError`] / [`FlowError`] - error types

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{AuthError, FlowError, StoreError, StoreResult};
