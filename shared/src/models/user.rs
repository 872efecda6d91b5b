//! Diner identity

use serde::{Deserialize, Serialize};

/// Verified diner identity (name + phone)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserIdentity {
    pub name: String,
    pub phone: String,
}

impl UserIdentity {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}
