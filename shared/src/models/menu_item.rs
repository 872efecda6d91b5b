//! Menu Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog entry (read-only, loaded once from the static catalog)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price in currency unit
    pub price: Decimal,
    /// Category label
    pub category: String,
    /// Image URL
    pub image: String,
    #[serde(default)]
    pub popular: bool,
}

impl MenuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            price,
            category: category.into(),
            image: String::new(),
            popular: false,
        }
    }
}
