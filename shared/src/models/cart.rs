//! Cart line types
//!
//! A cart line is a [`MenuItem`] extended with order-specific configuration.
//! Lines are identified by a content-addressed [`LineId`] computed from the
//! normalized configuration, so two requests that configure the same dish the
//! same way land on the same line.

use super::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Serving Style
// ============================================================================

/// Whether a line is eaten on the premises or packed to go
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServingStyle {
    #[default]
    Dining,
    Takeaway,
}

impl ServingStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServingStyle::Dining => "dining",
            ServingStyle::Takeaway => "takeaway",
        }
    }
}

impl fmt::Display for ServingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for ServingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dining" | "dine-in" | "dinein" => Ok(ServingStyle::Dining),
            "takeaway" | "takeout" => Ok(ServingStyle::Takeaway),
            other => Err(format!("unknown serving style: {}", other)),
        }
    }
}

// ============================================================================
// Line Configuration
// ============================================================================

/// Caller-supplied configuration for adding an item to the cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineConfig {
    pub serving_style: ServingStyle,
    /// Free-text kitchen note
    pub instructions: String,
    /// Selected standard allergy labels (any order, may contain duplicates)
    pub allergy_tags: Vec<String>,
    /// Supplemental allergy note
    pub custom_allergy_note: String,
}

impl LineConfig {
    pub fn new(serving_style: ServingStyle) -> Self {
        Self {
            serving_style,
            ..Self::default()
        }
    }

    pub fn dining() -> Self {
        Self::new(ServingStyle::Dining)
    }

    pub fn takeaway() -> Self {
        Self::new(ServingStyle::Takeaway)
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_allergies<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allergy_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_allergy_note(mut self, note: impl Into<String>) -> Self {
        self.custom_allergy_note = note.into();
        self
    }

    /// Canonical form used for identity and storage.
    ///
    /// Text fields are trimmed. Allergy tags are trimmed, emptied tags dropped,
    /// then sorted and deduplicated.
    pub fn normalized(&self) -> Self {
        let mut allergy_tags: Vec<String> = self
            .allergy_tags
            .iter()
            .map(|t| t.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        allergy_tags.sort();
        allergy_tags.dedup();

        Self {
            serving_style: self.serving_style,
            instructions: self.instructions.trim().to_string(),
            allergy_tags,
            custom_allergy_note: self.custom_allergy_note.trim().to_string(),
        }
    }
}

// ============================================================================
// Line Identity
// ============================================================================

/// Stable identity of a cart line (hex content hash)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LineId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ============================================================================
// Cart Line
// ============================================================================

/// One configured, quantity-bearing entry in the cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Identity key (content-addressed hash of the normalized configuration)
    pub line_id: LineId,
    #[serde(flatten)]
    pub item: MenuItem,
    /// Always positive while the line is in the cart
    pub quantity: u32,
    pub serving_style: ServingStyle,
    /// Trimmed; empty means no instructions
    #[serde(default)]
    pub instructions: String,
    /// Sorted, deduplicated
    #[serde(default)]
    pub allergy_tags: Vec<String>,
    /// Trimmed; empty means no note
    #[serde(default)]
    pub custom_allergy_note: String,
}

impl CartLine {
    /// Unit price × quantity (unrounded)
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }

    /// Configuration this line was created from
    pub fn config(&self) -> LineConfig {
        LineConfig {
            serving_style: self.serving_style,
            instructions: self.instructions.clone(),
            allergy_tags: self.allergy_tags.clone(),
            custom_allergy_note: self.custom_allergy_note.clone(),
        }
    }
}

/// Checkout amounts, each rounded to currency precision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CartTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_trims_and_sorts() {
        let config = LineConfig::takeaway()
            .with_instructions("  no onions \n")
            .with_allergies(["Gluten", " Dairy", "Gluten", "  "])
            .with_allergy_note(" sesame ");

        let normalized = config.normalized();
        assert_eq!(normalized.serving_style, ServingStyle::Takeaway);
        assert_eq!(normalized.instructions, "no onions");
        assert_eq!(normalized.allergy_tags, vec!["Dairy", "Gluten"]);
        assert_eq!(normalized.custom_allergy_note, "sesame");
    }

    #[test]
    fn test_serving_style_parse_and_serde() {
        assert_eq!("Takeaway".parse::<ServingStyle>(), Ok(ServingStyle::Takeaway));
        assert_eq!("dine-in".parse::<ServingStyle>(), Ok(ServingStyle::Dining));
        assert!("delivery".parse::<ServingStyle>().is_err());

        let json = serde_json::to_string(&ServingStyle::Takeaway).unwrap();
        assert_eq!(json, "\"TAKEAWAY\"");
    }

    #[test]
    fn test_cart_line_flattens_menu_item() {
        let line = CartLine {
            line_id: LineId::new("abc"),
            item: MenuItem::new("1", "Crispy Calamari", Decimal::new(1299, 2), "Appetizers"),
            quantity: 2,
            serving_style: ServingStyle::Dining,
            instructions: String::new(),
            allergy_tags: vec![],
            custom_allergy_note: String::new(),
        };

        let value = serde_json::to_value(&line).unwrap();
        assert_eq!(value["line_id"], "abc");
        assert_eq!(value["id"], "1");
        assert_eq!(value["name"], "Crispy Calamari");

        let back: CartLine = serde_json::from_value(value).unwrap();
        assert_eq!(back, line);
        assert_eq!(back.line_total(), Decimal::new(2598, 2));
    }
}
