//! Order Model

use super::{CartLine, CartTotals};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order status
///
/// Orders are always created `Pending`; nothing in the client moves them on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Immutable order snapshot created at checkout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Copy of the cart lines at checkout time
    pub items: Vec<CartLine>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax: Decimal,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub restaurant_id: String,
    pub table_number: Option<String>,
}

impl Order {
    /// Build a pending order from a cart snapshot
    pub fn new(
        id: impl Into<String>,
        items: Vec<CartLine>,
        totals: CartTotals,
        restaurant_id: impl Into<String>,
        table_number: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            items,
            subtotal: totals.subtotal,
            tax: totals.tax,
            total: totals.total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            restaurant_id: restaurant_id.into(),
            table_number,
        }
    }

    /// Total number of units across all lines, saturating at `u32::MAX`
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineId, MenuItem, ServingStyle};

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>("\"cancelled\"").unwrap(),
            OrderStatus::Cancelled
        );
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new("abc", vec![], CartTotals::default(), "default", None);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 0);
        assert_eq!(order.restaurant_id, "default");
    }

    #[test]
    fn test_item_count_saturates() {
        let line = |style: ServingStyle, quantity: u32| CartLine {
            line_id: LineId::new(format!("line-{}", style)),
            item: MenuItem::new("1", "Crispy Calamari", Decimal::new(1299, 2), "Appetizers"),
            quantity,
            serving_style: style,
            instructions: String::new(),
            allergy_tags: Vec::new(),
            custom_allergy_note: String::new(),
        };
        let order = Order::new(
            "big",
            vec![line(ServingStyle::Dining, u32::MAX), line(ServingStyle::Takeaway, 1)],
            CartTotals::default(),
            "default",
            None,
        );
        assert_eq!(order.item_count(), u32::MAX);
    }
}
