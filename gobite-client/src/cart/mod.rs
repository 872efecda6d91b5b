//! Cart consolidation rules
//!
//! - **identity**: content-addressed line ids from normalized configuration
//! - **money**: decimal subtotal / tax / total
//!
//! The functions here are pure transformations of a cart; the session store
//! decides when to call them and persists the result.

pub mod identity;
pub mod money;

pub use identity::{generate_line_id, input_to_line};
pub use money::{calculate_totals, format_money, TAX_RATE};

use shared::models::{CartLine, LineConfig, LineId, MenuItem};

/// Add `quantity` of `item` configured as `config`, merging with an existing
/// line if the normalized configuration matches
///
/// Returns the id of the line that was created or grown. A quantity of zero
/// leaves the cart untouched.
pub fn add_or_merge_line(
    cart: &mut Vec<CartLine>,
    item: &MenuItem,
    quantity: u32,
    config: &LineConfig,
) -> LineId {
    let line = input_to_line(item, quantity, config);
    let line_id = line.line_id.clone();

    if quantity == 0 {
        return line_id;
    }

    if let Some(existing) = cart.iter_mut().find(|l| l.line_id == line_id) {
        // Merge by adding quantity
        existing.quantity = existing.quantity.saturating_add(quantity);
    } else {
        cart.push(line);
    }

    line_id
}

/// Replace a line's quantity in place; zero or below removes the line
///
/// Quantities above `u32::MAX` are clamped to `u32::MAX`.
///
/// Returns whether the cart changed.
pub fn set_line_quantity(cart: &mut Vec<CartLine>, line_id: &LineId, quantity: i64) -> bool {
    if quantity <= 0 {
        return remove_line(cart, line_id);
    }

    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    match cart.iter_mut().find(|l| &l.line_id == line_id) {
        Some(line) if line.quantity != quantity => {
            line.quantity = quantity;
            true
        }
        _ => false,
    }
}

/// Delete the line with this id; absent ids are a no-op
///
/// Returns whether a line was removed.
pub fn remove_line(cart: &mut Vec<CartLine>, line_id: &LineId) -> bool {
    let before = cart.len();
    cart.retain(|l| &l.line_id != line_id);
    cart.len() != before
}

/// Re-derive identities for lines read back from storage
///
/// Line ids are recomputed from each line's own configuration, zero-quantity
/// lines are dropped and lines that now share an id are merged, so a cart
/// loaded from any source satisfies the same invariants as one built by
/// [`add_or_merge_line`].
pub fn rebuild_lines(lines: Vec<CartLine>) -> Vec<CartLine> {
    let mut cart: Vec<CartLine> = Vec::with_capacity(lines.len());
    for line in lines {
        add_or_merge_line(&mut cart, &line.item, line.quantity, &line.config());
    }
    cart
}

/// Total units across all lines (cart badge count)
pub fn item_count(cart: &[CartLine]) -> u32 {
    cart.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalog::find_item;
    use shared::models::ServingStyle;

    fn calamari() -> MenuItem {
        find_item("1").unwrap()
    }

    #[test]
    fn test_same_config_merges() {
        let mut cart = Vec::new();
        let a = add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::dining());
        let b = add_or_merge_line(&mut cart, &calamari(), 2, &LineConfig::dining());

        assert_eq!(a, b);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].quantity, 3);
    }

    #[test]
    fn test_different_style_forks() {
        let mut cart = Vec::new();
        add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::dining());
        add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::takeaway());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].serving_style, ServingStyle::Dining);
        assert_eq!(cart[1].serving_style, ServingStyle::Takeaway);
        assert!(cart.iter().all(|l| l.quantity == 1));
    }

    #[test]
    fn test_merge_keeps_insertion_order() {
        let mut cart = Vec::new();
        let salmon = find_item("4").unwrap();
        add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::dining());
        add_or_merge_line(&mut cart, &salmon, 1, &LineConfig::dining());
        add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::dining());

        let ids: Vec<_> = cart.iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
        assert_eq!(cart[0].quantity, 2);
    }

    #[test]
    fn test_zero_quantity_add_is_noop() {
        let mut cart = Vec::new();
        add_or_merge_line(&mut cart, &calamari(), 0, &LineConfig::dining());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_set_quantity_and_floor() {
        let mut cart = Vec::new();
        let id = add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::dining());

        assert!(set_line_quantity(&mut cart, &id, 5));
        assert_eq!(cart[0].quantity, 5);
        assert_eq!(cart[0].line_id, id);

        // Same value is not a change
        assert!(!set_line_quantity(&mut cart, &id, 5));

        assert!(set_line_quantity(&mut cart, &id, -3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_noops() {
        let mut cart = Vec::new();
        add_or_merge_line(&mut cart, &calamari(), 1, &LineConfig::dining());
        let missing = LineId::new("missing");

        assert!(!remove_line(&mut cart, &missing));
        assert!(!set_line_quantity(&mut cart, &missing, 4));
        assert!(!set_line_quantity(&mut cart, &missing, 0));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_rebuild_lines_merges_and_drops() {
        let mut cart = Vec::new();
        add_or_merge_line(&mut cart, &calamari(), 2, &LineConfig::dining());

        let mut stale = cart[0].clone();
        stale.line_id = LineId::new("legacy-1-DINING----");
        stale.instructions = "  ".to_string();
        let mut empty = cart[0].clone();
        empty.quantity = 0;
        empty.serving_style = ServingStyle::Takeaway;

        let rebuilt = rebuild_lines(vec![cart[0].clone(), stale, empty]);
        assert_eq!(rebuilt.len(), 1);
        assert_eq!(rebuilt[0].line_id, cart[0].line_id);
        assert_eq!(rebuilt[0].quantity, 4);
    }

    #[test]
    fn test_item_count() {
        let mut cart = Vec::new();
        add_or_merge_line(&mut cart, &calamari(), 2, &LineConfig::dining());
        add_or_merge_line(&mut cart, &calamari(), 3, &LineConfig::takeaway());
        assert_eq!(item_count(&cart), 5);
        assert_eq!(item_count(&[]), 0);
    }
}
