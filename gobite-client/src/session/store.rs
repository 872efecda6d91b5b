//! Session store
//!
//! Single authority for the diner's identity, cart, table binding and order
//! history. Every mutation builds the new slice first, persists it, and only
//! then swaps it into memory: if storage fails the store is left exactly as
//! it was.

use super::storage::{CART_KEY, KvStorage, ORDERS_KEY, StorageOp, TABLE_KEY, USER_KEY};
use crate::cart;
use crate::core::{StoreError, StoreResult};
use serde::de::DeserializeOwned;
use shared::models::{CartLine, CartTotals, LineConfig, LineId, MenuItem, Order, UserIdentity};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Restaurant bound until a menu link selects one
pub const DEFAULT_RESTAURANT_ID: &str = "default";

pub struct SessionStore {
    storage: Arc<dyn KvStorage>,
    user: Option<UserIdentity>,
    cart: Vec<CartLine>,
    /// Most recent first
    orders: Vec<Order>,
    restaurant_id: String,
    table_number: Option<String>,
}

impl SessionStore {
    /// Load every slice from storage
    ///
    /// Each slice is read on its own; a slice that is missing, unreadable or
    /// unparseable starts empty instead of failing the whole load. Only the
    /// table is restored from the session binding.
    pub fn load(storage: Arc<dyn KvStorage>) -> Self {
        let user = load_slice::<Option<UserIdentity>>(storage.as_ref(), USER_KEY).flatten();
        let cart = load_slice::<Vec<CartLine>>(storage.as_ref(), CART_KEY)
            .map(cart::rebuild_lines)
            .unwrap_or_default();
        let orders = load_slice::<Vec<Order>>(storage.as_ref(), ORDERS_KEY).unwrap_or_default();
        let table_number = load_slice::<String>(storage.as_ref(), TABLE_KEY);

        info!(
            logged_in = user.is_some(),
            cart_lines = cart.len(),
            orders = orders.len(),
            table = table_number.as_deref().unwrap_or("-"),
            "Session loaded"
        );

        Self {
            storage,
            user,
            cart,
            orders,
            restaurant_id: DEFAULT_RESTAURANT_ID.to_string(),
            table_number,
        }
    }

    // ========== Read access ==========

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Cart lines in insertion order
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    pub fn find_line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.cart.iter().find(|l| &l.line_id == line_id)
    }

    /// Order history, most recent first
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn latest_order(&self) -> Option<&Order> {
        self.orders.first()
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn table_number(&self) -> Option<&str> {
        self.table_number.as_deref()
    }

    pub fn totals(&self) -> CartTotals {
        cart::calculate_totals(&self.cart)
    }

    /// Units in the cart
    pub fn item_count(&self) -> u32 {
        cart::item_count(&self.cart)
    }

    // ========== Identity ==========

    /// Replace the current identity; credentials are not checked here
    pub fn login(&mut self, identity: UserIdentity) -> StoreResult<()> {
        self.storage
            .write_batch(&[StorageOp::put_json(USER_KEY, &identity)?])?;
        info!(name = %identity.name, "Diner logged in");
        self.user = Some(identity);
        Ok(())
    }

    /// Clear identity, cart and history, in memory and on disk
    ///
    /// The table binding survives a logout.
    pub fn logout(&mut self) -> StoreResult<()> {
        self.storage.write_batch(&[
            StorageOp::Remove { key: USER_KEY },
            StorageOp::Remove { key: CART_KEY },
            StorageOp::Remove { key: ORDERS_KEY },
        ])?;
        self.user = None;
        self.cart.clear();
        self.orders.clear();
        info!("Diner logged out");
        Ok(())
    }

    // ========== Cart ==========

    /// Add `quantity` of `item`, merging into an existing line when the
    /// normalized configuration matches
    ///
    /// Returns the id of the affected line.
    pub fn add_to_cart(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        config: &LineConfig,
    ) -> StoreResult<LineId> {
        let mut next = self.cart.clone();
        let line_id = cart::add_or_merge_line(&mut next, item, quantity, config);
        if quantity == 0 {
            debug!(item_id = %item.id, "Ignoring add of zero quantity");
            return Ok(line_id);
        }

        self.commit_cart(next)?;
        debug!(item_id = %item.id, line_id = %line_id, quantity, "Added to cart");
        Ok(line_id)
    }

    /// Set a line's quantity; zero or below removes it
    ///
    /// The line keeps its id. Unknown ids are ignored. Quantities above
    /// `u32::MAX` are clamped to `u32::MAX`.
    pub fn update_quantity(&mut self, line_id: &LineId, quantity: i64) -> StoreResult<()> {
        let mut next = self.cart.clone();
        if cart::set_line_quantity(&mut next, line_id, quantity) {
            self.commit_cart(next)?;
            debug!(line_id = %line_id, quantity, "Cart quantity updated");
        }
        Ok(())
    }

    /// Remove a line; unknown ids are ignored
    pub fn remove_from_cart(&mut self, line_id: &LineId) -> StoreResult<()> {
        let mut next = self.cart.clone();
        if cart::remove_line(&mut next, line_id) {
            self.commit_cart(next)?;
            debug!(line_id = %line_id, "Removed from cart");
        }
        Ok(())
    }

    pub fn clear_cart(&mut self) -> StoreResult<()> {
        self.commit_cart(Vec::new())?;
        debug!("Cart cleared");
        Ok(())
    }

    fn commit_cart(&mut self, next: Vec<CartLine>) -> StoreResult<()> {
        self.storage
            .write_batch(&[StorageOp::put_json(CART_KEY, &next)?])?;
        self.cart = next;
        Ok(())
    }

    // ========== Orders ==========

    /// Prepend an order to the history
    pub fn add_order(&mut self, order: Order) -> StoreResult<()> {
        let next = prepend(order, &self.orders);
        self.storage
            .write_batch(&[StorageOp::put_json(ORDERS_KEY, &next)?])?;
        self.orders = next;
        Ok(())
    }

    /// Turn the cart into a pending order
    ///
    /// Recording the order and emptying the cart are written in one storage
    /// transaction; on failure neither happens.
    pub fn checkout(&mut self) -> StoreResult<Order> {
        if self.cart.is_empty() {
            return Err(StoreError::EmptyCart);
        }

        let order = Order::new(
            shared::util::order_number(),
            self.cart.clone(),
            self.totals(),
            self.restaurant_id.clone(),
            self.table_number.clone(),
        );
        let orders = prepend(order.clone(), &self.orders);

        self.storage.write_batch(&[
            StorageOp::put_json(ORDERS_KEY, &orders)?,
            StorageOp::put_json(CART_KEY, &Vec::<CartLine>::new())?,
        ])?;

        self.orders = orders;
        self.cart.clear();

        info!(
            order_id = %order.id,
            total = %order.total,
            items = order.item_count(),
            table = order.table_number.as_deref().unwrap_or("-"),
            "Order placed"
        );
        Ok(order)
    }

    // ========== Session binding ==========

    /// Bind the restaurant and table; only the table is persisted
    pub fn set_session_info(
        &mut self,
        restaurant_id: impl Into<String>,
        table_number: impl Into<String>,
    ) -> StoreResult<()> {
        let table_number = table_number.into();
        self.storage
            .write_batch(&[StorageOp::put_json(TABLE_KEY, &table_number)?])?;
        self.restaurant_id = restaurant_id.into();
        info!(restaurant_id = %self.restaurant_id, table = %table_number, "Session bound");
        self.table_number = Some(table_number);
        Ok(())
    }
}

fn prepend(order: Order, history: &[Order]) -> Vec<Order> {
    let mut next = Vec::with_capacity(history.len() + 1);
    next.push(order);
    next.extend_from_slice(history);
    next
}

/// Read and decode one slice, treating any failure as absent
fn load_slice<T: DeserializeOwned>(storage: &dyn KvStorage, key: &str) -> Option<T> {
    match storage.get(key) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "Discarding unparseable slice");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read slice");
            None
        }
    }
}
