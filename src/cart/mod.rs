//! # Cart Store
//!
//! In-memory mapping of menu item id to quantity, scoped to the currently
//! selected restaurant. The store never holds zero-quantity entries and
//! never stores resolved prices: totals are derived on demand by joining
//! against the loaded menu, so a stale cart key (item gone from the menu)
//! is silently excluded instead of erroring.
//!
//! Membership of an id in the active menu is enforced by the controller,
//! not here.

use crate::model::MenuItem;
use std::collections::BTreeMap;

/// Rounds to 2 fraction digits using standard rounding.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A cart line resolved against the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: MenuItem,
    /// Always >= 1; a line at 0 would have been removed from the store.
    pub quantity: u32,
    /// `round2(price * quantity)`.
    pub line_total: f64,
}

/// Resolved cart lines plus the grand total.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartTotals {
    pub lines: Vec<CartLine>,
    pub grand_total: f64,
}

impl CartTotals {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Quantity map for the active restaurant's menu.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    quantities: BTreeMap<String, u32>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the quantity for `item_id` by 1, inserting at 1 if absent.
    pub fn add_item(&mut self, item_id: &str) {
        *self.quantities.entry(item_id.to_string()).or_insert(0) += 1;
    }

    /// Decrements the quantity for `item_id` by 1; the entry is deleted when
    /// it reaches 0. Removing an absent item is a no-op.
    pub fn remove_item(&mut self, item_id: &str) {
        if let Some(quantity) = self.quantities.get_mut(item_id) {
            *quantity -= 1;
            if *quantity == 0 {
                self.quantities.remove(item_id);
            }
        }
    }

    /// Empties the cart. Invoked on restaurant switch and after a
    /// successful order submission.
    pub fn clear(&mut self) {
        self.quantities.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Current quantity for `item_id` (0 when absent).
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Joins the cart against `menu` in menu order.
    ///
    /// Pure and idempotent: no side effects, same output for the same
    /// inputs. Cart keys without a matching menu item are excluded.
    pub fn totals(&self, menu: &[MenuItem]) -> CartTotals {
        let mut lines = Vec::new();
        let mut grand_total = 0.0;
        for item in menu {
            let Some(&quantity) = self.quantities.get(&item.id) else {
                continue;
            };
            let line_total = round2(item.price * f64::from(quantity));
            grand_total += line_total;
            lines.push(CartLine {
                item: item.clone(),
                quantity,
                line_total,
            });
        }
        CartTotals {
            lines,
            grand_total: round2(grand_total),
        }
    }
}
