//! # Cart
//!
//! The vendor's shopping cart and its mutation rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Screen Action            Cart Method              State Change         │
//! │  ─────────────            ───────────              ────────────         │
//! │                                                                         │
//! │  Add to Cart ────────────► add_item() ───────────► merge or push line  │
//! │                                                                         │
//! │  + / − buttons ──────────► increment() ──────────► quantity ± 1        │
//! │                            decrement()             (1 → 0 removes)      │
//! │                                                                         │
//! │  Quantity field ─────────► update_quantity() ────► set (0 removes)     │
//! │                                                                         │
//! │  Trash button ───────────► remove_line() ────────► line removed        │
//! │                                                                         │
//! │  Order Summary panel ────► summary() ────────────► recomputed, never   │
//! │                                                    cached               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is a plain value type. Derived totals are recomputed from the
//! current lines on every read, so they cannot go stale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::{DiscountPercent, Money};
use crate::pricing::{self, DeliveryPolicy, OrderSummary};
use crate::types::CatalogItem;
use crate::validation::validate_quantity;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

// =============================================================================
// Cart Line
// =============================================================================

/// One product/quantity pairing inside the cart.
///
/// ## Price Freezing
/// All catalog fields are captured at add time. If the supplier changes
/// the price or discount afterwards, the cart keeps displaying what the
/// vendor agreed to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Catalog item id (UUID).
    pub item_id: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Supplier name at time of adding (frozen).
    pub supplier: String,

    /// Undiscounted unit price at time of adding (frozen).
    pub unit_price: Money,

    /// Unit label at time of adding (frozen).
    pub unit: String,

    /// Discount at time of adding (frozen).
    pub discount: DiscountPercent,

    /// Quantity in cart. Always positive; a quantity of 0 removes the line.
    pub quantity: i64,

    /// When this line was added to the cart.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a cart line from a catalog item and quantity.
    pub fn from_item(item: &CatalogItem, quantity: i64) -> Self {
        CartLine {
            item_id: item.id.clone(),
            name: item.name.clone(),
            supplier: item.supplier.clone(),
            unit_price: item.unit_price,
            unit: item.unit.clone(),
            discount: item.discount,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Unit price after discount.
    #[inline]
    pub fn effective_unit_price(&self) -> Money {
        pricing::effective_unit_price(self.unit_price, self.discount)
    }

    /// Discounted line total (effective unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Money {
        pricing::line_total(self)
    }

    /// Amount the discount saves on this line.
    #[inline]
    pub fn line_savings(&self) -> Money {
        pricing::line_savings(self)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Lines are unique by `item_id` (adding the same item accumulates
///   quantity)
/// - Quantity is always positive (setting 0 removes the line)
/// - Maximum distinct lines: 100
/// - Maximum quantity per line: 999
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    /// Lines in the cart.
    pub lines: Vec<CartLine>,

    /// When the cart was created/last cleared.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds a catalog item to the cart or accumulates quantity if a line
    /// for it already exists.
    ///
    /// ## Errors
    /// - Quantity must be positive and within the per-line maximum
    /// - The supplier must be able to fill the combined quantity
    /// - The cart must have room for a new line
    pub fn add_item(&mut self, item: &CatalogItem, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item.id) {
            let new_qty = line.quantity + quantity;
            if new_qty > MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: new_qty,
                    max: MAX_LINE_QUANTITY,
                });
            }
            if !item.can_supply(new_qty) {
                return Err(CoreError::ItemUnavailable {
                    name: item.name.clone(),
                });
            }
            line.quantity = new_qty;
            debug!(item_id = %item.id, quantity = %new_qty, "cart line quantity accumulated");
            return Ok(());
        }

        if !item.can_supply(quantity) {
            return Err(CoreError::ItemUnavailable {
                name: item.name.clone(),
            });
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine::from_item(item, quantity));
        debug!(item_id = %item.id, quantity = %quantity, "cart line added");
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - Quantity 0 removes the line (a zero-quantity line never exists)
    /// - Unknown item ids are an error
    pub fn update_quantity(&mut self, item_id: &str, quantity: i64) -> CoreResult<()> {
        if quantity == 0 {
            return self.remove_line(item_id);
        }

        validate_quantity(quantity)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.item_id == item_id) {
            line.quantity = quantity;
            debug!(item_id = %item_id, quantity = %quantity, "cart line quantity updated");
            Ok(())
        } else {
            Err(CoreError::LineNotFound {
                item_id: item_id.to_string(),
            })
        }
    }

    /// Increases a line's quantity by one (the screen's + button).
    pub fn increment(&mut self, item_id: &str) -> CoreResult<()> {
        let quantity = self.quantity_of(item_id)?;
        self.update_quantity(item_id, quantity + 1)
    }

    /// Decreases a line's quantity by one (the screen's − button).
    /// Decrementing a quantity-1 line removes it.
    pub fn decrement(&mut self, item_id: &str) -> CoreResult<()> {
        let quantity = self.quantity_of(item_id)?;
        self.update_quantity(item_id, quantity - 1)
    }

    /// Removes a line from the cart by catalog item id.
    pub fn remove_line(&mut self, item_id: &str) -> CoreResult<()> {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.item_id != item_id);

        if self.lines.len() == initial_len {
            Err(CoreError::LineNotFound {
                item_id: item_id.to_string(),
            })
        } else {
            debug!(item_id = %item_id, "cart line removed");
            Ok(())
        }
    }

    /// Clears all lines from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
        debug!("cart cleared");
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the number of distinct lines in the cart.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the total quantity across all lines (the header badge).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Computes the derived order summary under the given delivery policy.
    ///
    /// Always recomputed from the current lines; nothing is cached or
    /// incrementally patched.
    pub fn summary(&self, policy: &DeliveryPolicy) -> OrderSummary {
        pricing::summarize(&self.lines, policy)
    }

    fn quantity_of(&self, item_id: &str) -> CoreResult<i64> {
        self.lines
            .iter()
            .find(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .ok_or_else(|| CoreError::LineNotFound {
                item_id: item_id.to_string(),
            })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
