//! # Pricing Engine
//!
//! Deterministic, side-effect-free arithmetic over catalog and cart data.
//! Every derived money value shown anywhere in the marketplace (discounted
//! unit prices, line totals, savings, delivery gating, grand totals) comes
//! from this module and nowhere else.
//!
//! ## Worked Example
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart: Red Chili Powder  ₹180/kg  -10%  × 2                            │
//! │        Garam Masala      ₹350/kg  -15%  × 1                            │
//! │                                                                         │
//! │  line_total:      162 × 2 = 324        297.5 × 1 = 297.5              │
//! │  subtotal:        324 + 297.5 = 621.5                                  │
//! │  total_savings:   18 × 2 + 52.5 × 1 = 88.5                            │
//! │  delivery_fee:    621.5 ≥ 500 → FREE                                   │
//! │  grand_total:     621.5                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Every function is a pure function of its inputs; recomputing on every
//!    render is safe and is the intended usage
//! 2. Full precision through every aggregation step; rounding is the
//!    presentation layer's single final step ([`crate::money::Money::rounded`])
//! 3. Inputs are validated at construction ([`crate::types`]); these
//!    functions do not re-check

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::CartLine;
use crate::money::{DiscountPercent, Money};

// =============================================================================
// Delivery Policy
// =============================================================================

/// Delivery-fee configuration for a market.
///
/// Orders at or above `free_threshold` ship free; smaller orders pay
/// `fee`. Threshold and fee are configuration, not constants, so alternate
/// markets can tune them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryPolicy {
    /// Subtotal at which delivery becomes free.
    pub free_threshold: Money,

    /// Fee charged below the threshold.
    pub fee: Money,
}

impl DeliveryPolicy {
    /// Creates a policy with the given threshold and fee.
    pub const fn new(free_threshold: Money, fee: Money) -> Self {
        DeliveryPolicy {
            free_threshold,
            fee,
        }
    }

    /// The fee a given subtotal incurs under this policy.
    pub fn fee_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::zero()
        } else {
            self.fee
        }
    }

    /// How much more the vendor must add to reach free delivery, or `None`
    /// if the subtotal already qualifies.
    pub fn remaining_for_free(&self, subtotal: Money) -> Option<Money> {
        if subtotal >= self.free_threshold {
            None
        } else {
            Some(self.free_threshold - subtotal)
        }
    }
}

/// Default policy: free delivery from ₹500, ₹50 fee below.
impl Default for DeliveryPolicy {
    fn default() -> Self {
        DeliveryPolicy::new(Money::from_major(500), Money::from_major(50))
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// Derived totals for the current cart.
///
/// Never stored: recomputed from the current cart lines on every read, so
/// it cannot go stale. See [`summarize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    /// Sum of discounted line totals.
    pub subtotal: Money,

    /// Sum of per-line discount savings.
    pub total_savings: Money,

    /// Delivery fee under the active policy.
    pub delivery_fee: Money,

    /// Subtotal plus delivery fee.
    pub grand_total: Money,
}

// =============================================================================
// Pricing Operations
// =============================================================================

/// Unit price after discount: `unit_price × (1 − percent/100)`.
///
/// Inputs are pre-validated at the boundary; with a discount in 0-100 the
/// result is always in `[0, unit_price]`.
#[inline]
pub fn effective_unit_price(unit_price: Money, discount: DiscountPercent) -> Money {
    unit_price.less_discount(discount)
}

/// Discounted total for one cart line: effective unit price × quantity.
///
/// Full precision; no internal rounding.
#[inline]
pub fn line_total(line: &CartLine) -> Money {
    effective_unit_price(line.unit_price, line.discount) * line.quantity
}

/// Amount the discount saves on one cart line.
#[inline]
pub fn line_savings(line: &CartLine) -> Money {
    line.unit_price.discount_amount(line.discount) * line.quantity
}

/// Sum of line totals. Empty cart sums to zero.
pub fn subtotal(lines: &[CartLine]) -> Money {
    lines.iter().map(line_total).sum()
}

/// Sum of line savings. Empty cart sums to zero.
pub fn total_savings(lines: &[CartLine]) -> Money {
    lines.iter().map(line_savings).sum()
}

/// Delivery fee for a subtotal under a policy.
///
/// Zero at or above the free-delivery threshold, the flat fee below it.
#[inline]
pub fn delivery_fee(subtotal: Money, policy: &DeliveryPolicy) -> Money {
    policy.fee_for(subtotal)
}

/// Grand total: subtotal plus delivery fee.
#[inline]
pub fn grand_total(subtotal: Money, delivery_fee: Money) -> Money {
    subtotal + delivery_fee
}

/// How much more to add for free delivery ("Add ₹50 more for free
/// delivery"), or `None` once the subtotal qualifies.
#[inline]
pub fn remaining_for_free_delivery(subtotal: Money, policy: &DeliveryPolicy) -> Option<Money> {
    policy.remaining_for_free(subtotal)
}

/// Computes the full derived summary for a set of cart lines.
pub fn summarize(lines: &[CartLine], policy: &DeliveryPolicy) -> OrderSummary {
    let subtotal = subtotal(lines);
    let delivery_fee = policy.fee_for(subtotal);

    OrderSummary {
        subtotal,
        total_savings: total_savings(lines),
        delivery_fee,
        grand_total: grand_total(subtotal, delivery_fee),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
