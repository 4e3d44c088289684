//! # source-core: Pure Business Logic for StreetSource
//!
//! This crate is the **heart** of StreetSource, a B2B marketplace
//! connecting street-food vendors with raw-material suppliers. It contains
//! every monetary derivation the marketplace screens display, as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      StreetSource Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Marketplace Screens (browser UI)                │   │
//! │  │   Suppliers ──► Compare ──► Cart ──► Checkout ──► Dashboards   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ function calls (TS bindings)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ source-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │  compare  │  │   │
//! │  │   │ Catalog   │  │   Money   │  │  totals   │  │ best/worst│  │   │
//! │  │   │ Item,     │  │ Discount  │  │  savings  │  │  price    │  │   │
//! │  │   │ Offer     │  │ Percent   │  │  delivery │  │  badges   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │   cart    │  │   promo   │  │ validation│                 │   │
//! │  │   │ Cart,     │  │  FIRST10  │  │   rules   │                 │   │
//! │  │   │ CartLine  │  │           │  │  checks   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogItem, Supplier, SupplierOffer, Order)
//! - [`money`] - Money type with exact decimal arithmetic
//! - [`pricing`] - The pricing engine: discounts, savings, delivery
//!   gating, order summaries
//! - [`compare`] - Cross-supplier price comparison
//! - [`cart`] - Cart state and mutation rules
//! - [`promo`] - Promo code redemption
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every derivation is deterministic - same input =
//!    same output - and safe to recompute on every render
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: Monetary values are exact decimals; aggregation
//!    never rounds, presentation rounds exactly once
//! 4. **Boundary Validation**: Records are validated when constructed;
//!    the arithmetic assumes the invariants hold
//!
//! ## Example Usage
//!
//! ```rust
//! use source_core::cart::Cart;
//! use source_core::money::Money;
//! use source_core::pricing::DeliveryPolicy;
//! use source_core::types::CatalogItem;
//!
//! let chili = CatalogItem::new(
//!     "550e8400-e29b-41d4-a716-446655440000",
//!     "Red Chili Powder",
//!     "Rajesh Spices & Co.",
//!     Money::from_major(180),
//!     "kg",
//!     10,
//!     true,
//! )?;
//!
//! let mut cart = Cart::new();
//! cart.add_item(&chili, 2)?;
//!
//! let summary = cart.summary(&DeliveryPolicy::default());
//! assert_eq!(summary.subtotal, Money::from_major(324));
//! # Ok::<(), source_core::error::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod compare;
pub mod error;
pub mod money;
pub mod pricing;
pub mod promo;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use source_core::Money` instead of
// `use source_core::money::Money`

pub use cart::{Cart, CartLine};
pub use compare::ComparisonSummary;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{DiscountPercent, Money};
pub use pricing::{DeliveryPolicy, OrderSummary};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart
///
/// Prevents runaway carts and keeps a single order reviewable.
/// Can be made configurable per-market in future versions.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single line in the cart
///
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10).
pub const MAX_LINE_QUANTITY: i64 = 999;
