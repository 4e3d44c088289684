//! # Domain Types
//!
//! Core domain types used throughout StreetSource.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogItem    │   │  SupplierOffer  │   │     Order       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  supplier       │   │  id (UUID)      │       │
//! │  │  name           │   │  product_name   │   │  supplier       │       │
//! │  │  unit_price     │   │  unit_price     │   │  items          │       │
//! │  │  discount       │   │  discount       │   │  total          │       │
//! │  │  in_stock       │   │  in_stock       │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Supplier     │   │  OrderStatus    │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  id, name       │   │  Processing     │                             │
//! │  │  rating (0-5)   │   │  InTransit      │                             │
//! │  │  min_order      │   │  Delivered      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Dual-Key Identity Pattern
//! Catalog items and orders carry both:
//! - `id`: UUID - immutable, stable across renames
//! - `name`: human-readable display attribute
//!
//! Cross-supplier comparison joins offers on `product_name` (see
//! [`crate::compare`]); the display name doubles as the join key there.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::{DiscountPercent, Money};
use crate::validation::{
    validate_item_name, validate_rating, validate_search_query, validate_supplier_name,
    validate_unit_label, validate_unit_price, validate_uuid, ValidationResult,
};

// =============================================================================
// Catalog Item
// =============================================================================

/// A raw-material product as listed in a supplier's catalog.
///
/// Immutable once constructed; [`CatalogItem::new`] is the validation
/// boundary for every field invariant (positive price, discount in 0-100,
/// non-empty name and unit label, well-formed id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogItem {
    /// Unique identifier (UUID).
    pub id: String,

    /// Display name shown to vendors.
    pub name: String,

    /// Display name of the supplier listing this item.
    pub supplier: String,

    /// Undiscounted price per unit.
    pub unit_price: Money,

    /// Unit label ("kg", "L", ...).
    pub unit: String,

    /// Discount currently offered on this item.
    pub discount: DiscountPercent,

    /// Whether the supplier can currently deliver this item.
    pub in_stock: bool,

    /// Remaining stock in `unit`s, when the supplier publishes it.
    pub stock_quantity: Option<i64>,

    /// Optional long-form description for the product page.
    pub description: Option<String>,
}

impl CatalogItem {
    /// Creates a validated catalog item.
    ///
    /// ## Errors
    /// Rejects malformed ids, empty/oversized names and unit labels,
    /// non-positive prices, and discounts outside 0-100.
    pub fn new(
        id: &str,
        name: &str,
        supplier: &str,
        unit_price: Money,
        unit: &str,
        discount_percent: u32,
        in_stock: bool,
    ) -> ValidationResult<Self> {
        validate_uuid(id)?;
        validate_item_name(name)?;
        validate_supplier_name(supplier)?;
        validate_unit_price(unit_price)?;
        validate_unit_label(unit)?;
        let discount = DiscountPercent::new(discount_percent)?;

        Ok(CatalogItem {
            id: id.to_string(),
            name: name.trim().to_string(),
            supplier: supplier.trim().to_string(),
            unit_price,
            unit: unit.trim().to_string(),
            discount,
            in_stock,
            stock_quantity: None,
            description: None,
        })
    }

    /// Attaches a published stock level.
    pub fn with_stock_quantity(mut self, quantity: i64) -> Self {
        self.stock_quantity = Some(quantity);
        self
    }

    /// Attaches a long-form description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Returns the unit price after discount.
    #[inline]
    pub fn effective_unit_price(&self) -> Money {
        crate::pricing::effective_unit_price(self.unit_price, self.discount)
    }

    /// Checks whether the supplier can fill an order for `quantity` units.
    ///
    /// Items without a published stock level are limited only by the
    /// `in_stock` flag.
    pub fn can_supply(&self, quantity: i64) -> bool {
        if !self.in_stock {
            return false;
        }

        match self.stock_quantity {
            Some(stock) => stock >= quantity,
            None => true,
        }
    }
}

// =============================================================================
// Supplier
// =============================================================================

/// A supplier as shown in the marketplace directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Supplier {
    /// Unique identifier (UUID).
    pub id: String,

    /// Display name.
    pub name: String,

    /// City or region the supplier ships from.
    pub location: String,

    /// Aggregate vendor rating, 0-5 stars.
    pub rating: f64,

    /// Contact phone number.
    pub phone: String,

    /// Minimum order value the supplier accepts.
    pub min_order: Money,

    /// Typical delivery window label ("1-2 days", "Same day").
    pub delivery_time: String,
}

impl Supplier {
    /// Creates a validated supplier record.
    pub fn new(
        id: &str,
        name: &str,
        location: &str,
        rating: f64,
        phone: &str,
        min_order: Money,
        delivery_time: &str,
    ) -> ValidationResult<Self> {
        validate_uuid(id)?;
        validate_supplier_name(name)?;
        validate_rating(rating)?;
        validate_unit_price(min_order)?;

        Ok(Supplier {
            id: id.to_string(),
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            rating,
            phone: phone.trim().to_string(),
            min_order,
            delivery_time: delivery_time.trim().to_string(),
        })
    }
}

// =============================================================================
// Supplier Offer
// =============================================================================

/// One supplier's terms for one product, used for side-by-side comparison.
///
/// Offers are transient comparison inputs, never persisted. They are
/// matched across suppliers by `product_name`; a rename or a name
/// collision mis-joins (see [`crate::compare::offers_for`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SupplierOffer {
    /// Display name of the offering supplier.
    pub supplier: String,

    /// Display name of the product; also the comparison join key.
    pub product_name: String,

    /// Undiscounted price per unit.
    pub unit_price: Money,

    /// Unit label ("kg", "L", ...).
    pub unit: String,

    /// Whether the supplier can currently deliver.
    pub in_stock: bool,

    /// Discount currently offered.
    pub discount: DiscountPercent,
}

impl SupplierOffer {
    /// Creates a validated offer.
    pub fn new(
        supplier: &str,
        product_name: &str,
        unit_price: Money,
        unit: &str,
        in_stock: bool,
        discount_percent: u32,
    ) -> ValidationResult<Self> {
        validate_supplier_name(supplier)?;
        validate_item_name(product_name)?;
        validate_unit_price(unit_price)?;
        validate_unit_label(unit)?;
        let discount = DiscountPercent::new(discount_percent)?;

        Ok(SupplierOffer {
            supplier: supplier.trim().to_string(),
            product_name: product_name.trim().to_string(),
            unit_price,
            unit: unit.trim().to_string(),
            in_stock,
            discount,
        })
    }

    /// Returns the unit price after discount.
    #[inline]
    pub fn effective_unit_price(&self) -> Money {
        crate::pricing::effective_unit_price(self.unit_price, self.discount)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The fulfilment status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Supplier is preparing the order.
    Processing,
    /// Order is on its way to the vendor.
    InTransit,
    /// Order has arrived.
    Delivered,
}

impl OrderStatus {
    /// Human-readable label for the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Delivered => "Delivered",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Processing
    }
}

// =============================================================================
// Order
// =============================================================================

/// A line item inside a placed order.
///
/// Uses the snapshot pattern: values are frozen at order time and do not
/// follow later catalog changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    /// Product name at time of ordering (frozen).
    pub name: String,

    /// Quantity ordered.
    pub quantity: i64,

    /// Unit label at time of ordering (frozen).
    pub unit: String,

    /// Line total at time of ordering (frozen).
    pub line_total: Money,
}

/// A placed order in the vendor's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Unique identifier (UUID).
    pub id: String,

    /// Supplier display name.
    pub supplier: String,

    /// Items in the order.
    pub items: Vec<OrderItem>,

    /// Order total at time of ordering (frozen).
    pub total: Money,

    /// Current fulfilment status.
    pub status: OrderStatus,

    /// When the order was placed.
    #[ts(as = "String")]
    pub ordered_at: DateTime<Utc>,

    /// Expected delivery date, when the supplier has committed to one.
    #[ts(as = "Option<String>")]
    pub expected_delivery: Option<NaiveDate>,

    /// Delivery address as entered at checkout.
    pub delivery_address: String,
}

impl Order {
    /// Checks whether this order matches a free-text search.
    ///
    /// Matches case-insensitively against the supplier name and every
    /// item name, the way the orders screen filters its list.
    pub fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }

        self.supplier.to_lowercase().contains(&query)
            || self
                .items
                .iter()
                .any(|item| item.name.to_lowercase().contains(&query))
    }
}

// =============================================================================
// Order Queries
// =============================================================================

/// Sums the totals of all given orders (lifetime spend).
pub fn total_spent(orders: &[Order]) -> Money {
    orders.iter().map(|order| order.total).sum()
}

/// Returns the orders currently in `status`.
pub fn filter_by_status(orders: &[Order], status: OrderStatus) -> Vec<&Order> {
    orders
        .iter()
        .filter(|order| order.status == status)
        .collect()
}

/// Returns the orders matching a free-text search, after validating the
/// query at the boundary. An empty query matches everything.
pub fn search_orders<'a>(orders: &'a [Order], query: &str) -> ValidationResult<Vec<&'a Order>> {
    let query = validate_search_query(query)?;

    Ok(orders
        .iter()
        .filter(|order| order.matches_search(&query))
        .collect())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn chili_powder() -> CatalogItem {
        CatalogItem::new(
            ITEM_ID,
            "Red Chili Powder",
            "Rajesh Spices & Co.",
            Money::from_major(180),
            "kg",
            10,
            true,
        )
        .unwrap()
    }

    fn test_order(supplier: &str, total: i64, status: OrderStatus) -> Order {
        Order {
            id: ITEM_ID.to_string(),
            supplier: supplier.to_string(),
            items: vec![OrderItem {
                name: "Red Chili Powder".to_string(),
                quantity: 2,
                unit: "kg".to_string(),
                line_total: Money::from_major(total),
            }],
            total: Money::from_major(total),
            status,
            ordered_at: Utc::now(),
            expected_delivery: None,
            delivery_address: "Shop 15, Main Market, Delhi".to_string(),
        }
    }

    #[test]
    fn test_catalog_item_validates_at_construction() {
        assert!(chili_powder().effective_unit_price() == Money::from_major(162));

        assert!(CatalogItem::new(
            "not-a-uuid",
            "Red Chili Powder",
            "Rajesh Spices & Co.",
            Money::from_major(180),
            "kg",
            10,
            true,
        )
        .is_err());

        assert!(CatalogItem::new(
            ITEM_ID,
            "",
            "Rajesh Spices & Co.",
            Money::from_major(180),
            "kg",
            10,
            true,
        )
        .is_err());

        assert!(CatalogItem::new(
            ITEM_ID,
            "Red Chili Powder",
            "Rajesh Spices & Co.",
            Money::zero(),
            "kg",
            10,
            true,
        )
        .is_err());

        assert!(CatalogItem::new(
            ITEM_ID,
            "Red Chili Powder",
            "Rajesh Spices & Co.",
            Money::from_major(180),
            "kg",
            120,
            true,
        )
        .is_err());
    }

    #[test]
    fn test_can_supply() {
        let item = chili_powder().with_stock_quantity(500);
        assert!(item.can_supply(500));
        assert!(!item.can_supply(501));

        let unlimited = chili_powder();
        assert!(unlimited.can_supply(10_000));

        let out = CatalogItem {
            in_stock: false,
            ..chili_powder()
        };
        assert!(!out.can_supply(1));
    }

    #[test]
    fn test_supplier_rating_bounds() {
        let supplier = Supplier::new(
            ITEM_ID,
            "Rajesh Spices & Co.",
            "Delhi",
            4.8,
            "+91 98765 43210",
            Money::from_major(500),
            "1-2 days",
        );
        assert!(supplier.is_ok());

        let bad = Supplier::new(
            ITEM_ID,
            "Rajesh Spices & Co.",
            "Delhi",
            5.5,
            "+91 98765 43210",
            Money::from_major(500),
            "1-2 days",
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_offer_effective_price() {
        let offer = SupplierOffer::new(
            "Delhi Spice Market",
            "Red Chili Powder",
            Money::from_major(175),
            "kg",
            true,
            5,
        )
        .unwrap();

        assert_eq!(
            offer.effective_unit_price(),
            Money::new(rust_decimal::Decimal::new(16625, 2)) // 166.25
        );
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Processing.label(), "Processing");
        assert_eq!(OrderStatus::InTransit.label(), "In Transit");
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
        assert_eq!(OrderStatus::default(), OrderStatus::Processing);
    }

    #[test]
    fn test_order_search_and_filters() {
        let orders = vec![
            test_order("Rajesh Spices", 1150, OrderStatus::Delivered),
            test_order("Fresh Veggie Mart", 850, OrderStatus::InTransit),
            test_order("Golden Oil Industries", 1600, OrderStatus::Processing),
        ];

        assert_eq!(total_spent(&orders), Money::from_major(3600));
        assert_eq!(filter_by_status(&orders, OrderStatus::Delivered).len(), 1);

        let hits = search_orders(&orders, "veggie").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].supplier, "Fresh Veggie Mart");

        // Item names match too.
        let hits = search_orders(&orders, "chili").unwrap();
        assert_eq!(hits.len(), 3);

        // Empty query matches everything.
        assert_eq!(search_orders(&orders, "").unwrap().len(), 3);

        // Oversized queries are rejected at the boundary.
        assert!(search_orders(&orders, &"q".repeat(150)).is_err());
    }

    #[test]
    fn test_total_spent_empty() {
        assert_eq!(total_spent(&[]), Money::zero());
    }

    #[test]
    fn test_catalog_item_serde_round_trip() {
        let item = chili_powder().with_stock_quantity(500);
        let json = serde_json::to_string(&item).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
