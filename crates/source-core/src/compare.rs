//! # Price Comparison
//!
//! Cross-supplier comparison of effective prices for the compare screen:
//! best and worst offer per product, best-price highlighting, and the
//! best/worst/potential-savings totals over a product selection.
//!
//! Offers are joined across suppliers by `product_name`. The display name
//! doubles as the join key; a renamed product or two distinct products
//! sharing a name will mis-join.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::SupplierOffer;

/// Absolute tolerance used when comparing effective prices, so a
/// fraction-of-a-paisa representation difference never splits a tie.
pub fn price_tolerance() -> Money {
    Money::new(Decimal::new(1, 2)) // 0.01 currency units
}

/// Returns the offers for one product across the given suppliers.
///
/// Matching is by exact display name. Out-of-stock offers are included;
/// availability only gates ordering, not comparison.
pub fn offers_for(product_name: &str, offers: &[SupplierOffer]) -> Vec<SupplierOffer> {
    offers
        .iter()
        .filter(|offer| offer.product_name == product_name)
        .cloned()
        .collect()
}

/// Lowest effective unit price across the offers, or `None` when there is
/// no data. Callers must not treat an empty offer set as a price of zero.
pub fn best_price(offers: &[SupplierOffer]) -> Option<Money> {
    offers
        .iter()
        .map(SupplierOffer::effective_unit_price)
        .min()
}

/// Highest effective unit price across the offers, or `None` when there
/// is no data.
pub fn worst_price(offers: &[SupplierOffer]) -> Option<Money> {
    offers
        .iter()
        .map(SupplierOffer::effective_unit_price)
        .max()
}

/// Checks whether an offer ties the best price across the set, within
/// [`price_tolerance`].
pub fn is_best_price(offer: &SupplierOffer, offers: &[SupplierOffer]) -> bool {
    match best_price(offers) {
        Some(best) => {
            (offer.effective_unit_price() - best).abs() <= price_tolerance()
        }
        None => false,
    }
}

// =============================================================================
// Comparison Summary
// =============================================================================

/// Totals over a product selection: what the whole basket costs from the
/// cheapest offers, from the dearest, and the spread between the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonSummary {
    /// Sum of best effective prices across the compared products.
    pub best_total: Money,

    /// Sum of worst effective prices across the compared products.
    pub worst_total: Money,

    /// `worst_total - best_total`: what shopping around can save.
    pub potential_savings: Money,

    /// How many of the requested products had at least one offer.
    pub products_compared: usize,
}

/// Builds the comparison summary over the named products.
///
/// Products with no offer from any supplier are skipped rather than
/// contributing a sentinel to the totals; `products_compared` reports how
/// many actually participated.
pub fn comparison_summary(product_names: &[&str], offers: &[SupplierOffer]) -> ComparisonSummary {
    let mut best_total = Money::zero();
    let mut worst_total = Money::zero();
    let mut products_compared = 0;

    for name in product_names {
        let product_offers = offers_for(name, offers);
        if let (Some(best), Some(worst)) =
            (best_price(&product_offers), worst_price(&product_offers))
        {
            best_total += best;
            worst_total += worst;
            products_compared += 1;
        }
    }

    ComparisonSummary {
        best_total,
        worst_total,
        potential_savings: worst_total - best_total,
        products_compared,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    /// The three compare-screen suppliers and their chili powder offers:
    /// effective prices 162, 166.25, and 195.
    fn chili_offers() -> Vec<SupplierOffer> {
        vec![
            SupplierOffer::new(
                "Rajesh Spices & Co.",
                "Red Chili Powder",
                Money::from_major(180),
                "kg",
                true,
                10,
            )
            .unwrap(),
            SupplierOffer::new(
                "Delhi Spice Market",
                "Red Chili Powder",
                Money::from_major(175),
                "kg",
                true,
                5,
            )
            .unwrap(),
            SupplierOffer::new(
                "Premium Spices Ltd",
                "Red Chili Powder",
                Money::from_major(195),
                "kg",
                true,
                0,
            )
            .unwrap(),
        ]
    }

    fn turmeric_offers() -> Vec<SupplierOffer> {
        vec![
            SupplierOffer::new(
                "Rajesh Spices & Co.",
                "Turmeric Powder",
                Money::from_major(220),
                "kg",
                true,
                0,
            )
            .unwrap(),
            SupplierOffer::new(
                "Delhi Spice Market",
                "Turmeric Powder",
                Money::from_major(210),
                "kg",
                true,
                8,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn test_best_and_worst_price() {
        let offers = chili_offers();

        assert_eq!(best_price(&offers), Some(Money::from_major(162)));
        assert_eq!(worst_price(&offers), Some(Money::from_major(195)));
    }

    #[test]
    fn test_empty_offer_set_has_no_data() {
        assert_eq!(best_price(&[]), None);
        assert_eq!(worst_price(&[]), None);
    }

    #[test]
    fn test_is_best_price_only_for_cheapest() {
        let offers = chili_offers();

        assert!(is_best_price(&offers[0], &offers)); // 162
        assert!(!is_best_price(&offers[1], &offers)); // 166.25
        assert!(!is_best_price(&offers[2], &offers)); // 195
    }

    #[test]
    fn test_is_best_price_tolerates_representation_noise() {
        let mut offers = chili_offers();
        // A second supplier landing within a hundredth of the best still
        // earns the badge.
        offers.push(
            SupplierOffer::new(
                "Mumbai Spice House",
                "Red Chili Powder",
                Money::new(Decimal::new(16201, 2)), // 162.01
                "kg",
                true,
                0,
            )
            .unwrap(),
        );

        assert!(is_best_price(&offers[3], &offers));
    }

    #[test]
    fn test_is_best_price_on_empty_set() {
        let offers = chili_offers();
        assert!(!is_best_price(&offers[0], &[]));
    }

    #[test]
    fn test_offers_for_joins_on_name() {
        let mut offers = chili_offers();
        offers.extend(turmeric_offers());

        assert_eq!(offers_for("Red Chili Powder", &offers).len(), 3);
        assert_eq!(offers_for("Turmeric Powder", &offers).len(), 2);
        assert!(offers_for("Coriander Powder", &offers).is_empty());
    }

    #[test]
    fn test_out_of_stock_offers_still_compared() {
        let mut offers = chili_offers();
        offers.push(
            SupplierOffer::new(
                "Backyard Traders",
                "Red Chili Powder",
                Money::from_major(150),
                "kg",
                false, // out of stock, still the cheapest listing
                0,
            )
            .unwrap(),
        );

        assert_eq!(best_price(&offers), Some(Money::from_major(150)));
    }

    #[test]
    fn test_comparison_summary() {
        let mut offers = chili_offers();
        offers.extend(turmeric_offers());

        let summary =
            comparison_summary(&["Red Chili Powder", "Turmeric Powder"], &offers);

        // Chili 162/195, turmeric 193.2/220.
        assert_eq!(
            summary.best_total,
            Money::new(Decimal::new(3552, 1)) // 162 + 193.2
        );
        assert_eq!(summary.worst_total, Money::from_major(415)); // 195 + 220
        assert_eq!(
            summary.potential_savings,
            Money::new(Decimal::new(598, 1)) // 59.8
        );
        assert_eq!(summary.products_compared, 2);
    }

    #[test]
    fn test_comparison_summary_skips_products_without_offers() {
        let offers = chili_offers();

        let summary =
            comparison_summary(&["Red Chili Powder", "Coriander Powder"], &offers);

        assert_eq!(summary.best_total, Money::from_major(162));
        assert_eq!(summary.worst_total, Money::from_major(195));
        assert_eq!(summary.potential_savings, Money::from_major(33));
        assert_eq!(summary.products_compared, 1);
    }

    #[test]
    fn test_comparison_summary_empty_selection() {
        let summary = comparison_summary(&[], &chili_offers());

        assert_eq!(summary.best_total, Money::zero());
        assert_eq!(summary.worst_total, Money::zero());
        assert_eq!(summary.potential_savings, Money::zero());
        assert_eq!(summary.products_compared, 0);
    }
}
