//! Promo code redemption.
//!
//! One code is live: `FIRST10`, 10% off a vendor's first order. Redemption
//! validates the code and hands the discount back to the caller; it does
//! not touch cart totals itself.

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::DiscountPercent;

/// The first-order promo code.
pub const FIRST_ORDER_CODE: &str = "FIRST10";

/// Discount granted by [`FIRST_ORDER_CODE`], in whole percent.
pub const FIRST_ORDER_PERCENT: u32 = 10;

/// Redeems a promo code, case-insensitively.
///
/// ## Example
/// ```rust
/// use source_core::promo::redeem;
///
/// assert_eq!(redeem("first10").unwrap().percent(), 10);
/// assert!(redeem("SAVE99").is_err());
/// ```
pub fn redeem(code: &str) -> CoreResult<DiscountPercent> {
    let entered = code.trim();
    debug!(code = %entered, "promo code redemption attempted");

    if entered.eq_ignore_ascii_case(FIRST_ORDER_CODE) {
        Ok(DiscountPercent::new(FIRST_ORDER_PERCENT)?)
    } else {
        Err(CoreError::InvalidPromoCode(entered.to_string()))
    }
}
