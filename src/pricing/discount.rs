// ============================================================================
// Discount Calculation
// Validated percentage discount with a flat member rate
// ============================================================================

use crate::numeric::{NumericError, NumericResult};

/// Fraction of the discounted price a member pays (5% off, applied
/// multiplicatively after the base discount).
pub const MEMBER_RATE: f64 = 0.95;

/// Price after applying a percentage discount, and the member rate when
/// `is_member` is set.
///
/// The base discount and the member discount compose multiplicatively:
/// `price * (1 - discount_percent / 100)`, then `* MEMBER_RATE` for
/// members. The result carries natural `f64` precision; no rounding is
/// applied.
///
/// # Errors
/// Returns `InvalidInput` carrying the offending value when `price < 0` or
/// `discount_percent` lies outside `[0, 100]`.
pub fn calculate_discount(price: f64, discount_percent: f64, is_member: bool) -> NumericResult<f64> {
    if price < 0.0 {
        return Err(NumericError::InvalidInput { value: price });
    }
    if !(0.0..=100.0).contains(&discount_percent) {
        return Err(NumericError::InvalidInput {
            value: discount_percent,
        });
    }

    let discounted = price * (1.0 - discount_percent / 100.0);
    if is_member {
        Ok(discounted * MEMBER_RATE)
    } else {
        Ok(discounted)
    }
}
