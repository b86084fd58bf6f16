// ============================================================================
// Numeric Module
// Bounded integer arithmetic with overflow detection
// ============================================================================
//
// This module provides:
// - Scalar operations: add, subtract, divide, multiply, is_positive
// - Two checked-multiply variants with different detection techniques
// - NumericError: the error taxonomy shared by every operation
//
// Design principles:
// - The working domain is i32; bound computations widen to i64 internally
// - Unchecked operations wrap; checked operations return Result
// - Errors are constructed at the detection site and never retried

mod errors;
mod ops;

pub use errors::{ElementRef, NumericError, NumericErrorKind, NumericResult};
pub use ops::{
    add, checked_multiply, checked_multiply_ranged, divide, is_positive, multiply, subtract,
};
