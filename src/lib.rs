// ============================================================================
// Pricing Engine Library
// Overflow-checked pricing arithmetic with config-driven batch scaling
// ============================================================================

//! # Pricing Engine
//!
//! Bounded arithmetic utilities for pricing-style computations.
//!
//! ## Features
//!
//! - **Overflow-checked multiplication** with two detection techniques
//!   (inverse check and division-bound pre-check)
//! - **Validated discount calculation** with a multiplicative member rate
//! - **Config-driven batch scaling** of sequences and mappings, reading the
//!   scale factor fresh from a plain-text file on every call
//! - **Structured errors** distinguishable by kind, with an inner-cause
//!   chain for config failures
//!
//! ## Example
//!
//! ```rust
//! use pricing_engine::prelude::*;
//!
//! // Checked arithmetic over the 32-bit domain
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(divide(8, 2).unwrap(), 4);
//! assert!(checked_multiply(i32::MAX, 2).is_err());
//!
//! // Discount calculation: 10% base, then the 5% member rate
//! let price = calculate_discount(100.0, 10.0, true).unwrap();
//! assert!((price - 85.5).abs() < 1e-9);
//!
//! // Config-driven scaling
//! let dir = std::env::temp_dir().join("pricing-engine-doc");
//! std::fs::create_dir_all(&dir).unwrap();
//! let config = dir.join("multiplier.txt");
//! std::fs::write(&config, "2").unwrap();
//! assert_eq!(multiply_slice(&[1, 2, 3], &config).unwrap(), vec![2, 4, 6]);
//! ```

pub mod numeric;
pub mod pricing;
pub mod scaling;

// Re-exports for convenience
pub mod prelude {
    pub use crate::numeric::{
        add, checked_multiply, checked_multiply_ranged, divide, is_positive, multiply, subtract,
        ElementRef, NumericError, NumericErrorKind, NumericResult,
    };
    pub use crate::pricing::{calculate_discount, MEMBER_RATE};
    pub use crate::scaling::{multiply_map, multiply_slice, multiply_with_config};
}
