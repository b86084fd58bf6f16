// ============================================================================
// Scaling Module
// Config-driven batch scaling of sequences and mappings
// ============================================================================
//
// The scale factor is a single integer stored as whitespace-trimmed decimal
// text in an external file, re-read on every invocation. Batch operations
// reject empty inputs up front and fail atomically on the first element
// whose scaled value would leave the 32-bit range.

mod batch;
mod multiplier;

pub use batch::{multiply_map, multiply_slice};
pub use multiplier::multiply_with_config;
