// ============================================================================
// Pricing Module
// Discount calculation over validated inputs
// ============================================================================

mod discount;

pub use discount::{calculate_discount, MEMBER_RATE};
