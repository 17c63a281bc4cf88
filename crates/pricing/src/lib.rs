//! Pricing domain module: discounts.
//!
//! New kinds of discount are added by implementing [`Discount`]; code that
//! applies a discount through `&dyn Discount` never changes (open/closed).

pub mod discount;

pub use discount::{Discount, FixedAmountDiscount, PercentageDiscount};
