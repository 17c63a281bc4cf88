//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two discounts with the same parameter are the same discount.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// construct a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct FixedAmountDiscount {
///     amount: f64,
/// }
///
/// impl ValueObject for FixedAmountDiscount {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
