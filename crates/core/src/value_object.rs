//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects built from the same values are equal.

use core::any::Any;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new instance with the changed attribute.
///
/// ## Requirements
///
/// - **Clone**: values are copied, never shared by reference for mutation
/// - **PartialEq**: comparison goes through every attribute
/// - **Debug**: values show up in logs and test failures
///
/// Deriving `PartialEq` is the expected way to satisfy the equality contract:
/// the derive compares fields in declaration order and stops at the first
/// difference.
///
/// ## Usage Pattern
///
/// ```
/// use ruleval_core::ValueObject;
///
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(m1, m2);
/// assert!(!m1.same_instance(&m2));
/// assert!(!m1.value_eq(&"USD"));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {
    /// Compare against a value of any type.
    ///
    /// Returns `false` when `other` is not a `Self`, otherwise defers to `==`.
    fn value_eq(&self, other: &dyn Any) -> bool
    where
        Self: Sized + 'static,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Identity comparison: true only when both references point at the same
    /// instance.
    fn same_instance(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        core::ptr::eq(self, other)
    }
}
