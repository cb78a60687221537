//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry **no identity**: two instances holding the same
/// attribute values are interchangeable. Unlike the textbook definition, a
/// catalog value object may expose mutators; equality is still purely by value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money {
///     amount: f64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
