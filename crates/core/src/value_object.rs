//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value with the changed fields.
///
/// - **Value Object**: `SearchState { search_text: "apple", only_show_in_stock: true }`
/// - **Entity**: `Product { id: ProductId("001"), .. }`
///
/// The `Eq + Hash` bounds let value objects act as cache keys, which is how the
/// search layer memoizes grouped views.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Price {
///     cents: u64,
/// }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { cents: 850 }, Price { cents: 850 });
/// ```
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
