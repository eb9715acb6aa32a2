//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are compared by their attribute
/// values. To "modify" one, build a new one:
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Product {
///     name: String,
///     price: i64,
/// }
///
/// impl ValueObject for Product {}
///
/// let a = Product { name: "Teclado".to_string(), price: 40 };
/// let b = Product { name: "Teclado".to_string(), price: 40 };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
