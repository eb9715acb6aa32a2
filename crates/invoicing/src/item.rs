use serde::{Deserialize, Serialize};

use difactura_core::ValueObject;

/// Catalogue product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Price in smallest currency unit.
    pub price: i64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl ValueObject for Product {}

/// Invoice line: a product and how many units of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub product: Product,
    pub quantity: i64,
}

impl Item {
    pub fn new(product: Product, quantity: i64) -> Self {
        Self { product, quantity }
    }

    /// Single-unit line whose amount is exactly `importe`.
    pub fn with_importe(name: impl Into<String>, importe: i64) -> Self {
        Self::new(Product::new(name, importe), 1)
    }

    /// Line amount: `price * quantity`.
    ///
    /// Overflow is not checked: it panics in debug builds and wraps in
    /// release builds.
    pub fn importe(&self) -> i64 {
        self.product.price * self.quantity
    }
}

impl ValueObject for Item {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn importe_is_price_times_quantity() {
        let item = Item::new(Product::new("Camara Sony", 800), 2);
        assert_eq!(item.importe(), 1600);
    }

    #[test]
    fn with_importe_is_a_single_unit() {
        let item = Item::with_importe("Bicicleta", 1200);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.importe(), 1200);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "overflow")]
    fn importe_overflow_panics_in_debug_builds() {
        let item = Item::new(Product::new("Satelite", i64::MAX), 2);
        let _ = item.importe();
    }

    #[test]
    fn zero_quantity_has_zero_importe() {
        let item = Item::new(Product::new("Notebook", 2100), 0);
        assert_eq!(item.importe(), 0);
    }
}
