//! Products

use std::fmt;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use slotmap::new_key_type;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// Listing status of a product.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductStatus {
    /// Listed and purchasable
    #[default]
    Active,

    /// Delisted by the operator
    Inactive,

    /// Listed, but no stock left
    OutOfStock,
}

impl ProductStatus {
    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OutOfStock => "Out of stock",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product
///
/// Everything except `id` is display data; reordering never looks at it.
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product identifier, unique within a catalog
    pub id: String,

    /// Product name
    pub name: String,

    /// Image reference
    pub image: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Units in stock
    pub stock: u32,

    /// Units sold
    pub sales: u32,

    /// Average review score
    pub rating: Decimal,

    /// Category name
    pub category: String,

    /// Listing status
    pub status: ProductStatus,
}

impl<'a> Product<'a> {
    /// Create an active product with no image, stock, sales or rating.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: String::new(),
            price,
            stock: 0,
            sales: 0,
            rating: Decimal::ZERO,
            category: String::new(),
            status: ProductStatus::Active,
        }
    }

    /// Set the category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the listing status.
    #[must_use]
    pub fn with_status(mut self, status: ProductStatus) -> Self {
        self.status = status;
        self
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::CNY;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_product_is_active() {
        let product = Product::new("1", "Phone", Money::from_major(9999, CNY));

        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.rating, Decimal::ZERO);
    }

    #[test]
    fn status_deserializes_from_kebab_case() -> TestResult {
        let status: ProductStatus = serde_norway::from_str("out-of-stock")?;

        assert_eq!(status, ProductStatus::OutOfStock);
        assert_eq!(status.to_string(), "Out of stock");

        Ok(())
    }
}
