//! Product Fixtures

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, orders::parse_price},
    products::{Product, ProductStatus},
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product name
    pub name: String,

    /// Image reference
    #[serde(default)]
    pub image: String,

    /// Product price (e.g., "9999 CNY")
    pub price: String,

    /// Units in stock
    #[serde(default)]
    pub stock: u32,

    /// Units sold
    #[serde(default)]
    pub sales: u32,

    /// Average review score
    #[serde(default)]
    pub rating: f64,

    /// Category name
    #[serde(default)]
    pub category: String,

    /// Listing status
    #[serde(default)]
    pub status: ProductStatus,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            image: fixture.image,
            price: Money::from_minor(minor_units, currency),
            stock: fixture.stock,
            sales: fixture.sales,
            rating: parse_rating(fixture.rating)?,
            category: fixture.category,
            status: fixture.status,
        })
    }
}

/// Convert a review score to a decimal with one fractional digit
///
/// # Errors
///
/// Returns an error if the score is negative or not a finite number.
pub fn parse_rating(rating: f64) -> Result<Decimal, FixtureError> {
    if rating.is_sign_negative() {
        return Err(FixtureError::InvalidRating(rating));
    }

    Decimal::from_f64(rating)
        .map(|value| value.round_dp(1))
        .ok_or(FixtureError::InvalidRating(rating))
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::CNY;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_rating_keeps_one_digit() -> TestResult {
        assert_eq!(parse_rating(4.8)?, Decimal::new(48, 1));
        assert_eq!(parse_rating(4.75)?, Decimal::new(48, 1));
        assert_eq!(parse_rating(5.0)?, Decimal::new(5, 0));

        Ok(())
    }

    #[test]
    fn parse_rating_rejects_negative_and_nan() {
        assert!(matches!(parse_rating(-1.0), Err(FixtureError::InvalidRating(_))));
        assert!(matches!(parse_rating(f64::NAN), Err(FixtureError::InvalidRating(_))));
    }

    #[test]
    fn product_fixture_converts_display_fields() -> TestResult {
        let fixture: ProductFixture = serde_norway::from_str(
            "id: '2'\nname: Laptop\nprice: 8999 CNY\nstock: 0\nsales: 89\nrating: 4.9\nstatus: out-of-stock\n",
        )?;

        let product = Product::try_from(fixture)?;

        assert_eq!(product.id, "2");
        assert_eq!(product.price, Money::from_major(8999, CNY));
        assert_eq!(product.rating, Decimal::new(49, 1));
        assert_eq!(product.status, ProductStatus::OutOfStock);
        assert!(product.image.is_empty());

        Ok(())
    }
}
