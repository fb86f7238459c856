//! Order Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{CNY, Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    orders::{Customer, Order, OrderStatus},
};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Orders, in ledger order
    pub orders: Vec<OrderFixture>,
}

/// Customer Fixture
#[derive(Debug, Deserialize)]
pub struct CustomerFixture {
    /// Customer name
    pub name: String,

    /// Avatar image reference
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order id
    pub id: String,

    /// Customer
    pub customer: CustomerFixture,

    /// Initial status
    #[serde(default)]
    pub status: OrderStatus,

    /// Order amount (e.g., "2999 CNY")
    pub amount: String,

    /// Display date
    #[serde(default)]
    pub date: String,

    /// Line item count
    #[serde(default)]
    pub items: u32,
}

impl TryFrom<OrderFixture> for Order<'_> {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.amount)?;

        Ok(Order {
            id: fixture.id,
            customer: Customer {
                name: fixture.customer.name,
                avatar: fixture.customer.avatar,
            },
            status: fixture.status,
            amount: Money::from_minor(minor_units, currency),
            date: fixture.date,
            items: fixture.items,
        })
    }
}

/// Parse price string (e.g., "2999 CNY") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code is
/// not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "CNY" => CNY,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_reads_whole_and_fractional_amounts() -> TestResult {
        assert_eq!(parse_price("2999 CNY")?, (299_900, CNY));
        assert_eq!(parse_price("2.99 GBP")?, (299, GBP));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        let result = parse_price("2.99GBP");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("2.99 ABC");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn parse_price_rejects_negative_amounts() {
        let result = parse_price("-5 CNY");

        assert!(matches!(result, Err(FixtureError::InvalidPrice(_))));
    }

    #[test]
    fn order_fixture_defaults_to_pending() -> TestResult {
        let fixture: OrderFixture =
            serde_norway::from_str("id: ORD-9\ncustomer:\n  name: Wang Wu\namount: 1599 CNY\n")?;

        let order = Order::try_from(fixture)?;

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.amount, Money::from_major(1599, CNY));
        assert_eq!(order.customer.avatar, None);
        assert_eq!(order.items, 0);

        Ok(())
    }
}
