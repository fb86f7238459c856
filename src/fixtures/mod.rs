//! Fixtures
//!
//! Seed data for the console, read from YAML files laid out as
//! `<base>/orders/<set>.yml` and `<base>/products/<set>.yml`.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::{CatalogError, ProductCatalog},
    console::Console,
    fixtures::{orders::OrdersFixture, products::ProductsFixture},
    orders::{LedgerError, Order, OrderLedger},
    products::Product,
};

pub mod orders;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid rating value
    #[error("Invalid rating: {0}")]
    InvalidRating(f64),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between records
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Nothing loaded yet
    #[error("No orders or products loaded yet; currency unknown")]
    NoCurrency,

    /// Orders could not be seeded into a ledger
    #[error("Failed to create ledger: {0}")]
    Ledger(#[from] LedgerError),

    /// Products could not be seeded into a catalog
    #[error("Failed to create catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Orders in file order
    orders: Vec<Order<'static>>,

    /// Products in file order
    products: Vec<Product<'static>>,

    /// Currency shared by every amount and price in the set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            orders: Vec::new(),
            products: Vec::new(),
            currency: None,
        }
    }

    /// Load orders from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if an amount
    /// uses a different currency from what was loaded before.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: OrdersFixture = serde_norway::from_str(&contents)?;

        for order_fixture in fixture.orders {
            let order = Order::try_from(order_fixture)?;

            self.check_currency(order.amount.currency())?;
            self.orders.push(order);
        }

        debug!(path = %file_path.display(), orders = self.orders.len(), "loaded order fixtures");

        Ok(self)
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a price
    /// uses a different currency from what was loaded before.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ProductsFixture = serde_norway::from_str(&contents)?;

        for product_fixture in fixture.products {
            let product = Product::try_from(product_fixture)?;

            self.check_currency(product.price.currency())?;
            self.products.push(product);
        }

        debug!(path = %file_path.display(), products = self.products.len(), "loaded product fixtures");

        Ok(self)
    }

    /// Load a complete fixture set (orders and products with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_at("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_at(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_orders(name)?.load_products(name)?;

        Ok(fixture)
    }

    /// Build an order ledger from the loaded orders
    ///
    /// # Errors
    ///
    /// Returns an error if nothing has been loaded, or if the orders break a
    /// ledger invariant such as unique ids.
    pub fn ledger(&self) -> Result<OrderLedger<'static>, FixtureError> {
        let currency = self.currency()?;

        Ok(OrderLedger::with_orders(self.orders.clone(), currency)?)
    }

    /// Build a product catalog from the loaded products
    ///
    /// # Errors
    ///
    /// Returns an error if two products share an id.
    pub fn catalog(&self) -> Result<ProductCatalog<'static>, FixtureError> {
        Ok(ProductCatalog::with_products(self.products.iter().cloned())?)
    }

    /// Build a console over the loaded orders and products
    ///
    /// # Errors
    ///
    /// Returns an error if either the ledger or the catalog cannot be built.
    pub fn console(&self) -> Result<Console<'static>, FixtureError> {
        Ok(Console::new(self.ledger()?, self.catalog()?))
    }

    /// Get all orders
    pub fn orders(&self) -> &[Order<'static>] {
        &self.orders
    }

    /// Get all products
    pub fn products(&self) -> &[Product<'static>] {
        &self.products
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no orders or products have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn check_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);
                Ok(())
            }
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
