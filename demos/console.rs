//! Console Example
//!
//! Seeds a console from a fixture set, applies the intents given on the
//! command line and prints the resulting dashboard and product list.
//!
//! Use `-f` to load a fixture set by name
//! Use `-s ORDER_ID=STATUS` to change an order's status
//! Use `-m PRODUCT_ID:TARGET_ID` to drag a product onto another

use std::io;

use anyhow::Result;

use clap::Parser;
use storefront::{
    fixtures::Fixture,
    logging::init_logging,
    report::{write_dashboard, write_orders, write_products},
    utils::ConsoleArgs,
};
use tracing::info;

/// Console Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = ConsoleArgs::parse();

    init_logging(&args.log_level)?;

    let fixture = Fixture::from_set_at(&args.fixture_path, &args.fixture)?;
    let mut console = fixture.console()?;

    info!(
        fixture = %args.fixture,
        orders = console.ledger().len(),
        products = console.catalog().len(),
        "console seeded"
    );

    for intent in args.intents() {
        console.dispatch(intent);
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    println!("\nDashboard\n");
    write_dashboard(&mut handle, &console.dashboard())?;

    println!("\nOrders\n");
    write_orders(&mut handle, &console.ledger().snapshot())?;

    println!("\nProducts\n");
    write_products(&mut handle, console.catalog())?;

    Ok(())
}
