//! Storefront
//!
//! The state engines behind an administrative storefront console: an order
//! ledger with derived business metrics, and a product list the operator can
//! reorder by dragging.

pub mod catalog;
pub mod console;
pub mod fixtures;
pub mod logging;
pub mod metrics;
pub mod orders;
pub mod prelude;
pub mod products;
pub mod reorder;
pub mod report;
pub mod snapshot;
pub mod utils;
