//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{CatalogError, ProductCatalog},
    console::{Console, Dashboard, Intent, RECENT_ORDERS},
    fixtures::{Fixture, FixtureError},
    metrics::{OrderMetrics, compute_metrics},
    orders::{
        Customer, LedgerError, Order, OrderLedger, OrderStatus, PendingOnly, TransitionOutcome,
        TransitionPolicy, Unrestricted,
    },
    products::{Product, ProductKey, ProductStatus},
    reorder::{DragGesture, OrderableCollection, ReorderError, reposition},
    report::ReportError,
    snapshot::Snapshot,
};
