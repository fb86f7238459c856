//! Console
//!
//! The in-process boundary a presentation layer talks to. It forwards operator
//! intents to the order ledger and the product catalog, and exposes the data a
//! dashboard re-renders after every change.

use tracing::debug;

use crate::{
    catalog::ProductCatalog,
    metrics::OrderMetrics,
    orders::{Order, OrderLedger, OrderStatus, TransitionPolicy, Unrestricted},
};

/// Number of orders shown in the dashboard's recent orders list.
pub const RECENT_ORDERS: usize = 5;

/// An operator action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Change an order's status.
    RequestStatusChange {
        /// Order to change
        order_id: String,
        /// Requested status
        status: OrderStatus,
    },

    /// Start dragging a product.
    PickForReorder {
        /// Product being dragged
        product_id: String,
    },

    /// The dragged product is over another product.
    HoverOverTarget {
        /// Product under the pointer
        target_id: String,
    },

    /// Release the dragged product on another product.
    DropOnTarget {
        /// Product the drop landed on
        target_id: String,
    },

    /// Release the dragged product outside any target.
    CancelReorder,
}

/// Everything the dashboard shows, computed from the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    /// Aggregate order metrics
    pub metrics: OrderMetrics<'a>,

    /// The first orders in ledger order
    pub recent_orders: Vec<Order<'a>>,
}

/// Owns one order ledger and one product catalog.
#[derive(Debug, Clone)]
pub struct Console<'a, P: TransitionPolicy = Unrestricted> {
    ledger: OrderLedger<'a, P>,
    catalog: ProductCatalog<'a>,
}

impl<'a, P: TransitionPolicy> Console<'a, P> {
    /// Create a console over the given ledger and catalog.
    pub fn new(ledger: OrderLedger<'a, P>, catalog: ProductCatalog<'a>) -> Self {
        Self { ledger, catalog }
    }

    /// Apply an intent. Returns true if any state changed.
    ///
    /// Intents that refer to unknown orders or products, or that arrive out of
    /// gesture order, change nothing.
    pub fn dispatch(&mut self, intent: Intent) -> bool {
        debug!(?intent, "dispatching intent");

        match intent {
            Intent::RequestStatusChange { order_id, status } => {
                self.ledger.apply(&order_id, status).is_applied()
            }
            Intent::PickForReorder { product_id } => {
                self.catalog.pick(&product_id);
                false
            }
            Intent::HoverOverTarget { target_id } => {
                self.catalog.hover(&target_id);
                false
            }
            Intent::DropOnTarget { target_id } => self.catalog.drop_on(&target_id),
            Intent::CancelReorder => {
                self.catalog.cancel();
                false
            }
        }
    }

    /// Metrics and recent orders for the dashboard.
    pub fn dashboard(&self) -> Dashboard<'a> {
        Dashboard {
            metrics: self.metrics(),
            recent_orders: self.ledger.recent(RECENT_ORDERS).cloned().collect(),
        }
    }

    /// Aggregate metrics over the current orders.
    pub fn metrics(&self) -> OrderMetrics<'a> {
        self.ledger.metrics()
    }

    /// The order ledger.
    pub fn ledger(&self) -> &OrderLedger<'a, P> {
        &self.ledger
    }

    /// The product catalog.
    pub fn catalog(&self) -> &ProductCatalog<'a> {
        &self.catalog
    }

    /// Split the console back into its engines.
    pub fn into_parts(self) -> (OrderLedger<'a, P>, ProductCatalog<'a>) {
        (self.ledger, self.catalog)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::CNY};
    use testresult::TestResult;

    use crate::{orders::Customer, products::Product};

    use super::*;

    fn console() -> TestResult<Console<'static>> {
        let orders = (1..=7).map(|n| {
            Order::new(n.to_string(), Customer::new("Customer"), Money::from_major(n * 10, CNY))
        });

        let ledger = OrderLedger::with_orders(orders.collect::<Vec<_>>(), CNY)?;
        let catalog = ProductCatalog::with_products(
            ["A", "B", "C"].map(|id| Product::new(id, id, Money::from_major(1, CNY))),
        )?;

        Ok(Console::new(ledger, catalog))
    }

    #[test]
    fn status_change_intent_updates_metrics() -> TestResult {
        let mut console = console()?;

        let changed = console.dispatch(Intent::RequestStatusChange {
            order_id: "3".to_string(),
            status: OrderStatus::Completed,
        });

        assert!(changed);
        assert_eq!(console.metrics().completed_orders, 1);
        assert_eq!(console.metrics().total_revenue, Money::from_major(30, CNY));

        Ok(())
    }

    #[test]
    fn unknown_order_intent_changes_nothing() -> TestResult {
        let mut console = console()?;
        let before = console.dashboard();

        let changed = console.dispatch(Intent::RequestStatusChange {
            order_id: "missing-id".to_string(),
            status: OrderStatus::Completed,
        });

        assert!(!changed);
        assert_eq!(console.dashboard(), before);

        Ok(())
    }

    #[test]
    fn reorder_intents_move_products() -> TestResult {
        let mut console = console()?;

        let intents = [
            Intent::PickForReorder {
                product_id: "C".to_string(),
            },
            Intent::HoverOverTarget {
                target_id: "B".to_string(),
            },
            Intent::HoverOverTarget {
                target_id: "A".to_string(),
            },
        ];

        for intent in intents {
            assert!(!console.dispatch(intent));
        }

        assert_eq!(console.catalog().ids(), ["A", "B", "C"]);

        let moved = console.dispatch(Intent::DropOnTarget {
            target_id: "A".to_string(),
        });

        assert!(moved);
        assert_eq!(console.catalog().ids(), ["C", "A", "B"]);

        Ok(())
    }

    #[test]
    fn cancelled_reorder_ignores_the_drop() -> TestResult {
        let mut console = console()?;

        console.dispatch(Intent::PickForReorder {
            product_id: "C".to_string(),
        });
        console.dispatch(Intent::CancelReorder);

        let moved = console.dispatch(Intent::DropOnTarget {
            target_id: "A".to_string(),
        });

        assert!(!moved);
        assert_eq!(console.catalog().ids(), ["A", "B", "C"]);

        Ok(())
    }

    #[test]
    fn dashboard_lists_the_first_five_orders() -> TestResult {
        let console = console()?;

        let dashboard = console.dashboard();
        let ids: Vec<&str> = dashboard
            .recent_orders
            .iter()
            .map(|order| order.id.as_str())
            .collect();

        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
        assert_eq!(dashboard.metrics.total_orders, 7);
        assert_eq!(dashboard.metrics.pending_orders, 7);

        Ok(())
    }
}
