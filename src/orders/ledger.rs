//! Order Ledger

use rustc_hash::FxHashSet;
use rusty_money::iso::Currency;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{
    metrics::{OrderMetrics, compute_metrics},
    snapshot::Snapshot,
};

use super::{
    Order,
    policy::{TransitionPolicy, Unrestricted},
    status::OrderStatus,
};

/// Errors raised while seeding a ledger.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    /// An order's currency differs from the ledger currency (index, order currency, ledger currency).
    #[error("Order {0} has currency {1}, but ledger has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// Two orders share the same id.
    #[error("Duplicate order id: {0}")]
    DuplicateOrder(String),

    /// An order has a negative amount.
    #[error("Order {0} has a negative amount")]
    NegativeAmount(String),
}

/// What a status change request did to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The order's status was replaced.
    Applied {
        /// Status before the change
        from: OrderStatus,
        /// Status after the change
        to: OrderStatus,
    },

    /// The order already had the requested status.
    Unchanged,

    /// No order has the requested id.
    NotFound,

    /// The ledger's policy declined the transition.
    Rejected {
        /// Current status
        from: OrderStatus,
        /// Requested status
        to: OrderStatus,
    },
}

impl TransitionOutcome {
    /// Returns true if the ledger state changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Owns the authoritative set of orders.
///
/// Status changes are the only mutation. Every change leaves previously
/// handed-out snapshots untouched, and metrics are always derived from the
/// current set rather than maintained alongside it.
#[derive(Debug, Clone)]
pub struct OrderLedger<'a, P: TransitionPolicy = Unrestricted> {
    orders: Snapshot<Order<'a>>,
    currency: &'a Currency,
    policy: P,
}

impl<'a> OrderLedger<'a> {
    /// Create an empty ledger in the given currency.
    pub fn new(currency: &'a Currency) -> Self {
        OrderLedger {
            orders: Snapshot::default(),
            currency,
            policy: Unrestricted,
        }
    }

    /// Create a ledger seeded with orders, kept in the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if an order has a different currency, a negative
    /// amount, or an id already used by an earlier order.
    pub fn with_orders(
        orders: impl Into<Vec<Order<'a>>>,
        currency: &'a Currency,
    ) -> Result<Self, LedgerError> {
        let orders = orders.into();
        let mut seen = FxHashSet::default();

        for (i, order) in orders.iter().enumerate() {
            let order_currency = order.amount.currency();

            if order_currency != currency {
                return Err(LedgerError::CurrencyMismatch(
                    i,
                    order_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if order.amount.is_negative() {
                return Err(LedgerError::NegativeAmount(order.id.clone()));
            }

            if !seen.insert(order.id.as_str()) {
                return Err(LedgerError::DuplicateOrder(order.id.clone()));
            }
        }

        Ok(OrderLedger {
            orders: Snapshot::new(orders),
            currency,
            policy: Unrestricted,
        })
    }
}

impl<'a, P: TransitionPolicy> OrderLedger<'a, P> {
    /// Replace the transition policy, keeping the orders.
    pub fn with_policy<Q: TransitionPolicy>(self, policy: Q) -> OrderLedger<'a, Q> {
        OrderLedger {
            orders: self.orders,
            currency: self.currency,
            policy,
        }
    }

    /// Set an order's status and return the resulting order set.
    ///
    /// Unknown ids and transitions declined by the policy leave the ledger
    /// unchanged; neither is reported as an error.
    pub fn transition(&mut self, order_id: &str, status: OrderStatus) -> Snapshot<Order<'a>> {
        self.apply(order_id, status);
        self.snapshot()
    }

    /// Set an order's status and report what happened.
    pub fn apply(&mut self, order_id: &str, status: OrderStatus) -> TransitionOutcome {
        let Some(from) = self.get(order_id).map(Order::status) else {
            trace!(order_id, to = %status, "status change ignored, unknown order");
            return TransitionOutcome::NotFound;
        };

        if from == status {
            trace!(order_id, status = %status, "status change ignored, already set");
            return TransitionOutcome::Unchanged;
        }

        if !self.policy.permits(from, status) {
            warn!(order_id, from = %from, to = %status, "status change rejected by policy");
            return TransitionOutcome::Rejected { from, to: status };
        }

        if let Some(order) = self
            .orders
            .make_mut()
            .iter_mut()
            .find(|order| order.id == order_id)
        {
            order.status = status;
        }

        debug!(order_id, from = %from, to = %status, "order status changed");

        TransitionOutcome::Applied { from, to: status }
    }

    /// Aggregate metrics over the current order set.
    pub fn metrics(&self) -> OrderMetrics<'a> {
        compute_metrics(&self.orders, self.currency)
    }

    /// A read-only view of the current orders.
    pub fn snapshot(&self) -> Snapshot<Order<'a>> {
        self.orders.clone()
    }

    /// Find an order by id.
    pub fn get(&self, order_id: &str) -> Option<&Order<'a>> {
        self.orders.iter().find(|order| order.id == order_id)
    }

    /// Iterate over the orders in ledger order.
    pub fn iter(&self) -> impl Iterator<Item = &Order<'a>> {
        self.orders.iter()
    }

    /// The first `n` orders in ledger order.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Order<'a>> {
        self.orders.iter().take(n)
    }

    /// Iterate over the orders currently in `status`.
    pub fn with_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order<'a>> {
        self.orders
            .iter()
            .filter(move |order| order.status == status)
    }

    /// Get the number of orders.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if the ledger has no orders.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Get the currency of the ledger.
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Get the transition policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }
}
