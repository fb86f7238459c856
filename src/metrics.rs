//! Metrics

use rusty_money::{Money, iso::Currency};

use crate::orders::{Order, OrderStatus};

/// Summary statistics derived from an order set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderMetrics<'a> {
    /// Sum of the amounts of completed orders
    pub total_revenue: Money<'a, Currency>,

    /// Number of orders
    pub total_orders: usize,

    /// Number of pending orders
    pub pending_orders: usize,

    /// Number of completed orders
    pub completed_orders: usize,

    /// Number of cancelled orders
    pub cancelled_orders: usize,
}

impl<'a> OrderMetrics<'a> {
    /// Metrics of an empty order set.
    pub fn empty(currency: &'a Currency) -> Self {
        Self {
            total_revenue: Money::from_minor(0, currency),
            total_orders: 0,
            pending_orders: 0,
            completed_orders: 0,
            cancelled_orders: 0,
        }
    }

    /// Number of orders in `status`.
    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending_orders,
            OrderStatus::Completed => self.completed_orders,
            OrderStatus::Cancelled => self.cancelled_orders,
        }
    }
}

/// Computes aggregate metrics over a set of orders.
///
/// Revenue only counts completed orders and is expressed in `currency`; the
/// amounts are assumed to already be in that currency.
pub fn compute_metrics<'a>(orders: &[Order<'_>], currency: &'a Currency) -> OrderMetrics<'a> {
    let mut metrics = OrderMetrics::empty(currency);
    let mut revenue_minor: i64 = 0;

    for order in orders {
        metrics.total_orders += 1;

        match order.status {
            OrderStatus::Pending => metrics.pending_orders += 1,
            OrderStatus::Completed => {
                metrics.completed_orders += 1;
                revenue_minor = revenue_minor.saturating_add(order.amount.to_minor_units());
            }
            OrderStatus::Cancelled => metrics.cancelled_orders += 1,
        }
    }

    metrics.total_revenue = Money::from_minor(revenue_minor, currency);

    metrics
}
