//! Transition Policies
//!
//! The ledger asks its policy before changing an order's status. A transition
//! the policy declines is dropped silently, the same way an unknown order id is.

use std::fmt::Debug;

use super::status::OrderStatus;

/// Decides which status transitions the ledger applies.
pub trait TransitionPolicy: Debug {
    /// Returns true if an order may move from `from` to `to`.
    fn permits(&self, from: OrderStatus, to: OrderStatus) -> bool;
}

/// Every status is reachable from every other status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unrestricted;

impl TransitionPolicy for Unrestricted {
    fn permits(&self, _from: OrderStatus, _to: OrderStatus) -> bool {
        true
    }
}

/// Only pending orders may be completed or cancelled.
///
/// Re-applying an order's current status is always allowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingOnly;

impl TransitionPolicy for PendingOnly {
    fn permits(&self, from: OrderStatus, to: OrderStatus) -> bool {
        from == to || from == OrderStatus::Pending
    }
}

impl<P: TransitionPolicy + ?Sized> TransitionPolicy for &P {
    fn permits(&self, from: OrderStatus, to: OrderStatus) -> bool {
        (**self).permits(from, to)
    }
}

impl<P: TransitionPolicy + ?Sized> TransitionPolicy for Box<P> {
    fn permits(&self, from: OrderStatus, to: OrderStatus) -> bool {
        (**self).permits(from, to)
    }
}
