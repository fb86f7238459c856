//! Orders

use rusty_money::{Money, iso::Currency};

pub mod ledger;
pub mod policy;
pub mod status;

pub use self::{
    ledger::{LedgerError, OrderLedger, TransitionOutcome},
    policy::{PendingOnly, TransitionPolicy, Unrestricted},
    status::{OrderStatus, OrderStatusParseError},
};

/// Customer display data attached to an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Customer name
    pub name: String,

    /// Avatar image reference
    pub avatar: Option<String>,
}

impl Customer {
    /// Create a customer with no avatar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }

    /// Attach an avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

/// A customer purchase record tracked through a status lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    /// Order identifier, unique within a ledger
    pub id: String,

    /// Who placed the order
    pub customer: Customer,

    /// Current lifecycle status
    pub status: OrderStatus,

    /// Order value
    pub amount: Money<'a, Currency>,

    /// Display date, never interpreted
    pub date: String,

    /// Number of line items
    pub items: u32,
}

impl<'a> Order<'a> {
    /// Create a pending order with no date and no line items.
    pub fn new(
        id: impl Into<String>,
        customer: Customer,
        amount: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            customer,
            status: OrderStatus::Pending,
            amount,
            date: String::new(),
            items: 0,
        }
    }

    /// Set the initial status.
    #[must_use]
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the display date.
    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the line item count.
    #[must_use]
    pub fn with_items(mut self, items: u32) -> Self {
        self.items = items;
        self
    }

    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }
}
