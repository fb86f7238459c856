//! Order Status

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Error returned when parsing an unknown status name.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown order status: {0}")]
pub struct OrderStatusParseError(pub String);

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    /// Awaiting operator action
    #[default]
    Pending,

    /// Fulfilled, counts towards revenue
    Completed,

    /// Abandoned
    Cancelled,
}

impl OrderStatus {
    /// Every status, in display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    /// Machine name, as used in fixtures and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Returns true for `Completed` and `Cancelled`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = OrderStatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();

        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| OrderStatusParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_machine_names() -> TestResult {
        assert_eq!("pending".parse::<OrderStatus>()?, OrderStatus::Pending);
        assert_eq!(" Completed ".parse::<OrderStatus>()?, OrderStatus::Completed);
        assert_eq!("CANCELLED".parse::<OrderStatus>()?, OrderStatus::Cancelled);

        Ok(())
    }

    #[test]
    fn rejects_unknown_names() {
        let result = "shipped".parse::<OrderStatus>();

        assert_eq!(result, Err(OrderStatusParseError("shipped".to_string())));
    }

    #[test]
    fn display_round_trips_through_from_str() -> TestResult {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>()?, status);
        }

        Ok(())
    }

    #[test]
    fn only_pending_is_not_terminal() {
        assert!(!OrderStatus::Pending.is_terminal());
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn deserializes_from_kebab_case() -> TestResult {
        let status: OrderStatus = serde_norway::from_str("completed")?;

        assert_eq!(status, OrderStatus::Completed);

        Ok(())
    }
}
