//! Utils

use std::path::PathBuf;

use clap::Parser;

use crate::{console::Intent, orders::OrderStatus};

/// Arguments for the console demo
#[derive(Debug, Parser)]
pub struct ConsoleArgs {
    /// Fixture set to seed orders & products from
    #[clap(short, long, default_value = "default", env = "STOREFRONT_FIXTURE")]
    pub fixture: String,

    /// Directory holding the `orders/` and `products/` fixture folders
    #[clap(long, default_value = "./fixtures", env = "STOREFRONT_FIXTURE_PATH")]
    pub fixture_path: PathBuf,

    /// Change an order's status, as `ORDER_ID=STATUS` (repeatable)
    #[clap(short, long = "status", value_parser = parse_status_change)]
    pub status_changes: Vec<(String, OrderStatus)>,

    /// Drag a product onto another, as `PRODUCT_ID:TARGET_ID` (repeatable)
    #[clap(short, long = "move", value_parser = parse_move)]
    pub moves: Vec<(String, String)>,

    /// Default log filter when `RUST_LOG` is unset
    #[clap(long, default_value = "info", env = "STOREFRONT_LOG")]
    pub log_level: String,
}

impl ConsoleArgs {
    /// The intents described by the arguments: status changes first, then one
    /// pick, hover and drop per move.
    pub fn intents(&self) -> Vec<Intent> {
        let status_changes = self
            .status_changes
            .iter()
            .map(|(order_id, status)| Intent::RequestStatusChange {
                order_id: order_id.clone(),
                status: *status,
            });

        let moves = self.moves.iter().flat_map(|(product_id, target_id)| {
            [
                Intent::PickForReorder {
                    product_id: product_id.clone(),
                },
                Intent::HoverOverTarget {
                    target_id: target_id.clone(),
                },
                Intent::DropOnTarget {
                    target_id: target_id.clone(),
                },
            ]
        });

        status_changes.chain(moves).collect()
    }
}

/// Parse `ORDER_ID=STATUS`.
///
/// # Errors
///
/// Returns a message if the separator is missing or the status is unknown.
pub fn parse_status_change(s: &str) -> Result<(String, OrderStatus), String> {
    let (order_id, status) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ORDER_ID=STATUS, got: {s}"))?;

    let status = status.parse::<OrderStatus>().map_err(|err| err.to_string())?;

    Ok((order_id.trim().to_string(), status))
}

/// Parse `PRODUCT_ID:TARGET_ID`.
///
/// # Errors
///
/// Returns a message if the separator is missing.
pub fn parse_move(s: &str) -> Result<(String, String), String> {
    let (product_id, target_id) = s
        .split_once(':')
        .ok_or_else(|| format!("expected PRODUCT_ID:TARGET_ID, got: {s}"))?;

    Ok((product_id.trim().to_string(), target_id.trim().to_string()))
}
