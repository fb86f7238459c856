//! Report
//!
//! Plain-text rendering of console state, for the demo binary and for
//! inspecting fixtures.

use std::io;

use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    catalog::ProductCatalog,
    console::Dashboard,
    metrics::OrderMetrics,
    orders::{Order, OrderStatus},
};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Writing to the output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Write the orders as a table, in the given order.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to `out` fails.
pub fn write_orders(mut out: impl io::Write, orders: &[Order<'_>]) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record(["Order", "Customer", "Status", "Amount", "Items", "Date"]);

    let mut status_colors = Vec::new();

    for (idx, order) in orders.iter().enumerate() {
        builder.push_record([
            order.id.clone(),
            order.customer.name.clone(),
            order.status.label().to_string(),
            order.amount.to_string(),
            order.items.to_string(),
            order.date.clone(),
        ]);

        status_colors.push((idx + 1, status_color(order.status)));
    }

    let mut table = builder.build();

    table.with(theme());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..5), Alignment::right());

    for (row, color) in status_colors {
        table.modify((row, 2), color);
    }

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the catalog's products as a table, in display order.
///
/// The product being dragged, if any, is marked in the first column.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to `out` fails.
pub fn write_products(mut out: impl io::Write, catalog: &ProductCatalog<'_>) -> Result<(), ReportError> {
    let mut builder = Builder::default();

    builder.push_record([
        "#", "Product", "Category", "Price", "Stock", "Sales", "Rating", "Status",
    ]);

    let dragged = catalog.dragged().map(|product| product.id.as_str());

    for (idx, product) in catalog.iter().enumerate() {
        let position = if dragged == Some(product.id.as_str()) {
            format!("{}*", idx + 1)
        } else {
            (idx + 1).to_string()
        };

        builder.push_record([
            position,
            product.name.clone(),
            product.category.clone(),
            product.price.to_string(),
            product.stock.to_string(),
            product.sales.to_string(),
            product.rating.to_string(),
            product.status.label().to_string(),
        ]);
    }

    let mut table = builder.build();

    table.with(theme());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..7), Alignment::right());

    writeln!(out, "{table}")?;

    Ok(())
}

/// Write the aggregate metrics as aligned summary lines.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to `out` fails.
pub fn write_metrics(mut out: impl io::Write, metrics: &OrderMetrics<'_>) -> Result<(), ReportError> {
    let lines = [
        ("Total revenue:", metrics.total_revenue.to_string()),
        ("Total orders:", metrics.total_orders.to_string()),
        ("Pending orders:", metrics.pending_orders.to_string()),
        ("Completed orders:", metrics.completed_orders.to_string()),
        ("Cancelled orders:", metrics.cancelled_orders.to_string()),
    ];

    let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    for (label, value) in &lines {
        writeln!(out, " {label:<label_width$} {value:>value_width$}")?;
    }

    Ok(())
}

/// Write the dashboard: metrics followed by the recent orders.
///
/// # Errors
///
/// Returns a [`ReportError`] if writing to `out` fails.
pub fn write_dashboard(mut out: impl io::Write, dashboard: &Dashboard<'_>) -> Result<(), ReportError> {
    write_metrics(&mut out, &dashboard.metrics)?;
    writeln!(out)?;
    write_orders(&mut out, &dashboard.recent_orders)?;

    Ok(())
}

fn theme() -> Theme {
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    theme
}

fn status_color(status: OrderStatus) -> Color {
    match status {
        OrderStatus::Pending => Color::FG_YELLOW,
        OrderStatus::Completed => Color::FG_GREEN,
        OrderStatus::Cancelled => Color::FG_RED,
    }
}
