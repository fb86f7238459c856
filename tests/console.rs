//! Integration tests for the console seeded from the default fixture set.
//!
//! The default set holds five orders (two pending, two completed, one
//! cancelled) and five products shown in id order.

use rusty_money::{Money, iso::CNY};
use testresult::TestResult;

use storefront::{
    console::{Console, Intent},
    fixtures::Fixture,
    orders::{OrderStatus, PendingOnly, TransitionOutcome},
    report::{write_dashboard, write_products},
};

fn default_console() -> TestResult<Console<'static>> {
    Ok(Fixture::from_set("default")?.console()?)
}

fn status_change(order_id: &str, status: OrderStatus) -> Intent {
    Intent::RequestStatusChange {
        order_id: order_id.to_string(),
        status,
    }
}

#[test]
fn default_set_metrics() -> TestResult {
    let console = default_console()?;
    let metrics = console.metrics();

    assert_eq!(metrics.total_orders, 5);
    assert_eq!(metrics.pending_orders, 2);
    assert_eq!(metrics.completed_orders, 2);
    assert_eq!(metrics.cancelled_orders, 1);
    assert_eq!(metrics.total_revenue, Money::from_major(21_998, CNY));

    Ok(())
}

#[test]
fn completing_a_pending_order_moves_revenue() -> TestResult {
    let mut console = default_console()?;

    assert!(console.dispatch(status_change("ORD-2024-001", OrderStatus::Completed)));

    let metrics = console.metrics();

    assert_eq!(metrics.pending_orders, 1);
    assert_eq!(metrics.completed_orders, 3);
    assert_eq!(metrics.total_revenue, Money::from_major(24_997, CNY));

    Ok(())
}

#[test]
fn reverting_a_completed_order_removes_its_revenue() -> TestResult {
    let mut console = default_console()?;

    assert!(console.dispatch(status_change("ORD-2024-002", OrderStatus::Pending)));

    let metrics = console.metrics();

    assert_eq!(metrics.pending_orders, 3);
    assert_eq!(metrics.completed_orders, 1);
    assert_eq!(metrics.total_revenue, Money::from_major(12_999, CNY));

    Ok(())
}

#[test]
fn unknown_order_leaves_dashboard_untouched() -> TestResult {
    let mut console = default_console()?;
    let before = console.dashboard();

    assert!(!console.dispatch(status_change("missing-id", OrderStatus::Completed)));
    assert_eq!(console.dashboard(), before);

    Ok(())
}

#[test]
fn earlier_snapshots_survive_status_changes() -> TestResult {
    let (mut ledger, _catalog) = default_console()?.into_parts();
    let before = ledger.snapshot();

    let after = ledger.transition("ORD-2024-003", OrderStatus::Cancelled);

    assert_eq!(
        before.iter().find(|order| order.id == "ORD-2024-003").map(|order| order.status),
        Some(OrderStatus::Pending)
    );
    assert_eq!(
        after.iter().find(|order| order.id == "ORD-2024-003").map(|order| order.status),
        Some(OrderStatus::Cancelled)
    );
    assert_eq!(
        before.iter().map(|order| &order.id).collect::<Vec<_>>(),
        after.iter().map(|order| &order.id).collect::<Vec<_>>()
    );

    Ok(())
}

#[test]
fn pending_only_policy_declines_leaving_terminal_states() -> TestResult {
    let (ledger, catalog) = default_console()?.into_parts();
    let mut console = Console::new(ledger.with_policy(PendingOnly), catalog);

    assert!(!console.dispatch(status_change("ORD-2024-005", OrderStatus::Pending)));
    assert!(console.dispatch(status_change("ORD-2024-001", OrderStatus::Cancelled)));

    let (mut ledger, _catalog) = console.into_parts();

    assert_eq!(
        ledger.apply("ORD-2024-002", OrderStatus::Cancelled),
        TransitionOutcome::Rejected {
            from: OrderStatus::Completed,
            to: OrderStatus::Cancelled,
        }
    );
    assert_eq!(ledger.metrics().cancelled_orders, 2);

    Ok(())
}

#[test]
fn drag_gesture_reorders_the_default_products() -> TestResult {
    let mut console = default_console()?;

    assert_eq!(console.catalog().ids(), ["1", "2", "3", "4", "5"]);

    console.dispatch(Intent::PickForReorder {
        product_id: "4".to_string(),
    });
    console.dispatch(Intent::HoverOverTarget {
        target_id: "3".to_string(),
    });
    console.dispatch(Intent::HoverOverTarget {
        target_id: "2".to_string(),
    });

    assert_eq!(console.catalog().ids(), ["1", "2", "3", "4", "5"]);

    assert!(console.dispatch(Intent::DropOnTarget {
        target_id: "2".to_string(),
    }));
    assert_eq!(console.catalog().ids(), ["1", "4", "2", "3", "5"]);
    assert!(console.catalog().dragged().is_none());

    Ok(())
}

#[test]
fn reports_render_the_default_set() -> TestResult {
    let mut console = default_console()?;

    console.dispatch(Intent::PickForReorder {
        product_id: "5".to_string(),
    });

    let mut out = Vec::new();

    write_dashboard(&mut out, &console.dashboard())?;
    write_products(&mut out, console.catalog())?;

    let text = String::from_utf8(out)?;

    assert!(text.contains("ORD-2024-005"), "{text}");
    assert!(text.contains("Apple Watch Series 9"), "{text}");
    assert!(text.contains("5*"), "{text}");

    Ok(())
}
