use super::*;
use crate::reports::activity::{SessionState, summarize_activity};
use shared::models::ItemStatus;
use std::collections::HashMap;

fn names() -> HashMap<i64, String> {
    HashMap::from([(1, "Alice".to_string()), (2, "Bob".to_string())])
}

#[test]
fn test_session_state_from_log() {
    // Scenario D: 09:00 - 09:45 is a 45 minute closed session
    let closed = access_log(1, 1, 1, hour_millis(9), Some(hour_millis(9) + 45 * 60_000));
    assert_eq!(
        SessionState::of(&closed),
        SessionState::Closed { duration_minutes: 45 }
    );

    let open = access_log(2, 1, 1, hour_millis(9), None);
    assert_eq!(SessionState::of(&open), SessionState::Open);
    assert!(SessionState::of(&open).is_open());
}

#[test]
fn test_per_employee_summary() {
    let orders = vec![completed_order(1, vec![]), completed_order(2, vec![])];
    let logs = vec![
        // Alice: two closed sessions on two orders (30 + 60 minutes)
        access_log(1, 1, 1, hour_millis(9), Some(hour_millis(9) + 30 * 60_000)),
        access_log(2, 2, 1, hour_millis(10), Some(hour_millis(11))),
        // Bob: one open session
        access_log(3, 1, 2, hour_millis(12), None),
    ];

    let output = summarize_activity(&logs, &orders, &names());
    assert_eq!(output.per_employee.len(), 2);

    let alice = &output.per_employee[0];
    assert_eq!(alice.employee_name, "Alice");
    assert_eq!(alice.total_orders, 2);
    assert_eq!(alice.active_orders, 0);
    assert_eq!(alice.completed_sessions, 2);
    assert_eq!(alice.total_time_minutes, 90);
    assert_eq!(alice.avg_time_per_order, 45.0);

    let bob = &output.per_employee[1];
    assert_eq!(bob.total_orders, 1);
    assert_eq!(bob.active_orders, 1);
    assert_eq!(bob.completed_sessions, 0);
    assert_eq!(bob.avg_time_per_order, 0.0);
}

#[test]
fn test_avg_time_single_session() {
    // Scenario D: one 45 minute session means avg 45
    let orders = vec![completed_order(1, vec![])];
    let logs = vec![access_log(
        1,
        1,
        1,
        hour_millis(9),
        Some(hour_millis(9) + 45 * 60_000),
    )];
    let output = summarize_activity(&logs, &orders, &names());
    assert_eq!(output.per_employee[0].avg_time_per_order, 45.0);
}

#[test]
fn test_employee_sort_is_stable_on_ties() {
    let orders = vec![completed_order(1, vec![]), completed_order(2, vec![])];
    // Bob appears first in the log stream; both touch one order each
    let logs = vec![
        access_log(1, 1, 2, hour_millis(9), None),
        access_log(2, 2, 1, hour_millis(10), None),
    ];
    let output = summarize_activity(&logs, &orders, &names());
    assert_eq!(output.per_employee[0].employee_name, "Bob");
    assert_eq!(output.per_employee[1].employee_name, "Alice");
}

#[test]
fn test_unknown_employee_gets_placeholder_name() {
    let orders = vec![completed_order(1, vec![])];
    let logs = vec![access_log(1, 1, 99, hour_millis(9), None)];
    let output = summarize_activity(&logs, &orders, &names());
    assert_eq!(output.per_employee[0].employee_name, "Employee #99");
}

#[test]
fn test_orders_split_open_closed_and_sorted_desc() {
    let mut completed = completed_order(1, vec![]);
    completed.created_at = hour_millis(10);
    let mut closed = order(2, OrderStatus::Closed, hour_millis(12), vec![]);
    closed.created_at = hour_millis(12);
    let open_a = order(3, OrderStatus::Open, hour_millis(11), vec![]);
    let open_b = order(4, OrderStatus::Open, hour_millis(14), vec![]);

    let orders = vec![completed, closed, open_a, open_b];
    let logs = vec![
        access_log(1, 1, 1, hour_millis(10), None),
        access_log(2, 2, 1, hour_millis(12), None),
        access_log(3, 3, 1, hour_millis(11), None),
        access_log(4, 4, 1, hour_millis(14), None),
    ];

    let output = summarize_activity(&logs, &orders, &names());
    // COMPLETED and CLOSED are both "closed"; newest first on each side
    let closed_ids: Vec<i64> = output.closed_orders.iter().map(|o| o.order_id).collect();
    assert_eq!(closed_ids, vec![2, 1]);
    let open_ids: Vec<i64> = output.open_orders.iter().map(|o| o.order_id).collect();
    assert_eq!(open_ids, vec![4, 3]);
}

#[test]
fn test_order_payments_chronological_with_refund_flags() {
    let mut o = completed_order(1, vec![]);
    let mut late = payment(2, 1, -5.0, "cash");
    late.created_at = hour_millis(15);
    late.status = shared::models::PaymentStatus::Refunded;
    let mut early = payment(1, 1, 15.0, "cash");
    early.created_at = hour_millis(13);
    o.payments = vec![late, early];

    let logs = vec![access_log(1, 1, 1, hour_millis(9), None)];
    let output = summarize_activity(&logs, &[o], &names());
    let row = &output.closed_orders[0];
    assert_eq!(row.payments.len(), 2);
    assert_eq!(row.payments[0].created_at, hour_millis(13));
    assert!(!row.payments[0].is_refund);
    assert!(row.payments[1].is_refund);
}

#[test]
fn test_session_items_grouped_by_name() {
    let mut items = vec![
        item("Burger", 10.0, 1, 0.0, ItemStatus::Fire),
        item("Burger", 10.0, 2, 0.0, ItemStatus::Fire),
        item("Cola", 3.0, 1, 0.0, ItemStatus::Hold),
    ];
    for it in &mut items {
        it.employee_id = Some(1);
    }
    let o = completed_order(1, items);

    let logs = vec![access_log(1, 1, 1, hour_millis(9), None)];
    let output = summarize_activity(&logs, &[o], &names());
    let session = &output.closed_orders[0].sessions[0];

    assert_eq!(session.items.len(), 2);
    assert_eq!(session.items[0].name, "Burger");
    assert_eq!(session.items[0].quantity, 3);
    assert_eq!(session.items[0].amount, "30.00");
    assert!(session.items[0].fire);
    assert!(!session.items[0].hold);
    assert_eq!(session.items[1].name, "Cola");
    assert!(session.items[1].hold);
}

#[test]
fn test_temp_items_skipped_and_other_employees_excluded() {
    let mut mine = item("Burger", 10.0, 1, 0.0, ItemStatus::Fire);
    mine.employee_id = Some(1);
    let mut temp = item("Draft", 5.0, 1, 0.0, ItemStatus::Temp);
    temp.employee_id = Some(1);
    let mut theirs = item("Steak", 30.0, 1, 0.0, ItemStatus::Fire);
    theirs.employee_id = Some(2);
    let o = completed_order(1, vec![mine, temp, theirs]);

    let logs = vec![access_log(1, 1, 1, hour_millis(9), None)];
    let output = summarize_activity(&logs, &[o], &names());
    let session = &output.closed_orders[0].sessions[0];
    assert_eq!(session.items.len(), 1);
    assert_eq!(session.items[0].name, "Burger");
}

#[test]
fn test_order_total_sums_non_void_net() {
    let o = completed_order(
        1,
        vec![
            item("Burger", 10.0, 2, 2.0, ItemStatus::Fire),
            item("Steak", 30.0, 1, 0.0, ItemStatus::Void),
        ],
    );
    let logs = vec![access_log(1, 1, 1, hour_millis(9), None)];
    let output = summarize_activity(&logs, &[o], &names());
    assert_eq!(output.closed_orders[0].order_total, "18.00");
}

#[test]
fn test_totals_roll_up_sessions() {
    let orders = vec![completed_order(1, vec![])];
    let logs = vec![
        access_log(1, 1, 1, hour_millis(9), Some(hour_millis(9) + 20 * 60_000)),
        access_log(2, 1, 2, hour_millis(10), None),
    ];
    let output = summarize_activity(&logs, &orders, &names());
    assert_eq!(output.totals.total_sessions, 2);
    assert_eq!(output.totals.open_sessions, 1);
    assert_eq!(output.totals.completed_sessions, 1);
    assert_eq!(output.totals.total_time_minutes, 20);
}
