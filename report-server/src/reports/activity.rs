//! Activity session analyzer
//!
//! Reconstructs employee order-access sessions into per-employee and
//! per-order activity summaries. A session is either still open (no end
//! time) or closed with a duration; closed is terminal — a session is
//! never reopened.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use shared::models::{
    AccessLogRecord, ActivityTotals, EmployeeActivityRow, OrderActivityRow, OrderPaymentEntry,
    OrderSessionEntry, OrderSnapshot, SessionItemEntry,
};

use super::buckets::OrderedBuckets;
use super::classify::classify;
use crate::money::{format_money, to_f64};

/// Session state derived from the access-log record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closed { duration_minutes: i64 },
}

impl SessionState {
    pub fn of(log: &AccessLogRecord) -> Self {
        match log.end_time {
            None => Self::Open,
            Some(end) => Self::Closed {
                duration_minutes: (end - log.start_time) / 60_000,
            },
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn duration_minutes(&self) -> Option<i64> {
        match self {
            Self::Open => None,
            Self::Closed { duration_minutes } => Some(*duration_minutes),
        }
    }
}

/// Analyzer output, merged into the activity payload by the assembler
#[derive(Debug, Clone, Default)]
pub struct ActivityOutput {
    pub per_employee: Vec<EmployeeActivityRow>,
    pub open_orders: Vec<OrderActivityRow>,
    pub closed_orders: Vec<OrderActivityRow>,
    pub totals: ActivityTotals,
}

#[derive(Debug, Default)]
struct EmployeeAccum {
    orders: HashSet<i64>,
    active_orders: i64,
    completed_sessions: i64,
    total_minutes: i64,
}

#[derive(Debug, Clone, Default)]
struct SessionItemAccum {
    quantity: i64,
    amount: Decimal,
    hold: bool,
    fire: bool,
    void: bool,
}

pub fn summarize_activity(
    logs: &[AccessLogRecord],
    orders: &[OrderSnapshot],
    employee_names: &HashMap<i64, String>,
) -> ActivityOutput {
    let orders_by_id: HashMap<i64, &OrderSnapshot> = orders.iter().map(|o| (o.id, o)).collect();

    // ---- Per-employee accumulation (encounter order preserved) ----
    let mut employees: Vec<(i64, EmployeeAccum)> = Vec::new();
    let mut employee_index: HashMap<i64, usize> = HashMap::new();
    let mut totals = ActivityTotals::default();

    for log in logs {
        let idx = *employee_index.entry(log.employee_id).or_insert_with(|| {
            employees.push((log.employee_id, EmployeeAccum::default()));
            employees.len() - 1
        });
        let accum = &mut employees[idx].1;
        accum.orders.insert(log.order_id);

        totals.total_sessions += 1;
        match SessionState::of(log) {
            SessionState::Open => {
                accum.active_orders += 1;
                totals.open_sessions += 1;
            }
            SessionState::Closed { duration_minutes } => {
                accum.completed_sessions += 1;
                accum.total_minutes += duration_minutes;
                totals.completed_sessions += 1;
                totals.total_time_minutes += duration_minutes;
            }
        }
    }

    let mut per_employee: Vec<EmployeeActivityRow> = employees
        .into_iter()
        .map(|(employee_id, accum)| {
            let avg = if accum.completed_sessions > 0 {
                to_f64(Decimal::from(accum.total_minutes) / Decimal::from(accum.completed_sessions))
            } else {
                0.0
            };
            EmployeeActivityRow {
                employee_id,
                employee_name: employee_name(employee_names, employee_id),
                total_orders: accum.orders.len() as i64,
                active_orders: accum.active_orders,
                completed_sessions: accum.completed_sessions,
                total_time_minutes: accum.total_minutes,
                avg_time_per_order: avg,
            }
        })
        .collect();
    // Stable sort: ties keep encounter order
    per_employee.sort_by(|a, b| b.total_orders.cmp(&a.total_orders));

    // ---- Per-order records (first-touched order, then split + sorted) ----
    let mut order_logs: Vec<(i64, Vec<&AccessLogRecord>)> = Vec::new();
    let mut order_log_index: HashMap<i64, usize> = HashMap::new();
    for log in logs {
        let idx = *order_log_index.entry(log.order_id).or_insert_with(|| {
            order_logs.push((log.order_id, Vec::new()));
            order_logs.len() - 1
        });
        order_logs[idx].1.push(log);
    }

    let mut open_orders = Vec::new();
    let mut closed_orders = Vec::new();
    for (order_id, logs_for_order) in order_logs {
        let Some(order) = orders_by_id.get(&order_id) else {
            // Session for an order outside the loaded window; nothing to
            // enrich it with.
            continue;
        };
        let row = order_activity_row(order, &logs_for_order, employee_names);
        if order.status.is_finished() {
            closed_orders.push(row);
        } else {
            open_orders.push(row);
        }
    }
    open_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    closed_orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    ActivityOutput {
        per_employee,
        open_orders,
        closed_orders,
        totals,
    }
}

fn employee_name(names: &HashMap<i64, String>, id: i64) -> String {
    names
        .get(&id)
        .cloned()
        .unwrap_or_else(|| format!("Employee #{}", id))
}

fn order_activity_row(
    order: &OrderSnapshot,
    logs: &[&AccessLogRecord],
    employee_names: &HashMap<i64, String>,
) -> OrderActivityRow {
    // Order total: non-void item net amounts
    let order_total: Decimal = order
        .items()
        .map(classify)
        .filter(|f| !f.is_void)
        .map(|f| f.net)
        .sum();

    // Payment history, chronological, with the authoritative refund flag
    let mut payments: Vec<&shared::models::PaymentRecord> = order.payments.iter().collect();
    payments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    let payments = payments
        .into_iter()
        .map(|p| OrderPaymentEntry {
            id: p.id,
            method: p.method.clone(),
            amount: format_money(crate::money::to_decimal(p.amount)),
            tip_amount: format_money(crate::money::to_decimal(p.tip_amount)),
            status: p.status,
            is_refund: p.is_refund(),
            created_at: p.created_at,
        })
        .collect();

    let sessions = logs
        .iter()
        .map(|log| session_entry(order, log, employee_names))
        .collect();

    OrderActivityRow {
        order_id: order.id,
        table_name: order.table_name.clone(),
        status: order.status.as_str().to_string(),
        created_at: order.created_at,
        order_total: format_money(order_total),
        payments,
        sessions,
    }
}

fn session_entry(
    order: &OrderSnapshot,
    log: &AccessLogRecord,
    employee_names: &HashMap<i64, String>,
) -> OrderSessionEntry {
    let state = SessionState::of(log);

    // Items this employee rang on the order, grouped by display name in
    // first-seen order; duplicate lines combine, TEMP items are skipped
    // from activity reporting entirely.
    let mut items: OrderedBuckets<SessionItemAccum> = OrderedBuckets::new();
    for item in order.items() {
        if item.employee_id != Some(log.employee_id) {
            continue;
        }
        let facts = classify(item);
        if facts.is_temp {
            continue;
        }
        let accum = items.entry(&item.name);
        accum.quantity += item.quantity;
        accum.amount += facts.net;
        match item.status {
            shared::models::ItemStatus::Hold => accum.hold = true,
            shared::models::ItemStatus::Fire => accum.fire = true,
            shared::models::ItemStatus::Void => accum.void = true,
            shared::models::ItemStatus::Temp => {}
        }
    }

    OrderSessionEntry {
        employee_id: log.employee_id,
        employee_name: employee_name(employee_names, log.employee_id),
        start_time: log.start_time,
        end_time: log.end_time,
        is_open: state.is_open(),
        duration_minutes: state.duration_minutes(),
        items: items
            .iter()
            .map(|(name, accum)| SessionItemEntry {
                name: name.clone(),
                quantity: accum.quantity,
                amount: format_money(accum.amount),
                hold: accum.hold,
                fire: accum.fire,
                void: accum.void,
            })
            .collect(),
    }
}
