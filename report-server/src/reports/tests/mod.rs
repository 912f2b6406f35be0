use chrono::NaiveDate;

// Shared across the test files via `use super::*`
pub use rust_decimal::Decimal;
pub use shared::models::{
    AccessLogRecord, CheckSnapshot, ItemStatus, OrderItemSnapshot, OrderSnapshot, OrderStatus,
    PaymentRecord, PaymentStatus,
};

use super::ReportContext;

mod test_activity;
mod test_exceptions;

// ========================================================================
// Builders
// ========================================================================

pub const TEST_DATE: &str = "2024-03-15";

/// Unix millis for the test date at a given UTC hour
pub fn hour_millis(hour: u32) -> i64 {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(hour, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

pub fn test_ctx() -> ReportContext {
    ReportContext::new(TEST_DATE.to_string(), chrono_tz::UTC, Decimal::from(8))
}

pub fn item(
    name: &str,
    unit_price: f64,
    quantity: i64,
    discount: f64,
    status: ItemStatus,
) -> OrderItemSnapshot {
    OrderItemSnapshot {
        id: 0,
        name: name.to_string(),
        unit_price,
        quantity,
        discount_amount: discount,
        status,
        ..Default::default()
    }
}

pub fn item_in_category(
    name: &str,
    unit_price: f64,
    quantity: i64,
    category: &str,
    parent: Option<&str>,
) -> OrderItemSnapshot {
    OrderItemSnapshot {
        category_name: Some(category.to_string()),
        parent_category_name: parent.map(|p| p.to_string()),
        ..item(name, unit_price, quantity, 0.0, ItemStatus::Fire)
    }
}

/// Order with a single check wrapping the given items
pub fn order(
    id: i64,
    status: OrderStatus,
    created_at: i64,
    items: Vec<OrderItemSnapshot>,
) -> OrderSnapshot {
    OrderSnapshot {
        id,
        business_id: 1,
        status,
        order_type: "dine_in".to_string(),
        created_at,
        checks: vec![CheckSnapshot {
            id: id * 10,
            order_id: id,
            items,
        }],
        ..Default::default()
    }
}

pub fn completed_order(id: i64, items: Vec<OrderItemSnapshot>) -> OrderSnapshot {
    order(id, OrderStatus::Completed, hour_millis(12), items)
}

pub fn payment(id: i64, order_id: i64, amount: f64, method: &str) -> PaymentRecord {
    PaymentRecord {
        id,
        order_id,
        amount,
        method: method.to_string(),
        status: PaymentStatus::Completed,
        created_at: hour_millis(13) + id,
        ..Default::default()
    }
}

pub fn access_log(
    id: i64,
    order_id: i64,
    employee_id: i64,
    start_time: i64,
    end_time: Option<i64>,
) -> AccessLogRecord {
    AccessLogRecord {
        id,
        order_id,
        employee_id,
        start_time,
        end_time,
    }
}
