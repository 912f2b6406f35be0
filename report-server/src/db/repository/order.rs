//! Order snapshot loader
//!
//! One bulk eager load per report request: orders in the window, then
//! checks, items (with category resolution) and payments fetched by
//! re-joining the same window predicate — no per-order follow-up queries.
//! The flat rows are stitched into the nested snapshot graph in memory.

use std::collections::HashMap;

use shared::models::{
    CheckSnapshot, ItemStatus, OrderItemSnapshot, OrderSnapshot, OrderStatus, PaymentRecord,
    PaymentStatus,
};
use sqlx::SqlitePool;

use super::RepoResult;

#[derive(Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    business_id: i64,
    status: String,
    order_type: String,
    revenue_center: Option<String>,
    table_name: Option<String>,
    guest_count: i64,
    tax_amount: f64,
    fee_amount: f64,
    gratuity_amount: f64,
    created_by: Option<i64>,
    created_at: i64,
}

#[derive(sqlx::FromRow)]
struct CheckRow {
    id: i64,
    order_id: i64,
}

#[derive(sqlx::FromRow)]
struct ItemRow {
    id: i64,
    check_id: i64,
    name: String,
    unit_price: f64,
    quantity: i64,
    discount_amount: f64,
    status: i64,
    employee_id: Option<i64>,
    customer_no: Option<i64>,
    category_name: Option<String>,
    parent_category_name: Option<String>,
}

#[derive(sqlx::FromRow)]
struct PaymentRow {
    id: i64,
    order_id: i64,
    check_id: Option<i64>,
    employee_id: Option<i64>,
    amount: f64,
    tip_amount: f64,
    method: String,
    status: String,
    refunded_payment_id: i64,
    refund_reason: Option<String>,
    comment: Option<String>,
    created_at: i64,
}

impl OrderRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Load the full order graph for a business's reporting window.
    ///
    /// `start` is inclusive, `end` exclusive (next local midnight). An
    /// optional employee filter restricts to orders created by that
    /// employee. An empty window is an empty vec, never an error.
    pub async fn load_window(
        &self,
        business_id: i64,
        start: i64,
        end: i64,
        employee_filter: Option<i64>,
    ) -> RepoResult<Vec<OrderSnapshot>> {
        let order_rows: Vec<OrderRow> = sqlx::query_as(
            r#"
            SELECT id, business_id, status, order_type, revenue_center, table_name,
                   guest_count, tax_amount, fee_amount, gratuity_amount,
                   created_by, created_at
            FROM orders
            WHERE business_id = ?1 AND created_at >= ?2 AND created_at < ?3
              AND (?4 IS NULL OR created_by = ?4)
            ORDER BY created_at, id
            "#,
        )
        .bind(business_id)
        .bind(start)
        .bind(end)
        .bind(employee_filter)
        .fetch_all(&self.pool)
        .await?;

        if order_rows.is_empty() {
            return Ok(Vec::new());
        }

        let check_rows: Vec<CheckRow> = sqlx::query_as(
            r#"
            SELECT c.id, c.order_id
            FROM checks c
            JOIN orders o ON o.id = c.order_id
            WHERE o.business_id = ?1 AND o.created_at >= ?2 AND o.created_at < ?3
              AND (?4 IS NULL OR o.created_by = ?4)
            ORDER BY c.order_id, c.id
            "#,
        )
        .bind(business_id)
        .bind(start)
        .bind(end)
        .bind(employee_filter)
        .fetch_all(&self.pool)
        .await?;

        // Category resolution happens here: leaf name and parent name via
        // LEFT JOINs so deleted categories surface as NULL and the
        // classifier can fall back to "Uncategorized".
        let item_rows: Vec<ItemRow> = sqlx::query_as(
            r#"
            SELECT oi.id, oi.check_id, oi.name, oi.unit_price, oi.quantity,
                   oi.discount_amount, oi.status, oi.employee_id, oi.customer_no,
                   cat.name AS category_name, parent.name AS parent_category_name
            FROM order_items oi
            JOIN checks c ON c.id = oi.check_id
            JOIN orders o ON o.id = c.order_id
            LEFT JOIN menu_items mi ON mi.id = oi.menu_item_id
            LEFT JOIN categories cat ON cat.id = mi.category_id
            LEFT JOIN categories parent ON parent.id = cat.parent_id
            WHERE o.business_id = ?1 AND o.created_at >= ?2 AND o.created_at < ?3
              AND (?4 IS NULL OR o.created_by = ?4)
            ORDER BY oi.check_id, oi.id
            "#,
        )
        .bind(business_id)
        .bind(start)
        .bind(end)
        .bind(employee_filter)
        .fetch_all(&self.pool)
        .await?;

        let payment_rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT p.id, p.order_id, p.check_id, p.employee_id, p.amount, p.tip_amount,
                   p.method, p.status, p.refunded_payment_id, p.refund_reason,
                   p.comment, p.created_at
            FROM order_payments p
            JOIN orders o ON o.id = p.order_id
            WHERE o.business_id = ?1 AND o.created_at >= ?2 AND o.created_at < ?3
              AND (?4 IS NULL OR o.created_by = ?4)
            ORDER BY p.order_id, p.created_at, p.id
            "#,
        )
        .bind(business_id)
        .bind(start)
        .bind(end)
        .bind(employee_filter)
        .fetch_all(&self.pool)
        .await?;

        Ok(assemble(order_rows, check_rows, item_rows, payment_rows))
    }
}

/// Stitch the flat rows into the nested snapshot graph
fn assemble(
    order_rows: Vec<OrderRow>,
    check_rows: Vec<CheckRow>,
    item_rows: Vec<ItemRow>,
    payment_rows: Vec<PaymentRow>,
) -> Vec<OrderSnapshot> {
    let mut orders: Vec<OrderSnapshot> = order_rows
        .into_iter()
        .map(|row| OrderSnapshot {
            id: row.id,
            business_id: row.business_id,
            status: OrderStatus::parse(&row.status),
            order_type: row.order_type,
            revenue_center: row.revenue_center,
            table_name: row.table_name,
            guest_count: row.guest_count,
            tax_amount: row.tax_amount,
            fee_amount: row.fee_amount,
            gratuity_amount: row.gratuity_amount,
            created_by: row.created_by,
            created_at: row.created_at,
            checks: Vec::new(),
            payments: Vec::new(),
        })
        .collect();

    let order_index: HashMap<i64, usize> =
        orders.iter().enumerate().map(|(i, o)| (o.id, i)).collect();

    // check id -> (order index, check index)
    let mut check_index: HashMap<i64, (usize, usize)> = HashMap::new();
    for row in check_rows {
        let Some(&order_idx) = order_index.get(&row.order_id) else {
            continue;
        };
        let checks = &mut orders[order_idx].checks;
        checks.push(CheckSnapshot {
            id: row.id,
            order_id: row.order_id,
            items: Vec::new(),
        });
        check_index.insert(row.id, (order_idx, checks.len() - 1));
    }

    for row in item_rows {
        let Some(&(order_idx, check_idx)) = check_index.get(&row.check_id) else {
            continue;
        };
        orders[order_idx].checks[check_idx].items.push(OrderItemSnapshot {
            id: row.id,
            name: row.name,
            category_name: row.category_name,
            parent_category_name: row.parent_category_name,
            unit_price: row.unit_price,
            quantity: row.quantity,
            discount_amount: row.discount_amount,
            status: ItemStatus::from_code(row.status),
            employee_id: row.employee_id,
            customer_no: row.customer_no,
        });
    }

    for row in payment_rows {
        let Some(&order_idx) = order_index.get(&row.order_id) else {
            continue;
        };
        orders[order_idx].payments.push(PaymentRecord {
            id: row.id,
            order_id: row.order_id,
            check_id: row.check_id,
            employee_id: row.employee_id,
            amount: row.amount,
            tip_amount: row.tip_amount,
            method: row.method,
            status: PaymentStatus::parse(&row.status),
            refunded_payment_id: row.refunded_payment_id,
            refund_reason: row.refund_reason,
            comment: row.comment,
            created_at: row.created_at,
        });
    }

    orders
}
