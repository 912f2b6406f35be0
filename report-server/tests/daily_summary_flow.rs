//! End-to-end flow: seed an in-memory database, load the snapshot window
//! through the repository, and assemble reports from it.

use chrono::NaiveDate;
use report_server::db::DbService;
use report_server::db::repository::{AccessLogRepository, EmployeeRepository, OrderRepository};
use report_server::reports::{ReportContext, assemble_activity_summary, assemble_daily_summary};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

const BUSINESS_ID: i64 = 1;

fn millis(hour: u32, min: u32) -> i64 {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

fn next_day_millis() -> i64 {
    NaiveDate::from_ymd_opt(2024, 3, 16)
        .unwrap()
        .and_hms_opt(1, 0, 0)
        .unwrap()
        .and_utc()
        .timestamp_millis()
}

async fn exec(pool: &SqlitePool, sql: &str) {
    sqlx::query(sql).execute(pool).await.expect(sql);
}

/// One business, two employees, a two-level category tree, two completed
/// orders, one open order, and one order outside the window.
async fn seed(pool: &SqlitePool) {
    exec(pool, "INSERT INTO businesses (id, name, food_tax_percent) VALUES (1, 'Harbor Grill', 8.5)").await;
    exec(pool, "INSERT INTO employees (id, business_id, name) VALUES (10, 1, 'Alice')").await;
    exec(pool, "INSERT INTO employees (id, business_id, name) VALUES (11, 1, 'Bob')").await;

    // Bar -> Draft Beer; Entrees (no parent)
    exec(pool, "INSERT INTO categories (id, business_id, name) VALUES (100, 1, 'Bar')").await;
    exec(pool, "INSERT INTO categories (id, business_id, name, parent_id) VALUES (101, 1, 'Draft Beer', 100)").await;
    exec(pool, "INSERT INTO categories (id, business_id, name) VALUES (102, 1, 'Entrees')").await;

    exec(pool, "INSERT INTO menu_items (id, business_id, name, category_id) VALUES (200, 1, 'IPA', 101)").await;
    exec(pool, "INSERT INTO menu_items (id, business_id, name, category_id) VALUES (201, 1, 'Burger', 102)").await;
    // Menu item whose category is gone
    exec(pool, "INSERT INTO menu_items (id, business_id, name, category_id) VALUES (202, 1, 'Special', NULL)").await;

    // Order 1: completed at 12:30 by Alice, burger x2 with discount + voided IPA
    exec(pool, &format!(
        "INSERT INTO orders (id, business_id, status, order_type, revenue_center, table_name, guest_count, tax_amount, gratuity_amount, created_by, created_at)
         VALUES (1, 1, 'COMPLETED', 'dine_in', 'Dining Room', 'T1', 2, 1.60, 3.00, 10, {})",
        millis(12, 30)
    )).await;
    exec(pool, "INSERT INTO checks (id, order_id) VALUES (1, 1)").await;
    exec(pool, "INSERT INTO order_items (id, check_id, menu_item_id, name, unit_price, quantity, discount_amount, status, employee_id, customer_no)
         VALUES (1, 1, 201, 'Burger', 10.0, 2, 2.0, 1, 10, 1)").await;
    exec(pool, "INSERT INTO order_items (id, check_id, menu_item_id, name, unit_price, quantity, discount_amount, status, employee_id, customer_no)
         VALUES (2, 1, 200, 'IPA', 7.0, 1, 0.0, 3, 10, 2)").await;
    exec(pool, &format!(
        "INSERT INTO order_payments (id, order_id, employee_id, amount, tip_amount, method, status, created_at)
         VALUES (1, 1, 10, 15.0, 2.0, 'cash', 'COMPLETED', {})",
        millis(13, 0)
    )).await;
    exec(pool, &format!(
        "INSERT INTO order_payments (id, order_id, employee_id, amount, tip_amount, method, status, refunded_payment_id, created_at)
         VALUES (2, 1, 10, -5.0, 0.0, 'cash', 'REFUNDED', 1, {})",
        millis(13, 30)
    )).await;

    // Order 2: open at 19:00 by Bob, uncategorized special
    exec(pool, &format!(
        "INSERT INTO orders (id, business_id, status, order_type, guest_count, created_by, created_at)
         VALUES (2, 1, 'OPEN', 'takeout', 1, 11, {})",
        millis(19, 0)
    )).await;
    exec(pool, "INSERT INTO checks (id, order_id) VALUES (2, 2)").await;
    exec(pool, "INSERT INTO order_items (id, check_id, menu_item_id, name, unit_price, quantity, status, employee_id)
         VALUES (3, 2, 202, 'Special', 9.0, 1, 1, 11)").await;

    // Order 3: next business day, must never load
    exec(pool, &format!(
        "INSERT INTO orders (id, business_id, status, created_at) VALUES (3, 1, 'COMPLETED', {})",
        next_day_millis()
    )).await;

    // Sessions: Alice closed 45 minutes on order 1, Bob open on order 2
    exec(pool, &format!(
        "INSERT INTO order_access_logs (id, order_id, employee_id, start_time, end_time) VALUES (1, 1, 10, {}, {})",
        millis(9, 0),
        millis(9, 45)
    )).await;
    exec(pool, &format!(
        "INSERT INTO order_access_logs (id, order_id, employee_id, start_time, end_time) VALUES (2, 2, 11, {}, NULL)",
        millis(19, 5)
    )).await;
}

fn window() -> (i64, i64) {
    (millis(0, 0), millis(0, 0) + 24 * 60 * 60 * 1000)
}

async fn test_context(pool: &SqlitePool) -> ReportContext {
    let mut ctx = ReportContext::new("2024-03-15".to_string(), chrono_tz::UTC, Decimal::from(8));
    ctx.employee_names = EmployeeRepository::new(pool.clone())
        .names(BUSINESS_ID)
        .await
        .unwrap();
    ctx
}

#[tokio::test]
async fn test_file_database_bootstrap() {
    // Same flow against a real file database (WAL mode + migrations)
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports.db");
    let db = DbService::new(path.to_str().unwrap()).await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, None)
        .await
        .unwrap();
    assert_eq!(orders.len(), 2);
}

#[tokio::test]
async fn test_loader_resolves_category_chain() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, None)
        .await
        .unwrap();

    assert_eq!(orders.len(), 2);
    let first = &orders[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.checks.len(), 1);
    assert_eq!(first.checks[0].items.len(), 2);
    assert_eq!(first.payments.len(), 2);

    let ipa = &first.checks[0].items[1];
    assert_eq!(ipa.category_name.as_deref(), Some("Draft Beer"));
    assert_eq!(ipa.parent_category_name.as_deref(), Some("Bar"));

    // Deleted/missing category surfaces as None
    let special = &orders[1].checks[0].items[0];
    assert_eq!(special.category_name, None);
    assert_eq!(special.parent_category_name, None);
}

#[tokio::test]
async fn test_loader_window_excludes_next_day() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, None)
        .await
        .unwrap();
    assert!(orders.iter().all(|o| o.id != 3));
}

#[tokio::test]
async fn test_loader_employee_filter() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, Some(10))
        .await
        .unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].id, 1);
}

#[tokio::test]
async fn test_loader_empty_window_is_ok() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let far_future = next_day_millis() * 2;
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, far_future, far_future + 1000, None)
        .await
        .unwrap();
    assert!(orders.is_empty());
}

#[tokio::test]
async fn test_daily_summary_from_seeded_data() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, None)
        .await
        .unwrap();
    let ctx = test_context(&db.pool).await;
    let report = assemble_daily_summary(&orders, &ctx);

    assert!(report.has_activity);
    // Burger 20.00 + Special 9.00; the voided IPA only feeds voids
    assert_eq!(report.totals.gross_sales, "29.00");
    assert_eq!(report.totals.net_sales, "27.00");
    assert_eq!(report.totals.voids, "7.00");
    assert_eq!(report.totals.comps, "2.00");
    assert_eq!(report.totals.orders, 2);
    // Tax only from the completed order
    assert_eq!(report.totals.tax, "1.60");

    // Departments: Entrees (burger), Bar (voided IPA), Uncategorized (special)
    let names: Vec<&str> = report
        .sales_by_department
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(names, vec!["Entrees", "Bar", "Uncategorized"]);
    let bar = &report.sales_by_department[1];
    assert_eq!(bar.voids, "7.00");
    assert_eq!(bar.gross_sales, "0.00");
    // All collected tax follows the only completed department
    let entrees = &report.sales_by_department[0];
    assert_eq!(entrees.tax, "1.60");

    // Dayparts: 12:30 is Lunch, 19:00 is Dinner
    let daypart_names: Vec<&str> = report
        .sales_by_daypart
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(daypart_names, vec!["Lunch", "Dinner"]);

    // Payments: sign split on the cash records
    assert_eq!(report.payments.methods.len(), 1);
    let cash = &report.payments.methods[0];
    assert_eq!(cash.name, "cash");
    assert_eq!(cash.payment_amount, "15.00");
    assert_eq!(cash.refund_amount, "5.00");
    assert_eq!(cash.net_amount, "10.00");
    assert_eq!(report.payments.tips, "2.00");
    assert_eq!(report.payments.service_charges, "3.00");

    // Exceptions
    assert_eq!(report.exceptions.categories[0].amount, "2.00");
    assert_eq!(report.exceptions.categories[2].amount, "7.00");
}

#[tokio::test]
async fn test_daily_summary_idempotent_across_loads() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let repo = OrderRepository::new(db.pool.clone());
    let ctx = test_context(&db.pool).await;

    let first = {
        let orders = repo.load_window(BUSINESS_ID, start, end, None).await.unwrap();
        assemble_daily_summary(&orders, &ctx)
    };
    let second = {
        let orders = repo.load_window(BUSINESS_ID, start, end, None).await.unwrap();
        assemble_daily_summary(&orders, &ctx)
    };
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_activity_from_seeded_data() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let orders = OrderRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, None)
        .await
        .unwrap();
    let logs = AccessLogRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, None)
        .await
        .unwrap();
    let ctx = test_context(&db.pool).await;

    let report = assemble_activity_summary(&orders, &logs, &ctx);
    assert_eq!(report.per_employee.len(), 2);

    let alice = report
        .per_employee
        .iter()
        .find(|e| e.employee_name == "Alice")
        .unwrap();
    assert_eq!(alice.completed_sessions, 1);
    assert_eq!(alice.total_time_minutes, 45);
    assert_eq!(alice.avg_time_per_order, 45.0);

    let bob = report
        .per_employee
        .iter()
        .find(|e| e.employee_name == "Bob")
        .unwrap();
    assert_eq!(bob.active_orders, 1);

    assert_eq!(report.closed_orders.len(), 1);
    assert_eq!(report.open_orders.len(), 1);
    // The refund flag on order 1's second payment uses the status rule
    let closed = &report.closed_orders[0];
    assert!(closed.payments[1].is_refund);
    assert_eq!(closed.order_total, "18.00");
}

#[tokio::test]
async fn test_activity_employee_filter_narrows_sessions() {
    let db = DbService::in_memory().await.unwrap();
    seed(&db.pool).await;

    let (start, end) = window();
    let logs = AccessLogRepository::new(db.pool.clone())
        .load_window(BUSINESS_ID, start, end, Some(10))
        .await
        .unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].employee_id, 10);
}
