//! Report payload types
//!
//! The wire shape produced by the report assembler and consumed by the
//! dashboard / renderers. Monetary fields are fixed 2-decimal strings
//! (round half-away-from-zero, no thousands separator); counts are
//! integers.

use serde::{Deserialize, Serialize};

use super::order::PaymentStatus;

/// One named bucket row (department, daypart, revenue center, order type)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BucketRow {
    pub name: String,
    pub gross_sales: String,
    pub net_sales: String,
    pub tax: String,
    pub comps: String,
    pub voids: String,
    pub fees: String,
    pub orders: i64,
    pub guests: i64,
    pub avg_order: String,
    pub ppa: String,
    pub gross_sales_percent: String,
    pub net_sales_percent: String,
    /// Sub-departments nested inside their department (department report only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sub_departments: Vec<BucketRow>,
}

/// One exception category row (comps / organizational / voids)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExceptionRow {
    pub name: String,
    pub action_count: i64,
    pub amount: String,
    pub gross_sales_percent: String,
    pub net_sales_percent: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExceptionsReport {
    pub categories: Vec<ExceptionRow>,
    pub total_actions: i64,
    pub total_amount: String,
}

/// Per-method payment reconciliation row
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PaymentMethodRow {
    pub name: String,
    pub payment_count: i64,
    pub payment_amount: String,
    pub refund_count: i64,
    pub refund_amount: String,
    pub net_amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PaymentsReport {
    pub methods: Vec<PaymentMethodRow>,
    pub payment_count: i64,
    pub payment_amount: String,
    pub refund_count: i64,
    pub refund_amount: String,
    pub net_amount: String,
    pub tips: String,
    pub service_charges: String,
}

/// Per-rate tax breakdown row (currently a single synthetic bucket)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxRateRow {
    pub rate: String,
    pub taxable_amount: String,
    pub tax_collected: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TaxReport {
    pub taxable: String,
    pub non_taxable: String,
    pub total: String,
    pub by_rate: Vec<TaxRateRow>,
}

/// Full daily summary payload
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DailySummaryReport {
    pub business_date: String,
    pub has_activity: bool,
    pub totals: BucketRow,
    pub sales_by_department: Vec<BucketRow>,
    pub sales_by_daypart: Vec<BucketRow>,
    pub revenue_centers: Vec<BucketRow>,
    pub sales_by_order_type: Vec<BucketRow>,
    pub exceptions: ExceptionsReport,
    pub payments: PaymentsReport,
    pub tax: TaxReport,
}

// ==================== Activity report ====================

/// Per-employee activity summary row
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmployeeActivityRow {
    pub employee_id: i64,
    pub employee_name: String,
    /// Distinct orders touched
    pub total_orders: i64,
    /// Sessions still open
    pub active_orders: i64,
    pub completed_sessions: i64,
    pub total_time_minutes: i64,
    /// total_time_minutes / completed_sessions, 0 with no completed sessions
    pub avg_time_per_order: f64,
}

/// One payment-history entry on an order activity record
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderPaymentEntry {
    pub id: i64,
    pub method: String,
    pub amount: String,
    pub tip_amount: String,
    pub status: PaymentStatus,
    /// Derived by the status/refunded_payment_id rule
    pub is_refund: bool,
    pub created_at: i64,
}

/// One grouped item line inside a session (duplicates combined by name)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SessionItemEntry {
    pub name: String,
    pub quantity: i64,
    pub amount: String,
    pub hold: bool,
    pub fire: bool,
    pub void: bool,
}

/// One employee session on an order
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderSessionEntry {
    pub employee_id: i64,
    pub employee_name: String,
    pub start_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    pub is_open: bool,
    /// Minutes between start and end; `None` while the session is open
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    pub items: Vec<SessionItemEntry>,
}

/// One order touched by any session in the window
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OrderActivityRow {
    pub order_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    pub status: String,
    pub created_at: i64,
    /// Sum of non-void item net amounts
    pub order_total: String,
    pub payments: Vec<OrderPaymentEntry>,
    pub sessions: Vec<OrderSessionEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActivityTotals {
    pub total_sessions: i64,
    pub open_sessions: i64,
    pub completed_sessions: i64,
    pub total_time_minutes: i64,
}

/// Full employee-activity payload
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ActivityReport {
    pub business_date: String,
    pub has_activity: bool,
    pub per_employee: Vec<EmployeeActivityRow>,
    pub open_orders: Vec<OrderActivityRow>,
    pub closed_orders: Vec<OrderActivityRow>,
    pub totals: ActivityTotals,
}
