//! Report assembler
//!
//! Pure orchestration: given the loaded snapshot and the report context,
//! runs the calculators and merges their outputs into the wire payload.
//! Nothing here touches the database, and no calculator mutates another's
//! inputs — calling twice with the same snapshot yields identical output.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shared::models::{
    AccessLogRecord, ActivityReport, BucketRow, DailySummaryReport, ExceptionRow,
    ExceptionsReport, OrderSnapshot, PaymentMethodRow, PaymentsReport, TaxRateRow, TaxReport,
};

use super::activity::summarize_activity;
use super::buckets::{
    BucketTotals, DaypartRange, bucket_orders, daypart_for_hour, default_dayparts,
    department_buckets,
};
use super::exceptions::compute_exceptions;
use super::payments::reconcile;
use super::tax::{distribute_tax_by_department, tax_by_rate, tax_summary};
use crate::money::{format_money, percent_of};
use crate::utils::time::local_hour;

/// Bucket name for orders without an assigned revenue center
pub const DEFAULT_REVENUE_CENTER: &str = "Main Dining";

/// Everything the assembler needs besides the snapshot itself
#[derive(Debug, Clone)]
pub struct ReportContext {
    /// Business date being reported (YYYY-MM-DD)
    pub business_date: String,
    pub tz: chrono_tz::Tz,
    pub dayparts: Vec<DaypartRange>,
    /// Configured food-tax percentage for the synthetic per-rate bucket
    pub food_tax_percent: Decimal,
    pub employee_names: HashMap<i64, String>,
}

impl ReportContext {
    pub fn new(business_date: String, tz: chrono_tz::Tz, food_tax_percent: Decimal) -> Self {
        Self {
            business_date,
            tz,
            dayparts: default_dayparts(),
            food_tax_percent,
            employee_names: HashMap::new(),
        }
    }
}

/// True when the window saw anything reportable: a completed order, or
/// nonzero gross sales from still-open orders.
pub fn has_activity(orders: &[OrderSnapshot], grand: &BucketTotals) -> bool {
    orders.iter().any(|o| o.status.is_completed()) || !grand.gross.is_zero()
}

/// Render one bucket into its wire row; percentages are relative to the
/// grand totals (independently for gross and net)
fn bucket_row(name: &str, bucket: &BucketTotals, grand: &BucketTotals) -> BucketRow {
    let avg_order = if bucket.orders > 0 {
        bucket.net / Decimal::from(bucket.orders)
    } else {
        Decimal::ZERO
    };
    let ppa = if bucket.guests > 0 {
        bucket.net / Decimal::from(bucket.guests)
    } else {
        Decimal::ZERO
    };
    BucketRow {
        name: name.to_string(),
        gross_sales: format_money(bucket.gross),
        net_sales: format_money(bucket.net),
        tax: format_money(bucket.tax),
        comps: format_money(bucket.comps),
        voids: format_money(bucket.voids),
        fees: format_money(bucket.fees),
        orders: bucket.orders,
        guests: bucket.guests,
        avg_order: format_money(avg_order),
        ppa: format_money(ppa),
        gross_sales_percent: format_money(percent_of(bucket.gross, grand.gross)),
        net_sales_percent: format_money(percent_of(bucket.net, grand.net)),
        sub_departments: Vec::new(),
    }
}

pub fn assemble_daily_summary(orders: &[OrderSnapshot], ctx: &ReportContext) -> DailySummaryReport {
    // Grand totals: one canonical accumulation over every order in the
    // window, the denominator for every percentage below.
    let mut grand = BucketTotals::default();
    for order in orders {
        grand.add_order(order);
    }

    // Departments (item-level, nested), with tax distributed afterwards
    let mut departments = department_buckets(orders);
    for (name, tax) in distribute_tax_by_department(orders) {
        departments.entry(&name).totals.tax = tax;
    }
    let sales_by_department = departments
        .iter()
        .map(|(name, dept)| {
            let mut row = bucket_row(name, &dept.totals, &grand);
            row.sub_departments = dept
                .subs
                .iter()
                .map(|(sub_name, sub)| bucket_row(sub_name, &sub.totals, &grand))
                .collect();
            row
        })
        .collect();

    // Order-level bucketings
    let (dayparts, _) = bucket_orders(orders, |o| {
        daypart_for_hour(&ctx.dayparts, local_hour(o.created_at, ctx.tz)).to_string()
    });
    let (revenue_centers, _) = bucket_orders(orders, |o| {
        o.revenue_center
            .clone()
            .unwrap_or_else(|| DEFAULT_REVENUE_CENTER.to_string())
    });
    let (order_types, _) = bucket_orders(orders, |o| o.order_type.clone());

    let render = |set: &super::buckets::OrderedBuckets<BucketTotals>| -> Vec<BucketRow> {
        set.iter()
            .map(|(name, bucket)| bucket_row(name, bucket, &grand))
            .collect()
    };

    // Exceptions
    let exceptions = compute_exceptions(orders);
    let exceptions = ExceptionsReport {
        categories: exceptions
            .categories
            .iter()
            .map(|c| ExceptionRow {
                name: c.name.clone(),
                action_count: c.action_count,
                amount: format_money(c.amount),
                gross_sales_percent: format_money(percent_of(c.amount, grand.gross)),
                net_sales_percent: format_money(percent_of(c.amount, grand.net)),
            })
            .collect(),
        total_actions: exceptions.total_actions,
        total_amount: format_money(exceptions.total_amount),
    };

    // Payment reconciliation
    let reconciled = reconcile(orders);
    let payments = PaymentsReport {
        methods: reconciled
            .methods
            .iter()
            .map(|(name, tally)| PaymentMethodRow {
                name: name.clone(),
                payment_count: tally.payment_count,
                payment_amount: format_money(tally.payment_amount),
                refund_count: tally.refund_count,
                refund_amount: format_money(tally.refund_amount),
                net_amount: format_money(tally.net_amount()),
            })
            .collect(),
        payment_count: reconciled.totals.payment_count,
        payment_amount: format_money(reconciled.totals.payment_amount),
        refund_count: reconciled.totals.refund_count,
        refund_amount: format_money(reconciled.totals.refund_amount),
        net_amount: format_money(reconciled.totals.net_amount()),
        tips: format_money(reconciled.tips),
        service_charges: format_money(reconciled.service_charges),
    };

    // Tax
    let summary = tax_summary(orders);
    let tax = TaxReport {
        taxable: format_money(summary.taxable),
        non_taxable: format_money(summary.non_taxable),
        total: format_money(summary.total),
        by_rate: tax_by_rate(orders, ctx.food_tax_percent)
            .iter()
            .map(|b| TaxRateRow {
                rate: format_money(b.rate_percent),
                taxable_amount: format_money(b.taxable_amount),
                tax_collected: format_money(b.tax_collected),
            })
            .collect(),
    };

    DailySummaryReport {
        business_date: ctx.business_date.clone(),
        has_activity: has_activity(orders, &grand),
        totals: bucket_row("Total", &grand, &grand),
        sales_by_department,
        sales_by_daypart: render(&dayparts),
        revenue_centers: render(&revenue_centers),
        sales_by_order_type: render(&order_types),
        exceptions,
        payments,
        tax,
    }
}

pub fn assemble_activity_summary(
    orders: &[OrderSnapshot],
    logs: &[AccessLogRecord],
    ctx: &ReportContext,
) -> ActivityReport {
    let mut grand = BucketTotals::default();
    for order in orders {
        grand.add_order(order);
    }

    let output = summarize_activity(logs, orders, &ctx.employee_names);

    ActivityReport {
        business_date: ctx.business_date.clone(),
        has_activity: has_activity(orders, &grand),
        per_employee: output.per_employee,
        open_orders: output.open_orders,
        closed_orders: output.closed_orders,
        totals: output.totals,
    }
}
