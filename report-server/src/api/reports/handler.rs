//! Report API handlers
//!
//! Parameter validation happens up front (422 before any snapshot load);
//! an empty window is a normal 200 with `has_activity: false`.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;
use shared::models::{ActivityReport, DailySummaryReport, OrderSnapshot};

use crate::api::context::BusinessContext;
use crate::core::ServerState;
use crate::db::repository::{
    AccessLogRepository, BusinessRepository, EmployeeRepository, OrderRepository,
};
use crate::money::to_decimal;
use crate::reports::{ReportContext, assemble_activity_summary, assemble_daily_summary};
use crate::utils::{AppError, AppResult, ErrorCode, time};

/// Query params shared by both report endpoints
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// Business date (YYYY-MM-DD); defaults to today in the business timezone
    pub date: Option<String>,
    /// Optional employee filter; kept as a string so a malformed value is
    /// a 422 report-parameter error rather than a generic 400
    pub employee_id: Option<String>,
    /// Requested output format. The server always emits the structured
    /// JSON payload; html/pdf are rendered by the external collaborator
    /// that consumes it.
    pub format: Option<String>,
}

const KNOWN_FORMATS: [&str; 3] = ["json", "html", "pdf"];

struct PreparedRequest {
    business_id: i64,
    start: i64,
    end: i64,
    employee_filter: Option<i64>,
    ctx: ReportContext,
}

/// Validate parameters and build the report context. Rejections happen
/// here, before anything is loaded.
async fn prepare(
    state: &ServerState,
    business: BusinessContext,
    query: &ReportQuery,
) -> AppResult<PreparedRequest> {
    let tz = state.config.timezone;

    if let Some(format) = &query.format {
        if !KNOWN_FORMATS.contains(&format.as_str()) {
            return Err(AppError::report_param(format!(
                "Unknown report format: {}",
                format
            )));
        }
    }

    let date = match &query.date {
        Some(raw) => time::parse_date(raw)?,
        None => time::today(tz),
    };

    let employee_filter = match &query.employee_id {
        Some(raw) => {
            let employee_id: i64 = raw.parse().map_err(|_| {
                AppError::report_param(format!("Invalid employee filter: {}", raw))
            })?;
            let employees = EmployeeRepository::new(state.pool().clone());
            if !employees
                .belongs_to(business.business_id, employee_id)
                .await
                .map_err(AppError::from)?
            {
                return Err(AppError::with_message(
                    ErrorCode::EmployeeNotInBusiness,
                    format!("Employee {} does not belong to this business", employee_id),
                ));
            }
            Some(employee_id)
        }
        None => None,
    };

    let food_tax_percent = BusinessRepository::new(state.pool().clone())
        .find(business.business_id)
        .await
        .map_err(AppError::from)?
        .and_then(|b| b.food_tax_percent)
        .unwrap_or(state.config.default_food_tax_percent);

    let mut ctx = ReportContext::new(
        date.format("%Y-%m-%d").to_string(),
        tz,
        to_decimal(food_tax_percent),
    );
    ctx.employee_names = EmployeeRepository::new(state.pool().clone())
        .names(business.business_id)
        .await
        .map_err(AppError::from)?;

    Ok(PreparedRequest {
        business_id: business.business_id,
        start: time::day_start_millis(date, tz),
        end: time::day_end_millis(date, tz),
        employee_filter,
        ctx,
    })
}

async fn load_orders(
    state: &ServerState,
    prepared: &PreparedRequest,
    employee_filter: Option<i64>,
) -> AppResult<Vec<OrderSnapshot>> {
    OrderRepository::new(state.pool().clone())
        .load_window(
            prepared.business_id,
            prepared.start,
            prepared.end,
            employee_filter,
        )
        .await
        .map_err(AppError::from)
}

/// GET /api/reports/daily-summary - full end-of-day financial report
pub async fn daily_summary(
    State(state): State<ServerState>,
    business: BusinessContext,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<DailySummaryReport>> {
    let prepared = prepare(&state, business, &query).await?;

    tracing::debug!(
        business_id = prepared.business_id,
        date = %prepared.ctx.business_date,
        employee_filter = ?prepared.employee_filter,
        "Assembling daily summary"
    );

    // The daily summary filter narrows to orders created by the employee
    let orders = load_orders(&state, &prepared, prepared.employee_filter).await?;
    Ok(Json(assemble_daily_summary(&orders, &prepared.ctx)))
}

/// GET /api/reports/activity - employee order-access activity report
pub async fn activity(
    State(state): State<ServerState>,
    business: BusinessContext,
    Query(query): Query<ReportQuery>,
) -> AppResult<Json<ActivityReport>> {
    let prepared = prepare(&state, business, &query).await?;

    tracing::debug!(
        business_id = prepared.business_id,
        date = %prepared.ctx.business_date,
        employee_filter = ?prepared.employee_filter,
        "Assembling activity report"
    );

    // The activity filter narrows to the employee's sessions; orders stay
    // unfiltered so any touched order can be enriched.
    let orders = load_orders(&state, &prepared, None).await?;
    let logs = AccessLogRepository::new(state.pool().clone())
        .load_window(
            prepared.business_id,
            prepared.start,
            prepared.end,
            prepared.employee_filter,
        )
        .await
        .map_err(AppError::from)?;

    Ok(Json(assemble_activity_summary(&orders, &logs, &prepared.ctx)))
}
