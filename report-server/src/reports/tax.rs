//! Tax calculator
//!
//! Only COMPLETED orders contribute to tax figures. Net sales are
//! taxable; gratuity and fees are not. Order-level tax is distributed
//! across departments proportionally to each department's share of
//! completed-order gross sales — a known approximation carried over from
//! the historical reports rather than true per-item tax, kept so report
//! semantics stay comparable across time.

use rust_decimal::Decimal;
use shared::models::OrderSnapshot;

use super::buckets::completed_department_gross;
use super::classify::classify;
use crate::money::{round_money, to_decimal};

#[derive(Debug, Clone, Default)]
pub struct TaxSummary {
    /// Net sales of completed orders
    pub taxable: Decimal,
    /// Gratuity + fees of completed orders
    pub non_taxable: Decimal,
    /// Tax collected on completed orders
    pub total: Decimal,
}

pub fn tax_summary(orders: &[OrderSnapshot]) -> TaxSummary {
    let mut summary = TaxSummary::default();
    for order in orders.iter().filter(|o| o.status.is_completed()) {
        summary.total += to_decimal(order.tax_amount);
        summary.non_taxable += to_decimal(order.gratuity_amount) + to_decimal(order.fee_amount);
        for item in order.items() {
            let facts = classify(item);
            if !facts.is_void {
                summary.taxable += facts.net;
            }
        }
    }
    summary
}

/// Distribute total collected tax across departments, proportional to each
/// department's share of completed-order gross sales.
///
/// Departments are returned in first-seen order. The last department
/// absorbs the rounding residue so the distributed amounts always sum to
/// the collected total exactly.
pub fn distribute_tax_by_department(orders: &[OrderSnapshot]) -> Vec<(String, Decimal)> {
    let shares = completed_department_gross(orders);
    let total_gross: Decimal = shares.iter().map(|(_, g)| *g).sum();
    let total_tax: Decimal = orders
        .iter()
        .filter(|o| o.status.is_completed())
        .map(|o| to_decimal(o.tax_amount))
        .sum();

    if total_gross.is_zero() || shares.is_empty() {
        return shares.into_iter().map(|(name, _)| (name, Decimal::ZERO)).collect();
    }

    let mut distributed = Vec::with_capacity(shares.len());
    let mut assigned = Decimal::ZERO;
    let last = shares.len() - 1;
    for (idx, (name, gross)) in shares.into_iter().enumerate() {
        let amount = if idx == last {
            total_tax - assigned
        } else {
            round_money(total_tax * gross / total_gross)
        };
        assigned += amount;
        distributed.push((name, amount));
    }
    distributed
}

/// Single synthetic per-rate bucket at the business's configured food-tax
/// percentage. Kept until the model grows true multi-rate tax.
#[derive(Debug, Clone, Default)]
pub struct TaxRateBucket {
    pub rate_percent: Decimal,
    pub taxable_amount: Decimal,
    pub tax_collected: Decimal,
}

pub fn tax_by_rate(orders: &[OrderSnapshot], rate_percent: Decimal) -> Vec<TaxRateBucket> {
    let summary = tax_summary(orders);
    vec![TaxRateBucket {
        rate_percent,
        taxable_amount: summary.taxable,
        tax_collected: summary.total,
    }]
}
