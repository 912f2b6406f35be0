//! Exceptions calculator
//!
//! Tallies comped (discounted) and voided items into the fixed exception
//! category table. The reason behind a discount is not modeled, so every
//! discounted line lands in "Marketing Comps"; "Organizational" is
//! reserved and always zero under current rules. A voided line with a
//! discount shows up in both Voids and Marketing Comps — legacy behavior,
//! kept as-is.

use rust_decimal::Decimal;
use shared::models::OrderSnapshot;

use super::classify::classify;

pub const MARKETING_COMPS: &str = "Marketing Comps";
pub const ORGANIZATIONAL: &str = "Organizational";
pub const VOIDS: &str = "Voids";

/// The fixed, ordered exception category table
pub const EXCEPTION_CATEGORIES: [&str; 3] = [MARKETING_COMPS, ORGANIZATIONAL, VOIDS];

#[derive(Debug, Clone, Default)]
pub struct ExceptionTally {
    pub name: String,
    pub action_count: i64,
    pub amount: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct ExceptionsSummary {
    /// One row per fixed category, always all three, in table order
    pub categories: Vec<ExceptionTally>,
    pub total_actions: i64,
    pub total_amount: Decimal,
}

pub fn compute_exceptions(orders: &[OrderSnapshot]) -> ExceptionsSummary {
    let mut comps = ExceptionTally {
        name: MARKETING_COMPS.to_string(),
        ..Default::default()
    };
    let organizational = ExceptionTally {
        name: ORGANIZATIONAL.to_string(),
        ..Default::default()
    };
    let mut voids = ExceptionTally {
        name: VOIDS.to_string(),
        ..Default::default()
    };

    for order in orders {
        for item in order.items() {
            let facts = classify(item);
            if facts.discount > Decimal::ZERO {
                comps.action_count += 1;
                comps.amount += facts.discount;
            }
            if facts.is_void {
                voids.action_count += 1;
                voids.amount += facts.gross;
            }
        }
    }

    let categories = vec![comps, organizational, voids];
    let total_actions = categories.iter().map(|c| c.action_count).sum();
    let total_amount = categories.iter().map(|c| c.amount).sum();

    ExceptionsSummary {
        categories,
        total_actions,
        total_amount,
    }
}
