//! Payments reconciler
//!
//! Splits payment-history records into payments vs refunds per payment
//! method using the legacy sign-of-amount rule: a non-negative amount is
//! a payment, a negative amount is a refund (tracked by absolute value).
//!
//! This is deliberately independent of `PaymentRecord::is_refund()` (the
//! status/refunded_payment_id rule), which is authoritative wherever an
//! individual record is flagged. The two can disagree for malformed data
//! (e.g. a REFUNDED record stored with a positive amount); the
//! discrepancy is documented and tested rather than silently unified.

use rust_decimal::Decimal;
use shared::models::OrderSnapshot;

use super::buckets::OrderedBuckets;
use crate::money::to_decimal;

/// Per-method payment/refund tallies
#[derive(Debug, Clone, Default)]
pub struct MethodTally {
    pub payment_count: i64,
    pub payment_amount: Decimal,
    pub refund_count: i64,
    pub refund_amount: Decimal,
}

impl MethodTally {
    pub fn net_amount(&self) -> Decimal {
        self.payment_amount - self.refund_amount
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaymentsSummary {
    /// Method rows in first-seen order, keyed by the raw stored method
    /// string (case-sensitive)
    pub methods: OrderedBuckets<MethodTally>,
    pub totals: MethodTally,
    /// Tips across non-negative payment records
    pub tips: Decimal,
    /// Service charges (order-level gratuity)
    pub service_charges: Decimal,
}

pub fn reconcile(orders: &[OrderSnapshot]) -> PaymentsSummary {
    let mut summary = PaymentsSummary::default();

    for order in orders {
        summary.service_charges += to_decimal(order.gratuity_amount);

        for record in &order.payments {
            let amount = to_decimal(record.amount);
            let tally = summary.methods.entry(&record.method);
            if amount >= Decimal::ZERO {
                tally.payment_count += 1;
                tally.payment_amount += amount;
                summary.totals.payment_count += 1;
                summary.totals.payment_amount += amount;
                summary.tips += to_decimal(record.tip_amount);
            } else {
                tally.refund_count += 1;
                tally.refund_amount += amount.abs();
                summary.totals.refund_count += 1;
                summary.totals.refund_amount += amount.abs();
            }
        }
    }

    summary
}
