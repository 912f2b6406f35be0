//! Order snapshot projections
//!
//! The reporting window is loaded once per request as a nested, read-only
//! graph: orders own their checks, checks own their items, and payment
//! records hang off the order. Nothing here is ever written back.

use serde::{Deserialize, Serialize};

/// Order status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Open,
    Completed,
    Closed,
    Void,
}

impl OrderStatus {
    /// Parse a stored status string; unknown values count as still open
    pub fn parse(raw: &str) -> Self {
        match raw {
            "COMPLETED" => Self::Completed,
            "CLOSED" => Self::Closed,
            "VOID" => Self::Void,
            _ => Self::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Completed => "COMPLETED",
            Self::Closed => "CLOSED",
            Self::Void => "VOID",
        }
    }

    pub fn is_completed(&self) -> bool {
        *self == Self::Completed
    }

    /// Completed or closed — the order is finished from the floor's
    /// perspective and belongs in the "closed" half of activity reports
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Closed)
    }
}

/// Line item status as stored (legacy integer codes)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    Hold,
    #[default]
    Fire,
    Temp,
    Void,
}

impl ItemStatus {
    /// Map the stored integer code; unknown codes count as fired
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Hold,
            2 => Self::Temp,
            3 => Self::Void,
            _ => Self::Fire,
        }
    }

    pub fn is_void(&self) -> bool {
        *self == Self::Void
    }

    pub fn is_temp(&self) -> bool {
        *self == Self::Temp
    }
}

/// Payment record status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    Completed,
    Failed,
    Cancelled,
    Refunded,
}

impl PaymentStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "FAILED" => Self::Failed,
            "CANCELLED" => Self::Cancelled,
            "REFUNDED" => Self::Refunded,
            _ => Self::Completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Cancelled => "CANCELLED",
            Self::Refunded => "REFUNDED",
        }
    }
}

/// A single payment-history record
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PaymentRecord {
    pub id: i64,
    pub order_id: i64,
    pub check_id: Option<i64>,
    pub employee_id: Option<i64>,
    pub amount: f64,
    #[serde(default)]
    pub tip_amount: f64,
    /// Payment method as stored (raw, case-sensitive grouping key)
    pub method: String,
    pub status: PaymentStatus,
    /// 0 = not a refund of another payment
    #[serde(default)]
    pub refunded_payment_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub created_at: i64,
}

impl PaymentRecord {
    /// Authoritative refund rule: refunded status or a back-reference to
    /// the refunded payment. The payments reconciler deliberately uses the
    /// legacy sign-of-amount split instead; the two can disagree for
    /// malformed data and are kept separate on purpose.
    pub fn is_refund(&self) -> bool {
        self.status == PaymentStatus::Refunded || self.refunded_payment_id != 0
    }
}

/// A single menu-item line on a check
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderItemSnapshot {
    pub id: i64,
    /// Menu item display name (denormalized at sale time)
    pub name: String,
    /// Leaf category name; `None` when the category was deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Parent category name when the leaf category has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_category_name: Option<String>,
    pub unit_price: f64,
    pub quantity: i64,
    #[serde(default)]
    pub discount_amount: f64,
    pub status: ItemStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<i64>,
    /// Seat/guest number on the check, when captured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_no: Option<i64>,
}

/// A sub-bill within an order
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckSnapshot {
    pub id: i64,
    pub order_id: i64,
    pub items: Vec<OrderItemSnapshot>,
}

/// Order snapshot — one dine-in transaction with its checks and payments
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderSnapshot {
    pub id: i64,
    pub business_id: i64,
    pub status: OrderStatus,
    /// Order type (dine_in, takeout, ...) as stored
    pub order_type: String,
    /// Revenue center / dining area, when assigned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revenue_center: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    pub guest_count: i64,
    pub tax_amount: f64,
    pub fee_amount: f64,
    pub gratuity_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    pub created_at: i64,
    pub checks: Vec<CheckSnapshot>,
    pub payments: Vec<PaymentRecord>,
}

impl OrderSnapshot {
    /// Iterate over every item across all checks
    pub fn items(&self) -> impl Iterator<Item = &OrderItemSnapshot> {
        self.checks.iter().flat_map(|c| c.items.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refund_rule_by_status() {
        let rec = PaymentRecord {
            status: PaymentStatus::Refunded,
            ..Default::default()
        };
        assert!(rec.is_refund());
    }

    #[test]
    fn test_refund_rule_by_back_reference() {
        let rec = PaymentRecord {
            status: PaymentStatus::Completed,
            refunded_payment_id: 42,
            ..Default::default()
        };
        assert!(rec.is_refund());
    }

    #[test]
    fn test_completed_payment_is_not_refund() {
        let rec = PaymentRecord {
            status: PaymentStatus::Completed,
            ..Default::default()
        };
        assert!(!rec.is_refund());
    }

    #[test]
    fn test_item_status_codes() {
        assert_eq!(ItemStatus::from_code(0), ItemStatus::Hold);
        assert_eq!(ItemStatus::from_code(1), ItemStatus::Fire);
        assert_eq!(ItemStatus::from_code(2), ItemStatus::Temp);
        assert_eq!(ItemStatus::from_code(3), ItemStatus::Void);
        // Unknown codes fall back to fired
        assert_eq!(ItemStatus::from_code(7), ItemStatus::Fire);
    }

    #[test]
    fn test_order_status_parse() {
        assert_eq!(OrderStatus::parse("COMPLETED"), OrderStatus::Completed);
        assert_eq!(OrderStatus::parse("CLOSED"), OrderStatus::Closed);
        assert_eq!(OrderStatus::parse("VOID"), OrderStatus::Void);
        assert_eq!(OrderStatus::parse("OPEN"), OrderStatus::Open);
        assert_eq!(OrderStatus::parse("weird"), OrderStatus::Open);
    }
}
