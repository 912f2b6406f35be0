//! Line-item classification
//!
//! One place for the rules every calculator leans on: voided items never
//! contribute to gross/net sales (their gross feeds void totals instead),
//! net is gross minus the discount, and the two-level category tree
//! resolves to a department / sub-department pair with an
//! "Uncategorized" fallback for deleted categories.

use rust_decimal::Decimal;
use shared::models::OrderItemSnapshot;

use crate::money::{round_money, to_decimal};

/// Department name used when an item's category chain is gone
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Classified view of a single order item
#[derive(Debug, Clone)]
pub struct ItemFacts {
    pub is_void: bool,
    pub is_temp: bool,
    /// unit_price * quantity, always (even for voided items)
    pub gross: Decimal,
    /// 0 for voided items, gross - discount otherwise
    pub net: Decimal,
    /// Discount applied to the line (0 for voided items' net purposes,
    /// but reported as stored)
    pub discount: Decimal,
    pub department: String,
    pub sub_department: Option<String>,
}

pub fn classify(item: &OrderItemSnapshot) -> ItemFacts {
    let gross = round_money(to_decimal(item.unit_price) * Decimal::from(item.quantity));
    let discount = to_decimal(item.discount_amount);
    let is_void = item.status.is_void();
    let net = if is_void { Decimal::ZERO } else { gross - discount };

    let (department, sub_department) = match (&item.parent_category_name, &item.category_name) {
        (Some(parent), Some(category)) => (parent.clone(), Some(category.clone())),
        // A dangling parent without a leaf cannot come out of the loader,
        // but resolves sanely anyway.
        (Some(parent), None) => (parent.clone(), None),
        (None, Some(category)) => (category.clone(), None),
        (None, None) => (UNCATEGORIZED.to_string(), None),
    };

    ItemFacts {
        is_void,
        is_temp: item.status.is_temp(),
        gross,
        net,
        discount,
        department,
        sub_department,
    }
}
