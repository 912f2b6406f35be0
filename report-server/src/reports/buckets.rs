//! Bucketing engine
//!
//! Generic grouping of orders/items into named buckets with
//! insertion-ordered, strongly-typed accumulators. Bucket names come from
//! key functions (daypart, revenue center, order type) or from the item
//! classifier (department / sub-department); the first-seen order of keys
//! is preserved so report output is deterministic.

use std::collections::{HashMap, HashSet};

use rust_decimal::Decimal;
use shared::models::OrderSnapshot;

use super::classify::classify;

/// Insertion-ordered map from bucket name to accumulator
#[derive(Debug, Clone, Default)]
pub struct OrderedBuckets<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T: Default> OrderedBuckets<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Get the accumulator for `name`, inserting a default one on first sight
    pub fn entry(&mut self, name: &str) -> &mut T {
        let idx = match self.index.get(name) {
            Some(idx) => *idx,
            None => {
                self.entries.push((name.to_string(), T::default()));
                let idx = self.entries.len() - 1;
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|idx| &self.entries[*idx].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, T)> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut (String, T)> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Monetary and count totals for one bucket
#[derive(Debug, Clone, Default)]
pub struct BucketTotals {
    pub gross: Decimal,
    pub net: Decimal,
    pub tax: Decimal,
    pub comps: Decimal,
    pub voids: Decimal,
    pub fees: Decimal,
    pub orders: i64,
    pub guests: i64,
}

impl BucketTotals {
    /// Fold a whole order into this bucket (order-level bucketing)
    pub fn add_order(&mut self, order: &OrderSnapshot) {
        self.orders += 1;
        self.guests += order_guest_count(order);
        self.fees += crate::money::to_decimal(order.fee_amount);
        // Tax only flows from completed orders; open orders contribute
        // gross/net but never tax.
        if order.status.is_completed() {
            self.tax += crate::money::to_decimal(order.tax_amount);
        }
        for item in order.items() {
            self.add_item(item);
        }
    }

    fn add_item(&mut self, item: &shared::models::OrderItemSnapshot) {
        let facts = classify(item);
        if facts.is_void {
            self.voids += facts.gross;
        } else {
            self.gross += facts.gross;
            self.net += facts.net;
            self.comps += facts.discount;
        }
    }
}

/// Guest count for one order
///
/// Per check: distinct non-null customer numbers among its items, minimum
/// one per check; summed across checks. An order with no checks still
/// counts one guest.
pub fn order_guest_count(order: &OrderSnapshot) -> i64 {
    if order.checks.is_empty() {
        return 1;
    }
    let mut total = 0i64;
    for check in &order.checks {
        let distinct: HashSet<i64> = check.items.iter().filter_map(|i| i.customer_no).collect();
        total += (distinct.len() as i64).max(1);
    }
    total.max(1)
}

/// Group whole orders into buckets via a key function
pub fn bucket_orders<K>(
    orders: &[OrderSnapshot],
    key_fn: K,
) -> (OrderedBuckets<BucketTotals>, BucketTotals)
where
    K: Fn(&OrderSnapshot) -> String,
{
    let mut buckets: OrderedBuckets<BucketTotals> = OrderedBuckets::new();
    let mut totals = BucketTotals::default();
    for order in orders {
        buckets.entry(&key_fn(order)).add_order(order);
        totals.add_order(order);
    }
    (buckets, totals)
}

// ==================== Dayparts ====================

/// One named hour range; start inclusive, end exclusive. A range whose
/// end is less than or equal to its start wraps past midnight.
#[derive(Debug, Clone)]
pub struct DaypartRange {
    pub name: String,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl DaypartRange {
    pub fn new(name: &str, start_hour: u32, end_hour: u32) -> Self {
        Self {
            name: name.to_string(),
            start_hour,
            end_hour,
        }
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start_hour < self.end_hour {
            hour >= self.start_hour && hour < self.end_hour
        } else {
            // Wraps midnight (e.g. 23:00-06:00)
            hour >= self.start_hour || hour < self.end_hour
        }
    }
}

/// Bucket name used when no range matches
pub const DEFAULT_DAYPART: &str = "Dinner";

/// The fixed daypart table, in legacy evaluation order (first match wins;
/// the order reproduces the historical tie-break at boundary hours).
pub fn default_dayparts() -> Vec<DaypartRange> {
    vec![
        DaypartRange::new("Lunch", 11, 16),
        DaypartRange::new("Dinner", 16, 23),
        DaypartRange::new("Breakfast", 6, 11),
        DaypartRange::new("Late Night", 23, 6),
    ]
}

/// Resolve an hour of day to its daypart name
pub fn daypart_for_hour(ranges: &[DaypartRange], hour: u32) -> &str {
    ranges
        .iter()
        .find(|r| r.contains(hour))
        .map(|r| r.name.as_str())
        .unwrap_or(DEFAULT_DAYPART)
}

// ==================== Departments ====================

/// Sub-department accumulator (items + distinct orders)
#[derive(Debug, Clone, Default)]
pub struct SubDepartmentAccum {
    pub totals: BucketTotals,
    seen_orders: HashSet<i64>,
}

/// Department accumulator with nested sub-departments
#[derive(Debug, Clone, Default)]
pub struct DepartmentAccum {
    pub totals: BucketTotals,
    pub subs: OrderedBuckets<SubDepartmentAccum>,
    seen_orders: HashSet<i64>,
}

/// Item-level bucketing into departments with nested sub-departments.
///
/// Department `tax` is left at zero here; the tax calculator distributes
/// order-level tax across departments afterwards (only at the department
/// level, never into sub-departments).
pub fn department_buckets(orders: &[OrderSnapshot]) -> OrderedBuckets<DepartmentAccum> {
    let mut departments: OrderedBuckets<DepartmentAccum> = OrderedBuckets::new();

    for order in orders {
        let guests = order_guest_count(order);
        for item in order.items() {
            let facts = classify(item);
            let dept = departments.entry(&facts.department);

            if dept.seen_orders.insert(order.id) {
                dept.totals.orders += 1;
                dept.totals.guests += guests;
            }
            if facts.is_void {
                dept.totals.voids += facts.gross;
            } else {
                dept.totals.gross += facts.gross;
                dept.totals.net += facts.net;
                dept.totals.comps += facts.discount;
            }

            if let Some(sub_name) = &facts.sub_department {
                let sub = dept.subs.entry(sub_name);
                if sub.seen_orders.insert(order.id) {
                    sub.totals.orders += 1;
                    sub.totals.guests += guests;
                }
                if facts.is_void {
                    sub.totals.voids += facts.gross;
                } else {
                    sub.totals.gross += facts.gross;
                    sub.totals.net += facts.net;
                    sub.totals.comps += facts.discount;
                }
            }
        }
    }

    departments
}

/// Per-department gross sales over completed orders only — the basis for
/// proportional tax distribution.
pub fn completed_department_gross(orders: &[OrderSnapshot]) -> Vec<(String, Decimal)> {
    let mut buckets: OrderedBuckets<Decimal> = OrderedBuckets::new();
    for order in orders.iter().filter(|o| o.status.is_completed()) {
        for item in order.items() {
            let facts = classify(item);
            if !facts.is_void {
                *buckets.entry(&facts.department) += facts.gross;
            }
        }
    }
    buckets
        .iter()
        .map(|(name, gross)| (name.clone(), *gross))
        .collect()
}
