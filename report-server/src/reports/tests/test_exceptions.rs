use super::*;
use crate::reports::exceptions::{
    EXCEPTION_CATEGORIES, MARKETING_COMPS, ORGANIZATIONAL, VOIDS, compute_exceptions,
};
use shared::models::ItemStatus;

#[test]
fn test_all_three_categories_always_present() {
    let summary = compute_exceptions(&[]);
    let names: Vec<&str> = summary.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, EXCEPTION_CATEGORIES.to_vec());
    assert_eq!(summary.total_actions, 0);
    assert_eq!(summary.total_amount, Decimal::ZERO);
}

#[test]
fn test_discounted_items_land_in_marketing_comps() {
    let orders = vec![completed_order(
        1,
        vec![
            item("Burger", 10.0, 2, 2.0, ItemStatus::Fire),
            item("Fries", 4.0, 1, 0.0, ItemStatus::Fire),
        ],
    )];
    let summary = compute_exceptions(&orders);
    let comps = &summary.categories[0];
    assert_eq!(comps.name, MARKETING_COMPS);
    assert_eq!(comps.action_count, 1);
    assert_eq!(comps.amount, Decimal::from(2));
}

#[test]
fn test_voided_items_land_in_voids_at_gross() {
    let orders = vec![completed_order(
        1,
        vec![item("Steak", 25.0, 2, 0.0, ItemStatus::Void)],
    )];
    let summary = compute_exceptions(&orders);
    let voids = &summary.categories[2];
    assert_eq!(voids.name, VOIDS);
    assert_eq!(voids.action_count, 1);
    assert_eq!(voids.amount, Decimal::from(50));
}

#[test]
fn test_organizational_is_reserved_and_zero() {
    let orders = vec![completed_order(
        1,
        vec![item("Burger", 10.0, 1, 1.0, ItemStatus::Void)],
    )];
    let summary = compute_exceptions(&orders);
    let organizational = &summary.categories[1];
    assert_eq!(organizational.name, ORGANIZATIONAL);
    assert_eq!(organizational.action_count, 0);
    assert_eq!(organizational.amount, Decimal::ZERO);
}

#[test]
fn test_voided_discounted_item_counts_in_both_categories() {
    // Legacy double-listing: the void tracks gross, the comp tracks the
    // discount that was on the line
    let orders = vec![completed_order(
        1,
        vec![item("Burger", 10.0, 1, 1.5, ItemStatus::Void)],
    )];
    let summary = compute_exceptions(&orders);
    assert_eq!(summary.categories[0].action_count, 1);
    assert_eq!(summary.categories[0].amount, crate::money::to_decimal(1.5));
    assert_eq!(summary.categories[2].action_count, 1);
    assert_eq!(summary.categories[2].amount, Decimal::from(10));
    assert_eq!(summary.total_actions, 2);
}
