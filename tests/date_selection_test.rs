use std::collections::HashSet;

use booking_core::services::calendar_service::{ClickOutcome, DateSelector};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2025, 1, 1)
}

fn selector_with_booked(booked: &[NaiveDate]) -> DateSelector {
    DateSelector::new(today(), booked.iter().copied().collect())
}

#[test]
fn test_past_and_booked_clicks_are_ignored() {
    let booked = [date(2025, 1, 8)];
    let mut sel = selector_with_booked(&booked);

    assert_eq!(sel.select_date(date(2024, 12, 25)), ClickOutcome::Ignored);
    assert_eq!(sel.select_date(date(2025, 1, 8)), ClickOutcome::Ignored);
    assert_eq!(sel.check_in(), None);
    assert_eq!(sel.check_out(), None);
    assert!(sel.is_selecting_check_in());

    // Also ignored mid-selection
    sel.select_date(date(2025, 1, 10));
    assert_eq!(sel.select_date(date(2025, 1, 8)), ClickOutcome::Ignored);
    assert_eq!(sel.check_in(), Some(date(2025, 1, 10)));
    assert_eq!(sel.check_out(), None);
}

#[test]
fn test_first_valid_click_sets_check_in_and_clears_check_out() {
    let mut sel = selector_with_booked(&[]);
    let outcome = sel.select_date(date(2025, 1, 10));

    assert_eq!(outcome, ClickOutcome::CheckInSelected(date(2025, 1, 10)));
    assert_eq!(sel.check_in(), Some(date(2025, 1, 10)));
    assert_eq!(sel.check_out(), None);
    assert!(!sel.is_selecting_check_in());
}

#[test]
fn test_completing_a_range_commits_once() {
    let mut sel = selector_with_booked(&[]);
    sel.select_date(date(2025, 1, 10));
    let outcome = sel.select_date(date(2025, 1, 15));

    assert_eq!(
        outcome,
        ClickOutcome::RangeCompleted {
            check_in: date(2025, 1, 10),
            check_out: date(2025, 1, 15),
        }
    );
    assert_eq!(sel.nights(), 5);
    // Phase cycles back so the next click starts a fresh pair
    assert!(sel.is_selecting_check_in());

    let outcome = sel.select_date(date(2025, 1, 20));
    assert_eq!(outcome, ClickOutcome::CheckInSelected(date(2025, 1, 20)));
    assert_eq!(sel.check_out(), None);
}

#[test]
fn test_earlier_click_re_anchors_check_in_without_commit() {
    let mut sel = selector_with_booked(&[]);
    sel.select_date(date(2025, 1, 10));
    let outcome = sel.select_date(date(2025, 1, 5));

    assert_eq!(outcome, ClickOutcome::CheckInSelected(date(2025, 1, 5)));
    assert_eq!(sel.check_in(), Some(date(2025, 1, 5)));
    assert_eq!(sel.check_out(), None);
    // Still waiting for a check-out after re-anchoring
    assert!(!sel.is_selecting_check_in());
}

#[test]
fn test_clicking_check_in_again_re_anchors_too() {
    let mut sel = selector_with_booked(&[]);
    sel.select_date(date(2025, 1, 10));
    let outcome = sel.select_date(date(2025, 1, 10));

    assert_eq!(outcome, ClickOutcome::CheckInSelected(date(2025, 1, 10)));
    assert!(!sel.is_selecting_check_in());
}

#[test]
fn test_preseeded_selection_starts_fresh_cycle() {
    let mut sel = selector_with_booked(&[])
        .with_selection(date(2025, 1, 10), date(2025, 1, 15));
    assert_eq!(sel.nights(), 5);
    assert!(sel.is_selecting_check_in());

    sel.select_date(date(2025, 2, 1));
    assert_eq!(sel.check_in(), Some(date(2025, 2, 1)));
    assert_eq!(sel.check_out(), None);
}

#[test]
fn test_total_price_follows_nights() {
    let mut sel = selector_with_booked(&[]).with_price(400.0);
    assert_eq!(sel.total_price(), Some(0.0));

    sel.select_date(date(2025, 1, 10));
    sel.select_date(date(2025, 1, 15));
    assert_eq!(sel.total_price(), Some(2000.0));
}

#[test]
fn test_stale_availability_result_is_not_applied() {
    let mut sel = selector_with_booked(&[]);
    let (year, month) = sel.displayed_month();
    assert_eq!((year, month), (2025, 1));

    sel.next_month();

    // Response for January arrives after navigating to February
    let stale: HashSet<NaiveDate> = [date(2025, 1, 5)].into_iter().collect();
    assert!(!sel.apply_available_dates(2025, 1, stale));
    // Fallback still governs: future dates render available
    assert!(sel.is_available(date(2025, 2, 10)));

    let fresh: HashSet<NaiveDate> = [date(2025, 2, 10)].into_iter().collect();
    assert!(sel.apply_available_dates(2025, 2, fresh));
    assert!(sel.is_available(date(2025, 2, 10)));
    assert!(!sel.is_available(date(2025, 2, 11)));
}

#[test]
fn test_navigation_clears_fetched_availability() {
    let mut sel = selector_with_booked(&[]);
    let fetched: HashSet<NaiveDate> = [date(2025, 1, 5)].into_iter().collect();
    sel.apply_available_dates(2025, 1, fetched);
    assert!(!sel.is_available(date(2025, 1, 6)));

    sel.next_month();
    // Back to the optimistic fallback until the refetch lands
    assert!(sel.is_available(date(2025, 1, 6)));
}

#[test]
fn test_disabled_is_union_of_past_and_booked() {
    let booked = [date(2025, 1, 8)];
    let sel = selector_with_booked(&booked);

    assert!(sel.is_disabled(date(2024, 12, 31)));
    assert!(sel.is_disabled(date(2025, 1, 8)));
    assert!(!sel.is_disabled(date(2025, 1, 9)));
}
