use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rstest::rstest;

use atelier_core::models::availability::{RecurrenceKind, RecurrenceRule};
use atelier_core::scheduling::recurrence::{expand, occurs_on};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
// none: only the anchor itself
#[case(RecurrenceKind::None, (2024, 6, 10), (2024, 6, 10), true)]
#[case(RecurrenceKind::None, (2024, 6, 10), (2024, 6, 17), false)]
// daily: every day from the anchor onward
#[case(RecurrenceKind::Daily, (2024, 6, 10), (2024, 6, 10), true)]
#[case(RecurrenceKind::Daily, (2024, 6, 10), (2024, 6, 11), true)]
#[case(RecurrenceKind::Daily, (2024, 6, 10), (2024, 6, 9), false)]
// weekly: same weekday from the anchor onward
#[case(RecurrenceKind::Weekly, (2024, 6, 10), (2024, 6, 17), true)]
#[case(RecurrenceKind::Weekly, (2024, 6, 10), (2024, 6, 18), false)]
#[case(RecurrenceKind::Weekly, (2024, 6, 10), (2024, 6, 3), false)]
// monthly: same day number from the anchor onward
#[case(RecurrenceKind::Monthly, (2024, 1, 15), (2024, 3, 15), true)]
#[case(RecurrenceKind::Monthly, (2024, 1, 15), (2024, 3, 16), false)]
#[case(RecurrenceKind::Monthly, (2024, 1, 15), (2023, 12, 15), false)]
fn test_occurs_on(
    #[case] kind: RecurrenceKind,
    #[case] anchor: (i32, u32, u32),
    #[case] target: (i32, u32, u32),
    #[case] expected: bool,
) {
    let rule = RecurrenceRule::new(kind);
    let anchor = date(anchor.0, anchor.1, anchor.2);
    let target = date(target.0, target.1, target.2);

    assert_eq!(occurs_on(&rule, anchor, target), expected);
}

#[test]
fn test_occurs_on_respects_end_date() {
    let rule = RecurrenceRule::until(RecurrenceKind::Daily, date(2024, 6, 15));

    assert!(occurs_on(&rule, date(2024, 6, 10), date(2024, 6, 15)));
    assert!(!occurs_on(&rule, date(2024, 6, 10), date(2024, 6, 16)));
}

#[test]
fn test_monthly_rule_skips_short_months() {
    // Anchored on the 31st: April has 30 days, so April has no occurrence.
    let rule = RecurrenceRule::new(RecurrenceKind::Monthly);
    let anchor = date(2024, 1, 31);

    let april = expand(&rule, anchor, date(2024, 4, 1), date(2024, 4, 30));
    assert_eq!(april, vec![]);

    let march = expand(&rule, anchor, date(2024, 3, 1), date(2024, 3, 31));
    assert_eq!(march, vec![date(2024, 3, 31)]);
}

#[test]
fn test_expand_weekly_in_range() {
    let rule = RecurrenceRule::new(RecurrenceKind::Weekly);
    let anchor = date(2024, 6, 10);

    let occurrences = expand(&rule, anchor, date(2024, 6, 1), date(2024, 6, 30));

    assert_eq!(
        occurrences,
        vec![date(2024, 6, 10), date(2024, 6, 17), date(2024, 6, 24)]
    );
}

#[test]
fn test_expand_intersects_rule_end_date() {
    let rule = RecurrenceRule::until(RecurrenceKind::Weekly, date(2024, 6, 18));
    let anchor = date(2024, 6, 10);

    let occurrences = expand(&rule, anchor, date(2024, 6, 1), date(2024, 6, 30));

    assert_eq!(occurrences, vec![date(2024, 6, 10), date(2024, 6, 17)]);
}

#[test]
fn test_expand_none_rule_is_anchor_only() {
    let rule = RecurrenceRule::new(RecurrenceKind::None);
    let anchor = date(2024, 6, 10);

    let occurrences = expand(&rule, anchor, date(2024, 6, 1), date(2024, 6, 30));

    assert_eq!(occurrences, vec![date(2024, 6, 10)]);
}

#[test]
fn test_expand_reversed_range_is_empty() {
    let rule = RecurrenceRule::new(RecurrenceKind::Daily);

    let occurrences = expand(&rule, date(2024, 6, 1), date(2024, 6, 30), date(2024, 6, 1));

    assert_eq!(occurrences, vec![]);
}

#[test]
fn test_expand_is_deterministic() {
    let rule = RecurrenceRule::new(RecurrenceKind::Daily);
    let anchor = date(2024, 6, 10);

    let first = expand(&rule, anchor, date(2024, 6, 8), date(2024, 6, 12));
    let second = expand(&rule, anchor, date(2024, 6, 8), date(2024, 6, 12));

    assert_eq!(first, second);
    assert_eq!(first, vec![date(2024, 6, 10), date(2024, 6, 11), date(2024, 6, 12)]);
}
