use chrono::{Datelike, NaiveDate};

use crate::models::availability::{RecurrenceKind, RecurrenceRule};

/// Whether `rule`, anchored at `anchor`, produces an occurrence on
/// `target`.
///
/// Monthly rules match on the anchor's day number; months without that
/// day simply have no occurrence (no clamping to month end).
pub fn occurs_on(rule: &RecurrenceRule, anchor: NaiveDate, target: NaiveDate) -> bool {
    if let Some(end_date) = rule.end_date {
        if target > end_date {
            return false;
        }
    }

    match rule.kind {
        RecurrenceKind::None => target == anchor,
        RecurrenceKind::Daily => target >= anchor,
        RecurrenceKind::Weekly => target >= anchor && target.weekday() == anchor.weekday(),
        RecurrenceKind::Monthly => target >= anchor && target.day() == anchor.day(),
    }
}

/// All occurrences of `rule` within `[range_start, range_end]`,
/// intersected with the rule's own end bound. Deterministic and finite.
pub fn expand(
    rule: &RecurrenceRule,
    anchor: NaiveDate,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<NaiveDate> {
    if range_end < range_start {
        return Vec::new();
    }

    range_start
        .iter_days()
        .take_while(|date| *date <= range_end)
        .filter(|date| occurs_on(rule, anchor, *date))
        .collect()
}
