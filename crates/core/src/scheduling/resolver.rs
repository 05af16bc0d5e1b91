use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::availability::{Availability, DayAvailabilityDetails, UnavailableTimeSlot};

pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Whether the user is available on `date`: the explicit per-date entry
/// wins, otherwise weekdays are available and weekends are not.
pub fn is_day_available(availability: &Availability, date: NaiveDate) -> bool {
    match availability.date_entry(date) {
        Some(entry) => entry.available,
        None => is_weekday(date),
    }
}

/// Display join policy for note/recurrence: the first slot whose date
/// matches exactly wins. Multiple slots on one date are possible; picking
/// the first is a compatibility decision, and swapping the policy means
/// swapping this function.
fn first_slot_on_date(availability: &Availability, date: NaiveDate) -> Option<&UnavailableTimeSlot> {
    availability
        .unavailable_slots
        .iter()
        .find(|slot| slot.date == date)
}

/// Effective availability for `date`: the per-date override joined with
/// the first unavailable slot on that date, or the weekday fallback with
/// the record's default working hours.
pub fn availability_details_for_date(
    availability: &Availability,
    date: NaiveDate,
) -> DayAvailabilityDetails {
    match availability.date_entry(date) {
        Some(entry) => {
            let slot = first_slot_on_date(availability, date);
            DayAvailabilityDetails {
                date,
                available: entry.available,
                start_time: entry.start_time,
                end_time: entry.end_time,
                note: slot.and_then(|s| s.title.clone()),
                recurrence: slot.and_then(|s| s.recurring.clone()),
            }
        }
        None => DayAvailabilityDetails {
            date,
            available: is_weekday(date),
            start_time: availability.default_start_time,
            end_time: availability.default_end_time,
            note: None,
            recurrence: None,
        },
    }
}
