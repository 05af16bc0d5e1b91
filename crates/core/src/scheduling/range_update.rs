use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::availability::{
    Availability, DateAvailability, UnavailableTimeSlot, UpdateRangeRequest,
};

/// Applies one availability decision to every date in the inclusive
/// range.
///
/// Reversed bounds are accepted and swapped. For each date the per-date
/// entry is upserted, existing unavailable slots anchored on that date
/// are dropped, and a fresh slot is inserted only when the request
/// carries a non-empty note. Validation happens before any date is
/// touched, so a rejected request changes nothing.
pub fn update_range(
    availability: &Availability,
    update: &UpdateRangeRequest,
) -> ScheduleResult<Availability> {
    if update.start_time >= update.end_time {
        return Err(ScheduleError::InvalidTimeRange(format!(
            "start time {} must be before end time {}",
            update.start_time.format("%H:%M"),
            update.end_time.format("%H:%M"),
        )));
    }

    let (start_date, end_date) = if update.start_date <= update.end_date {
        (update.start_date, update.end_date)
    } else {
        (update.end_date, update.start_date)
    };

    let note = update
        .note
        .as_deref()
        .map(str::trim)
        .filter(|note| !note.is_empty());

    let mut next = availability.clone();
    for date in start_date.iter_days().take_while(|date| *date <= end_date) {
        let entry = DateAvailability {
            date,
            available: update.available,
            start_time: update.start_time,
            end_time: update.end_time,
        };
        match next.dates.iter_mut().find(|existing| existing.date == date) {
            Some(existing) => *existing = entry,
            None => next.dates.push(entry),
        }

        next.unavailable_slots.retain(|slot| slot.date != date);
        if let Some(note) = note {
            next.unavailable_slots.push(UnavailableTimeSlot {
                id: Uuid::new_v4(),
                date,
                start_time: update.start_time,
                end_time: update.end_time,
                title: Some(note.to_string()),
                recurring: update.recurrence.clone(),
            });
        }
    }

    Ok(next)
}
