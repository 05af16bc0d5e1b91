use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::availability::{
    Availability, CreateUnavailableSlotRequest, RecurrenceKind, UnavailableTimeSlot,
};

/// Validates and appends one unavailable slot, returning the new record
/// together with the created slot (the caller needs its assigned id).
pub fn create_unavailable_slot(
    availability: &Availability,
    request: &CreateUnavailableSlotRequest,
) -> ScheduleResult<(Availability, UnavailableTimeSlot)> {
    if request.start_time >= request.end_time {
        return Err(ScheduleError::InvalidTimeRange(format!(
            "start time {} must be before end time {}",
            request.start_time.format("%H:%M"),
            request.end_time.format("%H:%M"),
        )));
    }

    let slot = UnavailableTimeSlot {
        id: Uuid::new_v4(),
        date: request.date,
        start_time: request.start_time,
        end_time: request.end_time,
        title: request.title.clone(),
        recurring: request.recurring.clone(),
    };

    let mut next = availability.clone();
    next.unavailable_slots.push(slot.clone());
    Ok((next, slot))
}

/// Removes the slot with `slot_id`, or, with `delete_recurring`, every
/// slot carrying a rule structurally equal to the target's (all instances
/// of the same recurring series). An unknown id is a no-op, not an error.
///
/// A target without a real recurrence rule degrades to single deletion;
/// sweeping on `recurring: None` would take every one-off slot with it.
pub fn delete_unavailable_slot(
    availability: &Availability,
    slot_id: Uuid,
    delete_recurring: bool,
) -> Availability {
    let mut next = availability.clone();
    let Some(target) = availability.slot(slot_id) else {
        return next;
    };

    match &target.recurring {
        Some(rule) if delete_recurring && rule.kind != RecurrenceKind::None => {
            let rule = rule.clone();
            next.unavailable_slots
                .retain(|slot| slot.recurring.as_ref() != Some(&rule));
        }
        _ => next.unavailable_slots.retain(|slot| slot.id != slot_id),
    }

    next
}
