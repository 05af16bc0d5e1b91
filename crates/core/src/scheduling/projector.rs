use chrono::{NaiveDate, NaiveTime, Utc};
use uuid::Uuid;

use crate::models::availability::{Availability, RecurrenceKind};
use crate::models::calendar_event::{CalendarEvent, EventPriority, EventStatus, EventType};
use crate::scheduling::recurrence;

const UNAVAILABLE_TITLE: &str = "Unavailable";

fn pseudo_event(
    user_id: Uuid,
    title: &str,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
) -> CalendarEvent {
    CalendarEvent {
        id: Uuid::new_v4(),
        title: title.to_string(),
        description: String::new(),
        start: date.and_time(start_time).and_utc(),
        end: date.and_time(end_time).and_utc(),
        location: None,
        event_type: EventType::Availability,
        status: EventStatus::Confirmed,
        created_by: user_id,
        attendees: vec![user_id],
        assigned_to: vec![user_id],
        color: None,
        priority: EventPriority::Medium,
        is_required: false,
        created_at: Utc::now(),
    }
}

/// Derives pseudo events from availability data: one per date marked
/// unavailable and one per unavailable slot (at its anchor date). The
/// entries share the `CalendarEvent` rendering contract, tagged
/// `EventType::Availability`; they are recomputed on every read and never
/// persisted.
pub fn project_availability_events(availability: &Availability) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for entry in &availability.dates {
        if !entry.available {
            events.push(pseudo_event(
                availability.user_id,
                UNAVAILABLE_TITLE,
                entry.date,
                entry.start_time,
                entry.end_time,
            ));
        }
    }

    for slot in &availability.unavailable_slots {
        let title = slot.title.as_deref().unwrap_or(UNAVAILABLE_TITLE);
        events.push(pseudo_event(
            availability.user_id,
            title,
            slot.date,
            slot.start_time,
            slot.end_time,
        ));
    }

    events
}

/// Range-bounded projection for the calendar feed: date overrides are
/// filtered to the range and recurring slots are expanded into one entry
/// per occurrence.
pub fn project_availability_events_in_range(
    availability: &Availability,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Vec<CalendarEvent> {
    let mut events = Vec::new();

    for entry in &availability.dates {
        if !entry.available && entry.date >= range_start && entry.date <= range_end {
            events.push(pseudo_event(
                availability.user_id,
                UNAVAILABLE_TITLE,
                entry.date,
                entry.start_time,
                entry.end_time,
            ));
        }
    }

    for slot in &availability.unavailable_slots {
        let title = slot.title.as_deref().unwrap_or(UNAVAILABLE_TITLE);
        match &slot.recurring {
            Some(rule) if rule.kind != RecurrenceKind::None => {
                for occurrence in recurrence::expand(rule, slot.date, range_start, range_end) {
                    events.push(pseudo_event(
                        availability.user_id,
                        title,
                        occurrence,
                        slot.start_time,
                        slot.end_time,
                    ));
                }
            }
            _ => {
                if slot.date >= range_start && slot.date <= range_end {
                    events.push(pseudo_event(
                        availability.user_id,
                        title,
                        slot.date,
                        slot.start_time,
                        slot.end_time,
                    ));
                }
            }
        }
    }

    events
}
