use chrono::{NaiveDate, NaiveTime};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use atelier_core::models::availability::{
    Availability, DateAvailability, RecurrenceKind, RecurrenceRule, UnavailableTimeSlot,
};
use atelier_core::models::calendar_event::EventType;
use atelier_core::scheduling::projector::{
    project_availability_events, project_availability_events_in_range,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn sample() -> Availability {
    let mut availability = Availability::new(Uuid::new_v4());
    availability.dates.push(DateAvailability {
        date: date(2024, 6, 10),
        available: false,
        start_time: time(9, 0),
        end_time: time(17, 0),
    });
    availability.dates.push(DateAvailability {
        date: date(2024, 6, 11),
        available: true,
        start_time: time(9, 0),
        end_time: time(17, 0),
    });
    availability.unavailable_slots.push(UnavailableTimeSlot {
        id: Uuid::new_v4(),
        date: date(2024, 6, 12),
        start_time: time(13, 0),
        end_time: time(14, 0),
        title: Some("Client call".to_string()),
        recurring: None,
    });
    availability
}

#[test]
fn test_projects_unavailable_dates_and_slots() {
    let availability = sample();

    let events = project_availability_events(&availability);

    // One for the unavailable date, one for the slot; the available
    // date produces nothing.
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.event_type == EventType::Availability));
    assert!(events.iter().all(|e| e.created_by == availability.user_id));

    assert_eq!(events[0].title, "Unavailable");
    assert_eq!(events[0].start, date(2024, 6, 10).and_time(time(9, 0)).and_utc());
    assert_eq!(events[0].end, date(2024, 6, 10).and_time(time(17, 0)).and_utc());

    assert_eq!(events[1].title, "Client call");
    assert_eq!(events[1].start, date(2024, 6, 12).and_time(time(13, 0)).and_utc());
}

#[test]
fn test_projection_is_recomputed_not_stable() {
    let availability = sample();

    let first = project_availability_events(&availability);
    let second = project_availability_events(&availability);

    // Same shape, fresh synthetic ids on every read.
    assert_eq!(first.len(), second.len());
    assert_ne!(first[0].id, second[0].id);
}

#[test]
fn test_range_projection_filters_and_expands() {
    let mut availability = sample();
    availability.unavailable_slots.push(UnavailableTimeSlot {
        id: Uuid::new_v4(),
        date: date(2024, 6, 10),
        start_time: time(8, 0),
        end_time: time(9, 0),
        title: Some("Gym".to_string()),
        recurring: Some(RecurrenceRule::new(RecurrenceKind::Weekly)),
    });

    let events =
        project_availability_events_in_range(&availability, date(2024, 6, 16), date(2024, 6, 30));

    // The one-off slot and the date override fall outside the range;
    // the weekly slot lands on the two Mondays inside it.
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Gym");
    assert_eq!(events[0].start, date(2024, 6, 17).and_time(time(8, 0)).and_utc());
    assert_eq!(events[1].start, date(2024, 6, 24).and_time(time(8, 0)).and_utc());
}

#[test]
fn test_range_projection_includes_in_range_one_offs() {
    let availability = sample();

    let events =
        project_availability_events_in_range(&availability, date(2024, 6, 10), date(2024, 6, 12));

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].title, "Unavailable");
    assert_eq!(events[1].title, "Client call");
}
