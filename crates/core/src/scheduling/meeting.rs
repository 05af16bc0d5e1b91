use chrono::{DateTime, NaiveTime, Utc};
use uuid::Uuid;

use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::availability::{Availability, RecurrenceKind};
use crate::models::calendar_event::{
    CalendarEvent, CreateMeetingRequest, EventStatus, EventType, MeetingConflict,
};
use crate::scheduling::{recurrence, resolver};

/// Builds a confirmed `CalendarEvent` from a meeting request.
///
/// The organizer joins the invitees in both `attendees` and
/// `assigned_to`. Invitee availability is deliberately not consulted
/// here; callers that want a conflict report use `check_conflicts`.
pub fn build_meeting(request: &CreateMeetingRequest) -> ScheduleResult<CalendarEvent> {
    if request.title.trim().is_empty() {
        return Err(ScheduleError::Validation(
            "Meeting title must not be empty".to_string(),
        ));
    }
    if request.invitee_ids.is_empty() {
        return Err(ScheduleError::Validation(
            "A meeting needs at least one invitee".to_string(),
        ));
    }
    if request.end <= request.start {
        return Err(ScheduleError::InvalidTimeRange(format!(
            "meeting end {} must be after start {}",
            request.end, request.start,
        )));
    }

    let mut attendees = vec![request.organizer_id];
    for invitee in &request.invitee_ids {
        if !attendees.contains(invitee) {
            attendees.push(*invitee);
        }
    }

    Ok(CalendarEvent {
        id: Uuid::new_v4(),
        title: request.title.clone(),
        description: request.description.clone(),
        start: request.start,
        end: request.end,
        location: request.location.clone(),
        event_type: EventType::Meeting,
        status: EventStatus::Confirmed,
        created_by: request.organizer_id,
        attendees: attendees.clone(),
        assigned_to: attendees,
        color: None,
        priority: request.priority,
        is_required: request.is_required,
        created_at: Utc::now(),
    })
}

/// Opt-in conflict report for a proposed meeting window against a set of
/// availability records.
///
/// A conflict is either a day marked unavailable, or an unavailable slot
/// (expanded through its recurrence rule) overlapping the window on one
/// of the spanned dates. On intermediate days of a multi-day window the
/// whole day counts as occupied.
pub fn check_conflicts(
    availabilities: &[Availability],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<MeetingConflict> {
    if end <= start {
        return Vec::new();
    }

    let first_date = start.date_naive();
    let last_date = end.date_naive();
    let day_end = NaiveTime::from_hms_opt(23, 59, 59).unwrap();

    let mut conflicts = Vec::new();
    for availability in availabilities {
        for date in first_date.iter_days().take_while(|date| *date <= last_date) {
            if !resolver::is_day_available(availability, date) {
                conflicts.push(MeetingConflict {
                    user_id: availability.user_id,
                    date,
                    reason: "day is marked unavailable".to_string(),
                });
                continue;
            }

            let window_start = if date == first_date { start.time() } else { NaiveTime::MIN };
            let window_end = if date == last_date { end.time() } else { day_end };

            for slot in &availability.unavailable_slots {
                let applies = match &slot.recurring {
                    Some(rule) if rule.kind != RecurrenceKind::None => {
                        recurrence::occurs_on(rule, slot.date, date)
                    }
                    _ => slot.date == date,
                };
                if applies && slot.start_time < window_end && window_start < slot.end_time {
                    conflicts.push(MeetingConflict {
                        user_id: availability.user_id,
                        date,
                        reason: match &slot.title {
                            Some(title) => format!(
                                "{} ({} to {})",
                                title,
                                slot.start_time.format("%H:%M"),
                                slot.end_time.format("%H:%M"),
                            ),
                            None => format!(
                                "unavailable from {} to {}",
                                slot.start_time.format("%H:%M"),
                                slot.end_time.format("%H:%M"),
                            ),
                        },
                    });
                }
            }
        }
    }

    conflicts
}
