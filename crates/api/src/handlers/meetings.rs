//! # Meeting Handlers
//!
//! Meeting creation and the opt-in conflict report.
//!
//! Creating a meeting deliberately does not consult invitee
//! availability; that mirrors how the dashboard has always behaved.
//! Callers that want to warn the organizer first fetch
//! `/api/meetings/conflicts` and decide for themselves.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;

use atelier_core::{
    errors::ScheduleError,
    models::calendar_event::{CalendarEvent, ConflictReport, CreateMeetingRequest},
    models::notification::Notification,
    scheduling::meeting,
};
use atelier_db::repositories::availability::load_or_default;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, AppError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError(ScheduleError::InvalidDateRange(format!(
                "'{raw}' is not a valid RFC 3339 datetime"
            )))
        })
}

/// Creates a confirmed meeting event.
///
/// Validation (non-empty title, at least one invitee, end after start)
/// happens before anything is written. After the event is persisted, one
/// notification record per invitee is appended and the delivery
/// collaborator is invoked; both are fire-and-forget, so their failures
/// are logged and never undo the created event.
#[axum::debug_handler]
pub async fn create_meeting(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateMeetingRequest>,
) -> Result<Json<CalendarEvent>, AppError> {
    let event = meeting::build_meeting(&payload)?;

    atelier_db::repositories::calendar_event::create_calendar_event(&state.db_pool, &event)
        .await
        .map_err(ScheduleError::Database)?;

    info!(event_id = %event.id, organizer = %event.created_by, "meeting scheduled");

    let message = format!("You have been invited to '{}'", event.title);
    for invitee in &payload.invitee_ids {
        let notification = Notification::for_event(*invitee, event.id, message.clone());
        if let Err(err) = atelier_db::repositories::notification::create_notification(
            &state.db_pool,
            &notification,
        )
        .await
        {
            warn!(invitee = %invitee, "failed to store meeting notification: {err}");
        }
        if let Err(err) = state.notifier.notify(*invitee, &message).await {
            warn!(invitee = %invitee, "failed to deliver meeting notification: {err}");
        }
    }

    Ok(Json(event))
}

/// Returns a stored meeting event by id.
#[axum::debug_handler]
pub async fn get_meeting(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<CalendarEvent>, AppError> {
    let event = atelier_db::repositories::calendar_event::get_event_by_id(&state.db_pool, id)
        .await
        .map_err(ScheduleError::Database)?
        .ok_or_else(|| ScheduleError::NotFound(format!("Meeting with ID {} not found", id)))?;

    Ok(Json(event))
}

/// Query parameters for the conflict report endpoint.
#[derive(Debug, Deserialize)]
pub struct ConflictQuery {
    /// Comma-separated list of user UUIDs to check
    pub user_ids: String,

    /// Proposed meeting start, RFC 3339
    pub start: String,

    /// Proposed meeting end, RFC 3339
    pub end: String,
}

/// Reports availability conflicts for a proposed meeting window.
///
/// For each user this checks day-level availability (explicit overrides,
/// weekday fallback) and unavailable slots expanded through their
/// recurrence rules. An empty report means no conflict is known; it is
/// advisory only and meeting creation never requires it.
#[axum::debug_handler]
pub async fn check_conflicts(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ConflictQuery>,
) -> Result<Json<ConflictReport>, AppError> {
    // Parse comma-separated user IDs into UUIDs
    let user_ids: Result<Vec<Uuid>, _> = query
        .user_ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Uuid::parse_str)
        .collect();

    let user_ids = user_ids.map_err(|_| {
        AppError(ScheduleError::Validation(
            "Invalid user ID format. Must be comma-separated UUIDs".to_string(),
        ))
    })?;

    if user_ids.is_empty() {
        return Err(AppError(ScheduleError::Validation(
            "At least one user ID must be provided".to_string(),
        )));
    }

    let start = parse_datetime(&query.start)?;
    let end = parse_datetime(&query.end)?;

    let mut availabilities = Vec::with_capacity(user_ids.len());
    for user_id in user_ids {
        availabilities.push(load_or_default(state.availability.as_ref(), user_id).await?);
    }

    let conflicts = meeting::check_conflicts(&availabilities, start, end);

    Ok(Json(ConflictReport { conflicts }))
}
