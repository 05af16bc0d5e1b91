//! # Calendar Feed Handler
//!
//! Serves the merged per-user calendar: persisted events the user
//! attends plus pseudo events derived from availability data, in one
//! array the rendering layer consumes uniformly.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveTime;
use serde::Deserialize;
use std::sync::Arc;

use atelier_core::{
    errors::ScheduleError,
    models::calendar_event::CalendarFeedResponse,
    models::notification::Notification,
    scheduling::projector,
};
use atelier_db::repositories::availability::load_or_default;
use uuid::Uuid;

use crate::{handlers::availability::parse_date, middleware::error_handling::AppError, ApiState};

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    /// Range start date, YYYY-MM-DD
    pub start: String,

    /// Range end date, YYYY-MM-DD (inclusive)
    pub end: String,
}

/// Returns the merged calendar feed for a user and inclusive date range.
///
/// Availability-derived entries are recomputed on every call and tagged
/// with the `availability` event type; they are never persisted next to
/// real events.
#[axum::debug_handler]
pub async fn get_calendar(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<CalendarQuery>,
) -> Result<Json<CalendarFeedResponse>, AppError> {
    let range_start = parse_date(&query.start)?;
    let range_end = parse_date(&query.end)?;
    if range_end < range_start {
        return Err(AppError(ScheduleError::InvalidDateRange(format!(
            "range end {range_end} is before range start {range_start}"
        ))));
    }

    let from = range_start.and_time(NaiveTime::MIN).and_utc();
    let to = range_end
        .and_time(NaiveTime::from_hms_opt(23, 59, 59).unwrap())
        .and_utc();

    let mut events = atelier_db::repositories::calendar_event::get_events_for_user(
        &state.db_pool,
        user_id,
        from,
        to,
    )
    .await
    .map_err(ScheduleError::Database)?;

    let availability = load_or_default(state.availability.as_ref(), user_id).await?;
    events.extend(projector::project_availability_events_in_range(
        &availability,
        range_start,
        range_end,
    ));

    events.sort_by_key(|event| event.start);

    Ok(Json(CalendarFeedResponse { events }))
}

/// Lists the user's stored notifications, newest first.
#[axum::debug_handler]
pub async fn get_notifications(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Vec<Notification>>, AppError> {
    let rows = atelier_db::repositories::notification::get_notifications_for_user(
        &state.db_pool,
        user_id,
    )
    .await
    .map_err(ScheduleError::Database)?;

    Ok(Json(rows.into_iter().map(Notification::from).collect()))
}
