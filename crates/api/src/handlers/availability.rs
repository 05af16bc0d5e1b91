//! # Availability Handlers
//!
//! Handlers for the per-user availability record: reading effective
//! availability, batch range updates, explicit resets, and unavailable
//! slot management.
//!
//! ## Read-modify-write discipline
//!
//! Every mutating handler follows the same three steps:
//!
//! 1. Load the whole `Availability` record through the repository
//!    collaborator (falling back to the default record for new users)
//! 2. Apply one pure engine operation from `atelier-core`
//! 3. Persist the resulting record with a single `save` call
//!
//! There is no locking: two concurrent writers both read, both compute,
//! and the last save wins. Subscribers to the repository change feed
//! re-read after every save, which keeps other views eventually
//! consistent.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;

use atelier_core::{
    errors::ScheduleError,
    models::availability::{
        Availability, CreateUnavailableSlotRequest, DayAvailabilityDetails, UnavailableTimeSlot,
        UpdateRangeRequest,
    },
    scheduling::{range_update, resolver, slots},
};
use atelier_db::repositories::availability::load_or_default;
use tracing::info;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        AppError(ScheduleError::InvalidDateRange(format!(
            "'{raw}' is not a valid YYYY-MM-DD date"
        )))
    })
}

/// Returns the user's full availability record.
///
/// A user without a persisted record gets the default record (no
/// overrides, working hours 09:00-17:00); the read does not persist it.
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Availability>, AppError> {
    let availability = load_or_default(state.availability.as_ref(), user_id).await?;

    Ok(Json(availability))
}

/// Returns effective availability for a single date: the explicit
/// per-date entry joined with the first unavailable slot on that date,
/// or the weekday fallback with default hours.
#[axum::debug_handler]
pub async fn get_availability_for_date(
    State(state): State<Arc<ApiState>>,
    Path((user_id, date)): Path<(Uuid, String)>,
) -> Result<Json<DayAvailabilityDetails>, AppError> {
    let date = parse_date(&date)?;
    let availability = load_or_default(state.availability.as_ref(), user_id).await?;

    let details = resolver::availability_details_for_date(&availability, date);

    Ok(Json(details))
}

/// Applies one availability decision across an inclusive date range.
///
/// Reversed date bounds are accepted and normalized. The engine
/// validates the time window before touching any date, so a 400 response
/// means nothing changed; on success the whole updated record is
/// persisted in one save and returned.
#[axum::debug_handler]
pub async fn update_availability_range(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<UpdateRangeRequest>,
) -> Result<Json<Availability>, AppError> {
    let availability = load_or_default(state.availability.as_ref(), user_id).await?;

    let updated = range_update::update_range(&availability, &payload)?;
    state.availability.save(&updated).await?;

    info!(
        %user_id,
        start = %payload.start_date,
        end = %payload.end_date,
        available = payload.available,
        "availability range updated"
    );

    Ok(Json(updated))
}

/// Replaces the user's record with the default one. This is the only
/// deletion path an availability record has.
#[axum::debug_handler]
pub async fn reset_availability(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<Availability>, AppError> {
    let fresh = Availability::new(user_id);
    state.availability.save(&fresh).await?;

    info!(%user_id, "availability record reset");

    Ok(Json(fresh))
}

/// Creates one unavailable time slot and returns it with its assigned id.
#[axum::debug_handler]
pub async fn create_unavailable_slot(
    State(state): State<Arc<ApiState>>,
    Path(user_id): Path<Uuid>,
    Json(payload): Json<CreateUnavailableSlotRequest>,
) -> Result<Json<UnavailableTimeSlot>, AppError> {
    let availability = load_or_default(state.availability.as_ref(), user_id).await?;

    let (updated, created) = slots::create_unavailable_slot(&availability, &payload)?;
    state.availability.save(&updated).await?;

    Ok(Json(created))
}

#[derive(Debug, Deserialize)]
pub struct DeleteSlotQuery {
    /// When true, delete every slot in the same recurring series, not
    /// just the addressed one.
    pub recurring: Option<bool>,
}

/// Deletes an unavailable slot, or its whole recurring series with
/// `?recurring=true`. Deleting an unknown id is a no-op and still
/// returns the (unchanged) record.
#[axum::debug_handler]
pub async fn delete_unavailable_slot(
    State(state): State<Arc<ApiState>>,
    Path((user_id, slot_id)): Path<(Uuid, Uuid)>,
    Query(query): Query<DeleteSlotQuery>,
) -> Result<Json<Availability>, AppError> {
    let availability = load_or_default(state.availability.as_ref(), user_id).await?;

    let updated = slots::delete_unavailable_slot(
        &availability,
        slot_id,
        query.recurring.unwrap_or(false),
    );
    state.availability.save(&updated).await?;

    Ok(Json(updated))
}
