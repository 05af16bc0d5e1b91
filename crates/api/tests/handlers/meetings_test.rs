use std::sync::atomic::Ordering;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use atelier_core::errors::ScheduleError;
use atelier_core::models::availability::{Availability, DateAvailability};
use atelier_core::models::calendar_event::{ConflictReport, CreateMeetingRequest, EventPriority};
use atelier_db::repositories::availability::AvailabilityRepository;

use atelier_api::handlers::meetings::create_meeting;
use crate::test_utils::TestContext;

fn meeting_request() -> CreateMeetingRequest {
    CreateMeetingRequest {
        organizer_id: Uuid::new_v4(),
        invitee_ids: vec![Uuid::new_v4()],
        title: "Kickoff".to_string(),
        description: String::new(),
        start: Utc.with_ymd_and_hms(2024, 6, 10, 14, 0, 0).unwrap(),
        end: Utc.with_ymd_and_hms(2024, 6, 10, 15, 0, 0).unwrap(),
        location: None,
        priority: EventPriority::Medium,
        is_required: false,
    }
}

#[tokio::test]
async fn test_meeting_with_inverted_window_is_rejected() {
    let ctx = TestContext::new();
    let mut request = meeting_request();
    request.end = request.start;

    let result = create_meeting(State(ctx.state.clone()), Json(request)).await;

    let error = result.err().expect("expected rejection");
    assert!(matches!(error.0, ScheduleError::InvalidTimeRange(_)));
    // No event was created, so no notification went out either.
    assert_eq!(ctx.notifier.sent.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_meeting_without_invitees_is_rejected() {
    let ctx = TestContext::new();
    let mut request = meeting_request();
    request.invitee_ids.clear();

    let result = create_meeting(State(ctx.state.clone()), Json(request)).await;

    let error = result.err().expect("expected rejection");
    assert!(matches!(error.0, ScheduleError::Validation(_)));
    assert_eq!(ctx.notifier.sent.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_meeting_without_title_is_rejected() {
    let ctx = TestContext::new();
    let mut request = meeting_request();
    request.title = String::new();

    let result = create_meeting(State(ctx.state.clone()), Json(request)).await;

    assert!(result.is_err());
    assert_eq!(ctx.notifier.sent.load(Ordering::SeqCst), 0);
}

#[test_log::test(tokio::test)]
async fn test_conflict_report_flags_unavailable_day() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let mut availability = Availability::new(Uuid::new_v4());
    availability.dates.push(DateAvailability {
        date: chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
        available: false,
        start_time: chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: chrono::NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
    });
    ctx.repo.save(&availability).await.expect("save failed");

    let response = server
        .get("/api/meetings/conflicts")
        .add_query_param("user_ids", availability.user_id.to_string())
        .add_query_param("start", "2024-06-10T14:00:00Z")
        .add_query_param("end", "2024-06-10T15:00:00Z")
        .await;

    response.assert_status(StatusCode::OK);
    let report: ConflictReport = response.json();
    assert_eq!(report.conflicts.len(), 1);
    assert_eq!(report.conflicts[0].user_id, availability.user_id);
}

#[tokio::test]
async fn test_conflict_report_is_empty_for_free_users() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get("/api/meetings/conflicts")
        .add_query_param("user_ids", Uuid::new_v4().to_string())
        .add_query_param("start", "2024-06-10T14:00:00Z")
        .add_query_param("end", "2024-06-10T15:00:00Z")
        .await;

    response.assert_status(StatusCode::OK);
    let report: ConflictReport = response.json();
    assert_eq!(report.conflicts, vec![]);
}

#[tokio::test]
async fn test_conflict_report_rejects_bad_user_ids() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get("/api/meetings/conflicts")
        .add_query_param("user_ids", "not-a-uuid")
        .add_query_param("start", "2024-06-10T14:00:00Z")
        .add_query_param("end", "2024-06-10T15:00:00Z")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_conflict_report_rejects_bad_datetimes() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server
        .get("/api/meetings/conflicts")
        .add_query_param("user_ids", Uuid::new_v4().to_string())
        .add_query_param("start", "yesterday")
        .add_query_param("end", "2024-06-10T15:00:00Z")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calendar_feed_rejects_reversed_range() {
    let ctx = TestContext::new();
    let server = ctx.server();
    let user_id = Uuid::new_v4();

    let response = server
        .get(&format!("/api/users/{user_id}/calendar"))
        .add_query_param("start", "2024-06-30")
        .add_query_param("end", "2024-06-01")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}
