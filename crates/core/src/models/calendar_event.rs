use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Meeting,
    Other,
    /// Derived from availability data by the projector; never persisted.
    Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// A scheduled meeting or activity on the shared calendar.
///
/// `attendees` and `assigned_to` carry the same ids and are maintained
/// together on create; older consumers read one or the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub status: EventStatus,
    pub created_by: Uuid,
    pub attendees: Vec<Uuid>,
    pub assigned_to: Vec<Uuid>,
    pub color: Option<String>,
    pub priority: EventPriority,
    pub is_required: bool,
    pub created_at: DateTime<Utc>,
}

/// Input to meeting scheduling. The organizer is implicitly an attendee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    pub organizer_id: Uuid,
    pub invitee_ids: Vec<Uuid>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub location: Option<String>,
    #[serde(default)]
    pub priority: EventPriority,
    #[serde(default)]
    pub is_required: bool,
}

/// One availability conflict surfaced by the opt-in conflict check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingConflict {
    pub user_id: Uuid,
    pub date: NaiveDate,
    pub reason: String,
}

/// Report returned by `GET /api/meetings/conflicts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictReport {
    pub conflicts: Vec<MeetingConflict>,
}

/// Merged calendar feed: persisted events plus availability-derived
/// pseudo events for one user and date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarFeedResponse {
    pub events: Vec<CalendarEvent>,
}
