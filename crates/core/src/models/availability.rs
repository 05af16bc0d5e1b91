use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serde adapter for `HH:MM` time-of-day strings.
///
/// `NaiveTime` serializes with seconds by default; the persisted record
/// format carries minute precision only.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// How an unavailable time slot repeats from its anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    None,
    Daily,
    Weekly,
    Monthly,
}

/// A recurrence pattern. The anchor date is not stored here; it is the
/// `date` of the slot carrying the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub kind: RecurrenceKind,
    pub end_date: Option<NaiveDate>,
}

impl RecurrenceRule {
    pub fn new(kind: RecurrenceKind) -> Self {
        Self { kind, end_date: None }
    }

    pub fn until(kind: RecurrenceKind, end_date: NaiveDate) -> Self {
        Self {
            kind,
            end_date: Some(end_date),
        }
    }
}

/// An explicit available/unavailable override for a single date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateAvailability {
    pub date: NaiveDate,
    pub available: bool,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

/// A discrete time window on one date marked unavailable, optionally
/// repeating per its `recurring` rule with `date` as the anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnavailableTimeSlot {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub title: Option<String>,
    pub recurring: Option<RecurrenceRule>,
}

/// A user's full calendar-availability record: per-date overrides,
/// fallback daily hours, and unavailable time slots. This is the unit of
/// persistence; every engine operation consumes and produces a whole
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub user_id: Uuid,
    pub dates: Vec<DateAvailability>,
    #[serde(with = "hhmm")]
    pub default_start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub default_end_time: NaiveTime,
    pub unavailable_slots: Vec<UnavailableTimeSlot>,
}

impl Availability {
    /// The lazily-created default record: no per-date overrides, no
    /// unavailable slots, working hours 09:00-17:00.
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            dates: Vec::new(),
            default_start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            default_end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            unavailable_slots: Vec::new(),
        }
    }

    pub fn date_entry(&self, date: NaiveDate) -> Option<&DateAvailability> {
        self.dates.iter().find(|entry| entry.date == date)
    }

    pub fn slot(&self, slot_id: Uuid) -> Option<&UnavailableTimeSlot> {
        self.unavailable_slots.iter().find(|slot| slot.id == slot_id)
    }
}

/// Effective availability for one date, after weekday fallback and the
/// display join against the first unavailable slot on that date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailabilityDetails {
    pub date: NaiveDate,
    pub available: bool,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub note: Option<String>,
    pub recurrence: Option<RecurrenceRule>,
}

/// Batch update request: one availability decision applied to every date
/// in the inclusive `[start_date, end_date]` range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRangeRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub available: bool,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub note: Option<String>,
    pub recurrence: Option<RecurrenceRule>,
}

/// Request body for creating a single unavailable slot; the id is
/// assigned by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUnavailableSlotRequest {
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub title: Option<String>,
    pub recurring: Option<RecurrenceRule>,
}
