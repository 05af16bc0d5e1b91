use pretty_assertions::assert_eq;
use rstest::rstest;

use atelier_core::errors::{ScheduleError, ScheduleResult};

#[rstest]
#[case(
    ScheduleError::NotFound("event abc".to_string()),
    "Resource not found: event abc"
)]
#[case(
    ScheduleError::InvalidTimeRange("start must be before end".to_string()),
    "Invalid time range: start must be before end"
)]
#[case(
    ScheduleError::InvalidDateRange("'2024-13-01' is not a valid YYYY-MM-DD date".to_string()),
    "Invalid date range: '2024-13-01' is not a valid YYYY-MM-DD date"
)]
#[case(
    ScheduleError::Validation("Meeting title must not be empty".to_string()),
    "Validation error: Meeting title must not be empty"
)]
fn test_error_display(#[case] error: ScheduleError, #[case] expected: &str) {
    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_database_error_from_eyre() {
    let report = eyre::eyre!("connection refused");
    let error = ScheduleError::from(report);

    assert!(matches!(error, ScheduleError::Database(_)));
    assert_eq!(error.to_string(), "Database error: connection refused");
}

#[test]
fn test_internal_error_from_boxed() {
    let source: Box<dyn std::error::Error + Send + Sync> = "worker panicked".into();
    let error = ScheduleError::from(source);

    assert!(matches!(error, ScheduleError::Internal(_)));
}

#[test]
fn test_result_alias() {
    fn reject() -> ScheduleResult<()> {
        Err(ScheduleError::Validation("empty".to_string()))
    }

    assert!(reject().is_err());
}
