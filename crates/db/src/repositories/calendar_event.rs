use atelier_core::models::calendar_event::CalendarEvent;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbCalendarEvent;

pub async fn create_calendar_event(pool: &Pool<Postgres>, event: &CalendarEvent) -> Result<()> {
    let record = serde_json::to_value(event)?;

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO calendar_events (id, created_by, start_time, end_time, record, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(event.id)
    .bind(event.created_by)
    .bind(event.start)
    .bind(event.end)
    .bind(record)
    .bind(event.created_at)
    .execute(&mut *tx)
    .await?;

    for attendee in &event.attendees {
        sqlx::query(
            r#"
            INSERT INTO event_attendees (event_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(event.id)
        .bind(attendee)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(())
}

pub async fn get_event_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<CalendarEvent>> {
    let row = sqlx::query_as::<_, DbCalendarEvent>(
        r#"
        SELECT id, created_by, start_time, end_time, record, created_at
        FROM calendar_events
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(serde_json::from_value(row.record)?)),
        None => Ok(None),
    }
}

/// Events the user attends that overlap `[from, to]`, ordered by start.
pub async fn get_events_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<CalendarEvent>> {
    let rows = sqlx::query_as::<_, DbCalendarEvent>(
        r#"
        SELECT e.id, e.created_by, e.start_time, e.end_time, e.record, e.created_at
        FROM calendar_events e
        JOIN event_attendees a ON a.event_id = e.id
        WHERE a.user_id = $1 AND e.start_time <= $3 AND e.end_time >= $2
        ORDER BY e.start_time ASC
        "#,
    )
    .bind(user_id)
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| serde_json::from_value(row.record).map_err(Into::into))
        .collect()
}
