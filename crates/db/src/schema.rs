use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Availability records are stored whole: one JSONB value per user,
    // written by a single upsert per engine operation.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS availability_records (
            user_id UUID PRIMARY KEY,
            record JSONB NOT NULL,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create calendar_events table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS calendar_events (
            id UUID PRIMARY KEY,
            created_by UUID NOT NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            record JSONB NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_event_window CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create event_attendees table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS event_attendees (
            event_id UUID NOT NULL REFERENCES calendar_events(id),
            user_id UUID NOT NULL,
            PRIMARY KEY (event_id, user_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create notifications table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id UUID PRIMARY KEY,
            user_id UUID NOT NULL,
            message TEXT NOT NULL,
            event_id UUID NULL REFERENCES calendar_events(id),
            read BOOLEAN NOT NULL DEFAULT FALSE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_calendar_events_start_time ON calendar_events(start_time);
        CREATE INDEX IF NOT EXISTS idx_calendar_events_end_time ON calendar_events(end_time);
        CREATE INDEX IF NOT EXISTS idx_calendar_events_created_by ON calendar_events(created_by);
        CREATE INDEX IF NOT EXISTS idx_event_attendees_user_id ON event_attendees(user_id);
        CREATE INDEX IF NOT EXISTS idx_notifications_user_id ON notifications(user_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
