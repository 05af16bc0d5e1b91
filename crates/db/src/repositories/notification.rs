use atelier_core::models::notification::Notification;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbNotification;

pub async fn create_notification(
    pool: &Pool<Postgres>,
    notification: &Notification,
) -> Result<DbNotification> {
    let row = sqlx::query_as::<_, DbNotification>(
        r#"
        INSERT INTO notifications (id, user_id, message, event_id, read, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, message, event_id, read, created_at
        "#,
    )
    .bind(notification.id)
    .bind(notification.user_id)
    .bind(&notification.message)
    .bind(notification.event_id)
    .bind(notification.read)
    .bind(notification.created_at)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_notifications_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Vec<DbNotification>> {
    let rows = sqlx::query_as::<_, DbNotification>(
        r#"
        SELECT id, user_id, message, event_id, read, created_at
        FROM notifications
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
