use async_trait::async_trait;
use atelier_core::models::availability::Availability;
use eyre::Result;
use sqlx::{Pool, Postgres};
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::models::DbAvailabilityRecord;

/// Key-value persistence contract for availability records.
///
/// One record per user, loaded and saved whole. `subscribe` is the
/// explicit replacement for an ambient "storage changed" broadcast:
/// every successful save publishes the changed user id, with no ordering
/// or delivery guarantee beyond best effort (a lagging receiver may miss
/// intermediate signals and should simply re-read).
#[async_trait]
pub trait AvailabilityRepository: Send + Sync {
    async fn load(&self, user_id: Uuid) -> Result<Option<Availability>>;
    async fn save(&self, availability: &Availability) -> Result<()>;
    fn subscribe(&self) -> broadcast::Receiver<Uuid>;
}

/// Loads a user's record, falling back to the default record when none
/// has been persisted yet. The read never writes; the first mutation
/// materializes the record.
pub async fn load_or_default(
    repository: &dyn AvailabilityRepository,
    user_id: Uuid,
) -> Result<Availability> {
    let record = repository.load(user_id).await?;
    Ok(record.unwrap_or_else(|| Availability::new(user_id)))
}

pub struct PgAvailabilityRepository {
    pool: Pool<Postgres>,
    changes: broadcast::Sender<Uuid>,
}

impl PgAvailabilityRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        let (changes, _) = broadcast::channel(64);
        Self { pool, changes }
    }
}

#[async_trait]
impl AvailabilityRepository for PgAvailabilityRepository {
    async fn load(&self, user_id: Uuid) -> Result<Option<Availability>> {
        let row = sqlx::query_as::<_, DbAvailabilityRecord>(
            r#"
            SELECT user_id, record, updated_at
            FROM availability_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(serde_json::from_value(row.record)?)),
            None => Ok(None),
        }
    }

    async fn save(&self, availability: &Availability) -> Result<()> {
        let record = serde_json::to_value(availability)?;

        sqlx::query(
            r#"
            INSERT INTO availability_records (user_id, record, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (user_id)
            DO UPDATE SET record = EXCLUDED.record, updated_at = NOW()
            "#,
        )
        .bind(availability.user_id)
        .bind(record)
        .execute(&self.pool)
        .await?;

        // Receivers only learn "this user changed" and re-read.
        let _ = self.changes.send(availability.user_id);

        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Uuid> {
        self.changes.subscribe()
    }
}
