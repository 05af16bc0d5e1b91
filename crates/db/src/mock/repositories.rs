use std::collections::HashMap;

use async_trait::async_trait;
use atelier_core::models::availability::Availability;
use eyre::Result;
use mockall::mock;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::repositories::availability::AvailabilityRepository;

// Mock repository for testing
mock! {
    pub AvailabilityRepo {}

    #[async_trait]
    impl AvailabilityRepository for AvailabilityRepo {
        async fn load(&self, user_id: Uuid) -> Result<Option<Availability>>;
        async fn save(&self, availability: &Availability) -> Result<()>;
        fn subscribe(&self) -> broadcast::Receiver<Uuid>;
    }
}

/// In-memory key-value implementation of the availability repository,
/// used by handler-level tests in place of Postgres.
pub struct InMemoryAvailabilityRepository {
    records: RwLock<HashMap<Uuid, Availability>>,
    changes: broadcast::Sender<Uuid>,
}

impl InMemoryAvailabilityRepository {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(64);
        Self {
            records: RwLock::new(HashMap::new()),
            changes,
        }
    }
}

impl Default for InMemoryAvailabilityRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AvailabilityRepository for InMemoryAvailabilityRepository {
    async fn load(&self, user_id: Uuid) -> Result<Option<Availability>> {
        let records = self.records.read().await;
        Ok(records.get(&user_id).cloned())
    }

    async fn save(&self, availability: &Availability) -> Result<()> {
        let mut records = self.records.write().await;
        records.insert(availability.user_id, availability.clone());
        let _ = self.changes.send(availability.user_id);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Uuid> {
        self.changes.subscribe()
    }
}
