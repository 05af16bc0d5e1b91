use async_trait::async_trait;
use eyre::Result;
use tracing::info;
use uuid::Uuid;

/// Notification delivery collaborator. Callers treat it as
/// fire-and-forget: a failed delivery is logged and never rolls back the
/// operation that triggered it.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<()>;
}

/// Default notifier: logs the delivery instead of sending anything.
/// Actual delivery channels live outside this service.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, user_id: Uuid, message: &str) -> Result<()> {
        info!(%user_id, "notification dispatched: {message}");
        Ok(())
    }
}
