use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/users/:user_id/calendar",
            get(handlers::calendar::get_calendar),
        )
        .route(
            "/api/users/:user_id/notifications",
            get(handlers::calendar::get_notifications),
        )
}
