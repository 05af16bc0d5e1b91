use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/meetings", post(handlers::meetings::create_meeting))
        .route(
            "/api/meetings/conflicts",
            get(handlers::meetings::check_conflicts),
        )
        .route("/api/meetings/id/:id", get(handlers::meetings::get_meeting))
}
