use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/users/:user_id/availability",
            get(handlers::availability::get_availability),
        )
        .route(
            "/api/users/:user_id/availability/range",
            put(handlers::availability::update_availability_range),
        )
        .route(
            "/api/users/:user_id/availability/reset",
            post(handlers::availability::reset_availability),
        )
        .route(
            "/api/users/:user_id/availability/slots",
            post(handlers::availability::create_unavailable_slot),
        )
        .route(
            "/api/users/:user_id/availability/slots/:slot_id",
            delete(handlers::availability::delete_unavailable_slot),
        )
        .route(
            "/api/users/:user_id/availability/date/:date",
            get(handlers::availability::get_availability_for_date),
        )
}
