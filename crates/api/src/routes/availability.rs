use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/schedules/:schedule_id/users/:user_id/candidates/:candidate_id",
        post(handlers::availability::toggle_availability),
    )
}
