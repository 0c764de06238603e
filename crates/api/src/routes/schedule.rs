use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/schedules/:schedule_id",
        get(handlers::schedule::get_schedule),
    )
}
