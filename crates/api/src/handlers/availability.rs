//! # Availability Handlers
//!
//! Toggling a vote advances it one step around the cycle
//! `Absent -> Undecided -> Attending -> Absent`.
//!
//! The client sends the value it expects to see next, but the server
//! recomputes the successor from what is stored and answers with the value
//! actually persisted. A mismatch usually means another tab toggled the
//! same vote in between; it is logged and otherwise ignored.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use rollcall_core::{
    errors::RollcallError,
    models::availability::{AvailabilityResponse, ToggleAvailabilityRequest},
    toggle,
};
use uuid::Uuid;

use crate::{
    handlers::schedule::find_schedule,
    middleware::{auth::Viewer, error_handling::AppError},
    ApiState,
};

/// `POST /schedules/{schedule_id}/users/{user_id}/candidates/{candidate_id}`
///
/// # Errors
///
/// * `RollcallError::Authorization` - `user_id` is not the viewer
/// * `RollcallError::NotFound` - Unknown schedule, or candidate outside the schedule
/// * `RollcallError::Database` - Store failure
#[axum::debug_handler]
pub async fn toggle_availability(
    State(state): State<Arc<ApiState>>,
    viewer: Viewer,
    Path((schedule_id, user_id, candidate_id)): Path<(Uuid, i64, i64)>,
    Json(payload): Json<ToggleAvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    viewer.ensure_is(user_id)?;

    find_schedule(&state, schedule_id).await?;

    let candidates = state.schedules.get_candidates(schedule_id).await?;
    if !candidates.iter().any(|c| c.candidate_id == candidate_id) {
        return Err(AppError(RollcallError::NotFound(format!(
            "Candidate with ID {} not found in schedule {}",
            candidate_id, schedule_id
        ))));
    }

    // Votes reference the users table
    state.users.upsert_user(&viewer.0).await?;

    let availability =
        toggle::toggle_availability(state.votes.as_ref(), schedule_id, candidate_id, user_id)
            .await?;

    if let Some(expected) = payload.availability {
        if expected != availability {
            tracing::info!(
                "Client expected {} but {} was stored: schedule_id={}, candidate_id={}, user_id={}",
                expected, availability, schedule_id, candidate_id, user_id
            );
        }
    }

    Ok(Json(AvailabilityResponse { availability }))
}
