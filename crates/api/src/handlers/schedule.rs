use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use rollcall_core::{
    errors::RollcallError,
    matrix::build_matrix,
    models::schedule::{GetScheduleResponse, Schedule},
};
use uuid::Uuid;

use crate::{
    middleware::{auth::Viewer, error_handling::AppError},
    ApiState,
};

/// Looks up a schedule, failing with `NotFound` when it does not exist.
pub(crate) async fn find_schedule(state: &ApiState, schedule_id: Uuid) -> Result<Schedule, AppError> {
    let schedule = state
        .schedules
        .get_schedule(schedule_id)
        .await?
        .ok_or_else(|| RollcallError::NotFound(format!("Schedule with ID {} not found", schedule_id)))?;

    Ok(schedule)
}

/// Schedule page: candidates, participant rows and the dense availability
/// matrix as seen by the requesting user, plus everyone's comments.
#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Viewer(viewer): Viewer,
    Path(schedule_id): Path<Uuid>,
) -> Result<Json<GetScheduleResponse>, AppError> {
    let schedule = find_schedule(&state, schedule_id).await?;

    let candidates = state.schedules.get_candidates(schedule_id).await?;
    let records = state.votes.get_availabilities(schedule_id).await?;
    let comments = state.comments.get_comments(schedule_id).await?;

    let matrix = build_matrix(&candidates, &viewer, &records);

    tracing::debug!(
        "Built availability matrix: schedule_id={}, participants={}, candidates={}",
        schedule_id,
        matrix.participants.len(),
        matrix.candidates.len()
    );

    let response = GetScheduleResponse {
        schedule,
        candidates: matrix.candidates,
        participants: matrix.participants,
        matrix: matrix.cells,
        comments: comments
            .into_iter()
            .map(|comment| (comment.user_id, comment.comment))
            .collect(),
    };

    Ok(Json(response))
}
