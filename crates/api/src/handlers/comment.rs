use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use rollcall_core::{
    models::comment::{SetCommentRequest, SetCommentResponse},
    toggle,
};
use uuid::Uuid;

use crate::{
    handlers::schedule::find_schedule,
    middleware::{auth::Viewer, error_handling::AppError},
    ApiState,
};

/// `POST /schedules/{schedule_id}/users/{user_id}/comments`
///
/// Replaces the viewer's comment on the schedule. Comments longer than
/// 255 characters are cut, not rejected.
#[axum::debug_handler]
pub async fn set_comment(
    State(state): State<Arc<ApiState>>,
    viewer: Viewer,
    Path((schedule_id, user_id)): Path<(Uuid, i64)>,
    Json(payload): Json<SetCommentRequest>,
) -> Result<Json<SetCommentResponse>, AppError> {
    viewer.ensure_is(user_id)?;

    find_schedule(&state, schedule_id).await?;

    state.users.upsert_user(&viewer.0).await?;

    let stored =
        toggle::set_comment(state.comments.as_ref(), schedule_id, user_id, &payload.comment)
            .await?;

    Ok(Json(SetCommentResponse {
        comment: stored.comment,
    }))
}
