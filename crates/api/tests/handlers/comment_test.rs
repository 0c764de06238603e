use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rollcall_core::{
    models::{
        comment::SetCommentResponse,
        schedule::GetScheduleResponse,
        user::User,
    },
    store::{CommentStore, UserStore},
};
use serde_json::json;
use uuid::Uuid;

use crate::test_utils::{as_user, TestContext};

#[tokio::test]
async fn test_set_comment_is_stored_and_echoed() {
    let ctx = TestContext::new().await;
    let viewer = User::new(2, "guest");

    let response = as_user(ctx.server.post(&ctx.comment_path(&viewer)), &viewer)
        .json(&json!({ "comment": "Only after 8pm" }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "comment": "Only after 8pm" }));

    let comments = ctx.store.get_comments(ctx.schedule.schedule_id).await.unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].user_id, 2);
    assert_eq!(ctx.store.get_user(2).await.unwrap(), Some(viewer));
}

#[tokio::test]
async fn test_long_comment_is_truncated_not_rejected() {
    let ctx = TestContext::new().await;
    let viewer = User::new(2, "guest");
    let long = "あ".repeat(300);

    let response = as_user(ctx.server.post(&ctx.comment_path(&viewer)), &viewer)
        .json(&json!({ "comment": long }))
        .await;

    response.assert_status_ok();
    let body: SetCommentResponse = response.json();
    assert_eq!(body.comment.chars().count(), 255);
    assert_eq!(body.comment, "あ".repeat(255));
}

#[tokio::test]
async fn test_second_comment_replaces_the_first() {
    let ctx = TestContext::new().await;
    let viewer = User::new(2, "guest");

    for comment in ["maybe", "count me in"] {
        as_user(ctx.server.post(&ctx.comment_path(&viewer)), &viewer)
            .json(&json!({ "comment": comment }))
            .await
            .assert_status_ok();
    }

    let body: GetScheduleResponse = as_user(ctx.server.get(&ctx.schedule_path()), &viewer)
        .await
        .json();
    assert_eq!(body.comments.len(), 1);
    assert_eq!(body.comments[&2i64], "count me in");
}

#[tokio::test]
async fn test_comment_for_another_user_is_forbidden() {
    let ctx = TestContext::new().await;
    let viewer = User::new(2, "guest");

    let response = as_user(ctx.server.post(&ctx.comment_path(&ctx.owner)), &viewer)
        .json(&json!({ "comment": "hijacked" }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert!(ctx
        .store
        .get_comments(ctx.schedule.schedule_id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_comment_on_unknown_schedule_is_not_found() {
    let ctx = TestContext::new().await;
    let viewer = User::new(2, "guest");

    let response = as_user(
        ctx.server.post(&format!(
            "/schedules/{}/users/{}/comments",
            Uuid::new_v4(),
            viewer.user_id
        )),
        &viewer,
    )
    .json(&json!({ "comment": "hello" }))
    .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
