use std::collections::BTreeMap;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rollcall_core::{
    matrix::Participant,
    models::{availability::Availability, schedule::GetScheduleResponse, user::User},
    store::{CommentStore, UserStore, VoteStore},
};
use uuid::Uuid;

use crate::test_utils::{as_user, TestContext};

#[tokio::test]
async fn test_get_schedule_shows_viewer_row_without_votes() {
    let ctx = TestContext::new().await;
    let viewer = User::new(5, "viewer");

    let response = as_user(ctx.server.get(&ctx.schedule_path()), &viewer).await;
    response.assert_status_ok();

    let body: GetScheduleResponse = response.json();
    assert_eq!(body.schedule, ctx.schedule);
    assert_eq!(body.candidates, ctx.candidates);
    assert_eq!(
        body.participants,
        vec![Participant {
            user_id: 5,
            username: "viewer".to_string(),
            is_self: true,
        }]
    );
    assert_eq!(
        body.matrix.get(&5),
        Some(&BTreeMap::from([
            (ctx.candidates[0].candidate_id, Availability::Absent),
            (ctx.candidates[1].candidate_id, Availability::Absent),
        ]))
    );
    assert!(body.comments.is_empty());
}

#[tokio::test]
async fn test_get_schedule_merges_voters_and_defaults_missing_votes() {
    let ctx = TestContext::new().await;
    let schedule_id = ctx.schedule.schedule_id;
    let (c1, c2) = (ctx.candidates[0].candidate_id, ctx.candidates[1].candidate_id);
    let viewer = User::new(10, "u1");
    let voter = User::new(20, "u2");

    ctx.store.upsert_user(&voter).await.unwrap();
    ctx.store
        .upsert_availability(schedule_id, c1, voter.user_id, Availability::Attending)
        .await
        .unwrap();
    ctx.store
        .upsert_comment(schedule_id, voter.user_id, "late by 10 minutes")
        .await
        .unwrap();

    let response = as_user(ctx.server.get(&ctx.schedule_path()), &viewer).await;
    response.assert_status_ok();
    let body: GetScheduleResponse = response.json();

    let rows: Vec<(i64, bool)> = body
        .participants
        .iter()
        .map(|p| (p.user_id, p.is_self))
        .collect();
    assert_eq!(rows, vec![(10, true), (20, false)]);

    let expected = BTreeMap::from([
        (
            10,
            BTreeMap::from([(c1, Availability::Absent), (c2, Availability::Absent)]),
        ),
        (
            20,
            BTreeMap::from([(c1, Availability::Attending), (c2, Availability::Absent)]),
        ),
    ]);
    assert_eq!(body.matrix, expected);
    assert_eq!(
        body.comments.get(&20).map(String::as_str),
        Some("late by 10 minutes")
    );
}

#[tokio::test]
async fn test_get_schedule_serializes_votes_as_ordinals() {
    let ctx = TestContext::new().await;
    let viewer = ctx.owner.clone();
    let candidate_id = ctx.candidates[1].candidate_id;

    ctx.store
        .upsert_availability(ctx.schedule.schedule_id, candidate_id, viewer.user_id, Availability::Undecided)
        .await
        .unwrap();

    let response = as_user(ctx.server.get(&ctx.schedule_path()), &viewer).await;
    let body: serde_json::Value = response.json();

    assert_eq!(
        body["matrix"][viewer.user_id.to_string()][candidate_id.to_string()],
        serde_json::json!(1)
    );
}

#[tokio::test]
async fn test_get_unknown_schedule_returns_not_found() {
    let ctx = TestContext::new().await;

    let response = as_user(
        ctx.server.get(&format!("/schedules/{}", Uuid::new_v4())),
        &ctx.owner,
    )
    .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_get_schedule_requires_identity() {
    let ctx = TestContext::new().await;

    let response = ctx.server.get(&ctx.schedule_path()).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
