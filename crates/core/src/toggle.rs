//! Vote toggling and comment submission.
//!
//! A toggle reads the stored vote, advances it one step around the cycle and
//! writes it back. The read and the write are separate store calls with no
//! lock or transaction between them: two concurrent toggles of the same vote
//! can both read the same value, and the second write wins.

use tracing::debug;
use uuid::Uuid;

use crate::errors::RollcallResult;
use crate::models::{
    availability::Availability,
    comment::{truncate_comment, Comment},
};
use crate::store::{CommentStore, VoteStore};

/// Successor of `current`, `(current + 1) mod 3`.
pub fn next(current: Availability) -> Availability {
    current.next()
}

/// Advances the vote of `user_id` on `candidate_id` and returns the value
/// that was persisted.
///
/// A missing record counts as [`Availability::Absent`], so the first toggle
/// always stores [`Availability::Undecided`].
pub async fn toggle_availability(
    store: &dyn VoteStore,
    schedule_id: Uuid,
    candidate_id: i64,
    user_id: i64,
) -> RollcallResult<Availability> {
    let current = store
        .get_availability(schedule_id, candidate_id, user_id)
        .await?
        .unwrap_or_default();
    let advanced = next(current);

    debug!(
        "Toggling availability: schedule_id={}, candidate_id={}, user_id={}, {} -> {}",
        schedule_id, candidate_id, user_id, current, advanced
    );

    store
        .upsert_availability(schedule_id, candidate_id, user_id, advanced)
        .await
}

/// Replaces the comment of `user_id` on the schedule, keeping at most
/// 255 characters of `comment`.
pub async fn set_comment(
    store: &dyn CommentStore,
    schedule_id: Uuid,
    user_id: i64,
    comment: &str,
) -> RollcallResult<Comment> {
    let comment = truncate_comment(comment);
    store.upsert_comment(schedule_id, user_id, &comment).await
}
