use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of characters kept from a submitted comment.
pub const MAX_COMMENT_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub schedule_id: Uuid,
    pub user_id: i64,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCommentRequest {
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetCommentResponse {
    pub comment: String,
}

/// Cuts `comment` down to at most [`MAX_COMMENT_LENGTH`] characters.
///
/// Over-long comments are accepted and shortened rather than rejected.
pub fn truncate_comment(comment: &str) -> String {
    comment.chars().take(MAX_COMMENT_LENGTH).collect()
}
