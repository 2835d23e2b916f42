use crate::domain::comment::entity::{Comment, ModerationStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCommentRequest {
    pub article_slug: String,
    pub message: String,
    pub parent_id: Option<i64>,
    pub alias: String,
    /// Admin submissions skip the moderation queue.
    pub trusted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedComment {
    pub id: i64,
    pub message: String,
    pub alias: String,
    pub parent_id: Option<i64>,
    pub article_slug: String,
    pub created_at: DateTime<Utc>,
    pub moderation_status: ModerationStatus,
    pub hide_publicity: bool,
}

impl From<Comment> for CreatedComment {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            message: comment.message,
            alias: comment.alias,
            parent_id: comment.parent_id,
            article_slug: comment.article_slug,
            created_at: comment.created_at,
            moderation_status: comment.moderation_status,
            hide_publicity: comment.hide_publicity,
        }
    }
}
