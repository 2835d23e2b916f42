use crate::domain::shared::pagination::PageRequest;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Moderation verdict stored on every comment.
///
/// Serialized as its integer code so API clients and the classifier share
/// one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i16", try_from = "i16")]
pub enum ModerationStatus {
    Unverified = 0,
    Ok = 1,
    Warning = 2,
    Dangerous = 3,
}

impl ModerationStatus {
    pub fn code(self) -> i16 {
        self as i16
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Unverified),
            1 => Some(Self::Ok),
            2 => Some(Self::Warning),
            3 => Some(Self::Dangerous),
            _ => None,
        }
    }

    /// Verdicts a classifier is allowed to return.
    pub fn is_verdict(self) -> bool {
        !matches!(self, Self::Unverified)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unverified => "unverified",
            Self::Ok => "ok",
            Self::Warning => "warning",
            Self::Dangerous => "dangerous",
        }
    }
}

impl From<ModerationStatus> for i16 {
    fn from(status: ModerationStatus) -> Self {
        status.code()
    }
}

impl TryFrom<i16> for ModerationStatus {
    type Error = String;

    fn try_from(code: i16) -> Result<Self, Self::Error> {
        Self::from_code(code as i64).ok_or_else(|| format!("unknown moderation status {}", code))
    }
}

impl std::str::FromStr for ModerationStatus {
    type Err = String;

    /// Accepts either the integer code or the lowercase name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| format!("unknown moderation status {}", code));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "unverified" => Ok(Self::Unverified),
            "ok" => Ok(Self::Ok),
            "warning" => Ok(Self::Warning),
            "dangerous" => Ok(Self::Dangerous),
            other => Err(format!("unknown moderation status {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub message: String,
    pub alias: String,
    pub parent_id: Option<i64>,
    pub article_slug: String,
    pub moderation_status: ModerationStatus,
    pub hide_publicity: bool,
    pub moderation_reason: Option<String>,
    pub last_moderated_at: Option<DateTime<Utc>>,
}

/// Fields supplied by a visitor when posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub message: String,
    pub alias: String,
    pub parent_id: Option<i64>,
    pub article_slug: String,
}

/// A comment together with its direct replies, recursively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentNode {
    #[serde(flatten)]
    pub comment: Comment,
    pub children: Vec<CommentNode>,
}

/// Payload sent to the classifier for one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationInput {
    pub id: i64,
    pub message: String,
}

/// Verdict written back to the store for one comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationResult {
    pub id: i64,
    pub moderation_status: ModerationStatus,
    pub moderation_reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminComment {
    #[serde(flatten)]
    pub comment: Comment,
    pub parent: Option<Comment>,
    pub children: Vec<Comment>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentCounts {
    pub all: i64,
    pub unverified: i64,
    pub ok: i64,
    pub warning: i64,
    pub dangerous: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminCommentQuery {
    pub status: Option<ModerationStatus>,
    pub page: PageRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminCommentPage {
    pub comments: Vec<AdminComment>,
    pub total: i64,
}
