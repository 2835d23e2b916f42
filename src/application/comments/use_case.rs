use super::dto::{CreatedComment, SubmitCommentRequest};
use crate::domain::comment::{
    entity::{Comment, ModerationStatus, NewComment},
    errors::DomainError,
    repository::CommentRepository,
    thread::{CommentThread, MAX_REPLY_DEPTH},
};
use crate::infrastructure::security::profanity_filter::ProfanityFilter;
use std::sync::Arc;

pub const MAX_COMMENT_LENGTH: usize = 5000;

pub struct CommentUseCase {
    repository: Arc<dyn CommentRepository>,
    profanity: Arc<ProfanityFilter>,
}

impl CommentUseCase {
    pub fn new(repository: Arc<dyn CommentRepository>, profanity: Arc<ProfanityFilter>) -> Self {
        Self {
            repository,
            profanity,
        }
    }

    /// Validates and stores a new comment.
    ///
    /// Every rejection happens before the store is written to, so profane
    /// text never reaches the moderation queue.
    pub async fn submit(&self, request: SubmitCommentRequest) -> Result<CreatedComment, DomainError> {
        let message = request.message.trim();
        if message.is_empty() {
            return Err(DomainError::ValidationError(
                "Comment body cannot be empty".to_string(),
            ));
        }

        let article_slug = request.article_slug.trim();
        if article_slug.is_empty() {
            return Err(DomainError::ValidationError(
                "Article slug is required".to_string(),
            ));
        }

        if message.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::ValidationError(format!(
                "Comment body cannot exceed {} characters",
                MAX_COMMENT_LENGTH
            )));
        }

        if self.profanity.has_profanity(message) {
            tracing::info!(article_slug, "comment rejected by profanity filter");
            return Err(DomainError::ValidationError(
                "Comment contains inappropriate language".to_string(),
            ));
        }

        if let Some(parent_id) = request.parent_id {
            let parent = self.repository.get_comment(parent_id).await?;
            match parent {
                Some(parent) if parent.article_slug == article_slug => {
                    if self.depth_of(&parent).await? >= MAX_REPLY_DEPTH {
                        return Err(DomainError::ValidationError(
                            "Maximum reply depth reached".to_string(),
                        ));
                    }
                }
                Some(_) => {
                    return Err(DomainError::ValidationError(
                        "Parent comment belongs to a different article".to_string(),
                    ));
                }
                None => {
                    return Err(DomainError::ValidationError(
                        "Parent comment not found".to_string(),
                    ));
                }
            }
        }

        let input = NewComment {
            message: message.to_string(),
            alias: request.alias,
            parent_id: request.parent_id,
            article_slug: article_slug.to_string(),
        };

        let id = if request.trusted {
            self.repository
                .create_comment_with_moderation(input, ModerationStatus::Ok)
                .await?
        } else {
            self.repository.create_comment(input).await?
        };

        let comment = self
            .repository
            .get_comment(id)
            .await?
            .ok_or_else(|| DomainError::InfrastructureError(format!("comment {} vanished after insert", id)))?;

        tracing::debug!(id, article_slug, status = comment.moderation_status.as_str(), "comment stored");
        Ok(comment.into())
    }

    /// Depth of a comment in its article thread, counted up to
    /// `MAX_REPLY_DEPTH`. A missing or foreign ancestor ends the chain the
    /// same way thread building promotes it to a root.
    async fn depth_of(&self, comment: &Comment) -> Result<usize, DomainError> {
        let mut depth = 0;
        let mut next = comment.parent_id.filter(|&id| id != comment.id);
        while let Some(id) = next {
            if depth >= MAX_REPLY_DEPTH {
                break;
            }
            match self.repository.get_comment(id).await? {
                Some(ancestor) if ancestor.article_slug == comment.article_slug => {
                    depth += 1;
                    next = ancestor.parent_id.filter(|&pid| pid != ancestor.id);
                }
                _ => break,
            }
        }
        Ok(depth)
    }

    pub async fn get_thread(&self, article_slug: &str) -> Result<CommentThread, DomainError> {
        let comments = self.repository.get_comments_by_slug(article_slug).await?;
        Ok(CommentThread::build(comments))
    }
}
