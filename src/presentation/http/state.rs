use crate::{
    application::{
        admin_comments::use_case::AdminCommentUseCase, comments::use_case::CommentUseCase,
    },
    config::Config,
    domain::comment::repository::{AdminCommentRepository, CommentRepository},
    infrastructure::security::profanity_filter::ProfanityFilter,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub comment_repo: Arc<dyn CommentRepository>,
    pub admin_repo: Arc<dyn AdminCommentRepository>,
    pub profanity: Arc<ProfanityFilter>,
}

impl AppState {
    pub fn comments(&self) -> CommentUseCase {
        CommentUseCase::new(self.comment_repo.clone(), self.profanity.clone())
    }

    pub fn admin_comments(&self) -> AdminCommentUseCase {
        AdminCommentUseCase::new(self.admin_repo.clone())
    }
}
