pub mod admin_comments;
pub mod comments;
pub mod health;
