pub mod database;
pub mod identity;
pub mod moderation;
pub mod repositories;
pub mod security;
