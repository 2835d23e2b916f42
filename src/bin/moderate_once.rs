//! Runs a single moderation pass and exits. Intended for external cron.

use blog_comments::{
    config::Config,
    infrastructure::{
        database::pool::create_pool, repositories::sqlx_comment_repository::SqlxCommentRepository,
    },
    workers::moderation_worker::build_engine,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,blog_comments=debug"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let db = create_pool(&config.database_url, config.database_max_connections).await?;
    let repository = Arc::new(SqlxCommentRepository::new(db));

    let Some(engine) = build_engine(&config, repository)? else {
        anyhow::bail!("GEMINI_API_KEY must be set to run moderation");
    };

    let report = engine.run().await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.failed_batches.is_empty() {
        tracing::warn!(
            failed = report.failed_batches.len(),
            "some batches could not be classified"
        );
    }
    Ok(())
}
