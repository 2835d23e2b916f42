use crate::{
    application::moderation::engine::{ModerationEngine, ModerationSettings},
    config::Config,
    domain::comment::repository::CommentRepository,
    infrastructure::moderation::{classifier::ClassifierError, gemini_client::GeminiClassifier},
};
use std::{sync::Arc, time::Duration};
use tokio::sync::watch;

/// Wires the engine from configuration. `None` when no classifier key is set.
pub fn build_engine(
    config: &Config,
    repository: Arc<dyn CommentRepository>,
) -> Result<Option<ModerationEngine>, ClassifierError> {
    let Some(api_key) = config.gemini_api_key.as_deref() else {
        return Ok(None);
    };

    let classifier = GeminiClassifier::new(
        api_key,
        &config.gemini_model,
        Duration::from_secs(config.classifier_timeout_seconds.max(1)),
    )?
    .with_base_url(&config.gemini_base_url);

    let settings = ModerationSettings::new(
        config.moderation_fetch_limit,
        config.moderation_batch_size,
        config.moderation_max_attempts,
    );

    Ok(Some(ModerationEngine::new(
        repository,
        Arc::new(classifier),
        settings,
    )))
}

/// Runs the moderation engine on a fixed interval inside the server process.
pub struct ModerationWorker {
    engine: Arc<ModerationEngine>,
    interval_seconds: u64,
}

impl ModerationWorker {
    pub fn new(engine: Arc<ModerationEngine>, interval_seconds: u64) -> Self {
        Self {
            engine,
            interval_seconds: interval_seconds.max(10),
        }
    }

    /// Loops until `shutdown` flips to `true` or its sender is dropped.
    /// The signal is only observed between runs, so a run in progress always
    /// completes.
    pub async fn start(&self, mut shutdown: watch::Receiver<bool>) {
        tracing::info!(
            interval_seconds = self.interval_seconds,
            "moderation worker started"
        );
        while !*shutdown.borrow() {
            match self.engine.run().await {
                Ok(report) if report.skipped => {}
                Ok(report) => tracing::debug!(
                    fetched = report.fetched,
                    moderated = report.moderated,
                    failed_batches = report.failed_batches.len(),
                    "moderation tick finished"
                ),
                Err(e) => tracing::error!(error = %e, "moderation run failed"),
            }

            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(self.interval_seconds)) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }
        tracing::info!("moderation worker stopped");
    }
}
