//! Scheduled AI moderation of newly posted comments.
//!
//! A run pulls the oldest unvisited comments, sends them to the classifier in
//! fixed-size batches one after another, and writes every successful batch
//! back in a single store update. A batch whose attempts are all exhausted is
//! left untouched so the next run picks it up again.

use crate::domain::comment::{
    entity::{ModerationInput, ModerationResult, ModerationStatus},
    errors::DomainError,
    repository::CommentRepository,
};
use crate::infrastructure::moderation::{
    classifier::{ClassifierError, ModerationClassifier},
    prompt::{build_moderation_prompt, truncate_reason},
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModerationSettings {
    pub fetch_limit: i64,
    pub batch_size: usize,
    pub max_attempts: u32,
    pub initial_backoff: Duration,
    pub batch_delay: Duration,
}

impl Default for ModerationSettings {
    fn default() -> Self {
        Self {
            fetch_limit: 50,
            batch_size: 10,
            max_attempts: 3,
            initial_backoff: Duration::from_secs(1),
            batch_delay: Duration::from_millis(500),
        }
    }
}

impl ModerationSettings {
    pub fn new(fetch_limit: i64, batch_size: usize, max_attempts: u32) -> Self {
        Self {
            fetch_limit: fetch_limit.max(1),
            batch_size: batch_size.max(1),
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchFailure {
    pub batch: usize,
    pub ids: Vec<i64>,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModerationRunReport {
    /// Another run held the guard, nothing was done.
    pub skipped: bool,
    pub fetched: usize,
    pub batches: usize,
    pub moderated: usize,
    pub repaired: usize,
    pub failed_batches: Vec<BatchFailure>,
}

/// One item of the classifier's JSON answer.
#[derive(Debug, Deserialize)]
struct ClassifiedComment {
    id: i64,
    #[allow(dead_code)]
    message: String,
    /// Any JSON number; anything other than 1, 2 or 3 is repaired.
    moderation_status: serde_json::Number,
    moderation_reason: String,
}

/// Maps a classifier status onto a verdict. Integral floats such as `2.0`
/// count as their integer value.
fn verdict_from_number(number: &serde_json::Number) -> Option<ModerationStatus> {
    let code = match number.as_i64() {
        Some(code) => code,
        None => {
            let float = number.as_f64()?;
            if float.fract() != 0.0 || !(1.0..=3.0).contains(&float) {
                return None;
            }
            float as i64
        }
    };
    ModerationStatus::from_code(code).filter(|status| status.is_verdict())
}

#[derive(Debug)]
struct BatchOutcome {
    results: Vec<ModerationResult>,
    repaired: usize,
}

pub struct ModerationEngine {
    repository: Arc<dyn CommentRepository>,
    classifier: Arc<dyn ModerationClassifier>,
    settings: ModerationSettings,
    running: Mutex<()>,
}

impl ModerationEngine {
    pub fn new(
        repository: Arc<dyn CommentRepository>,
        classifier: Arc<dyn ModerationClassifier>,
        settings: ModerationSettings,
    ) -> Self {
        Self {
            repository,
            classifier,
            settings,
            running: Mutex::new(()),
        }
    }

    /// Runs one moderation pass.
    ///
    /// Store failures abort the pass; batches written before the failure
    /// stay written. Classifier failures only mark their batch as failed.
    pub async fn run(&self) -> Result<ModerationRunReport, DomainError> {
        let Ok(_guard) = self.running.try_lock() else {
            warn!("moderation run already in progress, skipping");
            return Ok(ModerationRunReport {
                skipped: true,
                ..ModerationRunReport::default()
            });
        };

        info!("starting AI moderation run");
        let pending = self
            .repository
            .get_unmoderated_comments(self.settings.fetch_limit)
            .await?;

        let mut report = ModerationRunReport {
            fetched: pending.len(),
            ..ModerationRunReport::default()
        };

        if pending.is_empty() {
            info!("no comments to moderate");
            return Ok(report);
        }

        let batches: Vec<&[ModerationInput]> = pending.chunks(self.settings.batch_size).collect();
        report.batches = batches.len();
        info!(
            comments = pending.len(),
            batches = batches.len(),
            "found comments to moderate"
        );

        for (index, batch) in batches.iter().enumerate() {
            let outcome = match self.classify_batch(index, batch).await {
                Ok(outcome) => outcome,
                Err(err) => {
                    error!(batch = index, error = %err, "moderation batch failed after all attempts");
                    report.failed_batches.push(BatchFailure {
                        batch: index,
                        ids: batch.iter().map(|c| c.id).collect(),
                        error: err.to_string(),
                    });
                    continue;
                }
            };

            self.repository
                .update_moderation_status(&outcome.results)
                .await?;
            report.moderated += outcome.results.len();
            report.repaired += outcome.repaired;

            if index + 1 < batches.len() {
                tokio::time::sleep(self.settings.batch_delay).await;
            }
        }

        info!(
            processed = report.moderated,
            repaired = report.repaired,
            failed_batches = report.failed_batches.len(),
            "moderation run completed"
        );
        Ok(report)
    }

    async fn classify_batch(
        &self,
        index: usize,
        batch: &[ModerationInput],
    ) -> Result<BatchOutcome, ClassifierError> {
        let prompt =
            build_moderation_prompt(batch).map_err(|e| ClassifierError::Malformed(e.to_string()))?;

        let mut attempt = 1;
        loop {
            let err = match self.attempt(&prompt, batch).await {
                Ok(outcome) => return Ok(outcome),
                Err(err) => err,
            };

            if attempt >= self.settings.max_attempts {
                return Err(err);
            }

            let backoff = self.settings.initial_backoff * 2u32.pow(attempt - 1);
            warn!(
                batch = index,
                attempt,
                backoff_ms = backoff.as_millis() as u64,
                error = %err,
                "moderation attempt failed, retrying"
            );
            tokio::time::sleep(backoff).await;
            attempt += 1;
        }
    }

    async fn attempt(
        &self,
        prompt: &str,
        batch: &[ModerationInput],
    ) -> Result<BatchOutcome, ClassifierError> {
        let raw = self.classifier.classify(prompt).await?;
        parse_classification(&raw, batch)
    }
}

/// Decodes the classifier answer against the batch it was asked about.
///
/// Field presence and primitive types are strict. An out-of-range status is
/// the one defect repaired in place, to `Warning`. Ids that were not asked
/// about, or that repeat, reject the whole answer. Ids the classifier left
/// out stay unvisited.
fn parse_classification(
    raw: &str,
    batch: &[ModerationInput],
) -> Result<BatchOutcome, ClassifierError> {
    let value: serde_json::Value =
        serde_json::from_str(raw.trim()).map_err(|e| ClassifierError::Malformed(e.to_string()))?;
    let items: Vec<ClassifiedComment> =
        serde_json::from_value(value).map_err(|e| ClassifierError::Schema(e.to_string()))?;

    let expected: HashSet<i64> = batch.iter().map(|c| c.id).collect();
    let mut seen = HashSet::with_capacity(items.len());
    let mut results = Vec::with_capacity(items.len());
    let mut repaired = 0;

    for item in items {
        if !expected.contains(&item.id) {
            return Err(ClassifierError::Schema(format!(
                "unexpected comment id {}",
                item.id
            )));
        }
        if !seen.insert(item.id) {
            return Err(ClassifierError::Schema(format!(
                "duplicate comment id {}",
                item.id
            )));
        }

        let moderation_status = match verdict_from_number(&item.moderation_status) {
            Some(status) => status,
            None => {
                warn!(
                    id = item.id,
                    status = %item.moderation_status,
                    "classifier returned an invalid status, defaulting to warning"
                );
                repaired += 1;
                ModerationStatus::Warning
            }
        };

        results.push(ModerationResult {
            id: item.id,
            moderation_status,
            moderation_reason: truncate_reason(&item.moderation_reason),
        });
    }

    if results.is_empty() {
        return Err(ClassifierError::Schema(
            "no results for a non-empty batch".to_string(),
        ));
    }

    if results.len() < expected.len() {
        warn!(
            expected = expected.len(),
            received = results.len(),
            "classifier omitted comments, they stay queued"
        );
    }

    Ok(BatchOutcome { results, repaired })
}
