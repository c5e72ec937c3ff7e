use std::sync::Arc;

use chrono::Utc;

use crate::artifacts::{marker, Locator};
use crate::config::TallyConfig;
use crate::errors::GradeError;
use crate::fingerprint;
use crate::model::Verdict;
use crate::storage::ResultStore;
use crate::vcs::{GitVcs, Vcs};

/// Drives one grading call end to end: verdict, result store, artifact
/// sigils, git bookkeeping.
pub struct Grader {
    store: ResultStore,
    locator: Locator,
    vcs: Arc<dyn Vcs>,
}

impl Grader {
    pub fn new(config: &TallyConfig) -> Self {
        let vcs = Arc::new(GitVcs::new(config.root.clone()));
        Self::with_vcs(config, vcs)
    }

    /// Wires an alternative version-control backend (tests, dry runs).
    pub fn with_vcs(config: &TallyConfig, vcs: Arc<dyn Vcs>) -> Self {
        Self {
            store: ResultStore::new(config.db_path()),
            locator: Locator::from_config(config),
            vcs,
        }
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// Grades a submitted answer against the expected fingerprint.
    ///
    /// The returned verdict always reflects this submission alone. The store
    /// keeps the first correct attempt per (topic, task) pair as a permanent
    /// milestone, so a later wrong answer to a solved task comes back
    /// `Incorrect` without demoting the stored result. Artifact renames and
    /// git bookkeeping are best effort: their failures are logged and never
    /// change the verdict. Only a rejected id or a broken store fails the
    /// call.
    pub fn grade(
        &self,
        topic_id: u32,
        task_id: u32,
        submitted: &str,
        expected_fingerprint: &str,
    ) -> Result<Verdict, GradeError> {
        if topic_id == 0 || task_id == 0 {
            return Err(GradeError::InvalidId { topic_id, task_id });
        }

        let verdict = fingerprint::check(submitted, expected_fingerprint);
        self.store
            .record(&Utc::now().to_rfc3339(), task_id, topic_id, verdict)?;

        for artifact in self.locator.find(topic_id, task_id) {
            match marker::mark(&artifact, verdict) {
                Ok(dest) => {
                    tracing::debug!(path = %dest.display(), "marked artifact");
                    if let Err(e) = self.vcs.stage(&dest) {
                        tracing::warn!(path = %dest.display(), "failed to stage artifact: {}", e);
                    }
                }
                Err(e) => {
                    tracing::warn!("skipping artifact: {}", e);
                }
            }
        }

        if let Err(e) = self.vcs.commit(&commit_message(topic_id, task_id, verdict)) {
            tracing::warn!("failed to commit status change: {}", e);
        }

        Ok(verdict)
    }
}

fn commit_message(topic_id: u32, task_id: u32, verdict: Verdict) -> String {
    format!("Update status of task {task_id} in topic {topic_id}: {verdict}")
}
