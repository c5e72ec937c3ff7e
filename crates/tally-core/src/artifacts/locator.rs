use std::path::{Path, PathBuf};

use crate::config::TallyConfig;

/// Finds on-disk artifacts belonging to a (topic, task) pair.
///
/// Artifacts live in `Topic {N}/Tasks` under the root, or in the exam layout
/// `Exam/Topic {N}/Tasks` when the direct layout is absent. A file may carry
/// a `+` or `-` sigil from an earlier grading run, so each extension is
/// probed unprefixed first and then with either sigil.
pub struct Locator {
    root: PathBuf,
    extensions: Vec<String>,
}

impl Locator {
    pub fn new(root: impl Into<PathBuf>, extensions: Vec<String>) -> Self {
        Self {
            root: root.into(),
            extensions,
        }
    }

    pub fn from_config(config: &TallyConfig) -> Self {
        Self::new(config.root.clone(), config.extensions.clone())
    }

    /// Yields at most one existing path per extension, in configured
    /// extension order. Yields nothing when no tasks directory exists.
    pub fn find(&self, topic_id: u32, task_id: u32) -> Vec<PathBuf> {
        let Some(dir) = self.tasks_dir(topic_id) else {
            return Vec::new();
        };
        self.extensions
            .iter()
            .filter_map(|ext| first_existing(&dir, task_id, ext))
            .collect()
    }

    fn tasks_dir(&self, topic_id: u32) -> Option<PathBuf> {
        let direct = self.root.join(format!("Topic {topic_id}")).join("Tasks");
        if direct.is_dir() {
            return Some(direct);
        }
        let exam = self
            .root
            .join("Exam")
            .join(format!("Topic {topic_id}"))
            .join("Tasks");
        exam.is_dir().then_some(exam)
    }
}

// Candidate order matters: an unprefixed file wins over a previously marked
// one, and a `+` leftover wins over a `-` leftover.
fn first_existing(dir: &Path, task_id: u32, ext: &str) -> Option<PathBuf> {
    let base = format!("Task {task_id}.{ext}");
    [base.clone(), format!("+{base}"), format!("-{base}")]
        .into_iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.exists())
}
