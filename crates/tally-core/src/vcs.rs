use std::path::Path;

use crate::errors::VcsError;

pub mod git;

pub use git::GitVcs;

/// Outcome of a commit attempt. Re-committing an unchanged tree is a normal
/// occurrence when a task is re-graded, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitStatus {
    Created,
    NothingToCommit,
}

/// Version-control backend the grading pipeline records status changes
/// through. Injected so tests can observe calls without a real repository.
pub trait Vcs: Send + Sync {
    /// Stages one path for the next commit.
    fn stage(&self, path: &Path) -> Result<(), VcsError>;

    /// Commits staged changes with the given message.
    fn commit(&self, message: &str) -> Result<CommitStatus, VcsError>;
}
