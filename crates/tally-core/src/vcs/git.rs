use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::VcsError;
use crate::vcs::{CommitStatus, Vcs};

/// Records status changes by shelling out to the `git` binary with the
/// project root as working directory.
pub struct GitVcs {
    root: PathBuf,
}

impl GitVcs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    // A root without .git short-circuits before any subprocess is spawned,
    // so grading works in plain directories.
    fn ensure_repository(&self) -> Result<(), VcsError> {
        if self.root.join(".git").is_dir() {
            Ok(())
        } else {
            Err(VcsError::NotARepository {
                root: self.root.clone(),
            })
        }
    }
}

impl Vcs for GitVcs {
    fn stage(&self, path: &Path) -> Result<(), VcsError> {
        self.ensure_repository()?;

        // Artifact paths arrive rooted at the project root; git resolves
        // relative pathspecs against its working directory, so pass the
        // root-relative form.
        let pathspec = path.strip_prefix(&self.root).unwrap_or(path);
        let output = Command::new("git")
            .arg("add")
            .arg(pathspec)
            .current_dir(&self.root)
            .output()?;
        if output.status.success() {
            Ok(())
        } else {
            Err(VcsError::CommandFailed {
                op: "add",
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }

    fn commit(&self, message: &str) -> Result<CommitStatus, VcsError> {
        self.ensure_repository()?;

        let output = Command::new("git")
            .args(["commit", "-m", message])
            .current_dir(&self.root)
            .output()?;
        if output.status.success() {
            return Ok(CommitStatus::Created);
        }

        // git reports a clean tree on stdout and exits nonzero. That happens
        // whenever an already-correct task is re-graded, so it is not a
        // failure.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stdout.contains("nothing to commit") || stderr.contains("nothing to commit") {
            return Ok(CommitStatus::NothingToCommit);
        }

        Err(VcsError::CommandFailed {
            op: "commit",
            stderr: stderr.trim().to_string(),
        })
    }
}
