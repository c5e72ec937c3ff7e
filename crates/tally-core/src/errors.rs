use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The result store cannot be created, opened, or queried.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to create database directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// An artifact could not be renamed to carry its status sigil.
#[derive(Debug, Error)]
pub enum MarkError {
    #[error("artifact path {} has no file name", .path.display())]
    NoFileName { path: PathBuf },

    #[error("failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A version-control operation could not be carried out.
#[derive(Debug, Error)]
pub enum VcsError {
    #[error("no .git directory under {}", .root.display())]
    NotARepository { root: PathBuf },

    #[error("failed to invoke git: {0}")]
    Spawn(#[from] io::Error),

    #[error("git {op} failed: {stderr}")]
    CommandFailed { op: &'static str, stderr: String },
}

/// A grading call was rejected or its mandatory bookkeeping failed.
#[derive(Debug, Error)]
pub enum GradeError {
    #[error("topic and task ids must be positive (got topic {topic_id}, task {task_id})")]
    InvalidId { topic_id: u32, task_id: u32 },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
#[error("{0}")]
pub struct ConfigError(pub String);
