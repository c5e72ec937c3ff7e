use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};

use crate::errors::StorageError;
use crate::model::{AttemptRecord, Verdict};
use crate::storage::schema;

/// Durable log of graded attempts, one SQLite file per project.
///
/// Every call opens a fresh connection and closes it on return; SQLite's own
/// file locking is the only coordination between concurrent graders. The
/// store file, its parent directory, and the schema are created on first use.
pub struct ResultStore {
    db_path: PathBuf,
}

impl ResultStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Creates the store file and schema if missing. Idempotent.
    pub fn ensure_initialized(&self) -> Result<(), StorageError> {
        self.connect().map(|_| ())
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        if let Some(parent) = self.db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let conn = Connection::open(&self.db_path)?;
        conn.execute_batch(schema::DDL)?;
        Ok(conn)
    }

    /// Appends one graded attempt.
    ///
    /// Once a correct attempt is on record for the (task, topic) pair the
    /// call is a no-op, so the first success is a permanent milestone.
    /// Incorrect attempts accumulate as separate rows.
    pub fn record(
        &self,
        timestamp: &str,
        task_id: u32,
        topic_id: u32,
        outcome: Verdict,
    ) -> Result<(), StorageError> {
        if self
            .lookup(task_id, topic_id)?
            .is_some_and(|existing| existing.outcome.is_correct())
        {
            return Ok(());
        }

        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO attempts (timestamp, task_id, topic_id, outcome)
             VALUES (?1, ?2, ?3, ?4)",
            params![timestamp, task_id, topic_id, outcome.flag()],
        )?;
        Ok(())
    }

    /// The authoritative record for a (task, topic) pair: the correct
    /// attempt if one exists, otherwise the latest incorrect one.
    pub fn lookup(
        &self,
        task_id: u32,
        topic_id: u32,
    ) -> Result<Option<AttemptRecord>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT timestamp, task_id, topic_id, outcome
             FROM attempts
             WHERE task_id = ?1 AND topic_id = ?2
             ORDER BY outcome DESC, rowid DESC
             LIMIT 1",
        )?;
        let mut rows = stmt.query(params![task_id, topic_id])?;
        if let Some(row) = rows.next()? {
            Ok(Some(record_from_row(row)?))
        } else {
            Ok(None)
        }
    }

    /// Every stored attempt, in insertion order.
    pub fn all_records(&self) -> Result<Vec<AttemptRecord>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT timestamp, task_id, topic_id, outcome
             FROM attempts
             ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], record_from_row)?;

        let mut records = Vec::new();
        for r in rows {
            records.push(r?);
        }
        Ok(records)
    }

    /// Rewrites every stored row for a (task, topic) pair in place.
    ///
    /// Meant for manual corrections; the grading pipeline only ever appends
    /// through [`ResultStore::record`]. Returns the number of rows touched.
    pub fn update(
        &self,
        timestamp: &str,
        task_id: u32,
        topic_id: u32,
        outcome: Verdict,
    ) -> Result<usize, StorageError> {
        let conn = self.connect()?;
        let changed = conn.execute(
            "UPDATE attempts SET timestamp = ?1, outcome = ?2
             WHERE task_id = ?3 AND topic_id = ?4",
            params![timestamp, outcome.flag(), task_id, topic_id],
        )?;
        Ok(changed)
    }
}

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<AttemptRecord> {
    Ok(AttemptRecord {
        timestamp: row.get(0)?,
        task_id: row.get(1)?,
        topic_id: row.get(2)?,
        outcome: Verdict::from_flag(row.get(3)?),
    })
}
