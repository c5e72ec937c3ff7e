// The attempts table carries no primary key or uniqueness constraint.
// Incorrect attempts for one exercise accumulate as separate rows; the
// at-most-one-correct rule is enforced by the store, not the schema.
pub const DDL: &str = r#"
CREATE TABLE IF NOT EXISTS attempts (
  timestamp TEXT NOT NULL,
  task_id INTEGER NOT NULL,
  topic_id INTEGER NOT NULL,
  outcome INTEGER NOT NULL
);
"#;
