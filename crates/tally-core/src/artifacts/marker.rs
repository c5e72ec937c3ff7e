use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::MarkError;
use crate::model::Verdict;

/// Renames an artifact so its file name starts with the sigil for `verdict`,
/// returning the resulting path.
///
/// An existing sigil is stripped before the new one is prepended, so a file
/// flipping between outcomes never accumulates prefixes. When the name is
/// already correct no filesystem call is made. A stale file already sitting
/// at the destination name is replaced by the rename.
pub fn mark(path: &Path, verdict: Verdict) -> Result<PathBuf, MarkError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MarkError::NoFileName {
            path: path.to_path_buf(),
        })?;
    let base = name
        .strip_prefix('+')
        .or_else(|| name.strip_prefix('-'))
        .unwrap_or(name);

    let dest = path.with_file_name(format!("{}{}", verdict.sigil(), base));
    if dest.as_path() != path {
        fs::rename(path, &dest).map_err(|source| MarkError::Rename {
            from: path.to_path_buf(),
            to: dest.clone(),
            source,
        })?;
    }
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(path: &Path) {
        std::fs::write(path, b"x").unwrap();
    }

    #[test]
    fn marks_unprefixed_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("Task 3.md");
        touch(&src);

        let dest = mark(&src, Verdict::Correct)?;
        assert_eq!(dest, dir.path().join("+Task 3.md"));
        assert!(!src.exists());
        assert!(dest.exists());
        Ok(())
    }

    #[test]
    fn flips_sigil_without_stacking() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("-Task 3.md");
        touch(&src);

        let dest = mark(&src, Verdict::Correct)?;
        assert_eq!(dest, dir.path().join("+Task 3.md"));
        Ok(())
    }

    #[test]
    fn already_marked_is_a_no_op() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let src = dir.path().join("+Task 3.md");
        touch(&src);

        let dest = mark(&src, Verdict::Correct)?;
        assert_eq!(dest, src);
        assert!(src.exists());
        Ok(())
    }

    #[test]
    fn replaces_stale_opposite_file() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let fresh = dir.path().join("Task 3.md");
        let stale = dir.path().join("-Task 3.md");
        std::fs::write(&fresh, b"new answer")?;
        std::fs::write(&stale, b"old answer")?;

        let dest = mark(&fresh, Verdict::Incorrect)?;
        assert_eq!(dest, stale);
        assert_eq!(std::fs::read(&dest)?, b"new answer");
        assert!(!fresh.exists());
        Ok(())
    }

    #[test]
    fn missing_source_reports_rename_error() {
        let dir = tempfile::tempdir().unwrap();
        let ghost = dir.path().join("Task 1.md");

        let err = mark(&ghost, Verdict::Correct).unwrap_err();
        assert!(matches!(err, MarkError::Rename { .. }));
    }

    #[test]
    fn path_without_file_name_is_rejected() {
        let err = mark(Path::new("/"), Verdict::Correct).unwrap_err();
        assert!(matches!(err, MarkError::NoFileName { .. }));
    }
}
