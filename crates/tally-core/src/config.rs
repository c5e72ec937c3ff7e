use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// File name probed in the working directory when no config path is given.
pub const DEFAULT_CONFIG_FILE: &str = "tally.yaml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Project root. Exercise artifacts, the result store, and the git
    /// working tree all live under it.
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Result store location, relative to `root`.
    #[serde(default = "default_db_file")]
    pub db_file: PathBuf,

    /// Artifact extensions, searched in this order.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_db_file() -> PathBuf {
    PathBuf::from(".tally/results.db")
}

fn default_extensions() -> Vec<String> {
    ["md", "png", "rs", "jpg", "ods", "xlsx"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            db_file: default_db_file(),
            extensions: default_extensions(),
        }
    }
}

impl TallyConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Absolute or root-relative path of the result store file.
    pub fn db_path(&self) -> PathBuf {
        self.root.join(&self.db_file)
    }
}

pub fn load_config(path: &Path) -> Result<TallyConfig, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ConfigError(format!("failed to read config {}: {}", path.display(), e)))?;

    let mut ignored_keys = std::collections::HashSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);

    let mut cfg: TallyConfig = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })
    .map_err(|e| ConfigError(format!("failed to parse YAML: {}", e)))?;

    if !ignored_keys.is_empty() {
        tracing::warn!("ignored unknown config fields: {:?}", ignored_keys);
    }

    if cfg.extensions.is_empty() {
        return Err(ConfigError(format!(
            "config has an empty extension list (file: {})",
            path.display()
        )));
    }

    // Relative roots are taken from the config file's directory, not the
    // process working directory.
    if cfg.root.is_relative() {
        let base = path.parent().unwrap_or(Path::new("."));
        cfg.root = base.join(&cfg.root);
    }

    Ok(cfg)
}

pub fn write_sample_config(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        r#"# Project root. Exercise artifacts, the result store, and the git working
# tree all live under it. Relative paths are taken from this file's directory.
root: "."

# Result store location, relative to root.
db_file: ".tally/results.db"

# Artifact extensions, searched in this order.
extensions: [md, png, rs, jpg, ods, xlsx]
"#,
    )
    .map_err(|e| ConfigError(format!("failed to write sample config: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_complete() {
        let cfg = TallyConfig::default();
        assert_eq!(cfg.root, PathBuf::from("."));
        assert_eq!(cfg.db_path(), PathBuf::from("./.tally/results.db"));
        assert_eq!(cfg.extensions.len(), 6);
        assert_eq!(cfg.extensions[0], "md");
    }

    #[test]
    fn sample_config_round_trips() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tally.yaml");
        write_sample_config(&path)?;

        let cfg = load_config(&path)?;
        assert_eq!(cfg.root, dir.path().join("."));
        assert_eq!(cfg.db_file, PathBuf::from(".tally/results.db"));
        assert_eq!(cfg.extensions, TallyConfig::default().extensions);
        Ok(())
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tally.yaml");
        std::fs::write(&path, "root: \"/work/exercises\"\n")?;

        let cfg = load_config(&path)?;
        assert_eq!(cfg.root, PathBuf::from("/work/exercises"));
        assert_eq!(cfg.db_file, PathBuf::from(".tally/results.db"));
        Ok(())
    }

    #[test]
    fn unknown_keys_are_ignored() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tally.yaml");
        std::fs::write(&path, "root: \".\"\nfrobnicate: true\n")?;

        assert!(load_config(&path).is_ok());
        Ok(())
    }

    #[test]
    fn empty_extension_list_is_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("tally.yaml");
        std::fs::write(&path, "extensions: []\n")?;

        let err = load_config(&path).unwrap_err();
        assert!(err.0.contains("empty extension list"));
        Ok(())
    }
}
