use std::path::{Path, PathBuf};

use anyhow::Context;

use tally_core::config::{self, TallyConfig, DEFAULT_CONFIG_FILE};

use crate::cli::args::{Cli, Command};

pub mod fingerprint;
pub mod grade;
pub mod init;
pub mod report;

pub mod exit_codes {
    pub const OK: i32 = 0;
    pub const INCORRECT: i32 = 1;
    pub const FATAL: i32 = 2;
}

pub fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Grade(args) => grade::run(args),
        Command::Report(args) => report::run(args),
        Command::Init(args) => init::run(args),
        Command::Fingerprint(args) => fingerprint::run(args),
        Command::Version => {
            println!("tally {}", env!("CARGO_PKG_VERSION"));
            Ok(exit_codes::OK)
        }
    }
}

/// An explicit --config must load. Otherwise a tally.yaml in the working
/// directory is used when present, else built-in defaults. A --root override
/// wins over whatever the config said.
pub(crate) fn resolve_config(
    config: Option<&Path>,
    root: Option<PathBuf>,
) -> anyhow::Result<TallyConfig> {
    let mut cfg = match config {
        Some(path) => config::load_config(path)
            .with_context(|| format!("cannot load {}", path.display()))?,
        None => {
            let probe = Path::new(DEFAULT_CONFIG_FILE);
            if probe.is_file() {
                config::load_config(probe)?
            } else {
                TallyConfig::default()
            }
        }
    };
    if let Some(root) = root {
        cfg.root = root;
    }
    Ok(cfg)
}
