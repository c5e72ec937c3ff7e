use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Answer grading and progress bookkeeping for exercise repositories"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Grade(GradeArgs),
    Report(ReportArgs),
    Init(InitArgs),
    Fingerprint(FingerprintArgs),
    Version,
}

#[derive(Parser, Clone)]
pub struct GradeArgs {
    /// Topic the task belongs to
    #[arg(long)]
    pub topic: u32,

    /// Task number within the topic
    #[arg(long)]
    pub task: u32,

    /// Submitted answer, hashed as the exact string given
    #[arg(long)]
    pub answer: String,

    /// Expected MD5 fingerprint of the canonical answer (lowercase hex)
    #[arg(long)]
    pub expected: String,

    /// Config file (default: ./tally.yaml when present)
    #[arg(long, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root, overriding the config
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct ReportArgs {
    /// Only attempts for this topic
    #[arg(long)]
    pub topic: Option<u32>,

    /// Only attempts for this task
    #[arg(long, requires = "topic")]
    pub task: Option<u32>,

    /// Output format: text | json
    #[arg(long, default_value = "text")]
    pub format: String,

    /// Config file (default: ./tally.yaml when present)
    #[arg(long, env = "TALLY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root, overriding the config
    #[arg(long)]
    pub root: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct InitArgs {
    /// Where to write the sample config
    #[arg(long, default_value = "tally.yaml")]
    pub config: PathBuf,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Clone)]
pub struct FingerprintArgs {
    /// Value to fingerprint
    pub value: String,
}
