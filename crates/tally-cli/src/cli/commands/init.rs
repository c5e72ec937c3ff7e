use tally_core::config;
use tally_core::storage::ResultStore;

use crate::cli::args::InitArgs;
use crate::cli::commands::exit_codes;

pub fn run(args: InitArgs) -> anyhow::Result<i32> {
    if args.config.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    config::write_sample_config(&args.config)?;

    // Creating the store up front surfaces permission problems now rather
    // than on the first grade.
    let cfg = config::load_config(&args.config)?;
    let store = ResultStore::new(cfg.db_path());
    store.ensure_initialized()?;

    println!("Wrote {}", args.config.display());
    println!("Created result store at {}", store.path().display());
    Ok(exit_codes::OK)
}
