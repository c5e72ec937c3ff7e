use std::collections::BTreeMap;

use tally_core::model::AttemptRecord;
use tally_core::storage::ResultStore;

use crate::cli::args::ReportArgs;
use crate::cli::commands::{exit_codes, resolve_config};

pub fn run(args: ReportArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(args.config.as_deref(), args.root)?;
    let store = ResultStore::new(cfg.db_path());

    let mut records = store.all_records()?;
    if let Some(topic) = args.topic {
        records.retain(|r| r.topic_id == topic);
    }
    if let Some(task) = args.task {
        records.retain(|r| r.task_id == task);
    }

    match args.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&records)?),
        "text" => print_text(&records),
        other => anyhow::bail!("unknown format: {other} (expected text or json)"),
    }
    Ok(exit_codes::OK)
}

fn print_text(records: &[AttemptRecord]) {
    if records.is_empty() {
        println!("No attempts recorded.");
        return;
    }

    // A pair counts as solved once any of its attempts is correct.
    let mut pairs: BTreeMap<(u32, u32), bool> = BTreeMap::new();
    for r in records {
        let solved = pairs.entry((r.topic_id, r.task_id)).or_insert(false);
        *solved = *solved || r.outcome.is_correct();
        println!(
            "{} topic {:>3}  task {:>3}  {:<9}  {}",
            r.outcome.sigil(),
            r.topic_id,
            r.task_id,
            r.outcome.to_string(),
            r.timestamp
        );
    }

    let solved = pairs.values().filter(|s| **s).count();
    println!(
        "\nSummary: {} attempts, {} solved, {} open",
        records.len(),
        solved,
        pairs.len() - solved
    );
}
