use tally_core::grader::Grader;

use crate::cli::args::GradeArgs;
use crate::cli::commands::{exit_codes, resolve_config};

pub fn run(args: GradeArgs) -> anyhow::Result<i32> {
    let cfg = resolve_config(args.config.as_deref(), args.root)?;
    let grader = Grader::new(&cfg);

    let verdict = grader.grade(args.topic, args.task, &args.answer, &args.expected)?;
    println!("{verdict}");

    Ok(if verdict.is_correct() {
        exit_codes::OK
    } else {
        exit_codes::INCORRECT
    })
}
