use tally_core::fingerprint::md5_hex;

use crate::cli::args::FingerprintArgs;
use crate::cli::commands::exit_codes;

/// Prints the digest an exercise author should distribute as the expected
/// fingerprint for an answer.
pub fn run(args: FingerprintArgs) -> anyhow::Result<i32> {
    println!("{}", md5_hex(&args.value));
    Ok(exit_codes::OK)
}
