use crate::model::Verdict;

/// Lowercase hex MD5 digest of `s`.
pub fn md5_hex(s: &str) -> String {
    hex::encode(md5::compute(s.as_bytes()).0)
}

/// Grades a submitted answer against the expected fingerprint.
///
/// Exercises ship the digest of the canonical answer rather than the answer
/// itself, so distributing the expected value does not leak the solution.
/// The submission is hashed as the exact string given; callers normalize
/// formatting before grading if the exercise calls for it.
pub fn check(submitted: &str, expected_fingerprint: &str) -> Verdict {
    if md5_hex(submitted) == expected_fingerprint {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
