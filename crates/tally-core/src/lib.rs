pub mod artifacts;
pub mod config;
pub mod errors;
pub mod fingerprint;
pub mod grader;
pub mod model;
pub mod storage;
pub mod vcs;
