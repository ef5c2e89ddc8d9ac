//! Exit codes for the soulzip CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing and are a stable contract for automation:
//! - 0: success (pack/unpack completed; validate found both digests intact)
//! - 1: validate found at least one digest mismatch
//! - 2: usage error (emitted by clap)
//! - 10: operational failure (unreadable input, corrupt seed, write error)

/// Exit codes for soulzip operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Operation completed; for validate, both digests matched.
    Success = 0,

    /// Validate completed but at least one digest did not match.
    IntegrityMismatch = 1,

    /// Operation failed outright.
    Failure = 10,
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status as u8)
    }
}
