//! Process and privilege helpers.
//!
//! External commands are considered "world-touching" and must go through the HAL so we can
//! test workflows without spawning real processes.

use crate::HalResult;

/// Process execution trait (external command runner).
pub trait ProcessOps {
    /// Whether the current process already runs with an effective UID of 0.
    fn is_root(&self) -> bool;

    /// Run `program` with the terminal attached (stdin/stdout/stderr inherited).
    ///
    /// Only the exit status is inspected; a non-zero status is
    /// `HalError::CommandFailed`.
    fn interactive_status(&self, program: &str, args: &[&str]) -> HalResult<()>;
}
