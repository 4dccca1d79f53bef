use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): The command completed; for `generate` the report was written
/// - `Error` (2): The command failed (config error, report not writable, git failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command failed.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
