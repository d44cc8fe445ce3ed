use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): the command ran and found nothing wrong
/// - `Failure` (1): the command ran but reported findings (structural errors,
///   failed or invalid translations)
/// - `Error` (2): the command could not run (unreadable input, bad config)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// `Failure` when `has_findings`, `Success` otherwise.
    pub fn from_findings(has_findings: bool) -> Self {
        if has_findings {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
