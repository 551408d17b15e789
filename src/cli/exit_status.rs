use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): every file was extracted
/// - `Failure` (1): the run finished but some file failed to parse or extract
/// - `Error` (2): internal error (config error, unwritable output, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn from_failures(failed_files: usize) -> Self {
        if failed_files == 0 {
            Self::Success
        } else {
            Self::Failure
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
