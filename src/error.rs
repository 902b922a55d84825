//! Error types for qsv invocation and statistics ingestion
//!
//! Every failure is surfaced to the immediate caller. Nothing in this crate
//! retries, logs-and-continues or returns partial results.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running qsv or reading its output
#[derive(Error, Debug)]
pub enum QsvError {
    /// The executable could not be found on the search path
    #[error("Executable '{program}' not found on PATH")]
    ExecutableNotFound { program: String },

    /// The executable was found but could not be started
    #[error("Failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited with a non-zero status
    #[error("Command `{command}` failed with {}: {}", describe_status(.status), .stderr.trim())]
    ExternalCommandFailed {
        command: String,
        status: Option<i32>,
        stderr: String,
    },

    /// Expected statistics file does not exist
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// A JSONL line could not be decoded into a statistics record
    #[error("Invalid JSON on line {line} of {path}: {message}")]
    MalformedStatsLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// IO error with path context
    #[error("IO error with {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for qsv operations
pub type QsvResult<T> = Result<T, QsvError>;

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl QsvError {
    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Exit status of a failed external command
    pub fn exit_status(&self) -> Option<i32> {
        match self {
            QsvError::ExternalCommandFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Captured stderr of a failed external command
    pub fn stderr(&self) -> Option<&str> {
        match self {
            QsvError::ExternalCommandFailed { stderr, .. } => Some(stderr),
            _ => None,
        }
    }

    /// 1-based line number of a malformed statistics line
    pub fn line_number(&self) -> Option<usize> {
        match self {
            QsvError::MalformedStatsLine { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Get a user-friendly error message for CLI output
    pub fn user_message(&self) -> String {
        match self {
            QsvError::ExecutableNotFound { program } => {
                format!(
                    "'{program}' is not installed or not on PATH.\n\nHint: Install qsv or set QSV_SDK_PROGRAM to its location."
                )
            }
            QsvError::ExternalCommandFailed { stderr, .. } if stderr.trim().is_empty() => {
                format!("{self}\n\nHint: Re-run the command by hand to see its full output.")
            }
            QsvError::FileNotFound(path) => {
                format!(
                    "File not found: {}\n\nHint: Run `qsv stats --stats-jsonl` on the data file first.",
                    path.display()
                )
            }
            QsvError::MalformedStatsLine { path, line, .. } => {
                format!(
                    "{self}\n\nHint: Regenerate {} or inspect line {line}.",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = QsvError::ExecutableNotFound {
            program: "qsv".to_string(),
        };
        assert!(err.to_string().contains("qsv"));

        let err = QsvError::ExternalCommandFailed {
            command: "qsv stats data.csv".to_string(),
            status: Some(2),
            stderr: "no such file\n".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("qsv stats data.csv"));
        assert!(display.contains("exit code 2"));
        assert!(display.contains("no such file"));
    }

    #[test]
    fn test_accessors() {
        let err = QsvError::ExternalCommandFailed {
            command: "qsv count".to_string(),
            status: Some(1),
            stderr: "boom".to_string(),
        };
        assert_eq!(err.exit_status(), Some(1));
        assert_eq!(err.stderr(), Some("boom"));
        assert_eq!(err.line_number(), None);

        let err = QsvError::MalformedStatsLine {
            path: PathBuf::from("a.stats.csv.data.jsonl"),
            line: 2,
            message: "expected value".to_string(),
        };
        assert_eq!(err.line_number(), Some(2));
        assert_eq!(err.exit_status(), None);
    }

    #[test]
    fn test_signal_status() {
        let err = QsvError::ExternalCommandFailed {
            command: "qsv sort".to_string(),
            status: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
        assert!(err.user_message().contains("Hint:"));
    }

    #[test]
    fn test_user_message() {
        let err = QsvError::FileNotFound(PathBuf::from("/data/sales.stats.csv.data.jsonl"));
        let msg = err.user_message();
        assert!(msg.contains("/data/sales.stats.csv.data.jsonl"));
        assert!(msg.contains("Hint:"));

        let err = QsvError::ExecutableNotFound {
            program: "qsv".to_string(),
        };
        assert!(err.user_message().contains("QSV_SDK_PROGRAM"));
    }
}
