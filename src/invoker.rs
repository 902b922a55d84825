//! Synchronous runner for the qsv executable
//!
//! One call spawns one child process, blocks until it exits and returns the
//! captured standard output. There are no timeouts or retries at this layer.

use std::path::PathBuf;
use std::process::Command;

use tracing::{debug, warn};

use crate::config::QsvConfig;
use crate::error::{QsvError, QsvResult};

/// Locates and runs the qsv executable
#[derive(Debug, Clone, Default)]
pub struct Invoker {
    config: QsvConfig,
}

impl Invoker {
    /// Create an invoker from a configuration
    pub fn new(config: QsvConfig) -> Self {
        Self { config }
    }

    /// Create an invoker honouring `QSV_SDK_PROGRAM`
    pub fn from_env() -> Self {
        Self::new(QsvConfig::from_env())
    }

    /// Get the configuration
    pub fn config(&self) -> &QsvConfig {
        &self.config
    }

    /// Resolve the executable on the search path
    pub fn locate(&self) -> QsvResult<PathBuf> {
        let not_found = || QsvError::ExecutableNotFound {
            program: self.config.program.clone(),
        };
        self.config.validate().map_err(|_| not_found())?;
        which::which(&self.config.program).map_err(|_| not_found())
    }

    /// Run `program [subcommand] args...` and return its stdout
    ///
    /// An empty `subcommand` inserts no token, which is how the tool's own
    /// top-level flags (`--version`, `--list`) are reached.
    pub fn invoke(&self, subcommand: &str, args: &[String]) -> QsvResult<String> {
        let executable = self.locate()?;

        let mut argv: Vec<&str> = Vec::with_capacity(args.len() + 1);
        if !subcommand.is_empty() {
            argv.push(subcommand);
        }
        argv.extend(args.iter().map(String::as_str));

        let rendered = render_command_line(&self.config.program, &argv);
        debug!(executable = %executable.display(), command = %rendered, "Running qsv");

        let mut command = Command::new(&executable);
        command.args(&argv).envs(&self.config.envs);
        if let Some(dir) = &self.config.current_dir {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| QsvError::Spawn {
            program: self.config.program.clone(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "qsv exited"
        );

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            warn!(command = %rendered, status = ?output.status.code(), "qsv command failed");
            return Err(QsvError::ExternalCommandFailed {
                command: rendered,
                status: output.status.code(),
                stderr,
            });
        }

        Ok(stdout)
    }
}

/// Render an argument vector for diagnostics, quoting tokens with spaces
fn render_command_line(program: &str, argv: &[&str]) -> String {
    std::iter::once(program)
        .chain(argv.iter().copied())
        .map(|token| {
            if token.is_empty() || token.chars().any(char::is_whitespace) {
                format!("'{}'", token.replace('\'', "'\\''"))
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_command_line() {
        let rendered = render_command_line("qsv", &["search", "--select", "a b", "data.csv"]);
        assert_eq!(rendered, "qsv search --select 'a b' data.csv");

        let rendered = render_command_line("qsv", &["replace", "", "x"]);
        assert_eq!(rendered, "qsv replace '' x");
    }

    #[test]
    fn test_missing_executable() {
        let invoker =
            Invoker::new(QsvConfig::new().with_program("qsv-sdk-test-no-such-binary-8d1f"));
        let err = invoker.invoke("count", &[]).unwrap_err();
        assert!(matches!(
            err,
            QsvError::ExecutableNotFound { ref program } if program == "qsv-sdk-test-no-such-binary-8d1f"
        ));
    }

    #[test]
    fn test_empty_program_is_not_found() {
        let invoker = Invoker::new(QsvConfig::new().with_program(""));
        assert!(matches!(
            invoker.locate(),
            Err(QsvError::ExecutableNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_subcommand_and_args_are_passed_in_order() {
        let invoker = Invoker::new(QsvConfig::new().with_program("echo"));
        let out = invoker
            .invoke("stats", &["--round".to_string(), "6".to_string()])
            .unwrap();
        assert_eq!(out, "stats --round 6\n");

        let out = invoker.invoke("", &["--version".to_string()]).unwrap();
        assert_eq!(out, "--version\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let invoker = Invoker::new(QsvConfig::new().with_program("sh"));
        let err = invoker
            .invoke("-c", &["echo 'bad selector' >&2; exit 3".to_string()])
            .unwrap_err();
        assert_eq!(err.exit_status(), Some(3));
        assert_eq!(err.stderr().map(str::trim), Some("bad selector"));
    }
}
