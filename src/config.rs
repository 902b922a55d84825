//! Configuration for running the qsv executable

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the program name in [`QsvConfig::from_env`]
pub const PROGRAM_ENV_VAR: &str = "QSV_SDK_PROGRAM";

/// Default executable name looked up on PATH
pub const DEFAULT_PROGRAM: &str = "qsv";

/// How the qsv executable is located and launched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QsvConfig {
    /// Program name (searched on PATH) or path to the executable
    pub program: String,
    /// Working directory for the child process (inherits ours if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_dir: Option<PathBuf>,
    /// Extra environment variables for the child process
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub envs: BTreeMap<String, String>,
}

impl Default for QsvConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            current_dir: None,
            envs: BTreeMap::new(),
        }
    }
}

impl QsvConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with `QSV_SDK_PROGRAM` applied when set
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(PROGRAM_ENV_VAR) {
            Ok(program) if !program.trim().is_empty() => config.with_program(program.trim()),
            _ => config,
        }
    }

    /// Set the program name or path
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Set the working directory of the child process
    pub fn with_current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Add an environment variable for the child process
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.program.trim().is_empty() {
            return Err("Program name must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = QsvConfig::default();
        assert_eq!(config.program, "qsv");
        assert!(config.current_dir.is_none());
        assert!(config.envs.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = QsvConfig::new()
            .with_program("/opt/qsv/bin/qsvlite")
            .with_current_dir("/tmp")
            .with_env("QSV_MAX_JOBS", "4");

        assert_eq!(config.program, "/opt/qsv/bin/qsvlite");
        assert_eq!(config.current_dir, Some(PathBuf::from("/tmp")));
        assert_eq!(config.envs.get("QSV_MAX_JOBS").map(String::as_str), Some("4"));
    }

    #[test]
    fn test_validation() {
        let config = QsvConfig::new().with_program("  ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = QsvConfig::new().with_env("QSV_NO_UPDATE", "1");
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"program\":\"qsv\""));
        assert!(!json.contains("currentDir"));

        let parsed: QsvConfig = serde_json::from_str(r#"{"program": "qsvlite"}"#).unwrap();
        assert_eq!(parsed.program, "qsvlite");
        assert!(parsed.envs.is_empty());
    }
}
