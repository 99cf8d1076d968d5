//! Runtime settings: built-in defaults, optionally overridden by a YAML file,
//! then by command-line flags.
//!
//! ```yaml
//! user_agent: "Mozilla/5.0 (X11; Linux x86_64) Chrome/120"
//! timeout_secs: 20
//! output_dir: ./exports
//! ```

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::fetch::{DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, instrument};

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub user_agent: String,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            output_dir: PathBuf::from("."),
        }
    }
}

/// On-disk config file. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn from_yaml(path: &str, yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    #[instrument(level = "info")]
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_yaml(path, &yaml)?;
        info!(?config, "Loaded configuration");
        Ok(config)
    }
}

impl Settings {
    /// Layer `file` and then the CLI flags over the defaults.
    pub fn resolve(file: FileConfig, cli: &Cli) -> Self {
        let defaults = Settings::default();
        Self {
            user_agent: cli
                .user_agent
                .clone()
                .or(file.user_agent)
                .unwrap_or(defaults.user_agent),
            timeout: cli
                .timeout_secs
                .or(file.timeout_secs)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            output_dir: cli
                .output_dir
                .clone()
                .or(file.output_dir)
                .unwrap_or(defaults.output_dir),
        }
    }

    /// Read the config file named by `--config`, if any, and resolve.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match cli.config.as_deref() {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Ok(Self::resolve(file, cli))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["nepali_news_extract"];
        argv.extend_from_slice(args);
        argv.push("sites");
        Cli::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::resolve(FileConfig::default(), &cli(&[]));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timeout, Duration::from_secs(12));
        assert_eq!(settings.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig::from_yaml(
            "config.yaml",
            "user_agent: test-agent\ntimeout_secs: 30\noutput_dir: /tmp/out\n",
        )
        .unwrap();
        let settings = Settings::resolve(file, &cli(&[]));
        assert_eq!(settings.user_agent, "test-agent");
        assert_eq!(settings.timeout, Duration::from_secs(30));
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let file = FileConfig::from_yaml("config.yaml", "timeout_secs: 30\noutput_dir: /tmp/out\n")
            .unwrap();
        let settings = Settings::resolve(file, &cli(&["--timeout-secs", "5", "-o", "./here"]));
        assert_eq!(settings.timeout, Duration::from_secs(5));
        assert_eq!(settings.output_dir, PathBuf::from("./here"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = FileConfig::from_yaml("config.yaml", "retries: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_disk() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.yaml");
        std::fs::write(&path, "output_dir: exports\n").unwrap();
        let file = FileConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(file.output_dir, Some(PathBuf::from("exports")));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = FileConfig::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
