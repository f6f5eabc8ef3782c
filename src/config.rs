//! Configuration file support.
//!
//! A config file is optional; everything has a default. Discovery looks
//! for `bloatcheck.yaml` then `.bloatcheck.yaml` in the current
//! directory, mirroring how the CLI flags can point at an explicit file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::lint::Linter;

/// Default config file names to search for.
const DEFAULT_CONFIG_NAMES: &[&str] = &["bloatcheck.yaml", ".bloatcheck.yaml"];

fn default_min_lines() -> usize {
    crate::engine::DEFAULT_MIN_LINES
}

fn default_linters() -> Vec<Linter> {
    vec![Linter::Ruff]
}

/// Tool configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Minimum size, in lines, for a function to be reported.
    #[serde(default = "default_min_lines")]
    pub min_lines: usize,
    /// Linters the `lint` command runs when none are given on the
    /// command line.
    #[serde(default = "default_linters")]
    pub linters: Vec<Linter>,
    /// Glob patterns for paths to exclude from directory scans
    /// (e.g. "**/migrations/**").
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_lines: default_min_lines(),
            linters: default_linters(),
            excluded_paths: Vec::new(),
        }
    }
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config for a run: an explicit path if given, else a
    /// discovered file, else defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config = match explicit {
            Some(path) => Self::parse_file(path)?,
            None => match discover() {
                Some(path) => Self::parse_file(path)?,
                None => Self::default(),
            },
        };
        validate(&config)?;
        Ok(config)
    }

    /// Check if a path matches any excluded_paths pattern.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Discover a config file in the current directory.
pub fn discover() -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Validate a parsed config.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.min_lines == 0 {
        anyhow::bail!("min_lines must be a positive integer");
    }
    for pattern in &config.excluded_paths {
        if globset::Glob::new(pattern).is_err() {
            anyhow::bail!("invalid excluded_paths pattern: {pattern:?}");
        }
    }
    Ok(())
}
