//! Third-party linter definitions.
//!
//! Each linter has two invocation shapes: a check/fix run against a
//! file path, and (for the formatters) a stdin/stdout mode used by the
//! formatting pipeline.

use std::fmt;
use std::path::Path;
use std::process::Command;

use serde::{Deserialize, Serialize};

/// Supported external linting/formatting tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    Ruff,
    Black,
    Isort,
}

impl Linter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Linter::Ruff => "ruff",
            Linter::Black => "black",
            Linter::Isort => "isort",
        }
    }

    /// All supported linters, in canonical order.
    pub fn all() -> &'static [Linter] {
        &[Linter::Ruff, Linter::Black, Linter::Isort]
    }

    /// Look up a linter by its command name.
    pub fn from_name(name: &str) -> Option<Linter> {
        match name {
            "ruff" => Some(Linter::Ruff),
            "black" => Some(Linter::Black),
            "isort" => Some(Linter::Isort),
            _ => None,
        }
    }

    /// Build the check (or fix) invocation for a file.
    pub fn command(&self, file: &Path, auto_fix: bool) -> Command {
        match self {
            Linter::Ruff => {
                let mut cmd = Command::new("ruff");
                cmd.arg("check").arg(file);
                if auto_fix {
                    cmd.arg("--fix");
                }
                cmd
            }
            Linter::Black => {
                let mut cmd = Command::new("black");
                cmd.arg(file);
                if !auto_fix {
                    cmd.args(["--check", "--diff"]);
                }
                cmd
            }
            Linter::Isort => {
                let mut cmd = Command::new("isort");
                cmd.arg(file);
                if !auto_fix {
                    cmd.args(["--check-only", "--diff"]);
                }
                cmd
            }
        }
    }

    /// Build the stdin/stdout invocation, if the tool supports one.
    ///
    /// Only the formatters read from stdin; ruff is check-only here.
    pub fn stdin_command(&self) -> Option<Command> {
        match self {
            Linter::Ruff => None,
            Linter::Black => {
                let mut cmd = Command::new("black");
                cmd.args(["--quiet", "-"]);
                Some(cmd)
            }
            Linter::Isort => {
                let mut cmd = Command::new("isort");
                cmd.arg("-");
                Some(cmd)
            }
        }
    }
}

impl fmt::Display for Linter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
