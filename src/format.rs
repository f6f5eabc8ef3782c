//! Best-effort formatting pipeline.
//!
//! Pipes source text through a fixed chain of external formatters. Any
//! stage that is missing, fails, or produces non-UTF-8 output is
//! skipped and the previous text flows on; individual tool errors are
//! not distinguished.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::lint::Linter;

/// Fixed tool order: imports first, then layout.
const PIPELINE: &[Linter] = &[Linter::Isort, Linter::Black];

/// Run source text through the formatting chain and return the result.
pub fn format_source(source: &str) -> String {
    let mut text = source.to_string();
    for linter in PIPELINE {
        let Some(cmd) = linter.stdin_command() else {
            continue;
        };
        if let Some(formatted) = pipe_through(cmd, &text) {
            text = formatted;
        }
    }
    text
}

/// Feed `text` to a command's stdin and return its stdout on success.
fn pipe_through(mut cmd: Command, text: &str) -> Option<String> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .ok()?;

    // Dropping stdin after the write closes the pipe so the tool sees EOF.
    {
        let mut stdin = child.stdin.take()?;
        stdin.write_all(text.as_bytes()).ok()?;
    }

    let output = child.wait_with_output().ok()?;
    if !output.status.success() {
        return None;
    }

    String::from_utf8(output.stdout).ok()
}
