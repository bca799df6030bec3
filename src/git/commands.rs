// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Shortlog command execution.

use std::path::Path;
use std::process::Command;

use crate::config::ShortlogCommand;
use crate::error::{ContribError, GitError, Result};

/// Run the shortlog command and return its standard output.
///
/// A non-zero exit status is only logged: whatever was printed is still a
/// valid, possibly empty, shortlog. Failing to start the command is an error.
pub fn run_shortlog(command: &ShortlogCommand, dir: Option<&Path>) -> Result<String> {
    tracing::debug!("Running {}", command.display());

    let mut cmd = Command::new(&command.program);
    cmd.args(&command.args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| {
        ContribError::Git(GitError::CommandFailed {
            command: command.display(),
            message: e.to_string(),
        })
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::warn!(
            "'{}' exited with {}: {}",
            command.display(),
            output.status,
            stderr.trim()
        );
    }

    String::from_utf8(output.stdout).map_err(|e| {
        ContribError::Git(GitError::InvalidOutput {
            command: command.display(),
            message: e.to_string(),
        })
    })
}
