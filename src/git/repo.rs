// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Repository discovery.

use git2::Repository;
use std::path::{Path, PathBuf};

/// Root of the working tree containing `start`, if any.
pub fn project_root(start: &Path) -> Option<PathBuf> {
    let repo = match Repository::discover(start) {
        Ok(repo) => repo,
        Err(e) => {
            tracing::debug!("No repository found from {:?}: {}", start, e.message());
            return None;
        }
    };

    // Bare repositories have no working tree to write into
    repo.workdir().map(Path::to_path_buf)
}

/// Where the contributors file goes when no output path is given: the
/// root of the current working tree, or the current directory outside one.
pub fn default_output_path(file_name: impl AsRef<Path>) -> PathBuf {
    let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = project_root(&current_dir).unwrap_or(current_dir);
    root.join(file_name)
}
