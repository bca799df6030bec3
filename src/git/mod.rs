// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git integration module.
//!
//! Runs the shortlog command and locates the working tree the generated
//! file belongs to.

pub mod commands;
mod repo;

pub use commands::run_shortlog;
pub use repo::{default_output_path, project_root};
