// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI module for contributors-txt.
//!
//! This module handles command-line argument parsing, logging setup and
//! dispatch for both binaries.

pub mod args;
mod dispatch;
mod logging;

pub use args::{Cli, NormalizeCli};
pub use dispatch::{run, run_normalize, run_with_settings};
pub use logging::setup_logging;
