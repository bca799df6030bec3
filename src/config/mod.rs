// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Configuration module for contributors-txt.
//!
//! The tool has no configuration file of its own: the alias file is its only
//! input besides the git history. The values that would otherwise be global
//! constants (suppression lists, the shortlog command, the output file name)
//! live in [`Settings`] so they can be passed explicitly to the pipeline.

pub mod default;
mod schema;

pub use default::DEFAULT_TEAM;
pub use schema::*;
