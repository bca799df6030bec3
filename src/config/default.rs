// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

/// Team label of contributors without a team, also the heading of their section.
pub const DEFAULT_TEAM: &str = "Contributors";

/// Placeholder mail git uses for authors without one.
pub const NO_MAIL: &str = "none@none";

/// Name of the generated file at the root of the repository.
pub const OUTPUT_FILE_NAME: &str = "CONTRIBUTORS.txt";

/// Program used to produce the shortlog.
pub const SHORTLOG_PROGRAM: &str = "git";

/// Shortlog arguments. `HEAD` is explicit because without a terminal on
/// stdin `git shortlog` reads the log to summarize from stdin.
pub const SHORTLOG_ARGS: &[&str] = &["shortlog", "--summary", "--numbered", "--email", "HEAD"];

/// Mails never listed, whatever their commit count.
pub const NO_SHOW_MAILS: &[&str] = &["bot@noreply.github.com"];

/// Names never listed, whatever their commit count.
pub const NO_SHOW_NAMES: &[&str] = &["root"];
