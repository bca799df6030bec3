// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Settings structures threaded through the pipeline.

use std::collections::HashSet;

use super::default::{
    NO_SHOW_MAILS, NO_SHOW_NAMES, OUTPUT_FILE_NAME, SHORTLOG_ARGS, SHORTLOG_PROGRAM,
};

/// Settings of one run.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Command producing the shortlog.
    pub shortlog: ShortlogCommand,

    /// Identities excluded from the contributors section.
    pub suppression: Suppression,

    /// File name used when no output path is given.
    pub output_file_name: OutputFileName,
}

/// Program and arguments producing the shortlog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortlogCommand {
    /// Program to run.
    pub program: String,

    /// Arguments passed to the program.
    pub args: Vec<String>,
}

impl ShortlogCommand {
    /// Create a command from a program and its arguments.
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
        }
    }

    /// Human readable command line, used in logs and errors.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ShortlogCommand {
    fn default() -> Self {
        Self::new(SHORTLOG_PROGRAM, SHORTLOG_ARGS)
    }
}

/// Mails and names that never get a bullet in the contributors section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suppression {
    /// Suppressed mails, without angle brackets.
    pub mails: HashSet<String>,

    /// Suppressed display names.
    pub names: HashSet<String>,
}

impl Suppression {
    /// A suppression set that hides nobody.
    pub fn none() -> Self {
        Self {
            mails: HashSet::new(),
            names: HashSet::new(),
        }
    }

    /// Whether an identity is hidden.
    pub fn hides(&self, name: &str, mail: Option<&str>) -> bool {
        self.names.contains(name) || mail.is_some_and(|mail| self.mails.contains(mail))
    }
}

impl Default for Suppression {
    fn default() -> Self {
        Self {
            mails: NO_SHOW_MAILS.iter().map(|m| m.to_string()).collect(),
            names: NO_SHOW_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// File name of the generated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFileName(pub String);

impl Default for OutputFileName {
    fn default() -> Self {
        Self(OUTPUT_FILE_NAME.to_string())
    }
}

impl AsRef<std::path::Path> for OutputFileName {
    fn as_ref(&self) -> &std::path::Path {
        std::path::Path::new(&self.0)
    }
}
