// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for contributors-txt.
//!
//! Every failure of a run maps to one of the categories below. None of them
//! is retried: a malformed alias file, an unexpected shortlog line or an
//! inconsistent merge all abort the run with a diagnostic.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for contributors-txt operations.
#[derive(Error, Debug)]
pub enum ContribError {
    // Alias configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Shortlog line errors
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    // Two records collapsed onto one name but disagree
    #[error("Merge conflict: {0}")]
    MergeConflict(#[from] MergeConflictError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Summed commit count does not fit
    #[error("Commit count of '{name}' overflows")]
    CommitCountOverflow { name: String },

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Alias configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Aliases file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse aliases: {message}")]
    Parse { message: String },

    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("Mail '{mail}' is used by both '{first}' and '{second}'")]
    DuplicateMail {
        mail: String,
        first: String,
        second: String,
    },

    #[error("Cannot merge aliases for '{name}': {message}")]
    MergeError { name: String, message: String },
}

/// Errors for a shortlog line that does not have the expected shape.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected '<count> <name> <mail>', got '{line}'")]
    MissingTokens { line: String },

    #[error("invalid commit count '{token}' in '{line}'")]
    InvalidCount { line: String, token: String },

    #[error("mail '{token}' is not enclosed in angle brackets in '{line}'")]
    InvalidMail { line: String, token: String },
}

/// Two shortlog records resolved to the same name with different mail or team.
///
/// The message carries an alias entry that would unify both records, since
/// fixing the aliases file is the only way out of this error.
#[derive(Error, Debug)]
#[error(
    "'{name}' resolves to conflicting records {existing} and {incoming}.\n\
     Add or fix an alias in the aliases file, for example:\n{suggestion}"
)]
pub struct MergeConflictError {
    pub name: String,
    pub existing: String,
    pub incoming: String,
    pub suggestion: String,
}

/// Git-related errors.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    #[error("Output of '{command}' is not valid UTF-8: {message}")]
    InvalidOutput { command: String, message: String },
}

/// Result type alias for contributors-txt operations.
pub type Result<T> = std::result::Result<T, ContribError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ContribError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}
