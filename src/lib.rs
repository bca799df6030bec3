// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! contributors-txt - CONTRIBUTORS.txt generator
//!
//! Builds a contributors list from `git shortlog`, merging the identities of
//! people who committed under several names or mails.
//!
//! # Features
//!
//! - **Alias Resolution**: Map any number of mails onto one canonical identity
//! - **Commit Aggregation**: Sum commit counts of merged identities
//! - **Teams**: Group maintainers into their own named sections
//! - **Migration**: Rewrite legacy alias files into the name-keyed format
//!
//! # Example
//!
//! ```no_run
//! use contributors_txt::aliases::load_aliases;
//! use contributors_txt::config::Settings;
//! use contributors_txt::contributors::create_content;
//!
//! let settings = Settings::default();
//! let aliases = load_aliases(Some(std::path::Path::new(".contributors_aliases.json"))).unwrap();
//! let shortlog = "3 Jane Doe <jane@example.com>\n1 jdoe <jdoe@old.example.com>";
//!
//! let content = create_content(shortlog, &aliases, ".contributors_aliases.json", &settings.suppression).unwrap();
//! println!("{}", content);
//! ```

// Module declarations
pub mod aliases;
pub mod cli;
pub mod config;
pub mod contributors;
pub mod error;
pub mod git;

// Re-exports for convenience
pub use config::Settings;
pub use error::{ContribError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of contributors-txt.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
