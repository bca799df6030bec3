// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Contributor list pipeline.
//!
//! Shortlog text flows one way through this module: each line is parsed
//! into a [`Person`] with its aliases resolved, persons sharing a canonical
//! name are merged, and the result is rendered as the contributors document.

mod aggregate;
mod parser;
mod person;
mod render;

pub use aggregate::aggregate;
pub use parser::parse_person;
pub use person::{by_commits, merge_persons, Person};
pub use render::{render, HEADER_TOOL_NAME};

use crate::aliases::AliasTable;
use crate::config::Suppression;
use crate::error::Result;

/// Build the contributors document from raw shortlog output.
pub fn create_content(
    shortlog: &str,
    aliases: &AliasTable,
    aliases_label: &str,
    suppression: &Suppression,
) -> Result<String> {
    let persons = aggregate(shortlog, aliases)?;
    tracing::debug!("Aggregated {} distinct contributors", persons.len());
    Ok(render(&persons, aliases_label, suppression))
}
