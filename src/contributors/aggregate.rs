// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Folding of shortlog lines into one record per contributor.

use indexmap::map::Entry;
use indexmap::IndexMap;

use crate::aliases::AliasTable;
use crate::error::Result;

use super::parser::parse_person;
use super::person::{merge_persons, Person};

/// Parse every non-blank shortlog line and merge persons by canonical name.
///
/// The map keeps the order in which names first appear, which is the order
/// the renderer falls back to between equal commit counts.
pub fn aggregate(shortlog: &str, aliases: &AliasTable) -> Result<IndexMap<String, Person>> {
    let mut persons: IndexMap<String, Person> = IndexMap::new();

    for line in shortlog.lines() {
        if line.trim().is_empty() {
            // Empty line in git output
            continue;
        }
        tracing::debug!("Handling {}", line);

        let person = parse_person(line, aliases)?;
        match persons.entry(person.name.clone()) {
            Entry::Occupied(mut entry) => {
                let merged = merge_persons(entry.get(), &person)?;
                entry.insert(merged);
            }
            Entry::Vacant(entry) => {
                entry.insert(person);
            }
        }
    }

    Ok(persons)
}
