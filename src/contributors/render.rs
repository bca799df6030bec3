// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rendering of the contributors document.

use indexmap::IndexMap;

use crate::config::{Suppression, DEFAULT_TEAM};

use super::person::{by_commits, Person};

/// Tool name written in the generated header.
pub const HEADER_TOOL_NAME: &str = "contributors-txt";

/// Render aggregated persons as the contributors document.
///
/// Named teams come first, in the order their best contributor appears,
/// followed by the default "Contributors" section. Suppressed identities are
/// left out of every section.
pub fn render(
    persons: &IndexMap<String, Person>,
    aliases_label: &str,
    suppression: &Suppression,
) -> String {
    let mut sorted: Vec<&Person> = persons
        .values()
        .filter(|person| {
            let hidden = suppression.hides(&person.name, person.mail.as_deref());
            if hidden {
                tracing::debug!("Not showing {}", person);
            }
            !hidden
        })
        .collect();
    // Stable, so equal counts keep first-appearance order
    sorted.sort_by(|a, b| by_commits(a, b));

    let mut teams: IndexMap<&str, Vec<&Person>> = IndexMap::new();
    for person in sorted.iter().filter(|p| p.team != DEFAULT_TEAM) {
        teams.entry(person.team.as_str()).or_default().push(person);
    }

    let mut output = header(aliases_label);

    for (team, members) in &teams {
        tracing::debug!("Rendering team '{}' with {} members", team, members.len());
        push_section(&mut output, team, members.iter().copied());
        output.push_str("\n\n");
    }

    let contributors = sorted
        .iter()
        .copied()
        .filter(|person| person.team == DEFAULT_TEAM);
    push_section(&mut output, DEFAULT_TEAM, contributors);

    output
}

fn header(aliases_label: &str) -> String {
    format!(
        "# This file is autogenerated by '{}',\n\
         # please do not modify manually\n\
         # Aliases are resolved using '{}'\n\n",
        HEADER_TOOL_NAME, aliases_label
    )
}

fn push_section<'a>(output: &mut String, title: &str, members: impl Iterator<Item = &'a Person>) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.chars().count()));
    output.push('\n');
    for person in members {
        output.push_str(&format!("- {}\n", person));
    }
}
