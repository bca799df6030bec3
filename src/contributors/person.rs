// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Contributor records.

use std::cmp::Ordering;
use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::aliases::{to_pretty_json, AliasEntry};
use crate::error::{ContribError, MergeConflictError, Result};

/// One contributor after alias resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Number of commits.
    pub commits: u64,

    /// Display name, also the aggregation key.
    pub name: String,

    /// Mail without angle brackets, `None` when hidden or unknown.
    pub mail: Option<String>,

    /// Team label.
    pub team: String,
}

impl Person {
    /// Short description used in merge conflict messages.
    fn describe(&self) -> String {
        format!(
            "[mail: {}, team: '{}', {} commits]",
            self.mail
                .as_deref()
                .map(|mail| format!("<{}>", mail))
                .unwrap_or_else(|| "none".to_string()),
            self.team,
            self.commits
        )
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.mail {
            Some(mail) => write!(f, "{} <{}>", self.name, mail),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Ordering putting the person with the most commits first.
pub fn by_commits(a: &Person, b: &Person) -> Ordering {
    b.commits.cmp(&a.commits)
}

/// Merge two records of the same contributor by summing their commits.
///
/// Both records must agree on name, mail and team. A disagreement means the
/// aliases file maps two identities onto one name inconsistently.
pub fn merge_persons(existing: &Person, incoming: &Person) -> Result<Person> {
    if existing.name != incoming.name
        || existing.mail != incoming.mail
        || existing.team != incoming.team
    {
        return Err(MergeConflictError {
            name: incoming.name.clone(),
            existing: existing.describe(),
            incoming: incoming.describe(),
            suggestion: suggest_alias(existing, incoming),
        }
        .into());
    }

    let commits = existing
        .commits
        .checked_add(incoming.commits)
        .ok_or_else(|| ContribError::CommitCountOverflow {
            name: existing.name.clone(),
        })?;

    Ok(Person {
        commits,
        ..existing.clone()
    })
}

/// An alias entry unifying both records under the existing one, in the
/// normalized file layout.
fn suggest_alias(existing: &Person, incoming: &Person) -> String {
    let mails: IndexSet<String> = [&existing.mail, &incoming.mail]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    let mut suggestion = IndexMap::new();
    suggestion.insert(
        existing.name.clone(),
        AliasEntry {
            authoritative_mail: existing.mail.clone(),
            mails: mails.into_iter().collect(),
            team: existing.team.clone(),
        },
    );

    to_pretty_json(&suggestion).unwrap_or_else(|e| format!("<no suggestion: {}>", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TEAM;

    fn person(commits: u64, name: &str, mail: Option<&str>) -> Person {
        Person {
            commits,
            name: name.to_string(),
            mail: mail.map(str::to_string),
            team: DEFAULT_TEAM.to_string(),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            person(1, "Jane Doe", Some("jane@example.com")).to_string(),
            "Jane Doe <jane@example.com>"
        );
        assert_eq!(person(1, "Jane Doe", None).to_string(), "Jane Doe");
    }

    #[test]
    fn test_by_commits_is_descending() {
        let mut persons = vec![
            person(1, "a", None),
            person(5, "b", None),
            person(3, "c", None),
        ];
        persons.sort_by(by_commits);
        let names: Vec<_> = persons.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_merge_sums_commits() {
        let merged = merge_persons(
            &person(1, "name", Some("a@b.com")),
            &person(2, "name", Some("a@b.com")),
        )
        .unwrap();
        assert_eq!(merged, person(3, "name", Some("a@b.com")));
    }

    fn conflict(err: ContribError) -> MergeConflictError {
        match err {
            ContribError::MergeConflict(conflict) => conflict,
            other => panic!("Expected MergeConflict, got {:?}", other),
        }
    }

    #[test]
    fn test_merge_conflicting_mail() {
        let err = merge_persons(
            &person(1, "name", Some("a@b.com")),
            &person(2, "name", Some("c@d.com")),
        )
        .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'name'"));
        assert!(message.contains("a@b.com"));
        assert!(message.contains("c@d.com"));

        let suggested: IndexMap<String, AliasEntry> =
            serde_json::from_str(&conflict(err).suggestion).unwrap();
        assert_eq!(suggested["name"].mails, vec!["a@b.com", "c@d.com"]);
        assert_eq!(suggested["name"].authoritative_mail.as_deref(), Some("a@b.com"));
    }

    #[test]
    fn test_merge_suggestion_escapes_quotes() {
        let err = merge_persons(
            &person(1, "Jane \"JD\" Doe", Some("jane@example.com")),
            &person(2, "Jane \"JD\" Doe", Some("jd@example.com")),
        )
        .unwrap_err();

        let suggested: IndexMap<String, AliasEntry> =
            serde_json::from_str(&conflict(err).suggestion).unwrap();
        assert!(suggested.contains_key("Jane \"JD\" Doe"));
    }

    #[test]
    fn test_merge_conflicting_team() {
        let mut maintainer = person(1, "name", Some("a@b.com"));
        maintainer.team = "Maintainers".to_string();
        let err = merge_persons(&maintainer, &person(2, "name", Some("a@b.com"))).unwrap_err();
        assert!(err.to_string().contains("Maintainers"));
        assert!(err.to_string().contains(DEFAULT_TEAM));
    }

    #[test]
    fn test_merge_mail_against_no_mail() {
        let err = merge_persons(&person(1, "name", None), &person(2, "name", Some("a@b.com")))
            .unwrap_err();
        let err = conflict(err);
        assert!(err.existing.contains("none"));
        assert!(err.incoming.contains("<a@b.com>"));
    }

    #[test]
    fn test_merge_commit_count_overflow() {
        let err = merge_persons(
            &person(u64::MAX, "a", Some("a@b.com")),
            &person(1, "a", Some("a@b.com")),
        )
        .unwrap_err();
        assert!(matches!(err, ContribError::CommitCountOverflow { ref name } if name == "a"));
    }
}
