// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Parsing of `git shortlog --summary --email` lines.

use crate::aliases::AliasTable;
use crate::config::default::NO_MAIL;
use crate::config::DEFAULT_TEAM;
use crate::error::ParseError;

use super::person::Person;

/// Parse one shortlog line into a person, resolving its alias.
///
/// The line is `<count> <name...> <<mail>>`. Names may contain spaces; they
/// are rejoined with single spaces.
pub fn parse_person(line: &str, aliases: &AliasTable) -> Result<Person, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [count, name_tokens @ .., mail_token] = tokens.as_slice() else {
        return Err(ParseError::MissingTokens {
            line: line.to_string(),
        });
    };

    let commits: u64 = count.parse().map_err(|_| ParseError::InvalidCount {
        line: line.to_string(),
        token: count.to_string(),
    })?;

    let raw_mail = mail_token
        .strip_prefix('<')
        .and_then(|mail| mail.strip_suffix('>'))
        .ok_or_else(|| ParseError::InvalidMail {
            line: line.to_string(),
            token: mail_token.to_string(),
        })?;
    let mail = match raw_mail {
        "" | NO_MAIL => None,
        mail => Some(mail.to_string()),
    };
    let name = name_tokens.join(" ");

    let person = match mail.as_deref().and_then(|mail| aliases.resolve(mail)) {
        Some(alias) => {
            tracing::debug!("Found an alias for {:?}: {}", mail, alias.name);
            Person {
                commits,
                name: alias.name.clone(),
                mail: alias.authoritative_mail.clone(),
                team: alias.team.clone(),
            }
        }
        None => Person {
            commits,
            name,
            mail,
            team: DEFAULT_TEAM.to_string(),
        },
    };

    tracing::debug!(
        "Person is aliased to {} {} {:?} ({})",
        person.commits,
        person.name,
        person.mail,
        person.team
    );
    Ok(person)
}
