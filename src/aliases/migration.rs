// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Conversion of alias files to the normalized, name-keyed shape.
//!
//! The output is canonical: names sorted, fields sorted, defaults omitted,
//! four-space indentation, no trailing newline. Normalizing an already normalized file therefore
//! yields the same bytes.

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexSet;

use crate::error::{ConfigError, Result, ResultExt};

use super::loader::decode_aliases;
use super::schema::{to_pretty_json, Alias, AliasEntry};

/// Rewrite alias file content in the normalized shape.
pub fn normalize_aliases(content: &str) -> Result<String> {
    let document = decode_aliases(content)?;
    tracing::debug!(
        "Normalizing {} aliases file",
        if document.is_legacy() { "legacy" } else { "normalized" }
    );

    let mut normalized: BTreeMap<String, AliasEntry> = BTreeMap::new();
    for alias in document.into_aliases() {
        merge_alias(&mut normalized, alias)?;
    }

    let output = to_pretty_json(&normalized).map_err(|e| ConfigError::Parse {
        message: format!("Failed to serialize aliases: {}", e),
    })?;
    Ok(output)
}

/// Normalize the aliases file at `input` and write the result to `output`.
///
/// `input` and `output` may be the same path.
pub fn normalize_file(input: &Path, output: &Path) -> Result<()> {
    tracing::debug!("Normalizing {:?} into {:?}", input, output);

    if !input.exists() {
        return Err(ConfigError::NotFound {
            path: input.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(input)
        .context(format!("Failed to read {}", input.display()))?;
    let normalized = normalize_aliases(&content)?;
    std::fs::write(output, normalized).context(format!("Failed to write {}", output.display()))?;

    Ok(())
}

/// Fold one alias into the map, concatenating the mails of entries that
/// share a name.
fn merge_alias(normalized: &mut BTreeMap<String, AliasEntry>, alias: Alias) -> Result<()> {
    let Some(entry) = normalized.get_mut(&alias.name) else {
        let name = alias.name.clone();
        let mut entry = AliasEntry::from(alias);
        entry.mails = dedup_mails(entry.mails);
        normalized.insert(name, entry);
        return Ok(());
    };

    if entry.authoritative_mail != alias.authoritative_mail {
        return Err(ConfigError::MergeError {
            name: alias.name,
            message: format!(
                "authoritative mails differ: {:?} and {:?}",
                entry.authoritative_mail, alias.authoritative_mail
            ),
        }
        .into());
    }
    if entry.team != alias.team {
        return Err(ConfigError::MergeError {
            name: alias.name,
            message: format!("teams differ: '{}' and '{}'", entry.team, alias.team),
        }
        .into());
    }

    tracing::debug!("Merging duplicate alias entry for '{}'", alias.name);
    let mut mails = std::mem::take(&mut entry.mails);
    mails.extend(alias.mails);
    entry.mails = dedup_mails(mails);
    Ok(())
}

fn dedup_mails(mails: Vec<String>) -> Vec<String> {
    mails
        .into_iter()
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}
