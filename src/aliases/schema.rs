// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Alias file schema definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::DEFAULT_TEAM;

/// A resolved alias, independent of the file shape it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Mails considered to belong to this identity.
    pub mails: Vec<String>,

    /// Mail shown for this identity, `None` to show no mail.
    pub authoritative_mail: Option<String>,

    /// Canonical display name.
    pub name: String,

    /// Team label, [`DEFAULT_TEAM`] when the alias has no team.
    pub team: String,
}

/// One element of the legacy list shape.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyAlias {
    pub mails: Vec<String>,

    #[serde(default)]
    pub authoritative_mail: Option<String>,

    pub name: String,

    #[serde(default = "default_team")]
    pub team: String,
}

/// One value of the normalized shape, keyed by canonical name.
///
/// Field order is the serialization order, kept alphabetical so the
/// migration output reads like a sorted-keys dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authoritative_mail: Option<String>,

    pub mails: Vec<String>,

    #[serde(default = "default_team", skip_serializing_if = "is_default_team")]
    pub team: String,
}

/// A decoded alias file.
#[derive(Debug, Clone)]
pub enum AliasDocument {
    /// `[{"mails": [...], "name": ...}, ...]`
    Legacy(Vec<LegacyAlias>),

    /// `{"name": {"mails": [...]}, ...}`, in file order.
    Normalized(IndexMap<String, AliasEntry>),
}

impl AliasDocument {
    /// Whether the document uses the deprecated list shape.
    pub fn is_legacy(&self) -> bool {
        matches!(self, AliasDocument::Legacy(_))
    }

    /// Flatten the document into aliases, in file order.
    pub fn into_aliases(self) -> Vec<Alias> {
        match self {
            AliasDocument::Legacy(entries) => entries
                .into_iter()
                .map(|entry| Alias {
                    mails: entry.mails,
                    authoritative_mail: entry.authoritative_mail,
                    name: entry.name,
                    team: entry.team,
                })
                .collect(),
            AliasDocument::Normalized(entries) => entries
                .into_iter()
                .map(|(name, entry)| Alias {
                    mails: entry.mails,
                    authoritative_mail: entry.authoritative_mail,
                    name,
                    team: entry.team,
                })
                .collect(),
        }
    }
}

impl From<Alias> for AliasEntry {
    fn from(alias: Alias) -> Self {
        Self {
            authoritative_mail: alias.authoritative_mail,
            mails: alias.mails,
            team: alias.team,
        }
    }
}

/// Serialize with four-space indentation, the layout of normalized alias files.
pub fn to_pretty_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(serde::ser::Error::custom)
}

fn default_team() -> String {
    DEFAULT_TEAM.to_string()
}

fn is_default_team(team: &str) -> bool {
    team == DEFAULT_TEAM
}
