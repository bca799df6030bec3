// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Alias file loading and lookup.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ConfigError, Result};

use super::schema::{Alias, AliasDocument, AliasEntry, LegacyAlias};

/// Aliases in file order, indexed by mail.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    aliases: Vec<Alias>,
    by_mail: HashMap<String, usize>,
}

impl AliasTable {
    /// Build a table, rejecting empty mails and mails claimed by two aliases.
    pub fn new(aliases: Vec<Alias>) -> Result<Self> {
        let mut by_mail = HashMap::new();

        for (index, alias) in aliases.iter().enumerate() {
            if alias.mails.is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("{}.mails", alias.name),
                    message: "at least one mail is required".to_string(),
                }
                .into());
            }

            for mail in &alias.mails {
                if mail.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        key: format!("{}.mails", alias.name),
                        message: "mails must not be empty strings".to_string(),
                    }
                    .into());
                }

                if let Some(&previous) = by_mail.get(mail.as_str()) {
                    let previous: &Alias = &aliases[previous];
                    return Err(ConfigError::DuplicateMail {
                        mail: mail.clone(),
                        first: previous.name.clone(),
                        second: alias.name.clone(),
                    }
                    .into());
                }
                by_mail.insert(mail.clone(), index);
            }
        }

        Ok(Self { aliases, by_mail })
    }

    /// The alias owning `mail`, if any.
    pub fn resolve(&self, mail: &str) -> Option<&Alias> {
        self.by_mail.get(mail).map(|&index| &self.aliases[index])
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// Load the alias table from an optional path.
///
/// No path means no aliases. A path that does not exist is an error.
pub fn load_aliases(path: Option<&Path>) -> Result<AliasTable> {
    let Some(path) = path else {
        tracing::debug!("No aliases file given, identities are used as-is");
        return Ok(AliasTable::default());
    };

    tracing::debug!("Loading aliases from: {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
        message: format!("Failed to read {}: {}", path.display(), e),
    })?;

    let table = AliasTable::new(parse_aliases(&content)?)?;
    tracing::debug!("Loaded {} aliases", table.len());
    Ok(table)
}

/// Parse aliases from JSON content, warning about the legacy shape.
pub fn parse_aliases(content: &str) -> Result<Vec<Alias>> {
    let document = decode_aliases(content)?;
    if document.is_legacy() {
        tracing::warn!(
            "The aliases file uses the deprecated list format, \
             run 'contributors-txt-normalize' to convert it"
        );
    }
    Ok(document.into_aliases())
}

/// Decode either alias file shape.
pub fn decode_aliases(content: &str) -> Result<AliasDocument> {
    let value: Value = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
        message: format!("Invalid JSON: {}", e),
    })?;

    let document = match value {
        Value::Array(_) => AliasDocument::Legacy(
            serde_json::from_value::<Vec<LegacyAlias>>(value).map_err(|e| {
                ConfigError::Parse {
                    message: format!("Invalid alias list: {}", e),
                }
            })?,
        ),
        Value::Object(_) => AliasDocument::Normalized(
            serde_json::from_value::<IndexMap<String, AliasEntry>>(value).map_err(|e| {
                ConfigError::Parse {
                    message: format!("Invalid alias mapping: {}", e),
                }
            })?,
        ),
        other => {
            return Err(ConfigError::Parse {
                message: format!(
                    "Expected a list or an object of aliases, got {}",
                    json_kind(&other)
                ),
            }
            .into())
        }
    };

    Ok(document)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_TEAM;
    use crate::error::ContribError;
    use std::fs;
    use tempfile::TempDir;

    const LEGACY: &str = r#"[
        {
            "mails": ["x@old.com", "x@older.com"],
            "authoritative_mail": "x@new.com",
            "name": "Canonical Name"
        },
        {
            "mails": ["bot@users.noreply.github.com"],
            "name": "bot",
            "team": "Robots"
        }
    ]"#;

    const NORMALIZED: &str = r#"{
        "Canonical Name": {
            "authoritative_mail": "x@new.com",
            "mails": ["x@old.com", "x@older.com"],
            "team": "Maintainers"
        },
        "Anonymous": {
            "mails": ["anon@example.com"]
        }
    }"#;

    #[test]
    fn test_parse_legacy_shape() {
        let aliases = parse_aliases(LEGACY).unwrap();
        assert_eq!(aliases.len(), 2);
        assert_eq!(aliases[0].name, "Canonical Name");
        assert_eq!(aliases[0].authoritative_mail.as_deref(), Some("x@new.com"));
        assert_eq!(aliases[0].team, DEFAULT_TEAM);
        assert_eq!(aliases[1].authoritative_mail, None);
        assert_eq!(aliases[1].team, "Robots");
    }

    #[test]
    fn test_parse_normalized_shape_keeps_file_order() {
        let aliases = parse_aliases(NORMALIZED).unwrap();
        let names: Vec<_> = aliases.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Canonical Name", "Anonymous"]);
        assert_eq!(aliases[0].team, "Maintainers");
        assert_eq!(aliases[1].authoritative_mail, None);
        assert_eq!(aliases[1].team, DEFAULT_TEAM);
    }

    #[test]
    fn test_decode_reports_shape() {
        assert!(decode_aliases(LEGACY).unwrap().is_legacy());
        assert!(!decode_aliases(NORMALIZED).unwrap().is_legacy());
    }

    #[test]
    fn test_missing_name_is_config_error() {
        let err = parse_aliases(r#"[{"mails": ["a@b.com"]}]"#).unwrap_err();
        assert!(matches!(err, ContribError::Config(ConfigError::Parse { .. })));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_missing_mails_is_config_error() {
        let err = parse_aliases(r#"{"Jane": {"authoritative_mail": "j@b.com"}}"#).unwrap_err();
        assert!(matches!(err, ContribError::Config(ConfigError::Parse { .. })));
        assert!(err.to_string().contains("mails"));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = parse_aliases("[{").unwrap_err();
        assert!(matches!(err, ContribError::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_scalar_document_is_config_error() {
        let err = parse_aliases("42").unwrap_err();
        assert!(err.to_string().contains("a number"));
    }

    #[test]
    fn test_resolve_by_mail() {
        let table = AliasTable::new(parse_aliases(LEGACY).unwrap()).unwrap();
        let alias = table.resolve("x@older.com").unwrap();
        assert_eq!(alias.name, "Canonical Name");
        assert!(table.resolve("X@OLD.COM").is_none());
        assert!(table.resolve("nobody@example.com").is_none());
    }

    #[test]
    fn test_duplicate_mail_is_rejected() {
        let content = r#"[
            {"mails": ["shared@example.com"], "name": "First"},
            {"mails": ["other@example.com", "shared@example.com"], "name": "Second"}
        ]"#;
        let err = AliasTable::new(parse_aliases(content).unwrap()).unwrap_err();
        match err {
            ContribError::Config(ConfigError::DuplicateMail {
                mail,
                first,
                second,
            }) => {
                assert_eq!(mail, "shared@example.com");
                assert_eq!(first, "First");
                assert_eq!(second, "Second");
            }
            other => panic!("Expected DuplicateMail, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_mail_is_rejected() {
        let err = AliasTable::new(parse_aliases(r#"[{"mails": [""], "name": "Jane"}]"#).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ContribError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_empty_mail_list_is_rejected() {
        let err = AliasTable::new(parse_aliases(r#"{"Jane": {"mails": []}}"#).unwrap())
            .unwrap_err();
        assert!(matches!(
            err,
            ContribError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "Jane.mails"
        ));
    }

    #[test]
    fn test_duplicate_mail_follows_file_order() {
        let content = r#"{
            "Zoe": {"mails": ["shared@example.com"]},
            "Adam": {"mails": ["shared@example.com"]}
        }"#;
        let err = AliasTable::new(parse_aliases(content).unwrap()).unwrap_err();
        match err {
            ContribError::Config(ConfigError::DuplicateMail { first, second, .. }) => {
                assert_eq!(first, "Zoe");
                assert_eq!(second, "Adam");
            }
            other => panic!("Expected DuplicateMail, got {:?}", other),
        }
    }

    #[test]
    fn test_load_without_path_is_empty() {
        let table = load_aliases(None).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let err = load_aliases(Some(&path)).unwrap_err();
        assert!(matches!(
            err,
            ContribError::Config(ConfigError::NotFound { .. })
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".contributors_aliases.json");
        fs::write(&path, NORMALIZED).unwrap();

        let table = load_aliases(Some(&path)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.resolve("anon@example.com").map(|a| a.name.as_str()),
            Some("Anonymous")
        );
    }
}
