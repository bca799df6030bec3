// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Alias configuration.
//!
//! An alias unifies several mails under one canonical name, mail and team.
//! Two file shapes exist: the legacy list of alias objects and the
//! normalized object keyed by canonical name. Both are decoded here and
//! nothing past this module knows which one was used.

mod loader;
pub mod migration;
mod schema;

pub use loader::{decode_aliases, load_aliases, parse_aliases, AliasTable};
pub use migration::{normalize_aliases, normalize_file};
pub use schema::{to_pretty_json, Alias, AliasDocument, AliasEntry, LegacyAlias};
