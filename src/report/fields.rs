//! The info field registry.
//!
//! Each static layout property the `info` report can answer is one variant
//! of [`InfoField`], dispatched through a single [`InfoField::value`]
//! method. The closed enum keeps the field set exhaustiveness-checked at
//! compile time; the key table is ordered by construction and verified by
//! test, which is what makes the binary-search lookup valid.

use std::io::{self, Write};

use thiserror::Error;

use crate::repo::Repo;
use crate::report::format::OutputFormat;
use crate::report::quote::c_quote;

/// A static layout property with a stable textual key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    LayoutBare,
    LayoutShallow,
    ObjectFormat,
    ReferencesFormat,
}

impl InfoField {
    /// Every field, in byte-lexicographic key order.
    pub const ALL: [InfoField; 4] = [
        InfoField::LayoutBare,
        InfoField::LayoutShallow,
        InfoField::ObjectFormat,
        InfoField::ReferencesFormat,
    ];

    /// The textual key used on the command line and in output.
    pub fn key(self) -> &'static str {
        match self {
            InfoField::LayoutBare => "layout.bare",
            InfoField::LayoutShallow => "layout.shallow",
            InfoField::ObjectFormat => "object.format",
            InfoField::ReferencesFormat => "references.format",
        }
    }

    /// Exact-key lookup over the ordered field table.
    pub fn lookup(key: &str) -> Option<InfoField> {
        Self::ALL
            .binary_search_by(|field| field.key().cmp(key))
            .ok()
            .map(|index| Self::ALL[index])
    }

    /// Resolve this field against a repository. Accessors are pure string
    /// producers; booleans render as literal `true`/`false`.
    pub fn value(self, repo: &Repo) -> String {
        match self {
            InfoField::LayoutBare => bool_value(repo.is_bare()),
            InfoField::LayoutShallow => bool_value(repo.is_shallow()),
            InfoField::ObjectFormat => repo.object_format(),
            InfoField::ReferencesFormat => repo.references_format(),
        }
    }
}

fn bool_value(flag: bool) -> String {
    if flag { "true" } else { "false" }.to_string()
}

/// A requested key that is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("key '{0}' not found")]
pub struct UnknownKey(pub String);

/// Resolve a batch of requested keys, in the caller's order.
///
/// An unknown key yields an error entry for that key and resolution
/// continues with the remaining keys; keys are neither reordered nor
/// deduplicated.
pub fn resolve<'k>(
    keys: impl IntoIterator<Item = &'k str>,
    repo: &Repo,
) -> Vec<(&'k str, Result<String, UnknownKey>)> {
    keys.into_iter()
        .map(|key| {
            let value = match InfoField::lookup(key) {
                Some(field) => Ok(field.value(repo)),
                None => Err(UnknownKey(key.to_string())),
            };
            (key, value)
        })
        .collect()
}

/// Emit one resolved field in the requested info encoding.
///
/// keyvalue: `<key>=<quoted value>\n` — nul: `<key>\n<raw value>\0`.
pub fn write_value(
    out: &mut impl Write,
    format: OutputFormat,
    key: &str,
    value: &str,
) -> io::Result<()> {
    match format {
        OutputFormat::Keyvalue => writeln!(out, "{}={}", key, c_quote(value)),
        OutputFormat::Nul => write!(out, "{key}\n{value}\0"),
        // The dispatcher rejects table for info before rendering starts.
        OutputFormat::Table => unreachable!("info has no table form"),
    }
}
