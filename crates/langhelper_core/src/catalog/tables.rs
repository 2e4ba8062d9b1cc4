//! Ordered lookup tables: catalog, aliases and secondary-language index.
//!
//! # Responsibility
//! - Validate table shape at construction time.
//! - Offer exact lookups plus ordered iteration for substring scans.
//!
//! # Invariants
//! - Keys are non-empty, normalized and unique within their table.
//! - Insertion order is preserved and is the iteration order.
//! - Tables are never mutated after construction.

use super::{TableError, TableResult};
use crate::model::landmark::{AliasEntry, LandmarkRecord, SecondaryIndexEntry};
use crate::search::normalize::{is_normalized, normalize};
use std::collections::HashMap;

const CATALOG_TABLE: &str = "catalog";
const ALIAS_TABLE: &str = "aliases";
const SECONDARY_TABLE: &str = "secondary_index";

/// Canonical landmark records in significant order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<LandmarkRecord>,
    by_key: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty, unnormalized or duplicate keys.
    pub fn new(records: Vec<LandmarkRecord>) -> TableResult<Self> {
        let mut by_key = HashMap::with_capacity(records.len());
        for (position, record) in records.iter().enumerate() {
            check_key(CATALOG_TABLE, &record.canonical_key)?;
            if by_key
                .insert(record.canonical_key.clone(), position)
                .is_some()
            {
                return Err(TableError::DuplicateKey {
                    table: CATALOG_TABLE,
                    key: record.canonical_key.clone(),
                });
            }
        }

        Ok(Self { records, by_key })
    }

    /// Exact lookup on an already normalized key.
    pub fn lookup_exact(&self, key: &str) -> Option<&LandmarkRecord> {
        self.by_key.get(key).map(|&position| &self.records[position])
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Records in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, LandmarkRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sequential phrase substitutions applied before any lookup.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: Vec<AliasEntry>,
}

impl AliasTable {
    /// Builds the table. Phrases are normalized; empty or repeated phrases
    /// are rejected.
    pub fn new(entries: Vec<AliasEntry>) -> TableResult<Self> {
        let mut normalized = Vec::with_capacity(entries.len());
        for entry in entries {
            let phrase = normalize(&entry.phrase);
            if phrase.is_empty() {
                return Err(TableError::EmptyKey { table: ALIAS_TABLE });
            }
            check_key(ALIAS_TABLE, &entry.canonical_key)?;
            if normalized
                .iter()
                .any(|existing: &AliasEntry| existing.phrase == phrase)
            {
                return Err(TableError::DuplicateKey {
                    table: ALIAS_TABLE,
                    key: phrase,
                });
            }
            normalized.push(AliasEntry {
                phrase,
                canonical_key: entry.canonical_key,
            });
        }

        Ok(Self {
            entries: normalized,
        })
    }

    /// Rewrites every alias occurrence to its canonical key.
    ///
    /// Aliases are applied in table order against the progressively rewritten
    /// text, so a later alias sees the output of earlier ones. Matching is a
    /// plain substring test and may hit inside longer words.
    pub fn apply_aliases(&self, text: &str) -> String {
        let mut rewritten = text.to_string();
        for entry in &self.entries {
            if rewritten.contains(entry.phrase.as_str()) {
                rewritten = rewritten.replace(entry.phrase.as_str(), entry.canonical_key.as_str());
            }
        }
        rewritten
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AliasEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Secondary-language phrasing to canonical key.
#[derive(Debug, Clone, Default)]
pub struct SecondaryIndex {
    entries: Vec<SecondaryIndexEntry>,
    by_key: HashMap<String, usize>,
}

impl SecondaryIndex {
    pub fn new(entries: Vec<SecondaryIndexEntry>) -> TableResult<Self> {
        let mut by_key = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            check_key(SECONDARY_TABLE, &entry.key)?;
            check_key(SECONDARY_TABLE, &entry.canonical_key)?;
            if by_key.insert(entry.key.clone(), position).is_some() {
                return Err(TableError::DuplicateKey {
                    table: SECONDARY_TABLE,
                    key: entry.key.clone(),
                });
            }
        }

        Ok(Self { entries, by_key })
    }

    /// Exact lookup; returns the canonical key the entry points at.
    ///
    /// The returned key is not guaranteed to exist in the catalog.
    pub fn lookup_secondary(&self, key: &str) -> Option<&str> {
        self.by_key
            .get(key)
            .map(|&position| self.entries[position].canonical_key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SecondaryIndexEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn check_key(table: &'static str, key: &str) -> TableResult<()> {
    if key.trim().is_empty() {
        return Err(TableError::EmptyKey { table });
    }
    if !is_normalized(key) {
        return Err(TableError::NotNormalized {
            table,
            key: key.to_string(),
        });
    }
    Ok(())
}
