//! JSON table documents.
//!
//! Replacement tables can be shipped as one JSON document:
//!
//! ```json
//! {
//!   "landmarks": [{"canonical_key": "...", "display_name": "...", "description": "...",
//!                  "secondary_name": "...", "fact": null}],
//!   "aliases": [{"phrase": "...", "canonical_key": "..."}],
//!   "secondary_index": [{"key": "...", "canonical_key": "..."}]
//! }
//! ```
//!
//! Arrays keep their order, which is the resolver's tie-break order.

use super::{
    AliasTable, Catalog, IntegrityIssue, LandmarkTables, SecondaryIndex, TableError, TableResult,
};
use crate::model::landmark::{AliasEntry, LandmarkRecord, SecondaryIndexEntry};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serialized form of [`LandmarkTables`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablesDocument {
    pub landmarks: Vec<LandmarkRecord>,
    #[serde(default)]
    pub aliases: Vec<AliasEntry>,
    #[serde(default)]
    pub secondary_index: Vec<SecondaryIndexEntry>,
}

impl TablesDocument {
    /// Validates each table and bundles them.
    pub fn into_tables(self) -> TableResult<LandmarkTables> {
        Ok(LandmarkTables::new(
            Catalog::new(self.landmarks)?,
            AliasTable::new(self.aliases)?,
            SecondaryIndex::new(self.secondary_index)?,
        ))
    }
}

impl From<&LandmarkTables> for TablesDocument {
    fn from(tables: &LandmarkTables) -> Self {
        Self {
            landmarks: tables.catalog().iter().cloned().collect(),
            aliases: tables.aliases().iter().cloned().collect(),
            secondary_index: tables.secondary().iter().cloned().collect(),
        }
    }
}

impl LandmarkTables {
    /// Parses and validates a JSON tables document.
    ///
    /// Dangling references are accepted and logged; the resolver skips them.
    pub fn from_json_str(json: &str) -> TableResult<Self> {
        let document: TablesDocument = serde_json::from_str(json)?;
        let tables = document.into_tables()?;
        log_integrity(&tables.integrity_issues());
        Ok(tables)
    }

    /// Reads a JSON tables document from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> TableResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tables = Self::from_json_str(&json)?;
        info!(
            "event=tables_load module=catalog status=ok source=file landmarks={} aliases={} secondary={}",
            tables.catalog().len(),
            tables.aliases().len(),
            tables.secondary().len()
        );
        Ok(tables)
    }

    /// Serializes the tables back into a JSON document.
    pub fn to_json_string(&self) -> TableResult<String> {
        Ok(serde_json::to_string_pretty(&TablesDocument::from(self))?)
    }
}

fn log_integrity(issues: &[IntegrityIssue]) {
    for issue in issues {
        warn!("event=tables_integrity module=catalog status=warn issue=\"{issue}\"");
    }
}
