//! Static landmark tables consumed by the resolver.
//!
//! # Responsibility
//! - Bundle catalog, alias table and secondary-language index into one
//!   immutable value that callers build once and pass by reference.
//! - Report data-integrity gaps (dangling references) without failing.
//!
//! # Invariants
//! - A built `LandmarkTables` is never mutated.
//! - Built-in tables carry no integrity issues.
//!
//! # See also
//! - crate::search::resolver

use log::info;
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod builtin;
pub mod loader;
pub mod tables;

pub use tables::{AliasTable, Catalog, SecondaryIndex};

pub type TableResult<T> = Result<T, TableError>;

static BUILTIN_TABLES: Lazy<LandmarkTables> = Lazy::new(LandmarkTables::builtin);

/// Returns the process-wide built-in tables, built on first use.
pub fn builtin_tables() -> &'static LandmarkTables {
    &BUILTIN_TABLES
}

/// Table construction and loading errors.
#[derive(Debug)]
pub enum TableError {
    EmptyKey {
        table: &'static str,
    },
    NotNormalized {
        table: &'static str,
        key: String,
    },
    DuplicateKey {
        table: &'static str,
        key: String,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Json(serde_json::Error),
}

impl Display for TableError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyKey { table } => write!(f, "{table} contains an empty key"),
            Self::NotNormalized { table, key } => {
                write!(f, "{table} key `{key}` must be lowercase and trimmed")
            }
            Self::DuplicateKey { table, key } => write!(f, "{table} key `{key}` is duplicated"),
            Self::Io { path, source } => {
                write!(f, "failed to read tables from `{}`: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid tables document: {err}"),
        }
    }
}

impl Error for TableError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::EmptyKey { .. } | Self::NotNormalized { .. } | Self::DuplicateKey { .. } => None,
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Reference from an alias or secondary entry to a missing catalog key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    DanglingAlias {
        phrase: String,
        canonical_key: String,
    },
    DanglingSecondary {
        key: String,
        canonical_key: String,
    },
}

impl Display for IntegrityIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DanglingAlias {
                phrase,
                canonical_key,
            } => write!(f, "alias `{phrase}` points at missing key `{canonical_key}`"),
            Self::DanglingSecondary { key, canonical_key } => write!(
                f,
                "secondary key `{key}` points at missing key `{canonical_key}`"
            ),
        }
    }
}

/// The three lookup tables, built once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct LandmarkTables {
    catalog: Catalog,
    aliases: AliasTable,
    secondary: SecondaryIndex,
}

impl LandmarkTables {
    /// Bundles already-validated tables.
    ///
    /// Cross-table references are not checked here; see
    /// [`LandmarkTables::integrity_issues`].
    pub fn new(catalog: Catalog, aliases: AliasTable, secondary: SecondaryIndex) -> Self {
        Self {
            catalog,
            aliases,
            secondary,
        }
    }

    /// Tables compiled into the crate.
    pub fn builtin() -> Self {
        let catalog = Catalog::new(builtin::landmark_records()).expect("valid builtin catalog");
        let aliases = AliasTable::new(builtin::alias_entries()).expect("valid builtin aliases");
        let secondary = SecondaryIndex::new(builtin::secondary_entries())
            .expect("valid builtin secondary index");
        let tables = Self::new(catalog, aliases, secondary);
        info!(
            "event=tables_load module=catalog status=ok source=builtin landmarks={} aliases={} secondary={}",
            tables.catalog.len(),
            tables.aliases.len(),
            tables.secondary.len()
        );
        tables
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn secondary(&self) -> &SecondaryIndex {
        &self.secondary
    }

    /// Lists alias and secondary entries whose canonical key is missing.
    pub fn integrity_issues(&self) -> Vec<IntegrityIssue> {
        let dangling_aliases = self
            .aliases
            .iter()
            .filter(|entry| !self.catalog.contains_key(&entry.canonical_key))
            .map(|entry| IntegrityIssue::DanglingAlias {
                phrase: entry.phrase.clone(),
                canonical_key: entry.canonical_key.clone(),
            });
        let dangling_secondary = self
            .secondary
            .iter()
            .filter(|entry| !self.catalog.contains_key(&entry.canonical_key))
            .map(|entry| IntegrityIssue::DanglingSecondary {
                key: entry.key.clone(),
                canonical_key: entry.canonical_key.clone(),
            });

        dangling_aliases.chain(dangling_secondary).collect()
    }
}
