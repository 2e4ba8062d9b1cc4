//! Landmark domain model.
//!
//! # Responsibility
//! - Define the canonical landmark record and the static table entry shapes.
//! - Define the tagged resolution outcome returned by the resolver.
//!
//! # Invariants
//! - `canonical_key` is lowercased, trimmed and non-empty.
//! - A `Resolution` is either a fully populated match or `NotFound`; there is
//!   no partial state.
//!
//! # See also
//! - crate::search::resolver

use serde::{Deserialize, Serialize};

/// Fact used when a record carries no trivia of its own.
pub const GENERIC_FACT: &str = "Интересный факт: Эта достопримечательность имеет богатую историю";

/// One point of interest in the canonical catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkRecord {
    /// Normalized primary-language key, unique within a catalog.
    pub canonical_key: String,
    /// Human-readable primary-language name.
    pub display_name: String,
    /// Short location/summary text.
    pub description: String,
    /// Name in the secondary lookup language.
    pub secondary_name: String,
    /// Optional trivia; [`GENERIC_FACT`] is used when absent.
    #[serde(default)]
    pub fact: Option<String>,
}

impl LandmarkRecord {
    /// Returns the record fact or the generic fallback.
    pub fn fact_or_generic(&self) -> &str {
        self.fact.as_deref().unwrap_or(GENERIC_FACT)
    }

    /// Projects this record into a resolver match.
    pub fn to_match(&self) -> LandmarkMatch {
        LandmarkMatch {
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            fact: self.fact_or_generic().to_string(),
            secondary_name: self.secondary_name.clone(),
        }
    }
}

/// Informal phrase that is rewritten to a canonical key before lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub phrase: String,
    pub canonical_key: String,
}

/// Secondary-language phrase pointing at a canonical key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryIndexEntry {
    pub key: String,
    pub canonical_key: String,
}

/// Populated payload of a successful resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkMatch {
    pub display_name: String,
    pub description: String,
    pub fact: String,
    pub secondary_name: String,
}

/// Outcome of matching text against the landmark tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found(LandmarkMatch),
    NotFound,
}

impl Resolution {
    /// Returns whether a landmark was matched.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Borrows the match payload, if any.
    pub fn as_match(&self) -> Option<&LandmarkMatch> {
        match self {
            Self::Found(found) => Some(found),
            Self::NotFound => None,
        }
    }
}

impl From<Option<LandmarkMatch>> for Resolution {
    fn from(value: Option<LandmarkMatch>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Lookup tier that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Canonical key found inside the (aliased) input.
    PrimarySubstring,
    /// Secondary-language key found inside the input and cross-referenced.
    SecondarySubstring,
    /// Input token found inside a canonical key.
    TokenPartial,
    /// Exact canonical key lookup.
    CanonicalExact,
    /// Exact secondary-language key lookup.
    SecondaryExact,
}

impl MatchStrategy {
    /// Stable snake_case name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PrimarySubstring => "primary_substring",
            Self::SecondarySubstring => "secondary_substring",
            Self::TokenPartial => "token_partial",
            Self::CanonicalExact => "canonical_exact",
            Self::SecondaryExact => "secondary_exact",
        }
    }
}
