//! Landmark resolver.
//!
//! # Responsibility
//! - Decide whether free-form text names a catalog landmark.
//! - Offer exact entry points for callers that already hold a key.
//!
//! # Invariants
//! - Lookup tiers run in fixed order and the first hit wins:
//!   primary substring, secondary substring, token partial.
//! - Ties inside a tier are broken by table order.
//! - Resolution never fails; a miss is `Resolution::NotFound`.
//! - The resolver holds shared references only and never mutates tables.
//! - Log events carry lengths and keys, never the user's text.

use crate::catalog::LandmarkTables;
use crate::model::landmark::{LandmarkMatch, LandmarkRecord, MatchStrategy, Resolution};
use crate::search::normalize::{normalize, partial_tokens};
use log::{debug, warn};

/// Matches text against one set of landmark tables.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    tables: &'t LandmarkTables,
}

impl<'t> Resolver<'t> {
    pub fn new(tables: &'t LandmarkTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &'t LandmarkTables {
        self.tables
    }

    /// Resolves arbitrary user, OCR or classifier text.
    pub fn resolve(&self, raw_text: &str) -> Resolution {
        self.resolve_traced(raw_text).map(|(found, _)| found).into()
    }

    /// Like [`Resolver::resolve`] but also reports which tier matched.
    pub fn resolve_traced(&self, raw_text: &str) -> Option<(LandmarkMatch, MatchStrategy)> {
        let normalized = normalize(raw_text);
        let text = self.tables.aliases().apply_aliases(&normalized);

        let hit = self
            .primary_substring(&text)
            .map(|record| (record, MatchStrategy::PrimarySubstring))
            .or_else(|| {
                self.secondary_substring(&text)
                    .map(|record| (record, MatchStrategy::SecondarySubstring))
            })
            .or_else(|| {
                self.token_partial(&text)
                    .map(|record| (record, MatchStrategy::TokenPartial))
            });

        match hit {
            Some((record, strategy)) => {
                debug!(
                    "event=landmark_resolve module=search status=ok strategy={} key=\"{}\" input_chars={}",
                    strategy.as_str(),
                    record.canonical_key,
                    raw_text.chars().count()
                );
                Some((record.to_match(), strategy))
            }
            None => {
                debug!(
                    "event=landmark_resolve module=search status=not_found input_chars={}",
                    raw_text.chars().count()
                );
                None
            }
        }
    }

    /// Exact lookup by a secondary-language name.
    pub fn resolve_by_secondary_exact(&self, name: &str) -> Resolution {
        let key = normalize(name);
        self.tables
            .secondary()
            .lookup_secondary(&key)
            .and_then(|canonical_key| self.cross_reference(&key, canonical_key))
            .map(|record| {
                log_exact_hit(MatchStrategy::SecondaryExact, record);
                record.to_match()
            })
            .into()
    }

    /// Exact lookup by canonical key, e.g. a classifier category.
    pub fn resolve_by_canonical_exact(&self, key: &str) -> Resolution {
        self.tables
            .catalog()
            .lookup_exact(&normalize(key))
            .map(|record| {
                log_exact_hit(MatchStrategy::CanonicalExact, record);
                record.to_match()
            })
            .into()
    }

    fn primary_substring(&self, text: &str) -> Option<&'t LandmarkRecord> {
        self.tables
            .catalog()
            .iter()
            .find(|record| text.contains(record.canonical_key.as_str()))
    }

    fn secondary_substring(&self, text: &str) -> Option<&'t LandmarkRecord> {
        self.tables
            .secondary()
            .iter()
            .filter(|entry| text.contains(entry.key.as_str()))
            .find_map(|entry| self.cross_reference(&entry.key, &entry.canonical_key))
    }

    fn token_partial(&self, text: &str) -> Option<&'t LandmarkRecord> {
        partial_tokens(text).find_map(|token| {
            self.tables
                .catalog()
                .iter()
                .find(|record| record.canonical_key.contains(token))
        })
    }

    /// Follows a secondary entry into the catalog; dangling entries are
    /// logged and skipped.
    fn cross_reference(
        &self,
        secondary_key: &str,
        canonical_key: &str,
    ) -> Option<&'t LandmarkRecord> {
        let record = self.tables.catalog().lookup_exact(canonical_key);
        if record.is_none() {
            warn!(
                "event=landmark_resolve module=search status=warn error_code=dangling_secondary_ref secondary_key=\"{}\" canonical_key=\"{}\"",
                secondary_key, canonical_key
            );
        }
        record
    }
}

fn log_exact_hit(strategy: MatchStrategy, record: &LandmarkRecord) {
    debug!(
        "event=landmark_resolve module=search status=ok strategy={} key=\"{}\"",
        strategy.as_str(),
        record.canonical_key
    );
}

#[cfg(test)]
mod tests {
    use super::Resolver;
    use crate::catalog::{builtin_tables, AliasTable, Catalog, LandmarkTables, SecondaryIndex};
    use crate::model::landmark::{
        AliasEntry, LandmarkRecord, MatchStrategy, Resolution, SecondaryIndexEntry, GENERIC_FACT,
    };

    fn record(key: &str, name: &str, secondary: &str) -> LandmarkRecord {
        LandmarkRecord {
            canonical_key: key.to_string(),
            display_name: name.to_string(),
            description: format!("{name} description"),
            secondary_name: secondary.to_string(),
            fact: None,
        }
    }

    fn secondary(key: &str, canonical_key: &str) -> SecondaryIndexEntry {
        SecondaryIndexEntry {
            key: key.to_string(),
            canonical_key: canonical_key.to_string(),
        }
    }

    fn display_name(resolution: &Resolution) -> Option<&str> {
        resolution.as_match().map(|found| found.display_name.as_str())
    }

    #[test]
    fn primary_scan_matches_inside_longer_text() {
        let resolver = Resolver::new(builtin_tables());
        let (found, strategy) = resolver.resolve_traced("я видел красная площадь вчера").unwrap();
        assert_eq!(found.display_name, "Красная площадь");
        assert_eq!(strategy, MatchStrategy::PrimarySubstring);
    }

    #[test]
    fn primary_scan_breaks_ties_by_table_order() {
        let resolver = Resolver::new(builtin_tables());
        // Both "эйфелева башня" and "башня" occur; the earlier record wins.
        let resolution = resolver.resolve("эйфелева башня");
        assert_eq!(display_name(&resolution), Some("Эйфелева башня"));
        let resolution = resolver.resolve("мост и кремль");
        assert_eq!(display_name(&resolution), Some("Кремль"));
    }

    #[test]
    fn secondary_scan_cross_references_catalog() {
        let resolver = Resolver::new(builtin_tables());
        let (found, strategy) = resolver.resolve_traced("The Colosseum at night").unwrap();
        assert_eq!(found.display_name, "Колизей");
        assert_eq!(found.secondary_name, "Colosseum");
        assert_eq!(strategy, MatchStrategy::SecondarySubstring);
    }

    #[test]
    fn token_scan_matches_fragment_of_multi_word_key() {
        let resolver = Resolver::new(builtin_tables());
        let (found, strategy) = resolver.resolve_traced("Собор на площади").unwrap();
        assert_eq!(found.display_name, "Собор Василия Блаженного");
        assert_eq!(strategy, MatchStrategy::TokenPartial);
    }

    #[test]
    fn token_scan_ignores_tokens_of_three_chars_or_less() {
        let tables = LandmarkTables::new(
            Catalog::new(vec![record("абвгд", "Абвгд", "Abvgd")]).unwrap(),
            AliasTable::default(),
            SecondaryIndex::default(),
        );
        let resolver = Resolver::new(&tables);
        assert_eq!(resolver.resolve("абв"), Resolution::NotFound);
        assert!(resolver.resolve("бвгд").is_found());
    }

    #[test]
    fn token_scan_walks_tokens_left_to_right() {
        let tables = LandmarkTables::new(
            Catalog::new(vec![
                record("первый объект", "Первый", "First"),
                record("второй объект", "Второй", "Second"),
            ])
            .unwrap(),
            AliasTable::default(),
            SecondaryIndex::default(),
        );
        let resolver = Resolver::new(&tables);
        assert_eq!(display_name(&resolver.resolve("второй первый")), Some("Второй"));
        assert_eq!(display_name(&resolver.resolve("объект")), Some("Первый"));
    }

    #[test]
    fn dangling_secondary_entry_is_skipped_and_scan_continues() {
        let tables = LandmarkTables::new(
            Catalog::new(vec![record("колизей", "Колизей", "Colosseum")]).unwrap(),
            AliasTable::default(),
            SecondaryIndex::new(vec![
                secondary("rome", "рим"),
                secondary("colosseum", "колизей"),
            ])
            .unwrap(),
        );
        let resolver = Resolver::new(&tables);
        let resolution = resolver.resolve("rome colosseum");
        assert_eq!(display_name(&resolution), Some("Колизей"));
        assert_eq!(resolver.resolve("rome"), Resolution::NotFound);
        assert_eq!(resolver.resolve_by_secondary_exact("rome"), Resolution::NotFound);
    }

    #[test]
    fn aliases_run_before_catalog_scan() {
        let tables = LandmarkTables::new(
            Catalog::new(vec![record("мост", "Мост", "Bridge")]).unwrap(),
            AliasTable::new(vec![AliasEntry {
                phrase: "golden gate".to_string(),
                canonical_key: "мост".to_string(),
            }])
            .unwrap(),
            SecondaryIndex::default(),
        );
        let resolver = Resolver::new(&tables);
        let (found, strategy) = resolver.resolve_traced("GOLDEN GATE").unwrap();
        assert_eq!(found.display_name, "Мост");
        assert_eq!(found.fact, GENERIC_FACT);
        assert_eq!(strategy, MatchStrategy::PrimarySubstring);
    }

    #[test]
    fn exact_entry_points_do_not_match_substrings() {
        let resolver = Resolver::new(builtin_tables());
        assert_eq!(
            display_name(&resolver.resolve_by_secondary_exact(" Big Ben ")),
            Some("Биг-Бен")
        );
        assert_eq!(
            resolver.resolve_by_secondary_exact("big ben tower"),
            Resolution::NotFound
        );
        assert_eq!(
            display_name(&resolver.resolve_by_canonical_exact("Замок")),
            Some("Замок")
        );
        assert_eq!(
            resolver.resolve_by_canonical_exact("старый замок"),
            Resolution::NotFound
        );
    }

    #[test]
    fn empty_tables_never_match() {
        let tables = LandmarkTables::default();
        let resolver = Resolver::new(&tables);
        assert_eq!(resolver.resolve("кремль"), Resolution::NotFound);
    }
}
