//! Classifier label tables and prediction mapping.
//!
//! # Responsibility
//! - Map ImageNet synset ids and English labels to catalog category keys.
//! - Pick the first prediction that maps to any category.
//!
//! # Invariants
//! - Keyword order is significant: the first keyword contained in the label
//!   wins, so `castle` is tried before `tower`.
//! - Categories are stored normalized, ready for exact catalog lookup.

use crate::search::normalize::normalize;
use serde::{Deserialize, Serialize};

const SYNSET_CATEGORIES: &[(&str, &str)] = &[
    ("n03028079", "церковь"),
    ("n03781244", "монастырь"),
    ("n03877845", "дворец"),
    ("n04346328", "крепость"),
    ("n04462240", "башня"),
    ("n04552348", "нефтяная вышка"),
    ("n03788195", "мечеть"),
    ("n03956157", "планетарий"),
    ("n04435653", "крыша"),
    ("n04522168", "ваза"),
    ("n04548280", "часы"),
    ("n09428293", "пляж"),
    ("n09332890", "горы"),
];

// Checked in order against the lowercased label; the first contained keyword wins.
const LABEL_KEYWORDS: &[(&str, &str)] = &[
    ("castle", "замок"),
    ("church", "церковь"),
    ("tower", "башня"),
    ("palace", "дворец"),
    ("mosque", "мечеть"),
    ("monastery", "монастырь"),
    ("fort", "архитектурный объект"),
    ("bridge", "мост"),
    ("arch", "архитектурный объект"),
    ("dome", "архитектурный объект"),
    ("stadium", "стадион"),
    ("theater", "театр"),
    ("library", "библиотека"),
    ("museum", "музей"),
];

/// One decoded classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierPrediction {
    /// ImageNet-style synset id, e.g. `n03028079`.
    pub synset_id: String,
    /// Human-readable English label, e.g. `church, church building`.
    pub label: String,
    /// Probability in `0.0..=1.0`.
    pub confidence: f32,
}

impl ClassifierPrediction {
    pub fn new(synset_id: impl Into<String>, label: impl Into<String>, confidence: f32) -> Self {
        Self {
            synset_id: synset_id.into(),
            label: label.into(),
            confidence,
        }
    }
}

/// Maps classifier predictions to primary-language category keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMapper {
    synsets: Vec<(String, String)>,
    keywords: Vec<(String, String)>,
}

impl LabelMapper {
    /// Creates a mapper from `(synset_id, category)` and ordered
    /// `(keyword, category)` pairs. Categories are normalized.
    pub fn new(synsets: Vec<(String, String)>, keywords: Vec<(String, String)>) -> Self {
        let normalize_pairs = |pairs: Vec<(String, String)>| {
            pairs
                .into_iter()
                .map(|(from, category)| (normalize(&from), normalize(&category)))
                .collect::<Vec<_>>()
        };
        Self {
            synsets: normalize_pairs(synsets),
            keywords: normalize_pairs(keywords),
        }
    }

    /// ImageNet synsets and architectural keywords used by the bot.
    pub fn builtin() -> Self {
        let owned = |pairs: &[(&str, &str)]| {
            pairs
                .iter()
                .map(|&(from, category)| (from.to_string(), category.to_string()))
                .collect::<Vec<_>>()
        };
        Self::new(owned(SYNSET_CATEGORIES), owned(LABEL_KEYWORDS))
    }

    /// Category for one prediction: synset first, then label keywords.
    pub fn map_prediction(&self, prediction: &ClassifierPrediction) -> Option<&str> {
        let synset_id = normalize(&prediction.synset_id);
        if let Some((_, category)) = self.synsets.iter().find(|(id, _)| *id == synset_id) {
            return Some(category.as_str());
        }

        let label = normalize(&prediction.label);
        self.keywords
            .iter()
            .find(|(keyword, _)| label.contains(keyword.as_str()))
            .map(|(_, category)| category.as_str())
    }

    /// First prediction that maps to a category, with that prediction.
    pub fn first_category<'p>(
        &self,
        predictions: &'p [ClassifierPrediction],
    ) -> Option<(&str, &'p ClassifierPrediction)> {
        predictions.iter().find_map(|prediction| {
            self.map_prediction(prediction)
                .map(|category| (category, prediction))
        })
    }
}

impl Default for LabelMapper {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifierPrediction, LabelMapper};

    #[test]
    fn synset_takes_priority_over_label() {
        let mapper = LabelMapper::builtin();
        let prediction = ClassifierPrediction::new("n03877845", "castle", 0.9);
        assert_eq!(mapper.map_prediction(&prediction), Some("дворец"));
    }

    #[test]
    fn label_keywords_match_case_insensitively() {
        let mapper = LabelMapper::builtin();
        let prediction = ClassifierPrediction::new("n00000000", "Suspension Bridge", 0.5);
        assert_eq!(mapper.map_prediction(&prediction), Some("мост"));

        let unknown = ClassifierPrediction::new("n00000000", "golden retriever", 0.99);
        assert_eq!(mapper.map_prediction(&unknown), None);
    }

    #[test]
    fn first_category_skips_unmappable_predictions() {
        let mapper = LabelMapper::builtin();
        let predictions = vec![
            ClassifierPrediction::new("n02099601", "golden retriever", 0.6),
            ClassifierPrediction::new("n03788195", "mosque", 0.3),
            ClassifierPrediction::new("n03028079", "church", 0.1),
        ];
        let (category, prediction) = mapper.first_category(&predictions).unwrap();
        assert_eq!(category, "мечеть");
        assert_eq!(prediction.synset_id, "n03788195");
        assert!(mapper.first_category(&predictions[..1]).is_none());
    }

    #[test]
    fn earlier_keyword_wins_when_label_contains_several() {
        let mapper = LabelMapper::builtin();
        let prediction = ClassifierPrediction::new("n00000000", "castle tower", 0.7);
        assert_eq!(mapper.map_prediction(&prediction), Some("замок"));
    }
}
