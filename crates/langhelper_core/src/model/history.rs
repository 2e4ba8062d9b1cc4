//! History and user-preference model.
//!
//! # Responsibility
//! - Define the persisted shape of lookup/translation history entries.
//! - Define supported translation target languages.
//!
//! # Invariants
//! - `HistoryEntry.uuid` is stable and never reused.
//! - Stored texts never exceed [`MAX_HISTORY_TEXT_CHARS`] characters.
//! - `TargetLanguage` only holds codes from the supported list.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Messenger-side user identifier.
pub type UserId = i64;

/// Stable identifier for one history entry.
pub type HistoryEntryId = Uuid;

/// Maximum characters kept for original/result text in history.
pub const MAX_HISTORY_TEXT_CHARS: usize = 1000;

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryKind {
    /// Plain text translation.
    Text,
    /// Text message recognized as a landmark.
    TextLandmark,
    /// OCR text translation from a photo.
    Photo,
    /// OCR text recognized as a landmark.
    PhotoLandmark,
    /// Image classifier detection enriched from the catalog.
    PhotoCv,
}

impl HistoryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::TextLandmark => "text_landmark",
            Self::Photo => "photo",
            Self::PhotoLandmark => "photo_landmark",
            Self::PhotoCv => "photo_cv",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(Self::Text),
            "text_landmark" => Some(Self::TextLandmark),
            "photo" => Some(Self::Photo),
            "photo_landmark" => Some(Self::PhotoLandmark),
            "photo_cv" => Some(Self::PhotoCv),
            _ => None,
        }
    }

    /// Whether the entry came from the landmark matcher rather than translation.
    pub fn is_landmark(self) -> bool {
        matches!(self, Self::TextLandmark | Self::PhotoLandmark | Self::PhotoCv)
    }
}

/// Persisted history row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub uuid: HistoryEntryId,
    pub user_id: UserId,
    pub kind: HistoryKind,
    pub original_text: String,
    pub result_text: String,
    pub source_lang: String,
    pub target_lang: String,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

/// Write model for appending one history entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHistoryEntry {
    pub user_id: UserId,
    pub kind: HistoryKind,
    pub original_text: String,
    pub result_text: String,
    pub source_lang: String,
    pub target_lang: String,
}

impl NewHistoryEntry {
    pub fn new(
        user_id: UserId,
        kind: HistoryKind,
        original_text: impl Into<String>,
        result_text: impl Into<String>,
        source_lang: impl Into<String>,
        target_lang: impl Into<String>,
    ) -> Self {
        Self {
            user_id,
            kind,
            original_text: original_text.into(),
            result_text: result_text.into(),
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
        }
    }
}

/// Truncates `value` to at most `max_chars` Unicode scalar values.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}

const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("en", "английский"),
    ("de", "немецкий"),
    ("fr", "французский"),
    ("es", "испанский"),
    ("ja", "японский"),
    ("ko", "корейский"),
    ("ru", "русский"),
    ("it", "итальянский"),
    ("pt", "португальский"),
    ("ar", "арабский"),
    ("tr", "турецкий"),
    ("zh-cn", "китайский"),
];

/// Translation target language selected by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetLanguage {
    code: &'static str,
    display_name: &'static str,
}

impl TargetLanguage {
    /// Language used for users without a stored preference.
    pub const DEFAULT_CODE: &'static str = "ru";

    /// Parses a language code (case-insensitive, trimmed).
    pub fn parse(code: &str) -> Result<Self, UnsupportedLanguage> {
        let normalized = code.trim().to_ascii_lowercase();
        SUPPORTED_LANGUAGES
            .iter()
            .find(|(candidate, _)| *candidate == normalized)
            .map(|&(code, display_name)| Self { code, display_name })
            .ok_or(UnsupportedLanguage(normalized))
    }

    pub fn default_language() -> Self {
        Self {
            code: "ru",
            display_name: "русский",
        }
    }

    pub fn code(self) -> &'static str {
        self.code
    }

    pub fn display_name(self) -> &'static str {
        self.display_name
    }

    /// All supported languages in menu order.
    pub fn all() -> impl Iterator<Item = TargetLanguage> {
        SUPPORTED_LANGUAGES
            .iter()
            .map(|&(code, display_name)| Self { code, display_name })
    }
}

impl Default for TargetLanguage {
    fn default() -> Self {
        Self::default_language()
    }
}

impl Display for TargetLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

/// Rejected language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported target language `{}`", self.0)
    }
}

impl Error for UnsupportedLanguage {}

#[cfg(test)]
mod tests {
    use super::{truncate_chars, HistoryKind, TargetLanguage, UnsupportedLanguage};

    #[test]
    fn history_kind_roundtrips_through_db_names() {
        for kind in [
            HistoryKind::Text,
            HistoryKind::TextLandmark,
            HistoryKind::Photo,
            HistoryKind::PhotoLandmark,
            HistoryKind::PhotoCv,
        ] {
            assert_eq!(HistoryKind::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(HistoryKind::parse("audio"), None);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("кремль", 3), "кре");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn target_language_parses_known_codes() {
        let lang = TargetLanguage::parse(" ZH-CN ").unwrap();
        assert_eq!(lang.code(), "zh-cn");
        assert_eq!(lang.display_name(), "китайский");
        assert_eq!(TargetLanguage::default().code(), TargetLanguage::DEFAULT_CODE);
        assert_eq!(TargetLanguage::all().count(), 12);
    }

    #[test]
    fn target_language_rejects_unknown_codes() {
        assert_eq!(
            TargetLanguage::parse("xx").unwrap_err(),
            UnsupportedLanguage("xx".to_string())
        );
    }
}
