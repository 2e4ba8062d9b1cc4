//! Landmark lookup use-case service.
//!
//! # Responsibility
//! - Route user text, OCR text and classifier output into the resolver.
//! - Record recognized landmarks and translations into history.
//! - Manage the user's translation target language.
//!
//! # Invariants
//! - Only `Found` resolutions are written to history.
//! - A history write failure is reported to the caller, never swallowed.
//! - Service layer remains storage-agnostic.

use crate::classifier::{ClassifierPrediction, LabelMapper};
use crate::model::history::{
    truncate_chars, HistoryEntry, HistoryKind, NewHistoryEntry, TargetLanguage,
    UnsupportedLanguage, UserId,
};
use crate::model::landmark::Resolution;
use crate::repo::history_repo::{HistoryRepository, RepoError};
use crate::search::resolver::Resolver;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Typed messages shorter than this are rejected.
pub const MIN_TEXT_CHARS: usize = 2;
/// OCR output must be longer than this to be worth resolving.
pub const MIN_OCR_CHARS: usize = 2;
/// OCR text kept in a `photo_landmark` history entry.
pub const OCR_HISTORY_CHARS: usize = 100;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for lookup and history use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Typed message is too short to look up or translate.
    TextTooShort { chars: usize },
    /// Language code outside the supported list.
    UnsupportedLanguage(UnsupportedLanguage),
    /// History kind not produced by a translation.
    NotATranslation(HistoryKind),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextTooShort { chars } => write!(
                f,
                "text is too short: {chars} characters, at least {MIN_TEXT_CHARS} required"
            ),
            Self::UnsupportedLanguage(err) => write!(f, "{err}"),
            Self::NotATranslation(kind) => {
                write!(f, "history kind `{}` is not a translation", kind.as_str())
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::TextTooShort { .. } | Self::NotATranslation(_) => None,
            Self::UnsupportedLanguage(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<UnsupportedLanguage> for ServiceError {
    fn from(value: UnsupportedLanguage) -> Self {
        Self::UnsupportedLanguage(value)
    }
}

/// Request model for recording one translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRecord {
    /// `HistoryKind::Text` or `HistoryKind::Photo`.
    pub kind: HistoryKind,
    pub original: String,
    pub translated: String,
    pub source_lang: String,
    pub target_lang: TargetLanguage,
}

/// Use-case service combining the resolver with history persistence.
pub struct LandmarkService<'t, R: HistoryRepository> {
    resolver: Resolver<'t>,
    labels: LabelMapper,
    repo: R,
}

impl<'t, R: HistoryRepository> LandmarkService<'t, R> {
    /// Creates a service with the built-in classifier label mapping.
    pub fn new(resolver: Resolver<'t>, repo: R) -> Self {
        Self::with_labels(resolver, LabelMapper::builtin(), repo)
    }

    pub fn with_labels(resolver: Resolver<'t>, labels: LabelMapper, repo: R) -> Self {
        Self {
            resolver,
            labels,
            repo,
        }
    }

    pub fn resolver(&self) -> Resolver<'t> {
        self.resolver
    }

    /// Registers a messenger user; existing profiles are left untouched.
    pub fn register_user(
        &self,
        user_id: UserId,
        username: &str,
        first_name: &str,
    ) -> ServiceResult<bool> {
        Ok(self.repo.ensure_user(user_id, username, first_name)?)
    }

    /// Resolves a typed message.
    ///
    /// # Contract
    /// - Rejects text shorter than [`MIN_TEXT_CHARS`] after trimming.
    /// - On `Found`, appends a `text_landmark` history entry.
    pub fn lookup_text(&self, user_id: UserId, text: &str) -> ServiceResult<Resolution> {
        let text = text.trim();
        let chars = text.chars().count();
        if chars < MIN_TEXT_CHARS {
            return Err(ServiceError::TextTooShort { chars });
        }

        let resolution = self.resolver.resolve(text);
        if let Resolution::Found(found) = &resolution {
            self.repo.append(&NewHistoryEntry::new(
                user_id,
                HistoryKind::TextLandmark,
                text,
                found.display_name.as_str(),
                "landmark",
                "info",
            ))?;
        }
        log_lookup("text", &resolution);
        Ok(resolution)
    }

    /// Resolves text recovered from a photo by OCR.
    ///
    /// # Contract
    /// - OCR output of [`MIN_OCR_CHARS`] characters or fewer is `NotFound`.
    /// - On `Found`, appends a `photo_landmark` entry with the OCR text
    ///   truncated to [`OCR_HISTORY_CHARS`].
    pub fn lookup_ocr(&self, user_id: UserId, ocr_text: &str) -> ServiceResult<Resolution> {
        let text = ocr_text.trim();
        if text.chars().count() <= MIN_OCR_CHARS {
            log_lookup("ocr", &Resolution::NotFound);
            return Ok(Resolution::NotFound);
        }

        let resolution = self.resolver.resolve(text);
        if let Resolution::Found(found) = &resolution {
            self.repo.append(&NewHistoryEntry::new(
                user_id,
                HistoryKind::PhotoLandmark,
                truncate_chars(text, OCR_HISTORY_CHARS),
                found.display_name.as_str(),
                "text",
                "landmark",
            ))?;
        }
        log_lookup("ocr", &resolution);
        Ok(resolution)
    }

    /// Enriches image-classifier output with catalog data.
    ///
    /// # Contract
    /// - Uses the first prediction that maps to a category.
    /// - Categories missing from the catalog resolve to `NotFound`.
    /// - On `Found`, appends a `photo_cv` history entry.
    pub fn lookup_classifier(
        &self,
        user_id: UserId,
        predictions: &[ClassifierPrediction],
    ) -> ServiceResult<Resolution> {
        let resolution = self
            .labels
            .first_category(predictions)
            .map_or(Resolution::NotFound, |(category, _)| {
                self.resolver.resolve_by_canonical_exact(category)
            });

        if let Resolution::Found(found) = &resolution {
            self.repo.append(&NewHistoryEntry::new(
                user_id,
                HistoryKind::PhotoCv,
                found.display_name.as_str(),
                found.description.as_str(),
                "vision",
                "landmark",
            ))?;
        }
        log_lookup("classifier", &resolution);
        Ok(resolution)
    }

    /// Stores a translation produced by the external translation service.
    pub fn record_translation(
        &self,
        user_id: UserId,
        record: &TranslationRecord,
    ) -> ServiceResult<HistoryEntry> {
        if record.kind.is_landmark() {
            return Err(ServiceError::NotATranslation(record.kind));
        }
        Ok(self.repo.append(&NewHistoryEntry::new(
            user_id,
            record.kind,
            record.original.as_str(),
            record.translated.as_str(),
            record.source_lang.as_str(),
            record.target_lang.code(),
        ))?)
    }

    /// Newest history entries first.
    pub fn recent_history(
        &self,
        user_id: UserId,
        limit: Option<u32>,
    ) -> ServiceResult<Vec<HistoryEntry>> {
        Ok(self.repo.recent(user_id, limit)?)
    }

    /// Removes all history of one user and returns the removed count.
    pub fn clear_history(&self, user_id: UserId) -> ServiceResult<usize> {
        let removed = self.repo.clear(user_id)?;
        info!("event=history_clear module=service status=ok removed={removed}");
        Ok(removed)
    }

    pub fn target_language(&self, user_id: UserId) -> ServiceResult<TargetLanguage> {
        Ok(self.repo.target_language(user_id)?)
    }

    /// Parses and stores a language code chosen by the user.
    pub fn set_target_language(&self, user_id: UserId, code: &str) -> ServiceResult<TargetLanguage> {
        let language = TargetLanguage::parse(code)?;
        self.repo.set_target_language(user_id, language)?;
        info!(
            "event=target_language_set module=service status=ok language={}",
            language.code()
        );
        Ok(language)
    }
}

fn log_lookup(source: &'static str, resolution: &Resolution) {
    info!(
        "event=landmark_lookup module=service status=ok source={source} found={}",
        resolution.is_found()
    );
}
