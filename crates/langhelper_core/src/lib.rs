//! Landmark resolution core for the language-helper bot.
//! This crate owns the landmark tables, the resolver and the history store.

pub mod catalog;
pub mod classifier;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use catalog::{builtin_tables, IntegrityIssue, LandmarkTables, TableError};
pub use classifier::{ClassifierPrediction, LabelMapper};
pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::history::{HistoryEntry, HistoryKind, TargetLanguage, UserId};
pub use model::landmark::{LandmarkMatch, LandmarkRecord, MatchStrategy, Resolution};
pub use repo::history_repo::{HistoryRepository, RepoError, RepoResult, SqliteHistoryRepository};
pub use search::resolver::Resolver;
pub use service::landmark_service::{LandmarkService, ServiceError, TranslationRecord};

/// Resolves free text against the built-in tables.
pub fn resolve(text: &str) -> Resolution {
    Resolver::new(builtin_tables()).resolve(text)
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
