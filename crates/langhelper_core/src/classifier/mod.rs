//! Image-classifier label mapping.
//!
//! # Responsibility
//! - Turn raw classifier predictions into catalog category keys.
//! - Stay model-agnostic: inference happens outside the core.
//!
//! # Invariants
//! - Predictions are inspected in the order given (highest confidence first
//!   by convention); the first mappable one wins.
//! - Synset mapping takes priority over label keywords for one prediction.

mod labels;

pub use labels::{ClassifierPrediction, LabelMapper};
