//! Landmark matching entry points.
//!
//! # Responsibility
//! - Normalize and tokenize free-form text.
//! - Resolve text to catalog records through ordered lookup tiers.
//!
//! # See also
//! - crate::catalog

pub mod normalize;
pub mod resolver;
