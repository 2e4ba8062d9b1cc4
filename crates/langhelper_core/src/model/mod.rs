//! Domain model for landmark lookup and user history.
//!
//! # Responsibility
//! - Define canonical data structures used by the resolver and services.
//! - Keep result shapes explicit (tagged variants, not optional flags).
//!
//! # Invariants
//! - Landmark records are immutable once a table is built.
//! - History rows are append-only except for per-user clearing.

pub mod history;
pub mod landmark;
