//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate resolver and repository calls into use-case level APIs.
//! - Keep messenger/CLI layers decoupled from storage details.

pub mod landmark_service;
