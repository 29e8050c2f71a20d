//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the HTTP layer decoupled from storage details.

pub mod activity_service;
pub mod camper_service;
pub mod seed_service;
pub mod signup_service;
