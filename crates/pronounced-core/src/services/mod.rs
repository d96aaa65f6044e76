//! Core services - the application's business logic layer.
//!
//! This module contains high-level service abstractions that orchestrate
//! between ports (trait interfaces) and domain logic. Services here are
//! pure orchestrators - they don't know about concrete implementations.

mod app_core;
mod auth_service;
mod sentence_service;
mod settings_service;
mod word_service;

pub use app_core::AppCore;
pub use auth_service::AuthService;
pub use sentence_service::SentenceService;
pub use settings_service::SettingsService;
pub use word_service::WordService;
