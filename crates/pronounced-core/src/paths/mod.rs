//! Path utilities for pronounced data directories.
//!
//! This module provides the canonical path resolution for all components:
//! - Data root (honours `PRONOUNCED_DATA_DIR`)
//! - Database location
//! - `.env` file holding user overrides such as `GEMINI_API_KEY`
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately
//! - OS-specific logic is kept private in `platform`

mod config;
mod database;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

// Error type
pub use error::PathError;

// Platform roots
pub use platform::{DATA_DIR_ENV, data_root};

// Database
pub use database::database_path;

// Configuration persistence
pub use config::{env_file_path, persist_env_value};

// Resolver for CLI introspection
pub use resolver::ResolvedPaths;
