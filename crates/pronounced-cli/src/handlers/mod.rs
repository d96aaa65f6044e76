//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods or the playback controller
//!   3. Format output for the terminal
//!
//! Handlers should NOT access repositories directly or contain business logic.

pub mod add;
pub mod auth;
pub mod config;
pub mod edit;
pub mod favorite;
pub mod generate;
pub mod list;
pub mod paths;
pub mod playback;
pub mod remove;
