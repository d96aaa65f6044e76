//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics.

use anyhow::Result;

use pronounced_core::ResolvedPaths;

/// Print the data root, database and `.env` locations.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
