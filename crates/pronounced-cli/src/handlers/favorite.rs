//! Favorite command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Toggle the favorite flag. Favorites sort first in lists and play-all.
pub async fn execute(ctx: &CliContext, id: &str) -> Result<()> {
    let word = ctx.app().words().find(id).await?;
    let updated = ctx.app().words().toggle_favorite(word.id).await?;
    if updated.is_favorite {
        println!("★ '{}' is now a favorite.", updated.text);
    } else {
        println!("'{}' is no longer a favorite.", updated.text);
    }
    Ok(())
}
