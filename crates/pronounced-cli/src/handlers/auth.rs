//! Profile commands: login, logout, whoami.

use anyhow::Result;
use chrono::Local;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Sign in, creating the local profile on first use.
pub async fn login(ctx: &CliContext, email: &str, name: Option<&str>) -> Result<()> {
    let user = ctx.app().auth().sign_in(email, name).await?;
    println!("✓ Signed in as {}. Welcome, {}!", user.email, user.greeting_name());
    Ok(())
}

/// Sign out, or report that nobody was signed in.
pub async fn logout(ctx: &CliContext) -> Result<()> {
    if ctx.app().auth().current_user().await?.is_none() {
        println!("Not signed in.");
        return Ok(());
    }
    ctx.app().auth().sign_out().await?;
    println!("✓ Signed out.");
    Ok(())
}

/// Show the signed-in profile and how many words it holds.
pub async fn whoami(ctx: &CliContext) -> Result<()> {
    let Some(user) = ctx.app().auth().current_user().await? else {
        return Err(CliError::Unauthenticated.into());
    };
    let words = ctx.app().words().list().await?;

    println!("Email: {}", user.email);
    if let Some(name) = &user.display_name {
        println!("Name:  {name}");
    }
    println!(
        "Since: {}",
        user.created_at.with_timezone(&Local).format("%Y-%m-%d")
    );
    println!("Words: {}", words.len());
    Ok(())
}
