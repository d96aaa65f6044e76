//! Config command handler.

use anyhow::Result;
use pronounced_core::{SPEECH_RATE_PRESETS, Settings, SettingsUpdate, env_file_path, persist_env_value};
use pronounced_gemini::API_KEY_ENV;

use crate::bootstrap::CliContext;
use crate::config_commands::ConfigCommand;
use crate::error::CliError;

/// Execute the config command.
pub async fn execute(ctx: &CliContext, command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show => show(ctx).await,
        ConfigCommand::Set {
            rate,
            muted,
            model,
            api_key,
        } => set(ctx, rate, muted, model, api_key).await,
        ConfigCommand::Reset => {
            ctx.app().settings().save(&Settings::with_defaults()).await?;
            println!("✓ Settings restored to defaults.");
            Ok(())
        }
    }
}

fn presets() -> String {
    SPEECH_RATE_PRESETS
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

async fn show(ctx: &CliContext) -> Result<()> {
    let settings = ctx.app().settings().get().await?;
    let key_state = if std::env::var(API_KEY_ENV).is_ok_and(|k| !k.trim().is_empty()) {
        "set"
    } else {
        "not set"
    };

    println!("Current settings:");
    println!(
        "  Speech rate:    {} (presets: {})",
        settings.effective_speech_rate(),
        presets()
    );
    println!(
        "  Muted:          {}",
        if settings.effective_muted() { "yes" } else { "no" }
    );
    println!("  Sentence model: {}", settings.effective_sentence_model());
    println!("  Gemini API key: {key_state} ({API_KEY_ENV})");
    Ok(())
}

fn build_update(rate: Option<f32>, muted: Option<bool>, model: Option<String>) -> SettingsUpdate {
    SettingsUpdate {
        speech_rate: rate.map(Some),
        muted: muted.map(Some),
        sentence_model: model.map(Some),
    }
}

async fn set(
    ctx: &CliContext,
    rate: Option<f32>,
    muted: Option<bool>,
    model: Option<String>,
    api_key: Option<String>,
) -> Result<()> {
    if rate.is_none() && muted.is_none() && model.is_none() && api_key.is_none() {
        return Err(CliError::Arguments(
            "Nothing to update. Pass --rate, --muted, --model or --api-key.".into(),
        )
        .into());
    }

    if let Some(key) = api_key {
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::Arguments("API key cannot be empty".into()).into());
        }
        persist_env_value(API_KEY_ENV, key)?;
        println!("✓ API key saved to {}", env_file_path()?.display());
    }

    let update = build_update(rate, muted, model);
    if update.speech_rate.is_some() || update.muted.is_some() || update.sentence_model.is_some() {
        let settings = ctx.app().settings().update(update).await?;
        println!(
            "✓ Settings updated: rate {}, {}, model {}",
            settings.effective_speech_rate(),
            if settings.effective_muted() { "muted" } else { "unmuted" },
            settings.effective_sentence_model()
        );
    }
    Ok(())
}
