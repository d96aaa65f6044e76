//! Say and play-all handlers.
//!
//! Both build a `PlaybackController` over the selected speech backend and
//! stop it cleanly on Ctrl-C.

use std::collections::HashMap;

use anyhow::Result;
use pronounced_core::{Settings, Word, WordId, WordService};
use pronounced_playback::{NowPlaying, PlaybackError, PlaybackEvent, SpeechOptions};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::bootstrap::CliContext;
use crate::commands::SpeechArgs;
use crate::presentation::short_id;

/// Saved settings, overridden by this invocation's flags.
pub fn speech_options(settings: &Settings, args: &SpeechArgs) -> Result<SpeechOptions, PlaybackError> {
    let rate = args.rate.unwrap_or_else(|| settings.effective_speech_rate());
    SpeechOptions::new(rate, args.mute || settings.effective_muted())
}

/// Speak one word, or its example sentence.
pub async fn say(ctx: &CliContext, id: &str, sentence: bool, speech: &SpeechArgs) -> Result<()> {
    let word = ctx.app().words().find(id).await?;
    let text = if sentence {
        let Some(text) = word.speakable_sentence() else {
            println!(
                "'{}' has no example sentence. Add one with: pronounced edit {} --sentence \"...\"",
                word.text,
                short_id(&word.id)
            );
            return Ok(());
        };
        text
    } else {
        word.text.as_str()
    };

    let settings = ctx.app().settings().get().await?;
    let options = speech_options(&settings, speech)?;
    let (controller, _events) = ctx.playback_controller(speech.silent);
    controller.set_options(options);

    println!("🔊 {text}");
    let play = async {
        if sentence {
            controller.play_sentence(&word).await;
        } else {
            controller.play_word(&word).await;
        }
    };
    tokio::select! {
        () = play => {}
        _ = tokio::signal::ctrl_c() => controller.stop_all(),
    }
    Ok(())
}

/// Speak every word in practice order, each followed by its sentence.
///
/// With `search`, only matching words play; when nothing matches, all do.
pub async fn play_all(ctx: &CliContext, search: Option<&str>, speech: &SpeechArgs) -> Result<()> {
    let words = ctx.app().words().playlist(search).await?;
    if words.is_empty() {
        println!("No words to play. Use 'pronounced add <word>' to add some.");
        return Ok(());
    }
    if let Some(query) = search {
        if WordService::search(&words, query).is_empty() {
            println!("No words match '{query}'; playing all words.");
        }
    }

    let settings = ctx.app().settings().get().await?;
    let options = speech_options(&settings, speech)?;
    let (controller, events) = ctx.playback_controller(speech.silent);
    let printer = tokio::spawn(print_events(events, lookup(&words)));

    let mut session = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.start_all(words, options).await })
    };
    tokio::select! {
        joined = &mut session => joined?,
        _ = tokio::signal::ctrl_c() => {
            controller.stop_all();
            session.await?;
        }
    }

    // The printer ends once every controller handle is gone.
    drop(controller);
    printer.await?;
    Ok(())
}

type Lookup = HashMap<WordId, (String, Option<String>)>;

fn lookup(words: &[Word]) -> Lookup {
    words
        .iter()
        .map(|w| (w.id, (w.text.clone(), w.sentence.clone())))
        .collect()
}

/// Terminal line for a playback event, if it deserves one.
fn render_event(event: &PlaybackEvent, words: &Lookup) -> Option<String> {
    match event {
        PlaybackEvent::SessionStarted { items } => Some(format!(
            "Playing {items} word(s). Press Ctrl-C to stop.\n"
        )),
        PlaybackEvent::NowPlaying(NowPlaying::Word(id)) => {
            words.get(id).map(|(text, _)| format!("🔊 {text}"))
        }
        PlaybackEvent::NowPlaying(NowPlaying::Sentence(id)) => words
            .get(id)
            .and_then(|(_, sentence)| sentence.as_ref())
            .map(|s| format!("   {s}")),
        PlaybackEvent::NowPlaying(NowPlaying::Idle) => None,
        PlaybackEvent::SessionFinished { cancelled: true } => Some("\nStopped.".to_string()),
        PlaybackEvent::SessionFinished { cancelled: false } => Some("\nDone.".to_string()),
    }
}

async fn print_events(mut events: UnboundedReceiver<PlaybackEvent>, words: Lookup) {
    while let Some(event) = events.recv().await {
        if let Some(line) = render_event(&event, &words) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn word(text: &str, sentence: Option<&str>) -> Word {
        let now = Utc::now();
        Word {
            id: WordId::new_v4(),
            text: text.to_string(),
            sentence: sentence.map(str::to_string),
            is_favorite: false,
            owner_id: WordId::nil(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_speech_options_flags_override_settings() {
        let settings = Settings {
            speech_rate: Some(1.5),
            muted: Some(false),
            ..Settings::with_defaults()
        };

        let options = speech_options(&settings, &SpeechArgs::default()).unwrap();
        assert!((options.rate() - 1.5).abs() < f32::EPSILON);
        assert!(!options.muted());

        let args = SpeechArgs {
            rate: Some(0.75),
            mute: true,
            silent: false,
        };
        let options = speech_options(&settings, &args).unwrap();
        assert!((options.rate() - 0.75).abs() < f32::EPSILON);
        assert!(options.muted());
    }

    #[test]
    fn test_speech_options_rejects_bad_rate() {
        let args = SpeechArgs {
            rate: Some(0.0),
            ..SpeechArgs::default()
        };
        assert_eq!(
            speech_options(&Settings::with_defaults(), &args),
            Err(PlaybackError::InvalidRate(0.0))
        );
    }

    #[test]
    fn test_render_event() {
        let cat = word("cat", Some("The cat sleeps."));
        let dog = word("dog", None);
        let words = lookup(&[cat.clone(), dog.clone()]);

        assert_eq!(
            render_event(&PlaybackEvent::NowPlaying(NowPlaying::Word(cat.id)), &words).as_deref(),
            Some("🔊 cat")
        );
        assert_eq!(
            render_event(&PlaybackEvent::NowPlaying(NowPlaying::Sentence(cat.id)), &words)
                .as_deref(),
            Some("   The cat sleeps.")
        );
        assert_eq!(
            render_event(&PlaybackEvent::NowPlaying(NowPlaying::Sentence(dog.id)), &words),
            None
        );
        assert_eq!(
            render_event(&PlaybackEvent::NowPlaying(NowPlaying::Idle), &words),
            None
        );
        assert!(
            render_event(&PlaybackEvent::SessionFinished { cancelled: true }, &words)
                .unwrap()
                .contains("Stopped")
        );
    }
}
