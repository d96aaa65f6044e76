//! Drives the handlers against a real on-disk database.

use std::time::Duration;

use pronounced_cli::handlers;
use pronounced_cli::{CliConfig, CliContext, CliError, SpeechArgs, bootstrap};
use pronounced_playback::PlaybackConfig;

async fn context(dir: &tempfile::TempDir) -> CliContext {
    bootstrap(CliConfig {
        database_path: dir.path().join("data").join("pronounced.db"),
        playback: PlaybackConfig::default()
            .with_word_settle(Duration::ZERO)
            .with_sentence_settle(Duration::ZERO),
    })
    .await
    .unwrap()
}

fn silent() -> SpeechArgs {
    SpeechArgs {
        rate: Some(10.0),
        mute: true,
        silent: true,
    }
}

#[tokio::test]
async fn word_commands_require_login() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    let err = handlers::list::execute(&ctx, None, false).await.unwrap_err();
    let err = CliError::from_anyhow(err);
    assert_eq!(err.exit_code(), 77);
}

#[tokio::test]
async fn add_edit_favorite_and_play() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;

    handlers::auth::login(&ctx, "learner@example.com", Some("Learner"))
        .await
        .unwrap();
    handlers::add::execute(&ctx, "cat", Some("The cat sleeps."), false)
        .await
        .unwrap();
    handlers::add::execute(&ctx, "dog", None, false).await.unwrap();

    let words = ctx.app().words().list().await.unwrap();
    let dog = words.iter().find(|w| w.text == "dog").unwrap();
    let prefix = dog.id.to_string()[..8].to_string();

    handlers::edit::execute(&ctx, &prefix, None, Some("I walk my dog.".into()), false)
        .await
        .unwrap();
    handlers::favorite::execute(&ctx, &prefix).await.unwrap();

    let dog = ctx.app().words().get(dog.id).await.unwrap();
    assert_eq!(dog.sentence.as_deref(), Some("I walk my dog."));
    assert!(dog.is_favorite);

    handlers::list::execute(&ctx, Some("dog"), false).await.unwrap();
    handlers::playback::play_all(&ctx, None, &silent()).await.unwrap();
    handlers::playback::say(&ctx, &prefix, true, &silent())
        .await
        .unwrap();

    handlers::remove::execute(&ctx, &prefix, true).await.unwrap();
    assert_eq!(ctx.app().words().list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn edit_without_changes_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;
    handlers::auth::login(&ctx, "learner@example.com", None)
        .await
        .unwrap();

    let err = handlers::edit::execute(&ctx, "abc", None, None, false)
        .await
        .unwrap_err();
    assert_eq!(CliError::from_anyhow(err).exit_code(), 2);
}

#[tokio::test]
async fn unknown_word_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;
    handlers::auth::login(&ctx, "learner@example.com", None)
        .await
        .unwrap();

    let err = handlers::favorite::execute(&ctx, "ffffffff").await.unwrap_err();
    assert_eq!(CliError::from_anyhow(err).exit_code(), 66);
}

#[tokio::test]
async fn invalid_rate_is_rejected_before_playing() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = context(&dir).await;
    handlers::auth::login(&ctx, "learner@example.com", None)
        .await
        .unwrap();
    handlers::add::execute(&ctx, "cat", None, false).await.unwrap();

    let args = SpeechArgs {
        rate: Some(50.0),
        ..silent()
    };
    let err = handlers::playback::play_all(&ctx, None, &args)
        .await
        .unwrap_err();
    assert_eq!(CliError::from_anyhow(err).exit_code(), 2);
}
