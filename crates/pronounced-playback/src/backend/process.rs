//! Speech through an external synthesizer process.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;

use pronounced_core::{CompletionCallback, SpeechBackend, SpeechOutcome, Utterance};
use tokio::process::Command;
use tokio::runtime::Handle;
use tokio::sync::oneshot;

use super::InFlight;
use crate::error::PlaybackError;

/// Words per minute at rate 1.0, the espeak and `say` default.
const BASE_WPM: f32 = 175.0;

/// espeak rejects speeds outside this range.
const ESPEAK_WPM_RANGE: (f32, f32) = (80.0, 450.0);

/// Supported command-line synthesizers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthEngine {
    EspeakNg,
    Espeak,
    /// macOS `say`.
    Say,
}

impl SynthEngine {
    /// Detection order.
    pub const ALL: [Self; 3] = [Self::EspeakNg, Self::Espeak, Self::Say];

    #[must_use]
    pub const fn program(self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::Say => "say",
        }
    }

    /// Command-line arguments for speaking `utterance`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn args(self, utterance: &Utterance) -> Vec<String> {
        let wpm = BASE_WPM * utterance.rate;
        let volume = utterance.volume.clamp(0.0, 1.0);
        let text = guard_leading_dash(&utterance.text);
        match self {
            Self::EspeakNg | Self::Espeak => {
                let wpm = wpm.clamp(ESPEAK_WPM_RANGE.0, ESPEAK_WPM_RANGE.1).round() as u32;
                let amplitude = (volume * 100.0).round() as u32;
                vec![
                    "-s".into(),
                    wpm.to_string(),
                    "-a".into(),
                    amplitude.to_string(),
                    text,
                ]
            }
            Self::Say => {
                let wpm = wpm.max(1.0).round() as u32;
                vec![
                    "-r".into(),
                    wpm.to_string(),
                    format!("[[volm {volume:.2}]] {text}"),
                ]
            }
        }
    }
}

impl fmt::Display for SynthEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Keep text from being parsed as an option.
fn guard_leading_dash(text: &str) -> String {
    if text.starts_with('-') {
        format!(" {text}")
    } else {
        text.to_string()
    }
}

/// First synthesizer on the search path `path_var` that can actually run.
fn locate(path_var: Option<&OsStr>) -> Option<(SynthEngine, PathBuf)> {
    SynthEngine::ALL.into_iter().find_map(|engine| {
        let found = match path_var {
            Some(paths) => which::which_in(engine.program(), Some(paths), "."),
            None => which::which(engine.program()),
        };
        found.ok().map(|program| (engine, program))
    })
}

/// Backend that runs one synthesizer process per utterance.
///
/// Starting an utterance kills the previous process; `cancel_all` kills the
/// current one. Spawn and exit failures are reported as
/// [`SpeechOutcome::Failed`].
#[derive(Debug, Clone)]
pub struct ProcessSpeechBackend {
    engine: SynthEngine,
    program: PathBuf,
    in_flight: Arc<InFlight>,
}

impl ProcessSpeechBackend {
    /// Use `engine` with an explicit program path.
    pub fn with_program(engine: SynthEngine, program: impl AsRef<Path>) -> Self {
        Self {
            engine,
            program: program.as_ref().to_path_buf(),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    /// Pick the first executable synthesizer found on `PATH`.
    pub fn detect() -> Result<Self, PlaybackError> {
        locate(None)
            .map(|(engine, program)| Self::with_program(engine, program))
            .ok_or_else(|| {
                let tried: Vec<&str> = SynthEngine::ALL.iter().map(|e| e.program()).collect();
                PlaybackError::NoSynthesizer(tried.join(", "))
            })
    }

    #[must_use]
    pub const fn engine(&self) -> SynthEngine {
        self.engine
    }

    fn command(&self, utterance: &Utterance) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(self.engine.args(utterance))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

async fn run_to_completion(mut cmd: Command, stop: oneshot::Receiver<()>) -> SpeechOutcome {
    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => return SpeechOutcome::Failed(format!("failed to start synthesizer: {e}")),
    };

    tokio::select! {
        status = child.wait() => match status {
            Ok(status) if status.success() => SpeechOutcome::Finished,
            Ok(status) => SpeechOutcome::Failed(format!("synthesizer exited with {status}")),
            Err(e) => SpeechOutcome::Failed(e.to_string()),
        },
        _ = stop => {
            if let Err(e) = child.kill().await {
                tracing::debug!(error = %e, "Synthesizer already exited");
            }
            SpeechOutcome::Interrupted
        }
    }
}

impl SpeechBackend for ProcessSpeechBackend {
    fn speak(&self, utterance: Utterance, on_done: CompletionCallback) {
        let Ok(handle) = Handle::try_current() else {
            on_done(SpeechOutcome::Failed("no async runtime".into()));
            return;
        };

        let cmd = self.command(&utterance);
        let (id, stop) = self.in_flight.begin();
        let in_flight = Arc::clone(&self.in_flight);
        handle.spawn(async move {
            let outcome = run_to_completion(cmd, stop).await;
            in_flight.finish(id);
            on_done(outcome);
        });
    }

    fn cancel_all(&self) {
        self.in_flight.cancel();
    }

    fn name(&self) -> &'static str {
        self.engine.program()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::completion_pair;

    #[test]
    fn test_espeak_args_scale_rate_and_volume() {
        let args = SynthEngine::EspeakNg.args(&Utterance::new("cat", 1.5, 0.0));
        assert_eq!(args, ["-s", "263", "-a", "0", "cat"]);

        let args = SynthEngine::Espeak.args(&Utterance::new("cat", 0.1, 1.0));
        assert_eq!(args, ["-s", "80", "-a", "100", "cat"]);
    }

    #[test]
    fn test_say_args_embed_volume() {
        let args = SynthEngine::Say.args(&Utterance::new("The cat sleeps.", 1.0, 1.0));
        assert_eq!(args, ["-r", "175", "[[volm 1.00]] The cat sleeps."]);
    }

    #[test]
    fn test_leading_dash_is_not_an_option() {
        let args = SynthEngine::EspeakNg.args(&Utterance::new("-ish", 1.0, 1.0));
        assert_eq!(args.last().map(String::as_str), Some(" -ish"));
    }

    #[cfg(unix)]
    #[test]
    fn test_locate_skips_files_that_cannot_run() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let espeak_ng = dir.path().join("espeak-ng");
        std::fs::write(&espeak_ng, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&espeak_ng, std::fs::Permissions::from_mode(0o644)).unwrap();

        let path_var = dir.path().as_os_str();
        assert_eq!(locate(Some(path_var)), None);

        let say = dir.path().join("say");
        std::fs::write(&say, b"#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&say, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_eq!(locate(Some(path_var)), Some((SynthEngine::Say, say)));
    }

    #[test]
    fn test_locate_in_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(locate(Some(dir.path().as_os_str())), None);
    }

    #[tokio::test]
    async fn test_missing_program_reports_failure() {
        let backend = ProcessSpeechBackend::with_program(
            SynthEngine::EspeakNg,
            "/nonexistent/pronounced/espeak-ng",
        );
        let (done, completion) = completion_pair();
        backend.speak(Utterance::new("cat", 1.0, 1.0), done);
        assert!(matches!(completion.await, SpeechOutcome::Failed(_)));
    }
}
