//! Voice I/O boundary.
//!
//! Backends implement [`VoiceIo`]; the round loop only talks to a
//! [`VoiceGateway`], which never lets a backend failure escape. Speech output
//! is best-effort and every listen failure degrades to the `unclear` sentinel.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::warn;

/// Backend selected at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceBackendKind {
    /// Questions are printed, answers are read line by line from stdin.
    Console,
    /// Nothing is spoken and nothing is heard.
    Silent,
}

impl VoiceBackendKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Silent => "silent",
        }
    }
}

impl fmt::Display for VoiceBackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VoiceBackendKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "silent" | "none" => Ok(Self::Silent),
            other => Err(format!("unknown voice backend '{other}'")),
        }
    }
}

/// What a single listen call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListenOutcome {
    Speech(String),
    Timeout,
    Unclear,
    NoSpeechDetected,
}

impl ListenOutcome {
    /// The answer text handed to the scorer; sentinels use their literal names.
    pub fn into_answer(self) -> String {
        match self {
            Self::Speech(text) => text,
            Self::Timeout => "timeout".to_string(),
            Self::Unclear => "unclear".to_string(),
            Self::NoSpeechDetected => "no_speech_detected".to_string(),
        }
    }

    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Self::Speech(text) if !text.trim().is_empty())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceError {
    #[error("voice backend unavailable: {0}")]
    Unavailable(String),
    #[error("speech recognition failed: {0}")]
    Recognition(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Capability interface for speech output and answer capture.
pub trait VoiceIo: Send + Sync {
    fn speak(&self, text: &str) -> Result<(), VoiceError>;

    /// Blocks for at most `timeout` waiting for an answer.
    fn listen(&self, timeout: Duration) -> Result<ListenOutcome, VoiceError>;

    fn is_available(&self) -> bool {
        true
    }
}

/// Error-absorbing wrapper the round loop talks to.
pub struct VoiceGateway {
    backend: Box<dyn VoiceIo>,
}

impl VoiceGateway {
    pub fn new(backend: Box<dyn VoiceIo>) -> Self {
        Self { backend }
    }

    pub fn speak(&self, text: &str) {
        if let Err(err) = self.backend.speak(text) {
            warn!(error = %err, "speech output failed; continuing without audio");
        }
    }

    pub fn listen(&self, timeout: Duration) -> ListenOutcome {
        match self.backend.listen(timeout) {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "listen failed; treating answer as unclear");
                ListenOutcome::Unclear
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.backend.is_available()
    }
}

impl fmt::Debug for VoiceGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VoiceGateway").finish_non_exhaustive()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentVoice;

impl VoiceIo for SilentVoice {
    fn speak(&self, _text: &str) -> Result<(), VoiceError> {
        Ok(())
    }

    fn listen(&self, _timeout: Duration) -> Result<ListenOutcome, VoiceError> {
        Ok(ListenOutcome::NoSpeechDetected)
    }
}

/// Replays prepared answers in order; reports a timeout once they run out.
#[derive(Debug, Default)]
pub struct ScriptedVoice {
    answers: Mutex<VecDeque<ListenOutcome>>,
    spoken: Mutex<Vec<String>>,
}

impl ScriptedVoice {
    pub fn new(answers: impl IntoIterator<Item = ListenOutcome>) -> Self {
        Self {
            answers: Mutex::new(answers.into_iter().collect()),
            spoken: Mutex::new(Vec::new()),
        }
    }

    /// One answer per line; blank lines become silence.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(lines.into_iter().map(|line| {
            let line = line.as_ref().trim();
            if line.is_empty() {
                ListenOutcome::NoSpeechDetected
            } else {
                ListenOutcome::Speech(line.to_string())
            }
        }))
    }

    /// Everything passed to `speak`, in order.
    pub fn spoken(&self) -> Vec<String> {
        match self.spoken.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl VoiceIo for ScriptedVoice {
    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        self.spoken
            .lock()
            .map_err(|_| VoiceError::Unavailable("speech log poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }

    fn listen(&self, _timeout: Duration) -> Result<ListenOutcome, VoiceError> {
        let mut answers = self
            .answers
            .lock()
            .map_err(|_| VoiceError::Unavailable("answer script poisoned".to_string()))?;
        Ok(answers.pop_front().unwrap_or(ListenOutcome::Timeout))
    }
}

impl<V: VoiceIo + ?Sized> VoiceIo for Arc<V> {
    fn speak(&self, text: &str) -> Result<(), VoiceError> {
        self.as_ref().speak(text)
    }

    fn listen(&self, timeout: Duration) -> Result<ListenOutcome, VoiceError> {
        self.as_ref().listen(timeout)
    }

    fn is_available(&self) -> bool {
        self.as_ref().is_available()
    }
}
