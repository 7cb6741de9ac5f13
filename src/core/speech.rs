//! Speech capture as seen by the game.
//!
//! The browser recognizer delivers its notifications asynchronously; adapters
//! queue them and the challenge drains the queue at the start of each update,
//! so the state machine only ever changes inside `GameState::update`.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpeechEvent {
    /// Best-guess transcript of the captured utterance.
    Transcript(String),
    /// The capture session closed, with or without a result.
    Ended,
}

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("speech recognition is not available")]
    Unavailable,
    #[error("speech recognition failed to start: {0}")]
    Start(String),
}

pub trait SpeechInput {
    /// Whether captures can run at all. Challenges are never judged without it.
    fn is_available(&self) -> bool {
        true
    }
    fn start(&mut self) -> Result<(), SpeechError>;
    fn stop(&mut self);
    fn poll(&mut self) -> Option<SpeechEvent>;
}

/// Stand-in used when the platform has no recognizer.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSpeech;

impl SpeechInput for NoSpeech {
    fn is_available(&self) -> bool {
        false
    }
    fn start(&mut self) -> Result<(), SpeechError> {
        Err(SpeechError::Unavailable)
    }
    fn stop(&mut self) {}
    fn poll(&mut self) -> Option<SpeechEvent> {
        None
    }
}
