//! Timed word/color speech challenge.
//!
//! Every interval a new target is drawn and a speech capture starts. The capture
//! is stopped, judged and the resulting penalty lifted at fixed offsets from the
//! start of the cycle. Those offsets live in a small pending list that is aged
//! by the same elapsed time as the countdown, so a run is fully determined by
//! the sequence of frame deltas, the RNG seed and the speech events.

use super::constants::{CAPTURE_WINDOW, CHALLENGE_INTERVAL, JUDGE_AT, PENALTY_END_AT};
use super::speech::{SpeechEvent, SpeechInput};
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

/// Palette shared by the displayed word and the color it is painted in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Hue {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Pink,
    Brown,
    Black,
    White,
}

impl Hue {
    pub const ALL: [Hue; 10] = [
        Hue::Red,
        Hue::Green,
        Hue::Blue,
        Hue::Yellow,
        Hue::Purple,
        Hue::Orange,
        Hue::Pink,
        Hue::Brown,
        Hue::Black,
        Hue::White,
    ];

    /// Lowercase English name; doubles as the CSS color keyword.
    pub fn name(self) -> &'static str {
        match self {
            Hue::Red => "red",
            Hue::Green => "green",
            Hue::Blue => "blue",
            Hue::Yellow => "yellow",
            Hue::Purple => "purple",
            Hue::Orange => "orange",
            Hue::Pink => "pink",
            Hue::Brown => "brown",
            Hue::Black => "black",
            Hue::White => "white",
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Which property of the displayed word the player has to say.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Read the word.
    Text,
    /// Name the ink color.
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Counting,
    Capturing,
    AwaitingJudgment,
    Penalized,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChallengeTiming {
    pub interval: Duration,
    pub capture: Duration,
    pub judge_at: Duration,
    pub penalty_end_at: Duration,
}

impl Default for ChallengeTiming {
    fn default() -> Self {
        Self {
            interval: CHALLENGE_INTERVAL,
            capture: CAPTURE_WINDOW,
            judge_at: JUDGE_AT,
            penalty_end_at: PENALTY_END_AT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    StopCapture,
    Judge,
    EndPenalty,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    remaining: Duration,
    step: Step,
}

#[derive(Clone, Debug)]
pub struct Challenge {
    pub word: Hue,
    pub color: Hue,
    pub mode: Mode,
    timing: ChallengeTiming,
    countdown: Duration,
    phase: Phase,
    capturing: bool,
    utterance: Option<String>,
    // kept ordered by `remaining`
    pending: SmallVec<[Pending; 3]>,
    cycles: u64,
}

impl Challenge {
    /// First challenge: text mode, random target, no capture until the first
    /// regeneration.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, timing: ChallengeTiming) -> Self {
        Self {
            word: Hue::random(rng),
            color: Hue::random(rng),
            mode: Mode::Text,
            timing,
            countdown: timing.interval,
            phase: Phase::Counting,
            capturing: false,
            utterance: None,
            pending: SmallVec::new(),
            cycles: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_penalized(&self) -> bool {
        self.phase == Phase::Penalized
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn countdown(&self) -> Duration {
        self.countdown
    }

    pub fn timing(&self) -> &ChallengeTiming {
        &self.timing
    }

    /// Remaining share of the interval in `[0, 1]`.
    pub fn countdown_fraction(&self) -> f32 {
        let total = self.timing.interval.as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        (self.countdown.as_secs_f32() / total).clamp(0.0, 1.0)
    }

    pub fn utterance(&self) -> Option<&str> {
        self.utterance.as_deref()
    }

    /// Number of regenerations so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The answer expected in the current mode.
    pub fn target(&self) -> Hue {
        match self.mode {
            Mode::Text => self.word,
            Mode::Color => self.color,
        }
    }

    /// Exact comparison; the recognizer adapter is responsible for lowercasing.
    pub fn is_match(&self, heard: Option<&str>) -> bool {
        heard == Some(self.target().name())
    }

    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: Duration,
        rng: &mut R,
        speech: &mut dyn SpeechInput,
    ) {
        self.drain(speech);

        self.countdown = self.countdown.saturating_sub(dt);
        for p in self.pending.iter_mut() {
            p.remaining = p.remaining.saturating_sub(dt);
        }
        while self.pending.first().is_some_and(|p| p.remaining.is_zero()) {
            let p = self.pending.remove(0);
            self.fire(p.step, speech);
        }

        if self.countdown.is_zero() {
            self.regenerate(rng, speech);
        }
    }

    /// Stops a capture that is still running when the game ends.
    pub fn halt(&mut self, speech: &mut dyn SpeechInput) {
        if self.capturing {
            speech.stop();
        }
        self.pending.clear();
    }

    fn drain(&mut self, speech: &mut dyn SpeechInput) {
        while let Some(ev) = speech.poll() {
            match ev {
                SpeechEvent::Transcript(text) => {
                    log::debug!("[speech] recognized {:?}", text);
                    self.utterance = Some(text);
                }
                SpeechEvent::Ended => {
                    self.capturing = false;
                }
            }
        }
    }

    fn fire(&mut self, step: Step, speech: &mut dyn SpeechInput) {
        match step {
            Step::StopCapture => {
                speech.stop();
                log::info!(
                    "[challenge] capture closed, heard {:?}",
                    self.utterance.as_deref().unwrap_or("")
                );
                self.phase = Phase::AwaitingJudgment;
            }
            Step::Judge => {
                if self.is_match(self.utterance.as_deref()) {
                    self.phase = Phase::Counting;
                } else {
                    log::info!(
                        "[challenge] wanted {:?}, penalized",
                        self.target().name()
                    );
                    self.phase = Phase::Penalized;
                }
            }
            Step::EndPenalty => {
                if self.phase == Phase::Penalized {
                    self.phase = Phase::Counting;
                }
            }
        }
    }

    fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R, speech: &mut dyn SpeechInput) {
        self.countdown = self.timing.interval;
        self.cycles += 1;
        self.mode = if rng.gen_bool(0.5) {
            Mode::Text
        } else {
            Mode::Color
        };
        self.word = Hue::random(rng);
        self.color = Hue::random(rng);
        self.utterance = None;
        log::info!(
            "[challenge] cycle {} mode={:?} word={} color={}",
            self.cycles,
            self.mode,
            self.word.name(),
            self.color.name()
        );

        if !speech.is_available() {
            return;
        }
        if !self.capturing {
            match speech.start() {
                Ok(()) => self.capturing = true,
                Err(e) => log::warn!("[speech] {}", e),
            }
        }
        self.phase = Phase::Capturing;
        self.schedule(self.timing.capture, Step::StopCapture);
        self.schedule(self.timing.judge_at, Step::Judge);
        self.schedule(self.timing.penalty_end_at, Step::EndPenalty);
    }

    fn schedule(&mut self, after: Duration, step: Step) {
        let at = self
            .pending
            .iter()
            .position(|p| p.remaining > after)
            .unwrap_or(self.pending.len());
        self.pending.insert(
            at,
            Pending {
                remaining: after,
                step,
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::speech::NoSpeech;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn hue_names_are_lowercase_and_unique() {
        let names: Vec<&str> = Hue::ALL.iter().map(|h| h.name()).collect();
        for (i, n) in names.iter().enumerate() {
            assert_eq!(*n, n.to_lowercase());
            assert!(!names[i + 1..].contains(n));
        }
    }

    #[test]
    fn target_follows_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = Challenge::new(&mut rng, ChallengeTiming::default());
        c.word = Hue::Red;
        c.color = Hue::Blue;
        c.mode = Mode::Text;
        assert!(c.is_match(Some("red")));
        assert!(!c.is_match(Some("blue")));
        c.mode = Mode::Color;
        assert!(c.is_match(Some("blue")));
        assert!(!c.is_match(Some("Blue")));
        assert!(!c.is_match(Some("")));
        assert!(!c.is_match(None));
    }

    #[test]
    fn without_speech_targets_rotate_but_never_penalize() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut c = Challenge::new(&mut rng, ChallengeTiming::default());
        let mut speech = NoSpeech;
        for _ in 0..2_000 {
            c.advance(Duration::from_millis(16), &mut rng, &mut speech);
            assert!(!c.is_penalized());
            assert!(!c.is_capturing());
        }
        assert!(c.cycles() >= 6);
    }
}
