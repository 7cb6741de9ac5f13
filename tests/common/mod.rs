// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]

use chroma_flap::core::{SpeechError, SpeechEvent, SpeechInput};
use chroma_flap::render::Surface;
use std::collections::VecDeque;

/// Recognizer that records calls and answers from a queue. `stop` emits the
/// session-ended notification unless `ignore_stop` is set.
#[derive(Default)]
pub struct ScriptedSpeech {
    pub queue: VecDeque<SpeechEvent>,
    pub starts: usize,
    pub stops: usize,
    pub active: bool,
    pub fail_start: bool,
    pub ignore_stop: bool,
}

impl ScriptedSpeech {
    pub fn say(&mut self, text: &str) {
        self.queue.push_back(SpeechEvent::Transcript(text.to_string()));
    }
}

impl SpeechInput for ScriptedSpeech {
    fn start(&mut self) -> Result<(), SpeechError> {
        if self.fail_start {
            return Err(SpeechError::Start("InvalidStateError".into()));
        }
        self.starts += 1;
        self.active = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.stops += 1;
        if self.active && !self.ignore_stop {
            self.active = false;
            self.queue.push_back(SpeechEvent::Ended);
        }
    }

    fn poll(&mut self) -> Option<SpeechEvent> {
        self.queue.pop_front()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Clear(f64, f64),
    Fill(String),
    Stroke(String),
    Font(String),
    Rect(f64, f64, f64, f64),
    Line(f64, f64, f64, f64),
    Text(String, f64, f64),
}

/// Surface that logs every call. Text measures 10 px per byte.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<Call>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<(String, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Text(t, x, y) => Some((t.clone(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    pub fn rects(&self) -> Vec<(f64, f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                Call::Rect(x, y, w, h) => Some((*x, *y, *w, *h)),
                _ => None,
            })
            .collect()
    }

    /// Fill color in effect when `text` was drawn.
    pub fn fill_for_text(&self, text: &str) -> Option<String> {
        let mut fill = None;
        for c in &self.calls {
            match c {
                Call::Fill(f) => fill = Some(f.clone()),
                Call::Text(t, _, _) if t == text => return fill,
                _ => {}
            }
        }
        None
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.calls.push(Call::Clear(width, height));
    }
    fn set_fill(&mut self, color: &str) {
        self.calls.push(Call::Fill(color.to_string()));
    }
    fn set_stroke(&mut self, color: &str) {
        self.calls.push(Call::Stroke(color.to_string()));
    }
    fn set_font(&mut self, font: &str) {
        self.calls.push(Call::Font(font.to_string()));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(Call::Rect(x, y, w, h));
    }
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        self.calls.push(Call::Line(x0, y0, x1, y1));
    }
    fn measure_text(&mut self, text: &str) -> f64 {
        10.0 * text.len() as f64
    }
    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        self.calls.push(Call::Text(text.to_string(), x, y));
    }
}
