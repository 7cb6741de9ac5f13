use crate::core::{GameState, SpeechInput};
use crate::input::InputState;
use crate::render::{self, Surface};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Turns scheduler timestamps (milliseconds) into per-frame deltas.
#[derive(Default, Clone, Copy, Debug)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    /// Zero on the first call; never negative.
    pub fn delta(&mut self, now_ms: f64) -> Duration {
        let dt_ms = match self.last_ms {
            Some(prev) => now_ms - prev,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        if dt_ms.is_finite() && dt_ms > 0.0 {
            Duration::from_secs_f64(dt_ms / 1000.0)
        } else {
            Duration::ZERO
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Halt,
}

pub struct FrameContext<S: Surface> {
    pub game: GameState,
    pub speech: Box<dyn SpeechInput>,
    pub input: Rc<RefCell<InputState>>,
    pub surface: S,
    pub clock: FrameClock,
}

impl<S: Surface> FrameContext<S> {
    pub fn new(
        game: GameState,
        speech: Box<dyn SpeechInput>,
        input: Rc<RefCell<InputState>>,
        surface: S,
    ) -> Self {
        Self {
            game,
            speech,
            input,
            surface,
            clock: FrameClock::default(),
        }
    }

    /// One update and one paint, whatever the delta. Returns `Halt` once the
    /// game is over, after painting the end message.
    pub fn frame(&mut self, timestamp_ms: f64) -> FrameOutcome {
        if self.game.is_over() {
            return FrameOutcome::Halt;
        }
        let dt = self.clock.delta(timestamp_ms);
        let controls = self.input.borrow().controls();
        self.game.update(dt, controls, self.speech.as_mut());
        render::draw_frame(&self.game, &mut self.surface);
        if self.game.is_over() {
            render::draw_game_over(&self.game, &mut self.surface);
            return FrameOutcome::Halt;
        }
        FrameOutcome::Continue
    }
}

#[cfg(target_arch = "wasm32")]
pub fn start_loop<S: Surface + 'static>(frame_ctx: Rc<RefCell<FrameContext<S>>>) {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    type Tick = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    fn request(tick: &Tick) {
        if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }

    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        match frame_ctx.borrow_mut().frame(ts) {
            FrameOutcome::Continue => request(&tick_clone),
            FrameOutcome::Halt => log::info!("[loop] halted"),
        }
    }) as Box<dyn FnMut(f64)>));
    request(&tick);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero_and_ignores_backwards_time() {
        let mut c = FrameClock::default();
        assert_eq!(c.delta(1234.0), Duration::ZERO);
        assert!((c.delta(1250.0).as_secs_f64() - 0.016).abs() < 1e-9);
        assert_eq!(c.delta(1240.0), Duration::ZERO);
        assert_eq!(c.delta(f64::NAN), Duration::ZERO);
    }
}
