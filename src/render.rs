//! Frame painter. Reads the game state and issues 2D drawing calls; the
//! browser backend lives in `canvas.rs`, tests record the calls instead.

use crate::constants::*;
use crate::core::{GameState, Mode, Rect};

/// The handful of 2D primitives the game needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn set_fill(&mut self, color: &str);
    fn set_stroke(&mut self, color: &str);
    fn set_font(&mut self, font: &str);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
    /// Advance width of `text` in the current font.
    fn measure_text(&mut self, text: &str) -> f64;
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}

#[inline]
fn fill_box<S: Surface + ?Sized>(s: &mut S, r: &Rect) {
    s.fill_rect(
        r.pos.x as f64,
        r.pos.y as f64,
        r.size.x as f64,
        r.size.y as f64,
    );
}

pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

/// Width of the green part of the countdown bar.
#[inline]
pub fn countdown_fill_width(fraction: f32) -> f64 {
    fraction.clamp(0.0, 1.0) as f64 * BAR_WIDTH
}

pub fn draw_frame<S: Surface + ?Sized>(state: &GameState, s: &mut S) {
    let w = state.field_width() as f64;
    let h = state.field_height() as f64;
    s.clear(w, h);

    s.set_fill(ENTITY_FILL);
    fill_box(s, &state.entity.bounds());

    s.set_fill(OBSTACLE_FILL);
    for o in &state.obstacles {
        fill_box(s, o);
    }

    draw_score(state, s, w);
    draw_countdown(state, s);
    draw_mode(state, s);

    let c = &state.challenge;
    s.set_font(WORD_FONT);
    s.set_fill(c.color.name());
    s.fill_text(c.word.name(), BAR_X + WORD_DX, BAR_Y + WORD_BASELINE_DY);
}

fn draw_score<S: Surface + ?Sized>(state: &GameState, s: &mut S, field_w: f64) {
    let text = score_text(state.score);
    s.set_fill(SCORE_FILL);
    s.set_font(SCORE_FONT);
    let tw = s.measure_text(&text);
    s.fill_text(&text, field_w - tw - SCORE_MARGIN_RIGHT, SCORE_BASELINE_Y);
}

fn draw_countdown<S: Surface + ?Sized>(state: &GameState, s: &mut S) {
    s.set_fill(BAR_EMPTY_FILL);
    s.fill_rect(BAR_X, BAR_Y, BAR_WIDTH, BAR_HEIGHT);
    s.set_fill(BAR_FULL_FILL);
    s.fill_rect(
        BAR_X,
        BAR_Y,
        countdown_fill_width(state.challenge.countdown_fraction()),
        BAR_HEIGHT,
    );

    s.set_stroke(BAR_TICK_STROKE);
    for t in BAR_TICKS {
        let x = BAR_X + t * BAR_WIDTH;
        s.line(x, BAR_Y, x, BAR_Y + BAR_HEIGHT);
    }
}

fn draw_mode<S: Surface + ?Sized>(state: &GameState, s: &mut S) {
    let y = BAR_Y + MODE_BASELINE_DY;
    s.set_font(MODE_FONT);
    s.set_fill(MODE_FILL);
    s.fill_text("Mode =  ", BAR_X, y);
    s.fill_text("Text", BAR_X + MODE_TEXT_DX, y);
    s.fill_text("Color", BAR_X + MODE_COLOR_DX, y);

    // Masks the inactive option.
    let (dx, bw) = match state.challenge.mode {
        Mode::Text => MODE_HIGHLIGHT_TEXT,
        Mode::Color => MODE_HIGHLIGHT_COLOR,
    };
    s.set_fill(MODE_HIGHLIGHT_FILL);
    s.fill_rect(
        BAR_X + dx,
        BAR_Y + MODE_HIGHLIGHT_DY,
        bw,
        MODE_HIGHLIGHT_HEIGHT,
    );
}

/// Painted once on top of the last frame.
pub fn draw_game_over<S: Surface + ?Sized>(state: &GameState, s: &mut S) {
    s.set_fill(GAME_OVER_FILL);
    s.set_font(GAME_OVER_FONT);
    s.fill_text(
        GAME_OVER_TEXT,
        state.field_width() as f64 / 2.0 + GAME_OVER_DX,
        state.field_height() as f64 / 2.0,
    );
}
