// Host-side tests for the loop driver.

mod common;

use chroma_flap::constants::GAME_OVER_TEXT;
use chroma_flap::core::{GameConfig, GameState, NoSpeech};
use chroma_flap::frame::{FrameContext, FrameOutcome};
use chroma_flap::input::InputState;
use common::{Call, RecordingSurface};
use std::cell::RefCell;
use std::rc::Rc;

fn context(seed: u64) -> (FrameContext<RecordingSurface>, Rc<RefCell<InputState>>) {
    let input = Rc::new(RefCell::new(InputState::default()));
    let ctx = FrameContext::new(
        GameState::new(GameConfig::default(), seed),
        Box::new(NoSpeech),
        input.clone(),
        RecordingSurface::default(),
    );
    (ctx, input)
}

#[test]
fn each_frame_updates_once_and_paints() {
    let (mut ctx, _) = context(1);
    assert_eq!(ctx.frame(1_000.0), FrameOutcome::Continue);
    assert_eq!(ctx.game.tick, 1);
    assert_eq!(ctx.frame(1_016.0), FrameOutcome::Continue);
    assert_eq!(ctx.game.tick, 2);
    let clears = ctx
        .surface
        .calls
        .iter()
        .filter(|c| matches!(c, Call::Clear(..)))
        .count();
    assert_eq!(clears, 2);
}

#[test]
fn first_frame_has_no_elapsed_time() {
    let (mut ctx, _) = context(2);
    ctx.frame(90_000.0);
    assert_eq!(ctx.game.challenge.cycles(), 0);
    assert_eq!(ctx.game.challenge.countdown(), std::time::Duration::from_secs(5));
}

#[test]
fn large_gap_still_runs_a_single_update() {
    let (mut ctx, _) = context(3);
    ctx.frame(0.0);
    ctx.frame(60_000.0);
    assert_eq!(ctx.game.tick, 2);
    assert_eq!(ctx.game.challenge.cycles(), 1);
}

#[test]
fn held_input_reaches_the_update() {
    let (mut ctx, input) = context(4);
    input.borrow_mut().key_down("ArrowUp");
    ctx.frame(0.0);
    assert!(ctx.game.entity.pos.y < 150.0);
    input.borrow_mut().key_up("ArrowUp");
    ctx.frame(16.0);
    ctx.frame(32.0);
    assert!(ctx.game.entity.velocity > ctx.game.entity.lift);
}

#[test]
fn halts_after_painting_game_over_once() {
    let (mut ctx, _) = context(5);
    let mut ts = 0.0;
    let mut frames = 0;
    while ctx.frame(ts) == FrameOutcome::Continue {
        ts += 16.0;
        frames += 1;
        assert!(frames < 10_000);
    }
    let tick = ctx.game.tick;
    assert_eq!(ctx.frame(ts + 16.0), FrameOutcome::Halt);
    assert_eq!(ctx.frame(ts + 32.0), FrameOutcome::Halt);
    assert_eq!(ctx.game.tick, tick);

    let game_over = ctx
        .surface
        .texts()
        .iter()
        .filter(|t| t.0 == GAME_OVER_TEXT)
        .count();
    assert_eq!(game_over, 1);
    assert_eq!(
        ctx.surface.calls.last(),
        Some(&Call::Text(GAME_OVER_TEXT.to_string(), 100.0, 300.0))
    );
}
