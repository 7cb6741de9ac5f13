use glam::Vec2;
use std::time::Duration;

// Gameplay tuning shared by the update step and the tests.
// Physics values are per tick (one tick per animation frame), not per second.

// Entity
pub const ENTITY_START: Vec2 = Vec2::new(50.0, 150.0);
pub const ENTITY_SIZE: Vec2 = Vec2::new(20.0, 20.0);
pub const GRAVITY: f32 = 0.08; // added to velocity each tick while falling
pub const LIFT: f32 = -2.2; // velocity while ascend is held

// Obstacles
pub const OBSTACLE_WIDTH: f32 = 20.0;
pub const BASE_GAP: f32 = 150.0; // gap is drawn from [BASE_GAP, 2 * BASE_GAP)
pub const BASE_SPAWN_CADENCE: f32 = 200.0; // ticks between pairs at speed 1.0
pub const SCROLL_PER_TICK: f32 = 1.5; // scaled by the speed multiplier

// Difficulty ramp
pub const START_SPEED: f32 = 1.0;
pub const SPEED_STEP: f32 = 0.0001;

// Challenge cycle, measured from the moment a challenge is regenerated
pub const CHALLENGE_INTERVAL: Duration = Duration::from_secs(5);
pub const CAPTURE_WINDOW: Duration = Duration::from_secs(3);
pub const JUDGE_AT: Duration = Duration::from_secs(4);
pub const PENALTY_END_AT: Duration = Duration::from_secs(5);

// Field size used when the canvas does not report one
pub const DEFAULT_FIELD_WIDTH: f32 = 400.0;
pub const DEFAULT_FIELD_HEIGHT: f32 = 600.0;
