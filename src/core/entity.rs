use super::constants::{ENTITY_SIZE, ENTITY_START, GRAVITY, LIFT};
use glam::Vec2;

/// Axis-aligned box in field coordinates (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }
    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// One segment of an obstacle pair.
pub type Obstacle = Rect;

/// The player-controlled object.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub pos: Vec2,
    pub size: Vec2,
    pub velocity: f32,
    pub gravity: f32,
    pub lift: f32,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            pos: ENTITY_START,
            size: ENTITY_SIZE,
            velocity: 0.0,
            gravity: GRAVITY,
            lift: LIFT,
        }
    }
}

impl Entity {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Velocity rule for one tick. Holding ascend replaces the velocity with the
    /// lift impulse, otherwise gravity accumulates.
    pub fn steer(&mut self, ascend: bool) {
        if ascend {
            self.velocity = self.lift;
        } else {
            self.velocity += self.gravity;
        }
    }

    pub fn integrate(&mut self) {
        self.pos.y += self.velocity;
    }
}
