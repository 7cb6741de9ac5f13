use super::entity::{Obstacle, Rect};
use rand::Rng;

/// Upper and lower segment around one gap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstaclePair {
    pub upper: Obstacle,
    pub lower: Obstacle,
}

impl ObstaclePair {
    /// Vertical size of the opening between the two segments.
    pub fn gap(&self) -> f32 {
        self.lower.top() - self.upper.bottom()
    }
}

/// Builds a pair at the right edge of the field. The gap is drawn from
/// `[base_gap, 2 * base_gap)` and its offset uniformly over the remaining height.
pub fn spawn_pair<R: Rng + ?Sized>(
    rng: &mut R,
    field_width: f32,
    field_height: f32,
    base_gap: f32,
    width: f32,
) -> ObstaclePair {
    let gap = base_gap + rng.gen::<f32>() * base_gap;
    let upper_h = (rng.gen::<f32>() * (field_height - gap)).floor().max(0.0);
    let lower_y = upper_h + gap;
    ObstaclePair {
        upper: Rect::new(field_width, 0.0, width, upper_h),
        lower: Rect::new(field_width, lower_y, width, field_height - lower_y),
    }
}

/// Ticks between spawns at the given speed; never below one.
#[inline]
pub fn spawn_cadence(base_cadence: f32, speed: f32) -> u64 {
    ((base_cadence / speed).floor() as u64).max(1)
}
