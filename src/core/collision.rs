use super::entity::Rect;

/// What ended the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collision {
    Obstacle,
    Ceiling,
    Floor,
}

/// Strict overlap: boxes that only touch along an edge do not collide.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

pub fn hits_any(entity: &Rect, obstacles: &[Rect]) -> bool {
    obstacles.iter().any(|o| overlaps(entity, o))
}

pub fn out_of_bounds(entity: &Rect, field_height: f32) -> Option<Collision> {
    if entity.bottom() > field_height {
        Some(Collision::Floor)
    } else if entity.top() < 0.0 {
        Some(Collision::Ceiling)
    } else {
        None
    }
}

/// Obstacles are checked before the field bounds.
pub fn detect(entity: &Rect, obstacles: &[Rect], field_height: f32) -> Option<Collision> {
    if hits_any(entity, obstacles) {
        return Some(Collision::Obstacle);
    }
    out_of_bounds(entity, field_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&a, &c));
        assert!(overlaps(&a, &Rect::new(9.5, 9.5, 1.0, 1.0)));
    }

    #[test]
    fn bounds_are_exclusive_at_the_edges() {
        assert_eq!(out_of_bounds(&Rect::new(0.0, 0.0, 20.0, 20.0), 100.0), None);
        assert_eq!(out_of_bounds(&Rect::new(0.0, 80.0, 20.0, 20.0), 100.0), None);
        assert_eq!(
            out_of_bounds(&Rect::new(0.0, 80.5, 20.0, 20.0), 100.0),
            Some(Collision::Floor)
        );
        assert_eq!(
            out_of_bounds(&Rect::new(0.0, -0.1, 20.0, 20.0), 100.0),
            Some(Collision::Ceiling)
        );
    }

    #[test]
    fn obstacle_wins_over_bounds() {
        let e = Rect::new(0.0, -5.0, 20.0, 20.0);
        let o = [Rect::new(5.0, 0.0, 20.0, 50.0)];
        assert_eq!(detect(&e, &o, 100.0), Some(Collision::Obstacle));
        assert_eq!(detect(&e, &[], 100.0), Some(Collision::Ceiling));
    }
}
