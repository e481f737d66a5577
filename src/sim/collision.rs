//! Collision detection between axis-aligned boxes
//!
//! Everything in the field is a rectangle, so a single overlap test covers
//! player-vs-obstacle. Touching edges count as a hit.

use glam::Vec2;

/// Axis-aligned rectangle in field units (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
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

/// Check whether two rectangles overlap
///
/// Only strict separation on one axis counts as a miss; rectangles whose
/// edges touch are reported as overlapping.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.left() > b.right() || a.right() < b.left() || a.top() > b.bottom() || a.bottom() < b.top())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_overlap_partial() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_overlap_contained() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_touching_edges_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the vertical edge x = 10
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        // Shares the horizontal edge y = 10
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        // Shares only the corner (10, 10)
        let corner = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(overlaps(&a, &right));
        assert!(overlaps(&a, &below));
        assert!(overlaps(&a, &corner));
    }

    #[test]
    fn test_separated() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &Rect::new(10.5, 0.0, 10.0, 10.0)));
        assert!(!overlaps(&a, &Rect::new(0.0, -20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_cow_clears_fence_at_jump_apex() {
        use crate::consts::*;
        // Apex of a default jump is ~262 units above the ground line
        let cow = Rect::new(PLAYER_X, PLAYER_GROUND_Y - 200.0, PLAYER_WIDTH, PLAYER_HEIGHT);
        let fence = Rect::new(PLAYER_X, OBSTACLE_GROUND_Y, OBSTACLE_WIDTH, OBSTACLE_HEIGHT);
        assert!(!overlaps(&cow, &fence));
    }

    fn rect() -> impl Strategy<Value = Rect> {
        (-500.0f32..500.0, -500.0f32..500.0, 0.0f32..200.0, 0.0f32..200.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect(), b in rect()) {
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_rect_overlaps_itself(a in rect()) {
            prop_assert!(overlaps(&a, &a));
        }
    }
}
