//! Collision detection for the bird
//!
//! The bird is a circle, everything it can hit (obstacles, the floor) is an
//! axis-aligned rectangle described by its centre and full size.

use glam::Vec2;

use crate::consts::*;

use super::state::GameState;

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Clamps the circle centre into the rectangle to find the closest point on
/// (or in) it, then compares that distance with the radius. A centre inside
/// the rectangle collapses the distance to zero.
#[inline]
pub fn circle_intersects_rect(
    circle_center: Vec2,
    radius: f32,
    rect_center: Vec2,
    rect_size: Vec2,
) -> bool {
    let half = rect_size / 2.0;
    let closest = circle_center.clamp(rect_center - half, rect_center + half);
    closest.distance(circle_center) <= radius
}

/// Test the bird against every obstacle and the floor
///
/// Returns true on the first overlap found.
pub fn bird_hits_world(state: &GameState) -> bool {
    let bird = state.bird.entity.position;

    let hits_obstacle = state.obstacle_pairs.iter().any(|pair| {
        [pair.top.position, pair.bottom.position]
            .into_iter()
            .any(|center| {
                circle_intersects_rect(bird, BIRD_COLLISION_RADIUS, center, OBSTACLE_COLLISION_SIZE)
            })
    });

    hits_obstacle
        || circle_intersects_rect(
            bird,
            BIRD_COLLISION_RADIUS,
            FLOOR_COLLISION_POSITION,
            FLOOR_COLLISION_SIZE,
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_center_inside_rect() {
        let rect = Vec2::new(30.0, -20.0);
        assert!(circle_intersects_rect(rect, 0.001, rect, Vec2::new(64.0, 384.0)));
        assert!(circle_intersects_rect(
            rect + Vec2::new(10.0, 100.0),
            1.0,
            rect,
            Vec2::new(64.0, 384.0)
        ));
    }

    #[test]
    fn test_edge_contact() {
        let size = Vec2::new(20.0, 10.0);
        // Right edge at x = 10, circle of radius 5 touching it
        assert!(circle_intersects_rect(Vec2::new(15.0, 0.0), 5.0, Vec2::ZERO, size));
        assert!(!circle_intersects_rect(Vec2::new(15.1, 0.0), 5.0, Vec2::ZERO, size));
    }

    #[test]
    fn test_corner_uses_both_axes() {
        // A tall thin rect: corner at (2, 50). Using the width on both axes
        // would put the corner at (2, 2) and miss this circle.
        let size = Vec2::new(4.0, 100.0);
        assert!(circle_intersects_rect(Vec2::new(4.0, 51.0), 3.0, Vec2::ZERO, size));
        // Diagonal just beyond the corner
        assert!(!circle_intersects_rect(Vec2::new(5.0, 53.0), 3.0, Vec2::ZERO, size));
    }

    #[test]
    fn test_far_along_axis_misses() {
        let size = Vec2::new(64.0, 384.0);
        let radius = 12.0;
        assert!(!circle_intersects_rect(Vec2::new(32.0 + radius + 0.5, 0.0), radius, Vec2::ZERO, size));
        assert!(!circle_intersects_rect(Vec2::new(0.0, -192.0 - radius - 0.5), radius, Vec2::ZERO, size));
    }

    #[test]
    fn test_bird_hits_floor() {
        let mut state = GameState::new(1);
        state.bird.entity.position = FLOOR_COLLISION_POSITION;
        assert!(bird_hits_world(&state));
    }

    #[test]
    fn test_bird_in_gap_is_clear() {
        let mut state = GameState::new(1);
        let pair = state.obstacle_pairs[0];
        let gap_center = (pair.top.position.y + pair.bottom.position.y) / 2.0;
        state.bird.entity.position = Vec2::new(pair.x, gap_center);
        assert!(!bird_hits_world(&state));
    }

    proptest! {
        #[test]
        fn test_translation_invariant(
            cx in -200.0f32..200.0,
            cy in -200.0f32..200.0,
            radius in 0.5f32..30.0,
            w in 1.0f32..100.0,
            h in 1.0f32..100.0,
            // Small integer shifts keep the float math exact
            tx in -64i32..64,
            ty in -64i32..64,
        ) {
            let circle = Vec2::new(cx.round(), cy.round());
            let size = Vec2::new(w.round().max(1.0), h.round().max(1.0)) * 2.0;
            let shift = Vec2::new(tx as f32, ty as f32);

            prop_assert_eq!(
                circle_intersects_rect(circle, radius, Vec2::ZERO, size),
                circle_intersects_rect(circle + shift, radius, shift, size)
            );
        }

        #[test]
        fn test_center_always_hits(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            radius in 0.001f32..50.0,
            w in 0.0f32..400.0,
            h in 0.0f32..400.0,
        ) {
            let center = Vec2::new(x, y);
            prop_assert!(circle_intersects_rect(center, radius, center, Vec2::new(w, h)));
        }
    }
}
