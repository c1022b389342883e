//! Procedural obstacle placement

use rand::Rng;

use super::state::ObstaclePair;
use crate::consts::*;

/// Move a pair to `x` with a freshly rolled gap height
///
/// Both obstacles get a version bump so the renderer snaps them into place.
/// The bottom obstacle is mirrored vertically for drawing only; collision
/// always uses [`OBSTACLE_COLLISION_SIZE`] for both.
pub fn place_pair<R: Rng + ?Sized>(pair: &mut ObstaclePair, x: f32, rng: &mut R) {
    pair.top.bump_version();
    pair.bottom.bump_version();

    let y = rng.random_range(-OBSTACLE_Y_RANGE..=OBSTACLE_Y_RANGE);
    let offset = OBSTACLE_SIZE.y / 2.0 + OBSTACLE_GAP / 2.0;

    pair.x = x;
    pair.top.position.x = x;
    pair.top.position.y = y + offset;
    pair.bottom.position.x = x;
    pair.bottom.position.y = y - offset;
    pair.bottom.scale.y = -1.0;
}

/// Keep both obstacles on the pair's shared coordinate
#[inline]
pub fn sync_pair(pair: &mut ObstaclePair) {
    pair.top.position.x = pair.x;
    pair.bottom.position.x = pair.x;
}

/// True once the pair's right edge has left the view
#[inline]
pub fn is_offscreen(pair: &ObstaclePair) -> bool {
    pair.x + OBSTACLE_SIZE.x / 2.0 <= -HALF_VIEW_WIDTH
}
