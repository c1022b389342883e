//! Versioned 2D transforms
//!
//! Every scrolling thing in the world is an [`Entity`]. The version counter is
//! bumped whenever an entity jumps (recycled off the left edge, re-placed on
//! reset) so the renderer knows to snap instead of blending across the jump.

use glam::{Mat4, Quat, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub version: u32,
    pub position: Vec2,
    /// Radians, counter-clockwise
    pub rotation: f32,
    pub scale: Vec2,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            version: 0,
            position: Vec2::ZERO,
            rotation: 0.0,
            scale: Vec2::ONE,
        }
    }
}

impl Entity {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Mark a discontinuous move
    #[inline]
    pub fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }

    /// Blend between `previous` (alpha = 0) and `self` (alpha = 1)
    ///
    /// Versions that differ mean the entity was recycled between the two
    /// snapshots; `self` is returned untouched. `alpha` is not clamped.
    pub fn interpolate(&self, previous: &Entity, alpha: f32) -> Entity {
        if self.version != previous.version {
            return *self;
        }

        Entity {
            version: self.version,
            position: previous.position.lerp(self.position, alpha),
            rotation: previous.rotation + (self.rotation - previous.rotation) * alpha,
            scale: previous.scale.lerp(self.scale, alpha),
        }
    }

    /// translate * rotate * scale
    pub fn to_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale.extend(1.0),
            Quat::from_rotation_z(self.rotation),
            self.position.extend(0.0),
        )
    }
}
