//! Renderer-facing output types
//!
//! The projection fills a `Vec<Drawable>` each frame in back-to-front order.
//! Sprites carry only a texture and a world transform; the renderer scales by
//! the texture's own pixel size.

use glam::{Mat4, Vec2};

use super::shapes;

/// Textures the game draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureId {
    Sky,
    Cloud1,
    Cloud2,
    Hills,
    Pipe,
    Ground,
    Bird,
}

impl TextureId {
    pub const ALL: [TextureId; 7] = [
        TextureId::Sky,
        TextureId::Cloud1,
        TextureId::Cloud2,
        TextureId::Hills,
        TextureId::Pipe,
        TextureId::Ground,
        TextureId::Bird,
    ];

    /// File name under the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            TextureId::Sky => "sky.png",
            TextureId::Cloud1 => "cloud_1.png",
            TextureId::Cloud2 => "cloud_2.png",
            TextureId::Hills => "hills.png",
            TextureId::Pipe => "pipe.png",
            TextureId::Ground => "ground.png",
            TextureId::Bird => "bird.png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    pub transform: Mat4,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    /// Centre of the rendered string
    pub position: Vec2,
    pub colour: [f32; 4],
    pub scale: f32,
}

/// Geometry of a debug overlay shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugShape {
    pub position: Vec2,
    pub colour: [f32; 4],
    pub kind: ShapeKind,
}

impl DebugShape {
    /// Closed outline as a line loop, circles split into `segments` edges
    pub fn outline(&self, segments: u32) -> Vec<Vec2> {
        match self.kind {
            ShapeKind::Rectangle { width, height } => {
                shapes::rect_outline(self.position, Vec2::new(width, height))
            }
            ShapeKind::Circle { radius } => shapes::circle_outline(self.position, radius, segments),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Sprite(Sprite),
    Text(TextLabel),
    Debug(DebugShape),
}

/// Colors for overlay elements
pub mod colors {
    pub const DEBUG_HIT: [f32; 4] = [1.0, 0.0, 0.0, 0.5];
    pub const DEBUG_CLEAR: [f32; 4] = [0.0, 1.0, 0.0, 0.5];
    pub const DEBUG_SOLID: [f32; 4] = [0.0, 0.0, 1.0, 0.5];
}
