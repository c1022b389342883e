//! Presentation layer
//!
//! Produces backend-agnostic draw lists; issuing draw calls is up to the host.

pub mod drawables;
pub mod projection;
pub mod shapes;

use std::path::PathBuf;

use crate::platform::Platform;

pub use drawables::{DebugShape, Drawable, ShapeKind, Sprite, TextLabel, TextureId};
pub use projection::populate;

/// Where each texture should be loaded from on this platform
pub fn texture_paths(platform: &dyn Platform) -> Vec<(TextureId, PathBuf)> {
    TextureId::ALL
        .iter()
        .map(|id| (*id, platform.asset_path(id.file_name())))
        .collect()
}
