use std::sync::Arc;

use bevy_ecs::prelude::Component;

use crate::geometry::point::Point;

/// Normalized anchor factor placing the texture center on the sprite position.
pub const ANCHOR_CENTER: f32 = 0.5;

/// Render target for one drawable. The animation driver writes these fields
/// each frame; the rendering back end consumes them when submitting draws.
/// The texture itself lives in the renderer's texture store, addressed by key.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: Arc<str>,
    pub pos: Point,
    pub scale: Point,
    pub anchor: Point,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            tex_key: Arc::from(""),
            pos: Point::zero(),
            scale: Point::new(1.0, 1.0),
            anchor: Point::new(ANCHOR_CENTER, ANCHOR_CENTER),
        }
    }
}
