use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;

/// Axis-aligned rectangle: a position plus width and height in world units.
/// Width and height are expected to be non-negative; not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Component, Serialize, Deserialize)]
pub struct RectBox {
    pub pos: Point,
    pub width: f32,
    pub height: f32,
}

impl RectBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Right edge.
    pub fn x2(&self) -> f32 {
        self.pos.x + self.width
    }

    /// Bottom edge.
    pub fn y2(&self) -> f32 {
        self.pos.y + self.height
    }
}
