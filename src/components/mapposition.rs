use bevy_ecs::prelude::Component;

use crate::geometry::point::Point;

/// World-space position (pivot) for an entity.
#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Point,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Point::new(x, y),
        }
    }
}
