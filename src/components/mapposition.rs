//! World-space position component.
//!
//! [`MapPosition`] is the pivot of an entity in world coordinates. For boxes
//! and handles the pivot is the center of the sprite, so snapping one entity
//! onto another is a plain copy of `pos`.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// World-space position (pivot) of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    pub fn from_vec(pos: Vector2) -> Self {
        Self { pos }
    }
}
