//! Screen-space position component for UI elements.
//!
//! Entities with [`ScreenPosition`] are drawn in window pixels and ignore the
//! world layout. Buttons use it for their top-left corner.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
