//! Screen size resource.
//!
//! Stores the framebuffer dimensions in pixels, taken from
//! [`GameConfig`](crate::resources::gameconfig::GameConfig) at startup.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::resources::gameconfig::GameConfig;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl From<&GameConfig> for ScreenSize {
    fn from(config: &GameConfig) -> Self {
        Self {
            w: i32::try_from(config.window_width).unwrap_or(i32::MAX),
            h: i32::try_from(config.window_height).unwrap_or(i32::MAX),
        }
    }
}

impl ScreenSize {
    /// Clamp `point` to the screen rectangle `[0, w] x [0, h]`.
    pub fn clamp(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            point.x.clamp(0.0, self.w as f32),
            point.y.clamp(0.0, self.h as f32),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let screen = ScreenSize { w: 800, h: 600 };
        assert_eq!(screen.clamp(Vector2::new(900.0, -80.0)), Vector2::new(800.0, 0.0));
        assert_eq!(screen.clamp(Vector2::new(-1.0, 700.0)), Vector2::new(0.0, 600.0));
        assert_eq!(screen.clamp(Vector2::new(400.0, 300.0)), Vector2::new(400.0, 300.0));
    }
}
