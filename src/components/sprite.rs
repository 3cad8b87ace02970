use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key and its size in world units.
/// The origin selects the pivot point (in pixels) relative to the texture's top-left
/// used for placement when rendering.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    /// A sprite whose pivot is the center of the texture.
    pub fn centered(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
            origin: Vector2 {
                x: width * 0.5,
                y: height * 0.5,
            },
        }
    }
}
