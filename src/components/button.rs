//! Clickable text buttons.
//!
//! A [`Button`] is a screen-space label with a fixed hit rectangle. The
//! [`button_system`](crate::systems::button::button_system) tracks hover
//! state and fires a
//! [`ButtonPressedEvent`](crate::events::button::ButtonPressedEvent) when an
//! enabled button is clicked.

use bevy_ecs::prelude::Component;
use raylib::prelude::{Color, Vector2};

use crate::resources::screensize::ScreenSize;

/// Space left between a button and the box it is placed next to.
const BESIDE_GAP: f32 = 4.0;

/// What a button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    /// Spawn a new box at the configured spawn point.
    NewBox,
    /// Spawn a wire starting at the last clicked box.
    AddWire,
}

#[derive(Component, Clone, Debug)]
pub struct Button {
    pub label: String,
    pub action: ButtonAction,
    /// Hit rectangle size, measured from the button's top-left corner.
    pub size: Vector2,
    pub font_size: i32,
    /// Disabled buttons are neither drawn nor clickable.
    pub enabled: bool,
    pub hovered: bool,
    pub normal_color: Color,
    pub hover_color: Color,
}

impl Button {
    pub fn new(label: impl Into<String>, action: ButtonAction, size: Vector2) -> Self {
        Self {
            label: label.into(),
            action,
            size,
            font_size: 16,
            enabled: true,
            hovered: false,
            normal_color: Color::WHITE,
            hover_color: Color::new(0x99, 0x99, 0x99, 0xff),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Color to draw the label with, given the hover state.
    pub fn color(&self) -> Color {
        if self.hovered {
            self.hover_color
        } else {
            self.normal_color
        }
    }

    /// Whether `point` falls inside the button placed at `top_left`.
    pub fn contains(&self, top_left: Vector2, point: Vector2) -> bool {
        point.x >= top_left.x
            && point.x <= top_left.x + self.size.x
            && point.y >= top_left.y
            && point.y <= top_left.y + self.size.y
    }

    /// Top-left corner that places the button next to the `(min, max)` box.
    ///
    /// Goes to the right of the box, or to its left when the right side
    /// would leave the screen, vertically centered and kept on screen.
    pub fn beside(&self, (min, max): (Vector2, Vector2), screen: &ScreenSize) -> Vector2 {
        let right = max.x + BESIDE_GAP;
        let x = if right + self.size.x <= screen.w as f32 {
            right
        } else {
            min.x - BESIDE_GAP - self.size.x
        };
        let y = (min.y + max.y) * 0.5 - self.size.y * 0.5;
        Vector2::new(
            x.clamp(0.0, (screen.w as f32 - self.size.x).max(0.0)),
            y.clamp(0.0, (screen.h as f32 - self.size.y).max(0.0)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let b = Button::new("New Box", ButtonAction::NewBox, Vector2::new(80.0, 16.0));
        let tl = Vector2::new(720.0, 2.0);
        assert!(b.contains(tl, Vector2::new(720.0, 2.0)));
        assert!(b.contains(tl, Vector2::new(799.0, 17.0)));
        assert!(!b.contains(tl, Vector2::new(719.0, 10.0)));
        assert!(!b.contains(tl, Vector2::new(750.0, 19.0)));
    }

    #[test]
    fn test_hover_color() {
        let mut b = Button::new("Add Wire", ButtonAction::AddWire, Vector2::new(80.0, 16.0));
        assert_eq!(b.color(), Color::WHITE);
        b.hovered = true;
        assert_eq!(b.color(), Color::new(0x99, 0x99, 0x99, 0xff));
    }

    #[test]
    fn test_beside_prefers_the_right() {
        let b = Button::new("Add Wire", ButtonAction::AddWire, Vector2::new(80.0, 16.0));
        let screen = ScreenSize { w: 800, h: 600 };
        let square = (Vector2::new(84.0, 84.0), Vector2::new(116.0, 116.0));
        assert_eq!(b.beside(square, &screen), Vector2::new(120.0, 92.0));
    }

    #[test]
    fn test_beside_flips_left_near_the_edge() {
        let b = Button::new("Add Wire", ButtonAction::AddWire, Vector2::new(80.0, 16.0));
        let screen = ScreenSize { w: 800, h: 600 };
        let square = (Vector2::new(734.0, -16.0), Vector2::new(766.0, 16.0));
        // Left of the box, pushed back below the top edge
        assert_eq!(b.beside(square, &screen), Vector2::new(650.0, 0.0));
    }

    #[test]
    fn test_disabled() {
        let b = Button::new("Add Wire", ButtonAction::AddWire, Vector2::new(80.0, 16.0)).disabled();
        assert!(!b.enabled);
    }
}
