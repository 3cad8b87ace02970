//! Per-frame pointer and keyboard input resource.
//!
//! Captures the subset of input state the demo cares about: the pointer
//! position, the left mouse button used for clicking and dragging, and the
//! debug toggle key. The right mouse button is never read.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state for one frame.
pub struct BoolState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button was just pressed this frame.
    pub just_pressed: bool,
    /// Whether the button was just released this frame.
    pub just_released: bool,
}

impl BoolState {
    pub fn pressed() -> Self {
        Self {
            active: true,
            just_pressed: true,
            just_released: false,
        }
    }

    pub fn held() -> Self {
        Self {
            active: true,
            just_pressed: false,
            just_released: false,
        }
    }

    pub fn released() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: true,
        }
    }
}

/// Resource capturing the per-frame input relevant to the demo.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    /// Pointer position in window pixels.
    pub pointer: Vector2,
    /// Left mouse button.
    pub select: BoolState,
    /// Set when a UI element consumed this frame's press, so dragging does
    /// not start underneath it.
    pub pointer_captured: bool,
    /// Set while the pointer is over an enabled button.
    pub pointer_over_button: bool,
    pub mode_debug: BoolState,

    pub select_binding: MouseButton,
    pub mode_debug_binding: KeyboardKey,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            pointer: Vector2::zero(),
            select: BoolState::default(),
            pointer_captured: false,
            pointer_over_button: false,
            mode_debug: BoolState::default(),
            select_binding: MouseButton::MOUSE_BUTTON_LEFT,
            mode_debug_binding: KeyboardKey::KEY_F11,
        }
    }
}

impl InputState {
    /// Place the pointer and set the select button state in one go.
    pub fn with_pointer(mut self, x: f32, y: f32, select: BoolState) -> Self {
        self.pointer = Vector2::new(x, y);
        self.select = select;
        self
    }
}
