//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Pressing the debug key triggers a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for pointer and key input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSend<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    input.pointer = rl.get_mouse_position();

    let select = input.select_binding;
    input.select.active = rl.is_mouse_button_down(select);
    input.select.just_pressed = rl.is_mouse_button_pressed(select);
    input.select.just_released = rl.is_mouse_button_released(select);

    let debug_key = input.mode_debug_binding;
    input.mode_debug.active = rl.is_key_down(debug_key);
    input.mode_debug.just_pressed = rl.is_key_pressed(debug_key);
    input.mode_debug.just_released = rl.is_key_released(debug_key);

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
