//! Button systems.
//!
//! - [`button_system`] tracks hover state and turns clicks on enabled buttons
//!   into [`ButtonPressedEvent`]s
//! - [`button_pressed_observer`] performs the button's action: spawning a
//!   box or adding a wire at the last clicked box
//! - [`button_cursor_system`] shows the hand cursor over enabled buttons

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};
use raylib::RaylibHandle;
use raylib::consts::MouseCursor;
use raylib::prelude::Vector2;

use crate::components::button::{Button, ButtonAction};
use crate::components::screenposition::ScreenPosition;
use crate::events::button::ButtonPressedEvent;
use crate::game::{spawn_box, spawn_curve_handles};
use crate::resources::curvestore::{CurveStore, QuadraticBezier};
use crate::resources::dragstate::LastClick;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;

/// Update hover state and fire [`ButtonPressedEvent`] for clicked buttons.
///
/// A click on a button marks the pointer as captured for this frame so the
/// drag systems ignore it.
pub fn button_system(
    mut input: ResMut<InputState>,
    mut buttons: Query<(&mut Button, &ScreenPosition)>,
    mut commands: Commands,
) {
    let pointer = input.pointer;
    let pressed = input.select.just_pressed;
    input.pointer_captured = false;
    input.pointer_over_button = false;

    for (mut button, screen_pos) in buttons.iter_mut() {
        let hit = button.enabled && button.contains(screen_pos.pos, pointer);
        if button.hovered != hit {
            button.hovered = hit;
        }
        if !hit {
            continue;
        }
        input.pointer_over_button = true;
        if pressed {
            input.pointer_captured = true;
            debug!("Button '{}' pressed", button.label);
            commands.trigger(ButtonPressedEvent {
                action: button.action,
            });
        }
    }
}

/// Switch to the hand cursor while the pointer is over an enabled button.
pub fn button_cursor_system(
    input: Res<InputState>,
    rl: NonSend<RaylibHandle>,
    mut showing_hand: Local<bool>,
) {
    if input.pointer_over_button == *showing_hand {
        return;
    }
    *showing_hand = input.pointer_over_button;
    let cursor = if *showing_hand {
        MouseCursor::MOUSE_CURSOR_POINTING_HAND
    } else {
        MouseCursor::MOUSE_CURSOR_DEFAULT
    };
    rl.set_mouse_cursor(cursor);
}

/// Run the action bound to a pressed button.
///
/// - [`ButtonAction::NewBox`] – spawn a box at the configured spawn point
/// - [`ButtonAction::AddWire`] – append a wire starting at the last clicked
///   box and spawn its three handles
pub fn button_pressed_observer(
    trigger: On<ButtonPressedEvent>,
    mut commands: Commands,
    mut curves: ResMut<CurveStore>,
    last_click: Res<LastClick>,
    config: Res<GameConfig>,
) {
    match trigger.event().action {
        ButtonAction::NewBox => {
            let pos = Vector2::new(config.box_spawn_x, config.box_spawn_y);
            spawn_box(&mut commands, pos);
            info!("New box at ({:.0}, {:.0})", pos.x, pos.y);
        }
        ButtonAction::AddWire => {
            // The button stays disabled until a box has been released.
            let Some(start) = last_click.0 else {
                return;
            };
            let curve = QuadraticBezier::wire_from(start, config.midline(), config.wire_offset);
            let index = curves.push(curve);
            spawn_curve_handles(&mut commands, index, &curve);
            info!(
                "Wire {} from ({:.0}, {:.0}) to ({:.0}, {:.0})",
                index, curve.start.x, curve.start.y, curve.end.x, curve.end.y
            );
        }
    }
}
