use bevy_ecs::prelude::Event;

use crate::components::button::ButtonAction;

/// Fired when an enabled [`Button`](crate::components::button::Button) is clicked.
#[derive(Event, Debug, Clone, Copy)]
pub struct ButtonPressedEvent {
    pub action: ButtonAction,
}
