//! Pointer drag marker.
//!
//! Entities with [`Draggable`] can be picked up with the left mouse button.
//! The drag systems in [`crate::systems::drag`] move their
//! [`MapPosition`](crate::components::mapposition::MapPosition) to follow the
//! pointer while the button is held.

use bevy_ecs::prelude::Component;

/// Marks an entity as draggable with the pointer.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Draggable;
