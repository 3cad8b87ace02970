//! Drag bookkeeping resources.
//!
//! - [`DragState`] – the entity currently following the pointer, if any
//! - [`LastClick`] – position of the last box released by the pointer, used
//!   as the start of the next wire

use bevy_ecs::prelude::{Entity, Resource};
use raylib::prelude::Vector2;

#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct DragState {
    pub dragging: Option<Entity>,
}

/// Last released box position. `None` until a box has been clicked.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct LastClick(pub Option<Vector2>);
