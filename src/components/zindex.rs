//! Z-index component for render ordering and picking.
//!
//! Higher values are drawn later (on top) and win when several draggable
//! entities sit under the pointer.

use bevy_ecs::prelude::Component;

/// Boxes live on this layer.
pub const BOX_LAYER: i32 = 0;
/// Handles are drawn (and picked) above boxes.
pub const HANDLE_LAYER: i32 = 1;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
