//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that the debug overlay
//! should be drawn. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the renderer draws colliders, curve
/// control polygons and scene counters.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DebugMode;
