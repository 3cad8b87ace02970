//! Collision event type.
//!
//! The [`collision_detector`](crate::systems::collision::collision_detector)
//! emits [`CollisionEvent`] for every pair of overlapping colliders each
//! frame. The [`collision_observer`](crate::systems::collision::collision_observer)
//! dispatches it to the matching
//! [`CollisionRule`](crate::components::collision::CollisionRule).
use bevy_ecs::prelude::*;

/// Event fired when two entities with BoxCollider overlap.
///
/// No ordering guarantees are provided between `a` and `b`.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
}
