//! Collision systems.
//!
//! - [`collision_detector`] tests every pair of colliders each frame and
//!   triggers a [`CollisionEvent`] per overlapping pair
//! - [`collision_observer`] looks up the [`CollisionRule`] matching the
//!   pair's groups and runs its callback
//! - [`snap_handle_to_box`] is the callback joining a curve handle to a box

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::boxcollider::BoxCollider;
use crate::components::collision::{CollisionContext, CollisionRule};
use crate::components::group::Group;
use crate::components::mapposition::MapPosition;
use crate::events::collision::CollisionEvent;
use crate::resources::snapstate::SnapState;

/// Emit a [`CollisionEvent`] for every pair of overlapping colliders.
///
/// Clears last frame's [`SnapState`] first.
pub fn collision_detector(
    query: Query<(Entity, &MapPosition, &BoxCollider)>,
    mut snap: ResMut<SnapState>,
    mut commands: Commands,
) {
    snap.clear();
    for [(entity_a, position_a, collider_a), (entity_b, position_b, collider_b)] in
        query.iter_combinations()
    {
        if collider_a.overlaps(position_a.pos, collider_b, position_b.pos) {
            commands.trigger(CollisionEvent {
                a: entity_a,
                b: entity_b,
            });
        }
    }
}

/// Dispatch a [`CollisionEvent`] to every rule matching the pair's groups.
pub fn collision_observer(
    trigger: On<CollisionEvent>,
    rules: Query<&CollisionRule>,
    groups: Query<&Group>,
    mut ctx: CollisionContext,
) {
    let event = trigger.event();
    let (Ok(group_a), Ok(group_b)) = (groups.get(event.a), groups.get(event.b)) else {
        return;
    };
    for rule in rules.iter() {
        if let Some((a, b)) = rule.order((event.a, group_a.name()), (event.b, group_b.name())) {
            (rule.callback)(a, b, &mut ctx);
        }
    }
}

/// Snap `handle` onto the center of `target` and record the pair.
///
/// The handle's curve vertex follows the handle.
pub fn snap_handle_to_box(handle: Entity, target: Entity, ctx: &mut CollisionContext) {
    let Ok(anchor) = ctx.positions.get(target).map(|p| p.pos) else {
        return;
    };
    if let Ok(mut pos) = ctx.positions.get_mut(handle) {
        pos.pos = anchor;
    }
    if let Ok(curve_handle) = ctx.handles.get(handle) {
        ctx.curves
            .set_point(curve_handle.curve, curve_handle.slot, anchor);
    }
    ctx.snap.record(handle, target);
    trace!("Snapped {:?} onto {:?}", handle, target);
}
