use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::curvehandle::CurveHandle;
use crate::components::mapposition::MapPosition;
use crate::resources::curvestore::CurveStore;
use crate::resources::snapstate::SnapState;

/// World access handed to collision callbacks.
#[derive(SystemParam)]
pub struct CollisionContext<'w, 's> {
    pub positions: Query<'w, 's, &'static mut MapPosition>,
    pub handles: Query<'w, 's, &'static CurveHandle>,
    pub curves: ResMut<'w, CurveStore>,
    pub snap: ResMut<'w, SnapState>,
}

/// Callback signature for collision rules.
///
/// `a` always belongs to the rule's `group_a` and `b` to `group_b`.
pub type CollisionCallback = fn(a: Entity, b: Entity, ctx: &mut CollisionContext);

/// Pairs two groups with the callback to run when members of each overlap.
#[derive(Component)]
pub struct CollisionRule {
    pub group_a: String,
    pub group_b: String,
    pub callback: CollisionCallback,
}

impl CollisionRule {
    pub fn new(
        group_a: impl Into<String>,
        group_b: impl Into<String>,
        callback: CollisionCallback,
    ) -> Self {
        Self {
            group_a: group_a.into(),
            group_b: group_b.into(),
            callback,
        }
    }

    /// Order the pair so the first entity is the one in `group_a`.
    ///
    /// Returns `None` when the rule does not apply.
    pub fn order(
        &self,
        (a, group_a): (Entity, &str),
        (b, group_b): (Entity, &str),
    ) -> Option<(Entity, Entity)> {
        if self.group_a == group_a && self.group_b == group_b {
            Some((a, b))
        } else if self.group_a == group_b && self.group_b == group_a {
            Some((b, a))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_a: Entity, _b: Entity, _ctx: &mut CollisionContext) {}

    #[test]
    fn test_order_puts_group_a_first() {
        let mut world = World::new();
        let handle = world.spawn_empty().id();
        let square = world.spawn_empty().id();
        let rule = CollisionRule::new("handles", "boxes", noop);

        assert_eq!(
            rule.order((square, "boxes"), (handle, "handles")),
            Some((handle, square))
        );
        assert_eq!(
            rule.order((handle, "handles"), (square, "boxes")),
            Some((handle, square))
        );
        assert_eq!(rule.order((handle, "handles"), (square, "handles")), None);
    }
}
