//! Per-frame snap bookkeeping.
//!
//! The collision detector clears [`SnapState`] at the start of each frame and
//! the snap callback records every (handle, box) pair it joined. Releasing the
//! pointer over a recorded pair recolors the background.

use bevy_ecs::prelude::{Entity, Resource};
use smallvec::SmallVec;

#[derive(Resource, Debug, Clone, Default)]
pub struct SnapState {
    /// (handle, box) pairs snapped during the current frame.
    pub pairs: SmallVec<[(Entity, Entity); 4]>,
}

impl SnapState {
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    pub fn record(&mut self, handle: Entity, target: Entity) {
        self.pairs.push((handle, target));
    }

    /// Whether `entity` took part in a snap this frame, on either side.
    pub fn involves(&self, entity: Entity) -> bool {
        self.pairs.iter().any(|&(h, b)| h == entity || b == entity)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_involves_either_side() {
        let mut world = World::new();
        let handle = world.spawn_empty().id();
        let square = world.spawn_empty().id();
        let other = world.spawn_empty().id();

        let mut snap = SnapState::default();
        assert!(snap.is_empty());
        snap.record(handle, square);
        assert!(snap.involves(handle));
        assert!(snap.involves(square));
        assert!(!snap.involves(other));

        snap.clear();
        assert!(!snap.involves(handle));
    }
}
