//! Back-reference from a handle entity to the curve vertex it controls.
//!
//! A handle does not own the point. It names a curve by its index in
//! [`CurveStore`](crate::resources::curvestore::CurveStore) plus the slot of
//! the vertex, and writes go through the store.

use bevy_ecs::prelude::Component;

/// Which vertex of a quadratic Bézier a handle controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurvePoint {
    Start,
    Control,
    End,
}

impl CurvePoint {
    /// All slots in curve order.
    pub const ALL: [CurvePoint; 3] = [CurvePoint::Start, CurvePoint::Control, CurvePoint::End];
}

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurveHandle {
    /// Index of the curve in the store.
    pub curve: usize,
    pub slot: CurvePoint,
}

impl CurveHandle {
    pub fn new(curve: usize, slot: CurvePoint) -> Self {
        Self { curve, slot }
    }
}
