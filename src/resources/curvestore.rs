//! Curve storage resource.
//!
//! [`CurveStore`] holds every wire in the scene as a [`QuadraticBezier`].
//! The store is append-only: the index returned by [`CurveStore::push`] stays
//! valid for the life of the scene and is what
//! [`CurveHandle`](crate::components::curvehandle::CurveHandle) components
//! point at.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::curvehandle::CurvePoint;

/// Number of line segments used to draw one curve.
pub const CURVE_DIVISIONS: usize = 32;

/// A quadratic Bézier curve given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start: Vector2,
    pub control: Vector2,
    pub end: Vector2,
}

impl QuadraticBezier {
    pub fn new(start: Vector2, control: Vector2, end: Vector2) -> Self {
        Self {
            start,
            control,
            end,
        }
    }

    /// A horizontal wire leaving `start`, bending away from the vertical
    /// `midline`: leftwards when `start.x > midline`, rightwards otherwise.
    ///
    /// The control point sits `offset` away from the start and the end
    /// point `2 * offset` away.
    pub fn wire_from(start: Vector2, midline: f32, offset: f32) -> Self {
        let dir = if start.x > midline { -1.0 } else { 1.0 };
        Self {
            start,
            control: Vector2::new(start.x + dir * offset, start.y),
            end: Vector2::new(start.x + dir * 2.0 * offset, start.y),
        }
    }

    pub fn point(&self, slot: CurvePoint) -> Vector2 {
        match slot {
            CurvePoint::Start => self.start,
            CurvePoint::Control => self.control,
            CurvePoint::End => self.end,
        }
    }

    pub fn set_point(&mut self, slot: CurvePoint, pos: Vector2) {
        match slot {
            CurvePoint::Start => self.start = pos,
            CurvePoint::Control => self.control = pos,
            CurvePoint::End => self.end = pos,
        }
    }

    /// Evaluate the curve at `t` in `[0, 1]`.
    pub fn point_at(&self, t: f32) -> Vector2 {
        let u = 1.0 - t;
        let a = u * u;
        let b = 2.0 * u * t;
        let c = t * t;
        Vector2::new(
            a * self.start.x + b * self.control.x + c * self.end.x,
            a * self.start.y + b * self.control.y + c * self.end.y,
        )
    }

    /// `divisions + 1` evenly spaced points along the curve, both ends included.
    pub fn points(&self, divisions: usize) -> Vec<Vector2> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f32 / divisions as f32))
            .collect()
    }
}

/// Append-only list of the scene's curves.
#[derive(Resource, Debug, Clone, Default)]
pub struct CurveStore {
    curves: Vec<QuadraticBezier>,
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a curve and return its index.
    pub fn push(&mut self, curve: QuadraticBezier) -> usize {
        self.curves.push(curve);
        self.curves.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&QuadraticBezier> {
        self.curves.get(index)
    }

    /// Move one vertex of one curve. Returns `false` if `index` is unknown.
    pub fn set_point(&mut self, index: usize, slot: CurvePoint, pos: Vector2) -> bool {
        match self.curves.get_mut(index) {
            Some(curve) => {
                curve.set_point(slot, pos);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.curves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuadraticBezier> {
        self.curves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn approx(a: Vector2, b: Vector2) -> bool {
        (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
    }

    #[test]
    fn test_wire_right_of_midline_bends_left() {
        let c = QuadraticBezier::wire_from(Vector2::new(500.0, 100.0), 400.0, 50.0);
        assert_eq!(c.start, Vector2::new(500.0, 100.0));
        assert_eq!(c.control, Vector2::new(450.0, 100.0));
        assert_eq!(c.end, Vector2::new(400.0, 100.0));
    }

    #[test]
    fn test_wire_left_of_midline_bends_right() {
        let c = QuadraticBezier::wire_from(Vector2::new(100.0, 100.0), 400.0, 50.0);
        assert_eq!(c.control, Vector2::new(150.0, 100.0));
        assert_eq!(c.end, Vector2::new(200.0, 100.0));
    }

    #[test]
    fn test_wire_on_midline_bends_right() {
        let c = QuadraticBezier::wire_from(Vector2::new(400.0, 10.0), 400.0, 50.0);
        assert_eq!(c.end, Vector2::new(500.0, 10.0));
    }

    #[test]
    fn test_point_at_endpoints_and_middle() {
        let c = QuadraticBezier::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(50.0, 100.0),
            Vector2::new(100.0, 0.0),
        );
        assert!(approx(c.point_at(0.0), c.start));
        assert!(approx(c.point_at(1.0), c.end));
        assert!(approx(c.point_at(0.5), Vector2::new(50.0, 50.0)));
    }

    #[test]
    fn test_points_count() {
        let c = QuadraticBezier::wire_from(Vector2::new(0.0, 0.0), 400.0, 50.0);
        let pts = c.points(CURVE_DIVISIONS);
        assert_eq!(pts.len(), CURVE_DIVISIONS + 1);
        assert!(approx(pts[0], c.start));
        assert!(approx(pts[CURVE_DIVISIONS], c.end));
        assert_eq!(c.points(0).len(), 2);
    }

    #[test]
    fn test_set_point_touches_only_that_slot() {
        let mut store = CurveStore::new();
        let original = QuadraticBezier::new(
            Vector2::new(50.0, 50.0),
            Vector2::new(400.0, 300.0),
            Vector2::new(750.0, 550.0),
        );
        let index = store.push(original);
        assert_eq!(index, 0);

        assert!(store.set_point(0, CurvePoint::Control, Vector2::new(1.0, 2.0)));
        let c = store.get(0).unwrap();
        assert_eq!(c.start, original.start);
        assert_eq!(c.control, Vector2::new(1.0, 2.0));
        assert_eq!(c.end, original.end);
    }

    #[test]
    fn test_set_point_unknown_index() {
        let mut store = CurveStore::new();
        assert!(!store.set_point(3, CurvePoint::Start, Vector2::zero()));
        assert!(store.is_empty());
    }

    #[test]
    fn test_push_is_append_only() {
        let mut store = CurveStore::new();
        let a = store.push(QuadraticBezier::wire_from(Vector2::zero(), 400.0, 50.0));
        let b = store.push(QuadraticBezier::wire_from(Vector2::new(600.0, 0.0), 400.0, 50.0));
        assert_eq!((a, b), (0, 1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.iter().count(), 2);
    }
}
