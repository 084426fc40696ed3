use crate::core::prelude::*;
use crate::util::collision::impl_shape_state;
use crate::util::{gg_iter, gg_range};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box, y-up.
///
/// The stored extents are in local space; the getters ([`left`](Boundary::left) etc.) report the
/// world-space extent, which is the envelope of the four corners after applying the matrix. A
/// rotated boundary therefore grows to stay axis-aligned rather than turning into a diamond.
///
/// The arithmetic operations ([`union`](Boundary::union), [`grow`](Boundary::grow) and so on)
/// work in world space and return a fresh boundary with an identity matrix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Boundary {
    left: f64,
    right: f64,
    bottom: f64,
    top: f64,
    matrix: Matrix3,
    depth: f64,
}

impl Boundary {
    /// Swaps the extents if needed so that `left <= right` and `bottom <= top`.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self::new_unchecked(
            left.min(right),
            left.max(right),
            bottom.min(top),
            bottom.max(top),
        )
    }
    fn new_unchecked(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            matrix: Matrix3::identity(),
            depth: 0.0,
        }
    }
    pub fn from_centre(centre: Point2, half_widths: Vector2) -> Self {
        let half_widths = half_widths.abs();
        Self::new(
            centre.x - half_widths.x,
            centre.x + half_widths.x,
            centre.y - half_widths.y,
            centre.y + half_widths.y,
        )
    }

    /// The smallest boundary containing every point.
    pub fn envelope(points: &[Point2]) -> Result<Self> {
        if points.iter().any(|p| p.x.is_nan() || p.y.is_nan()) {
            bail!("Boundary::envelope(): NaN coordinate in {points:?}");
        }
        let (left, right) = gg_iter::min_max_f64(points.iter().map(|p| p.x)).ok_or(
            GeomError::TooFewPoints {
                shape: "Boundary",
                expected: 1,
                actual: 0,
            },
        )?;
        let (bottom, top) = gg_iter::min_max_f64(points.iter().map(|p| p.y)).ok_or(
            GeomError::TooFewPoints {
                shape: "Boundary",
                expected: 1,
                actual: 0,
            },
        )?;
        check_le!(left, right);
        check_le!(bottom, top);
        Ok(Self::new_unchecked(left, right, bottom, top))
    }

    fn local_corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.left, self.bottom),
            Point2::new(self.right, self.bottom),
            Point2::new(self.right, self.top),
            Point2::new(self.left, self.top),
        ]
    }

    /// World-space `(left, right, bottom, top)`.
    fn extents(&self) -> (f64, f64, f64, f64) {
        if self.is_inverted() {
            // Map the stored min and max corners as they are; sorting would make an empty box valid.
            let low = self.matrix * Point2::new(self.left, self.bottom);
            let high = self.matrix * Point2::new(self.right, self.top);
            return (low.x, high.x, low.y, high.y);
        }
        let corners = self.local_corners().map(|p| self.matrix * p);
        // Four corners: neither interval can be empty.
        let (left, right) =
            gg_iter::min_max_f64(corners.iter().map(|p| p.x)).unwrap_or((self.left, self.right));
        let (bottom, top) =
            gg_iter::min_max_f64(corners.iter().map(|p| p.y)).unwrap_or((self.bottom, self.top));
        (left, right, bottom, top)
    }

    pub fn left(&self) -> f64 {
        self.extents().0
    }
    pub fn right(&self) -> f64 {
        self.extents().1
    }
    pub fn bottom(&self) -> f64 {
        self.extents().2
    }
    pub fn top(&self) -> f64 {
        self.extents().3
    }
    pub fn width(&self) -> f64 {
        let (left, right, _, _) = self.extents();
        right - left
    }
    pub fn height(&self) -> f64 {
        let (_, _, bottom, top) = self.extents();
        top - bottom
    }

    /// World-space corners, counterclockwise from bottom-left.
    pub fn corners(&self) -> [Point2; 4] {
        let (left, right, bottom, top) = self.extents();
        [
            Point2::new(left, bottom),
            Point2::new(right, bottom),
            Point2::new(right, top),
            Point2::new(left, top),
        ]
    }

    /// True for the result of [`intersect`](Boundary::intersect) on disjoint boundaries.
    /// Emptiness is a property of the local extents, so it survives any transform.
    pub fn is_inverted(&self) -> bool {
        self.left > self.right || self.bottom > self.top
    }

    #[must_use]
    pub fn move_by(&self, by: Vector2) -> Boundary {
        let (left, right, bottom, top) = self.extents();
        self.derive(left + by.x, right + by.x, bottom + by.y, top + by.y)
    }
    /// Pushes each side outwards by `dx` horizontally and `dy` vertically. Negative amounts
    /// shrink; shrinking past zero width collapses onto the centre line instead of inverting.
    #[must_use]
    pub fn grow(&self, dx: f64, dy: f64) -> Boundary {
        let (left, right, bottom, top) = self.extents();
        let centre = self.world_centre();
        self.derive(
            (left - dx).min(centre.x),
            (right + dx).max(centre.x),
            (bottom - dy).min(centre.y),
            (top + dy).max(centre.y),
        )
    }
    /// Scales the extent about the centre.
    #[must_use]
    pub fn scaled_about_center(&self, by: impl Into<Scale>) -> Boundary {
        let by = by.into().as_vector().abs();
        let centre = self.world_centre();
        let half = Vector2::new(self.width() * by.x, self.height() * by.y) / 2.0;
        let mut rv = Self::from_centre(centre, half);
        rv.depth = self.depth;
        rv
    }

    /// The overlapping region. Disjoint inputs produce an inverted boundary; check with
    /// [`is_inverted`](Boundary::is_inverted).
    #[must_use]
    pub fn intersect(&self, other: &Boundary) -> Boundary {
        let (l1, r1, b1, t1) = self.extents();
        let (l2, r2, b2, t2) = other.extents();
        let mut rv = Self::new_unchecked(l1.max(l2), r1.min(r2), b1.max(b2), t1.min(t2));
        rv.depth = self.depth;
        rv
    }
    #[must_use]
    pub fn union(&self, other: &Boundary) -> Boundary {
        let (l1, r1, b1, t1) = self.extents();
        let (l2, r2, b2, t2) = other.extents();
        self.derive(l1.min(l2), r1.max(r2), b1.min(b2), t1.max(t2))
    }

    pub fn contains(&self, other: &Boundary) -> bool {
        let (l1, r1, b1, t1) = self.extents();
        let (l2, r2, b2, t2) = other.extents();
        gg_range::contains_f64((l1, r1), (l2, r2)) && gg_range::contains_f64((b1, t1), (b2, t2))
    }
    /// Inclusive of the edges.
    pub fn contains_point(&self, point: Point2) -> bool {
        let (left, right, bottom, top) = self.extents();
        gg_range::contains_f64((left, right), (point.x, point.x))
            && gg_range::contains_f64((bottom, top), (point.y, point.y))
    }

    /// Interval overlap on X, then on Y. Touching edges collide.
    pub fn collide_boundary(&self, other: &Boundary) -> bool {
        let (l1, r1, b1, t1) = self.extents();
        let (l2, r2, b2, t2) = other.extents();
        gg_range::overlap_f64(l1, r1, l2, r2) && gg_range::overlap_f64(b1, t1, b2, t2)
    }

    fn world_centre(&self) -> Point2 {
        let (left, right, bottom, top) = self.extents();
        Point2::new((left + right) / 2.0, (bottom + top) / 2.0)
    }
    fn derive(&self, left: f64, right: f64, bottom: f64, top: f64) -> Boundary {
        let mut rv = Self::new(left, right, bottom, top);
        rv.depth = self.depth;
        rv
    }
}

impl Polygonal for Boundary {
    fn vertices(&self) -> Vec<Point2> {
        self.corners().to_vec()
    }
    fn axes(&self) -> Vec<Vector2> {
        vec![Vector2::right(), Vector2::up()]
    }
}

impl Shape for Boundary {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Boundary
    }
    impl_shape_state!();

    fn points(&self) -> Result<Vec<Point2>> {
        Ok(self.vertices())
    }
    fn bounds(&self) -> Result<Boundary> {
        let (left, right, bottom, top) = self.extents();
        Ok(self.derive(left, right, bottom, top))
    }
    fn center(&self) -> Result<Point2> {
        Ok(self.world_centre())
    }
    fn into_generic(self) -> GenericShape {
        GenericShape::Boundary(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::FRAC_PI_4;

    fn extents_of(b: &Boundary) -> [f64; 4] {
        [b.left(), b.right(), b.bottom(), b.top()]
    }

    #[test]
    fn new_normalises() {
        let b = Boundary::new(10.0, 0.0, 5.0, -5.0);
        assert_eq!(extents_of(&b), [0.0, 10.0, -5.0, 5.0]);
        assert_eq!(b.width(), 10.0);
        assert_eq!(b.height(), 10.0);
        assert_eq!(b.center().unwrap(), Point2::new(5.0, 0.0));
    }

    #[test]
    fn touching_boundaries_collide() {
        let a = Boundary::new(0.0, 10.0, 0.0, 10.0);
        assert!(a.collide_boundary(&Boundary::new(10.0, 20.0, 0.0, 10.0)));
        assert!(a.collide_boundary(&Boundary::new(0.0, 10.0, 10.0, 20.0)));
        assert!(a.collide_boundary(&Boundary::new(2.0, 3.0, 2.0, 3.0)));
        assert!(a.collide(&Boundary::new(10.0, 20.0, 10.0, 20.0)).unwrap());
    }

    #[test]
    fn separated_boundaries_do_not_collide() {
        let a = Boundary::new(0.0, 10.0, 0.0, 10.0);
        assert!(!a.collide_boundary(&Boundary::new(11.0, 20.0, 0.0, 10.0)));
        assert!(!a.collide_boundary(&Boundary::new(0.0, 10.0, -20.0, -11.0)));
        // Overlapping on one axis is not enough.
        assert!(!a.collide_boundary(&Boundary::new(5.0, 6.0, 11.0, 20.0)));
    }

    #[test]
    fn union_contains_both() {
        let mut rng = StdRng::seed_from_u64(0xb0b);
        let mut random = || {
            Boundary::new(
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
                rng.gen_range(-10.0..10.0),
            )
        };
        for _ in 0..100 {
            let a = random();
            let b = random();
            let u = a.union(&b);
            assert!(u.contains(&a), "{a:?} {u:?}");
            assert!(u.contains(&b), "{b:?} {u:?}");
            assert!(!u.is_inverted());
        }
    }

    #[test]
    fn intersect() {
        let a = Boundary::new(0.0, 10.0, 0.0, 10.0);
        let overlap = a.intersect(&Boundary::new(5.0, 15.0, -5.0, 5.0));
        assert_eq!(extents_of(&overlap), [5.0, 10.0, 0.0, 5.0]);
        assert!(!overlap.is_inverted());
        assert!(a.intersect(&Boundary::new(11.0, 20.0, 0.0, 10.0)).is_inverted());
    }

    #[test]
    fn empty_intersection_stays_empty_when_moved() {
        let a = Boundary::new(0.0, 10.0, 0.0, 10.0);
        let empty = a.intersect(&Boundary::new(11.0, 20.0, 0.0, 10.0));
        let moved = empty.translated(Vector2::new(1.0, 0.0));
        assert!(moved.is_inverted());
        assert_eq!(extents_of(&moved), [12.0, 11.0, 0.0, 10.0]);
        assert!(moved.left() > moved.right());
        assert!(empty.scaled(2.0).is_inverted());
        assert!(empty.rotated(FRAC_PI_4).is_inverted());
    }

    #[test]
    fn near_identity_transform_far_from_origin() {
        let b = Boundary::new(1e6, 2e6, 0.0, 1.0).scaled(1.000009);
        assert!((b.right() - 2e6 * 1.000009).abs() < 1e-3, "{}", b.right());
        assert!((b.left() - 1e6 * 1.000009).abs() < 1e-3, "{}", b.left());
        let nudged = Boundary::new(1e6, 2e6, 0.0, 1.0).translated(Vector2::new(1e-6, 0.0));
        assert_eq!(nudged.right(), 2e6 + 1e-6);
    }

    #[test]
    fn serde_round_trip() {
        let b = Boundary::new(-1.0, 2.0, 3.0, 4.5).translated(Vector2::new(1.0, 1.0));
        let bytes = bincode::serialize(&b).unwrap();
        let back: Boundary = bincode::deserialize(&bytes).unwrap();
        assert_eq!(extents_of(&back), extents_of(&b));
        assert_eq!(back.matrix(), b.matrix());

        let empty = b.intersect(&Boundary::new(10.0, 11.0, 3.0, 4.0));
        let bytes = bincode::serialize(&empty).unwrap();
        let back: Boundary = bincode::deserialize(&bytes).unwrap();
        assert!(back.is_inverted());
    }

    #[test]
    fn arithmetic() {
        let a = Boundary::new(0.0, 2.0, 0.0, 4.0);
        assert_eq!(
            extents_of(&a.move_by(Vector2::new(1.0, -1.0))),
            [1.0, 3.0, -1.0, 3.0]
        );
        assert_eq!(extents_of(&a.grow(1.0, 2.0)), [-1.0, 3.0, -2.0, 6.0]);
        assert_eq!(extents_of(&a.grow(-5.0, 0.0)), [1.0, 1.0, 0.0, 4.0]);
        assert_eq!(extents_of(&a.scaled_about_center(2.0)), [-1.0, 3.0, -2.0, 6.0]);
        assert_eq!(
            extents_of(&a.scaled_about_center((0.5, 1.0))),
            [0.5, 1.5, 0.0, 4.0]
        );
        // All of the above leave the receiver alone.
        assert_eq!(extents_of(&a), [0.0, 2.0, 0.0, 4.0]);
    }

    #[test]
    fn containment_is_inclusive() {
        let a = Boundary::new(0.0, 1.0, 0.0, 1.0);
        assert!(a.contains_point(Point2::new(1.0, 0.0)));
        assert!(a.contains_point(Point2::new(0.5, 0.5)));
        assert!(!a.contains_point(Point2::new(1.01, 0.5)));
        assert!(a.contains(&a));
        assert!(!a.contains(&a.grow(0.1, 0.0)));
    }

    #[test]
    fn envelope() {
        let b = Boundary::envelope(&[
            Point2::new(3.0, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(extents_of(&b), [-2.0, 3.0, -1.0, 4.0]);
        assert!(Boundary::envelope(&[Point2::new(f64::NAN, 0.0)]).is_err());
        let err = Boundary::envelope(&[]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeomError>(),
            Some(GeomError::TooFewPoints { actual: 0, .. })
        ));
    }

    #[test]
    fn corners_are_counterclockwise() {
        let corners = Boundary::new(0.0, 2.0, 0.0, 1.0).corners();
        assert_eq!(corners[0], Point2::new(0.0, 0.0));
        assert_eq!(corners[1], Point2::new(2.0, 0.0));
        assert_eq!(corners[2], Point2::new(2.0, 1.0));
        assert_eq!(corners[3], Point2::new(0.0, 1.0));
    }

    #[test]
    fn rotation_keeps_axis_aligned() {
        let b = Boundary::new(-1.0, 1.0, -1.0, 1.0).rotated(FRAC_PI_4);
        let half_diagonal = 2.0_f64.sqrt();
        assert!((b.right() - half_diagonal).abs() < EPSILON);
        assert!((b.bottom() + half_diagonal).abs() < EPSILON);
        assert_eq!(b.axes(), vec![Vector2::right(), Vector2::up()]);
        let translated = Boundary::new(0.0, 1.0, 0.0, 1.0).translated(Vector2::new(5.0, 0.0));
        assert_eq!(extents_of(&translated), [5.0, 6.0, 0.0, 1.0]);
    }

    #[test]
    fn boundary_against_polygon() {
        let b = Boundary::new(0.0, 1.0, 0.0, 1.0);
        let tri = Triangle::new([
            Point2::new(1.2, 0.5),
            Point2::new(3.0, 0.5),
            Point2::new(1.2, 3.0),
        ]);
        assert!(!b.collide(&tri).unwrap());
        assert!(b.collide(&tri.translated(Vector2::new(-0.5, 0.0))).unwrap());
        // Bounding boxes overlap but the hypotenuse separates.
        let diagonal = Triangle::new([
            Point2::new(1.6, 0.6),
            Point2::new(0.6, 1.6),
            Point2::new(1.6, 1.6),
        ]);
        assert!(!b.collide(&diagonal).unwrap());
    }
}
