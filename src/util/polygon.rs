use crate::core::prelude::*;
use crate::util::collision::impl_shape_state;
use serde::{Deserialize, Serialize};

/// Area-weighted centroid of a closed polygon. Falls back to the vertex mean when the polygon
/// encloses no area (e.g. all points collinear).
pub fn centre_of(vertices: &[Point2]) -> Point2 {
    if vertices.is_empty() {
        return Point2::origin();
    }
    let (area, x, y) = vertices
        .iter()
        .circular_tuple_windows()
        .map(|(&u, &v)| {
            let area = u.to_vector().cross(v.to_vector());
            (area, (u.x + v.x) * area, (u.y + v.y) * area)
        })
        .fold((0.0, 0.0, 0.0), |acc, next| {
            (acc.0 + next.0, acc.1 + next.1, acc.2 + next.2)
        });
    if area.abs() < EPSILON {
        let n = vertices.len() as f64;
        let sum: Vector2 = vertices.iter().map(Point2::to_vector).sum();
        return Point2::origin() + sum / n;
    }
    // `area` here is twice the signed area.
    Point2::new(x / (3.0 * area), y / (3.0 * area))
}

/// Whether every turn along the (closed) vertex list goes the same way. Collinear runs are
/// ignored.
pub fn is_convex(vertices: &[Point2]) -> bool {
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(&u, &v, &w)| (v - u).cross(w - v))
        .filter(|turn| turn.abs() > EPSILON)
        .map(f64::signum)
        .all_equal()
}

fn regular_vertices(sides: usize, radius: f64) -> Vec<Point2> {
    (0..sides)
        .map(|k| {
            let theta = std::f64::consts::TAU * k as f64 / sides as f64;
            Point2::origin() + Vector2::right().rotated(theta) * radius
        })
        .collect()
}

/// A convex polygon with any number (at least 3) of vertices.
///
/// Concave input is accepted, but collision against it is only approximate.
///
/// Deserializing checks the vertex count the same way [`Polygon::new`] does.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "PolygonData")]
pub struct Polygon {
    raw: Vec<Point2>,
    matrix: Matrix3,
    depth: f64,
}

#[derive(Deserialize)]
struct PolygonData {
    raw: Vec<Point2>,
    matrix: Matrix3,
    depth: f64,
}

impl TryFrom<PolygonData> for Polygon {
    type Error = GeomError;

    fn try_from(value: PolygonData) -> Result<Self, Self::Error> {
        if value.raw.len() < 3 {
            return Err(GeomError::TooFewPoints {
                shape: "Polygon",
                expected: 3,
                actual: value.raw.len(),
            });
        }
        Ok(Self {
            raw: value.raw,
            matrix: value.matrix,
            depth: value.depth,
        })
    }
}

macro_rules! unit_regular_factories {
    ($($name:ident => $sides:literal),* $(,)?) => {
        $(
            #[doc = concat!(
                "A regular ", stringify!($sides),
                "-sided polygon of circumradius [`UNIT_POLYGON_RADIUS`], first vertex on +X."
            )]
            pub fn $name() -> Polygon {
                Polygon::from_raw(regular_vertices($sides, UNIT_POLYGON_RADIUS))
            }
        )*
    };
}

impl Polygon {
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeomError::TooFewPoints {
                shape: "Polygon",
                expected: 3,
                actual: points.len(),
            }
            .into());
        }
        if !is_convex(&points) {
            warn!("Polygon::new(): concave vertex list, collisions will be approximate");
        }
        Ok(Self::from_raw(points))
    }

    fn from_raw(raw: Vec<Point2>) -> Self {
        Self {
            raw,
            matrix: Matrix3::identity(),
            depth: 0.0,
        }
    }

    /// A regular polygon centred at the origin. Vertex `k` sits at angle `2πk / sides`.
    pub fn regular(sides: usize, radius: f64) -> Result<Self> {
        if sides < 3 {
            return Err(GeomError::TooFewPoints {
                shape: "Polygon",
                expected: 3,
                actual: sides,
            }
            .into());
        }
        Ok(Self::from_raw(regular_vertices(sides, radius)))
    }

    unit_regular_factories! {
        triangle => 3,
        square => 4,
        pentagon => 5,
        hexagon => 6,
        heptagon => 7,
        octagon => 8,
        nonagon => 9,
        decagon => 10,
        dodecagon => 12,
        icosagon => 20,
        hectogon => 100,
    }

    /// The points this polygon was built from, before any transform.
    pub fn raw_points(&self) -> &[Point2] {
        &self.raw
    }
    pub fn sides(&self) -> usize {
        self.raw.len()
    }
    pub fn is_convex(&self) -> bool {
        is_convex(&self.raw)
    }
}

impl Polygonal for Polygon {
    fn vertices(&self) -> Vec<Point2> {
        self.raw.iter().map(|&p| self.matrix * p).collect()
    }
}

impl Shape for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }
    impl_shape_state!();

    fn points(&self) -> Result<Vec<Point2>> {
        Ok(self.vertices())
    }
    fn bounds(&self) -> Result<Boundary> {
        Boundary::envelope(&self.vertices())
    }
    fn center(&self) -> Result<Point2> {
        Ok(centre_of(&self.vertices()))
    }
    fn into_generic(self) -> GenericShape {
        GenericShape::Polygon(self)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Triangle {
    raw: [Point2; 3],
    matrix: Matrix3,
    depth: f64,
}

impl Triangle {
    pub fn new(points: [Point2; 3]) -> Self {
        Self {
            raw: points,
            matrix: Matrix3::identity(),
            depth: 0.0,
        }
    }
    pub fn from_points(points: Vec<Point2>) -> Result<Self> {
        let actual = points.len();
        let points: [Point2; 3] = points.try_into().map_err(|_| GeomError::WrongPointCount {
            shape: "Triangle",
            expected: 3,
            actual,
        })?;
        Ok(Self::new(points))
    }

    pub fn raw_points(&self) -> &[Point2; 3] {
        &self.raw
    }

    fn world_points(&self) -> [Point2; 3] {
        self.raw.map(|p| self.matrix * p)
    }
}

impl TryFrom<Vec<Point2>> for Triangle {
    type Error = anyhow::Error;

    fn try_from(value: Vec<Point2>) -> Result<Self> {
        Self::from_points(value)
    }
}

impl Polygonal for Triangle {
    fn vertices(&self) -> Vec<Point2> {
        self.world_points().to_vec()
    }
    fn edges(&self) -> Vec<Vector2> {
        let [a, b, c] = self.world_points();
        vec![b - a, c - b, a - c]
    }
}

impl Shape for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }
    impl_shape_state!();

    fn points(&self) -> Result<Vec<Point2>> {
        Ok(self.vertices())
    }
    fn bounds(&self) -> Result<Boundary> {
        Boundary::envelope(&self.world_points())
    }
    fn center(&self) -> Result<Point2> {
        Ok(centre_of(&self.world_points()))
    }
    fn into_generic(self) -> GenericShape {
        GenericShape::Triangle(self)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Quadrangle {
    raw: [Point2; 4],
    matrix: Matrix3,
    depth: f64,
}

impl Quadrangle {
    pub fn new(points: [Point2; 4]) -> Self {
        Self {
            raw: points,
            matrix: Matrix3::identity(),
            depth: 0.0,
        }
    }
    pub fn from_points(points: Vec<Point2>) -> Result<Self> {
        let actual = points.len();
        let points: [Point2; 4] = points.try_into().map_err(|_| GeomError::WrongPointCount {
            shape: "Quadrangle",
            expected: 4,
            actual,
        })?;
        Ok(Self::new(points))
    }

    pub fn raw_points(&self) -> &[Point2; 4] {
        &self.raw
    }

    fn world_points(&self) -> [Point2; 4] {
        self.raw.map(|p| self.matrix * p)
    }
}

impl TryFrom<Vec<Point2>> for Quadrangle {
    type Error = anyhow::Error;

    fn try_from(value: Vec<Point2>) -> Result<Self> {
        Self::from_points(value)
    }
}

impl Polygonal for Quadrangle {
    fn vertices(&self) -> Vec<Point2> {
        self.world_points().to_vec()
    }
    fn edges(&self) -> Vec<Vector2> {
        let [a, b, c, d] = self.world_points();
        vec![b - a, c - b, d - c, a - d]
    }
}

impl Shape for Quadrangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Quadrangle
    }
    impl_shape_state!();

    fn points(&self) -> Result<Vec<Point2>> {
        Ok(self.vertices())
    }
    fn bounds(&self) -> Result<Boundary> {
        Boundary::envelope(&self.world_points())
    }
    fn center(&self) -> Result<Point2> {
        Ok(centre_of(&self.world_points()))
    }
    fn into_generic(self) -> GenericShape {
        GenericShape::Quadrangle(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn serde_round_trip() {
        let mut hexagon = Polygon::hexagon().rotated(0.5);
        hexagon.set_depth(3.0);
        let back: Polygon = bincode::deserialize(&bincode::serialize(&hexagon).unwrap()).unwrap();
        assert_eq!(back.points().unwrap(), hexagon.points().unwrap());
        assert_eq!(back.depth(), 3.0);

        let triangle = Triangle::new(right_triangle()).translated(Vector2::new(1.0, 0.0));
        let back: Triangle =
            bincode::deserialize(&bincode::serialize(&triangle).unwrap()).unwrap();
        assert_eq!(back.points().unwrap(), triangle.points().unwrap());
    }

    #[test]
    fn deserialize_rejects_too_few_points() {
        // Same layout as a serialized polygon, but with only two vertices.
        let bytes = bincode::serialize(&(
            vec![Point2::origin(), Point2::new(1.0, 0.0)],
            Matrix3::identity(),
            0.0_f64,
        ))
        .unwrap();
        let err = bincode::deserialize::<Polygon>(&bytes).unwrap_err();
        assert!(err.to_string().contains("Polygon"), "{err}");
    }

    fn right_triangle() -> [Point2; 3] {
        [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(0.0, 3.0),
        ]
    }

    #[test]
    fn polygon_needs_three_points() {
        let err = Polygon::new(vec![Point2::origin(), Point2::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeomError>(),
            Some(&GeomError::TooFewPoints {
                shape: "Polygon",
                expected: 3,
                actual: 2
            })
        );
        assert!(Polygon::regular(2, 1.0).is_err());
    }

    #[test]
    fn fixed_size_shapes_check_point_count() {
        let err = Triangle::from_points(vec![Point2::origin(); 4]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<GeomError>(),
            Some(&GeomError::WrongPointCount {
                shape: "Triangle",
                expected: 3,
                actual: 4
            })
        );
        assert!(Quadrangle::try_from(vec![Point2::origin(); 3]).is_err());
        assert!(Quadrangle::try_from(vec![Point2::origin(); 4]).is_ok());
    }

    #[test]
    fn regular_vertices_sit_on_circle() {
        let hexagon = Polygon::regular(6, 2.0).unwrap();
        let points = hexagon.points().unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(points[0], Point2::new(2.0, 0.0));
        assert_eq!(points[1], Point2::new(1.0, 3.0_f64.sqrt()));
        for p in points {
            assert!((p.distance(Point2::origin()) - 2.0).abs() < EPSILON);
        }
    }

    #[test]
    fn named_factories() {
        assert_eq!(Polygon::triangle().sides(), 3);
        assert_eq!(Polygon::square().sides(), 4);
        assert_eq!(Polygon::dodecagon().sides(), 12);
        assert_eq!(Polygon::icosagon().sides(), 20);
        assert_eq!(Polygon::hectogon().sides(), 100);
        assert_eq!(Polygon::square().points().unwrap()[1], Point2::new(0.0, 0.5));
    }

    #[test]
    fn fixed_size_edges_match_generic_edges() {
        let tri = Triangle::new(right_triangle()).rotated(0.3);
        let poly = Polygon::new(right_triangle().to_vec()).unwrap().rotated(0.3);
        assert_eq!(tri.edges(), poly.edges());

        let quad = Quadrangle::new([
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        assert_eq!(
            quad.edges(),
            vec![
                Vector2::new(2.0, 0.0),
                Vector2::new(0.0, 1.0),
                Vector2::new(-2.0, 0.0),
                Vector2::new(0.0, -1.0)
            ]
        );
    }

    #[test]
    fn centroid() {
        assert_eq!(centre_of(&right_triangle()), Point2::new(1.0, 1.0));
        let square = Polygon::square().translated(Vector2::new(4.0, -2.0));
        assert_eq!(square.center().unwrap(), Point2::new(4.0, -2.0));
        // Clockwise winding gives the same answer.
        let mut reversed = right_triangle();
        reversed.reverse();
        assert_eq!(centre_of(&reversed), Point2::new(1.0, 1.0));
        // No area: mean of the vertices.
        let flat = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(5.0, 0.0),
        ];
        assert_eq!(centre_of(&flat), Point2::new(2.0, 0.0));
    }

    #[test]
    fn convexity() {
        assert!(Polygon::octagon().is_convex());
        let dart = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 1.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        assert!(!is_convex(&dart));
        let with_collinear = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
        ];
        assert!(is_convex(&with_collinear));
    }

    #[test]
    fn raw_points_survive_transforms() {
        let mut tri = Triangle::new(right_triangle());
        tri.rotate(FRAC_PI_2);
        assert_eq!(tri.raw_points(), &right_triangle());
        assert_eq!(tri.points().unwrap()[1], Point2::new(0.0, 3.0));
        let bounds = tri.bounds().unwrap();
        assert_eq!(
            Point2::new(bounds.left(), bounds.bottom()),
            Point2::new(-3.0, 0.0)
        );
        assert_eq!(Point2::new(bounds.right(), bounds.top()), Point2::new(0.0, 3.0));
    }
}
