use crate::core::prelude::*;
use crate::util::{gg_iter, gg_range};
use std::fmt::{Debug, Display, Formatter};

/// The closed set of concrete shape types, used for dispatch and error messages.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum ShapeKind {
    Boundary,
    Triangle,
    Quadrangle,
    Polygon,
    Ellipse,
    Group,
}

impl Display for ShapeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Behaviour shared by everything that can be transformed and collided.
///
/// Each shape stores its own accumulated [`Matrix3`], starting at the identity. The geometry a
/// shape was built from is never modified; the world-space view ([`points`](Shape::points),
/// [`bounds`](Shape::bounds), [`center`](Shape::center)) is computed through the matrix.
///
/// Transforms come in two flavours:
/// - [`transform`](Shape::transform) and friends mutate in place and return `&mut Self`, for
///   per-frame updates;
/// - [`transformed`](Shape::transformed) and friends return a new shape and leave the receiver
///   alone, for one-off spatial queries.
///
/// Both compose the new matrix *after* the existing one: `matrix' = by * matrix`.
pub trait Shape: Clone + Debug {
    fn kind(&self) -> ShapeKind;

    fn matrix(&self) -> Matrix3;
    fn set_matrix(&mut self, matrix: Matrix3);

    /// Draw order. Has no effect on collision.
    fn depth(&self) -> f64;
    fn set_depth(&mut self, depth: f64);

    /// World-space vertices, i.e. after applying [`matrix`](Shape::matrix).
    fn points(&self) -> Result<Vec<Point2>>;
    fn bounds(&self) -> Result<Boundary>;
    fn center(&self) -> Result<Point2>;

    fn as_generic(&self) -> GenericShape {
        self.clone().into_generic()
    }
    fn into_generic(self) -> GenericShape;

    /// Whether `self` and `other` overlap in world space. Touching counts.
    fn collide<S: Shape>(&self, other: &S) -> Result<bool> {
        self.as_generic().collides_with(&other.as_generic())
    }

    fn transform(&mut self, by: impl Into<Matrix3>) -> &mut Self {
        let next = by.into() * self.matrix();
        self.set_matrix(next);
        self
    }
    fn translate(&mut self, by: Vector2) -> &mut Self {
        self.transform(Matrix3::translate_by(by))
    }
    /// Rotates counterclockwise about the origin.
    fn rotate(&mut self, radians: f64) -> &mut Self {
        self.transform(Matrix3::rotate(radians))
    }
    /// Scales about the origin.
    fn scale(&mut self, by: impl Into<Scale>) -> &mut Self {
        self.transform(Matrix3::scale_by(by.into().as_vector()))
    }

    #[must_use]
    fn transformed(&self, by: impl Into<Matrix3>) -> Self {
        let mut rv = self.clone();
        rv.transform(by);
        rv
    }
    #[must_use]
    fn translated(&self, by: Vector2) -> Self {
        self.transformed(Matrix3::translate_by(by))
    }
    #[must_use]
    fn rotated(&self, radians: f64) -> Self {
        self.transformed(Matrix3::rotate(radians))
    }
    #[must_use]
    fn scaled(&self, by: impl Into<Scale>) -> Self {
        self.transformed(Matrix3::scale_by(by.into().as_vector()))
    }
}

/// Expands to the [`Shape`] accessors for a struct with `matrix: Matrix3` and `depth: f64` fields.
macro_rules! impl_shape_state {
    () => {
        fn matrix(&self) -> Matrix3 {
            self.matrix
        }
        fn set_matrix(&mut self, matrix: Matrix3) {
            self.matrix = matrix;
        }
        fn depth(&self) -> f64 {
            self.depth
        }
        fn set_depth(&mut self, depth: f64) {
            self.depth = depth;
        }
    };
}
pub(crate) use impl_shape_state;

/// A convex point set that can take part in a separating-axis test.
pub trait Polygonal {
    /// World-space vertices, in winding order.
    fn vertices(&self) -> Vec<Point2>;

    /// Edge vectors `p[i] - p[i-1]`, wrapping around so the first edge closes the polygon.
    fn edges(&self) -> Vec<Vector2> {
        let vertices = self.vertices();
        vertices
            .iter()
            .circular_tuple_windows()
            .map(|(&u, &v)| v - u)
            .collect()
    }

    /// Candidate separating axes: one normal per non-degenerate edge.
    fn axes(&self) -> Vec<Vector2> {
        self.edges()
            .into_iter()
            .filter(|edge| edge.magnitude_squared() > 0.0)
            .map(|edge| edge.perp())
            .collect()
    }

    /// The `[min, max]` interval of signed scalar projections of the vertices onto `axis`.
    fn project(&self, axis: Vector2) -> Result<(f64, f64)> {
        let axis = axis
            .unit()
            .map_err(|_| GeomError::DegenerateVector("project onto"))?;
        project_onto_unit(&self.vertices(), axis)
    }

    /// Separating axis test over the axes of both shapes.
    ///
    /// Only correct for convex shapes: a concave polygon may be reported as colliding when it
    /// does not.
    ///
    /// # Errors
    /// Fails with [`GeomError::DegenerateVector`] if neither shape has an edge of non-zero
    /// length, e.g. two polygons scaled down to a point.
    fn sat_collision(&self, other: &dyn Polygonal) -> Result<bool> {
        let (self_axes, other_axes) = (self.axes(), other.axes());
        if self_axes.is_empty() && other_axes.is_empty() {
            return Err(GeomError::DegenerateVector("take the normal of").into());
        }
        if self_axes.is_empty() || other_axes.is_empty() {
            warn_every_seconds!(5, "sat_collision(): testing against a shape collapsed to a point");
        }
        let self_vertices = self.vertices();
        let other_vertices = other.vertices();
        for axis in self_axes.into_iter().chain(other_axes) {
            let axis = axis.unit()?;
            let (a, b) = project_onto_unit(&self_vertices, axis)?;
            let (c, d) = project_onto_unit(&other_vertices, axis)?;
            if !gg_range::overlap_f64(a, b, c, d) {
                trace!("separated along {axis:.3}: [{a:.3}, {b:.3}] vs. [{c:.3}, {d:.3}]");
                return Ok(false);
            }
        }
        Ok(true)
    }
}

fn project_onto_unit(vertices: &[Point2], axis: Vector2) -> Result<(f64, f64)> {
    gg_iter::min_max_f64(vertices.iter().map(|v| v.to_vector().dot(axis)))
        .ok_or_else(|| anyhow!("projected empty vertex set"))
}

/// Any concrete shape, as a closed tagged union.
///
/// Collision between two shapes is resolved by [`collides_with`](GenericShape::collides_with),
/// which matches on both variants at once:
///
/// | pair                    | test                                              |
/// |-------------------------|---------------------------------------------------|
/// | group vs. anything      | any evaluated member collides                     |
/// | boundary vs. boundary   | per-axis interval overlap                         |
/// | boundary vs. polygonal  | SAT on the X and Y axes plus the other's normals  |
/// | polygonal vs. polygonal | SAT on both shapes' edge normals                  |
///
/// Triangles, quadrangles, polygons and (tessellated) ellipses are all polygonal.
#[derive(Clone, Debug)]
pub enum GenericShape {
    Boundary(Boundary),
    Triangle(Triangle),
    Quadrangle(Quadrangle),
    Polygon(Polygon),
    Ellipse(Ellipse),
    Group(Group),
}

macro_rules! for_each_variant {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            GenericShape::Boundary($inner) => $body,
            GenericShape::Triangle($inner) => $body,
            GenericShape::Quadrangle($inner) => $body,
            GenericShape::Polygon($inner) => $body,
            GenericShape::Ellipse($inner) => $body,
            GenericShape::Group($inner) => $body,
        }
    };
}

impl GenericShape {
    pub fn collides_with(&self, other: &GenericShape) -> Result<bool> {
        match (self, other) {
            (GenericShape::Group(group), _) => group.collides_with(other),
            (_, GenericShape::Group(group)) => group.collides_with(self),
            (GenericShape::Boundary(this), GenericShape::Boundary(other)) => {
                Ok(this.collide_boundary(other))
            }
            _ => match (self.as_polygonal(), other.as_polygonal()) {
                (Some(this), Some(that)) => this.sat_collision(that),
                _ => Err(GeomError::UnsupportedShapePair {
                    this: self.to_string(),
                    other: other.to_string(),
                }
                .into()),
            },
        }
    }

    /// The polygonal view of this shape, or `None` for composites.
    pub fn as_polygonal(&self) -> Option<&dyn Polygonal> {
        match self {
            GenericShape::Boundary(s) => Some(s),
            GenericShape::Triangle(s) => Some(s),
            GenericShape::Quadrangle(s) => Some(s),
            GenericShape::Polygon(s) => Some(s),
            GenericShape::Ellipse(s) => Some(s),
            GenericShape::Group(_) => None,
        }
    }
}

impl Shape for GenericShape {
    fn kind(&self) -> ShapeKind {
        for_each_variant!(self, s => s.kind())
    }
    fn matrix(&self) -> Matrix3 {
        for_each_variant!(self, s => s.matrix())
    }
    fn set_matrix(&mut self, matrix: Matrix3) {
        for_each_variant!(self, s => s.set_matrix(matrix));
    }
    fn depth(&self) -> f64 {
        for_each_variant!(self, s => s.depth())
    }
    fn set_depth(&mut self, depth: f64) {
        for_each_variant!(self, s => s.set_depth(depth));
    }
    fn points(&self) -> Result<Vec<Point2>> {
        for_each_variant!(self, s => s.points())
    }
    fn bounds(&self) -> Result<Boundary> {
        for_each_variant!(self, s => s.bounds())
    }
    fn center(&self) -> Result<Point2> {
        for_each_variant!(self, s => s.center())
    }
    fn as_generic(&self) -> GenericShape {
        self.clone()
    }
    fn into_generic(self) -> GenericShape {
        self
    }
}

impl Display for GenericShape {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GenericShape::Boundary(b) => write!(
                f,
                "Boundary[l={}, r={}, b={}, t={}]",
                b.left(),
                b.right(),
                b.bottom(),
                b.top()
            ),
            GenericShape::Ellipse(e) => write!(f, "Ellipse[{} segments]", e.detail()),
            GenericShape::Group(g) => write!(f, "Group[{} members]", g.len()),
            GenericShape::Triangle(_) | GenericShape::Quadrangle(_) | GenericShape::Polygon(_) => {
                let vertices = self.as_polygonal().map(|p| p.vertices()).unwrap_or_default();
                write!(f, "{}[{}]", self.kind(), vertices.iter().join(", "))
            }
        }
    }
}

impl From<Boundary> for GenericShape {
    fn from(value: Boundary) -> Self {
        GenericShape::Boundary(value)
    }
}
impl From<Triangle> for GenericShape {
    fn from(value: Triangle) -> Self {
        GenericShape::Triangle(value)
    }
}
impl From<Quadrangle> for GenericShape {
    fn from(value: Quadrangle) -> Self {
        GenericShape::Quadrangle(value)
    }
}
impl From<Polygon> for GenericShape {
    fn from(value: Polygon) -> Self {
        GenericShape::Polygon(value)
    }
}
impl From<Ellipse> for GenericShape {
    fn from(value: Ellipse) -> Self {
        GenericShape::Ellipse(value)
    }
}
impl From<Group> for GenericShape {
    fn from(value: Group) -> Self {
        GenericShape::Group(value)
    }
}
