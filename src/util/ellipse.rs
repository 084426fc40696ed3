use crate::core::prelude::*;
use crate::util::collision::impl_shape_state;
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse (before transform), collided as an inscribed polygon with
/// [`detail`](Ellipse::detail) segments.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "EllipseData")]
pub struct Ellipse {
    centre: Point2,
    rx: f64,
    ry: f64,
    detail: usize,
    matrix: Matrix3,
    depth: f64,
}

#[derive(Deserialize)]
struct EllipseData {
    centre: Point2,
    rx: f64,
    ry: f64,
    detail: usize,
    matrix: Matrix3,
    depth: f64,
}

impl TryFrom<EllipseData> for Ellipse {
    type Error = GeomError;

    fn try_from(value: EllipseData) -> Result<Self, Self::Error> {
        if value.detail < MIN_ELLIPSE_DETAIL {
            return Err(GeomError::InvalidDetail {
                min: MIN_ELLIPSE_DETAIL,
                actual: value.detail,
            });
        }
        Ok(Self {
            centre: value.centre,
            rx: value.rx.abs(),
            ry: value.ry.abs(),
            detail: value.detail,
            matrix: value.matrix,
            depth: value.depth,
        })
    }
}

impl Ellipse {
    pub fn new(centre: Point2, rx: f64, ry: f64) -> Self {
        Self {
            centre,
            rx: rx.abs(),
            ry: ry.abs(),
            detail: DEFAULT_ELLIPSE_DETAIL,
            matrix: Matrix3::identity(),
            depth: 0.0,
        }
    }
    pub fn circle(centre: Point2, radius: f64) -> Self {
        Self::new(centre, radius, radius)
    }

    /// Replaces the segment count used for tessellation.
    pub fn with_detail(mut self, detail: usize) -> Result<Self> {
        if detail < MIN_ELLIPSE_DETAIL {
            return Err(GeomError::InvalidDetail {
                min: MIN_ELLIPSE_DETAIL,
                actual: detail,
            }
            .into());
        }
        self.detail = detail;
        Ok(self)
    }

    pub fn detail(&self) -> usize {
        self.detail
    }
    pub fn radii(&self) -> Vector2 {
        Vector2::new(self.rx, self.ry)
    }

    /// Untransformed tessellation, counterclockwise from the +X extreme.
    fn raw_points(&self) -> impl Iterator<Item = Point2> + '_ {
        (0..self.detail).map(|k| {
            let theta = std::f64::consts::TAU * k as f64 / self.detail as f64;
            let (sin, cos) = theta.sin_cos();
            self.centre + Vector2::new(self.rx * cos, self.ry * sin)
        })
    }
}

impl Polygonal for Ellipse {
    fn vertices(&self) -> Vec<Point2> {
        self.raw_points().map(|p| self.matrix * p).collect()
    }
}

impl Shape for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }
    impl_shape_state!();

    fn points(&self) -> Result<Vec<Point2>> {
        Ok(self.vertices())
    }
    fn bounds(&self) -> Result<Boundary> {
        Boundary::envelope(&self.vertices())
    }
    fn center(&self) -> Result<Point2> {
        Ok(self.matrix * self.centre)
    }
    fn into_generic(self) -> GenericShape {
        GenericShape::Ellipse(self)
    }
}
