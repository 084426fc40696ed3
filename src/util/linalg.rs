#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::gg_float;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A free 2D displacement using 64-bit floating point coordinates.
///
/// [`Vector2`] is the "direction and length" half of the point/vector split: under an affine
/// [`Matrix3`] it is treated as the homogeneous column `(x, y, 0)`, so translation never moves
/// it. Use [`Point2`] for locations.
///
/// The coordinate system is y-up: [`Vector2::up()`] is `(0, 1)` and positive angles turn
/// counterclockwise.
///
/// # Examples
///
/// ```
/// use sat2d::core::prelude::*;
///
/// let v = Vector2::new(3.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v + Vector2::new(1.0, 1.0), Vector2::new(4.0, 5.0));
/// assert_eq!(v.perp(), Vector2::new(-4.0, 3.0));
/// ```
///
/// # Equality
/// Two vectors are equal if each pair of components differs by less than
/// [`EPSILON`](crate::core::config::EPSILON). This absorbs the drift that builds up when a
/// shape's matrix is composed with a small transform every frame. Approximate equality is not
/// transitive, so [`Vector2`] deliberately does not implement [`Eq`] or [`Hash`](std::hash::Hash).
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Vector2 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl Vector2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Vector2 {
        Vector2 { x, y }
    }

    /// Returns a unit vector pointing to the right (positive x-axis).
    #[must_use]
    pub const fn right() -> Vector2 {
        Vector2 { x: 1.0, y: 0.0 }
    }
    /// Returns a unit vector pointing upward (positive y-axis).
    #[must_use]
    pub const fn up() -> Vector2 {
        Vector2 { x: 0.0, y: 1.0 }
    }
    #[must_use]
    pub const fn left() -> Vector2 {
        Vector2 { x: -1.0, y: 0.0 }
    }
    #[must_use]
    pub const fn down() -> Vector2 {
        Vector2 { x: 0.0, y: -1.0 }
    }
    #[must_use]
    pub const fn one() -> Vector2 {
        Vector2 { x: 1.0, y: 1.0 }
    }
    #[must_use]
    pub const fn zero() -> Vector2 {
        Vector2 { x: 0.0, y: 0.0 }
    }
    #[must_use]
    pub const fn splat(v: f64) -> Vector2 {
        Vector2 { x: v, y: v }
    }

    /// Returns the squared length of the vector.
    ///
    /// Use this instead of [`magnitude`](Vector2::magnitude) when comparing lengths to avoid the
    /// square root.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the length of the vector. Never negative.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Returns a vector of length 1 in the same direction.
    ///
    /// # Errors
    /// Fails with [`GeomError::DegenerateVector`] if the magnitude is zero: a zero vector has no
    /// direction, and returning NaNs would poison every later computation.
    pub fn unit(&self) -> Result<Vector2> {
        let len = self.magnitude();
        if len.is_zero() {
            return Err(GeomError::DegenerateVector("normalise").into());
        }
        let mut rv = *self / len;
        rv.x = gg_float::force_positive_zero(rv.x);
        rv.y = gg_float::force_positive_zero(rv.y);
        Ok(rv)
    }

    #[must_use]
    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// The z-component of the 3D cross product of `self` and `other`.
    ///
    /// Positive when `other` lies counterclockwise of `self`.
    #[must_use]
    pub fn cross(&self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector rotated a quarter turn counterclockwise, `(-y, x)`.
    ///
    /// For an edge of a polygon wound counterclockwise this points into the polygon; for SAT only
    /// the line it spans matters.
    #[must_use]
    pub fn perp(&self) -> Vector2 {
        Vector2 {
            x: -self.y,
            y: self.x,
        }
    }

    /// The angle of the vector from the positive x-axis, in radians, in `(-π, π]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// The signed counterclockwise angle from `self` to `other`, in radians, in `(-π, π]`.
    ///
    /// Zero if either vector is zero.
    ///
    /// ```
    /// use sat2d::core::prelude::*;
    /// let quarter = Vector2::right().angle_with(Vector2::up());
    /// assert!((quarter - std::f64::consts::FRAC_PI_2).abs() < EPSILON);
    /// assert!((Vector2::up().angle_with(Vector2::right()) + quarter).abs() < EPSILON);
    /// ```
    #[must_use]
    pub fn angle_with(&self, other: Vector2) -> f64 {
        self.cross(other).atan2(self.dot(other))
    }

    /// Projects this vector onto the line spanned by `onto`.
    ///
    /// # Errors
    /// Fails with [`GeomError::DegenerateVector`] if `onto` is zero.
    pub fn projected_onto(&self, onto: Vector2) -> Result<Vector2> {
        let axis = onto
            .unit()
            .map_err(|_| GeomError::DegenerateVector("project onto"))?;
        Ok(self.dot(axis) * axis)
    }

    /// The signed length of this vector along `axis`.
    ///
    /// Unlike `projected_onto(axis).magnitude()`, the sign is kept: a vector pointing against
    /// `axis` gives a negative result.
    ///
    /// # Errors
    /// Fails with [`GeomError::DegenerateVector`] if `axis` is zero.
    pub fn scalar_projection(&self, axis: Vector2) -> Result<f64> {
        let axis = axis
            .unit()
            .map_err(|_| GeomError::DegenerateVector("project onto"))?;
        Ok(self.dot(axis))
    }

    /// Returns the vector rotated counterclockwise by `radians`.
    #[must_use]
    pub fn rotated(&self, radians: f64) -> Vector2 {
        Matrix3::rotate(radians) * *self
    }

    #[must_use]
    pub fn component_wise(&self, other: Vector2) -> Vector2 {
        Vector2 {
            x: self.x * other.x,
            y: self.y * other.y,
        }
    }

    #[must_use]
    pub fn abs(&self) -> Vector2 {
        Vector2 {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    /// Checks if the length of the difference is less than [`EPSILON`].
    pub fn almost_eq(&self, rhs: Vector2) -> bool {
        (*self - rhs).magnitude() < EPSILON
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Zero for Vector2 {
    fn zero() -> Self {
        Vector2::zero()
    }

    fn is_zero(&self) -> bool {
        self.almost_eq(Self::zero())
    }
}

impl From<[f64; 2]> for Vector2 {
    fn from(value: [f64; 2]) -> Self {
        Vector2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Vector2 {
    fn from(value: (f64, f64)) -> Self {
        Vector2 {
            x: value.0,
            y: value.1,
        }
    }
}
impl From<Vector2> for [f64; 2] {
    fn from(value: Vector2) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "vec({0:.2$}, {1:.2$})", self.x, self.y, p),
            None => write!(f, "vec({}, {})", self.x, self.y),
        }
    }
}

impl Add<Vector2> for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vector2> for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub<Vector2> for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl SubAssign<Vector2> for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Sum<Vector2> for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Self {
        iter.fold(Vector2::zero(), Vector2::add)
    }
}
impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, rhs: f64) -> Self::Output {
        rhs * self
    }
}
impl Mul<Vector2> for f64 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self * rhs.x,
            y: self * rhs.y,
        }
    }
}
impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}
impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, rhs: f64) -> Self::Output {
        Vector2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}
impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Self::Output {
        Vector2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// A fixed location in the plane.
///
/// Points and vectors are separate types because they transform differently: a [`Matrix3`]
/// treats a point as `(x, y, 1)`, so translations move it. The arithmetic is restricted to the
/// affine operations: `point + vector`, `point - vector` and `point - point`.
///
/// ```
/// use sat2d::core::prelude::*;
///
/// let p = Point2::new(1.0, 2.0);
/// let v = Vector2::new(3.0, -1.0);
/// assert_eq!((p + v) - p, v);
/// assert_eq!(Matrix3::translate(1.0, 1.0) * p, Point2::new(2.0, 3.0));
/// assert_eq!(Matrix3::translate(1.0, 1.0) * v, v);
/// ```
#[derive(Default, Debug, Copy, Clone, Serialize, Deserialize)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl PartialEq for Point2 {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl Point2 {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Point2 {
        Point2 { x, y }
    }
    #[must_use]
    pub const fn origin() -> Point2 {
        Point2 { x: 0.0, y: 0.0 }
    }

    /// The displacement of this point from the origin.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        Vector2 {
            x: self.x,
            y: self.y,
        }
    }

    #[must_use]
    pub fn distance(&self, other: Point2) -> f64 {
        (other - *self).magnitude()
    }

    #[must_use]
    pub fn lerp(&self, to: Point2, t: f64) -> Point2 {
        Point2 {
            x: lerp(self.x, to.x, t),
            y: lerp(self.y, to.y, t),
        }
    }

    pub fn almost_eq(&self, rhs: Point2) -> bool {
        self.distance(rhs) < EPSILON
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(value: [f64; 2]) -> Self {
        Point2 {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Point2 {
    fn from(value: (f64, f64)) -> Self {
        Point2 {
            x: value.0,
            y: value.1,
        }
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "pt({0:.2$}, {1:.2$})", self.x, self.y, p),
            None => write!(f, "pt({}, {})", self.x, self.y),
        }
    }
}

impl Add<Vector2> for Point2 {
    type Output = Point2;

    fn add(self, rhs: Vector2) -> Self::Output {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<Vector2> for Point2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub<Vector2> for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Vector2) -> Self::Output {
        self + -rhs
    }
}
impl SubAssign<Vector2> for Point2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}
impl Sub<Point2> for Point2 {
    type Output = Vector2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Vector2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// A 3x3 matrix for 2D affine transformations in homogeneous coordinates.
///
/// The entries are laid out row by row:
/// ```text
/// | a b c |
/// | d e f |
/// | g h i |
/// ```
/// `a, b, d, e` are the linear part and `c, f` the translation. Every matrix built from the
/// factories here keeps the bottom row at `0 0 1`.
///
/// Products compose right to left: `(m2 * m1) * p` applies `m1` first, then `m2`. The only
/// supported right-hand operands are [`Matrix3`], [`Point2`] and [`Vector2`]; anything else is a
/// compile error.
#[derive(Debug, Copy, Clone, Serialize, Deserialize)]
#[must_use]
pub struct Matrix3 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
    pub i: f64,
}

impl Matrix3 {
    pub const fn new(rows: [[f64; 3]; 3]) -> Matrix3 {
        let [[a, b, c], [d, e, f], [g, h, i]] = rows;
        Matrix3 {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
            i,
        }
    }

    pub const fn identity() -> Matrix3 {
        Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// ```text
    /// | 1 0 x |
    /// | 0 1 y |
    /// | 0 0 1 |
    /// ```
    pub const fn translate(x: f64, y: f64) -> Matrix3 {
        Self::new([[1.0, 0.0, x], [0.0, 1.0, y], [0.0, 0.0, 1.0]])
    }
    pub const fn translate_by(by: Vector2) -> Matrix3 {
        Self::translate(by.x, by.y)
    }

    /// Rotation about the origin, counterclockwise for positive `radians`:
    /// ```text
    /// | cos(θ)  -sin(θ)  0 |
    /// | sin(θ)   cos(θ)  0 |
    /// | 0        0       1 |
    /// ```
    pub fn rotate(radians: f64) -> Matrix3 {
        let (sin, cos) = radians.sin_cos();
        Self::new([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Scaling about the origin.
    pub const fn scale(x: f64, y: f64) -> Matrix3 {
        Self::new([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, 1.0]])
    }
    pub const fn scale_by(by: Vector2) -> Matrix3 {
        Self::scale(by.x, by.y)
    }

    /// Shear about the origin: `x' = x + sx * y`, `y' = y + sy * x`.
    pub const fn shear(sx: f64, sy: f64) -> Matrix3 {
        Self::new([[1.0, sx, 0.0], [sy, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.a * (self.e * self.i - self.f * self.h) - self.b * (self.d * self.i - self.f * self.g)
            + self.c * (self.d * self.h - self.e * self.g)
    }

    /// The inverse matrix, via the adjugate.
    ///
    /// # Errors
    /// Fails with [`GeomError::SingularMatrix`] if the determinant is zero, e.g. after a zero
    /// scale, or if the inverse would not be finite. Tiny but non-zero scales are invertible.
    pub fn inverse(&self) -> Result<Matrix3> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() || !(1.0 / det).is_finite() {
            return Err(GeomError::SingularMatrix(det).into());
        }
        let adj = Self::new([
            [
                self.e * self.i - self.f * self.h,
                self.c * self.h - self.b * self.i,
                self.b * self.f - self.c * self.e,
            ],
            [
                self.f * self.g - self.d * self.i,
                self.a * self.i - self.c * self.g,
                self.c * self.d - self.a * self.f,
            ],
            [
                self.d * self.h - self.e * self.g,
                self.b * self.g - self.a * self.h,
                self.a * self.e - self.b * self.d,
            ],
        ]);
        Ok(adj.scaled_entries(1.0 / det))
    }

    fn scaled_entries(&self, k: f64) -> Matrix3 {
        Self::new([
            [k * self.a, k * self.b, k * self.c],
            [k * self.d, k * self.e, k * self.f],
            [k * self.g, k * self.h, k * self.i],
        ])
    }

    #[must_use]
    pub fn rows(&self) -> [[f64; 3]; 3] {
        [
            [self.a, self.b, self.c],
            [self.d, self.e, self.f],
            [self.g, self.h, self.i],
        ]
    }

    #[must_use]
    pub fn almost_eq(&self, rhs: Matrix3) -> bool {
        self.rows()
            .iter()
            .flatten()
            .zip(rhs.rows().iter().flatten())
            .all(|(l, r)| (l - r).abs() < EPSILON)
    }
}

impl PartialEq for Matrix3 {
    fn eq(&self, other: &Self) -> bool {
        self.almost_eq(*other)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl One for Matrix3 {
    fn one() -> Self {
        Self::identity()
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} {}; {} {} {}; {} {} {}]",
            self.a, self.b, self.c, self.d, self.e, self.f, self.g, self.h, self.i
        )
    }
}

impl Mul<Matrix3> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Self::Output {
        let l = self.rows();
        let r = rhs.rows();
        let mut out = [[0.0; 3]; 3];
        for (row, out_row) in out.iter_mut().enumerate() {
            for (col, entry) in out_row.iter_mut().enumerate() {
                *entry = (0..3).map(|k| l[row][k] * r[k][col]).sum();
            }
        }
        Matrix3::new(out)
    }
}
impl MulAssign<Matrix3> for Matrix3 {
    /// `m *= rhs` is `m = m * rhs`, i.e. `rhs` is applied first.
    fn mul_assign(&mut self, rhs: Matrix3) {
        *self = *self * rhs;
    }
}

impl Mul<Point2> for Matrix3 {
    type Output = Point2;

    fn mul(self, rhs: Point2) -> Self::Output {
        Point2 {
            x: self.a * rhs.x + self.b * rhs.y + self.c,
            y: self.d * rhs.x + self.e * rhs.y + self.f,
        }
    }
}

impl Mul<Vector2> for Matrix3 {
    type Output = Vector2;

    fn mul(self, rhs: Vector2) -> Self::Output {
        Vector2 {
            x: self.a * rhs.x + self.b * rhs.y,
            y: self.d * rhs.x + self.e * rhs.y,
        }
    }
}

/// A scale factor: either the same in both axes, or per-axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Scale {
    Uniform(f64),
    PerAxis(Vector2),
}

impl Scale {
    #[must_use]
    pub fn as_vector(&self) -> Vector2 {
        match *self {
            Scale::Uniform(k) => Vector2::splat(k),
            Scale::PerAxis(v) => v,
        }
    }
}

impl From<f64> for Scale {
    fn from(value: f64) -> Self {
        Scale::Uniform(value)
    }
}
impl From<Vector2> for Scale {
    fn from(value: Vector2) -> Self {
        Scale::PerAxis(value)
    }
}
impl From<(f64, f64)> for Scale {
    fn from(value: (f64, f64)) -> Self {
        Scale::PerAxis(value.into())
    }
}

/// A declarative description of an affine transformation.
///
/// Every part is optional; [`to_m()`](Transform::to_m) turns the description into a [`Matrix3`]
/// by applying, in this order:
///
/// 1. shift by `-pivot` (so the pivot sits at the origin),
/// 2. `shear`,
/// 3. `scale`,
/// 4. rotate by `angle`,
/// 5. translate by `shift`,
/// 6. shift by `+pivot`.
///
/// So rotation and scale happen about the pivot, and the shift is applied relative to it.
///
/// # Examples
///
/// ```
/// use sat2d::core::prelude::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// // A quarter turn about (1, 0).
/// let m = Transform::new()
///     .with_angle(FRAC_PI_2)
///     .with_pivot(Point2::new(1.0, 0.0))
///     .to_m();
/// assert_eq!(m * Point2::new(2.0, 0.0), Point2::new(1.0, 1.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub angle: Option<f64>,
    pub scale: Option<Scale>,
    pub shear: Option<Vector2>,
    pub shift: Option<Vector2>,
    pub pivot: Option<Point2>,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_angle(mut self, angle: f64) -> Self {
        self.angle = Some(angle);
        self
    }
    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<Scale>) -> Self {
        self.scale = Some(scale.into());
        self
    }
    #[must_use]
    pub fn with_shear(mut self, shear: Vector2) -> Self {
        self.shear = Some(shear);
        self
    }
    #[must_use]
    pub fn with_shift(mut self, shift: Vector2) -> Self {
        self.shift = Some(shift);
        self
    }
    #[must_use]
    pub fn with_pivot(mut self, pivot: Point2) -> Self {
        self.pivot = Some(pivot);
        self
    }

    pub fn to_m(&self) -> Matrix3 {
        let pivot = self.pivot.map(|p| p.to_vector());
        let mut m = Matrix3::identity();
        if let Some(pivot) = pivot {
            m = Matrix3::translate_by(-pivot) * m;
        }
        if let Some(shear) = self.shear {
            m = Matrix3::shear(shear.x, shear.y) * m;
        }
        if let Some(scale) = self.scale {
            m = Matrix3::scale_by(scale.as_vector()) * m;
        }
        if let Some(angle) = self.angle {
            m = Matrix3::rotate(angle) * m;
        }
        if let Some(shift) = self.shift {
            m = Matrix3::translate_by(shift) * m;
        }
        if let Some(pivot) = pivot {
            m = Matrix3::translate_by(pivot) * m;
        }
        m
    }
}

impl From<Transform> for Matrix3 {
    fn from(value: Transform) -> Self {
        value.to_m()
    }
}

/// A linear interpolation between two values.
///
/// ```
/// use sat2d::core::prelude::*;
/// assert_eq!(linalg::lerp(0.0, 10.0, 0.5), 5.0);
/// ```
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
