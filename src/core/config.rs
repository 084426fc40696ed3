pub const EPSILON: f64 = 1e-5;

// Ellipses collide as polygons with this many segments unless told otherwise.
pub const DEFAULT_ELLIPSE_DETAIL: usize = 20;
pub const MIN_ELLIPSE_DETAIL: usize = 3;

/// Circumradius used by the named regular-polygon factories, e.g. [`Polygon::square()`].
///
/// [`Polygon::square()`]: crate::util::polygon::Polygon::square
pub const UNIT_POLYGON_RADIUS: f64 = 0.5;
