pub mod assert;
pub mod boundary;
pub mod collision;
pub mod ellipse;
pub mod group;
pub mod linalg;
pub mod log;
pub mod polygon;

pub mod gg_iter {
    /// Folds an iterator of `f64` into its `[min, max]` interval, or `None` if it is empty.
    pub fn min_max_f64<I: IntoIterator<Item = f64>>(iter: I) -> Option<(f64, f64)> {
        iter.into_iter().fold(None, |acc, x| match acc {
            None => Some((x, x)),
            Some((min, max)) => Some((min.min(x), max.max(x))),
        })
    }
}

pub mod gg_float {
    use num_traits::Zero;

    pub fn force_positive_zero(x: f64) -> f64 {
        if x.is_zero() { 0.0 } else { x }
    }
}

pub mod gg_range {
    /// Inclusive interval overlap test between `[a, b]` and `[c, d]`.
    ///
    /// Touching intervals (`b == c`) overlap. Both intervals must be ordered (`a <= b`,
    /// `c <= d`); the four cases cover `[c, d]` starting inside, ending inside, lying inside, or
    /// containing `[a, b]`.
    #[allow(clippy::nonminimal_bool)]
    pub fn overlap_f64(a: f64, b: f64, c: f64, d: f64) -> bool {
        (a <= c && b >= c) || (a <= d && b >= d) || (a <= c && b >= d) || (a >= c && b <= d)
    }

    /// Whether the closed interval `outer` contains the closed interval `inner`.
    pub fn contains_f64(outer: (f64, f64), inner: (f64, f64)) -> bool {
        outer.0 <= inner.0 && inner.1 <= outer.1
    }
}

/// A pair that compares equal regardless of the order its elements were given in.
///
/// The smaller element is always stored first, so `UnorderedPair::new(a, b)` and
/// `UnorderedPair::new(b, a)` are the same value.
#[derive(Copy, Clone, Debug, Hash, Ord, PartialOrd, Eq, PartialEq)]
pub struct UnorderedPair<T: Copy + Ord>(T, T);

impl<T: Copy + Ord> UnorderedPair<T> {
    pub fn new(a: T, b: T) -> Self {
        if a < b { Self(a, b) } else { Self(b, a) }
    }
    pub fn new_distinct(a: T, b: T) -> Option<Self> {
        if a == b { None } else { Some(Self::new(a, b)) }
    }

    pub fn fst(&self) -> T {
        self.0
    }
    pub fn snd(&self) -> T {
        self.1
    }
    pub fn contains(&self, value: T) -> bool {
        self.fst() == value || self.snd() == value
    }
}

impl<T: Copy + Ord> From<(T, T)> for UnorderedPair<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}
