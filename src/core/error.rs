use thiserror::Error;

/// Contract violations raised by the geometry core.
///
/// Fallible operations return [`anyhow::Result`] wrapping one of these, so callers that care
/// about the kind can [`downcast_ref`](anyhow::Error::downcast_ref) it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("degenerate vector: cannot {0} a zero-magnitude vector")]
    DegenerateVector(&'static str),

    #[error("singular matrix (determinant {0})")]
    SingularMatrix(f64),

    #[error("{shape} needs at least {expected} points, got {actual}")]
    TooFewPoints {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{shape} needs exactly {expected} points, got {actual}")]
    WrongPointCount {
        shape: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("ellipse detail must be at least {min}, got {actual}")]
    InvalidDetail { min: usize, actual: usize },

    #[error("cannot compute bounds of an empty group")]
    EmptyGroup,

    #[error("unsupported shape pair: {this} vs. {other}")]
    UnsupportedShapePair { this: String, other: String },
}
