use thiserror::Error;

/// Errors returned by density evaluation, sampling and the alignment helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VonMisesError {
    #[error("shape mismatch: `{what}` has length {got}, expected 1 or {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("invalid concentration parameter: kappa[{index}] is NaN")]
    InvalidKappa { index: usize },

    #[error("invalid alignment strength {value}, expected a value in [-1, 1]")]
    InvalidAlignmentStrength { value: f64 },

    #[error("reference vector {index} has zero length")]
    DegenerateReference { index: usize },
}

pub type Result<T> = std::result::Result<T, VonMisesError>;
