//! Layout errors.

use cassowary::{AddConstraintError, RemoveConstraintError};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LayoutError {
    /// The constraint conflicts with the required constraints already present.
    #[error("constraint cannot be satisfied together with the existing layout")]
    Unsatisfiable,

    #[error("constraint is already part of the layout")]
    DuplicateConstraint,

    #[error("constraint is not part of the layout")]
    UnknownConstraint,

    #[error("solver failure: {reason}")]
    Solver { reason: String },

    #[error("invalid viewport {width}x{height}: dimensions must be finite and non-negative")]
    InvalidViewport { width: f64, height: f64 },
}

impl LayoutError {
    /// Recoverable errors leave the universe at its last consistent state.
    #[inline]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Solver { .. })
    }

    /// Short category label for logs.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Unsatisfiable => "unsatisfiable",
            Self::DuplicateConstraint | Self::UnknownConstraint => "constraint",
            Self::Solver { .. } => "solver",
            Self::InvalidViewport { .. } => "viewport",
        }
    }
}

// cassowary's error types carry no Display impl, so map them by hand.
impl From<AddConstraintError> for LayoutError {
    fn from(err: AddConstraintError) -> Self {
        match err {
            AddConstraintError::DuplicateConstraint => Self::DuplicateConstraint,
            AddConstraintError::UnsatisfiableConstraint => Self::Unsatisfiable,
            AddConstraintError::InternalSolverError(reason) => Self::Solver {
                reason: reason.to_string(),
            },
        }
    }
}

impl From<RemoveConstraintError> for LayoutError {
    fn from(err: RemoveConstraintError) -> Self {
        match err {
            RemoveConstraintError::UnknownConstraint => Self::UnknownConstraint,
            RemoveConstraintError::InternalSolverError(reason) => Self::Solver {
                reason: reason.to_string(),
            },
        }
    }
}
