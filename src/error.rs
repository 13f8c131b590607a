//! Error types for checked grid access and array interop

use std::fmt;

use crate::configuration::OUT_OF_RANGE_LABEL;
use crate::spatial::coordinate::Vector2;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// Checked access outside the grid bounds
    ///
    /// Raised only by `Grid2D::at` and `Grid2D::at_mut`. The coordinate is
    /// `None` when the requested index could not be represented as `i64`.
    OutOfRange {
        /// Fixed descriptive label of the structure that rejected the access
        label: &'static str,
        /// Absolute coordinate that was requested
        coordinate: Option<Vector2<i64>>,
    },

    /// `ndarray` rejected the shape or strides of a conversion
    Shape {
        /// Underlying shape error
        source: ndarray::ShapeError,
    },
}

impl GridError {
    /// Out-of-range error for a representable coordinate
    pub const fn out_of_range(coordinate: Vector2<i64>) -> Self {
        Self::OutOfRange {
            label: OUT_OF_RANGE_LABEL,
            coordinate: Some(coordinate),
        }
    }

    /// Out-of-range error for an index that does not fit the coordinate type
    pub const fn unrepresentable() -> Self {
        Self::OutOfRange {
            label: OUT_OF_RANGE_LABEL,
            coordinate: None,
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                label,
                coordinate: Some(point),
            } => {
                write!(f, "{label}: coordinate ({}, {}) is out of range", point.x, point.y)
            }
            Self::OutOfRange {
                label,
                coordinate: None,
            } => {
                write!(f, "{label}: coordinate is not representable")
            }
            Self::Shape { source } => {
                write!(f, "Array shape error: {source}")
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Shape { source } => Some(source),
            Self::OutOfRange { .. } => None,
        }
    }
}

impl From<ndarray::ShapeError> for GridError {
    fn from(err: ndarray::ShapeError) -> Self {
        Self::Shape { source: err }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;
