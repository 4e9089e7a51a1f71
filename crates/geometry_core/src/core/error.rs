//! Geometry error types
//!
//! All variants signal programmer error: an index outside its range, a zero
//! divisor, a misused iterator or impossible projection parameters. They are
//! raised synchronously at the point of the offending call and never retried
//! or caught inside this crate.

use thiserror::Error;

/// Result type for checked geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Geometry and vector math errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A structured field access fell outside `[lower, upper)`
    #[error("Index {index} not in range: {lower} to {upper}.")]
    IndexOutOfBounds {
        /// Requested index
        index: usize,
        /// Inclusive lower bound
        lower: usize,
        /// Exclusive upper bound
        upper: usize,
    },

    /// Scalar division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Arithmetic with no defined result, such as normalizing the zero vector
    #[error("Arithmetic error: {0}")]
    Arithmetic(String),

    /// Dereferencing an unbound or exhausted iterator
    #[error("Attempt to access an invalid iterator")]
    InvalidIteratorAccess,

    /// Advancing an iterator past its end
    #[error("Attempt to advance past the end of an iterator")]
    IteratorOverflow,

    /// Projection parameters that describe no viewing volume
    #[error("Invalid projection: {0}")]
    InvalidProjection(String),
}

impl GeometryError {
    /// Out-of-bounds error for an index checked against `[0, upper)`
    pub const fn out_of_bounds(index: usize, upper: usize) -> Self {
        Self::IndexOutOfBounds { index, lower: 0, upper }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_bounds_message() {
        let err = GeometryError::out_of_bounds(3, 3);
        assert_eq!(err.to_string(), "Index 3 not in range: 0 to 3.");
        assert_eq!(err, GeometryError::IndexOutOfBounds { index: 3, lower: 0, upper: 3 });
    }

    #[test]
    fn test_iterator_messages() {
        assert_eq!(
            GeometryError::InvalidIteratorAccess.to_string(),
            "Attempt to access an invalid iterator"
        );
        assert_eq!(
            GeometryError::IteratorOverflow.to_string(),
            "Attempt to advance past the end of an iterator"
        );
    }

    #[test]
    fn test_arithmetic_message() {
        let err = GeometryError::Arithmetic("Can not normalize the zero vector.".to_string());
        assert_eq!(err.to_string(), "Arithmetic error: Can not normalize the zero vector.");
    }

    #[test]
    fn test_projection_message() {
        let err = GeometryError::InvalidProjection("near must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid projection: near must be positive");
    }
}
