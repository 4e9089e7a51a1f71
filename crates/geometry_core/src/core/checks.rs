//! Build-time bounds-checking switch
//!
//! Checked builds (the default) report misuse as [`GeometryError`] values.
//! Building with `--no-default-features` turns [`ENABLED`] into a constant
//! `false`, so every guard below folds away and callers pay nothing for it.
//!
//! With the checks compiled out the behaviour of a violating call is
//! unspecified. The crate contains no `unsafe`, so an out-of-range index
//! still ends in a slice-indexing panic instead of memory corruption, but no
//! typed error is produced and iterator misuse goes unnoticed.

use super::error::{GeometryError, GeometryResult};

/// Whether this build carries the bounds, state and divisor checks
pub const ENABLED: bool = cfg!(feature = "bounds-checks");

/// Check `index` against `[0, upper)`
#[inline(always)]
pub fn index(index: usize, upper: usize) -> GeometryResult<()> {
    if ENABLED && index >= upper {
        return Err(GeometryError::out_of_bounds(index, upper));
    }
    Ok(())
}

/// Check that a divisor is non-zero
#[inline(always)]
pub fn divisor(is_zero: bool) -> GeometryResult<()> {
    if ENABLED && is_zero {
        return Err(GeometryError::DivisionByZero);
    }
    Ok(())
}

/// Unwrap a checked result inside an operator impl that cannot return it
#[inline(always)]
#[track_caller]
pub(crate) fn or_panic<T>(result: GeometryResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_in_range() {
        assert!(index(0, 3).is_ok());
        assert!(index(2, 3).is_ok());
    }

    #[cfg(feature = "bounds-checks")]
    #[test]
    fn test_index_out_of_range() {
        assert_eq!(index(3, 3), Err(GeometryError::out_of_bounds(3, 3)));
        assert_eq!(divisor(true), Err(GeometryError::DivisionByZero));
    }

    #[cfg(not(feature = "bounds-checks"))]
    #[test]
    fn test_checks_compiled_out() {
        assert!(index(7, 3).is_ok());
        assert!(divisor(true).is_ok());
    }
}
