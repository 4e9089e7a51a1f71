//! Two-level accessors over flat attribute arrays
//!
//! An attribute array stores one primitive after another, each primitive as
//! its corners in order and each corner as its components. The accessors
//! give that flat run of floats a shape:
//!
//! - [`PrimitiveAccessor`] covers one primitive (`CORNERS * WIDTH` floats)
//!   and is indexed by corner
//! - [`CornerAccessor`] covers one corner (`WIDTH` floats) and is indexed by
//!   component
//!
//! Both are plain borrowed slices, returned by value and validated per
//! level. No copies are made; every write lands in the owning set's array.

use std::ops::{Index, IndexMut};

use crate::core::checks;
use crate::core::error::GeometryResult;
use crate::foundation::vector::Vector;

/// Corner-indexed view of one primitive's attribute data
#[derive(Debug)]
pub struct PrimitiveAccessor<'a, const CORNERS: usize, const WIDTH: usize> {
    data: &'a mut [f32],
}

impl<'a, const CORNERS: usize, const WIDTH: usize> PrimitiveAccessor<'a, CORNERS, WIDTH> {
    pub(crate) fn new(data: &'a mut [f32]) -> Self {
        Self { data }
    }

    /// Number of corners addressable through this accessor
    pub const fn corners(&self) -> usize {
        CORNERS
    }

    /// Component accessor for corner `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, CORNERS)` when `i >= CORNERS`.
    pub fn corner(&mut self, i: usize) -> GeometryResult<CornerAccessor<'_, WIDTH>> {
        checks::index(i, CORNERS)?;
        Ok(CornerAccessor::new(&mut self.data[i * WIDTH..(i + 1) * WIDTH]))
    }

    /// Consume the accessor, yielding the component accessor for corner `i`
    /// with the full borrow lifetime
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, CORNERS)` when `i >= CORNERS`.
    pub fn into_corner(self, i: usize) -> GeometryResult<CornerAccessor<'a, WIDTH>> {
        checks::index(i, CORNERS)?;
        let data = self.data;
        Ok(CornerAccessor::new(&mut data[i * WIDTH..(i + 1) * WIDTH]))
    }

    /// Snapshot of corner `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, CORNERS)` when `i >= CORNERS`.
    pub fn read(&self, i: usize) -> GeometryResult<Vector<WIDTH, f32>> {
        checks::index(i, CORNERS)?;
        Ok(Vector::from_fn(|c| self.data[i * WIDTH + c]))
    }

    /// Write every corner from `corners`, in order
    pub fn assign_all(&mut self, corners: &[Vector<WIDTH, f32>; CORNERS]) {
        for (chunk, v) in self.data.chunks_exact_mut(WIDTH).zip(corners) {
            chunk.copy_from_slice(v.as_slice());
        }
    }

    /// Raw mutable view of the whole primitive, `CORNERS * WIDTH` floats
    ///
    /// Writes through this slice bypass the per-level corner and component
    /// checks. It exists for bulk writes.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }
}

impl<const CORNERS: usize, const WIDTH: usize> Index<usize> for PrimitiveAccessor<'_, CORNERS, WIDTH> {
    type Output = [f32];

    /// # Panics
    /// With `IndexOutOfBounds` when `i >= CORNERS`.
    fn index(&self, i: usize) -> &[f32] {
        checks::or_panic(checks::index(i, CORNERS));
        &self.data[i * WIDTH..(i + 1) * WIDTH]
    }
}

impl<const CORNERS: usize, const WIDTH: usize> IndexMut<usize> for PrimitiveAccessor<'_, CORNERS, WIDTH> {
    fn index_mut(&mut self, i: usize) -> &mut [f32] {
        checks::or_panic(checks::index(i, CORNERS));
        &mut self.data[i * WIDTH..(i + 1) * WIDTH]
    }
}

/// Component-indexed view of one corner's attribute data
#[derive(Debug)]
pub struct CornerAccessor<'a, const WIDTH: usize> {
    data: &'a mut [f32],
}

impl<'a, const WIDTH: usize> CornerAccessor<'a, WIDTH> {
    pub(crate) fn new(data: &'a mut [f32]) -> Self {
        Self { data }
    }

    /// Number of components addressable through this accessor
    pub const fn components(&self) -> usize {
        WIDTH
    }

    /// Component `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, WIDTH)` when `i >= WIDTH`.
    pub fn get(&self, i: usize) -> GeometryResult<f32> {
        checks::index(i, WIDTH)?;
        Ok(self.data[i])
    }

    /// Set component `i`
    ///
    /// # Errors
    /// `IndexOutOfBounds(i, 0, WIDTH)` when `i >= WIDTH`.
    pub fn set(&mut self, i: usize, value: f32) -> GeometryResult<()> {
        checks::index(i, WIDTH)?;
        self.data[i] = value;
        Ok(())
    }

    /// Raw mutable view of the `WIDTH` contiguous components
    ///
    /// Writes through this slice skip the accessor's component check. It is
    /// the escape hatch for bulk writes.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut *self.data
    }

    /// Consume the accessor, returning the raw view with the full borrow lifetime
    pub fn into_slice(self) -> &'a mut [f32] {
        self.data
    }

    /// Copy the components into a vector
    ///
    /// The snapshot is detached: changing it does not touch the array.
    pub fn to_vector(&self) -> Vector<WIDTH, f32> {
        Vector::from_fn(|i| self.data[i])
    }

    /// Overwrite the components from a vector
    pub fn assign(&mut self, v: &Vector<WIDTH, f32>) {
        self.data.copy_from_slice(v.as_slice());
    }
}

impl<const WIDTH: usize> Index<usize> for CornerAccessor<'_, WIDTH> {
    type Output = f32;

    /// # Panics
    /// With `IndexOutOfBounds` when `i >= WIDTH`.
    fn index(&self, i: usize) -> &f32 {
        checks::or_panic(checks::index(i, WIDTH));
        &self.data[i]
    }
}

impl<const WIDTH: usize> IndexMut<usize> for CornerAccessor<'_, WIDTH> {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        checks::or_panic(checks::index(i, WIDTH));
        &mut self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "bounds-checks")]
    use crate::core::error::GeometryError;
    use crate::foundation::vector::Vector3;

    #[test]
    fn test_corner_offsets() {
        let mut data = [0.0_f32; 6];
        {
            let mut prim = PrimitiveAccessor::<2, 3>::new(&mut data);
            prim.corner(1).unwrap().set(2, 9.0).unwrap();
            prim.corner(0).unwrap().set(0, 1.0).unwrap();
            prim[1][0] = 4.0;
        }
        assert_eq!(data, [1.0, 0.0, 0.0, 4.0, 0.0, 9.0]);
    }

    #[cfg(feature = "bounds-checks")]
    #[test]
    fn test_each_level_checks_its_own_range() {
        let mut data = [0.0_f32; 6];
        let mut prim = PrimitiveAccessor::<3, 2>::new(&mut data);
        assert_eq!(prim.corner(3).unwrap_err(), GeometryError::out_of_bounds(3, 3));

        let mut corner = prim.corner(2).unwrap();
        assert_eq!(corner.get(2), Err(GeometryError::out_of_bounds(2, 2)));
        assert_eq!(corner.set(5, 1.0), Err(GeometryError::out_of_bounds(5, 2)));
    }

    #[cfg(feature = "bounds-checks")]
    #[test]
    #[should_panic(expected = "Index 2 not in range: 0 to 2.")]
    fn test_index_operator_panics() {
        let mut data = [0.0_f32; 4];
        let prim = PrimitiveAccessor::<2, 2>::new(&mut data);
        let _ = &prim[2];
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut data = [1.0_f32, 2.0, 3.0];
        let mut corner = CornerAccessor::<3>::new(&mut data);

        let mut snapshot = corner.to_vector();
        snapshot[0] = 100.0;
        assert_eq!(corner.get(0), Ok(1.0));

        corner.assign(&Vector3::new(7.0, 8.0, 9.0));
        assert_eq!(data, [7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_raw_slice_escape_hatch() {
        let mut data = [0.0_f32; 4];
        {
            let mut prim = PrimitiveAccessor::<2, 2>::new(&mut data);
            prim.corner(1).unwrap().as_mut_slice().copy_from_slice(&[5.0, 6.0]);
            assert_eq!(prim.read(1).unwrap().into_array(), [5.0, 6.0]);
            prim.as_mut_slice()[0] = -1.0;
        }
        assert_eq!(data, [-1.0, 0.0, 5.0, 6.0]);
    }
}
