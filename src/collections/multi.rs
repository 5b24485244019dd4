//! Multi-dimensional arrays and vectors, built by nesting.
//!
//! `MultiArray3<T, 2, 3, 4>` is indexed `a[i][j][k]` with `i < 2`, `j < 3`
//! and `k < 4`; the innermost dimension is contiguous.

use super::array::Array;
use super::vec::Vector;

/// A `D0 x D1` array.
pub type MultiArray2<T, const D0: usize, const D1: usize> = Array<Array<T, D1>, D0>;

/// A `D0 x D1 x D2` array.
pub type MultiArray3<T, const D0: usize, const D1: usize, const D2: usize> =
    Array<MultiArray2<T, D1, D2>, D0>;

/// A `D0 x D1 x D2 x D3` array.
pub type MultiArray4<T, const D0: usize, const D1: usize, const D2: usize, const D3: usize> =
    Array<MultiArray3<T, D1, D2, D3>, D0>;

/// Up to `D0` rows of up to `D1` elements each.
pub type MultiVector2<T, const D0: usize, const D1: usize> = Vector<Vector<T, D1>, D0>;

/// Up to `D0` planes of up to `D1` rows of up to `D2` elements each.
pub type MultiVector3<T, const D0: usize, const D1: usize, const D2: usize> =
    Vector<MultiVector2<T, D1, D2>, D0>;

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem;

    #[test]
    fn test_multi_array_is_contiguous() {
        let mut grid: MultiArray3<u8, 2, 3, 4> = MultiArray3::default();
        grid[1][2][3] = 9;
        assert_eq!(mem::size_of_val(&grid), 24);

        let flat: &[u8; 24] = unsafe { &*(&grid as *const MultiArray3<u8, 2, 3, 4>).cast() };
        assert_eq!(flat[23], 9);
    }

    #[test]
    fn test_multi_vector_rows() {
        let mut rows: MultiVector2<u32, 2, 3> = MultiVector2::new();
        rows.push(Vector::from_slice(&[1, 2]).unwrap()).unwrap();
        rows.push(Vector::from_slice(&[3]).unwrap()).unwrap();
        assert!(rows.push(Vector::new()).is_err());
        assert_eq!(rows[0][1], 2);
        assert_eq!(rows.iter().map(|row| row.len()).sum::<usize>(), 3);
    }
}
