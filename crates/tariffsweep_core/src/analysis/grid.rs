//! N-dimensional grid storage.

use serde::{Deserialize, Serialize};

/// Number of cells in a grid of the given shape, or `None` on overflow.
#[must_use]
pub fn cell_count(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &len| acc.checked_mul(len))
}

/// One value per grid cell, stored flat with the last dimension varying
/// fastest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGrid<T> {
    data: Vec<T>,
    shape: Vec<usize>,
    /// Cells skipped by a unit step along each dimension
    strides: Vec<usize>,
}

impl<T> SweepGrid<T> {
    /// Wrap row-major cell data. Returns `None` when `data` does not hold
    /// exactly one value per cell of `shape`.
    pub fn from_data(shape: Vec<usize>, data: Vec<T>) -> Option<Self> {
        if cell_count(&shape)? != data.len() {
            return None;
        }
        let mut strides = vec![1; shape.len()];
        for dim in (1..shape.len()).rev() {
            strides[dim - 1] = strides[dim] * shape[dim];
        }
        Some(Self {
            data,
            shape,
            strides,
        })
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Flat position of the cell at `indices`, or `None` when the index
    /// count or any index is out of range
    pub fn flat_index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.shape.len() {
            return None;
        }
        indices
            .iter()
            .zip(&self.shape)
            .zip(&self.strides)
            .try_fold(0, |flat, ((&idx, &len), &stride)| {
                (idx < len).then_some(flat + idx * stride)
            })
    }

    /// Index along dimension `dim` of the cell stored at `flat`
    pub fn axis_index(&self, flat: usize, dim: usize) -> usize {
        (flat / self.strides[dim]) % self.shape[dim]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_2x3x4() -> SweepGrid<usize> {
        SweepGrid::from_data(vec![2, 3, 4], (0..24).collect()).unwrap()
    }

    #[test]
    fn test_from_data_rejects_wrong_length() {
        assert!(SweepGrid::from_data(vec![2, 3], vec![0; 5]).is_none());
    }

    #[test]
    fn test_cell_count_overflow() {
        assert_eq!(cell_count(&[11, 11, 9, 9, 6, 11]), Some(646_866));
        assert_eq!(cell_count(&[]), Some(1));
        assert_eq!(cell_count(&[usize::MAX, 2]), None);
        assert!(SweepGrid::<u8>::from_data(vec![usize::MAX, 2], Vec::new()).is_none());
    }

    #[test]
    fn test_last_dimension_varies_fastest() {
        let grid = grid_2x3x4();
        assert_eq!(grid.flat_index(&[0, 0, 1]), Some(1));
        assert_eq!(grid.flat_index(&[0, 1, 0]), Some(4));
        assert_eq!(grid.flat_index(&[1, 0, 0]), Some(12));
        assert_eq!(grid.data()[grid.flat_index(&[1, 2, 3]).unwrap()], 23);
    }

    #[test]
    fn test_flat_and_axis_index_agree() {
        let grid = grid_2x3x4();
        for i in 0..2 {
            for j in 0..3 {
                for k in 0..4 {
                    let flat = grid.flat_index(&[i, j, k]).unwrap();
                    assert_eq!(grid.axis_index(flat, 0), i);
                    assert_eq!(grid.axis_index(flat, 1), j);
                    assert_eq!(grid.axis_index(flat, 2), k);
                }
            }
        }
    }

    #[test]
    fn test_flat_index_out_of_range() {
        let grid = grid_2x3x4();
        assert_eq!(grid.flat_index(&[0, 3, 0]), None);
        assert_eq!(grid.flat_index(&[2, 0, 0]), None);
        assert_eq!(grid.flat_index(&[0, 0]), None);
    }
}
