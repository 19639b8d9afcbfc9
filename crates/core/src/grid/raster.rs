//! Dense 2D grid container

use crate::error::{Error, Result};
use ndarray::{Array2, ArrayView2};

/// A dense 2D grid of cell values.
///
/// `Grid<T>` stores values of type `T` in row-major order. The estimation
/// layers all use it: `Grid<f64>` for density and membership surfaces,
/// `Grid<Option<f64>>` for the value surface where cells outside every
/// kernel's support carry no estimate.
///
/// # Example
///
/// ```ignore
/// use clusterpolate_core::Grid;
///
/// let mut grid: Grid<f64> = Grid::filled(4, 4, 0.0);
/// grid.set(1, 2, 42.0)?;
/// let value = grid.get(1, 2)?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    /// Cell data stored in row-major order (row, col)
    data: Array2<T>,
}

impl<T: Copy> Grid<T> {
    /// Create a new grid filled with a specific value
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            data: Array2::from_elem((rows, cols), value),
        }
    }

    /// Create a grid from a row-major buffer
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
                len: data.len(),
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self { data: array })
    }

    /// Create a grid from an ndarray
    pub fn from_array(data: Array2<T>) -> Self {
        Self { data }
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    // Data access

    /// Get value at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set value at (row, col)
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Get a view of the underlying data
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<T> {
        &self.data
    }

    /// Consume the grid and return the underlying array
    pub fn into_array(self) -> Array2<T> {
        self.data
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid: Grid<f64> = Grid::filled(10, 20, 0.0);
        assert_eq!(grid.rows(), 10);
        assert_eq!(grid.cols(), 20);
        assert_eq!(grid.shape(), (10, 20));
        assert_eq!(grid.len(), 200);
    }

    #[test]
    fn test_grid_access() {
        let mut grid: Grid<f64> = Grid::filled(10, 10, 0.0);
        grid.set(5, 5, 42.0).unwrap();
        assert_eq!(grid.get(5, 5).unwrap(), 42.0);
    }

    #[test]
    fn test_grid_out_of_bounds() {
        let grid: Grid<f64> = Grid::filled(4, 4, 0.0);
        assert!(matches!(
            grid.get(4, 0),
            Err(Error::IndexOutOfBounds { .. })
        ));
    }

    #[test]
    fn test_from_vec_row_major() {
        let grid = Grid::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        assert_eq!(grid.get(0, 2).unwrap(), 3.0);
        assert_eq!(grid.get(1, 0).unwrap(), 4.0);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Grid::from_vec(vec![1.0; 5], 2, 3);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_optional_cells() {
        let mut grid: Grid<Option<f64>> = Grid::filled(2, 2, None);
        grid.set(0, 1, Some(3.5)).unwrap();
        assert_eq!(grid.get(0, 1).unwrap(), Some(3.5));
        assert_eq!(grid.get(1, 1).unwrap(), None);
    }
}
