#[cfg(test)]
mod tests;

use std::error::Error;
use std::fmt;

use log::*;
use ndarray::Array2;
use ndarray_stats::QuantileExt;

#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    Empty,
    Negative { row: usize, col: usize, value: f64 },
    NotFinite { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::Negative { row, col, value } => {
                write!(f, "grid cell [{}, {}] has negative value {}", row, col, value)
            }
            GridError::NotFinite { row, col } => {
                write!(f, "grid cell [{}, {}] has a non-finite value", row, col)
            }
        }
    }
}

impl Error for GridError {}

/// Normalizes every cell by the grid maximum into [0, 1]. An all-zero grid
/// maps to an all-zero intensity grid instead of dividing by zero.
pub fn compute_intensity_grid(grid: &Array2<f64>) -> Result<Array2<f64>, GridError> {
    validate_grid(grid)?;

    let grid_max = *grid.max_skipnan();
    debug!(
        "normalizing {}x{} grid, max {}",
        grid.nrows(),
        grid.ncols(),
        grid_max
    );
    if grid_max == 0.0 {
        return Ok(Array2::zeros(grid.raw_dim()));
    }

    Ok(grid.mapv(|cell| cell / grid_max))
}

fn validate_grid(grid: &Array2<f64>) -> Result<(), GridError> {
    if grid.nrows() == 0 || grid.ncols() == 0 {
        return Err(GridError::Empty);
    }
    for ((row, col), cell) in grid.indexed_iter() {
        if !cell.is_finite() {
            return Err(GridError::NotFinite { row, col });
        }
        if *cell < 0.0 {
            return Err(GridError::Negative {
                row,
                col,
                value: *cell,
            });
        }
    }
    Ok(())
}
