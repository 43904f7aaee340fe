use ndarray::{arr2, Array2};

use crate::intensity::{compute_intensity_grid, GridError};

#[test]
fn normalize_against_grid_max() {
    let grid = arr2(&[[0.0, 50.0], [100.0, 25.0]]);
    let intensities = compute_intensity_grid(&grid).unwrap();

    let expected = arr2(&[[0.0, 0.5], [1.0, 0.25]]);
    assert_eq!(intensities, expected);
}

#[test]
fn all_zero_grid_maps_to_zero_intensities() {
    let grid = arr2(&[[0.0, 0.0], [0.0, 0.0]]);
    let intensities = compute_intensity_grid(&grid).unwrap();

    assert_eq!(intensities, Array2::zeros((2, 2)));
    assert!(intensities.iter().all(|cell| !cell.is_nan()));
}

#[test]
fn intensities_stay_in_unit_interval() {
    let grid = Array2::from_shape_fn((7, 24), |(row, col)| ((row * 31 + col * 7) % 100) as f64);
    let intensities = compute_intensity_grid(&grid).unwrap();

    assert_eq!(intensities.dim(), (7, 24));
    assert!(intensities
        .iter()
        .all(|cell| (0.0..=1.0).contains(cell)));
    assert!(intensities.iter().any(|cell| *cell == 1.0));
}

#[test]
fn shape_is_preserved() {
    let grid = Array2::from_elem((3, 5), 4.2);
    let intensities = compute_intensity_grid(&grid).unwrap();
    assert_eq!(intensities.dim(), grid.dim());
    assert!(intensities.iter().all(|cell| *cell == 1.0));
}

#[test]
fn negative_cell_is_rejected() {
    let grid = arr2(&[[1.0, 2.0], [-3.0, 4.0]]);

    let err = compute_intensity_grid(&grid).unwrap_err();
    assert_eq!(
        err,
        GridError::Negative {
            row: 1,
            col: 0,
            value: -3.0
        }
    );
}

#[test]
fn nan_cell_is_rejected() {
    let grid = arr2(&[[1.0, f64::NAN]]);

    let err = compute_intensity_grid(&grid).unwrap_err();
    assert_eq!(err, GridError::NotFinite { row: 0, col: 1 });
}

#[test]
fn infinite_cell_is_rejected() {
    let grid = arr2(&[[1.0, f64::INFINITY]]);
    assert!(compute_intensity_grid(&grid).is_err());
}

#[test]
fn empty_grid_is_rejected() {
    let grid: Array2<f64> = Array2::zeros((0, 4));
    assert_eq!(compute_intensity_grid(&grid).unwrap_err(), GridError::Empty);
}

#[test]
fn recomputation_is_bit_identical() {
    let grid = arr2(&[[3.0, 17.5], [99.0, 0.125]]);
    let first = compute_intensity_grid(&grid).unwrap();
    let second = compute_intensity_grid(&grid).unwrap();
    assert_eq!(first, second);
}
