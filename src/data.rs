use std::fs::File;
use std::path::Path;

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use log::*;
use ndarray::Array2;

use crate::segmenter::ValueSlice;

/// Reads a headerless numeric matrix, one grid row per line. Ragged rows
/// are rejected because the grid dimensions are fixed ahead of
/// computation.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Array2<f64>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("could not open grid file {:?}", path))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(file);

    let mut cells = Vec::new();
    let mut n_cols = None;
    let mut n_rows = 0;
    for record in reader.records() {
        let record = record.with_context(|| format!("could not read grid file {:?}", path))?;
        match n_cols {
            None => n_cols = Some(record.len()),
            Some(cols) if cols != record.len() => {
                bail!(
                    "grid row {} has {} columns, expected {}",
                    n_rows,
                    record.len(),
                    cols
                );
            }
            _ => (),
        }
        for field in record.iter() {
            let cell: f64 = field
                .parse()
                .with_context(|| format!("invalid grid cell '{}' in row {}", field, n_rows))?;
            cells.push(cell);
        }
        n_rows += 1;
    }

    if n_rows == 0 {
        bail!("grid file {:?} is empty", path);
    }

    let n_cols = n_cols.unwrap_or(0);
    info!("activity grid has {} rows and {} columns", n_rows, n_cols);
    Ok(Array2::from_shape_vec((n_rows, n_cols), cells)?)
}

/// Reads a `label,value,color` distribution file into slices.
pub fn read_slices<P: AsRef<Path>>(path: P) -> Result<Vec<ValueSlice>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("could not open distribution file {:?}", path))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let mut slices = Vec::new();
    for record in reader.deserialize() {
        let slice: ValueSlice =
            record.with_context(|| format!("invalid distribution record in {:?}", path))?;
        slices.push(slice);
    }

    info!("distribution has {} slices", slices.len());
    Ok(slices)
}
