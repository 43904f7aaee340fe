mod data_structures;

pub use data_structures::{Segment, ValueSlice};

use std::error::Error;
use std::fmt;

use log::*;

#[derive(Debug, Clone, PartialEq)]
pub enum SliceError {
    Negative { label: String, value: f64 },
    NotFinite { label: String },
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::Negative { label, value } => {
                write!(f, "slice '{}' has negative value {}", label, value)
            }
            SliceError::NotFinite { label } => {
                write!(f, "slice '{}' has a non-finite value", label)
            }
        }
    }
}

impl Error for SliceError {}

/// Converts a distribution into contiguous angular segments. The first
/// segment starts at 0 and each span is `360 * value / total`, accumulated
/// in input order; a zero total yields zero-width segments for all slices.
pub fn compute_segments(slices: &[ValueSlice]) -> Result<Vec<Segment>, SliceError> {
    validate_slices(slices)?;

    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    debug!("segmenting {} slices, total weight {}", slices.len(), total);

    let mut current_angle = 0.0;
    let segments = slices
        .iter()
        .map(|slice| {
            let span = if total > 0.0 {
                360.0 * slice.value / total
            } else {
                0.0
            };
            let segment = Segment {
                start_angle: current_angle,
                end_angle: current_angle + span,
                label: slice.label.clone(),
                value: slice.value,
                color: slice.color.clone(),
            };
            current_angle += span;
            segment
        })
        .collect();

    Ok(segments)
}

fn validate_slices(slices: &[ValueSlice]) -> Result<(), SliceError> {
    for slice in slices {
        if !slice.value.is_finite() {
            return Err(SliceError::NotFinite {
                label: slice.label.clone(),
            });
        }
        if slice.value < 0.0 {
            return Err(SliceError::Negative {
                label: slice.label.clone(),
                value: slice.value,
            });
        }
    }
    Ok(())
}
