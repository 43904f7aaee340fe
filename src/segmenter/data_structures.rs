use serde::{Deserialize, Serialize};

use crate::utils::geometry::{circle_point, large_arc_flag};

/// One labeled quantity contributing to a proportional breakdown. Values
/// need not be normalized, the total is computed over the whole list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValueSlice {
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl ValueSlice {
    pub fn new(label: &str, value: f64, color: &str) -> Self {
        Self {
            label: label.to_string(),
            value,
            color: color.to_string(),
        }
    }
}

/// Angular wedge derived from one slice. Never stored, recomputed from the
/// distribution on every pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start_angle: f64,
    pub end_angle: f64,
    pub label: String,
    pub value: f64,
    pub color: String,
}

impl Segment {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    /// Zero-value slices produce zero-width segments that render as
    /// invisible wedges.
    pub fn is_degenerate(&self) -> bool {
        self.span() == 0.0
    }

    pub fn large_arc(&self) -> u8 {
        large_arc_flag(self.span())
    }

    /// Boundary points at the start and end angle on a circle of the given
    /// radius, each projected independently.
    pub fn boundary_points(&self, origin: (f64, f64), radius: f64) -> ((f64, f64), (f64, f64)) {
        (
            circle_point(origin, radius, self.start_angle),
            circle_point(origin, radius, self.end_angle),
        )
    }
}
