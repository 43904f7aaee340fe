mod data_structures;

pub use data_structures::{MetricCard, Trend, User};

use std::error::Error;
use std::fmt;

use anyhow::Result;
use log::*;
use ndarray::Array2;

use crate::intensity::compute_intensity_grid;
use crate::render;
use crate::segmenter::{compute_segments, ValueSlice};
use crate::utils::StepLogger;

/// Externally-owned authentication state. The dashboard only consumes the
/// user-or-absent answer, redirecting is the caller's job.
pub trait SessionCheck {
    fn current_user(&self) -> Option<User>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedOut;

impl fmt::Display for SignedOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no signed-in user, refusing to render")
    }
}

impl Error for SignedOut {}

pub struct Dashboard {
    slices: Vec<ValueSlice>,
    activity: Array2<f64>,
    metrics: Vec<MetricCard>,
    day_labels: Vec<String>,
    pie_radius: f64,
    premium: bool,
}

impl Dashboard {
    pub fn new(
        slices: Vec<ValueSlice>,
        activity: Array2<f64>,
        metrics: Vec<MetricCard>,
        day_labels: Vec<String>,
        premium: bool,
    ) -> Self {
        Self {
            slices,
            activity,
            metrics,
            day_labels,
            pie_radius: 50.0,
            premium,
        }
    }

    pub fn with_pie_radius(mut self, radius: f64) -> Self {
        self.pie_radius = radius;
        self
    }

    pub fn is_premium(&self) -> bool {
        self.premium
    }

    pub fn upgrade(&mut self) {
        self.premium = true;
    }

    /// Recomputes geometry and intensities from the source values and
    /// assembles the full document. Fails with [`SignedOut`] when the
    /// session check reports no user.
    pub fn render(&self, session: &dyn SessionCheck) -> Result<String> {
        let user = session.current_user().ok_or(SignedOut)?;
        debug!("rendering dashboard for user {}", user.id);

        StepLogger::new(1, 3, "Segmenting distribution").print();
        let segments = compute_segments(&self.slices)?;
        let total: f64 = self.slices.iter().map(|slice| slice.value).sum();

        StepLogger::new(2, 3, "Normalizing activity grid").print();
        let intensities = compute_intensity_grid(&self.activity)?;

        StepLogger::new(3, 3, "Assembling document").print();
        Ok(render::document(
            &self.metrics,
            &segments,
            total,
            &intensities,
            &self.day_labels,
            self.pie_radius,
            self.premium,
        ))
    }
}
