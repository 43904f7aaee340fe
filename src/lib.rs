use anyhow::Result;
use log::*;

pub use crate::intensity::{compute_intensity_grid, GridError};
pub use crate::parameters::{Parameters, Source};
pub use crate::report::{Dashboard, MetricCard, SessionCheck, SignedOut, Trend, User};
pub use crate::segmenter::{compute_segments, Segment, SliceError, ValueSlice};

pub mod data;
pub mod demo;
mod intensity;
mod parameters;
pub mod render;
pub mod report;
mod segmenter;
#[cfg(test)]
mod tests;
mod utils;

/// Builds the dashboard for the configured data source and renders it for
/// the signed-in user.
pub fn wedgemap(params: Parameters, session: &dyn SessionCheck) -> Result<String> {
    let (slices, activity) = match &params.source {
        Source::Demo { seed } => {
            info!("using generated demo data (seed {:?})", seed);
            (
                demo::device_split(),
                demo::activity_grid(demo::DEMO_DAYS, demo::HOURS_PER_DAY, *seed),
            )
        }
        Source::Csv {
            grid_path,
            distribution_path,
        } => (
            data::read_slices(distribution_path)?,
            data::read_grid(grid_path)?,
        ),
    };

    let day_labels = demo::day_labels(activity.nrows());
    let dashboard = Dashboard::new(
        slices,
        activity,
        demo::sample_metrics(),
        day_labels,
        params.premium,
    )
    .with_pie_radius(params.pie_radius);

    dashboard.render(session)
}
