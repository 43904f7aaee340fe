pub mod geometry;
mod logging;

pub use logging::{RenderProgressBar, StepLogger};
