mod console_logger;
mod progress_bar;

pub use console_logger::StepLogger;
pub use progress_bar::RenderProgressBar;
