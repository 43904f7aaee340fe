use console::style;
use log::*;

pub struct StepLogger {
    step: usize,
    total: usize,
    title: &'static str,
}

impl StepLogger {
    pub fn new(step: usize, total: usize, title: &'static str) -> Self {
        Self { step, total, title }
    }

    pub fn print(&self) {
        info!(
            "{} {}...",
            style(format!("[{}/{}]", self.step, self.total)).bold().dim(),
            self.title
        );
    }
}
