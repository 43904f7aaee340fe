use indicatif::ProgressBar;

/// Row-wise render progress, only shown when RUST_LOG matches the given
/// level so regular log output stays clean.
#[derive(Default)]
pub struct RenderProgressBar {
    progress_bar: Option<ProgressBar>,
}

impl RenderProgressBar {
    pub fn new_from_len(env: &str, len: usize) -> Self {
        let active = std::env::var("RUST_LOG")
            .unwrap_or_else(|_| String::from("info"))
            .eq(env);
        Self {
            progress_bar: if active {
                Some(ProgressBar::new(len as u64))
            } else {
                None
            },
        }
    }

    pub fn inc(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1)
        }
    }

    pub fn finish_and_clear(&self) {
        if let Some(pb) = &self.progress_bar {
            pb.finish_and_clear()
        }
    }
}
