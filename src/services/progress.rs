use crate::domain::StatsResult;
use indicatif::{ProgressBar, ProgressStyle};

/// Receives progress of a batch run. The terminal front end draws a bar;
/// tests use [`NullProgress`].
pub trait ProgressSink {
    /// Called once with the number of rows about to be processed.
    fn begin(&mut self, _total: usize) {}

    /// Status line for human eyes.
    fn status(&mut self, _msg: &str) {}

    /// One row is done.
    fn row_done(&mut self, _row: usize, _result: &StatsResult) {}

    fn finish(&mut self, _msg: &str) {}
}

pub struct NullProgress;
impl ProgressSink for NullProgress {}

#[derive(Default)]
pub struct TerminalProgress {
    bar: Option<ProgressBar>,
}

impl TerminalProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for TerminalProgress {
    fn begin(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        let style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        bar.set_style(style);
        self.bar = Some(bar);
    }

    fn status(&mut self, msg: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(msg.to_string());
        }
    }

    fn row_done(&mut self, _row: usize, _result: &StatsResult) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn finish(&mut self, msg: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_with_message(msg.to_string());
        }
    }
}
