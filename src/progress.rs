//! Progress reporting for long-running counting passes.
//!
//! Progress is a pure side channel: the counting code always drives a
//! [`ProgressSink`], and the caller decides whether that sink draws a bar
//! on stderr ([`ConsoleProgress`]) or does nothing ([`NoProgress`]). Each
//! pass calls `start` once, sends monotonically increasing `update`s, and
//! calls `stop` exactly once, even when there is nothing to count.

use indicatif::{ProgressBar, ProgressStyle};

/// The start/update/stop contract a counting pass reports through.
pub trait ProgressSink {
    /// Begin a pass. `total` is `None` when the item count is unknown
    /// up front.
    fn start(&mut self, title: &str, total: Option<u64>);

    /// Report the number of items processed so far.
    fn update(&mut self, completed: u64);

    /// End the pass and clear any display.
    fn stop(&mut self);
}

/// Sink used when progress display is disabled. All calls are no-ops.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _title: &str, _total: Option<u64>) {}
    fn update(&mut self, _completed: u64) {}
    fn stop(&mut self) {}
}

/// Progress bar on stderr, via indicatif.
#[derive(Default)]
pub struct ConsoleProgress {
    bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressSink for ConsoleProgress {
    fn start(&mut self, title: &str, total: Option<u64>) {
        let bar = match total {
            Some(total) => {
                let bar = ProgressBar::new(total);
                if let Ok(style) = ProgressStyle::with_template("{msg}: {pos}/{len}") {
                    bar.set_style(style);
                }
                bar
            }
            None => {
                let bar = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{msg}: {pos}") {
                    bar.set_style(style);
                }
                bar
            }
        };
        bar.set_message(title.to_string());
        self.bar = Some(bar);
    }

    fn update(&mut self, completed: u64) {
        if let Some(bar) = &self.bar {
            bar.set_position(completed);
        }
    }

    fn stop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Pick the sink for the requested visibility.
pub fn sink_for(show_progress: bool) -> Box<dyn ProgressSink> {
    if show_progress {
        Box::new(ConsoleProgress::new())
    } else {
        Box::new(NoProgress)
    }
}
