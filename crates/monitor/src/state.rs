//! Progress state machine with rate and ETA estimation

use tracing::debug;

use crate::format::format_duration;

/// Progress toward a target entry count.
///
/// Holds the count and timestamp observed at start and at the most
/// recent report. Time is a monotonic seconds value supplied by the
/// caller, so state transitions are pure and never touch the clock.
#[derive(Debug)]
pub struct Progress {
    start_count: u64,
    start_secs: f64,
    last_count: u64,
    last_secs: f64,
    target: u64,
}

/// Outcome of folding one directory listing into the state.
#[derive(Debug)]
pub struct Tick {
    /// Report to emit, present only when the entry count grew.
    pub report: Option<Report>,
    /// True once the observed count reached or passed the target.
    pub done: bool,
}

/// One progress report, produced when the entry count increases.
#[derive(Debug, Clone)]
pub struct Report {
    pub current_count: u64,
    pub target: u64,
    /// Wall-clock seconds since monitoring started.
    pub elapsed_secs: f64,
    /// Estimated seconds until the target is reached. Negative when a
    /// single poll overshot the target.
    pub eta_secs: f64,
    pub avg_secs_per_item: f64,
    /// Entries that appeared since the previous report. Carried for
    /// diagnostics only, not part of the rendered line.
    pub newly_generated: u64,
}

/// Average seconds per item, guarding the degenerate case where no
/// items have been produced yet.
fn average_secs_per_item(elapsed_secs: f64, total_generated: u64) -> f64 {
    if total_generated > 0 {
        elapsed_secs / total_generated as f64
    } else {
        0.0
    }
}

impl Progress {
    /// Initialize from the first directory listing and clock read.
    pub fn new(start_count: u64, start_secs: f64, target: u64) -> Self {
        Self {
            start_count,
            start_secs,
            last_count: start_count,
            last_secs: start_secs,
            target,
        }
    }

    /// Entry count at the most recent report (or at start).
    pub fn last_count(&self) -> u64 {
        self.last_count
    }

    /// Timestamp of the most recent report (or of start).
    pub fn last_secs(&self) -> f64 {
        self.last_secs
    }

    /// Fold one directory listing into the state.
    ///
    /// A report fires only when the count grew since the last report;
    /// a poll that observes no growth changes nothing. The termination
    /// check runs regardless, so a count that jumps past the target in
    /// one poll still terminates.
    pub fn observe(&mut self, current_count: u64, now_secs: f64) -> Tick {
        let report = if current_count > self.last_count {
            let newly_generated = current_count - self.last_count;
            let total_generated = current_count - self.start_count;
            let elapsed = now_secs - self.start_secs;

            let avg = average_secs_per_item(elapsed, total_generated);
            let remaining = self.target as i64 - current_count as i64;
            let eta = avg * remaining as f64;

            debug!(current_count, newly_generated, "entry count grew");

            self.last_count = current_count;
            self.last_secs = now_secs;

            Some(Report {
                current_count,
                target: self.target,
                elapsed_secs: elapsed,
                eta_secs: eta,
                avg_secs_per_item: avg,
                newly_generated,
            })
        } else {
            None
        };

        Tick {
            report,
            done: current_count >= self.target,
        }
    }
}

impl Report {
    /// Render the progress line exactly as printed to stdout.
    pub fn render(&self) -> String {
        format!(
            "{}/{} items | Elapsed: {} | ETA: {} | Avg: {:.2}s/item",
            self.current_count,
            self.target,
            format_duration(self.elapsed_secs),
            format_duration(self.eta_secs),
            self.avg_secs_per_item,
        )
    }
}
