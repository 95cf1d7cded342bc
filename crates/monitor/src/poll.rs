//! Fixed-interval polling loop
//!
//! Re-lists the watched directory every 200ms and feeds the entry
//! count through the progress state machine until the target count
//! is reached.

use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::debug;

use crate::state::{Progress, Report};
use crate::Result;

/// Sleep between polls.
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Count the immediate entries of a directory.
///
/// Only the cardinality of the listing matters; entry names, types,
/// and sizes are never inspected. Listing failures propagate, there
/// is no retry.
pub fn count_entries(dir: &Path) -> Result<u64> {
    let mut count = 0u64;

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory {}", dir.display()))?
    {
        entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        count += 1;
    }

    Ok(count)
}

/// Poll `dir` until its entry count reaches or passes `target`.
///
/// Calls `emit` once per detected increase. Sleeps for
/// [`POLL_INTERVAL`] at the bottom of every non-terminating
/// iteration, whether or not a report fired. Any listing error ends
/// the loop immediately.
pub fn watch(dir: &Path, target: u64, mut emit: impl FnMut(&Report)) -> Result<()> {
    let start = Instant::now();
    let start_count = count_entries(dir)?;
    let mut progress = Progress::new(start_count, 0.0, target);

    debug!(dir = %dir.display(), start_count, target, "starting watch");

    loop {
        let current = count_entries(dir)?;
        let tick = progress.observe(current, start.elapsed().as_secs_f64());

        match &tick.report {
            Some(report) => emit(report),
            None => debug!(count = current, "no growth this poll"),
        }

        if tick.done {
            return Ok(());
        }

        thread::sleep(POLL_INTERVAL);
    }
}
