//! Report-building statistics tracking.
//!
//! Thread-safe counters for entries skipped under the skip policy, so a run
//! can report how much of the artifact it had to ignore.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Thread-safe skip-accounting for a report build.
///
/// All skip reasons are initialized to zero on creation. The struct can be
/// shared across tasks using `Arc`; the status server polls against the same
/// instance the one-shot flow uses.
pub struct ReportStats {
    skips: HashMap<SkipReason, AtomicUsize>,
}

impl ReportStats {
    /// Creates a new tracker with all counters at zero.
    pub fn new() -> Self {
        let mut skips = HashMap::new();
        for reason in SkipReason::iter() {
            skips.insert(reason, AtomicUsize::new(0));
        }
        ReportStats { skips }
    }

    /// Increment the counter for a skip reason.
    ///
    /// Never panics when the tracker was built via `new()`: every variant is
    /// initialized in the constructor. A miss indicates a bug and is logged
    /// rather than crashing the build.
    pub fn increment(&self, reason: SkipReason) {
        if let Some(counter) = self.skips.get(&reason) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment skip counter for {:?} which is not in the map. \
                 This indicates a bug in ReportStats initialization.",
                reason
            );
        }
    }

    /// Returns the count for a single skip reason.
    pub fn count(&self, reason: SkipReason) -> usize {
        self.skips
            .get(&reason)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Returns the total number of skipped entries across all reasons.
    pub fn total_skipped(&self) -> usize {
        self.skips.values().map(|c| c.load(Ordering::Relaxed)).sum()
    }

    /// Logs a per-reason summary of skipped entries.
    ///
    /// Quiet when nothing was skipped; one `info` line per nonzero counter
    /// otherwise.
    pub fn log_summary(&self) {
        let total = self.total_skipped();
        if total == 0 {
            log::debug!("No artifact entries were skipped");
            return;
        }
        log::info!("Skipped {} artifact entr{}:", total, plural_y(total));
        for reason in SkipReason::iter() {
            let count = self.count(reason);
            if count > 0 {
                log::info!("  {}: {}", reason.as_str(), count);
            }
        }
    }
}

impl Default for ReportStats {
    fn default() -> Self {
        Self::new()
    }
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 {
        "y"
    } else {
        "ies"
    }
}
