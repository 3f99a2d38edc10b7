// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Per-run counters owned by the driver and incremented by the search
//! engine and the augmentation loop. The edge-scan counter doubles as the
//! meter for the driver's step budget.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The counters tracked during one driver run.
#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counter {
    /// Alternating searches started (one per unsaturated left vertex).
    SearchesRun,
    /// Adjacency-list entries examined across all searches.
    EdgesScanned,
    /// Successful augmentations applied.
    Augmentations,
    /// Deficiency certificates produced (0 or 1 per run).
    Certificates,
}

/// Counter block for one driver run.
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.stats[counter as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let statistics = Statistics::new();
        assert_eq!(statistics.get(Counter::SearchesRun), 0);
        assert_eq!(statistics.get(Counter::EdgesScanned), 0);
    }

    #[test]
    fn test_increment_is_per_counter() {
        let mut statistics = Statistics::new();
        statistics.increment(Counter::EdgesScanned);
        statistics.increment(Counter::EdgesScanned);
        statistics.increment(Counter::Augmentations);
        assert_eq!(statistics.get(Counter::EdgesScanned), 2);
        assert_eq!(statistics.get(Counter::Augmentations), 1);
        assert_eq!(statistics.get(Counter::SearchesRun), 0);
    }
}
