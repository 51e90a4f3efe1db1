//! Comparison period splitting
//!
//! Partitions a window of week buckets into the two halves every delta is
//! computed from.

use std::collections::BTreeSet;

/// The two halves of a comparison window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PeriodSplit {
    /// Chronologically earlier half
    pub early: BTreeSet<String>,
    /// Later half; holds the lone bucket when the window has only one
    pub late: BTreeSet<String>,
}

/// Split week buckets at the midpoint into early and late halves.
///
/// Buckets sort lexicographically, which equals chronological order for
/// ISO date keys. With `n` buckets the early half gets the first `n / 2`;
/// an odd count gives the extra bucket to the late half. Which weeks land
/// on which side decides the sign of every displayed delta, so the floor
/// division must not change.
pub fn split_periods(buckets: &BTreeSet<String>) -> PeriodSplit {
    let mid = buckets.len() / 2;

    let mut split = PeriodSplit::default();
    for (i, bucket) in buckets.iter().enumerate() {
        if i < mid {
            split.early.insert(bucket.clone());
        } else {
            split.late.insert(bucket.clone());
        }
    }
    split
}
