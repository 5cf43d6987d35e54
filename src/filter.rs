use crate::task::{Filter, Task};

/// Derive the filtered view from the raw collection and the active mode.
///
/// Pure and infallible: the result is always a subsequence of `records`
/// preserving relative order, and an empty input yields an empty output.
/// Collections are small (bounded by the remote source), so this recomputes
/// from scratch on every call rather than caching.
pub fn project(records: &[Task], mode: Filter) -> Vec<Task> {
    records
        .iter()
        .filter(|task| mode.matches(task))
        .cloned()
        .collect()
}
