//! Core types used throughout the system
//!
//! Type aliases and the fixed measurement constants shared by every module.

use std::time::Duration;

/// Element - the payload stored in every benchmarked container.
///
/// # Constraints:
/// - Produced by [`produce`] only, so `value == position` for ascending fills
/// - Doubles as the expected value for Get/Contains self-checks
pub type Element = i32;

/// Throughput in operations per millisecond
pub type Throughput = u64;

/// Minimum accumulated execute time before a measurement is accepted
pub const MIN_WINDOW: Duration = Duration::from_millis(1_000);

/// Container sizes measured for every (operation, container) pair
pub const SIZE_SWEEP: [usize; 3] = [1_000, 10_000, 100_000];

/// Overflow guard for the adaptive timing loop.
///
/// Reaching it is not a normal exit path; see [`crate::BenchError::IterationCeiling`].
pub const ITERATION_CEILING: u64 = i32::MAX as u64;

/// Element generator: position `i` maps to value `i`.
#[inline]
pub fn produce(idx: usize) -> Element {
    idx as Element
}
