//! Performance Metrics - accumulated timing for one measurement
//!
//! A [`Sample`] covers one (operation, container, size) triple.

use std::time::Duration;

use crate::core_types::Throughput;

const NANOS_PER_MILLI: u128 = 1_000_000;

/// Accumulated execute time and repeat count for one triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    size: usize,
    iterations: u64,
    elapsed: Duration,
}

impl Sample {
    pub fn new(size: usize) -> Self {
        Sample {
            size,
            iterations: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// Add one timed execute
    #[inline]
    pub fn record(&mut self, elapsed: Duration) {
        self.iterations += 1;
        self.elapsed += elapsed;
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn iterations(&self) -> u64 {
        self.iterations
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Operations per millisecond: `iterations * size / elapsed_ms`, integer
    /// division, evaluated at nanosecond resolution.
    ///
    /// `None` until some time has been recorded.
    pub fn throughput(&self) -> Option<Throughput> {
        let nanos = self.elapsed.as_nanos();
        if nanos == 0 {
            return None;
        }
        let ops = self.iterations as u128 * self.size as u128;
        let rate = ops * NANOS_PER_MILLI / nanos;
        Some(Throughput::try_from(rate).unwrap_or(Throughput::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_requires_elapsed() {
        let sample = Sample::new(1_000);
        assert_eq!(sample.throughput(), None);

        let mut sample = Sample::new(1_000);
        sample.record(Duration::ZERO);
        assert_eq!(sample.iterations(), 1);
        assert_eq!(sample.throughput(), None);
    }

    #[test]
    fn test_throughput_integer_division() {
        let mut sample = Sample::new(1_000);
        for _ in 0..3 {
            sample.record(Duration::from_millis(400));
        }
        // 3 * 1000 ops / 1200 ms = 2.5 -> 2
        assert_eq!(sample.elapsed(), Duration::from_millis(1_200));
        assert_eq!(sample.throughput(), Some(2));
    }

    #[test]
    fn test_throughput_sub_millisecond_repeats() {
        let mut sample = Sample::new(100_000);
        for _ in 0..2_000 {
            sample.record(Duration::from_micros(501));
        }
        // 2e8 ops over 1002 ms
        assert_eq!(sample.throughput(), Some(199_600));
    }
}
