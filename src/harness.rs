//! Adaptive timing loop
//!
//! ```text
//! ┌──────────┐    ┌──────────────┐    ┌───────────────┐    ┌──────────┐
//! │ Factory  │───▶│ PreparedSlot │───▶│ timed execute │───▶│  Sample  │
//! │ (fresh)  │    │  (prepare)   │    │ (Instant)     │    │ (+= dt)  │
//! └──────────┘    └──────────────┘    └───────────────┘    └──────────┘
//!       ▲                                                       │
//!       └──────────────── until elapsed > window ───────────────┘
//! ```
//!
//! Only the execute step is timed. Preparation, including cache refills and
//! dropping the previous container, happens outside the measured region.

use std::time::{Duration, Instant};

use crate::bench::Sequencer;
use crate::container::{ArrayList, ContainerKind, LinkedList, SeqContainer};
use crate::core_types::{Element, ITERATION_CEILING, MIN_WINDOW};
use crate::error::BenchError;
use crate::operation::{Operation, PreparedSlot};
use crate::perf::Sample;

/// Target for per-repeat events, switched off unless tracing is enabled
pub const REPEAT_TARGET: &str = "list_bench::repeat";

/// Samples for one container strategy across the size sweep
#[derive(Debug, Clone)]
pub struct ContainerRow {
    pub container: ContainerKind,
    pub samples: Vec<Sample>,
}

/// Everything measured for one operation
#[derive(Debug, Clone)]
pub struct OperationReport {
    pub operation: Operation,
    pub sizes: Vec<usize>,
    pub rows: Vec<ContainerRow>,
}

/// Drives the adaptive timing loop
#[derive(Debug, Clone)]
pub struct Harness {
    min_window: Duration,
    iteration_ceiling: u64,
    self_check: bool,
}

impl Harness {
    /// Harness with the standard window and overflow guard
    pub fn new(self_check: bool) -> Self {
        Self {
            min_window: MIN_WINDOW,
            iteration_ceiling: ITERATION_CEILING,
            self_check,
        }
    }

    pub fn with_window(mut self, min_window: Duration) -> Self {
        self.min_window = min_window;
        self
    }

    pub fn with_iteration_ceiling(mut self, iteration_ceiling: u64) -> Self {
        self.iteration_ceiling = iteration_ceiling;
        self
    }

    /// Repeat prepare + timed execute until the accumulated execute time
    /// exceeds the window.
    ///
    /// # Errors
    /// - [`BenchError::InvalidSize`] for `size == 0`
    /// - [`BenchError::IterationCeiling`] if the guard is reached first
    /// - anything `execute` raises (self-check, container faults)
    pub fn measure<C, F>(
        &self,
        mut factory: F,
        op: Operation,
        slot: &mut PreparedSlot<C>,
        size: usize,
    ) -> Result<Sample, BenchError>
    where
        C: SeqContainer<Element>,
        F: FnMut() -> C,
    {
        if size == 0 {
            return Err(BenchError::InvalidSize(size));
        }

        let mut sample = Sample::new(size);
        loop {
            let container = slot.prepare(op, factory(), size);

            let start = Instant::now();
            op.execute(container, size, self.self_check)?;
            let elapsed = start.elapsed();

            sample.record(elapsed);
            tracing::debug!(
                target: REPEAT_TARGET,
                operation = op.name(),
                container = C::NAME,
                size,
                repeat = sample.iterations(),
                elapsed_ns = elapsed.as_nanos() as u64
            );

            if sample.elapsed() > self.min_window {
                return Ok(sample);
            }
            if sample.iterations() >= self.iteration_ceiling {
                return Err(BenchError::IterationCeiling {
                    operation: op.name(),
                    container: C::NAME,
                    size,
                    iterations: sample.iterations(),
                    elapsed: sample.elapsed(),
                });
            }
        }
    }

    /// Measure one container strategy over every size, sharing one
    /// prepared-container cache across the sweep.
    pub fn measure_sizes<C>(
        &self,
        op: Operation,
        sizes: &[usize],
    ) -> Result<Vec<Sample>, BenchError>
    where
        C: SeqContainer<Element>,
    {
        let mut slot = PreparedSlot::<C>::new();
        let mut samples = Vec::with_capacity(sizes.len());
        for &size in sizes {
            if !Sequencer::covers_all(size) {
                tracing::warn!(
                    "[{}] size {} shares a factor with stride {}: index walk repeats positions",
                    op,
                    size,
                    Sequencer::STRIDE
                );
            }
            let sample = self.measure(C::default, op, &mut slot, size)?;
            tracing::info!(
                operation = op.name(),
                container = C::NAME,
                size,
                iterations = sample.iterations(),
                elapsed_ms = sample.elapsed().as_millis() as u64,
                throughput = sample.throughput().unwrap_or(0),
                "measured"
            );
            samples.push(sample);
        }
        tracing::debug!("[{}] {} prepared fills: {}", op, C::NAME, slot.fills());
        Ok(samples)
    }

    /// Measure `op` on every container strategy over every size.
    pub fn run_operation(
        &self,
        op: Operation,
        sizes: &[usize],
    ) -> Result<OperationReport, BenchError> {
        let mut rows = Vec::with_capacity(ContainerKind::ALL.len());
        for container in ContainerKind::ALL {
            let samples = match container {
                ContainerKind::Array => self.measure_sizes::<ArrayList<Element>>(op, sizes)?,
                ContainerKind::Linked => self.measure_sizes::<LinkedList<Element>>(op, sizes)?,
            };
            rows.push(ContainerRow { container, samples });
        }
        Ok(OperationReport {
            operation: op,
            sizes: sizes.to_vec(),
            rows,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::Mode;

    fn quick() -> Harness {
        Harness::new(true).with_window(Duration::from_millis(2))
    }

    #[test]
    fn test_measure_crosses_window() {
        let harness = quick();
        let mut slot = PreparedSlot::new();
        let sample = harness
            .measure(ArrayList::new, Operation::AddLast, &mut slot, 1_000)
            .unwrap();
        assert!(sample.elapsed() > Duration::from_millis(2));
        assert!(sample.iterations() >= 1);
        assert!(sample.throughput().unwrap() > 0);
    }

    #[test]
    fn test_measure_zero_size_rejected() {
        let mut slot = PreparedSlot::<ArrayList<Element>>::new();
        let err = quick()
            .measure(ArrayList::new, Operation::Get, &mut slot, 0)
            .unwrap_err();
        assert!(matches!(err, BenchError::InvalidSize(0)));
    }

    #[test]
    fn test_iteration_ceiling_is_fatal() {
        let harness = Harness::new(true)
            .with_window(Duration::from_secs(3_600))
            .with_iteration_ceiling(3);
        let mut slot = PreparedSlot::new();
        let err = harness
            .measure(LinkedList::new, Operation::AddFirst, &mut slot, 10)
            .unwrap_err();
        match err {
            BenchError::IterationCeiling {
                operation,
                container,
                size,
                iterations,
                ..
            } => {
                assert_eq!(operation, "AddFIRST");
                assert_eq!(container, "LinkedList");
                assert_eq!(size, 10);
                assert_eq!(iterations, 3);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    /// Delete refills each repeat; every repeat still starts full
    #[test]
    fn test_measure_delete_refills_every_repeat() {
        let harness = quick();
        let mut slot = PreparedSlot::new();
        let sample = harness
            .measure(ArrayList::new, Operation::Delete(Mode::Middle), &mut slot, 100)
            .unwrap();
        assert_eq!(slot.fills(), sample.iterations());
    }

    /// Sort fills once; later repeats reuse the sorted container
    #[test]
    fn test_measure_sort_fills_once() {
        let harness = quick();
        let mut slot = PreparedSlot::new();
        let sample = harness
            .measure(LinkedList::new, Operation::Sort, &mut slot, 100)
            .unwrap();
        assert!(sample.iterations() >= 1);
        assert_eq!(slot.fills(), 1);
    }

    #[test]
    fn test_run_operation_rows() {
        let report = quick().run_operation(Operation::Get, &[10, 100]).unwrap();
        assert_eq!(report.sizes, vec![10, 100]);
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].container, ContainerKind::Array);
        assert_eq!(report.rows[1].container, ContainerKind::Linked);
        for row in &report.rows {
            assert_eq!(row.samples.len(), 2);
            assert!(row.samples.iter().all(|s| s.throughput().unwrap() > 0));
        }
    }
}
