//! Operation Catalog - the benchmarked access patterns
//!
//! Every operation has two steps:
//!
//! ```text
//! ┌────────────────────────┐     ┌──────────────────────────┐
//! │ prepare (PreparedSlot) │────▶│ execute (timed)          │
//! │ fresh / fill / reuse   │     │ work + optional selfcheck│
//! └────────────────────────┘     └──────────────────────────┘
//! ```
//!
//! # Cache policy
//!
//! Filled operations reuse the slot's container while its length equals the
//! requested size. Delete empties the container, so every repeat refills.
//! Sort keeps the length, so only the first repeat sorts descending input and
//! later repeats sort an already ascending container.

use std::cmp::Ordering;

use crate::bench::Sequencer;
use crate::container::SeqContainer;
use crate::core_types::{Element, produce};
use crate::error::BenchError;

/// Endpoint or position an operation works from: the insertion end for Add,
/// the starting index for Delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    First,
    Middle,
    Last,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::First => "FIRST",
            Mode::Middle => "MIDDLE",
            Mode::Last => "LAST",
        }
    }

    /// Removal positions that empty a container of `size` elements
    pub fn removals(&self, size: usize) -> Removals {
        let start = match self {
            Mode::First => 0,
            Mode::Middle => size / 2,
            Mode::Last => size.saturating_sub(1),
        };
        Removals {
            next: start,
            remaining: size,
        }
    }
}

/// Walk of removal indices: each step removes at `next`, then moves one
/// position toward the head while it is still above 0.
///
/// Every yielded index is below the container length at that point, given
/// the container started with `size` elements.
#[derive(Debug, Clone)]
pub struct Removals {
    next: usize,
    remaining: usize,
}

impl Iterator for Removals {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let idx = self.next;
        self.next = self.next.saturating_sub(1);
        Some(idx)
    }
}

/// How `prepare` builds the container handed to `execute`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preparation {
    /// Fresh empty container every repeat
    Fresh,
    /// `0..size` in ascending order, cached while the length matches
    Ascending,
    /// `size-1..=0` in descending order, cached while the length matches
    Descending,
}

/// The closed set of benchmarked operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AddFirst,
    AddLast,
    Get,
    Contains,
    Delete(Mode),
    Sort,
    BinSearch,
}

impl Operation {
    /// Default report order
    pub const CATALOG: [Operation; 8] = [
        Operation::AddFirst,
        Operation::AddLast,
        Operation::Get,
        Operation::Contains,
        Operation::Delete(Mode::First),
        Operation::Delete(Mode::Middle),
        Operation::Delete(Mode::Last),
        Operation::Sort,
    ];

    /// Operations to run, in report order. BinSearch is opt-in.
    pub fn catalog(with_binary_search: bool) -> Vec<Operation> {
        let mut ops = Self::CATALOG.to_vec();
        if with_binary_search {
            ops.push(Operation::BinSearch);
        }
        ops
    }

    /// Display name: tag followed by the mode name, if any
    pub fn name(&self) -> &'static str {
        match self {
            Operation::AddFirst => "AddFIRST",
            Operation::AddLast => "AddLAST",
            Operation::Get => "Get",
            Operation::Contains => "Contains",
            Operation::Delete(Mode::First) => "DelFIRST",
            Operation::Delete(Mode::Middle) => "DelMIDDLE",
            Operation::Delete(Mode::Last) => "DelLAST",
            Operation::Sort => "Sort",
            Operation::BinSearch => "BinSearch",
        }
    }

    pub fn mode(&self) -> Option<Mode> {
        match self {
            Operation::AddFirst => Some(Mode::First),
            Operation::AddLast => Some(Mode::Last),
            Operation::Delete(mode) => Some(*mode),
            _ => None,
        }
    }

    pub fn preparation(&self) -> Preparation {
        match self {
            Operation::AddFirst | Operation::AddLast => Preparation::Fresh,
            Operation::Get | Operation::Contains | Operation::Delete(_) | Operation::BinSearch => {
                Preparation::Ascending
            }
            Operation::Sort => Preparation::Descending,
        }
    }

    /// Perform the measured work on a prepared container.
    ///
    /// With `self_check` set, correctness violations abort with
    /// [`BenchError::SelfCheck`]; otherwise they are computed but ignored.
    pub fn execute<C>(
        &self,
        container: &mut C,
        size: usize,
        self_check: bool,
    ) -> Result<(), BenchError>
    where
        C: SeqContainer<Element>,
    {
        let fail = |detail: String| BenchError::SelfCheck {
            operation: self.name(),
            container: C::NAME,
            size,
            detail,
        };

        if self.preparation() != Preparation::Fresh && self_check && container.len() != size {
            return Err(fail(format!(
                "prepared length {} does not match size",
                container.len()
            )));
        }

        match self {
            Operation::AddFirst => {
                for idx in 0..size {
                    container.insert(0, produce(idx))?;
                }
            }
            Operation::AddLast => {
                for idx in 0..size {
                    container.push_back(produce(idx));
                }
            }
            Operation::Get => {
                let mut pass = true;
                for pos in Sequencer::new(size) {
                    pass &= container.get(pos) == Some(&produce(pos));
                }
                if self_check && !pass {
                    return Err(fail("read value differs from generated value".into()));
                }
                std::hint::black_box(pass);
            }
            Operation::Contains => {
                let mut pass = true;
                for pos in Sequencer::new(size) {
                    pass &= container.contains(&produce(pos));
                }
                if self_check && !pass {
                    return Err(fail("generated value not found".into()));
                }
                std::hint::black_box(pass);
            }
            Operation::Delete(mode) => {
                for idx in mode.removals(size) {
                    container.remove(idx)?;
                }
            }
            Operation::Sort => {
                container.sort_by(ascending);
                if self_check && size >= 2 {
                    let ordered = match (container.get(0), container.get(1)) {
                        (Some(a), Some(b)) => ascending(a, b) == Ordering::Less,
                        _ => false,
                    };
                    if !ordered {
                        return Err(fail("first two elements not strictly ascending".into()));
                    }
                }
            }
            Operation::BinSearch => {
                for pos in Sequencer::new(size) {
                    let value = produce(pos);
                    let found = container.binary_search(&value);
                    if self_check {
                        let hit = found.is_ok_and(|at| container.get(at) == Some(&value));
                        if !hit {
                            return Err(fail(format!("value {} not found by search", value)));
                        }
                    }
                    std::hint::black_box(found.is_ok());
                }
            }
        }

        if self_check && container.len() != self.expected_len(size) {
            return Err(fail(format!(
                "length {} after execute, expected {}",
                container.len(),
                self.expected_len(size)
            )));
        }
        Ok(())
    }

    fn expected_len(&self, size: usize) -> usize {
        match self {
            Operation::Delete(_) => 0,
            _ => size,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Comparator used by Sort: ascending element order
#[inline]
pub fn ascending(a: &Element, b: &Element) -> Ordering {
    a.cmp(b)
}

/// Prepared container cache for one (operation, container strategy) pair.
///
/// Lives across the whole size sweep of that pair. The cached container is
/// replaced only when its length differs from the requested size.
#[derive(Debug)]
pub struct PreparedSlot<C> {
    cached: Option<C>,
    fills: u64,
}

impl<C: SeqContainer<Element>> PreparedSlot<C> {
    pub fn new() -> Self {
        Self {
            cached: None,
            fills: 0,
        }
    }

    /// Number of times a container was filled (cache misses)
    pub fn fills(&self) -> u64 {
        self.fills
    }

    /// Hand `execute` its container: `fresh` itself, a filled `fresh`, or the
    /// cached container from an earlier repeat.
    pub fn prepare(&mut self, op: Operation, mut fresh: C, size: usize) -> &mut C {
        match op.preparation() {
            Preparation::Fresh => self.cached.insert(fresh),
            order => match self.cached.take() {
                Some(cached) if cached.len() == size => self.cached.insert(cached),
                _ => {
                    if order == Preparation::Ascending {
                        (0..size).for_each(|idx| fresh.push_back(produce(idx)));
                    } else {
                        (0..size).rev().for_each(|idx| fresh.push_back(produce(idx)));
                    }
                    self.fills += 1;
                    self.cached.insert(fresh)
                }
            },
        }
    }
}

impl<C: SeqContainer<Element>> Default for PreparedSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}
