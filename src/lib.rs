//! list_bench - array vs. linked list throughput
//!
//! Measures operations per millisecond for an array-backed and a linked-node
//! list under a fixed catalog of access patterns and a fixed size sweep.
//!
//! # Modules
//!
//! - [`core_types`] - Element type and measurement constants
//! - [`bench`] - Deterministic index sequencer
//! - [`container`] - The two container strategies behind one contract
//! - [`operation`] - Operation catalog and prepared-container cache
//! - [`perf`] - Per-measurement sample and throughput
//! - [`harness`] - Adaptive timing loop
//! - [`report`] - Console table formatting
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

// Core types - must be first!
pub mod core_types;

pub mod error;

// Measurement components
pub mod bench;
pub mod container;
pub mod harness;
pub mod operation;
pub mod perf;
pub mod report;

// Ambient
pub mod config;
pub mod logging;

// Convenient re-exports at crate root
pub use bench::Sequencer;
pub use config::AppConfig;
pub use container::{ArrayList, ContainerKind, LinkedList, SeqContainer};
pub use core_types::{Element, ITERATION_CEILING, MIN_WINDOW, SIZE_SWEEP, Throughput};
pub use error::BenchError;
pub use harness::{ContainerRow, Harness, OperationReport};
pub use operation::{Mode, Operation, PreparedSlot};
pub use perf::Sample;
