//! Benchmark Support Module
//!
//! Deterministic input generation for read and search operations.
//!
//! # Components
//!
//! - [`sequencer`] - Stride-11 index walk used by Get/Contains/BinSearch

pub mod sequencer;

pub use sequencer::Sequencer;
