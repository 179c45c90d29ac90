//! Deterministic stride-walk index sequence
//!
//! Read and search operations visit positions in a fixed pseudo-random order
//! so that neither container benefits from a purely sequential access pattern.
//!
//! # Algorithm
//!
//! `pos(0) = size / 2`, `pos(k + 1) = (pos(k) + 11) % size`, for exactly `size` steps.
//!
//! Every index of `[0, size)` is visited once only when `gcd(11, size) == 1`.
//! Use [`Sequencer::covers_all`] before relying on full coverage.
//!
//! # Example
//!
//! ```rust,ignore
//! use list_bench::bench::sequencer::Sequencer;
//!
//! let positions: Vec<usize> = Sequencer::new(5).collect();
//! assert_eq!(positions, vec![2, 3, 4, 0, 1]);
//! ```

use num_integer::Integer;

/// Stride-11 index walk over `[0, size)`
#[derive(Debug, Clone)]
pub struct Sequencer {
    size: usize,
    pos: usize,
    remaining: usize,
}

impl Sequencer {
    /// Distance between consecutive positions
    pub const STRIDE: usize = 11;

    /// Create a walk of `size` positions. A size of 0 yields nothing.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            pos: size / 2,
            remaining: size,
        }
    }

    /// True when the walk visits every index of `[0, size)` exactly once.
    pub fn covers_all(size: usize) -> bool {
        size > 0 && size.gcd(&Self::STRIDE) == 1
    }
}

impl Iterator for Sequencer {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.pos;
        self.pos = (self.pos + Self::STRIDE) % self.size;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Sequencer {}
