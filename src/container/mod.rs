//! Container strategies under test
//!
//! Both variants implement the same [`SeqContainer`] contract so the operation
//! catalog runs unmodified against either of them.
//!
//! # Complexity:
//! | Operation | [`ArrayList`] | [`LinkedList`] |
//! |-----------|---------------|----------------|
//! | push_back | O(1) amortized | O(1) |
//! | insert(0) | O(n) | O(1) |
//! | remove(i) | O(n - i) | O(min(i, n - i)) |
//! | get(i) | O(1) | O(min(i, n - i)) |
//! | contains | O(n) | O(n) |
//! | sort_by | O(n log n) | O(n log n) + rebuild |

pub mod array;
pub mod linked;

use std::cmp::Ordering;

use crate::core_types::Element;
use crate::error::BenchError;

pub use array::ArrayList;
pub use linked::LinkedList;

/// Ordered-sequence contract shared by every container strategy.
///
/// `Default` is the factory: each timing repeat starts from `C::default()`.
pub trait SeqContainer<T>: Default {
    /// Display name used in the report rows
    const NAME: &'static str;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append at the tail
    fn push_back(&mut self, value: T);

    /// Insert before `index`; `index == len()` appends.
    fn insert(&mut self, index: usize, value: T) -> Result<(), BenchError>;

    /// Remove and return the element at `index`.
    fn remove(&mut self, index: usize) -> Result<T, BenchError>;

    fn get(&self, index: usize) -> Option<&T>;

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Stable in-place sort
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Search an ascending container. `Ok(i)` holds `value`, `Err(i)` is the
    /// insertion point.
    fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        let mut lo = 0;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.get(mid) {
                Some(item) if item < value => lo = mid + 1,
                Some(item) if item == value => return Ok(mid),
                _ => hi = mid,
            }
        }
        Err(lo)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

/// The closed set of container strategies, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerKind {
    Array,
    Linked,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 2] = [ContainerKind::Array, ContainerKind::Linked];

    pub fn name(&self) -> &'static str {
        match self {
            ContainerKind::Array => <ArrayList<Element> as SeqContainer<Element>>::NAME,
            ContainerKind::Linked => <LinkedList<Element> as SeqContainer<Element>>::NAME,
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[inline]
pub(crate) fn check_index(index: usize, len: usize) -> Result<(), BenchError> {
    if index < len {
        Ok(())
    } else {
        Err(BenchError::IndexOutOfBounds { index, len })
    }
}
