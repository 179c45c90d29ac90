//! Contiguous growable array strategy

use std::cmp::Ordering;

use super::{SeqContainer, check_index};
use crate::error::BenchError;

/// Array-backed list: a thin wrapper over `Vec`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayList<T> {
    items: Vec<T>,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SeqContainer<T> for ArrayList<T> {
    const NAME: &'static str = "ArrayList";

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        self.items.push(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), BenchError> {
        let len = self.items.len();
        if index > len {
            return Err(BenchError::IndexOutOfBounds { index, len });
        }
        self.items.insert(index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, BenchError> {
        check_index(index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.items.sort_by(compare);
    }

    fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.items.binary_search(value)
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
