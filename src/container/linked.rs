//! Doubly linked node-chain strategy
//!
//! Positional access walks from whichever end is closer, so endpoint work is
//! O(1) while anything in the middle pays for the traversal.

use std::cmp::Ordering;
use std::collections::LinkedList as Chain;

use super::{SeqContainer, check_index};
use crate::error::BenchError;

/// Linked-node list backed by `std::collections::LinkedList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedList<T> {
    nodes: Chain<T>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { nodes: Chain::new() }
    }

    /// Detach `[index, len)` into its own chain. Walks from the nearer end.
    fn split_at(&mut self, index: usize) -> Chain<T> {
        self.nodes.split_off(index)
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SeqContainer<T> for LinkedList<T> {
    const NAME: &'static str = "LinkedList";

    #[inline]
    fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        self.nodes.push_back(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), BenchError> {
        let len = self.nodes.len();
        if index > len {
            return Err(BenchError::IndexOutOfBounds { index, len });
        }
        if index == 0 {
            self.nodes.push_front(value);
        } else if index == len {
            self.nodes.push_back(value);
        } else {
            let mut tail = self.split_at(index);
            tail.push_front(value);
            self.nodes.append(&mut tail);
        }
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<T, BenchError> {
        let len = self.nodes.len();
        check_index(index, len)?;
        let removed = if index == 0 {
            self.nodes.pop_front()
        } else if index == len - 1 {
            self.nodes.pop_back()
        } else {
            let mut tail = self.split_at(index);
            let removed = tail.pop_front();
            self.nodes.append(&mut tail);
            removed
        };
        removed.ok_or(BenchError::IndexOutOfBounds { index, len })
    }

    fn get(&self, index: usize) -> Option<&T> {
        let len = self.nodes.len();
        if index >= len {
            return None;
        }
        if index < len / 2 {
            self.nodes.iter().nth(index)
        } else {
            self.nodes.iter().rev().nth(len - 1 - index)
        }
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.nodes.contains(value)
    }

    /// Values are drained into a buffer, sorted there, and rebuilt into new
    /// nodes. The old nodes are freed, so the cost includes `n` frees and
    /// `n` allocations.
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut buf: Vec<T> = std::mem::take(&mut self.nodes).into_iter().collect();
        buf.sort_by(compare);
        self.nodes = buf.into_iter().collect();
    }

    /// Linear scan for the first element not less than `value`.
    fn binary_search(&self, value: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        match self.nodes.iter().enumerate().find(|(_, e)| *e >= value) {
            Some((idx, e)) if e == value => Ok(idx),
            Some((idx, _)) => Err(idx),
            None => Err(self.nodes.len()),
        }
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.nodes.iter()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(list: &LinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_get_from_both_ends() {
        let list: LinkedList<i32> = (0..10).collect();
        for i in 0..10 {
            assert_eq!(list.get(i), Some(&(i as i32)));
        }
        assert_eq!(list.get(10), None);
    }

    #[test]
    fn test_remove_middle_relinks() {
        let mut list: LinkedList<i32> = (0..5).collect();
        assert_eq!(list.remove(2).unwrap(), 2);
        assert_eq!(collect(&list), vec![0, 1, 3, 4]);
        assert_eq!(list.remove(3).unwrap(), 4);
        assert_eq!(list.remove(0).unwrap(), 0);
        assert_eq!(collect(&list), vec![1, 3]);
    }

    #[test]
    fn test_insert_middle() {
        let mut list: LinkedList<i32> = vec![0, 2].into_iter().collect();
        list.insert(1, 1).unwrap();
        assert_eq!(collect(&list), vec![0, 1, 2]);
    }

    #[test]
    fn test_remove_on_empty() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert!(matches!(
            list.remove(0),
            Err(BenchError::IndexOutOfBounds { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_binary_search_insertion_point() {
        let list: LinkedList<i32> = vec![1, 3, 5].into_iter().collect();
        assert_eq!(list.binary_search(&3), Ok(1));
        assert_eq!(list.binary_search(&4), Err(2));
        assert_eq!(list.binary_search(&0), Err(0));
        assert_eq!(list.binary_search(&6), Err(3));
    }

    #[test]
    fn test_sort_rebuilds_chain() {
        let mut list: LinkedList<i32> = (0..100).rev().collect();
        list.sort_by(|a, b| a.cmp(b));
        assert_eq!(collect(&list), (0..100).collect::<Vec<_>>());
    }
}
