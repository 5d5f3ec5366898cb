// Copyright (c) 2016, 2017, 2020 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Binary heap with index-addressed elements.

use crate::collections::{Error, IndexedPriQueue};
use crate::num::traits::ToPrimitive;

use tracing::{debug, trace};

/// Heap item information.
#[derive(Clone, Debug)]
struct HeapItem<V, ID> {
    /// The priority of this item.
    priority: V,
    /// The index of this item as given by the user.
    index: ID,
    /// The index converted to a slot in the position table.
    slot: usize,
}

/// Binary min-heap whose elements are identified by an index.
///
/// The queue is created with a fixed capacity `n` and accepts exactly the
/// indices `0..n`. Each index is contained at most once. Pushing, popping,
/// erasing and changing the priority of an index take `O(log n)` time,
/// lookups take constant time.
///
/// Priorities are compared by their total order. Elements with equal
/// priorities are returned in no particular order.
///
/// The index type `ID` may be any primitive integer type. Indices that do
/// not convert to a `usize` (e.g. negative ones) are out of range.
#[derive(Clone, Debug)]
pub struct IndexPriorityQueue<V, ID = u32> {
    /// The heap elements, the minimum is at position 0.
    ///
    /// The children of position `p` are at `2p + 1` and `2p + 2`.
    heap: Vec<HeapItem<V, ID>>,
    /// Heap position of each index, `None` if it is not in the queue.
    positions: Vec<Option<usize>>,
}

impl<V, ID> IndexPriorityQueue<V, ID> {
    /// Create an empty queue for the indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        trace!(capacity, "new index priority queue");
        IndexPriorityQueue {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Return the number of indices this queue can hold.
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }

    /// Return the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Return `true` iff the queue contains no element.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Remove all elements from the queue.
    ///
    /// The capacity is not changed.
    pub fn clear(&mut self) {
        for item in self.heap.drain(..) {
            self.positions[item.slot] = None;
        }
    }
}

impl<V, ID> IndexPriorityQueue<V, ID>
where
    ID: ToPrimitive,
{
    /// Return `true` iff `index` is contained in the queue.
    ///
    /// Indices out of range are never contained.
    pub fn contains(&self, index: ID) -> bool {
        self.position(index).is_some()
    }

    /// Return the current priority of `index` or `None` if it is not in the
    /// queue.
    pub fn priority(&self, index: ID) -> Option<&V> {
        self.position(index).map(|pos| &self.heap[pos].priority)
    }

    /// Return the heap position of `index`.
    fn position(&self, index: ID) -> Option<usize> {
        index.to_usize().and_then(|i| self.positions.get(i).copied().flatten())
    }

    /// Return the slot in the position table for `index`.
    fn slot(&self, index: ID) -> Result<usize, Error> {
        let capacity = self.capacity();
        match index.to_usize() {
            Some(i) if i < capacity => Ok(i),
            _ => {
                debug!(capacity, "index out of range");
                Err(Error::OutOfRange { capacity })
            }
        }
    }
}

impl<V, ID> IndexPriorityQueue<V, ID>
where
    V: Ord,
    ID: ToPrimitive + Copy,
{
    /// Push `index` with the given `priority` onto the queue.
    ///
    /// Fails with [`Error::DuplicateIndex`] if `index` is already contained in
    /// the queue and with [`Error::OutOfRange`] if it is not in
    /// `0..capacity`. In both cases the queue is not modified.
    pub fn push(&mut self, priority: V, index: ID) -> Result<(), Error> {
        let slot = self.slot(index)?;
        if self.positions[slot].is_some() {
            debug!(index = slot, "push rejected, index already in queue");
            return Err(Error::DuplicateIndex(slot));
        }
        let pos = self.heap.len();
        self.heap.push(HeapItem { priority, index, slot });
        self.positions[slot] = Some(pos);
        self.upheap(pos);
        Ok(())
    }

    /// Remove and return the element with the smallest priority or `None` if
    /// the queue is empty.
    pub fn pop(&mut self) -> Option<(V, ID)> {
        if self.heap.is_empty() {
            return None;
        }
        let item = self.remove_at(0);
        Some((item.priority, item.index))
    }

    /// Return the element with the smallest priority or `None` if the queue is
    /// empty.
    pub fn top(&self) -> Option<(&V, ID)> {
        self.heap.first().map(|item| (&item.priority, item.index))
    }

    /// Remove `index` from the queue and return its priority.
    ///
    /// Fails with [`Error::IndexNotFound`] if `index` is not contained in the
    /// queue.
    pub fn erase(&mut self, index: ID) -> Result<V, Error> {
        let slot = self.slot(index)?;
        match self.positions[slot] {
            Some(pos) => Ok(self.remove_at(pos).priority),
            None => {
                debug!(index = slot, "erase rejected, index not in queue");
                Err(Error::IndexNotFound(slot))
            }
        }
    }

    /// Set the priority of `index` to `priority`.
    ///
    /// If `index` is not contained in the queue, it is pushed with the given
    /// priority.
    pub fn change_key(&mut self, priority: V, index: ID) -> Result<(), Error> {
        let slot = self.slot(index)?;
        match self.positions[slot] {
            Some(pos) => {
                let decreased = priority < self.heap[pos].priority;
                self.heap[pos].priority = priority;
                if decreased {
                    self.upheap(pos);
                } else {
                    self.downheap(pos);
                }
                Ok(())
            }
            None => self.push(priority, index),
        }
    }

    /// Decrease the priority of `index` to `priority`.
    ///
    /// Returns `true` if the new priority is smaller than the old one. If it
    /// is not, the queue is not modified and `false` is returned.
    pub fn decrease_key(&mut self, priority: V, index: ID) -> Result<bool, Error> {
        let slot = self.slot(index)?;
        let pos = self.positions[slot].ok_or(Error::IndexNotFound(slot))?;
        if priority < self.heap[pos].priority {
            self.heap[pos].priority = priority;
            self.upheap(pos);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Remove the item at heap position `pos`.
    ///
    /// The last item is moved to `pos` and then moved up or down until the
    /// heap is in order again.
    fn remove_at(&mut self, pos: usize) -> HeapItem<V, ID> {
        let item = self.heap.swap_remove(pos);
        self.positions[item.slot] = None;
        if pos < self.heap.len() {
            self.positions[self.heap[pos].slot] = Some(pos);
            let pos = self.upheap(pos);
            self.downheap(pos);
        }
        item
    }

    /// Move the item at position `pos` up in the heap until its parent does
    /// not have a larger priority or the root is reached.
    ///
    /// Returns the final position of the item.
    fn upheap(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.heap[pos].priority >= self.heap[parent].priority {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Move the item at position `pos` down in the heap until none of its
    /// children has a smaller priority.
    ///
    /// Returns the final position of the item.
    fn downheap(&mut self, mut pos: usize) -> usize {
        let n = self.heap.len();
        loop {
            let left = 2 * pos + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            // the right child only wins on a strictly smaller priority
            let child = if right < n && self.heap[right].priority < self.heap[left].priority {
                right
            } else {
                left
            };
            if self.heap[child].priority >= self.heap[pos].priority {
                break;
            }
            self.swap(pos, child);
            pos = child;
        }
        pos
    }

    /// Swap the items at heap positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a].slot] = Some(a);
        self.positions[self.heap[b].slot] = Some(b);
    }
}

impl<V, ID> IndexedPriQueue<ID, V> for IndexPriorityQueue<V, ID>
where
    V: Ord,
    ID: ToPrimitive + Copy,
{
    fn is_empty(&self) -> bool {
        IndexPriorityQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        IndexPriorityQueue::len(self)
    }

    fn clear(&mut self) {
        IndexPriorityQueue::clear(self)
    }

    fn contains(&self, index: ID) -> bool {
        IndexPriorityQueue::contains(self, index)
    }

    fn push(&mut self, priority: V, index: ID) -> Result<(), Error> {
        IndexPriorityQueue::push(self, priority, index)
    }

    fn change_key(&mut self, priority: V, index: ID) -> Result<(), Error> {
        IndexPriorityQueue::change_key(self, priority, index)
    }

    fn decrease_key(&mut self, priority: V, index: ID) -> Result<bool, Error> {
        IndexPriorityQueue::decrease_key(self, priority, index)
    }

    fn erase(&mut self, index: ID) -> Result<V, Error> {
        IndexPriorityQueue::erase(self, index)
    }

    fn pop(&mut self) -> Option<(V, ID)> {
        IndexPriorityQueue::pop(self)
    }

    fn top(&self) -> Option<(&V, ID)> {
        IndexPriorityQueue::top(self)
    }

    fn priority(&self, index: ID) -> Option<&V> {
        IndexPriorityQueue::priority(self, index)
    }
}

#[cfg(test)]
mod tests {
    use super::IndexPriorityQueue;
    use crate::collections::{Error, IndexedPriQueue};
    use crate::num::traits::ToPrimitive;

    /// Check that positions and heap are consistent and the heap is ordered.
    fn check<V: Ord, ID: ToPrimitive + Copy>(q: &IndexPriorityQueue<V, ID>) {
        for (pos, item) in q.heap.iter().enumerate() {
            assert_eq!(item.index.to_usize(), Some(item.slot));
            assert_eq!(q.positions[item.slot], Some(pos));
            if pos > 0 {
                assert!(q.heap[(pos - 1) / 2].priority <= item.priority);
            }
        }
        let mut npresent = 0;
        for (slot, pos) in q.positions.iter().enumerate() {
            if let Some(pos) = *pos {
                assert!(pos < q.heap.len());
                assert_eq!(q.heap[pos].slot, slot);
                npresent += 1;
            }
        }
        assert_eq!(npresent, q.len());
    }

    #[test]
    fn test_new() {
        let q = IndexPriorityQueue::<i32>::new(7);
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert_eq!(q.capacity(), 7);
        assert_eq!(q.top(), None);
        assert!((0..7).all(|i| !q.contains(i)));
        check(&q);
    }

    #[test]
    fn test_push_pop() {
        let mut q = IndexPriorityQueue::<i32>::new(10);
        for (i, &p) in [7, 3, 9, 1, 4, 8, 2, 6, 0, 5].iter().enumerate() {
            q.push(p, i as u32).unwrap();
            check(&q);
        }
        assert_eq!(q.len(), 10);
        let mut prios = vec![];
        while let Some((p, i)) = q.pop() {
            assert!(!q.contains(i));
            check(&q);
            prios.push(p);
        }
        assert_eq!(prios, (0..10).collect::<Vec<_>>());
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_scenario() {
        let mut q = IndexPriorityQueue::<i32>::new(5);
        q.push(10, 0).unwrap();
        q.push(5, 1).unwrap();
        q.push(20, 2).unwrap();
        assert_eq!(q.top(), Some((&5, 1)));

        q.change_key(1, 2).unwrap();
        check(&q);
        assert_eq!(q.top(), Some((&1, 2)));

        assert_eq!(q.pop(), Some((1, 2)));
        check(&q);
        assert_eq!(q.top(), Some((&5, 1)));
        assert_eq!(q.len(), 2);

        assert_eq!(q.erase(0), Ok(10));
        check(&q);
        assert_eq!(q.len(), 1);
        assert!(!q.contains(0));

        assert_eq!(q.pop(), Some((5, 1)));
        assert!(q.is_empty());
        check(&q);
    }

    #[test]
    fn test_contains_out_of_range() {
        let mut q = IndexPriorityQueue::<u32, i32>::new(5);
        q.push(1, 4).unwrap();
        assert!(q.contains(4));
        assert!(!q.contains(-1));
        assert!(!q.contains(5));
        assert!(!q.contains(100));
        assert_eq!(q.priority(-1), None);
        assert_eq!(q.priority(4), Some(&1));
    }

    #[test]
    fn test_duplicate() {
        let mut q = IndexPriorityQueue::<i32>::new(5);
        assert_eq!(q.push(5, 2), Ok(()));
        assert_eq!(q.push(5, 2), Err(Error::DuplicateIndex(2)));
        assert_eq!(q.push(1, 2), Err(Error::DuplicateIndex(2)));
        assert_eq!(q.len(), 1);
        assert_eq!(q.priority(2), Some(&5));
        check(&q);
    }

    #[test]
    fn test_rejected() {
        let mut q = IndexPriorityQueue::<i32, i64>::new(3);
        q.push(3, 0).unwrap();
        q.push(1, 1).unwrap();
        assert_eq!(q.push(0, 3), Err(Error::OutOfRange { capacity: 3 }));
        assert_eq!(q.push(0, -1), Err(Error::OutOfRange { capacity: 3 }));
        assert_eq!(q.erase(2), Err(Error::IndexNotFound(2)));
        assert_eq!(q.erase(-5), Err(Error::OutOfRange { capacity: 3 }));
        assert_eq!(q.change_key(0, 17), Err(Error::OutOfRange { capacity: 3 }));
        assert_eq!(q.decrease_key(0, 2), Err(Error::IndexNotFound(2)));
        assert_eq!(q.len(), 2);
        assert_eq!(q.top(), Some((&1, 1)));
        check(&q);
    }

    #[test]
    fn test_erase_inner() {
        let mut q = IndexPriorityQueue::<i32, usize>::new(16);
        for i in 0..16 {
            q.push((i as i32 * 7) % 16, i).unwrap();
        }
        for &i in &[5, 0, 11, 3, 15, 8] {
            assert_eq!(q.erase(i), Ok((i as i32 * 7) % 16));
            assert!(!q.contains(i));
            check(&q);
        }
        assert_eq!(q.len(), 10);
        let mut last = i32::MIN;
        while let Some((p, _)) = q.pop() {
            assert!(last <= p);
            last = p;
        }
    }

    #[test]
    fn test_push_erase_inverse() {
        let mut q = IndexPriorityQueue::<i32>::new(8);
        for i in 0..6 {
            q.push(10 - i as i32, i).unwrap();
        }
        let before: Vec<_> = (0..8).map(|i| q.priority(i).copied()).collect();
        q.push(-3, 7).unwrap();
        assert_eq!(q.top(), Some((&-3, 7)));
        assert_eq!(q.erase(7), Ok(-3));
        let after: Vec<_> = (0..8).map(|i| q.priority(i).copied()).collect();
        assert_eq!(before, after);
        check(&q);
    }

    #[test]
    fn test_change_key() {
        let mut q = IndexPriorityQueue::<i32>::new(6);
        for i in 0..6 {
            q.push(i as i32, i).unwrap();
        }
        // increase the minimum
        q.change_key(10, 0).unwrap();
        check(&q);
        assert_eq!(q.top(), Some((&1, 1)));
        // decrease a leaf
        q.change_key(-1, 5).unwrap();
        check(&q);
        assert_eq!(q.top(), Some((&-1, 5)));
        // equal priority
        q.change_key(3, 3).unwrap();
        check(&q);
        assert_eq!(q.priority(3), Some(&3));

        let order: Vec<_> = std::iter::from_fn(|| q.pop()).collect();
        assert_eq!(order, vec![(-1, 5), (1, 1), (2, 2), (3, 3), (4, 4), (10, 0)]);
    }

    #[test]
    fn test_change_key_absent_pushes() {
        let mut q = IndexPriorityQueue::<i32>::new(3);
        q.change_key(4, 1).unwrap();
        assert!(q.contains(1));
        assert_eq!(q.priority(1), Some(&4));
        assert_eq!(q.len(), 1);
        check(&q);
    }

    #[test]
    fn test_decrease_key() {
        let mut q = IndexPriorityQueue::<i32>::new(4);
        q.push(5, 0).unwrap();
        q.push(3, 1).unwrap();
        q.push(8, 2).unwrap();
        assert_eq!(q.decrease_key(6, 0), Ok(false));
        assert_eq!(q.decrease_key(5, 0), Ok(false));
        assert_eq!(q.priority(0), Some(&5));
        assert_eq!(q.decrease_key(1, 2), Ok(true));
        check(&q);
        assert_eq!(q.top(), Some((&1, 2)));
    }

    #[test]
    fn test_clear() {
        let mut q = IndexPriorityQueue::<i32>::new(4);
        for i in 0..4 {
            q.push(i as i32, i).unwrap();
        }
        q.pop();
        q.clear();
        assert!(q.is_empty());
        assert_eq!(q.capacity(), 4);
        assert!((0..4).all(|i| !q.contains(i)));
        check(&q);
        for i in 0..4 {
            q.push(-(i as i32), i).unwrap();
        }
        assert_eq!(q.top(), Some((&-3, 3)));
        check(&q);
    }

    #[test]
    fn test_zero_capacity() {
        let mut q = IndexPriorityQueue::<i32>::new(0);
        assert!(!q.contains(0));
        assert_eq!(q.push(1, 0), Err(Error::OutOfRange { capacity: 0 }));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn test_trait_through_reference() {
        fn drain<P: IndexedPriQueue<u32, i32>>(mut q: P) -> Vec<i32> {
            std::iter::from_fn(|| q.pop()).map(|(p, _)| p).collect()
        }

        let mut q = IndexPriorityQueue::<i32>::new(4);
        IndexedPriQueue::push(&mut q, 2, 0).unwrap();
        IndexedPriQueue::push(&mut q, 1, 3).unwrap();
        IndexedPriQueue::change_key(&mut q, 0, 2).unwrap();
        assert_eq!(drain(&mut q), vec![0, 1, 2]);
        assert!(q.is_empty());
    }
}
