/*
 * Copyright (c) 2018 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

mod indexheap;
pub use self::indexheap::IndexPriorityQueue;

/// Error raised by a rejected queue operation.
///
/// A rejected operation never modifies the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The index is already contained in the queue.
    #[error("index {0} is already in the queue")]
    DuplicateIndex(usize),

    /// The index is not contained in the queue.
    #[error("index {0} is not in the queue")]
    IndexNotFound(usize),

    /// The index is not in `0..capacity`.
    #[error("index out of range for queue of capacity {capacity}")]
    OutOfRange { capacity: usize },
}

/// A min-priority queue whose elements are addressed by an index.
///
/// Each index is contained at most once. The priority associated with an
/// index can be changed while it is in the queue.
pub trait IndexedPriQueue<ID, V> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Return `true` iff `index` is contained in the queue.
    ///
    /// This is `false` for indices out of range.
    fn contains(&self, index: ID) -> bool;

    /// Push `index` with the given `priority` onto the queue.
    ///
    /// Fails if `index` is out of range or already contained in the queue.
    fn push(&mut self, priority: V, index: ID) -> Result<(), Error>;

    /// Set the priority of `index`.
    ///
    /// If `index` is not contained in the queue, it is pushed.
    fn change_key(&mut self, priority: V, index: ID) -> Result<(), Error>;

    /// Decrease the priority of `index`.
    ///
    /// Returns `true` if the new priority is smaller than the old one, in
    /// which case the priority has been changed. Otherwise the queue is not
    /// modified.
    fn decrease_key(&mut self, priority: V, index: ID) -> Result<bool, Error>;

    /// Remove `index` from the queue and return its priority.
    fn erase(&mut self, index: ID) -> Result<V, Error>;

    /// Remove and return the element with the smallest priority or `None` if
    /// the queue is empty.
    fn pop(&mut self) -> Option<(V, ID)>;

    /// Return the element with the smallest priority or `None` if the queue
    /// is empty.
    fn top(&self) -> Option<(&V, ID)>;

    /// Return the current priority of `index` or `None` if it is not in the
    /// queue.
    fn priority(&self, index: ID) -> Option<&V>;
}

impl<'a, P, ID, V> IndexedPriQueue<ID, V> for &'a mut P
where
    P: IndexedPriQueue<ID, V>,
{
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn clear(&mut self) {
        (**self).clear()
    }

    fn contains(&self, index: ID) -> bool {
        (**self).contains(index)
    }

    fn push(&mut self, priority: V, index: ID) -> Result<(), Error> {
        (**self).push(priority, index)
    }

    fn change_key(&mut self, priority: V, index: ID) -> Result<(), Error> {
        (**self).change_key(priority, index)
    }

    fn decrease_key(&mut self, priority: V, index: ID) -> Result<bool, Error> {
        (**self).decrease_key(priority, index)
    }

    fn erase(&mut self, index: ID) -> Result<V, Error> {
        (**self).erase(index)
    }

    fn pop(&mut self) -> Option<(V, ID)> {
        (**self).pop()
    }

    fn top(&self) -> Option<(&V, ID)> {
        (**self).top()
    }

    fn priority(&self, index: ID) -> Option<&V> {
        (**self).priority(index)
    }
}
