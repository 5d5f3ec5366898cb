// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! An index-addressable binary min-heap priority queue.
//!
//! Every element of an [`IndexPriorityQueue`] is identified by a stable
//! integer index in `0..n`, where `n` is fixed when the queue is created.
//! Priorities of elements can be changed and arbitrary elements can be
//! removed by their index, both in logarithmic time.
//!
//! # Example
//!
//! ```
//! use ipq::IndexPriorityQueue;
//!
//! let mut q = IndexPriorityQueue::<i32>::new(5);
//! q.push(10, 0).unwrap();
//! q.push(5, 1).unwrap();
//! q.push(20, 2).unwrap();
//! assert_eq!(q.top(), Some((&5, 1)));
//!
//! q.change_key(1, 2).unwrap();
//! assert_eq!(q.pop(), Some((1, 2)));
//! assert_eq!(q.erase(0), Ok(10));
//! assert_eq!(q.len(), 1);
//! assert!(!q.contains(0));
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod collections;
pub use self::collections::{Error, IndexPriorityQueue, IndexedPriQueue};

// # Algorithms

pub mod shortestpath;
