/*
 * Copyright (c) 2017, 2018, 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node `s` to
//! all other nodes of a directed graph. Each arc is assigned a non-negative
//! weight (or length).
//!
//! The graph is not given explicitly. Its nodes are the numbers `0..n` and a
//! closure returns the outgoing arcs `(head, weight)` of a node. Undirected
//! graphs are handled by reporting each edge in both directions.
//!
//! # Example
//!
//! ```
//! use ipq::shortestpath::dijkstra;
//!
//! // arcs: 0->1 (4), 0->2 (1), 1->3 (1), 2->1 (2), 2->3 (5)
//! let arcs: Vec<Vec<(usize, u32)>> = vec![
//!     vec![(1, 4), (2, 1)],
//!     vec![(3, 1)],
//!     vec![(1, 2), (3, 5)],
//!     vec![],
//! ];
//!
//! let tree = dijkstra::solve(4, 0, |u| arcs[u].iter().copied()).unwrap();
//! assert_eq!(tree.dist(1), Some(3));
//! assert_eq!(tree.dist(3), Some(4));
//! assert_eq!(tree.pred(1), Some(2));
//! assert_eq!(tree.path_to(3), Some(vec![0, 2, 1, 3]));
//!
//! let (path, dist) = dijkstra::find_path(4, 0, 3, |u| arcs[u].iter().copied()).unwrap().unwrap();
//! assert_eq!(path, vec![0, 2, 1, 3]);
//! assert_eq!(dist, 4);
//! ```

use crate::collections::{Error, IndexPriorityQueue, IndexedPriQueue};
use crate::num::traits::Zero;

use std::ops::Add;
use tracing::trace;

/// The result of a Dijkstra search.
///
/// Contains the distance label and the predecessor on a shortest path for
/// each node reached by the search.
#[derive(Clone, Debug)]
pub struct ShortestPathTree<W> {
    src: usize,
    dist: Vec<Option<W>>,
    pred: Vec<Option<usize>>,
}

impl<W> ShortestPathTree<W>
where
    W: Copy,
{
    /// Return the start node of the search.
    pub fn source(&self) -> usize {
        self.src
    }

    /// Return the length of a shortest path from the source to `u`.
    ///
    /// Returns `None` if `u` is not reachable.
    pub fn dist(&self, u: usize) -> Option<W> {
        self.dist.get(u).copied().flatten()
    }

    /// Return the predecessor of `u` on a shortest path.
    ///
    /// Returns `None` for the source and unreachable nodes.
    pub fn pred(&self, u: usize) -> Option<usize> {
        self.pred.get(u).copied().flatten()
    }

    /// Return the nodes on a shortest path from the source to `u`.
    ///
    /// The path starts with the source and ends with `u`. Returns `None` if
    /// `u` is not reachable.
    pub fn path_to(&self, u: usize) -> Option<Vec<usize>> {
        self.dist(u)?;
        let mut path = vec![u];
        let mut v = u;
        while let Some(p) = self.pred[v] {
            path.push(p);
            v = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Run a Dijkstra search from `src`.
///
/// This is a convenience wrapper around [`solve_with`] using a new
/// [`IndexPriorityQueue`] for the nodes `0..n`.
///
/// # Parameters
///
/// - `n`: the number of nodes
/// - `src`: the source node at which the search should start
/// - `neighs`: the outgoing arcs `(head, weight)` of each node
pub fn solve<W, N, I>(n: usize, src: usize, neighs: N) -> Result<ShortestPathTree<W>, Error>
where
    W: Copy + Ord + Zero + Add<W, Output = W>,
    N: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, W)>,
{
    solve_with(IndexPriorityQueue::<W, usize>::new(n), n, src, neighs)
}

/// Run a Dijkstra search from `src` with a custom priority queue.
///
/// The queue is cleared before the search starts and must accept the
/// indices `0..n`. It can be reused for multiple searches by passing a
/// mutable reference.
///
/// # Parameters
///
/// - `heap`: the priority queue handling the nodes in the correct order
/// - `n`: the number of nodes
/// - `src`: the source node at which the search should start
/// - `neighs`: the outgoing arcs `(head, weight)` of each node
pub fn solve_with<W, P, N, I>(heap: P, n: usize, src: usize, neighs: N) -> Result<ShortestPathTree<W>, Error>
where
    W: Copy + Ord + Zero + Add<W, Output = W>,
    P: IndexedPriQueue<usize, W>,
    N: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, W)>,
{
    search(heap, n, src, None, neighs)
}

/// Run a Dijkstra search and return the path from `src` to `snk`.
///
/// The search stops as soon as `snk` has been reached. The function returns
/// the nodes on the path and its length or `None` if `snk` is not reachable
/// from `src`.
///
/// # Parameters
///
/// - `n`: the number of nodes
/// - `src`: the source node
/// - `snk`: the sink node
/// - `neighs`: the outgoing arcs `(head, weight)` of each node
pub fn find_path<W, N, I>(n: usize, src: usize, snk: usize, neighs: N) -> Result<Option<(Vec<usize>, W)>, Error>
where
    W: Copy + Ord + Zero + Add<W, Output = W>,
    N: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, W)>,
{
    let tree = search(IndexPriorityQueue::<W, usize>::new(n), n, src, Some(snk), neighs)?;
    let dist = match tree.dist(snk) {
        Some(d) => d,
        None => return Ok(None),
    };
    Ok(tree.path_to(snk).map(|path| (path, dist)))
}

fn search<W, P, N, I>(
    mut heap: P,
    n: usize,
    src: usize,
    snk: Option<usize>,
    mut neighs: N,
) -> Result<ShortestPathTree<W>, Error>
where
    W: Copy + Ord + Zero + Add<W, Output = W>,
    P: IndexedPriQueue<usize, W>,
    N: FnMut(usize) -> I,
    I: IntoIterator<Item = (usize, W)>,
{
    if src >= n || snk.map_or(false, |t| t >= n) {
        return Err(Error::OutOfRange { capacity: n });
    }

    let mut dist = vec![None; n];
    let mut pred = vec![None; n];
    let mut done = vec![false; n];

    heap.clear();
    dist[src] = Some(W::zero());
    heap.push(W::zero(), src)?;

    while let Some((d, u)) = heap.pop() {
        trace!(node = u, "settled");
        done[u] = true;
        if snk == Some(u) {
            break;
        }
        for (v, w) in neighs(u) {
            if v >= n {
                return Err(Error::OutOfRange { capacity: n });
            }
            debug_assert!(w >= W::zero(), "negative arc weight");
            if done[v] {
                continue;
            }
            let dv = d + w;
            if dist[v].map_or(true, |old| dv < old) {
                dist[v] = Some(dv);
                pred[v] = Some(u);
                heap.change_key(dv, v)?;
            }
        }
    }

    Ok(ShortestPathTree { src, dist, pred })
}
