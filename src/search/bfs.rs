//! Breadth-first search over an implicit graph.
//!
//! The graph is never materialised: `children` produces a node's neighbours
//! on demand, so it may be infinite or generated lazily. Nodes are identified
//! by value (`Eq + Hash`); two equal values are the same vertex.

use crate::sequence::Sequence;
use crate::traits::Queue;
use std::collections::HashSet;
use std::hash::Hash;

/// Returns the first node, in breadth-first order from `source`, for which
/// `is_target` holds, or `None` once every reachable node has been examined.
///
/// # Example
///
/// ```
/// use algs::search::bfs;
///
/// // first value reached by "+1" / "*2" steps whose double is 10
/// let found = bfs::search(1u32, |&n| [n + 1, n * 2], |&n| n * 2 == 10);
/// assert_eq!(found, Some(5));
/// ```
pub fn search<N, C, I, P>(source: N, children: C, is_target: P) -> Option<N>
where
    N: Eq + Hash + Clone,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    P: FnMut(&N) -> bool,
{
    search_with(Sequence::new(), source, children, is_target)
}

/// [`search`] with a caller-supplied frontier queue.
///
/// Only [`Queue::enqueue`] and [`Queue::dequeue`] are used; the search ends
/// when `dequeue` reports the queue empty. The queue should start empty.
pub fn search_with<Q, N, C, I, P>(
    mut frontier: Q,
    source: N,
    mut children: C,
    mut is_target: P,
) -> Option<N>
where
    Q: Queue<N>,
    N: Eq + Hash + Clone,
    C: FnMut(&N) -> I,
    I: IntoIterator<Item = N>,
    P: FnMut(&N) -> bool,
{
    // a node is marked when first discovered, so it is queued at most once
    let mut seen = HashSet::new();
    seen.insert(source.clone());
    frontier.enqueue(source);

    while let Ok(node) = frontier.dequeue() {
        if is_target(&node) {
            return Some(node);
        }
        for child in children(&node) {
            if !seen.contains(&child) {
                seen.insert(child.clone());
                frontier.enqueue(child);
            }
        }
    }
    None
}
