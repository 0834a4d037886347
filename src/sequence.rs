use crate::{
    errors::{AlgsError, Result},
    handle::NodeId,
    node::Node,
};
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;

/// A doubly linked list whose nodes live in an arena owned by the list.
///
/// Links between nodes are [`NodeId`] slot indices, never references, and
/// node ids are not handed out through the public API, so callers cannot
/// break the left/right invariants. Freed slots are reused by later inserts.
///
/// Positional operations walk from whichever end is closer to the target,
/// so they touch at most about `len / 2` nodes.
#[derive(Debug)]
pub struct Sequence<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

/// Iterator over values from head to tail (or back, via `next_back`).
pub struct Iter<'a, T> {
    seq: &'a Sequence<T>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

/// Owning iterator that drains values from the head.
pub struct IntoIter<T> {
    seq: Sequence<T>,
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Sequence<T> {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every value, leaving an empty sequence.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Insert a value at the end. O(1).
    pub fn append(&mut self, value: T) {
        match self.tail {
            None => {
                let id = self.alloc(Node::new(value));
                self.head = Some(id);
                self.tail = Some(id);
            }
            Some(old_tail) => {
                let id = self.alloc(Node::with_left(value, Some(old_tail)));
                self.node_mut(old_tail).set_right(Some(id));
                self.tail = Some(id);
            }
        }
        self.len += 1;
    }

    /// Insert a value so that it ends up at `index`, shifting later values right.
    ///
    /// Error if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(AlgsError::index_out_of_range(index, self.len));
        }
        if index == self.len {
            self.append(value);
            return Ok(());
        }

        if index == 0 {
            let old_head = self.head.expect("non-empty sequence has a head");
            let id = self.alloc(Node::with_right(value, Some(old_head)));
            self.node_mut(old_head).set_left(Some(id));
            self.head = Some(id);
        } else {
            let at = self.locate(index);
            let before = self
                .node(at)
                .left()
                .expect("interior node must have a left neighbour");
            let id = self.alloc(Node::with_links(value, Some(before), Some(at)));
            self.node_mut(before).set_right(Some(id));
            self.node_mut(at).set_left(Some(id));
        }
        self.len += 1;
        Ok(())
    }

    /// Remove the value at `index`, returning it.
    ///
    /// Error if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        let id = self.locate(index);
        let node = self.release(id);

        match node.left() {
            Some(l) => self.node_mut(l).set_right(node.right()),
            None => self.head = node.right(),
        }
        match node.right() {
            Some(r) => self.node_mut(r).set_left(node.left()),
            None => self.tail = node.left(),
        }

        self.len -= 1;
        Ok(node.into_value())
    }

    /// Get a reference to the value at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(self.node(self.locate(index)).value())
    }

    /// Get a mutable reference to the value at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        let id = self.locate(index);
        Ok(self.node_mut(id).value_mut())
    }

    /// Overwrite the value at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        self.check_index(index)?;
        let id = self.locate(index);
        Ok(self.node_mut(id).set_value(value))
    }

    /// Stack push; same as [`append`](Self::append).
    pub fn push(&mut self, value: T) {
        self.append(value);
    }

    /// Stack pop: remove the last value.
    ///
    /// Error if the sequence is empty.
    pub fn pop(&mut self) -> Result<T> {
        match self.len.checked_sub(1) {
            Some(last) => self.remove(last),
            None => Err(AlgsError::index_out_of_range(0, 0)),
        }
    }

    /// Queue enqueue; same as [`append`](Self::append).
    pub fn enqueue(&mut self, value: T) {
        self.append(value);
    }

    /// Queue dequeue: remove the first value.
    ///
    /// Error if the sequence is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        self.remove(0)
    }

    /// Iterate values in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.len {
            Ok(())
        } else {
            Err(AlgsError::index_out_of_range(index, self.len))
        }
    }

    /// Id of the node at `index`, walking from the nearer end.
    ///
    /// Caller guarantees `index < len`.
    fn locate(&self, index: usize) -> NodeId {
        debug_assert!(index < self.len, "locate past the end");
        if index < self.len / 2 {
            let mut cur = self.head.expect("non-empty sequence has a head");
            for _ in 0..index {
                cur = self.node(cur).right().expect("walk stays inside the list");
            }
            cur
        } else {
            let mut cur = self.tail.expect("non-empty sequence has a tail");
            for _ in (index + 1)..self.len {
                cur = self.node(cur).left().expect("walk stays inside the list");
            }
            cur
        }
    }

    fn node(&self, id: NodeId) -> &Node<T> {
        self.slots[id.0].as_ref().expect("link points at a live slot")
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots[id.0].as_mut().expect("link points at a live slot")
    }

    fn alloc(&mut self, node: Node<T>) -> NodeId {
        match self.free.pop() {
            Some(slot) => {
                debug_assert!(self.slots[slot].is_none(), "free slot is occupied");
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    fn release(&mut self, id: NodeId) -> Node<T> {
        let node = self.slots[id.0].take().expect("released slot was live");
        self.free.push(id.0);
        node
    }

    /// Nodes from head to tail.
    fn nodes(&self) -> impl Iterator<Item = &Node<T>> + '_ {
        core::iter::successors(self.head.map(|id| self.node(id)), move |n| {
            n.right().map(|id| self.node(id))
        })
    }
}

impl<T: Clone> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Sequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.nodes().eq(other.nodes())
    }
}

impl<T: Eq> Eq for Sequence<T> {}

impl<T: Hash> Hash for Sequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for node in self.nodes() {
            node.hash(state);
        }
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }
        f.write_str("{ ")?;
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(node, f)?;
        }
        f.write_str(" }")
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Sequence::new();
        seq.extend(iter);
        seq
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { seq: self }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.node(self.front?);
        self.front = node.right();
        self.remaining -= 1;
        Some(node.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.seq.node(self.back?);
        self.back = node.left();
        self.remaining -= 1;
        Some(node.value())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.seq.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.seq.len, Some(self.seq.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.seq.pop().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
