use crate::errors::{AlgsError, Result};
use crate::handle::NodeId;
use core::fmt;
use core::hash::{Hash, Hasher};

/// A value-holding cell with optional links to its left and right neighbours.
///
/// Equality, hashing and `Display` look at the value only. Two nodes holding
/// equal values compare equal wherever they sit, so node equality says nothing
/// about position.
#[derive(Debug, Clone)]
pub struct Node<T> {
    value: T,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl<T> Node<T> {
    /// A node with no neighbours.
    pub fn new(value: T) -> Self {
        Self::with_links(value, None, None)
    }

    /// A node whose left neighbour is `left`.
    pub fn with_left(value: T, left: Option<NodeId>) -> Self {
        Self::with_links(value, left, None)
    }

    /// A node whose right neighbour is `right`.
    pub fn with_right(value: T, right: Option<NodeId>) -> Self {
        Self::with_links(value, None, right)
    }

    /// A node with both neighbours given.
    pub fn with_links(value: T, left: Option<NodeId>, right: Option<NodeId>) -> Self {
        Self { value, left, right }
    }

    /// Builds a node from a possibly absent value.
    ///
    /// Fails with [`AlgsError::InvariantViolation`] when `value` is `None`:
    /// a node always carries a value.
    pub fn try_new(value: Option<T>, left: Option<NodeId>, right: Option<NodeId>) -> Result<Self> {
        match value {
            Some(value) => Ok(Self::with_links(value, left, right)),
            None => Err(AlgsError::InvariantViolation("node value must be present")),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value, returning the old one.
    pub fn set_value(&mut self, value: T) -> T {
        core::mem::replace(&mut self.value, value)
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T: Hash> Hash for Node<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
