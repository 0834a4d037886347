//! Narrow capability traits over an ordered collection.
//!
//! [`Sequence`] implements all three; code that only needs FIFO or LIFO
//! behaviour should ask for [`Queue`] or [`Stack`] instead of the concrete type.

use crate::errors::Result;
use crate::sequence::Sequence;

/// Zero-indexed positional access.
pub trait List<T> {
    /// Insert at the end.
    fn append(&mut self, value: T);

    /// Insert so the value lands at `index`; `index` may equal `size()`.
    fn insert(&mut self, index: usize, value: T) -> Result<()>;

    /// Remove and return the value at `index`.
    fn remove(&mut self, index: usize) -> Result<T>;

    fn get(&self, index: usize) -> Result<&T>;

    /// Overwrite the value at `index`, returning the old one.
    fn set(&mut self, index: usize, value: T) -> Result<T>;

    fn size(&self) -> usize;
}

/// Last in, first out.
pub trait Stack<T> {
    fn push(&mut self, value: T);

    /// Remove the most recently pushed value. Fails when empty.
    fn pop(&mut self) -> Result<T>;

    fn size(&self) -> usize;
}

/// First in, first out.
pub trait Queue<T> {
    fn enqueue(&mut self, value: T);

    /// Remove the oldest value. Fails when empty.
    fn dequeue(&mut self) -> Result<T>;

    fn size(&self) -> usize;
}

impl<T> List<T> for Sequence<T> {
    fn append(&mut self, value: T) {
        Sequence::append(self, value)
    }

    fn insert(&mut self, index: usize, value: T) -> Result<()> {
        Sequence::insert(self, index, value)
    }

    fn remove(&mut self, index: usize) -> Result<T> {
        Sequence::remove(self, index)
    }

    fn get(&self, index: usize) -> Result<&T> {
        Sequence::get(self, index)
    }

    fn set(&mut self, index: usize, value: T) -> Result<T> {
        Sequence::set(self, index, value)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Stack<T> for Sequence<T> {
    fn push(&mut self, value: T) {
        Sequence::push(self, value)
    }

    fn pop(&mut self) -> Result<T> {
        Sequence::pop(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Queue<T> for Sequence<T> {
    fn enqueue(&mut self, value: T) {
        Sequence::enqueue(self, value)
    }

    fn dequeue(&mut self) -> Result<T> {
        Sequence::dequeue(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, Q: Queue<T> + ?Sized> Queue<T> for &mut Q {
    fn enqueue(&mut self, value: T) {
        (**self).enqueue(value)
    }

    fn dequeue(&mut self) -> Result<T> {
        (**self).dequeue()
    }

    fn size(&self) -> usize {
        (**self).size()
    }
}
