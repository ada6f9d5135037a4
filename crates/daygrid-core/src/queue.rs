//! FIFO queue with clear-aware cursors.
//!
//! ## Summary
//! `Queue` supports O(1) `push`, `shift`, `peek`, `len` and `clear`. Besides
//! the consuming iterator it hands out detached cursors (`Queue::values`)
//! that keep walking the queue while it is mutated: elements pushed later
//! become visible to them, and a `clear` ends them for good. A cursor taken
//! before a `clear` never yields data pushed after it.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

struct Slots<T> {
    items: VecDeque<T>,
    /// Position of `items[0]` counted from the first element ever pushed.
    shifted: usize,
    /// Bumped by every `clear`.
    generation: u64,
}

/// A first-in, first-out queue.
pub struct Queue<T> {
    /// Shared with every cursor handed out by `values`.
    slots: Rc<RefCell<Slots<T>>>,
}

impl<T> Queue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(Slots {
                items: VecDeque::new(),
                shifted: 0,
                generation: 0,
            })),
        }
    }

    /// Number of elements currently queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.borrow().items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `value` at the tail.
    pub fn push(&mut self, value: T) {
        self.slots.borrow_mut().items.push_back(value);
    }

    /// Removes and returns the head element, or `None` when the queue is empty.
    pub fn shift(&mut self) -> Option<T> {
        let mut slots = self.slots.borrow_mut();
        let value = slots.items.pop_front()?;
        slots.shifted += 1;
        Some(value)
    }

    /// ## Summary
    /// Empties the queue and permanently exhausts every cursor created
    /// before this call, even if new elements are pushed afterwards.
    ///
    /// The storage is replaced, not walked; only dropping the removed
    /// elements themselves costs more than O(1).
    pub fn clear(&mut self) {
        let mut slots = self.slots.borrow_mut();
        slots.generation += 1;
        slots.shifted = 0;
        slots.items = VecDeque::new();
    }
}

impl<T: Clone> Queue<T> {
    /// Returns a copy of the head element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<T> {
        self.slots.borrow().items.front().cloned()
    }

    /// ## Summary
    /// Returns a cursor yielding copies of the queued elements from head to
    /// tail.
    ///
    /// The cursor does not borrow the queue. It observes elements pushed
    /// after its creation, skips elements shifted out before it reached
    /// them, and stops for good once the queue is cleared. Because a
    /// later `push` can revive a cursor that returned `None`, it is not a
    /// fused iterator.
    #[must_use]
    pub fn values(&self) -> Values<T> {
        let slots = self.slots.borrow();
        Values {
            slots: Rc::clone(&self.slots),
            generation: slots.generation,
            position: slots.shifted,
        }
    }

    /// Like [`Queue::values`], paired with each element's position.
    pub fn entries(&self) -> std::iter::Enumerate<Values<T>> {
        self.values().enumerate()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.slots.borrow().items.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.slots.borrow_mut().items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

/// Detached cursor over a [`Queue`], see [`Queue::values`].
pub struct Values<T> {
    slots: Rc<RefCell<Slots<T>>>,
    generation: u64,
    /// Position of the next element to yield, in the same count as `Slots::shifted`.
    position: usize,
}

impl<T: Clone> Iterator for Values<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let slots = self.slots.borrow();
        if slots.generation != self.generation {
            return None;
        }

        self.position = self.position.max(slots.shifted);
        let value = slots.items.get(self.position - slots.shifted)?.clone();
        self.position += 1;
        Some(value)
    }
}

/// Consuming iterator that shifts elements off the front of a [`Queue`].
#[derive(Debug)]
pub struct IntoIter<T>(Queue<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.shift()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> std::iter::FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Queue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter(self)
    }
}
