//! Position annotations for sequence elements.

use std::iter::Peekable;

/// An element together with its position in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexed<T> {
    pub value: T,
    /// Zero-based position.
    pub index: usize,
    /// Whether this is the final element. Only known to
    /// [`enumerate_with_last`]; `None` otherwise.
    pub last: Option<bool>,
}

impl<T> Indexed<T> {
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_even(&self) -> bool {
        self.index % 2 == 0
    }

    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

/// Iterator returned by [`enumerate`].
#[derive(Debug, Clone)]
pub struct Enumerate<I> {
    iter: I,
    index: usize,
}

impl<I: Iterator> Iterator for Enumerate<I> {
    type Item = Indexed<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some(Indexed {
            value,
            index,
            last: None,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Annotates every element with its index, parity and whether it is first.
pub fn enumerate<I: IntoIterator>(seq: I) -> Enumerate<I::IntoIter> {
    Enumerate {
        iter: seq.into_iter(),
        index: 0,
    }
}

/// Iterator returned by [`enumerate_with_last`].
pub struct EnumerateWithLast<I: Iterator> {
    iter: Peekable<I>,
    index: usize,
}

impl<I: Iterator> Iterator for EnumerateWithLast<I> {
    type Item = Indexed<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        let last = self.iter.peek().is_none();
        Some(Indexed {
            value,
            index,
            last: Some(last),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// ## Summary
/// Like [`enumerate`], but also marks the final element.
///
/// Knowing whether an element is the last one requires reading the next,
/// so the source runs one element ahead of the consumer.
pub fn enumerate_with_last<I: IntoIterator>(seq: I) -> EnumerateWithLast<I::IntoIter> {
    EnumerateWithLast {
        iter: seq.into_iter().peekable(),
        index: 0,
    }
}
