//! Bounded takes from the front and the back of a sequence.

use crate::error::{SeqError, SeqResult};
use crate::queue::{self, Queue};

/// Iterator returned by [`take_first`].
#[derive(Debug, Clone)]
pub struct TakeFirst<I> {
    iter: I,
    wanted: usize,
    produced: usize,
    failed: bool,
}

impl<I> TakeFirst<I> {
    /// Returns the source, positioned right after the last element taken.
    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Iterator for TakeFirst<I> {
    type Item = SeqResult<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.produced == self.wanted {
            return None;
        }

        if let Some(item) = self.iter.next() {
            self.produced += 1;
            Some(Ok(item))
        } else {
            self.failed = true;
            tracing::debug!(
                wanted = self.wanted,
                produced = self.produced,
                "take_first ran out of elements"
            );
            Some(Err(SeqError::Underflow {
                wanted: self.wanted,
                produced: self.produced,
            }))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = self.wanted - self.produced;
        (remaining.min(1), Some(remaining))
    }
}

impl<I: Iterator> std::iter::FusedIterator for TakeFirst<I> {}

/// ## Summary
/// Lazily yields exactly `n` elements of `seq`.
///
/// Elements past the `n`th are never pulled. If the source runs dry first,
/// the iterator yields a single `Err(SeqError::Underflow)` and then stops.
pub fn take_first<I: IntoIterator>(seq: I, n: usize) -> TakeFirst<I::IntoIter> {
    TakeFirst {
        iter: seq.into_iter(),
        wanted: n,
        produced: 0,
        failed: false,
    }
}

/// ## Summary
/// Drains `seq` and returns its last `n` elements in their original order.
///
/// At most `n` elements are buffered at any time. `n == 0` returns an empty
/// sequence without touching the source.
///
/// ## Errors
/// Returns `SeqError::Underflow` if `seq` holds fewer than `n` elements.
pub fn take_last<I: IntoIterator>(seq: I, n: usize) -> SeqResult<queue::IntoIter<I::Item>> {
    let mut window = Queue::new();
    if n == 0 {
        return Ok(window.into_iter());
    }

    let mut iter = seq.into_iter();
    for produced in 0..n {
        let Some(item) = iter.next() else {
            tracing::debug!(wanted = n, produced, "take_last ran out of elements");
            return Err(SeqError::Underflow { wanted: n, produced });
        };
        window.push(item);
    }

    for item in iter {
        window.push(item);
        window.shift();
    }

    Ok(window.into_iter())
}

/// ## Summary
/// Pulls the first element of `seq` and returns it with the rest of the
/// same iterator, so nothing is skipped or repeated.
///
/// ## Errors
/// Returns `SeqError::Empty` if `seq` produced nothing.
pub fn first_and_rest<I: IntoIterator>(seq: I) -> SeqResult<(I::Item, I::IntoIter)> {
    let mut iter = seq.into_iter();
    let first = iter.next().ok_or(SeqError::Empty)?;
    Ok((first, iter))
}

/// ## Summary
/// Counts the elements of `seq`.
///
/// ## Errors
/// Returns `SeqError::Overflow` as soon as the count reaches `limit`, which
/// keeps infinite sources from hanging the caller.
pub fn count_at_most<I: IntoIterator>(seq: I, limit: usize) -> SeqResult<usize> {
    let mut count = 0;
    for _ in seq {
        count += 1;
        if count >= limit {
            return Err(SeqError::Overflow { limit });
        }
    }
    Ok(count)
}
