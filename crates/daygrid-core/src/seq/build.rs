//! Sequences assembled on demand, and shared cursors over a single iterator.

use std::cell::RefCell;
use std::rc::Rc;

/// Iterator returned by [`build`].
pub struct Build<F, S: IntoIterator> {
    factory: F,
    current: Option<S::IntoIter>,
    done: bool,
}

impl<F, S> Iterator for Build<F, S>
where
    F: FnMut() -> Option<S>,
    S: IntoIterator,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        loop {
            if let Some(item) = self.current.as_mut().and_then(Iterator::next) {
                return Some(item);
            }
            if self.done {
                return None;
            }
            match (self.factory)() {
                Some(seq) => self.current = Some(seq.into_iter()),
                None => {
                    self.done = true;
                    self.current = None;
                }
            }
        }
    }
}

impl<F, S> std::iter::FusedIterator for Build<F, S>
where
    F: FnMut() -> Option<S>,
    S: IntoIterator,
{
}

/// ## Summary
/// Concatenates the sequences returned by repeated calls to `factory`.
///
/// `factory` is called again only once the previous sequence is exhausted,
/// so an unbounded chain (for example "the days of the next month") is
/// produced one piece at a time. Returning `None` ends the sequence.
pub fn build<F, S>(factory: F) -> Build<F, S>
where
    F: FnMut() -> Option<S>,
    S: IntoIterator,
{
    Build {
        factory,
        current: None,
        done: false,
    }
}

/// ## Summary
/// A handle on an iterator whose position is shared by every clone.
///
/// Clones (see [`Cursor::view`]) are views, not replays: pulling an element
/// through any of them advances all of them. This lets a partly consumed
/// iterator be handed to a second consumer that picks up exactly where the
/// first one stopped.
pub struct Cursor<I> {
    inner: Rc<RefCell<I>>,
}

impl<I> Cursor<I> {
    /// Another view advancing the same position.
    #[must_use]
    pub fn view(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<I> Clone for Cursor<I> {
    fn clone(&self) -> Self {
        self.view()
    }
}

impl<I: Iterator> Iterator for Cursor<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.borrow_mut().next()
    }
}

/// Wraps a (possibly partly consumed) iterator into a shareable [`Cursor`].
pub fn wrap<I: Iterator>(iter: I) -> Cursor<I> {
    Cursor {
        inner: Rc::new(RefCell::new(iter)),
    }
}

/// Returns the iterator behind a sequence.
pub fn unwrap<S: IntoIterator>(seq: S) -> S::IntoIter {
    seq.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_concatenates_until_none() {
        let mut round = 0;
        let built: Vec<_> = build(|| {
            round += 1;
            (round <= 3).then(|| vec![round; round])
        })
        .collect();

        assert_eq!(built, vec![1, 2, 2, 3, 3, 3]);
    }

    #[test]
    fn build_skips_empty_pieces() {
        let mut pieces = vec![vec![], vec![1], vec![], vec![2]].into_iter();
        let built: Vec<u8> = build(|| pieces.next()).collect();

        assert_eq!(built, vec![1, 2]);
    }

    #[test]
    fn build_calls_factory_lazily() {
        let mut calls = 0;
        let first: Vec<_> = build(|| {
            calls += 1;
            Some(0..10)
        })
        .take(15)
        .collect();

        assert_eq!(first.len(), 15);
        assert_eq!(calls, 2);
    }

    #[test]
    fn build_is_fused_after_none() {
        let mut calls = 0;
        let mut built = build(|| {
            calls += 1;
            None::<Vec<u8>>
        });

        assert_eq!(built.next(), None);
        assert_eq!(built.next(), None);
        drop(built);
        assert_eq!(calls, 1);
    }

    #[test]
    fn cursor_views_share_position() {
        let mut cursor = wrap(1..=6);
        let mut view = cursor.view();

        assert_eq!(cursor.next(), Some(1));
        assert_eq!(view.next(), Some(2));
        assert_eq!(cursor.by_ref().take(2).collect::<Vec<_>>(), vec![3, 4]);
        assert_eq!(view.collect::<Vec<_>>(), vec![5, 6]);
        assert_eq!(cursor.next(), None);
    }

    #[test]
    fn unwrap_continues_a_partly_consumed_iterator() {
        let mut iter = unwrap(vec!['a', 'b', 'c']);
        assert_eq!(iter.next(), Some('a'));

        let rest: String = wrap(iter).collect();
        assert_eq!(rest, "bc");
    }
}
