//! Single-pass sequence combinators.
//!
//! ## Summary
//! Every combinator here works on any `IntoIterator`, finite or infinite,
//! and pulls from its source only when its own consumer asks for the next
//! element. Operations that are promised a number of elements fail with a
//! [`SeqError`](crate::error::SeqError) instead of silently truncating.
//!
//! ## Lookahead
//! [`group_by_first_element`] and [`group`] need to see the element that
//! starts the next group before they can hand out the current one, so the
//! source is always one element ahead of what has been yielded. A consumer
//! that stops mid-way leaves that element buffered inside the combinator.
//! [`group_by_last_element`] never reads ahead. [`enumerate_with_last`]
//! reads one element ahead to know whether the current one is the last.

mod build;
mod enumerate;
mod group;
mod range;
mod take;

pub use build::{Build, Cursor, build, unwrap, wrap};
pub use enumerate::{Enumerate, EnumerateWithLast, Indexed, enumerate, enumerate_with_last};
pub use group::{
    Group, GroupByFirst, GroupByLast, group, group_by_first_element, group_by_last_element,
};
pub use range::{Range, range, range_to};
pub use take::{TakeFirst, count_at_most, first_and_rest, take_first, take_last};

/// A sequence yielding exactly one element.
pub use std::iter::once;

/// Yields the elements of every inner sequence in order, moving to the next
/// one only after the current one is exhausted.
pub fn concat<I>(seqs: I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    seqs.into_iter().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_is_lazy_over_inner_sequences() {
        let mut opened = 0;
        let seqs = (0..3).map(|n| {
            opened += 1;
            vec![n; 2]
        });
        let mut all = concat(seqs);

        assert_eq!(all.next(), Some(0));
        assert_eq!(all.next(), Some(0));
        assert_eq!(all.next(), Some(1));
        drop(all);
        assert_eq!(opened, 2);
    }

    #[test]
    fn concat_of_once_and_rest() {
        let joined: Vec<_> = concat([vec![1], vec![], vec![2, 3]]).collect();
        assert_eq!(joined, vec![1, 2, 3]);

        let with_head: Vec<_> = once(0).chain(concat([[1, 2]])).collect();
        assert_eq!(with_head, vec![0, 1, 2]);
    }
}
