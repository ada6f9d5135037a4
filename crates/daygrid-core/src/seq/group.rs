//! Splitting a sequence into runs of adjacent elements.

use crate::error::SeqResult;
use crate::seq::take::first_and_rest;

/// Iterator returned by [`group_by_first_element`].
pub struct GroupByFirst<I: Iterator, P> {
    iter: I,
    is_first: P,
    /// The element that opens the next group, read ahead of the consumer.
    pending: Option<I::Item>,
}

impl<I, P> GroupByFirst<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    /// ## Summary
    /// Groups `first` followed by `rest`, for callers that already pulled
    /// the element opening the first group.
    #[must_use]
    pub fn seeded(first: I::Item, rest: I, is_first: P) -> Self {
        Self {
            iter: rest,
            is_first,
            pending: Some(first),
        }
    }
}

impl<I, P> Iterator for GroupByFirst<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut group = vec![self.pending.take()?];
        loop {
            let Some(item) = self.iter.next() else {
                return Some(group);
            };
            if (self.is_first)(&item) {
                self.pending = Some(item);
                return Some(group);
            }
            group.push(item);
        }
    }
}

impl<I, P> std::iter::FusedIterator for GroupByFirst<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// ## Summary
/// Groups `seq` into runs that each start with an element matching
/// `is_first`.
///
/// The very first element always opens a group, whether it matches or not.
/// Every group is non-empty.
///
/// ## Lookahead
/// The first element is pulled here. A group is only complete once the
/// element opening the next group (or the end of the source) has been
/// seen, so the source runs one element ahead.
///
/// ## Errors
/// Returns `SeqError::Empty` if `seq` produced nothing.
pub fn group_by_first_element<I, P>(seq: I, is_first: P) -> SeqResult<GroupByFirst<I::IntoIter, P>>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let (first, rest) = first_and_rest(seq)?;
    Ok(GroupByFirst::seeded(first, rest, is_first))
}

/// Iterator returned by [`group_by_last_element`].
pub struct GroupByLast<I, P> {
    iter: I,
    is_last: P,
    finished: bool,
}

impl<I, P> Iterator for GroupByLast<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.finished {
            return None;
        }

        let mut group = Vec::new();
        for item in self.iter.by_ref() {
            let closes = (self.is_last)(&item);
            group.push(item);
            if closes {
                return Some(group);
            }
        }

        self.finished = true;
        (!group.is_empty()).then_some(group)
    }
}

impl<I, P> std::iter::FusedIterator for GroupByLast<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

/// ## Summary
/// Groups `seq` into runs that each end with an element matching `is_last`.
///
/// Never reads past the element that closes a group. A trailing run that
/// does not end in a match is still yielded; no empty group is ever yielded.
pub fn group_by_last_element<I, P>(seq: I, is_last: P) -> GroupByLast<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    GroupByLast {
        iter: seq.into_iter(),
        is_last,
        finished: false,
    }
}

/// Iterator returned by [`group`].
pub struct Group<I: Iterator, F, K> {
    iter: I,
    key_of: F,
    /// The element opening the next run, with its key.
    pending: Option<(K, I::Item)>,
}

impl<I, F, K> Iterator for Group<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let (key, seed) = self.pending.take()?;
        let mut group = vec![seed];
        loop {
            let Some(item) = self.iter.next() else {
                return Some(group);
            };
            let item_key = (self.key_of)(&item);
            if item_key != key {
                self.pending = Some((item_key, item));
                return Some(group);
            }
            group.push(item);
        }
    }
}

impl<I, F, K> std::iter::FusedIterator for Group<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
}

/// ## Summary
/// Splits `seq` into maximal runs of adjacent elements with equal keys.
///
/// Same lookahead as [`group_by_first_element`]: the first element is
/// pulled here, and the element with the next key is read before the
/// current run is yielded.
///
/// ## Errors
/// Returns `SeqError::Empty` if `seq` produced nothing.
pub fn group<I, F, K>(seq: I, mut key_of: F) -> SeqResult<Group<I::IntoIter, F, K>>
where
    I: IntoIterator,
    F: FnMut(&I::Item) -> K,
    K: PartialEq,
{
    let (first, rest) = first_and_rest(seq)?;
    let key = key_of(&first);
    Ok(Group {
        iter: rest,
        key_of,
        pending: Some((key, first)),
    })
}
