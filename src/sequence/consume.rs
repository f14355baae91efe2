//! Generic consumer algorithms, written purely against the [`Sequence`] contract and optionally
//! accelerated by [`LengthHint`].
//!
//! None of these return `Result`s. They only ever feed a source states that same source just
//! minted, so [`InvalidState`](crate::sequence::InvalidState) inside these loops can only mean a
//! broken [`Sequence`] implementation - that panics (with the error's own message) rather than
//! making every caller handle an impossibility.

use std::ops::Add;

use crate::sequence::{LengthHint, ReverseSequence, Sequence, Step};
use crate::util::result::ResultExtension;

/// The loop all the other consumers are built from: repeatedly advance, feeding each value and
/// the running accumulator to `f`, until [`Done`](Step::Done).
///
/// On an empty sequence this returns `init` untouched - which is also how a caller-specified
/// identity for [`sum`]-like folds is expressed.
///
/// # Panics
/// Panics if the source rejects a state it minted itself, which indicates a broken [`Sequence`]
/// implementation.
pub fn fold<S: Sequence, A, F: FnMut(A, S::Item) -> A>(source: &S, init: A, mut f: F) -> A {
    let mut acc = init;
    let mut state = None;
    loop {
        match source.advance(state.as_ref()).throw() {
            Step::Yield { value, state: next } => {
                acc = f(acc, value);
                state = Some(next);
            },
            Step::Done => return acc,
        }
    }
}

/// Adds up every value in the sequence. On an empty sequence, returns the type's
/// [`Default`] - the additive identity for the numeric types. Use [`fold`] directly to start from
/// anything else.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::sum;
/// # use lazy_seq::sources::{Empty, Squares};
/// assert_eq!(sum(&Squares::first(7)), 140);
/// assert_eq!(sum(&Empty::<u64>::new()), 0);
/// ```
///
/// # Panics
/// Panics if the source rejects a state it minted itself, which indicates a broken [`Sequence`]
/// implementation.
pub fn sum<S>(source: &S) -> S::Item
where
    S: Sequence,
    S::Item: Add<Output = S::Item> + Default,
{
    fold(source, S::Item::default(), |acc, value| acc + value)
}

/// Counts the values until [`Done`](Step::Done) by actually advancing through all of them -
/// deliberately ignoring [`length_hint`](Sequence::length_hint), so the two can be cross-checked.
///
/// # Panics
/// Panics if the source rejects a state it minted itself, which indicates a broken [`Sequence`]
/// implementation.
pub fn count<S: Sequence>(source: &S) -> usize {
    fold(source, 0, |total, _| total + 1)
}

/// Returns true if any value in the sequence equals `target`, short-circuiting on the first
/// match. Termination is up to the caller for endless sources: searching an infinite sequence for
/// a value it never produces will not return.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::contains;
/// # use lazy_seq::sources::Fibonacci;
/// // Short-circuits long before the 94th term.
/// assert!(contains(&Fibonacci::new(), &13));
/// ```
///
/// # Panics
/// Panics if the source rejects a state it minted itself, which indicates a broken [`Sequence`]
/// implementation.
pub fn contains<S>(source: &S, target: &S::Item) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    let mut state = None;
    loop {
        match source.advance(state.as_ref()).throw() {
            Step::Yield { value, state: next } => {
                if value == *target {
                    return true;
                }
                state = Some(next);
            },
            Step::Done => return false,
        }
    }
}

/// Collects the whole sequence into a [`Vec`], pre-allocating from the length hint when one is
/// available and otherwise relying on the vector's amortized doubling growth.
///
/// Materializing a source whose hint is [`Infinite`](LengthHint::Infinite) will not return; cap
/// it with [`take`](Sequence::take) first.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::materialize;
/// # use lazy_seq::sources::Squares;
/// assert_eq!(materialize(&Squares::first(4)), [1, 4, 9, 16]);
/// ```
///
/// # Panics
/// Panics if the source rejects a state it minted itself, which indicates a broken [`Sequence`]
/// implementation.
pub fn materialize<S: Sequence>(source: &S) -> Vec<S::Item> {
    let values = match source.length_hint() {
        LengthHint::Exactly(count) | LengthHint::AtLeast(count) => Vec::with_capacity(count),
        LengthHint::Unknown | LengthHint::Infinite => Vec::new(),
    };
    fold(source, values, |mut values, value| {
        values.push(value);
        values
    })
}

/// Collects the whole sequence into a [`Vec`] back-to-front, for sources with the reverse
/// capability. The result is exactly [`materialize`] reversed.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::materialize_rev;
/// # use lazy_seq::sources::Squares;
/// assert_eq!(materialize_rev(&Squares::first(4)), [16, 9, 4, 1]);
/// ```
///
/// # Panics
/// Panics if the source rejects a state it minted itself, which indicates a broken
/// [`ReverseSequence`] implementation.
pub fn materialize_rev<S: ReverseSequence>(source: &S) -> Vec<S::Item> {
    let mut values = match source.length_hint() {
        LengthHint::Exactly(count) | LengthHint::AtLeast(count) => Vec::with_capacity(count),
        LengthHint::Unknown | LengthHint::Infinite => Vec::new(),
    };
    let mut state = None;
    loop {
        match source.advance_back(state.as_ref()).throw() {
            Step::Yield { value, state: next } => {
                values.push(value);
                state = Some(next);
            },
            Step::Done => return values,
        }
    }
}
