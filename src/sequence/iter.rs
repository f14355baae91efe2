use std::iter::FusedIterator;

use crate::sequence::{LengthHint, ReverseSequence, Sequence, Step};
use crate::util::result::ResultExtension;

/// Drives a [`Sequence`] as a [`std::iter::Iterator`], so sources work with `for`-loops and the
/// std combinators.
///
/// The cursor borrows the descriptor and owns its state, so any number of cursors can run over
/// the same descriptor without interference. Because a cursor only ever feeds back states the
/// source just minted, an `InvalidState` from the source indicates a broken [`Sequence`]
/// implementation and panics with the error's own message.
pub struct Cursor<'a, S: Sequence> {
    source: &'a S,
    state: Option<S::State>,
    yielded: usize,
    done: bool,
}

impl<'a, S: Sequence> Cursor<'a, S> {
    pub(crate) fn new(source: &'a S) -> Cursor<'a, S> {
        Cursor {
            source,
            state: None,
            yielded: 0,
            done: false,
        }
    }

    /// The state the cursor will resume from, if it has advanced at least once. Useful for
    /// keeping a bookmark to replay later.
    pub const fn state(&self) -> Option<&S::State> {
        self.state.as_ref()
    }
}

impl<'a, S: Sequence> Iterator for Cursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.source.advance(self.state.as_ref()).throw() {
            Step::Yield { value, state } => {
                self.state = Some(state);
                self.yielded += 1;
                Some(value)
            },
            Step::Done => {
                self.done = true;
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        // The source's hint covers the whole sequence; subtract what this cursor already took.
        match self.source.length_hint() {
            LengthHint::Unknown => (0, None),
            LengthHint::Exactly(count) => {
                let left = count.saturating_sub(self.yielded);
                (left, Some(left))
            },
            LengthHint::AtLeast(count) => (count.saturating_sub(self.yielded), None),
            LengthHint::Infinite => (usize::MAX, None),
        }
    }
}

impl<'a, S: Sequence> FusedIterator for Cursor<'a, S> {}

/// The counterpart of [`Cursor`] for [`ReverseSequence`] types, yielding values back-to-front via
/// [`advance_back`](ReverseSequence::advance_back).
///
/// This is not [`DoubleEndedIterator`] on [`Cursor`] on purpose: reverse traversal has its own
/// independent state space, so a forward cursor and a reverse cursor never share or split
/// anything.
pub struct RevCursor<'a, S: ReverseSequence> {
    source: &'a S,
    state: Option<S::BackState>,
    yielded: usize,
    done: bool,
}

impl<'a, S: ReverseSequence> RevCursor<'a, S> {
    pub(crate) fn new(source: &'a S) -> RevCursor<'a, S> {
        RevCursor {
            source,
            state: None,
            yielded: 0,
            done: false,
        }
    }
}

impl<'a, S: ReverseSequence> Iterator for RevCursor<'a, S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.done {
            return None;
        }
        match self.source.advance_back(self.state.as_ref()).throw() {
            Step::Yield { value, state } => {
                self.state = Some(state);
                self.yielded += 1;
                Some(value)
            },
            Step::Done => {
                self.done = true;
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.source.length_hint() {
            LengthHint::Unknown => (0, None),
            LengthHint::Exactly(count) => {
                let left = count.saturating_sub(self.yielded);
                (left, Some(left))
            },
            LengthHint::AtLeast(count) => (count.saturating_sub(self.yielded), None),
            LengthHint::Infinite => (usize::MAX, None),
        }
    }
}

impl<'a, S: ReverseSequence> FusedIterator for RevCursor<'a, S> {}
