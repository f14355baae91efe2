use std::convert::Infallible;
use std::marker::PhantomData;

use crate::sequence::{InvalidState, LengthHint, ReverseSequence, Sequence, Step};

/// A sequence with no values at all: the very first advance, in either direction, reports
/// [`Done`](Step::Done).
///
/// The state type is [`Infallible`], which says in the type system what the contract says in
/// prose: this source never mints a state, so no state value can possibly have come from it.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::{Sequence, Step};
/// # use lazy_seq::sources::Empty;
/// let none = Empty::<u8>::new();
/// assert_eq!(none.advance(None), Ok(Step::Done));
/// assert_eq!(none.length_hint().exact(), Some(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty<T> {
    _phantom: PhantomData<T>,
}

impl<T> Empty<T> {
    /// Creates the empty sequence of `T`.
    pub const fn new() -> Empty<T> {
        Empty {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Empty<T> {
        Empty::new()
    }
}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type State = Infallible;

    fn advance(&self, state: Option<&Infallible>) -> Result<Step<T, Infallible>, InvalidState> {
        match state {
            None => Ok(Step::Done),
            Some(impossible) => match *impossible {},
        }
    }

    fn length_hint(&self) -> LengthHint {
        LengthHint::Exactly(0)
    }
}

impl<T> ReverseSequence for Empty<T> {
    type BackState = Infallible;

    fn advance_back(&self, state: Option<&Infallible>) -> Result<Step<T, Infallible>, InvalidState> {
        self.advance(state)
    }
}
