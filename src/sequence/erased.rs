use std::any::Any;
use std::fmt::{self, Debug, Formatter};

use crate::sequence::{
    ElementKind, InvalidState, LengthHint, ReverseSequence, Sequence, SequenceError, Step,
    UnsupportedOperation,
};

/// An opaque continuation token for erased sources: some source's state, boxed with its type
/// hidden.
///
/// The token deliberately exposes nothing, not even `Clone` - replaying is done by keeping the
/// token and passing it by reference, the same as at the typed layer. Feeding a token to a source
/// other than the one that minted it is detected by the failed downcast and reported as
/// [`InvalidState`].
pub struct ErasedState(Box<dyn Any>);

impl Debug for ErasedState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ErasedState(..)")
    }
}

/// The object-safe face of the producer contract, for when the concrete sequence type - and with
/// it, whether reverse traversal exists - is only known at runtime.
///
/// Unlike [`Sequence`], both traversal directions share this one surface, which is what makes a
/// runtime refusal possible: `advance_back` on a source without the capability reports
/// [`UnsupportedOperation`] at the call site, instead of a missing trait bound at compile time.
/// Wrap a source in [`Erased`] or [`ErasedRev`] to get an implementation.
pub trait Source<T> {
    /// As [`Sequence::advance`], with the state boxed into an [`ErasedState`] token.
    fn advance(&self, state: Option<&ErasedState>) -> Result<Step<T, ErasedState>, SequenceError>;

    /// As [`ReverseSequence::advance_back`] where the capability exists; otherwise fails
    /// immediately with [`UnsupportedOperation`].
    fn advance_back(&self, state: Option<&ErasedState>) -> Result<Step<T, ErasedState>, SequenceError>;

    /// As [`Sequence::length_hint`].
    fn length_hint(&self) -> LengthHint;

    /// As [`Sequence::element_kind`]. This is where the hint matters: the `T` here may itself be
    /// boxed or otherwise widened by the surrounding program.
    fn element_kind(&self) -> ElementKind;
}

/// A boxed erased source, the form most APIs taking "any sequence of `T`" would use.
pub type BoxedSource<T> = Box<dyn Source<T>>;

fn unwrap_state<T: 'static>(state: Option<&ErasedState>) -> Result<Option<&T>, InvalidState> {
    match state {
        None => Ok(None),
        Some(ErasedState(boxed)) => match boxed.downcast_ref::<T>() {
            Some(inner) => Ok(Some(inner)),
            None => Err(InvalidState::new("token was minted by a different source")),
        },
    }
}

/// Erases a forward-only [`Sequence`]. Its `advance_back` refuses with [`UnsupportedOperation`].
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::{Erased, SequenceError, Source};
/// # use lazy_seq::sources::Fibonacci;
/// let source = Erased::new(Fibonacci::new());
/// assert!(source.advance(None).is_ok());
/// assert!(matches!(source.advance_back(None), Err(SequenceError::Unsupported(_))));
/// ```
pub struct Erased<S> {
    source: S,
}

impl<S> Erased<S> {
    /// Wraps a source for forward-only erased traversal.
    pub const fn new(source: S) -> Erased<S> {
        Erased { source }
    }
}

impl<S> Source<S::Item> for Erased<S>
where
    S: Sequence,
    S::State: 'static,
{
    fn advance(&self, state: Option<&ErasedState>) -> Result<Step<S::Item, ErasedState>, SequenceError> {
        let inner = unwrap_state::<S::State>(state)?;
        Ok(self
            .source
            .advance(inner)?
            .map_state(|next| ErasedState(Box::new(next))))
    }

    fn advance_back(&self, _state: Option<&ErasedState>) -> Result<Step<S::Item, ErasedState>, SequenceError> {
        Err(UnsupportedOperation::new("advance_back").into())
    }

    fn length_hint(&self) -> LengthHint {
        self.source.length_hint()
    }

    fn element_kind(&self) -> ElementKind {
        self.source.element_kind()
    }
}

/// Erases a [`ReverseSequence`], keeping both traversal directions available.
///
/// Forward and back tokens are distinct state types under the box, so handing one to the other
/// direction fails the downcast and reports [`InvalidState`] - the erased layer keeps the state
/// spaces as independent as the typed layer does.
pub struct ErasedRev<S> {
    source: S,
}

impl<S> ErasedRev<S> {
    /// Wraps a source for erased traversal in either direction.
    pub const fn new(source: S) -> ErasedRev<S> {
        ErasedRev { source }
    }
}

impl<S> Source<S::Item> for ErasedRev<S>
where
    S: ReverseSequence,
    S::State: 'static,
    S::BackState: 'static,
{
    fn advance(&self, state: Option<&ErasedState>) -> Result<Step<S::Item, ErasedState>, SequenceError> {
        let inner = unwrap_state::<S::State>(state)?;
        Ok(self
            .source
            .advance(inner)?
            .map_state(|next| ErasedState(Box::new(next))))
    }

    fn advance_back(&self, state: Option<&ErasedState>) -> Result<Step<S::Item, ErasedState>, SequenceError> {
        let inner = unwrap_state::<S::BackState>(state)?;
        Ok(self
            .source
            .advance_back(inner)?
            .map_state(|next| ErasedState(Box::new(next))))
    }

    fn length_hint(&self) -> LengthHint {
        self.source.length_hint()
    }

    fn element_kind(&self) -> ElementKind {
        self.source.element_kind()
    }
}
