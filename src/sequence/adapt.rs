use crate::sequence::{ElementKind, InvalidState, LengthHint, Sequence, Step};

/// A sequence cut off after at most `limit` values. Created by
/// [`Sequence::take`](crate::sequence::Sequence::take).
///
/// This is how an endless source becomes usable with [`materialize`](crate::sequence::materialize):
/// the adapter is itself a descriptor, and narrows the inner length hint through
/// [`LengthHint::capped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Take<S> {
    pub(crate) source: S,
    pub(crate) limit: usize,
}

/// Progress through a [`Take`]: how many values have been taken, wrapped around the inner
/// source's own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeState<S> {
    pub(crate) taken: usize,
    pub(crate) inner: S,
}

impl<S: Sequence> Sequence for Take<S> {
    type Item = S::Item;
    type State = TakeState<S::State>;

    fn advance(&self, state: Option<&Self::State>) -> Result<Step<Self::Item, Self::State>, InvalidState> {
        let (taken, inner) = match state {
            None => (0, None),
            Some(TakeState { taken, inner }) => {
                if *taken > self.limit {
                    return Err(InvalidState::new("progress exceeds the take limit"));
                }
                (*taken, Some(inner))
            },
        };
        if taken == self.limit {
            return Ok(Step::Done);
        }
        Ok(self.source.advance(inner)?.map_state(|inner| TakeState {
            taken: taken + 1,
            inner,
        }))
    }

    fn length_hint(&self) -> LengthHint {
        self.source.length_hint().capped(self.limit)
    }

    fn element_kind(&self) -> ElementKind {
        self.source.element_kind()
    }
}

/// A sequence whose values are transformed through a function, lazily. Created by
/// [`Sequence::map`](crate::sequence::Sequence::map).
///
/// The state is the inner source's state, untouched, so bookmarks taken from a mapped sequence
/// replay exactly like bookmarks taken from the original. The element kind is
/// [`Unknown`](ElementKind::Unknown): the closure's output type has no runtime identity here.
#[derive(Debug, Clone, Copy)]
pub struct Map<S, F> {
    pub(crate) source: S,
    pub(crate) f: F,
}

impl<S: Sequence, U, F: Fn(S::Item) -> U> Sequence for Map<S, F> {
    type Item = U;
    type State = S::State;

    fn advance(&self, state: Option<&S::State>) -> Result<Step<U, S::State>, InvalidState> {
        Ok(self.source.advance(state)?.map_value(&self.f))
    }

    fn length_hint(&self) -> LengthHint {
        self.source.length_hint()
    }
}
