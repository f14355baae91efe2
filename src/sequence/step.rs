use derive_more::IsVariant;

use Step::*;

/// The result of one successful advance: either a value paired with the state to resume from, or
/// the exhaustion signal.
///
/// [`Done`] is the *normal* end of a finite sequence, handled locally by whatever loop is driving
/// the iteration. It is deliberately not an error and not an [`Option`]: a bare `None` says
/// nothing about whether a next state exists, and this type makes "no value, no state, nothing
/// left" a single explicit case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Step<T, S> {
    /// The sequence produced a value. `state` resumes the traversal from just after it.
    Yield {
        /// The value produced by this advance.
        value: T,
        /// The state to pass to the next advance (or to keep, for replaying from this point).
        state: S,
    },
    /// The sequence is exhausted. Advancing a sequence that already reported `Done` reports `Done`
    /// again.
    Done,
}

impl<T, S> Step<T, S> {
    /// Applies `f` to the value of a [`Yield`], leaving the state untouched. [`Done`] passes
    /// through unchanged.
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Step<U, S> {
        match self {
            Yield { value, state } => Yield {
                value: f(value),
                state,
            },
            Done => Done,
        }
    }

    /// Applies `f` to the state of a [`Yield`], leaving the value untouched. [`Done`] passes
    /// through unchanged. This is what the adapters use to wrap an inner source's state in their
    /// own.
    pub fn map_state<R>(self, f: impl FnOnce(S) -> R) -> Step<T, R> {
        match self {
            Yield { value, state } => Yield {
                value,
                state: f(state),
            },
            Done => Done,
        }
    }

    /// Converts a [`Yield`] into `Some((value, state))` and [`Done`] into `None`.
    ///
    /// # Examples
    /// ```
    /// # use lazy_seq::sequence::Step;
    /// let step: Step<u8, u8> = Step::Yield { value: 3, state: 4 };
    /// assert_eq!(step.into_parts(), Some((3, 4)));
    /// assert_eq!(Step::<u8, u8>::Done.into_parts(), None);
    /// ```
    pub fn into_parts(self) -> Option<(T, S)> {
        match self {
            Yield { value, state } => Some((value, state)),
            Done => None,
        }
    }
}
