use crate::sequence::{
    Cursor, ElementKind, InvalidState, LengthHint, Map, RevCursor, Step, Take,
};

/// The producer contract: an immutable descriptor that can be advanced from any state it has
/// previously handed out.
///
/// Implementations must uphold three rules:
/// - **Purity**: `advance` never mutates the descriptor. `&self` enforces the shallow version of
///   this; implementations must not reach for interior mutability either, or replaying stops
///   being meaningful.
/// - **Determinism**: identical `(descriptor, state)` inputs always produce identical outputs.
///   Any state the caller has kept hold of can be replayed, any number of times.
/// - **Exhaustion is [`Done`](Step::Done)**, never an error. An empty sequence reports `Done` on
///   the very first call, and a sequence hinting [`Exactly(n)`](LengthHint::Exactly) reports
///   `Done` after exactly `n` yields. [`InvalidState`] is reserved for states this descriptor
///   never minted.
///
/// # Examples
/// A descriptor is usually a couple of plain fields, and a state even less:
/// ```
/// # use lazy_seq::sequence::{InvalidState, LengthHint, Sequence, Step};
/// struct Countdown(u8);
///
/// impl Sequence for Countdown {
///     type Item = u8;
///     type State = u8;
///
///     fn advance(&self, state: Option<&u8>) -> Result<Step<u8, u8>, InvalidState> {
///         let left = match state {
///             None => self.0,
///             Some(&left) if left < self.0 => left,
///             Some(_) => return Err(InvalidState::new("count is not below the start")),
///         };
///         Ok(match left {
///             0 => Step::Done,
///             _ => Step::Yield { value: left, state: left - 1 },
///         })
///     }
///
///     fn length_hint(&self) -> LengthHint {
///         LengthHint::Exactly(self.0 as usize)
///     }
/// }
///
/// let launch = Countdown(3);
/// assert_eq!(launch.cursor().collect::<Vec<_>>(), [3, 2, 1]);
/// // Descriptors are never consumed; every cursor owns its own state.
/// assert_eq!(launch.cursor().count(), 3);
/// ```
pub trait Sequence {
    /// The type of the values the sequence produces.
    type Item;

    /// The opaque progress marker threaded through a traversal. Owned by whoever is driving the
    /// iteration; meaningless to every other descriptor.
    type State;

    /// Produces the next value and the state to resume from, or [`Done`](Step::Done). `None`
    /// means "start from the beginning".
    ///
    /// Returns [`InvalidState`] only for a state that cannot have come from this descriptor's own
    /// prior advance - a programmer error which should propagate, not be swallowed.
    fn advance(&self, state: Option<&Self::State>) -> Result<Step<Self::Item, Self::State>, InvalidState>;

    /// What this sequence knows about its length up front. Defaults to
    /// [`Unknown`](LengthHint::Unknown); purely an optimization hint.
    fn length_hint(&self) -> LengthHint {
        LengthHint::Unknown
    }

    /// What this sequence knows about its element type up front. Defaults to
    /// [`Unknown`](ElementKind::Unknown); only interesting once the source has been type-erased.
    fn element_kind(&self) -> ElementKind {
        ElementKind::Unknown
    }

    /// Returns an [`Iterator`] over the sequence, for `for`-loops and the std combinators. Each
    /// cursor owns an independent state, so cursors never interfere.
    fn cursor(&self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }

    /// Cuts the sequence off after at most `limit` values.
    ///
    /// # Examples
    /// ```
    /// # use lazy_seq::sequence::{Sequence, materialize};
    /// # use lazy_seq::sources::Fibonacci;
    /// let first = Fibonacci::new().take(9);
    /// assert_eq!(materialize(&first), [0, 1, 1, 2, 3, 5, 8, 13, 21]);
    /// ```
    fn take(self, limit: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take {
            source: self,
            limit,
        }
    }

    /// Transforms each value through `f`, lazily. The mapped sequence shares the inner state
    /// type, so it stays exactly as replayable as the original.
    fn map<U, F: Fn(Self::Item) -> U>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
    {
        Map {
            source: self,
            f,
        }
    }
}

/// The optional capability of traversing a sequence from its end, with a state space of its own.
///
/// This is deliberately a separate trait rather than a method with a default: a consumer that
/// needs reverse traversal says so in its bounds, and back-states are a distinct type that cannot
/// be mixed up with forward ones. At the erased layer, where bounds are gone, requesting the
/// capability from a source without it reports
/// [`UnsupportedOperation`](crate::sequence::UnsupportedOperation) instead.
///
/// `advance_back` must yield exactly the values `advance` yields, in exactly reversed order, and
/// is held to the same purity, determinism and exhaustion rules.
pub trait ReverseSequence: Sequence {
    /// The progress marker for one reverse traversal, independent of [`Sequence::State`].
    type BackState;

    /// Produces the next value from the end and the back-state to resume from, or
    /// [`Done`](Step::Done) once the front has been passed. `None` means "start from the end".
    fn advance_back(
        &self,
        state: Option<&Self::BackState>,
    ) -> Result<Step<Self::Item, Self::BackState>, InvalidState>;

    /// Returns an [`Iterator`] over the sequence's values in reverse order.
    ///
    /// # Examples
    /// ```
    /// # use lazy_seq::sequence::ReverseSequence;
    /// # use lazy_seq::sources::Squares;
    /// let squares = Squares::first(4);
    /// assert_eq!(squares.rev_cursor().collect::<Vec<_>>(), [16, 9, 4, 1]);
    /// ```
    fn rev_cursor(&self) -> RevCursor<'_, Self>
    where
        Self: Sized,
    {
        RevCursor::new(self)
    }
}
