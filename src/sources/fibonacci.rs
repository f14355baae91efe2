use FibonacciState::*;

use crate::sequence::{ElementKind, InvalidState, LengthHint, Sequence, Step};

/// The Fibonacci numbers `0, 1, 1, 2, 3, 5, …`, for as long as they fit in a `u64`.
///
/// The descriptor is a unit struct - the whole recurrence lives in the state, which carries the
/// last two values yielded. There are exactly [`TERMS`](Fibonacci::TERMS) representable terms
/// (`F₉₃ = 12 200 160 415 121 876 738` still fits; `F₉₄` doesn't), so the sequence is finite by
/// necessity rather than by configuration; cap it with [`take`](Sequence::take) for anything
/// shorter.
///
/// Forward-only on purpose: it is this crate's example of a source *without* the reverse
/// capability, so asking the erased layer to reverse it reports
/// [`UnsupportedOperation`](crate::sequence::UnsupportedOperation).
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::{Sequence, materialize};
/// # use lazy_seq::sources::Fibonacci;
/// let first = Fibonacci::new().take(9);
/// assert_eq!(materialize(&first), [0, 1, 1, 2, 3, 5, 8, 13, 21]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fibonacci;

impl Fibonacci {
    /// The number of Fibonacci numbers representable in a `u64`: `F₀` through `F₉₃`.
    pub const TERMS: usize = 94;

    /// Describes the Fibonacci numbers.
    pub const fn new() -> Fibonacci {
        Fibonacci
    }
}

/// Progress through [`Fibonacci`]: how far the traversal has got and, once two terms are out, the
/// last two of them.
///
/// States are validated by recomputing the pair for the claimed position - at most 94 additions,
/// so cheap, and it catches any hand-built state that isn't a genuine Fibonacci pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibonacciState {
    /// Exactly one term yielded (`F₀ = 0`).
    First,
    /// At least two terms yielded: how many, and the most recent two.
    Running {
        /// The number of terms yielded so far.
        yielded: u64,
        /// The last two terms, oldest first.
        last: (u64, u64),
    },
}

fn is_coherent(yielded: u64, last: (u64, u64)) -> bool {
    if yielded < 2 || yielded > Fibonacci::TERMS as u64 {
        return false;
    }
    let mut pair = (0_u64, 1_u64);
    for _ in 2..yielded {
        match pair.0.checked_add(pair.1) {
            Some(term) => pair = (pair.1, term),
            None => return false,
        }
    }
    pair == last
}

impl Sequence for Fibonacci {
    type Item = u64;
    type State = FibonacciState;

    fn advance(
        &self,
        state: Option<&FibonacciState>,
    ) -> Result<Step<u64, FibonacciState>, InvalidState> {
        Ok(match state {
            None => Step::Yield {
                value: 0,
                state: First,
            },
            Some(First) => Step::Yield {
                value: 1,
                state: Running {
                    yielded: 2,
                    last: (0, 1),
                },
            },
            Some(Running { yielded, last }) => {
                if !is_coherent(*yielded, *last) {
                    return Err(InvalidState::new("pair is not a Fibonacci pair for that position"));
                }
                match last.0.checked_add(last.1) {
                    Some(term) => Step::Yield {
                        value: term,
                        state: Running {
                            yielded: yielded + 1,
                            last: (last.1, term),
                        },
                    },
                    // The next term no longer fits in a u64.
                    None => Step::Done,
                }
            },
        })
    }

    fn length_hint(&self) -> LengthHint {
        LengthHint::Exactly(Fibonacci::TERMS)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::of::<u64>()
    }
}
