use crate::sequence::{ElementKind, InvalidState, LengthHint, ReverseSequence, Sequence, Step};

/// The first `count` square numbers: `1, 4, 9, …, count²`.
///
/// The simplest non-trivial source: closed-form, finite, and reversible, with a state in each
/// direction that is just the next root to square.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::{Sequence, sum};
/// # use lazy_seq::sources::Squares;
/// let squares = Squares::first(7);
/// assert_eq!(squares.cursor().collect::<Vec<_>>(), [1, 4, 9, 16, 25, 36, 49]);
/// assert_eq!(sum(&squares), 140);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Squares {
    count: u64,
}

impl Squares {
    /// The largest root whose square still fits in a `u64`.
    const MAX_ROOT: u64 = u32::MAX as u64;

    /// Describes the squares of the roots `1..=count`.
    ///
    /// # Panics
    /// Panics if `count` exceeds the largest root whose square is representable.
    pub fn first(count: u64) -> Squares {
        assert!(count <= Squares::MAX_ROOT, "squares beyond 2³² roots overflow u64");
        Squares { count }
    }

    /// How many squares this descriptor covers.
    pub const fn count(&self) -> u64 {
        self.count
    }
}

/// Progress through [`Squares`] front-to-back: the next root to square, counting up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquaresState {
    pub(crate) next: u64,
}

/// Progress through [`Squares`] back-to-front: the next root to square, counting down. A distinct
/// type from [`SquaresState`], so the two traversal directions cannot be mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquaresBackState {
    pub(crate) next: u64,
}

impl Sequence for Squares {
    type Item = u64;
    type State = SquaresState;

    fn advance(&self, state: Option<&SquaresState>) -> Result<Step<u64, SquaresState>, InvalidState> {
        let next = match state {
            None => 1,
            // Minted states always have a root in 2..=count+1.
            Some(SquaresState { next }) => {
                if *next < 2 || *next - 1 > self.count {
                    return Err(InvalidState::new("root is outside this descriptor's range"));
                }
                *next
            },
        };
        if next > self.count {
            return Ok(Step::Done);
        }
        Ok(Step::Yield {
            value: next * next,
            state: SquaresState {
                next: next + 1,
            },
        })
    }

    fn length_hint(&self) -> LengthHint {
        match usize::try_from(self.count) {
            Ok(count) => LengthHint::Exactly(count),
            Err(_) => LengthHint::AtLeast(usize::MAX),
        }
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::of::<u64>()
    }
}

impl ReverseSequence for Squares {
    type BackState = SquaresBackState;

    fn advance_back(
        &self,
        state: Option<&SquaresBackState>,
    ) -> Result<Step<u64, SquaresBackState>, InvalidState> {
        let next = match state {
            None => self.count,
            // Minted back-states always have a root in 0..count.
            Some(SquaresBackState { next }) => {
                if *next >= self.count {
                    return Err(InvalidState::new("root is outside this descriptor's range"));
                }
                *next
            },
        };
        if next == 0 {
            return Ok(Step::Done);
        }
        Ok(Step::Yield {
            value: next * next,
            state: SquaresBackState {
                next: next - 1,
            },
        })
    }
}
