use crate::sequence::{ElementKind, InvalidState, LengthHint, ReverseSequence, Sequence, Step};
use crate::util::bits::BitSet;

/// The primes strictly below a limit, found once by a sieve of Eratosthenes at construction.
///
/// This source demonstrates precomputed work living in the descriptor: the sieve is built in
/// [`below`](Primes::below), stored as an immutable bit set, and every traversal just scans
/// it. Advancing does no arithmetic beyond a bit test, so replaying any state is as cheap as the
/// first time through. Reversible by scanning downward.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::{Sequence, contains};
/// # use lazy_seq::sources::Primes;
/// let primes = Primes::below(30);
/// assert_eq!(
///     primes.cursor().collect::<Vec<_>>(),
///     [2, 3, 5, 7, 11, 13, 17, 19, 23, 29],
/// );
/// assert!(contains(&primes, &13));
/// assert!(!contains(&primes, &15));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primes {
    limit: usize,
    sieve: BitSet,
    count: usize,
}

impl Primes {
    /// Sieves out the primes in `0..limit`. Takes `O(limit log log limit)` once; traversal is
    /// `O(limit)` total afterwards.
    pub fn below(limit: usize) -> Primes {
        let mut sieve = BitSet::filled(limit);
        if limit > 0 {
            sieve.clear(0);
        }
        if limit > 1 {
            sieve.clear(1);
        }
        let mut factor = 2;
        while factor * factor < limit {
            if sieve.get(factor) {
                let mut multiple = factor * factor;
                while multiple < limit {
                    sieve.clear(multiple);
                    multiple += factor;
                }
            }
            factor += 1;
        }
        let count = sieve.count_ones();
        Primes {
            limit,
            sieve,
            count,
        }
    }

    /// The exclusive upper bound the sieve was built for.
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

/// Progress through [`Primes`] front-to-back: the smallest integer not yet ruled out or yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimesState {
    pub(crate) next: usize,
}

/// Progress through [`Primes`] back-to-front: the exclusive upper bound of what is still to
/// scan. Minted values are always primes themselves, which is exactly what validation checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimesBackState {
    pub(crate) below: usize,
}

impl Sequence for Primes {
    type Item = usize;
    type State = PrimesState;

    fn advance(&self, state: Option<&PrimesState>) -> Result<Step<usize, PrimesState>, InvalidState> {
        let start = match state {
            None => 0,
            // Minted states are always one past a prime, so in 3..=limit.
            Some(PrimesState { next }) => {
                if *next < 3 || *next > self.limit {
                    return Err(InvalidState::new("candidate is outside this sieve's range"));
                }
                *next
            },
        };
        let mut candidate = start;
        while candidate < self.limit {
            if self.sieve.get(candidate) {
                return Ok(Step::Yield {
                    value: candidate,
                    state: PrimesState {
                        next: candidate + 1,
                    },
                });
            }
            candidate += 1;
        }
        Ok(Step::Done)
    }

    fn length_hint(&self) -> LengthHint {
        LengthHint::Exactly(self.count)
    }

    fn element_kind(&self) -> ElementKind {
        ElementKind::of::<usize>()
    }
}

impl ReverseSequence for Primes {
    type BackState = PrimesBackState;

    fn advance_back(
        &self,
        state: Option<&PrimesBackState>,
    ) -> Result<Step<usize, PrimesBackState>, InvalidState> {
        let mut candidate = match state {
            None => self.limit,
            Some(PrimesBackState { below }) => {
                if *below >= self.limit || !self.sieve.get(*below) {
                    return Err(InvalidState::new("bound is not a prime this sieve yielded"));
                }
                *below
            },
        };
        while candidate > 2 {
            candidate -= 1;
            if self.sieve.get(candidate) {
                return Ok(Step::Yield {
                    value: candidate,
                    state: PrimesBackState {
                        below: candidate,
                    },
                });
            }
        }
        Ok(Step::Done)
    }
}
