use crate::sequence::{InvalidState, LengthHint, Sequence, Step};
use crate::util::bits::BitSet;

/// Every arrangement of a vector of items, in lexicographic order of positions, starting from the
/// vector as given.
///
/// The state *is* the arrangement - a permutation of the indices `0..len` - which makes this the
/// crate's best illustration of state validation: anything that isn't a genuine permutation of
/// this descriptor's indices is rejected as
/// [`InvalidState`](crate::sequence::InvalidState) before it can produce nonsense. Advancing is
/// the classic next-permutation step (find the rightmost ascent, swap in its ceiling, reverse the
/// tail).
///
/// A vector of `n` items has `n!` arrangements, so the length hint is
/// [`Exactly(n!)`](LengthHint::Exactly) while the factorial fits in a `usize` and
/// [`Unknown`](LengthHint::Unknown) beyond that. An empty vector has exactly one arrangement: the
/// empty one.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::{Sequence, materialize};
/// # use lazy_seq::sources::Permutations;
/// let orders = Permutations::of(vec!['a', 'b', 'c']);
/// assert_eq!(orders.length_hint().exact(), Some(6));
/// assert_eq!(
///     materialize(&orders),
///     [
///         vec!['a', 'b', 'c'],
///         vec!['a', 'c', 'b'],
///         vec!['b', 'a', 'c'],
///         vec!['b', 'c', 'a'],
///         vec!['c', 'a', 'b'],
///         vec!['c', 'b', 'a'],
///     ],
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutations<T> {
    items: Vec<T>,
}

impl<T: Clone> Permutations<T> {
    /// Describes the arrangements of `items`.
    pub const fn of(items: Vec<T>) -> Permutations<T> {
        Permutations { items }
    }

    /// The number of items being arranged.
    pub fn width(&self) -> usize {
        self.items.len()
    }
}

/// Progress through [`Permutations`]: the arrangement most recently yielded, as positions into
/// the original vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationsState {
    pub(crate) positions: Vec<usize>,
}

fn is_permutation(positions: &[usize], width: usize) -> bool {
    if positions.len() != width {
        return false;
    }
    let mut seen = BitSet::empty(width);
    for &position in positions {
        if position >= width || seen.get(position) {
            return false;
        }
        seen.set(position);
    }
    true
}

/// The next arrangement in lexicographic order, or `None` after the fully descending one.
fn next_arrangement(current: &[usize]) -> Option<Vec<usize>> {
    let mut positions = current.to_vec();
    // The rightmost position that is smaller than its successor; none means this was the last
    // arrangement.
    let pivot = positions.windows(2).rposition(|pair| pair[0] < pair[1])?;
    let pivot_value = positions[pivot];

    // The element just after the pivot always qualifies, so this cannot run off the front.
    let mut ceiling = positions.len() - 1;
    while positions[ceiling] <= pivot_value {
        ceiling -= 1;
    }

    positions.swap(pivot, ceiling);
    positions[pivot + 1..].reverse();
    Some(positions)
}

fn factorial(n: usize) -> Option<usize> {
    let mut total: usize = 1;
    for k in 2..=n {
        total = total.checked_mul(k)?;
    }
    Some(total)
}

impl<T: Clone> Sequence for Permutations<T> {
    type Item = Vec<T>;
    type State = PermutationsState;

    fn advance(
        &self,
        state: Option<&PermutationsState>,
    ) -> Result<Step<Vec<T>, PermutationsState>, InvalidState> {
        let next = match state {
            None => Some((0..self.items.len()).collect()),
            Some(PermutationsState { positions }) => {
                if !is_permutation(positions, self.items.len()) {
                    return Err(InvalidState::new(
                        "positions are not a permutation of this vector's indices",
                    ));
                }
                next_arrangement(positions)
            },
        };
        Ok(match next {
            Some(positions) => {
                let value = positions.iter().map(|&position| self.items[position].clone()).collect();
                Step::Yield {
                    value,
                    state: PermutationsState {
                        positions,
                    },
                }
            },
            None => Step::Done,
        })
    }

    fn length_hint(&self) -> LengthHint {
        match factorial(self.items.len()) {
            Some(total) => LengthHint::Exactly(total),
            None => LengthHint::Unknown,
        }
    }
}
