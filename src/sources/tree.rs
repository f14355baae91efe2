use std::cmp::Ordering;

use crate::sequence::{InvalidState, LengthHint, ReverseSequence, Sequence, Step};

/// An unbalanced binary search tree, built by insertion and read back in sorted order as a
/// [`Sequence`].
///
/// The interesting part is the state: it is simply the last value yielded, and advancing is a
/// successor lookup from the root (`O(height)` per step). That keeps the state meaningful across
/// replays from any bookmark, and gives validation real teeth - a state holding a value that is
/// not in this tree cannot have come from it, and is rejected as
/// [`InvalidState`](crate::sequence::InvalidState). Reversible via the symmetric predecessor
/// lookup.
///
/// Duplicates are not kept; [`insert`](OrderedTree::insert) reports whether the value was new.
///
/// # Examples
/// ```
/// # use lazy_seq::sequence::materialize;
/// # use lazy_seq::sources::OrderedTree;
/// let tree: OrderedTree<i32> = [5, 2, 8, 1, 2].into_iter().collect();
/// assert_eq!(tree.len(), 4, "The duplicate should not have been kept.");
/// assert_eq!(materialize(&tree), [1, 2, 5, 8]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Box<Node<T>> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Creates an empty tree.
    pub const fn new() -> OrderedTree<T> {
        OrderedTree {
            root: None,
            len: 0,
        }
    }

    /// The number of values in the tree.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree holds no values.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value at the leaf its ordering leads to, without rebalancing. Returns false (and
    /// keeps the tree unchanged) if the value was already present.
    pub fn insert(&mut self, value: T) -> bool {
        if Self::insert_into(&mut self.root, value) {
            self.len += 1;
            return true;
        }
        false
    }

    fn insert_into(slot: &mut Option<Box<Node<T>>>, value: T) -> bool {
        match slot {
            None => {
                *slot = Some(Node::leaf(value));
                true
            },
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_into(&mut node.left, value),
                Ordering::Greater => Self::insert_into(&mut node.right, value),
                Ordering::Equal => false,
            },
        }
    }

    /// Returns true if the value is in the tree. `O(height)`.
    pub fn contains(&self, value: &T) -> bool {
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            match value.cmp(&current.value) {
                Ordering::Less => node = current.left.as_deref(),
                Ordering::Greater => node = current.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    fn first_value(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    fn last_value(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// The smallest value strictly greater than `value`, tracked while descending from the root.
    fn successor_of(&self, value: &T) -> Option<&T> {
        let mut candidate = None;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            if current.value > *value {
                candidate = Some(&current.value);
                node = current.left.as_deref();
            } else {
                node = current.right.as_deref();
            }
        }
        candidate
    }

    /// The largest value strictly less than `value`.
    fn predecessor_of(&self, value: &T) -> Option<&T> {
        let mut candidate = None;
        let mut node = self.root.as_deref();
        while let Some(current) = node {
            if current.value < *value {
                candidate = Some(&current.value);
                node = current.right.as_deref();
            } else {
                node = current.left.as_deref();
            }
        }
        candidate
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> OrderedTree<T> {
        OrderedTree::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> OrderedTree<T> {
        let mut tree = OrderedTree::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

/// Progress through an [`OrderedTree`] in ascending order: the value most recently yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeState<T> {
    pub(crate) last: T,
}

/// Progress through an [`OrderedTree`] in descending order: the value most recently yielded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeBackState<T> {
    pub(crate) last: T,
}

impl<T: Ord + Clone> Sequence for OrderedTree<T> {
    type Item = T;
    type State = TreeState<T>;

    fn advance(&self, state: Option<&TreeState<T>>) -> Result<Step<T, TreeState<T>>, InvalidState> {
        let found = match state {
            None => self.first_value(),
            Some(TreeState { last }) => {
                if !self.contains(last) {
                    return Err(InvalidState::new("value is not in this tree"));
                }
                self.successor_of(last)
            },
        };
        Ok(match found {
            Some(value) => Step::Yield {
                value: value.clone(),
                state: TreeState {
                    last: value.clone(),
                },
            },
            None => Step::Done,
        })
    }

    fn length_hint(&self) -> LengthHint {
        LengthHint::Exactly(self.len)
    }
}

impl<T: Ord + Clone> ReverseSequence for OrderedTree<T> {
    type BackState = TreeBackState<T>;

    fn advance_back(
        &self,
        state: Option<&TreeBackState<T>>,
    ) -> Result<Step<T, TreeBackState<T>>, InvalidState> {
        let found = match state {
            None => self.last_value(),
            Some(TreeBackState { last }) => {
                if !self.contains(last) {
                    return Err(InvalidState::new("value is not in this tree"));
                }
                self.predecessor_of(last)
            },
        };
        Ok(match found {
            Some(value) => Step::Yield {
                value: value.clone(),
                state: TreeBackState {
                    last: value.clone(),
                },
            },
            None => Step::Done,
        })
    }
}
