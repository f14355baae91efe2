use std::any::TypeId;

use derive_more::IsVariant;

/// What a sequence knows about its own length, independent of producing any values.
///
/// This is an optimization hint, nothing more. [`materialize`](crate::sequence::materialize) uses
/// it to pre-allocate and [`Cursor`](crate::sequence::Cursor) reports it through
/// [`Iterator::size_hint`], but every consumer must remain correct if the hint is just
/// [`Unknown`](LengthHint::Unknown). Sources should never report a hint that is actually wrong,
/// though: a source claiming [`Exactly(n)`](LengthHint::Exactly) must yield `Done` after precisely
/// `n` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum LengthHint {
    /// The source has no idea how many values it will yield.
    Unknown,
    /// The source will yield exactly this many values.
    Exactly(usize),
    /// The source will yield at least this many values, possibly more.
    AtLeast(usize),
    /// The source will never report `Done`.
    Infinite,
}

impl LengthHint {
    /// The exact length, if this hint promises one.
    pub const fn exact(self) -> Option<usize> {
        match self {
            LengthHint::Exactly(count) => Some(count),
            _ => None,
        }
    }

    /// The smallest number of values the hint is compatible with.
    pub const fn lower_bound(self) -> usize {
        match self {
            LengthHint::Unknown => 0,
            LengthHint::Exactly(count) | LengthHint::AtLeast(count) => count,
            LengthHint::Infinite => usize::MAX,
        }
    }

    /// The hint for this sequence cut off after at most `limit` values, as produced by
    /// [`take`](crate::sequence::Sequence::take).
    ///
    /// # Examples
    /// ```
    /// # use lazy_seq::sequence::LengthHint;
    /// assert_eq!(LengthHint::Infinite.capped(9), LengthHint::Exactly(9));
    /// assert_eq!(LengthHint::Exactly(4).capped(9), LengthHint::Exactly(4));
    /// assert_eq!(LengthHint::AtLeast(2).capped(9), LengthHint::AtLeast(2));
    /// assert_eq!(LengthHint::AtLeast(20).capped(9), LengthHint::Exactly(9));
    /// ```
    pub const fn capped(self, limit: usize) -> LengthHint {
        match self {
            LengthHint::Unknown => LengthHint::Unknown,
            LengthHint::Exactly(count) => {
                LengthHint::Exactly(if count < limit { count } else { limit })
            },
            LengthHint::AtLeast(count) => {
                if count >= limit {
                    LengthHint::Exactly(limit)
                } else {
                    LengthHint::AtLeast(count)
                }
            },
            LengthHint::Infinite => LengthHint::Exactly(limit),
        }
    }
}

/// What a sequence knows about the type of its values, independent of producing any.
///
/// At the typed layer this is redundant - the element type is the [`Item`](crate::sequence::Sequence::Item)
/// associated type. It earns its keep at the erased layer, where a consumer holding a
/// `Box<dyn Source<T>>` built elsewhere can still ask what's inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ElementKind {
    /// The element type is not declared.
    Unknown,
    /// The elements are all of the type with this [`TypeId`].
    Kind(TypeId),
}

impl ElementKind {
    /// The kind for a concrete element type.
    pub fn of<T: 'static>() -> ElementKind {
        ElementKind::Kind(TypeId::of::<T>())
    }

    /// Returns true if this kind names exactly `T`. [`Unknown`](ElementKind::Unknown) matches
    /// nothing.
    ///
    /// # Examples
    /// ```
    /// # use lazy_seq::sequence::ElementKind;
    /// assert!(ElementKind::of::<u64>().is::<u64>());
    /// assert!(!ElementKind::of::<u64>().is::<i64>());
    /// assert!(!ElementKind::Unknown.is::<u64>());
    /// ```
    pub fn is<T: 'static>(self) -> bool {
        matches!(self, ElementKind::Kind(id) if id == TypeId::of::<T>())
    }
}
