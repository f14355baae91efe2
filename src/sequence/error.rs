use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A state value was passed to a source that did not mint it through a prior advance.
///
/// This is a programmer error, not a data condition: states are opaque and only meaningful to the
/// source that produced them. It is never used to report exhaustion - that is
/// [`Done`](crate::sequence::Step::Done) - and sources are not required to catch every foreign
/// state, only permitted to reject the ones they can recognise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidState {
    /// What the source noticed about the state it rejected.
    pub detail: &'static str,
}

impl InvalidState {
    /// Creates the error with a short description of the check that failed.
    pub const fn new(detail: &'static str) -> InvalidState {
        InvalidState { detail }
    }
}

impl Display for InvalidState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "State value does not belong to this sequence: {}!", self.detail)
    }
}

impl Error for InvalidState {}

/// A capability was requested from a source that does not have it.
///
/// Raised eagerly at the requesting call - asking the erased layer for reverse traversal of a
/// forward-only source fails immediately, rather than lazily part-way through iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedOperation {
    /// The name of the operation that was refused.
    pub operation: &'static str,
}

impl UnsupportedOperation {
    /// Creates the error naming the refused operation.
    pub const fn new(operation: &'static str) -> UnsupportedOperation {
        UnsupportedOperation { operation }
    }
}

impl Display for UnsupportedOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation {} is not supported by this sequence source!", self.operation)
    }
}

impl Error for UnsupportedOperation {}

/// Either failure the erased layer can produce, where both misuse kinds share one call surface.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum SequenceError {
    /// See [`InvalidState`].
    InvalidState(InvalidState),
    /// See [`UnsupportedOperation`].
    Unsupported(UnsupportedOperation),
}
