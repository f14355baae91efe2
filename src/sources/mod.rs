//! Concrete sequence sources: small, immutable descriptors exercising every corner of the
//! contract in [`sequence`](crate::sequence).
//!
//! # Purpose
//! I wrote these to convince myself that the descriptor/state split actually carries its weight:
//! each one keeps all of its configuration in the descriptor, all of its progress in a state
//! value, and each validates incoming states structurally so a foreign state surfaces as
//! [`InvalidState`](crate::sequence::InvalidState) rather than garbage values.
//!
//! # Contents
//! - [`Empty`]: no values at all; the state type is uninhabited.
//! - [`Squares`]: a closed-form finite sequence, reversible.
//! - [`Fibonacci`]: a recurrence carried in the state, forward-only.
//! - [`Primes`]: precomputed work (a sieve) owned immutably by the descriptor, reversible.
//! - [`Permutations`]: a combinatorial walk where the state *is* the arrangement.
//! - [`OrderedTree`]: a container traversed as a sequence, where the state is the last value
//!   yielded and validation is a membership check.

#[cfg(feature = "empty")]
mod empty;
#[cfg(feature = "fibonacci")]
mod fibonacci;
#[cfg(feature = "permutations")]
mod permutations;
#[cfg(feature = "primes")]
mod primes;
#[cfg(feature = "squares")]
mod squares;
mod tests;
#[cfg(feature = "tree")]
mod tree;

#[cfg(feature = "empty")]
pub use empty::*;
#[cfg(feature = "fibonacci")]
pub use fibonacci::*;
#[cfg(feature = "permutations")]
pub use permutations::*;
#[cfg(feature = "primes")]
pub use primes::*;
#[cfg(feature = "squares")]
pub use squares::*;
#[cfg(feature = "tree")]
pub use tree::*;
