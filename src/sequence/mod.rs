//! The core sequence contract and everything written purely against it.
//!
//! # Purpose
//! A sequence here is split into two values with very different lifetimes: a *descriptor* (any type
//! implementing [`Sequence`]), which is immutable and describes the whole series, and a *state*,
//! which is owned by one particular traversal and threaded through every call to
//! [`advance`](Sequence::advance). Nothing in this module knows how to produce values itself; the
//! concrete producers live in [`sources`](crate::sources).
//!
//! # Contents
//! - The producer contract: [`Sequence`], [`ReverseSequence`] and the [`Step`] result.
//! - Optional metadata: [`LengthHint`] and [`ElementKind`], consumed as pre-allocation and
//!   dispatch hints only - correctness never depends on them.
//! - Consumer algorithms: [`sum`], [`contains`], [`materialize`] and friends, written only in
//!   terms of `advance`.
//! - A bridge to `std` iteration: [`Cursor`] and [`RevCursor`] drive any source as an
//!   [`Iterator`], and the [`Take`]/[`Map`] adapters are themselves sequences.
//! - A type-erased layer: [`Source`] and the [`Erased`]/[`ErasedRev`] wrappers, for when the
//!   concrete sequence type (and with it, the reverse capability) is only known at runtime.

#![warn(missing_docs)]

mod adapt;
mod consume;
mod erased;
mod error;
mod hints;
mod iter;
mod source;
mod step;

pub use adapt::*;
pub use consume::*;
pub use erased::*;
pub use error::*;
pub use hints::*;
pub use iter::*;
pub use source::*;
pub use step::*;
