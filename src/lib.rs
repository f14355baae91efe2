//! This crate is my attempt at writing the iterator protocol as an explicit, standalone library.
//!
//! # Purpose
//! Most languages bake lazy sequences into the runtime, so the actual contract - "give me the next
//! value and tell me where you're up to" - is easy to use without ever seeing it written down. This
//! crate writes it down: an immutable *descriptor* says what the sequence is, an owned *state*
//! value says how far one particular traversal has got, and a single
//! [`advance`](sequence::Sequence::advance) operation ties them together. I'm building it as a
//! learning exercise, with no expectation for it to be used in production, but I've tried to write
//! it to a level where it could be.
//!
//! # Method
//! Everything here is pull-based and pure: advancing never mutates the descriptor, and replaying
//! the same (descriptor, state) pair always produces the same result. That makes every sequence
//! replayable from any point you've kept a state for, and means two traversals of the same
//! descriptor can't interfere with each other - even on separate threads, since descriptors are
//! plain immutable data. Exhaustion is a first-class [`Done`](sequence::Step::Done) result, not an
//! error and not a `None` smuggled through a shared mutable cursor.
//!
//! # Error Handling
//! There are only two things that can actually go wrong, and both are programmer errors: feeding a
//! source a state it never minted ([`InvalidState`](sequence::InvalidState)), and asking for a
//! capability a source doesn't have ([`UnsupportedOperation`](sequence::UnsupportedOperation)).
//! Both are strongly typed structs implementing [`Error`](std::error::Error), composed into an
//! enum for the type-erased layer. The consumer functions in [`sequence`] deliberately don't
//! return `Result`s: they only ever feed back states the source itself produced, so an
//! `InvalidState` there means the source implementation is broken, and they panic with the error's
//! own message instead of making every caller handle an impossibility.
//!
//! # Dependencies
//! Just `derive_more`, for the repetitive parts of error enums and variant queries.

#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

pub mod sequence;
#[cfg(feature = "sources")]
pub mod sources;

pub(crate) mod util;
