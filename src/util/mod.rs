#![warn(missing_docs)]

pub mod bits;
pub mod panic;
pub mod result;
