//! Byte-level building blocks shared by the geoshape crates: a [`Blob`] byte container and
//! little-/big-endian value readers and writers.

pub mod io;

pub mod types;
pub use types::*;
