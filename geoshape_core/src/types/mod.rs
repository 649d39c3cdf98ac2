//! Contains the byte container types used by the readers and writers.

mod blob;
pub use blob::*;
