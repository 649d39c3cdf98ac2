//! The record format: a type code byte followed by one or more shape payloads.
//!
//! ```text
//! [type code: u8] [payload]                                  any geometry but a collection
//! [6: u8] ([length: i32 LE] [payload: length bytes])*       GeometryCollection
//! ```
//!
//! [`GeometryCodec`] writes and reads whole records, delegating every payload to a [`ShapeCodec`].
//! [`extract_envelope`] computes the bounding envelope of a record from the payload headers alone.

mod config;
mod envelope;
mod envelope_reader;
mod error;
mod framing;
mod geometry_codec;
mod traits;
mod type_code;

pub use config::*;
pub use envelope::*;
pub use envelope_reader::*;
pub use error::*;
pub use framing::*;
pub use geometry_codec::*;
pub use traits::*;
pub use type_code::*;
