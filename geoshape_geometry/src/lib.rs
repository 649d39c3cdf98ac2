//! Vector geometries and their compact binary record format.
//!
//! * [`Geometry`] and its parts form the in-memory geometry model.
//! * [`esri_shape`] encodes single atomic shapes in the ESRI shape layout.
//! * [`codec`] frames shapes into records, decodes them again and reads a record's envelope
//!   without building any geometry.
//!
//! ```rust
//! use geoshape_geometry::{Geometry, codec::{Envelope, GeometryCodec, extract_envelope}};
//!
//! let codec = GeometryCodec::new_esri();
//! let record = codec.encode(&Geometry::new_point([3.0, 4.0])).unwrap();
//! assert_eq!(
//!     extract_envelope(Some(record.as_slice())).unwrap(),
//!     Some(Envelope::new(3.0, 4.0, 3.0, 4.0))
//! );
//! ```

pub mod codec;
pub mod esri_shape;
mod geo;

pub use geo::*;
