//! ESRI shape payloads: the native binary form of a single atomic geometry.
//!
//! All values are little-endian. Every payload starts with an `i32` [`ShapeType`] marker:
//!
//! * Point: `x, y` as `f64`, NaN for an empty point.
//! * MultiPoint: bounding box (`4 × f64`), point count, points.
//! * PolyLine and Polygon: bounding box, part count, point count, the start index of every part,
//!   points.
//!
//! Empty shapes carry a NaN bounding box and zero counts. Polygon exteriors are stored clockwise and
//! holes counter-clockwise.

mod nan;
mod reader;
mod shape_type;
mod writer;

pub use nan::*;
pub use reader::*;
pub use shape_type::*;
pub use writer::*;

use crate::{Geometry, codec::ShapeCodec};
use anyhow::Result;
use geoshape_core::Blob;

/// [`ShapeCodec`] for [`Geometry`] using ESRI shape payloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct EsriShapeCodec;

impl ShapeCodec<Geometry> for EsriShapeCodec {
	fn encode_shape(&self, geometry: &Geometry) -> Result<Blob> {
		write_shape(geometry)
	}

	fn decode_shape(&self, data: &[u8]) -> Result<Geometry> {
		read_shape(data)
	}
}
