use super::{Envelope, GeometryCodecError, RecordReader};
use crate::esri_shape::{ShapeType, is_esri_nan};
use anyhow::{Result, bail};
use byteorder::LE;
use geoshape_core::io::{ValueReader, ValueReaderSlice};
use log::{debug, trace};

/// Computes the envelope of an encoded record without decoding its shapes.
///
/// Only the leading marker and the point or bounding box of every payload are read. Shapes without
/// a position contribute nothing; `None` is returned for an absent or empty record and for a record
/// holding only empty shapes. Bounding boxes are taken as written, inverted ones included.
///
/// # Errors
///
/// * [`GeometryCodecError::InvalidGeometryType`] for an unknown type code.
/// * [`GeometryCodecError::MalformedRecord`] for broken length prefixes and payloads too short
///   for their marker and coordinates.
/// * [`GeometryCodecError::InconsistentEmptyMarker`] if some but not all coordinates of a point
///   or bounding box mark "no value".
pub fn extract_envelope(record: Option<&[u8]>) -> Result<Option<Envelope>> {
	let Some(record) = record else {
		return Ok(None);
	};
	if record.is_empty() {
		return Ok(None);
	}

	let mut envelope: Option<Envelope> = None;
	for segment in RecordReader::new(record)? {
		let contribution = segment_envelope(segment?).inspect_err(|e| debug!("rejected record: {e}"))?;
		envelope = Envelope::merge_optional(envelope, contribution);
	}
	Ok(envelope)
}

fn segment_envelope(segment: &[u8]) -> Result<Option<Envelope>> {
	let mut reader = ValueReaderSlice::new_le(segment);
	ensure_segment(&mut reader, 4, "shape type marker")?;
	let marker = reader.read_i32()?;

	if marker == ShapeType::Point.as_i32() {
		ensure_segment(&mut reader, 16, "point")?;
		let [x, y] = reader.read_f64_array::<2>()?;
		trace!("point segment at ({x}, {y})");
		if is_esri_nan(x) != is_esri_nan(y) {
			bail!(GeometryCodecError::InconsistentEmptyMarker(format!(
				"point ({x}, {y}) has only one empty coordinate"
			)));
		}
		if is_esri_nan(x) {
			return Ok(None);
		}
		Ok(Some(Envelope::from_point(x, y)))
	} else {
		ensure_segment(&mut reader, 32, "bounding box")?;
		let bbox = reader.read_f64_array::<4>()?;
		trace!("shape segment with marker {marker} and bounding box {bbox:?}");
		let empty = bbox.iter().filter(|v| is_esri_nan(**v)).count();
		match empty {
			0 => Ok(Some(Envelope::from(bbox))),
			4 => Ok(None),
			_ => bail!(GeometryCodecError::InconsistentEmptyMarker(format!(
				"bounding box {bbox:?} has {empty} empty coordinates"
			))),
		}
	}
}

fn ensure_segment(reader: &mut ValueReaderSlice<'_, LE>, length: u64, what: &str) -> Result<()> {
	let remaining = reader.remaining();
	if remaining < length {
		bail!(GeometryCodecError::MalformedRecord(format!(
			"{what} needs {length} bytes, but only {remaining} are left in the payload"
		)));
	}
	Ok(())
}
