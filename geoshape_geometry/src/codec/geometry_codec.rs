use super::{CodecConfig, GeometryTypeCode, RecordReader, RecordWriter, SerializableGeometry, ShapeCodec};
use crate::esri_shape::EsriShapeCodec;
use anyhow::{Result, bail};
use geoshape_core::Blob;
use log::{debug, trace};

/// Encodes geometries into records and decodes them again.
///
/// A record is the [`GeometryTypeCode`] byte followed by the shape payloads produced by the
/// injected [`ShapeCodec`]. Collections prefix every payload with its length as a little-endian
/// `i32`; any other geometry is a single payload filling the rest of the record.
#[derive(Clone, Debug, Default)]
pub struct GeometryCodec<C> {
	shape_codec: C,
	config: CodecConfig,
}

impl GeometryCodec<EsriShapeCodec> {
	/// A codec for [`Geometry`](crate::Geometry) using ESRI shape payloads and the default config.
	#[must_use]
	pub fn new_esri() -> Self {
		GeometryCodec::new(EsriShapeCodec)
	}
}

impl<C> GeometryCodec<C> {
	pub fn new(shape_codec: C) -> Self {
		GeometryCodec::with_config(shape_codec, CodecConfig::default())
	}

	pub fn with_config(shape_codec: C, config: CodecConfig) -> Self {
		GeometryCodec { shape_codec, config }
	}

	#[must_use]
	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	/// Encodes a geometry into a record.
	///
	/// # Errors
	///
	/// Fails with [`GeometryCodecError::InvalidGeometryType`](super::GeometryCodecError) if the type
	/// name has no code. Also fails if a non-collection does not consist of exactly one shape, and
	/// passes on the shape codec's error if a shape can not be encoded.
	pub fn encode<G>(&self, geometry: &G) -> Result<Blob>
	where
		G: SerializableGeometry,
		C: ShapeCodec<G>,
	{
		let type_code = GeometryTypeCode::from_name(geometry.type_name())?;
		let shapes = geometry.atomic_shapes();
		if !type_code.is_collection() && shapes.len() != 1 {
			bail!(
				"a {type_code} must consist of exactly one shape, but has {}",
				shapes.len()
			);
		}

		let mut writer = RecordWriter::new(type_code, self.config.initial_capacity)?;
		for shape in shapes {
			let payload = self.shape_codec.encode_shape(shape)?;
			writer.write_payload(&payload)?;
		}
		let record = writer.into_blob();
		trace!("encoded {type_code} into {} bytes", record.len());
		Ok(record)
	}

	/// Decodes a record into a geometry.
	///
	/// `None` decodes to `None`. A record without shapes, including an empty one, decodes to an
	/// empty collection. A record with exactly one shape decodes to that shape unless flattening is
	/// switched off in the [`CodecConfig`] and the record was written as a collection.
	///
	/// # Errors
	///
	/// Fails with a [`GeometryCodecError`](super::GeometryCodecError) for unknown type codes and
	/// broken length prefixes, and with the shape codec's error for undecodable payloads.
	pub fn decode<G>(&self, record: Option<&[u8]>) -> Result<Option<G>>
	where
		G: SerializableGeometry,
		C: ShapeCodec<G>,
	{
		let Some(record) = record else {
			return Ok(None);
		};
		if record.is_empty() {
			return Ok(Some(G::new_collection(Vec::new())));
		}

		let reader = RecordReader::new(record)?;
		let is_collection = reader.is_collection();
		let mut shapes = Vec::new();
		for segment in reader {
			let segment = segment.inspect_err(|e| debug!("rejected record: {e}"))?;
			shapes.push(self.shape_codec.decode_shape(segment)?);
		}

		let flatten = self.config.flatten_single_member || !is_collection;
		if shapes.len() == 1 && flatten {
			return Ok(shapes.pop());
		}
		Ok(Some(G::new_collection(shapes)))
	}

	/// Estimated number of bytes a decoded geometry occupies in memory.
	pub fn estimated_memory_size<G: SerializableGeometry>(&self, geometry: &G) -> usize {
		geometry.estimated_memory_size()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Geometry, codec::GeometryCodecError};

	/// Shapes are stored as their type name, which is enough to check the framing.
	#[derive(Clone, Debug, PartialEq)]
	enum Fake {
		Atom(&'static str),
		Group(Vec<Fake>),
	}

	impl SerializableGeometry for Fake {
		fn type_name(&self) -> &str {
			match self {
				Fake::Atom(name) => name,
				Fake::Group(_) => "GeometryCollection",
			}
		}
		fn atomic_shapes(&self) -> Vec<&Self> {
			match self {
				Fake::Atom(_) => vec![self],
				Fake::Group(members) => members.iter().collect(),
			}
		}
		fn new_collection(members: Vec<Self>) -> Self {
			Fake::Group(members)
		}
		fn estimated_memory_size(&self) -> usize {
			42
		}
	}

	struct NameCodec;

	impl ShapeCodec<Fake> for NameCodec {
		fn encode_shape(&self, geometry: &Fake) -> Result<Blob> {
			match geometry {
				Fake::Atom(name) => Ok(Blob::from(name.as_bytes())),
				Fake::Group(_) => bail!("not a shape"),
			}
		}
		fn decode_shape(&self, data: &[u8]) -> Result<Fake> {
			match data {
				b"Point" => Ok(Fake::Atom("Point")),
				b"Polygon" => Ok(Fake::Atom("Polygon")),
				_ => bail!("unknown fake shape"),
			}
		}
	}

	#[test]
	fn fake_collection_framing() -> Result<()> {
		let codec = GeometryCodec::new(NameCodec);
		let geometry = Fake::Group(vec![Fake::Atom("Point"), Fake::Atom("Polygon")]);
		let record = codec.encode(&geometry)?;

		let mut expected = vec![6u8, 5, 0, 0, 0];
		expected.extend_from_slice(b"Point");
		expected.extend_from_slice(&[7, 0, 0, 0]);
		expected.extend_from_slice(b"Polygon");
		assert_eq!(record.as_slice(), expected.as_slice());

		assert_eq!(codec.decode::<Fake>(Some(record.as_slice()))?, Some(geometry));
		Ok(())
	}

	#[test]
	fn fake_single_shape_has_no_prefix() -> Result<()> {
		let codec = GeometryCodec::new(NameCodec);
		let record = codec.encode(&Fake::Atom("Polygon"))?;
		assert_eq!(record.as_slice(), b"\x04Polygon");
		Ok(())
	}

	#[test]
	fn unknown_type_name() {
		let codec = GeometryCodec::new(NameCodec);
		let error = codec.encode(&Fake::Atom("Circle")).unwrap_err();
		assert_eq!(
			error.downcast_ref::<GeometryCodecError>(),
			Some(&GeometryCodecError::InvalidGeometryType(String::from(
				"unknown type name 'Circle'"
			)))
		);
	}

	#[test]
	fn shape_codec_errors_propagate_unchanged() {
		let codec = GeometryCodec::new(NameCodec);
		let error = codec.decode::<Fake>(Some(b"\x00Line")).unwrap_err();
		assert_eq!(error.to_string(), "unknown fake shape");
	}

	#[test]
	fn flatten_can_be_switched_off() -> Result<()> {
		let geometry = Fake::Group(vec![Fake::Atom("Point")]);

		let flattening = GeometryCodec::new(NameCodec);
		let record = flattening.encode(&geometry)?;
		assert_eq!(flattening.decode::<Fake>(Some(record.as_slice()))?, Some(Fake::Atom("Point")));

		let keeping = GeometryCodec::with_config(NameCodec, CodecConfig::default().with_flatten_single_member(false));
		assert_eq!(keeping.decode::<Fake>(Some(record.as_slice()))?, Some(geometry));

		// a plain shape record is never wrapped
		let record = keeping.encode(&Fake::Atom("Point"))?;
		assert_eq!(keeping.decode::<Fake>(Some(record.as_slice()))?, Some(Fake::Atom("Point")));
		Ok(())
	}

	#[test]
	fn absent_and_empty_records() -> Result<()> {
		let codec = GeometryCodec::new_esri();
		assert_eq!(codec.decode::<Geometry>(None)?, None);
		assert_eq!(codec.decode::<Geometry>(Some(&[]))?, Some(Geometry::new_collection(vec![])));
		assert_eq!(codec.decode::<Geometry>(Some(&[6]))?, Some(Geometry::new_collection(vec![])));
		Ok(())
	}

	#[test]
	fn memory_size_is_delegated() {
		let codec = GeometryCodec::new(NameCodec);
		assert_eq!(codec.estimated_memory_size(&Fake::Atom("Point")), 42);

		let geometry = Geometry::new_line_string(&[[0, 0], [1, 1]]);
		assert_eq!(
			GeometryCodec::new_esri().estimated_memory_size(&geometry),
			crate::geo::GeometryTrait::estimated_memory_size(&geometry)
		);
	}

	#[test]
	fn config_is_kept() {
		let config = CodecConfig::default().with_initial_capacity(8);
		assert_eq!(GeometryCodec::with_config(NameCodec, config.clone()).config(), &config);
	}
}
