use anyhow::Result;
use geoshape_core::Blob;

/// Encodes and decodes the native payload of one atomic shape.
///
/// The payload must start with the shape's own 4-byte little-endian type marker; the envelope
/// reader relies on `1` meaning a point followed by `x, y` and every other marker being followed
/// by `x_min, y_min, x_max, y_max`.
pub trait ShapeCodec<G> {
	fn encode_shape(&self, geometry: &G) -> Result<Blob>;
	fn decode_shape(&self, data: &[u8]) -> Result<G>;
}

/// What the record codec needs to know about a geometry model.
pub trait SerializableGeometry: Sized {
	/// Canonical type name, one of the names of [`GeometryTypeCode`](super::GeometryTypeCode).
	fn type_name(&self) -> &str;

	/// The atomic shapes in record order. An atomic geometry yields only itself.
	fn atomic_shapes(&self) -> Vec<&Self>;

	/// Builds a collection from decoded members.
	fn new_collection(members: Vec<Self>) -> Self;

	/// Estimated bytes the geometry occupies in memory; `GeometryCodec::estimated_memory_size`
	/// delegates to this.
	fn estimated_memory_size(&self) -> usize;
}

impl SerializableGeometry for crate::Geometry {
	fn type_name(&self) -> &str {
		crate::Geometry::type_name(self)
	}

	fn atomic_shapes(&self) -> Vec<&Self> {
		crate::Geometry::atomic_shapes(self)
	}

	fn new_collection(members: Vec<Self>) -> Self {
		crate::Geometry::new_collection(members)
	}

	fn estimated_memory_size(&self) -> usize {
		crate::geo::GeometryTrait::estimated_memory_size(self)
	}
}
