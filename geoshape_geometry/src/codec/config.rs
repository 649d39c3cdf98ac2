/// Settings of a [`GeometryCodec`](super::GeometryCodec).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
	/// Bytes reserved up front for an encoded record.
	pub initial_capacity: usize,
	/// Decode a record holding exactly one shape to that shape, even if it was written as a
	/// collection.
	pub flatten_single_member: bool,
}

impl CodecConfig {
	#[must_use]
	pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
		self.initial_capacity = initial_capacity;
		self
	}

	#[must_use]
	pub fn with_flatten_single_member(mut self, flatten_single_member: bool) -> Self {
		self.flatten_single_member = flatten_single_member;
		self
	}
}

impl Default for CodecConfig {
	fn default() -> Self {
		Self {
			initial_capacity: 100,
			flatten_single_member: true,
		}
	}
}
