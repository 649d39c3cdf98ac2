use std::fmt::Debug;

/// The axis-aligned rectangle enclosing a geometry.
///
/// Envelopes are unions: [`merge`](Self::merge) takes the component-wise minimum of the lower
/// corners and maximum of the upper corners. "No envelope" is expressed as `Option::None`, the
/// identity of [`merge_optional`](Self::merge_optional).
///
/// ```
/// use geoshape_geometry::codec::Envelope;
///
/// let mut envelope = Envelope::from_point(0.0, 0.0);
/// envelope.merge(&Envelope::from_point(10.0, 10.0));
/// assert_eq!(envelope.as_tuple(), (0.0, 0.0, 10.0, 10.0));
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Envelope {
	pub x_min: f64,
	pub y_min: f64,
	pub x_max: f64,
	pub y_max: f64,
}

impl Envelope {
	/// Creates an envelope from `x_min, y_min, x_max, y_max`. The values are taken as they are.
	#[must_use]
	pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Envelope {
		Envelope {
			x_min,
			y_min,
			x_max,
			y_max,
		}
	}

	/// The degenerate envelope of a single position.
	#[must_use]
	pub fn from_point(x: f64, y: f64) -> Envelope {
		Envelope::new(x, y, x, y)
	}

	/// Extends this envelope in place to cover `other` as well.
	pub fn merge(&mut self, other: &Envelope) {
		self.x_min = self.x_min.min(other.x_min);
		self.y_min = self.y_min.min(other.y_min);
		self.x_max = self.x_max.max(other.x_max);
		self.y_max = self.y_max.max(other.y_max);
	}

	/// Non-mutating version of [`merge`](Self::merge).
	#[must_use]
	pub fn merged(mut self, other: &Envelope) -> Envelope {
		self.merge(other);
		self
	}

	/// Merges two optional envelopes; a missing one leaves the other unchanged.
	#[must_use]
	pub fn merge_optional(a: Option<Envelope>, b: Option<Envelope>) -> Option<Envelope> {
		match (a, b) {
			(Some(a), Some(b)) => Some(a.merged(&b)),
			(a, None) => a,
			(None, b) => b,
		}
	}

	#[must_use]
	pub fn as_array(&self) -> [f64; 4] {
		[self.x_min, self.y_min, self.x_max, self.y_max]
	}

	#[must_use]
	pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
		(self.x_min, self.y_min, self.x_max, self.y_max)
	}
}

impl From<[f64; 4]> for Envelope {
	fn from(value: [f64; 4]) -> Self {
		Envelope::new(value[0], value[1], value[2], value[3])
	}
}

impl Debug for Envelope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"Envelope({}, {}, {}, {})",
			self.x_min, self.y_min, self.x_max, self.y_max
		)
	}
}
