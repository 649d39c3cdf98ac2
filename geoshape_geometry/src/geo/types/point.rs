use super::{Coordinates, GeometryTrait};
use std::fmt::Debug;

/// Represents a single point defined by x and y coordinates.
///
/// A point without a position (an *empty* point) stores NaN in both coordinates.
#[derive(Clone, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	/// Constructs an empty point.
	#[must_use]
	pub fn new_empty() -> Self {
		Self(Coordinates::new(f64::NAN, f64::NAN))
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}

	/// Returns `true` if the point has no position.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_nan()
	}
}

impl GeometryTrait for PointGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		if self.is_empty() {
			return None;
		}
		Some([self.x(), self.y(), self.x(), self.y()])
	}

	fn estimated_memory_size(&self) -> usize {
		std::mem::size_of::<Self>()
	}
}

impl Debug for PointGeometry {
	/// Formats the point as `[x, y]` for readability.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}
