use super::{
	Coordinates, GeometryTrait,
	linestring::coordinate_bounds,
	macros::{impl_from_items, impl_list_debug},
};

/// Represents a closed ring, the building block of polygons.
/// The first and last coordinates are expected to be identical.
#[derive(Clone, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Returns `true` if the ring winds clockwise, i.e. its signed area is negative.
	#[must_use]
	pub fn is_clockwise(&self) -> bool {
		self.area() < 0.0
	}

	/// Reverses the winding order in place.
	pub fn reverse(&mut self) {
		self.0.reverse();
	}
}

impl GeometryTrait for RingGeometry {
	/// Computes the signed area of the ring using the shoelace formula.
	/// The area is positive if the ring is oriented counterclockwise,
	/// and negative if clockwise.
	fn area(&self) -> f64 {
		let mut sum = 0f64;
		if let Some(mut p2) = self.0.last() {
			for p1 in &self.0 {
				sum += (p2.x() - p1.x()) * (p1.y() + p2.y());
				p2 = p1;
			}
		}
		sum / 2.0
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coordinate_bounds(&self.0)
	}

	fn estimated_memory_size(&self) -> usize {
		std::mem::size_of::<Self>() + self.0.capacity() * std::mem::size_of::<Coordinates>()
	}
}

impl_list_debug!(RingGeometry);
impl_from_items!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		RingGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}
