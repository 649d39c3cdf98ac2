use super::{
	Coordinates, GeometryTrait,
	macros::{impl_from_items, impl_list_debug},
};

/// Represents a sequence of connected coordinates forming a line.
#[derive(Clone, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

/// Bounds of a coordinate list, `None` when it holds no positions.
pub(crate) fn coordinate_bounds(coordinates: &[Coordinates]) -> Option<[f64; 4]> {
	coordinates
		.iter()
		.map(|c| [c.x(), c.y(), c.x(), c.y()])
		.reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])])
}

impl GeometryTrait for LineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		coordinate_bounds(&self.0)
	}

	fn estimated_memory_size(&self) -> usize {
		std::mem::size_of::<Self>() + self.0.capacity() * std::mem::size_of::<Coordinates>()
	}
}

impl_list_debug!(LineStringGeometry);
impl_from_items!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compute_bounds() {
		let line = LineStringGeometry::from(&[[3, 1], [-2, 4], [5, 0]]);
		assert_eq!(line.compute_bounds(), Some([-2.0, 0.0, 5.0, 4.0]));
		assert_eq!(LineStringGeometry(Vec::new()).compute_bounds(), None);
	}

	#[test]
	fn memory_counts_capacity() {
		let line = LineStringGeometry(Vec::with_capacity(10));
		assert_eq!(
			line.estimated_memory_size(),
			std::mem::size_of::<LineStringGeometry>() + 10 * 16
		);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
		let line = LineStringGeometry::from(ls);
		assert_eq!(line.0.len(), 2);
		assert_eq!(line.0.last(), Some(&Coordinates::new(1.0, 1.0)));
	}

	#[test]
	fn debug_format() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		assert_eq!(format!("{line:?}"), "[[1.0, 2.0], [3.0, 4.0]]");
	}
}
