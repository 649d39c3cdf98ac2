use super::{
	GeometryTrait, LineStringGeometry,
	macros::{impl_from_items, impl_list_debug},
	traits::{composite_memory_size, merge_bounds},
};

/// Represents a collection of line strings.
#[derive(Clone, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn area(&self) -> f64 {
		0.0
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}

	fn estimated_memory_size(&self) -> usize {
		composite_memory_size::<Self, _>(&self.0)
	}
}

impl_list_debug!(MultiLineStringGeometry);
impl_from_items!(MultiLineStringGeometry, LineStringGeometry);

impl From<geo::MultiLineString<f64>> for MultiLineStringGeometry {
	fn from(geometry: geo::MultiLineString<f64>) -> Self {
		MultiLineStringGeometry(geometry.into_iter().map(LineStringGeometry::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn compute_bounds() {
		let multi = MultiLineStringGeometry::from(&[[[0, 0], [1, 1]], [[5, -2], [6, 3]]]);
		assert_eq!(multi.compute_bounds(), Some([0.0, -2.0, 6.0, 3.0]));
	}

	#[test]
	fn from_geo_multi_line_string() {
		let multi = MultiLineStringGeometry::from(geo::MultiLineString::new(vec![
			geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]),
			geo::LineString::from(vec![(2.0, 2.0), (3.0, 3.0)]),
		]));
		assert_eq!(multi, MultiLineStringGeometry::from(&[[[0, 0], [1, 1]], [[2, 2], [3, 3]]]));
	}
}
