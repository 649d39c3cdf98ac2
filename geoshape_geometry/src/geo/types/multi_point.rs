use super::{
	GeometryTrait, PointGeometry,
	macros::{impl_from_items, impl_list_debug},
	traits::{composite_memory_size, merge_bounds},
};

/// Represents a collection of points.
#[derive(Clone, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
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

impl_list_debug!(MultiPointGeometry);
impl_from_items!(MultiPointGeometry, PointGeometry);

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}
