use super::{
	GeometryTrait, PolygonGeometry,
	macros::{impl_from_items, impl_list_debug},
	traits::{composite_memory_size, merge_bounds},
};

/// Represents a collection of polygons, each with an exterior ring and optional holes.
#[derive(Clone, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn area(&self) -> f64 {
		self.0.iter().map(GeometryTrait::area).sum()
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}

	fn estimated_memory_size(&self) -> usize {
		composite_memory_size::<Self, _>(&self.0)
	}
}

impl_list_debug!(MultiPolygonGeometry);
impl_from_items!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}
