use super::{
	GeometryTrait, RingGeometry,
	macros::{impl_from_items, impl_list_debug},
	traits::{composite_memory_size, merge_bounds},
};

/// A polygon: the first ring is the exterior, any further rings are holes.
#[derive(Clone, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn area(&self) -> f64 {
		let mut rings = self.0.iter();
		let Some(exterior) = rings.next() else {
			return 0.0;
		};
		rings.fold(exterior.area().abs(), |sum, hole| sum - hole.area().abs())
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		merge_bounds(self.0.iter().map(GeometryTrait::compute_bounds))
	}

	fn estimated_memory_size(&self) -> usize {
		composite_memory_size::<Self, _>(&self.0)
	}
}

impl_list_debug!(PolygonGeometry);
impl_from_items!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		rings.extend(interiors.into_iter().map(RingGeometry::from));
		PolygonGeometry(rings)
	}
}
