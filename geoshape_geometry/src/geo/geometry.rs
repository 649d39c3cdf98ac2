use super::{types::merge_bounds, *};
use std::fmt::Debug;

/// An in-memory vector geometry: one of the six atomic shape kinds or a heterogeneous collection.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	#[must_use]
	pub fn new_collection(members: Vec<Geometry>) -> Self {
		Self::GeometryCollection(members)
	}

	/// Returns the canonical type name, e.g. `"MultiLineString"`.
	#[must_use]
	pub fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		matches!(self, Geometry::GeometryCollection(_))
	}

	/// Returns `true` if the geometry holds no position at all.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Geometry::Point(g) => g.is_empty(),
			Geometry::LineString(g) => g.0.is_empty(),
			Geometry::Polygon(g) => g.0.iter().all(|ring| ring.0.is_empty()),
			Geometry::MultiPoint(g) => g.0.iter().all(PointGeometry::is_empty),
			Geometry::MultiLineString(g) => g.0.iter().all(|line| line.0.is_empty()),
			Geometry::MultiPolygon(g) => g.0.iter().flat_map(|p| &p.0).all(|ring| ring.0.is_empty()),
			Geometry::GeometryCollection(members) => members.iter().all(Geometry::is_empty),
		}
	}

	/// Returns the atomic shapes of this geometry in depth-first order.
	///
	/// An atomic geometry yields itself; nested collections are flattened.
	#[must_use]
	pub fn atomic_shapes(&self) -> Vec<&Geometry> {
		let mut shapes = Vec::new();
		self.collect_atomic_shapes(&mut shapes);
		shapes
	}

	fn collect_atomic_shapes<'a>(&'a self, shapes: &mut Vec<&'a Geometry>) {
		match self {
			Geometry::GeometryCollection(members) => {
				for member in members {
					member.collect_atomic_shapes(shapes);
				}
			}
			_ => shapes.push(self),
		}
	}
}

impl GeometryTrait for Geometry {
	fn area(&self) -> f64 {
		match self {
			Geometry::Point(g) => g.area(),
			Geometry::LineString(g) => g.area(),
			Geometry::Polygon(g) => g.area(),
			Geometry::MultiPoint(g) => g.area(),
			Geometry::MultiLineString(g) => g.area(),
			Geometry::MultiPolygon(g) => g.area(),
			Geometry::GeometryCollection(members) => members.iter().map(GeometryTrait::area).sum(),
		}
	}

	fn compute_bounds(&self) -> Option<[f64; 4]> {
		match self {
			Geometry::Point(g) => g.compute_bounds(),
			Geometry::LineString(g) => g.compute_bounds(),
			Geometry::Polygon(g) => g.compute_bounds(),
			Geometry::MultiPoint(g) => g.compute_bounds(),
			Geometry::MultiLineString(g) => g.compute_bounds(),
			Geometry::MultiPolygon(g) => g.compute_bounds(),
			Geometry::GeometryCollection(members) => merge_bounds(members.iter().map(GeometryTrait::compute_bounds)),
		}
	}

	fn estimated_memory_size(&self) -> usize {
		// the payload of atomic variants lives inline, so only its heap part is added
		let own = std::mem::size_of::<Self>();
		match self {
			Geometry::Point(g) => own + g.estimated_memory_size() - std::mem::size_of::<PointGeometry>(),
			Geometry::LineString(g) => own + g.estimated_memory_size() - std::mem::size_of::<LineStringGeometry>(),
			Geometry::Polygon(g) => own + g.estimated_memory_size() - std::mem::size_of::<PolygonGeometry>(),
			Geometry::MultiPoint(g) => own + g.estimated_memory_size() - std::mem::size_of::<MultiPointGeometry>(),
			Geometry::MultiLineString(g) => {
				own + g.estimated_memory_size() - std::mem::size_of::<MultiLineStringGeometry>()
			}
			Geometry::MultiPolygon(g) => own + g.estimated_memory_size() - std::mem::size_of::<MultiPolygonGeometry>(),
			Geometry::GeometryCollection(members) => {
				own + (members.capacity() - members.len()) * own
					+ members.iter().map(GeometryTrait::estimated_memory_size).sum::<usize>()
			}
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(members) => members,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

impl From<geo::Geometry<f64>> for Geometry {
	fn from(geometry: geo::Geometry<f64>) -> Self {
		use geo::Geometry as G;
		match geometry {
			G::Point(g) => Geometry::Point(PointGeometry::from(g)),
			G::Line(g) => Geometry::LineString(LineStringGeometry::from(vec![
				Coordinates::from(g.start),
				Coordinates::from(g.end),
			])),
			G::LineString(g) => Geometry::LineString(LineStringGeometry::from(g)),
			G::Polygon(g) => Geometry::Polygon(PolygonGeometry::from(g)),
			G::MultiPoint(g) => Geometry::MultiPoint(MultiPointGeometry::from(g)),
			G::MultiLineString(g) => Geometry::MultiLineString(MultiLineStringGeometry::from(g)),
			G::MultiPolygon(g) => Geometry::MultiPolygon(MultiPolygonGeometry::from(g)),
			G::GeometryCollection(g) => Geometry::GeometryCollection(g.into_iter().map(Geometry::from).collect()),
			G::Rect(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
			G::Triangle(g) => Geometry::Polygon(PolygonGeometry::from(g.to_polygon())),
		}
	}
}
