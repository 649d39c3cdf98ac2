use super::ShapeType;
use crate::geo::*;
use anyhow::{Context, Result, bail};
use byteorder::LE;
use geoshape_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};
use std::borrow::Cow;

/// Encodes one atomic geometry as a little-endian ESRI shape payload.
///
/// # Errors
///
/// Fails for a `GeometryCollection`, which has no shape of its own, and for shapes whose part or
/// point counts do not fit into an `i32`.
pub fn write_shape(geometry: &Geometry) -> Result<Blob> {
	let mut writer = ValueWriterBlob::<LE>::new();
	match geometry {
		Geometry::Point(point) => {
			writer.write_i32(ShapeType::Point.as_i32())?;
			// a point with any NaN coordinate is empty and is written with both coordinates NaN
			let position = if point.is_empty() {
				[f64::NAN, f64::NAN]
			} else {
				[point.x(), point.y()]
			};
			writer.write_f64_slice(&position)?;
		}
		Geometry::MultiPoint(multi_point) => {
			writer.write_i32(ShapeType::MultiPoint.as_i32())?;
			write_bbox(&mut writer, multi_point.compute_bounds())?;
			writer.write_i32(to_count(multi_point.0.len(), "points")?)?;
			for point in &multi_point.0 {
				writer.write_f64(point.x())?;
				writer.write_f64(point.y())?;
			}
		}
		Geometry::LineString(line) => {
			write_parts(&mut writer, ShapeType::PolyLine, &[Cow::Borrowed(line.0.as_slice())])?;
		}
		Geometry::MultiLineString(lines) => {
			let parts: Vec<_> = lines.0.iter().map(|line| Cow::Borrowed(line.0.as_slice())).collect();
			write_parts(&mut writer, ShapeType::PolyLine, &parts)?;
		}
		Geometry::Polygon(polygon) => {
			write_parts(&mut writer, ShapeType::Polygon, &oriented_rings(polygon))?;
		}
		Geometry::MultiPolygon(polygons) => {
			let parts: Vec<_> = polygons.0.iter().flat_map(oriented_rings).collect();
			write_parts(&mut writer, ShapeType::Polygon, &parts)?;
		}
		Geometry::GeometryCollection(_) => bail!("a GeometryCollection can not be written as a single shape"),
	}
	Ok(writer.into_blob())
}

/// Returns the rings of a polygon in shape orientation: exterior clockwise, holes counter-clockwise.
fn oriented_rings(polygon: &PolygonGeometry) -> Vec<Cow<'_, [Coordinates]>> {
	polygon
		.0
		.iter()
		.enumerate()
		.map(|(index, ring)| {
			let area = ring.area();
			let reverse = if index == 0 { area > 0.0 } else { area < 0.0 };
			if reverse {
				Cow::Owned(ring.0.iter().rev().copied().collect())
			} else {
				Cow::Borrowed(ring.0.as_slice())
			}
		})
		.collect()
}

/// Writes a PolyLine or Polygon shape. Parts without points are left out.
fn write_parts(writer: &mut ValueWriterBlob<LE>, shape_type: ShapeType, parts: &[Cow<'_, [Coordinates]>]) -> Result<()> {
	let parts: Vec<&[Coordinates]> = parts.iter().map(|part| &**part).filter(|part| !part.is_empty()).collect();
	let num_points: usize = parts.iter().map(|part| part.len()).sum();

	writer.write_i32(shape_type.as_i32())?;
	let bounds = parts
		.iter()
		.flat_map(|part| part.iter())
		.filter(|c| !c.is_nan())
		.map(|c| [c.x(), c.y(), c.x(), c.y()])
		.reduce(|a, b| [a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]);
	write_bbox(writer, bounds)?;
	writer.write_i32(to_count(parts.len(), "parts")?)?;
	writer.write_i32(to_count(num_points, "points")?)?;

	let mut start = 0;
	for part in &parts {
		writer.write_i32(to_count(start, "part start")?)?;
		start += part.len();
	}
	for c in parts.iter().flat_map(|part| part.iter()) {
		writer.write_f64(c.x())?;
		writer.write_f64(c.y())?;
	}
	Ok(())
}

/// Writes `x_min, y_min, x_max, y_max`, or four NaN if the shape has no position.
fn write_bbox(writer: &mut ValueWriterBlob<LE>, bounds: Option<[f64; 4]>) -> Result<()> {
	writer.write_f64_slice(&bounds.unwrap_or([f64::NAN; 4]))
}

fn to_count(value: usize, what: &str) -> Result<i32> {
	i32::try_from(value).with_context(|| format!("too many {what} for a shape: {value}"))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn f64s(blob: &Blob, offset: usize, count: usize) -> Vec<f64> {
		blob.as_slice()[offset..offset + count * 8]
			.chunks_exact(8)
			.map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()))
			.collect()
	}

	fn i32s(blob: &Blob, offset: usize, count: usize) -> Vec<i32> {
		blob.as_slice()[offset..offset + count * 4]
			.chunks_exact(4)
			.map(|chunk| i32::from_le_bytes(chunk.try_into().unwrap()))
			.collect()
	}

	#[test]
	fn point_bytes() {
		let blob = write_shape(&Geometry::new_point([3.0, 4.0])).unwrap();
		let mut expected = vec![1, 0, 0, 0];
		expected.extend_from_slice(&3.0f64.to_le_bytes());
		expected.extend_from_slice(&4.0f64.to_le_bytes());
		assert_eq!(blob.as_slice(), expected.as_slice());
	}

	#[test]
	fn empty_point_writes_nan() {
		let blob = write_shape(&Geometry::Point(PointGeometry::new_empty())).unwrap();
		assert_eq!(blob.len(), 20);
		assert!(f64s(&blob, 4, 2).iter().all(|v| v.is_nan()));
	}

	#[test]
	fn multi_point_layout() {
		let blob = write_shape(&Geometry::new_multi_point(&[[1, 5], [-2, 3]])).unwrap();
		assert_eq!(blob.len(), 4 + 32 + 4 + 2 * 16);
		assert_eq!(i32s(&blob, 0, 1), [8]);
		assert_eq!(f64s(&blob, 4, 4), [-2.0, 3.0, 1.0, 5.0]);
		assert_eq!(i32s(&blob, 36, 1), [2]);
		assert_eq!(f64s(&blob, 40, 4), [1.0, 5.0, -2.0, 3.0]);
	}

	#[test]
	fn multi_line_string_layout() {
		let geometry = Geometry::new_multi_line_string(&[vec![[0, 0], [1, 1]], vec![[5, 5], [6, 7], [8, 8]]]);
		let blob = write_shape(&geometry).unwrap();
		assert_eq!(i32s(&blob, 0, 1), [3]);
		assert_eq!(f64s(&blob, 4, 4), [0.0, 0.0, 8.0, 8.0]);
		// parts, points, part starts
		assert_eq!(i32s(&blob, 36, 4), [2, 5, 0, 2]);
		assert_eq!(blob.len(), 52 + 5 * 16);
	}

	#[test]
	fn polygon_rings_are_reoriented() {
		// exterior counter-clockwise, hole clockwise
		let geometry = Geometry::new_polygon(&[
			vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]],
			vec![[2, 2], [2, 4], [4, 4], [4, 2], [2, 2]],
		]);
		let blob = write_shape(&geometry).unwrap();
		assert_eq!(i32s(&blob, 0, 1), [5]);
		assert_eq!(i32s(&blob, 36, 4), [2, 10, 0, 5]);

		let points = f64s(&blob, 52, 20);
		let exterior = RingGeometry::from(points[..10].chunks(2).map(|c| [c[0], c[1]]).collect::<Vec<_>>());
		let hole = RingGeometry::from(points[10..].chunks(2).map(|c| [c[0], c[1]]).collect::<Vec<_>>());
		assert!(exterior.is_clockwise());
		assert!(!hole.is_clockwise());
	}

	#[test]
	fn half_empty_point_is_written_empty() {
		let blob = write_shape(&Geometry::Point(PointGeometry::new(Coordinates::new(f64::NAN, 1.0)))).unwrap();
		assert_eq!(blob.len(), 20);
		assert!(f64s(&blob, 4, 2).iter().all(|v| v.is_nan()));
	}

	#[test]
	fn empty_line_string() {
		let blob = write_shape(&Geometry::new_line_string(Vec::<[f64; 2]>::new())).unwrap();
		assert_eq!(blob.len(), 44);
		assert!(f64s(&blob, 4, 4).iter().all(|v| v.is_nan()));
		assert_eq!(i32s(&blob, 36, 2), [0, 0]);
	}

	#[test]
	fn collection_is_rejected() {
		let error = write_shape(&Geometry::new_collection(vec![])).unwrap_err();
		assert!(error.to_string().contains("GeometryCollection"));
	}
}
