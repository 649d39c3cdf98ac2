use super::{ShapeType, translate_from_legacy_nan};
use crate::geo::*;
use anyhow::{Context, Result, ensure};
use byteorder::LE;
use geoshape_core::io::{ValueReader, ValueReaderSlice};
use log::trace;

/// Decodes one little-endian ESRI shape payload into a geometry.
///
/// Trailing bytes after the shape are ignored.
///
/// # Errors
///
/// Fails on an unknown shape type marker, on truncated data, on negative counts and on part
/// start indexes that are out of order or out of range.
pub fn read_shape(data: &[u8]) -> Result<Geometry> {
	let mut reader = ValueReaderSlice::new_le(data);
	reader.ensure_remaining(4, "shape type")?;
	let shape_type = ShapeType::try_from(reader.read_i32()?)?;

	Ok(match shape_type {
		ShapeType::Point => {
			reader.ensure_remaining(16, "point")?;
			Geometry::Point(PointGeometry::new(read_coordinates(&mut reader)?))
		}
		ShapeType::MultiPoint => {
			reader.skip(32).context("Failed to skip bounding box")?;
			let count = read_count(&mut reader, "point count")?;
			reader.ensure_remaining(count * 16, "points")?;
			let points = (0..count)
				.map(|_| read_coordinates(&mut reader).map(PointGeometry::new))
				.collect::<Result<Vec<_>>>()?;
			Geometry::MultiPoint(MultiPointGeometry(points))
		}
		ShapeType::PolyLine => {
			let mut lines: Vec<LineStringGeometry> = read_parts(&mut reader)?
				.into_iter()
				.map(LineStringGeometry)
				.collect();
			match lines.len() {
				0 => Geometry::LineString(LineStringGeometry(Vec::new())),
				1 => Geometry::LineString(lines.remove(0)),
				_ => Geometry::MultiLineString(MultiLineStringGeometry(lines)),
			}
		}
		ShapeType::Polygon => {
			let rings = read_parts(&mut reader)?.into_iter().map(RingGeometry).collect();
			let mut polygons = group_rings(rings);
			match polygons.len() {
				0 => Geometry::Polygon(PolygonGeometry(Vec::new())),
				1 => Geometry::Polygon(polygons.remove(0)),
				_ => Geometry::MultiPolygon(MultiPolygonGeometry(polygons)),
			}
		}
	})
}

fn read_coordinates(reader: &mut ValueReaderSlice<'_, LE>) -> Result<Coordinates> {
	let x = translate_from_legacy_nan(reader.read_f64()?);
	let y = translate_from_legacy_nan(reader.read_f64()?);
	Ok(Coordinates::new(x, y))
}

fn read_count(reader: &mut ValueReaderSlice<'_, LE>, what: &str) -> Result<u64> {
	reader.ensure_remaining(4, what)?;
	let value = reader.read_i32()?;
	ensure!(value >= 0, "{what} must not be negative, but is {value}");
	Ok(value as u64)
}

/// Reads the bounding box, counts, part starts and points of a PolyLine or Polygon shape and splits
/// the points into parts.
fn read_parts(reader: &mut ValueReaderSlice<'_, LE>) -> Result<Vec<Vec<Coordinates>>> {
	reader.skip(32).context("Failed to skip bounding box")?;
	let num_parts = read_count(reader, "part count")?;
	let num_points = read_count(reader, "point count")?;
	ensure!(
		num_parts > 0 || num_points == 0,
		"{num_points} points do not belong to any part"
	);
	reader.ensure_remaining(num_parts * 4 + num_points * 16, "parts and points")?;

	let mut starts: Vec<u64> = Vec::with_capacity(num_parts as usize);
	for index in 0..num_parts {
		let start = read_count(reader, "part start")?;
		match starts.last() {
			None => ensure!(start == 0, "part 0 must start at 0, but starts at {start}"),
			Some(&previous) => ensure!(
				start >= previous,
				"part {index} starts at {start}, before the previous part at {previous}"
			),
		}
		ensure!(
			start <= num_points,
			"part {index} starts at {start}, beyond the {num_points} points"
		);
		starts.push(start);
	}

	let mut points = (0..num_points)
		.map(|_| read_coordinates(reader))
		.collect::<Result<Vec<_>>>()?;

	// split from the back so every part can be moved out without copying
	let mut parts = Vec::with_capacity(starts.len());
	for start in starts.into_iter().rev() {
		parts.push(points.split_off(start as usize));
	}
	parts.reverse();
	Ok(parts)
}

/// Groups shape rings into polygons and restores the model orientation.
///
/// In a shape, every clockwise ring starts a new polygon and the counter-clockwise rings following
/// it are its holes. The model stores exteriors counter-clockwise and holes clockwise.
///
/// A ring without area has no orientation. After the first ring it is taken as a hole of the
/// preceding polygon, even if it was written as an exterior.
fn group_rings(rings: Vec<RingGeometry>) -> Vec<PolygonGeometry> {
	let mut polygons: Vec<PolygonGeometry> = Vec::new();
	for mut ring in rings {
		if ring.is_clockwise() {
			ring.reverse();
			polygons.push(PolygonGeometry(vec![ring]));
		} else if !polygons.is_empty() {
			let index = polygons.len() - 1;
			let polygon = &mut polygons[index];
			if ring.area() == 0.0 {
				trace!("ring without area is attached as a hole to polygon {index}");
			}
			ring.reverse();
			polygon.0.push(ring);
		} else {
			trace!("first ring of a polygon shape is counter-clockwise, using it as exterior");
			polygons.push(PolygonGeometry(vec![ring]));
		}
	}
	polygons
}
