use anyhow::{Result, bail};
use std::fmt::Display;

/// Native type marker at the start of every ESRI shape payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
	Point = 1,
	PolyLine = 3,
	Polygon = 5,
	MultiPoint = 8,
}

impl ShapeType {
	#[must_use]
	pub fn as_i32(&self) -> i32 {
		*self as i32
	}
}

impl TryFrom<i32> for ShapeType {
	type Error = anyhow::Error;

	fn try_from(value: i32) -> Result<Self> {
		Ok(match value {
			1 => ShapeType::Point,
			3 => ShapeType::PolyLine,
			5 => ShapeType::Polygon,
			8 => ShapeType::MultiPoint,
			_ => bail!("unknown shape type marker {value}"),
		})
	}
}

impl Display for ShapeType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			ShapeType::Point => "Point",
			ShapeType::PolyLine => "PolyLine",
			ShapeType::Polygon => "Polygon",
			ShapeType::MultiPoint => "MultiPoint",
		})
	}
}
