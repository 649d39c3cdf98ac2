use super::GeometryCodecError;
use anyhow::{Result, bail};
use std::fmt::Display;

/// The first byte of every record. The numbering is part of the wire format and never changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GeometryTypeCode {
	Point = 0,
	MultiPoint = 1,
	LineString = 2,
	MultiLineString = 3,
	Polygon = 4,
	MultiPolygon = 5,
	GeometryCollection = 6,
}

impl GeometryTypeCode {
	pub const ALL: [GeometryTypeCode; 7] = [
		GeometryTypeCode::Point,
		GeometryTypeCode::MultiPoint,
		GeometryTypeCode::LineString,
		GeometryTypeCode::MultiLineString,
		GeometryTypeCode::Polygon,
		GeometryTypeCode::MultiPolygon,
		GeometryTypeCode::GeometryCollection,
	];

	/// Looks up the code of a canonical type name such as `"MultiPolygon"`.
	///
	/// # Errors
	///
	/// Fails with [`GeometryCodecError::InvalidGeometryType`] for any other name.
	pub fn from_name(name: &str) -> Result<Self> {
		match Self::ALL.iter().find(|code| code.name() == name) {
			Some(code) => Ok(*code),
			None => bail!(GeometryCodecError::InvalidGeometryType(format!(
				"unknown type name '{name}'"
			))),
		}
	}

	/// Returns the canonical type name.
	#[must_use]
	pub fn name(&self) -> &'static str {
		match self {
			GeometryTypeCode::Point => "Point",
			GeometryTypeCode::MultiPoint => "MultiPoint",
			GeometryTypeCode::LineString => "LineString",
			GeometryTypeCode::MultiLineString => "MultiLineString",
			GeometryTypeCode::Polygon => "Polygon",
			GeometryTypeCode::MultiPolygon => "MultiPolygon",
			GeometryTypeCode::GeometryCollection => "GeometryCollection",
		}
	}

	#[must_use]
	pub fn as_u8(&self) -> u8 {
		*self as u8
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		*self == GeometryTypeCode::GeometryCollection
	}
}

impl TryFrom<u8> for GeometryTypeCode {
	type Error = anyhow::Error;

	fn try_from(value: u8) -> Result<Self> {
		match Self::ALL.get(value as usize) {
			Some(code) => Ok(*code),
			None => bail!(GeometryCodecError::InvalidGeometryType(format!(
				"unknown type code {value}"
			))),
		}
	}
}

impl Display for GeometryTypeCode {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
