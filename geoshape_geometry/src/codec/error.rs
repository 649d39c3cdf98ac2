use std::fmt::Display;

/// Failures of the record codec and the envelope reader.
///
/// The codec raises these through `anyhow`; callers find them again with
/// `error.downcast_ref::<GeometryCodecError>()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeometryCodecError {
	/// A type name without a record type code, or a type code byte that is not defined.
	InvalidGeometryType(String),
	/// A length prefix or payload that does not fit the record.
	MalformedRecord(String),
	/// One coordinate of a point or bounding box marks "no value" while a sibling does not.
	InconsistentEmptyMarker(String),
}

impl Display for GeometryCodecError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeometryCodecError::InvalidGeometryType(msg) => write!(f, "invalid geometry type: {msg}"),
			GeometryCodecError::MalformedRecord(msg) => write!(f, "malformed geometry record: {msg}"),
			GeometryCodecError::InconsistentEmptyMarker(msg) => write!(f, "inconsistent empty marker: {msg}"),
		}
	}
}

impl std::error::Error for GeometryCodecError {}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Result, bail};

	fn fail() -> Result<()> {
		bail!(GeometryCodecError::MalformedRecord(String::from("length 30 exceeds 4 remaining bytes")))
	}

	#[test]
	fn display() {
		assert_eq!(
			GeometryCodecError::InvalidGeometryType(String::from("type code 9")).to_string(),
			"invalid geometry type: type code 9"
		);
		assert_eq!(
			GeometryCodecError::InconsistentEmptyMarker(String::from("x is NaN, y is 1")).to_string(),
			"inconsistent empty marker: x is NaN, y is 1"
		);
	}

	#[test]
	fn downcast_through_anyhow() {
		let error = fail().unwrap_err();
		assert_eq!(
			error.downcast_ref::<GeometryCodecError>(),
			Some(&GeometryCodecError::MalformedRecord(String::from(
				"length 30 exceeds 4 remaining bytes"
			)))
		);
	}
}
