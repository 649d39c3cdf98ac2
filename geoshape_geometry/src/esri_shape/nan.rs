//! Legacy "no data" handling: shape files written by older tools store an empty coordinate as a
//! huge negative double instead of NaN.

/// Values below this threshold are legacy "no data" markers.
pub const LEGACY_NAN_THRESHOLD: f64 = -1.0e38;

/// Maps a legacy "no data" value to NaN and returns every other value unchanged.
#[must_use]
pub fn translate_from_legacy_nan(value: f64) -> f64 {
	if value < LEGACY_NAN_THRESHOLD { f64::NAN } else { value }
}

/// Returns `true` if `value` marks a missing coordinate, either as NaN or as a legacy marker.
#[must_use]
pub fn is_esri_nan(value: f64) -> bool {
	translate_from_legacy_nan(value).is_nan()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(f64::NAN, true)]
	#[case(-1.0e39, true)]
	#[case(f64::MIN, true)]
	#[case(f64::NEG_INFINITY, true)]
	#[case(-1.0e38, false)]
	#[case(-1.0e37, false)]
	#[case(0.0, false)]
	#[case(f64::MAX, false)]
	fn esri_nan(#[case] value: f64, #[case] expected: bool) {
		assert_eq!(is_esri_nan(value), expected);
	}

	#[test]
	fn translate_keeps_regular_values() {
		assert_eq!(translate_from_legacy_nan(12.5), 12.5);
		assert_eq!(translate_from_legacy_nan(-180.0), -180.0);
		assert!(translate_from_legacy_nan(-2.0e38).is_nan());
	}
}
