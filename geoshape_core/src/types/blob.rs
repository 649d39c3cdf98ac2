//! This module provides the [`Blob`] struct, an owned byte buffer used for encoded records and
//! shape payloads.
//!
//! # Examples
//!
//! ```rust
//! use geoshape_core::Blob;
//!
//! let blob = Blob::from(vec![6u8, 0, 0, 0]);
//! assert_eq!(blob.len(), 4);
//! assert_eq!(blob.as_slice()[0], 6);
//! assert_eq!(blob.into_vec(), vec![6, 0, 0, 0]);
//! ```

use std::fmt::Debug;

/// A thin wrapper around [`Vec<u8>`] holding encoded bytes.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		self.0.as_slice()
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Returns the number of bytes as `u64`, matching the position type of the readers.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(value: &[u8; N]) -> Self {
		Blob(value.to_vec())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for Blob {
	/// Prints the bytes as space separated hex pairs, e.g. `Blob([06 14 00 00 00])`.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let hex: Vec<String> = self.0.iter().map(|b| format!("{b:02x}")).collect();
		write!(f, "Blob([{}])", hex.join(" "))
	}
}
