// This module defines the `ValueReader` trait for reading fixed-width values from a byte source.
//
// Implementations provide access to an underlying `Read` source together with its length and
// position; bounds checks and typed reads in the chosen byte order are derived from that.

use anyhow::{Context, Result, ensure};
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::Read;

/// Reads values in the byte order `E` from a bounded source.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	/// Returns the underlying reader to access raw bytes.
	fn get_reader(&mut self) -> &mut dyn Read;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current read position.
	fn position(&mut self) -> u64;

	/// Moves the read position. Positions past the end are rejected; the end itself is allowed.
	fn set_position(&mut self, position: u64) -> Result<()>;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes left to read.
	fn remaining(&mut self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Fails unless at least `length` bytes are left, naming `what` in the error.
	fn ensure_remaining(&mut self, length: u64, what: &str) -> Result<()> {
		let remaining = self.remaining();
		ensure!(
			length <= remaining,
			"{what} needs {length} bytes, but only {remaining} are left"
		);
		Ok(())
	}

	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	fn read_i32(&mut self) -> Result<i32> {
		Ok(self.get_reader().read_i32::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	/// Reads `N` consecutive `f64` values, e.g. the four doubles of a bounding box.
	fn read_f64_array<const N: usize>(&mut self) -> Result<[f64; N]>
	where
		Self: Sized,
	{
		let mut values = [0f64; N];
		self
			.get_reader()
			.read_f64_into::<E>(&mut values)
			.context("Failed to read f64 array")?;
		Ok(values)
	}

	/// Skips `length` bytes.
	fn skip(&mut self, length: u64) -> Result<()> {
		self.ensure_remaining(length, "skip")?;
		let position = self.position() + length;
		self.set_position(position)
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueReaderSlice;
	use super::*;

	#[test]
	fn test_is_empty() {
		assert!(ValueReaderSlice::new_le(&[]).is_empty());
		assert!(!ValueReaderSlice::new_le(&[0]).is_empty());
	}

	#[test]
	fn test_read_i32_le_and_be() {
		assert_eq!(ValueReaderSlice::new_le(&[0x14, 0, 0, 0]).read_i32().unwrap(), 20);
		assert_eq!(ValueReaderSlice::new_be(&[0, 0, 0, 0x14]).read_i32().unwrap(), 20);
		assert_eq!(ValueReaderSlice::new_le(&[0xFF; 4]).read_i32().unwrap(), -1);
	}

	#[test]
	fn test_read_f64_le() {
		let mut reader = ValueReaderSlice::new_le(&[0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
		assert_eq!(reader.read_f64().unwrap(), 1.0);
		assert!(!reader.has_remaining());
	}

	#[test]
	fn test_read_f64_array() {
		let mut bytes = Vec::new();
		for value in [1.0f64, -2.0, 3.5] {
			bytes.extend_from_slice(&value.to_le_bytes());
		}
		let mut reader = ValueReaderSlice::new_le(&bytes);
		assert_eq!(reader.read_f64_array::<3>().unwrap(), [1.0, -2.0, 3.5]);
	}

	#[test]
	fn test_read_f64_array_truncated() {
		let mut reader = ValueReaderSlice::new_le(&[0; 12]);
		assert!(reader.read_f64_array::<2>().is_err());
	}

	#[test]
	fn test_reader_is_object_safe() {
		let mut slice = ValueReaderSlice::new_le(&[0x02, 0x01, 0, 0, 0]);
		let reader: &mut dyn ValueReader<'_, byteorder::LittleEndian> = &mut slice;
		assert_eq!(reader.read_u8().unwrap(), 2);
		assert_eq!(reader.read_i32().unwrap(), 1);
		assert!(!reader.has_remaining());
	}

	#[test]
	fn test_skip() {
		let mut reader = ValueReaderSlice::new_le(&[1, 2, 3]);
		reader.skip(1).unwrap();
		assert_eq!(reader.read_u8().unwrap(), 2);
		reader.skip(1).unwrap();
		assert!(!reader.has_remaining());
		assert!(reader.skip(1).is_err());
	}

	#[test]
	fn test_ensure_remaining_message() {
		let mut reader = ValueReaderSlice::new_le(&[1, 2]);
		let error = reader.ensure_remaining(4, "length prefix").unwrap_err();
		assert_eq!(
			error.to_string(),
			"length prefix needs 4 bytes, but only 2 are left"
		);
	}
}
