//! This module provides the `ValueReaderSlice` struct for reading values from a borrowed byte slice.
//!
//! Besides the [`ValueReader`] methods it offers [`ValueReaderSlice::read_slice`], which returns the
//! next bytes as a sub-slice of the input without copying. Record framing relies on this to hand
//! shape payloads to their decoders.
//!
//! # Examples
//!
//! ```rust
//! use geoshape_core::io::{ValueReader, ValueReaderSlice};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let data = &[0x06, 0x14, 0x00, 0x00, 0x00];
//!
//!     let mut reader = ValueReaderSlice::new_le(data);
//!     assert_eq!(reader.read_u8()?, 6);
//!     assert_eq!(reader.read_i32()?, 20);
//!     assert!(!reader.has_remaining());
//!
//!     Ok(())
//! }
//! ```

use super::ValueReader;
use anyhow::{Result, anyhow, ensure};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::{
	io::{Cursor, Read},
	marker::PhantomData,
};

/// Reads values from a byte slice using the byte order `E`.
pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
	len: u64,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			len: slice.len() as u64,
			cursor: Cursor::new(slice),
		}
	}

	/// Returns the next `length` bytes as a sub-slice of the input and advances past them.
	///
	/// # Errors
	///
	/// Fails if fewer than `length` bytes are left; the position is unchanged in that case.
	pub fn read_slice(&mut self, length: u64) -> Result<&'a [u8]> {
		let start = self.cursor.position();
		let remaining = self.len.saturating_sub(start);
		ensure!(
			length <= remaining,
			"slice needs {length} bytes, but only {remaining} are left"
		);
		let end = start + length;
		let slice: &'a [u8] = *self.cursor.get_ref();
		let bytes = slice
			.get(start as usize..end as usize)
			.ok_or_else(|| anyhow!("slice {start}..{end} is out of bounds"))?;
		self.cursor.set_position(end);
		Ok(bytes)
	}

	/// Returns all bytes that have not been read yet, leaving the reader exhausted.
	pub fn read_rest(&mut self) -> &'a [u8] {
		let slice: &'a [u8] = *self.cursor.get_ref();
		let start = (self.cursor.position() as usize).min(slice.len());
		self.cursor.set_position(self.len);
		&slice[start..]
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	/// Creates a new `ValueReaderSlice` with little-endian byte order.
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	/// Creates a new `ValueReaderSlice` with big-endian byte order.
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn Read {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.len
	}

	fn position(&mut self) -> u64 {
		self.cursor.position()
	}

	fn set_position(&mut self, position: u64) -> Result<()> {
		ensure!(
			position <= self.len,
			"position {position} is outside of length {}",
			self.len
		);
		self.cursor.set_position(position);
		Ok(())
	}
}
