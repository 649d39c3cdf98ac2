//! This module defines the `ValueWriter` trait for writing fixed-width values in a chosen byte order.
//!
//! # Examples
//!
//! ```rust
//! use geoshape_core::io::{ValueWriter, ValueWriterBlob};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut writer = ValueWriterBlob::new_le();
//!     writer.write_u8(6)?;
//!     writer.write_i32(20)?;
//!     assert_eq!(writer.into_blob().into_vec(), vec![6, 20, 0, 0, 0]);
//!     Ok(())
//! }
//! ```

use crate::Blob;
use anyhow::Result;
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Writes values in the byte order `E` to an underlying [`Write`].
pub trait ValueWriter<E: ByteOrder> {
	/// Returns a mutable reference to the underlying writer.
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Returns the number of bytes written so far.
	fn position(&mut self) -> Result<u64>;

	fn is_empty(&mut self) -> Result<bool> {
		Ok(self.position()? == 0)
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	fn write_i32(&mut self, value: i32) -> Result<()> {
		Ok(self.get_writer().write_i32::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	/// Writes every value of `values` as `f64`, e.g. the four doubles of a bounding box.
	fn write_f64_slice(&mut self, values: &[f64]) -> Result<()> {
		for value in values {
			self.write_f64(*value)?;
		}
		Ok(())
	}

	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		self.get_writer().write_all(buf)?;
		Ok(())
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_slice(blob.as_slice())
	}
}
