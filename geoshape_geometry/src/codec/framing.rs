use super::{GeometryCodecError, GeometryTypeCode};
use anyhow::{Result, bail};
use byteorder::LE;
use geoshape_core::{
	Blob,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};
use log::trace;

/// Splits a record into its shape payloads without looking into them.
///
/// A collection record yields one payload per `i32` length prefix, any other record yields the
/// bytes after the type code as its single payload. After the first error the iterator is fused.
pub struct RecordReader<'a> {
	reader: ValueReaderSlice<'a, LE>,
	type_code: GeometryTypeCode,
	failed: bool,
}

impl<'a> RecordReader<'a> {
	/// Reads the type code of a non-empty record.
	///
	/// # Errors
	///
	/// Fails with [`GeometryCodecError::MalformedRecord`] on an empty record and with
	/// [`GeometryCodecError::InvalidGeometryType`] on an unknown type code.
	pub fn new(record: &'a [u8]) -> Result<RecordReader<'a>> {
		let mut reader = ValueReaderSlice::new_le(record);
		if !reader.has_remaining() {
			bail!(GeometryCodecError::MalformedRecord(String::from(
				"record has no type code"
			)));
		}
		let type_code = GeometryTypeCode::try_from(reader.read_u8()?)?;
		trace!("record of type {type_code} with {} payload bytes", record.len() - 1);
		Ok(RecordReader {
			reader,
			type_code,
			failed: false,
		})
	}

	#[must_use]
	pub fn type_code(&self) -> GeometryTypeCode {
		self.type_code
	}

	#[must_use]
	pub fn is_collection(&self) -> bool {
		self.type_code.is_collection()
	}

	fn read_segment(&mut self) -> Result<&'a [u8]> {
		if !self.is_collection() {
			return Ok(self.reader.read_rest());
		}

		let remaining = self.reader.remaining();
		if remaining < 4 {
			bail!(GeometryCodecError::MalformedRecord(format!(
				"length prefix needs 4 bytes, but only {remaining} are left"
			)));
		}
		let length = self.reader.read_i32()?;
		let remaining = self.reader.remaining();
		if length < 0 {
			bail!(GeometryCodecError::MalformedRecord(format!(
				"negative payload length {length}"
			)));
		}
		if length as u64 > remaining {
			bail!(GeometryCodecError::MalformedRecord(format!(
				"payload length {length} exceeds the {remaining} remaining bytes"
			)));
		}
		self.reader.read_slice(length as u64)
	}
}

impl<'a> Iterator for RecordReader<'a> {
	type Item = Result<&'a [u8]>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.failed || !self.reader.has_remaining() {
			return None;
		}
		let segment = self.read_segment();
		match &segment {
			Ok(payload) => trace!("read shape payload of {} bytes", payload.len()),
			Err(_) => self.failed = true,
		}
		Some(segment)
	}
}

/// Assembles a record from a type code and shape payloads.
pub struct RecordWriter {
	writer: ValueWriterBlob<LE>,
	is_collection: bool,
	payloads: usize,
}

impl RecordWriter {
	/// Starts a record by writing its type code.
	///
	/// # Errors
	///
	/// Fails if the type code can not be written.
	pub fn new(type_code: GeometryTypeCode, capacity: usize) -> Result<RecordWriter> {
		let mut writer = ValueWriterBlob::<LE>::with_capacity(capacity);
		writer.write_u8(type_code.as_u8())?;
		Ok(RecordWriter {
			writer,
			is_collection: type_code.is_collection(),
			payloads: 0,
		})
	}

	/// Appends one shape payload, prefixed with its length inside a collection.
	///
	/// # Errors
	///
	/// Fails for a second payload outside a collection and for payloads longer than `i32::MAX`.
	pub fn write_payload(&mut self, payload: &Blob) -> Result<()> {
		if self.is_collection {
			let length = match i32::try_from(payload.len()) {
				Ok(length) => length,
				Err(_) => bail!(GeometryCodecError::MalformedRecord(format!(
					"payload of {} bytes is too long for a length prefix",
					payload.len()
				))),
			};
			self.writer.write_i32(length)?;
		} else if self.payloads > 0 {
			bail!("a record that is not a collection holds exactly one shape");
		}
		self.writer.write_blob(payload)?;
		self.payloads += 1;
		Ok(())
	}

	#[must_use]
	pub fn into_blob(self) -> Blob {
		self.writer.into_blob()
	}
}
