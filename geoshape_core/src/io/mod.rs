//! Readers and writers for fixed-width binary values.
//!
//! [`ValueReader`] and [`ValueWriter`] are generic over a `byteorder` byte order, so the same code
//! reads little-endian shape payloads and big-endian headers alike. [`ValueReaderSlice`] reads from a
//! borrowed byte slice and can hand out zero-copy sub-slices; [`ValueWriterBlob`] writes into an
//! in-memory [`Blob`](crate::Blob).
//!
//! ```rust
//! use geoshape_core::io::*;
//!
//! let mut writer = ValueWriterBlob::new_le();
//! writer.write_i32(20).unwrap();
//! let blob = writer.into_blob();
//!
//! let mut reader = ValueReaderSlice::new_le(blob.as_slice());
//! assert_eq!(reader.read_i32().unwrap(), 20);
//! ```

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
