//! Record codec
//!
//! Encoding and decoding for the binary data files. The field order and
//! framing ARE the schema; the files carry no header, no record count, no
//! delimiter and no checksum.
//!
//! ## Wire Format
//!
//! Per-field encoding:
//! - string: unsigned LEB128 byte-length prefix (7-bit groups, low group
//!   first, high bit = continuation), then UTF-8 bytes
//! - i32: fixed-width little-endian
//! - i64: fixed-width little-endian
//!
//! ### Student Record
//! ```text
//! ┌──────────┬─────────┬──────────────┬───────┬───────┬──────────┐
//! │ FullName │ Age(i32)│ YearOfBirth  │ Group │ Login │ Password │
//! │          │         │    (i32)     │       │       │          │
//! ├──────────┴─────────┴──────────────┴───────┴───────┴──────────┤
//! │ GradeCount(i32) × [ Subject │ Score(i32) │ Date(i64) ]       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ### Teacher Record
//! ```text
//! ┌──────────┬──────────────┬───────┬───────┬──────────┐
//! │ FullName │ YearOfBirth  │ Group │ Login │ Password │
//! │          │    (i32)     │       │       │          │
//! ├──────────┴──────────────┴───────┴───────┴──────────┤
//! │ SubjectCount(i32) × [ Subject ]                    │
//! └────────────────────────────────────────────────────┘
//! ```
//!
//! A file is zero or more concatenated records; the decoder consumes records
//! until the stream position reaches the total length. An empty stream is an
//! empty collection. A truncated or malformed stream is a fatal
//! [`Corruption`](crate::GradebookError::Corruption) error — there is no
//! partial-record recovery.

mod reader;
mod writer;

pub use reader::{decode_students, decode_teachers, RecordReader};
pub use writer::{encode_students, encode_teachers, RecordWriter};
