//! Big-endian byte packing primitives shared by the MessagePack encoder and
//! decoder.

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error returned by bounds-checked [`Reader`] operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("cursor {position} is past the end of a {len}-byte buffer")]
    OutOfRange { position: usize, len: usize },
    #[error("invalid UTF-8")]
    InvalidUtf8,
}
