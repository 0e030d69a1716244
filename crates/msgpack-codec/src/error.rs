//! MessagePack encode/decode error types.

use msgpack_buffers::BufferError;
use thiserror::Error;

/// Error type for MessagePack encoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// A string, binary, array, map or ext payload is too long for a 32-bit
    /// length field.
    #[error("payload length does not fit a 32-bit MessagePack length field")]
    Overflow,
}

/// Error type for MessagePack decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The cursor was moved past the end of the input.
    #[error("cursor moved past the end of the input")]
    OutOfRange,
    /// The input ended before a value was complete, or the reserved 0xc1
    /// prefix was read.
    #[error("insufficient input")]
    Insufficient,
    /// The bytes are present but malformed.
    #[error("invalid MessagePack data")]
    Invalid,
    /// A complete top-level value was followed by unconsumed bytes.
    #[error("trailing bytes after top-level value")]
    ExtraData,
    /// A declared length or count does not fit the 32-bit limit.
    #[error("declared length exceeds the 32-bit MessagePack limit")]
    Overflow,
}

impl From<BufferError> for DecodeError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => DecodeError::Insufficient,
            BufferError::OutOfRange { .. } => DecodeError::OutOfRange,
            BufferError::InvalidUtf8 => DecodeError::Invalid,
        }
    }
}
