//! Convenience MessagePack helpers.

use tracing::{debug, trace};

use crate::{DecodeError, EncodeError, MsgPackDecoder, MsgPackEncoder, Value};

/// Encodes `value` into a fresh buffer.
pub fn encode(value: &Value) -> Result<Vec<u8>, EncodeError> {
    let mut encoder = MsgPackEncoder::new();
    let bytes = encoder.encode(value)?;
    trace!(len = bytes.len(), "encoded MessagePack value");
    Ok(bytes)
}

/// Decodes exactly one value occupying all of `blob`.
///
/// Bytes left over after the value fail with [`DecodeError::ExtraData`].
pub fn decode(blob: &[u8]) -> Result<Value, DecodeError> {
    let (value, consumed) = decode_with_consumed(blob)?;
    if consumed != blob.len() {
        debug!(
            consumed,
            len = blob.len(),
            "trailing bytes after MessagePack value"
        );
        return Err(DecodeError::ExtraData);
    }
    Ok(value)
}

/// Decodes the first value in `blob` and reports how many bytes it used.
///
/// Unlike [`decode`], trailing bytes are left for the caller.
pub fn decode_with_consumed(blob: &[u8]) -> Result<(Value, usize), DecodeError> {
    trace!(len = blob.len(), "decoding MessagePack value");
    let mut decoder = MsgPackDecoder::new(blob);
    let value = decoder.read_any()?;
    Ok((value, decoder.position()))
}
