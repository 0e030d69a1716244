//! [`Value`] to MessagePack bytes.
//!
//! Each value is written in the smallest sub-format whose range covers it.

use msgpack_buffers::Writer;
use tracing::debug;

use crate::error::EncodeError;
use crate::marker::Marker;
use crate::value::{Map, Value};

/// Validates a payload length against the 32-bit length fields.
///
/// Lengths of `u32::MAX` and above are rejected.
pub(crate) fn check_length(length: usize) -> Result<u32, EncodeError> {
    match u32::try_from(length) {
        Ok(n) if n < u32::MAX => Ok(n),
        _ => Err(EncodeError::Overflow),
    }
}

/// Reusable MessagePack encoder. The output buffer is kept between calls.
#[derive(Debug, Default)]
pub struct MsgPackEncoder {
    pub writer: Writer,
}

impl MsgPackEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Creates an encoder whose output buffer starts with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            writer: Writer::with_capacity(capacity),
        }
    }

    /// Encodes `value`. On failure nothing written for this call survives.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, EncodeError> {
        self.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                debug!(written = self.writer.len(), error = %err, "MessagePack encode rejected");
                self.writer.reset();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Nil => self.write_nil(),
            Value::Bool(b) => self.write_boolean(*b),
            Value::Int(i) => self.write_integer(*i),
            Value::UInt(u) => self.write_u_integer(*u),
            Value::Float32(f) => self.write_f32(*f),
            Value::Float64(f) => self.write_f64(*f),
            Value::String(s) => return self.write_str(s),
            Value::Binary(b) => return self.write_bin(b),
            Value::Array(arr) => return self.write_arr(arr),
            Value::Map(map) => return self.write_map(map),
            Value::Ext(tag, data) => return self.write_ext(*tag, data),
        }
        Ok(())
    }

    pub fn write_nil(&mut self) {
        self.writer.u8(Marker::Null.into());
    }

    pub fn write_boolean(&mut self, b: bool) {
        let marker = if b { Marker::True } else { Marker::False };
        self.writer.u8(marker.into());
    }

    pub fn write_f32(&mut self, float: f32) {
        self.writer.u8f32(Marker::F32.into(), float);
    }

    pub fn write_f64(&mut self, float: f64) {
        self.writer.u8f64(Marker::F64.into(), float);
    }

    /// Positive fixint, then uint8/16/32/64.
    pub fn write_u_integer(&mut self, uint: u64) {
        let writer = &mut self.writer;
        if uint < 0x80 {
            writer.u8(Marker::FixPos(uint as u8).into());
        } else if uint <= 0xff {
            writer.u8u8(Marker::U8.into(), uint as u8);
        } else if uint <= 0xffff {
            writer.u8u16(Marker::U16.into(), uint as u16);
        } else if uint <= 0xffff_ffff {
            writer.u8u32(Marker::U32.into(), uint as u32);
        } else {
            writer.u8u64(Marker::U64.into(), uint);
        }
    }

    /// Non-negative integers take the unsigned path; negative ones use
    /// negative fixint, then int8/16/32/64.
    pub fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.write_u_integer(int as u64);
            return;
        }
        let writer = &mut self.writer;
        if int >= -0x20 {
            writer.u8(Marker::FixNeg(int as i8).into());
        } else if int >= -0x7f {
            writer.u8(Marker::I8.into());
            writer.i8(int as i8);
        } else if int >= i64::from(i16::MIN) {
            writer.u8(Marker::I16.into());
            writer.i16(int as i16);
        } else if int >= i64::from(i32::MIN) {
            writer.u8(Marker::I32.into());
            writer.i32(int as i32);
        } else {
            writer.u8(Marker::I64.into());
            writer.i64(int);
        }
    }

    pub fn write_str_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let length = check_length(length)?;
        if length < 0x20 {
            self.writer.u8(Marker::FixStr(length as u8).into());
        } else if length < 0xff {
            self.writer.u8u8(Marker::Str8.into(), length as u8);
        } else if length < 0xffff {
            self.writer.u8u16(Marker::Str16.into(), length as u16);
        } else {
            self.writer.u8u32(Marker::Str32.into(), length);
        }
        Ok(())
    }

    pub fn write_str(&mut self, s: &str) -> Result<(), EncodeError> {
        self.write_str_hdr(s.len())?;
        self.writer.utf8(s);
        Ok(())
    }

    pub fn write_bin_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let length = check_length(length)?;
        if length < 0xff {
            self.writer.u8u8(Marker::Bin8.into(), length as u8);
        } else if length < 0xffff {
            self.writer.u8u16(Marker::Bin16.into(), length as u16);
        } else {
            self.writer.u8u32(Marker::Bin32.into(), length);
        }
        Ok(())
    }

    pub fn write_bin(&mut self, buf: &[u8]) -> Result<(), EncodeError> {
        self.write_bin_hdr(buf.len())?;
        self.writer.buf(buf);
        Ok(())
    }

    pub fn write_arr_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let length = check_length(length)?;
        if length <= 0xf {
            self.writer.u8(Marker::FixArray(length as u8).into());
        } else if length < 0xffff {
            self.writer.u8u16(Marker::Array16.into(), length as u16);
        } else {
            self.writer.u8u32(Marker::Array32.into(), length);
        }
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> Result<(), EncodeError> {
        self.write_arr_hdr(arr.len())?;
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    pub fn write_map_hdr(&mut self, length: usize) -> Result<(), EncodeError> {
        let length = check_length(length)?;
        if length <= 0xf {
            self.writer.u8(Marker::FixMap(length as u8).into());
        } else if length < 0xffff {
            self.writer.u8u16(Marker::Map16.into(), length as u16);
        } else {
            self.writer.u8u32(Marker::Map32.into(), length);
        }
        Ok(())
    }

    pub fn write_map(&mut self, map: &Map) -> Result<(), EncodeError> {
        self.write_map_hdr(map.len())?;
        for (key, val) in map {
            self.write_any(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }

    /// Fixed-size forms win whenever the payload length matches one exactly.
    pub fn write_ext_hdr(&mut self, tag: i8, length: usize) -> Result<(), EncodeError> {
        let length = check_length(length)?;
        let fixed = match length {
            1 => Some(Marker::FixExt1),
            2 => Some(Marker::FixExt2),
            4 => Some(Marker::FixExt4),
            8 => Some(Marker::FixExt8),
            16 => Some(Marker::FixExt16),
            _ => None,
        };
        match fixed {
            Some(marker) => self.writer.u8(marker.into()),
            None if length < 0xff => self.writer.u8u8(Marker::Ext8.into(), length as u8),
            None if length < 0xffff => self.writer.u8u16(Marker::Ext16.into(), length as u16),
            None => self.writer.u8u32(Marker::Ext32.into(), length),
        }
        self.writer.i8(tag);
        Ok(())
    }

    pub fn write_ext(&mut self, tag: i8, data: &[u8]) -> Result<(), EncodeError> {
        self.write_ext_hdr(tag, data.len())?;
        self.writer.buf(data);
        Ok(())
    }
}
