//! MessagePack bytes to [`Value`].
//!
//! Recursive descent over a borrowed slice. The cursor only moves forward and
//! every read is bounds checked, so truncated input surfaces as
//! [`DecodeError::Insufficient`] instead of a panic.
//!
//! Nesting depth is limited only by the input: every level costs at least one
//! byte, and each level is one stack frame.

use msgpack_buffers::Reader;

use crate::error::DecodeError;
use crate::marker::Marker;
use crate::value::{Map, Value};

pub struct MsgPackDecoder<'a> {
    reader: Reader<'a>,
}

impl<'a> MsgPackDecoder<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            reader: Reader::new(input),
        }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.reader.position()
    }

    /// Whether every input byte has been consumed.
    pub fn is_finished(&self) -> bool {
        self.reader.is_empty()
    }

    /// Decodes exactly one value spanning the whole input.
    pub fn decode(mut self) -> Result<Value, DecodeError> {
        let value = self.read_any()?;
        if !self.is_finished() {
            return Err(DecodeError::ExtraData);
        }
        Ok(value)
    }

    /// Reads one value at the cursor and advances past it.
    pub fn read_any(&mut self) -> Result<Value, DecodeError> {
        let marker = Marker::from_u8(self.reader.u8()?);
        match marker {
            Marker::FixPos(n) => Ok(Value::UInt(u64::from(n))),
            Marker::FixMap(n) => self.read_map(usize::from(n)),
            Marker::FixArray(n) => self.read_arr(usize::from(n)),
            Marker::FixStr(n) => self.read_str(usize::from(n)),
            Marker::Null => Ok(Value::Nil),
            Marker::Reserved => Err(DecodeError::Insufficient),
            Marker::False => Ok(Value::Bool(false)),
            Marker::True => Ok(Value::Bool(true)),
            Marker::Bin8 => {
                let n = self.len8()?;
                self.read_bin(n)
            }
            Marker::Bin16 => {
                let n = self.len16()?;
                self.read_bin(n)
            }
            Marker::Bin32 => {
                let n = self.len32()?;
                self.read_bin(n)
            }
            Marker::Ext8 => {
                let n = self.len8()?;
                self.read_ext(n)
            }
            Marker::Ext16 => {
                let n = self.len16()?;
                self.read_ext(n)
            }
            Marker::Ext32 => {
                let n = self.len32()?;
                self.read_ext(n)
            }
            Marker::F32 => Ok(Value::Float32(self.reader.f32()?)),
            Marker::F64 => Ok(Value::Float64(self.reader.f64()?)),
            Marker::U8 => Ok(Value::UInt(u64::from(self.reader.u8()?))),
            Marker::U16 => Ok(Value::UInt(u64::from(self.reader.u16()?))),
            Marker::U32 => Ok(Value::UInt(u64::from(self.reader.u32()?))),
            Marker::U64 => Ok(Value::UInt(self.reader.u64()?)),
            Marker::I8 => Ok(Value::Int(i64::from(self.reader.i8()?))),
            Marker::I16 => Ok(Value::Int(i64::from(self.reader.i16()?))),
            Marker::I32 => Ok(Value::Int(i64::from(self.reader.i32()?))),
            Marker::I64 => Ok(Value::Int(self.reader.i64()?)),
            Marker::FixExt1 => self.read_ext(1),
            Marker::FixExt2 => self.read_ext(2),
            Marker::FixExt4 => self.read_ext(4),
            Marker::FixExt8 => self.read_ext(8),
            Marker::FixExt16 => self.read_ext(16),
            Marker::Str8 => {
                let n = self.len8()?;
                self.read_str(n)
            }
            Marker::Str16 => {
                let n = self.len16()?;
                self.read_str(n)
            }
            Marker::Str32 => {
                let n = self.len32()?;
                self.read_str(n)
            }
            Marker::Array16 => {
                let n = self.len16()?;
                self.read_arr(n)
            }
            Marker::Array32 => {
                let n = self.len32()?;
                self.read_arr(n)
            }
            Marker::Map16 => {
                let n = self.len16()?;
                self.read_map(n)
            }
            Marker::Map32 => {
                let n = self.len32()?;
                self.read_map(n)
            }
            Marker::FixNeg(n) => Ok(Value::Int(i64::from(n))),
        }
    }

    #[inline]
    fn len8(&mut self) -> Result<usize, DecodeError> {
        Ok(usize::from(self.reader.u8()?))
    }

    #[inline]
    fn len16(&mut self) -> Result<usize, DecodeError> {
        Ok(usize::from(self.reader.u16()?))
    }

    /// 32-bit length field; `0xffffffff` is beyond the format's limit.
    #[inline]
    fn len32(&mut self) -> Result<usize, DecodeError> {
        let n = self.reader.u32()?;
        if n == u32::MAX {
            return Err(DecodeError::Overflow);
        }
        usize::try_from(n).map_err(|_| DecodeError::Overflow)
    }

    /// Every element takes at least one byte, so a declared count can never
    /// need more slots than there are bytes left.
    #[inline]
    fn capacity_hint(&self, count: usize) -> usize {
        count.min(self.reader.remaining())
    }

    fn read_str(&mut self, size: usize) -> Result<Value, DecodeError> {
        Ok(Value::String(self.reader.utf8(size)?.to_owned()))
    }

    fn read_bin(&mut self, size: usize) -> Result<Value, DecodeError> {
        Ok(Value::Binary(self.reader.buf(size)?.to_vec()))
    }

    fn read_ext(&mut self, size: usize) -> Result<Value, DecodeError> {
        let tag = self.reader.i8()?;
        let data = self.reader.buf(size)?.to_vec();
        Ok(Value::Ext(tag, data))
    }

    fn read_arr(&mut self, size: usize) -> Result<Value, DecodeError> {
        let mut arr = Vec::with_capacity(self.capacity_hint(size));
        for _ in 0..size {
            arr.push(self.read_any()?);
        }
        Ok(Value::Array(arr))
    }

    /// Duplicate keys keep the last value.
    fn read_map(&mut self, size: usize) -> Result<Value, DecodeError> {
        let mut map = Map::with_capacity(self.capacity_hint(size));
        for _ in 0..size {
            let key = self.read_any()?;
            let val = self.read_any()?;
            map.insert(key, val);
        }
        Ok(Value::Map(map))
    }
}
