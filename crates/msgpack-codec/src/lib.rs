//! MessagePack codec over a tagged [`Value`] model.
//!
//! [`encode`] writes a value in the most compact sub-format for each node;
//! [`decode`] parses exactly one value and rejects truncated, malformed or
//! trailing input.
//!
//! ```
//! use msgpack_codec::{decode, encode, Value};
//!
//! let value = Value::Array(vec![Value::from(1u8), Value::from("two"), Value::Nil]);
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes, [0x93, 0x01, 0xa3, b't', b'w', b'o', 0xc0]);
//! assert_eq!(decode(&bytes).unwrap(), value);
//! ```

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod json;
pub mod marker;
pub mod util;
pub mod value;

pub use decoder::MsgPackDecoder;
pub use encoder::MsgPackEncoder;
pub use error::{DecodeError, EncodeError};
pub use marker::Marker;
pub use util::{decode, decode_with_consumed, encode};
pub use value::{Map, Value};
