use msgpack_codec::{decode, decode_with_consumed, encode, DecodeError, Map, MsgPackDecoder, Value};

fn map(entries: Vec<(Value, Value)>) -> Value {
    Value::Map(entries.into_iter().collect::<Map>())
}

fn sample_values() -> Vec<Value> {
    vec![
        Value::Nil,
        Value::Bool(true),
        Value::Bool(false),
        Value::UInt(0),
        Value::UInt(0x80),
        Value::UInt(0x1234),
        Value::UInt(0x1234_5678),
        Value::UInt(u64::MAX),
        Value::Int(-1),
        Value::Int(-100),
        Value::Int(-30_000),
        Value::Int(-4_807_526_976),
        Value::Float32(-0.25),
        Value::Float64(3_456.123_456_789_022_4),
        Value::from(""),
        Value::from("abc"),
        Value::from("a".repeat(40)),
        Value::from("a".repeat(300)),
        Value::from("ünïcödé ✓"),
        Value::Binary(vec![]),
        Value::Binary(vec![0xde, 0xad, 0xbe, 0xef]),
        Value::Binary(vec![7; 300]),
        Value::Ext(1, vec![1]),
        Value::Ext(-2, vec![1, 2]),
        Value::Ext(3, vec![1, 2, 3, 4]),
        Value::Ext(4, vec![0; 8]),
        Value::Ext(5, vec![0; 16]),
        Value::Ext(6, vec![]),
        Value::Ext(7, vec![9; 3]),
        Value::Ext(8, vec![9; 300]),
        Value::Array(vec![]),
        Value::Array(vec![
            Value::UInt(1),
            Value::Array(vec![Value::UInt(2)]),
            map(vec![(Value::from("k"), Value::Bool(true))]),
        ]),
        Value::Array(vec![Value::Nil; 20]),
        map(vec![]),
        map(vec![(Value::from("foo"), Value::from("bar"))]),
        map((0u8..20).map(|i| (Value::from(i), Value::from(i))).collect()),
        map(vec![(
            Value::Array(vec![Value::Int(-1)]),
            map(vec![(Value::Nil, Value::Float64(0.5))]),
        )]),
    ]
}

#[test]
fn msgpack_decoder_roundtrip_matrix() {
    for value in sample_values() {
        let encoded = encode(&value).unwrap();
        let decoded = decode(&encoded)
            .unwrap_or_else(|e| panic!("decode failed for {value:?}: {e}"));
        assert_eq!(decoded, value);
    }
}

#[test]
fn msgpack_decoder_truncation_matrix() {
    for value in sample_values() {
        let encoded = encode(&value).unwrap();
        let truncated = &encoded[..encoded.len() - 1];
        assert_eq!(
            decode(truncated),
            Err(DecodeError::Insufficient),
            "truncated {value:?}"
        );
    }
}

#[test]
fn msgpack_decoder_every_prefix_of_nested_value_fails() {
    let value = map(vec![
        (Value::from("list"), Value::Array(vec![Value::UInt(300), Value::Float32(1.0)])),
        (Value::from("bin"), Value::Binary(vec![1, 2, 3])),
        (Value::from("ext"), Value::Ext(9, vec![0; 4])),
    ]);
    let encoded = encode(&value).unwrap();
    for end in 0..encoded.len() {
        assert_eq!(decode(&encoded[..end]), Err(DecodeError::Insufficient));
    }
    assert_eq!(decode(&encoded), Ok(value));
}

#[test]
fn msgpack_decoder_trailing_data_matrix() {
    for value in sample_values() {
        let mut encoded = encode(&value).unwrap();
        encoded.push(0x00);
        assert_eq!(decode(&encoded), Err(DecodeError::ExtraData));
    }
}

#[test]
fn msgpack_decoder_empty_input() {
    assert_eq!(decode(&[]), Err(DecodeError::Insufficient));
}

#[test]
fn msgpack_decoder_reserved_tag() {
    for tail in [&[][..], &[0x00][..], &[0xc0, 0xc0][..], &[0xff; 8][..]] {
        let mut input = vec![0xc1];
        input.extend_from_slice(tail);
        assert!(decode(&input).is_err());
    }
}

#[test]
fn msgpack_decoder_invalid_utf8() {
    assert_eq!(decode(&[0xa2, 0xc3, 0x28]), Err(DecodeError::Invalid));
    assert_eq!(decode(&[0xd9, 0x01, 0xff]), Err(DecodeError::Invalid));
    assert_eq!(decode(&[0xda, 0x00, 0x01, 0x80]), Err(DecodeError::Invalid));
}

#[test]
fn msgpack_decoder_scalar_wire_matrix() {
    assert_eq!(decode(&[0x00]), Ok(Value::UInt(0)));
    assert_eq!(decode(&[0x7f]), Ok(Value::UInt(127)));
    assert_eq!(decode(&[0xc0]), Ok(Value::Nil));
    assert_eq!(decode(&[0xc2]), Ok(Value::Bool(false)));
    assert_eq!(decode(&[0xc3]), Ok(Value::Bool(true)));
    assert_eq!(decode(&[0xce, 0, 1, 0, 0]), Ok(Value::UInt(65_536)));
    assert_eq!(decode(&[0xd2, 0xff, 0xff, 0xff, 0xfe]), Ok(Value::Int(-2)));
    assert_eq!(
        decode(&[0xca, 0x3f, 0xc0, 0x00, 0x00]),
        Ok(Value::Float32(1.5))
    );
    assert_eq!(
        decode(&[0xcb, 0x3f, 0xf8, 0, 0, 0, 0, 0, 0]),
        Ok(Value::Float64(1.5))
    );
}

#[test]
fn msgpack_decoder_accepts_non_minimal_forms() {
    assert_eq!(decode(&[0xcc, 0x01]), Ok(Value::UInt(1)));
    assert_eq!(decode(&[0xcf, 0, 0, 0, 0, 0, 0, 0, 0x05]), Ok(Value::UInt(5)));
    assert_eq!(decode(&[0xd9, 0x01, b'a']), Ok(Value::from("a")));
    assert_eq!(decode(&[0xdb, 0, 0, 0, 0]), Ok(Value::from("")));
    assert_eq!(decode(&[0xdc, 0x00, 0x01, 0xc0]), Ok(Value::Array(vec![Value::Nil])));
    assert_eq!(decode(&[0xdd, 0, 0, 0, 0]), Ok(Value::Array(vec![])));
    assert_eq!(decode(&[0xde, 0x00, 0x00]), Ok(map(vec![])));
    assert_eq!(
        decode(&[0xdf, 0, 0, 0, 1, 0xa1, b'k', 0x02]),
        Ok(map(vec![(Value::from("k"), Value::UInt(2))]))
    );
    assert_eq!(decode(&[0xc5, 0x00, 0x02, 7, 8]), Ok(Value::Binary(vec![7, 8])));
    assert_eq!(decode(&[0xc6, 0, 0, 0, 1, 9]), Ok(Value::Binary(vec![9])));
    assert_eq!(decode(&[0xc7, 0x01, 0x05, 0xaa]), Ok(Value::Ext(5, vec![0xaa])));
    assert_eq!(decode(&[0xc8, 0x00, 0x00, 0x80]), Ok(Value::Ext(-128, vec![])));
}

#[test]
fn msgpack_decoder_ext_type_is_signed() {
    assert_eq!(decode(&[0xd4, 0xff, 0x00]), Ok(Value::Ext(-1, vec![0x00])));
    assert_eq!(
        decode(&[0xd5, 0x80, 0x01, 0x02]),
        Ok(Value::Ext(-128, vec![0x01, 0x02]))
    );
}

#[test]
fn msgpack_decoder_hostile_lengths() {
    // Counts far beyond the input must fail cleanly without huge allocations.
    assert_eq!(
        decode(&[0xdd, 0x7f, 0xff, 0xff, 0xff]),
        Err(DecodeError::Insufficient)
    );
    assert_eq!(
        decode(&[0xdf, 0x7f, 0xff, 0xff, 0xff, 0xc0]),
        Err(DecodeError::Insufficient)
    );
    assert_eq!(
        decode(&[0xc6, 0x7f, 0xff, 0xff, 0xff, 0x00]),
        Err(DecodeError::Insufficient)
    );
    assert_eq!(
        decode(&[0xc9, 0xff, 0xff, 0xff, 0xff, 0x01]),
        Err(DecodeError::Overflow)
    );
    assert_eq!(
        decode(&[0xc6, 0xff, 0xff, 0xff, 0xff]),
        Err(DecodeError::Overflow)
    );
}

#[test]
fn msgpack_decoder_duplicate_keys_last_write_wins() {
    let input = [0x83, 0xa1, b'a', 0x01, 0xa1, b'b', 0x02, 0xa1, b'a', 0x03];
    let expected = map(vec![
        (Value::from("a"), Value::UInt(3)),
        (Value::from("b"), Value::UInt(2)),
    ]);
    assert_eq!(decode(&input), Ok(expected));
}

#[test]
fn msgpack_decoder_mixed_integer_keys_collapse() {
    // UInt(1) and Int(1) are the same key.
    let input = [0x82, 0x01, 0xc2, 0xd0, 0x01, 0xc3];
    let value = decode(&input).unwrap();
    let map = value.as_map().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&Value::UInt(1)), Some(&Value::Bool(true)));
}

#[test]
fn msgpack_decoder_with_consumed() {
    let mut input = encode(&Value::from("head")).unwrap();
    let head_len = input.len();
    input.extend_from_slice(&[0xc3, 0xc0]);

    let (value, consumed) = decode_with_consumed(&input).unwrap();
    assert_eq!(value, Value::from("head"));
    assert_eq!(consumed, head_len);

    let (value, consumed) = decode_with_consumed(&input[head_len..]).unwrap();
    assert_eq!(value, Value::Bool(true));
    assert_eq!(consumed, 1);
}

#[test]
fn msgpack_decoder_stream_of_values() {
    let mut input = Vec::new();
    for value in sample_values() {
        input.extend(encode(&value).unwrap());
    }
    let mut decoder = MsgPackDecoder::new(&input);
    for value in sample_values() {
        assert_eq!(decoder.read_any().unwrap(), value);
    }
    assert!(decoder.is_finished());
}

#[test]
fn msgpack_decoder_deep_nesting() {
    let depth = 200;
    let mut input = vec![0x91; depth];
    input.push(0xc0);
    let mut value = decode(&input).unwrap();
    for _ in 0..depth {
        value = match value {
            Value::Array(mut items) => {
                assert_eq!(items.len(), 1);
                items.remove(0)
            }
            other => panic!("expected array, got {other:?}"),
        };
    }
    assert_eq!(value, Value::Nil);
}
