//! Conversion between [`Value`] and `serde_json::Value`.
//!
//! JSON has no binary, extension or non-string-key map types, so the
//! conversion to JSON is lossy: byte payloads become base64 data URIs and
//! non-string keys are rendered as compact JSON text.

use base64::Engine;
use serde_json::Value as Json;

use crate::value::{Map, Value};

const BIN_URI_START: &str = "data:application/octet-stream;base64,";

fn to_data_uri(data: &[u8]) -> String {
    let b64 = base64::engine::general_purpose::STANDARD.encode(data);
    format!("{BIN_URI_START}{b64}")
}

impl From<Json> for Value {
    fn from(v: Json) -> Self {
        match v {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::String(s),
            Json::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            Json::Object(obj) => Value::Map(
                obj.into_iter()
                    .map(|(k, v)| (Value::String(k), Value::from(v)))
                    .collect::<Map>(),
            ),
        }
    }
}

impl Value {
    /// Renders the value as JSON.
    pub fn to_json(&self) -> Json {
        match self {
            Value::Nil => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Int(i) => Json::from(*i),
            Value::UInt(u) => Json::from(*u),
            // Non-finite floats have no JSON form and become null.
            Value::Float32(f) => Json::from(f64::from(*f)),
            Value::Float64(f) => Json::from(*f),
            Value::String(s) => Json::String(s.clone()),
            Value::Binary(b) => Json::String(to_data_uri(b)),
            Value::Array(arr) => Json::Array(arr.iter().map(Value::to_json).collect()),
            Value::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (json_key(k), v.to_json()))
                    .collect(),
            ),
            Value::Ext(_, data) => Json::String(to_data_uri(data)),
        }
    }
}

fn json_key(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => other.to_json().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_numbers() {
        assert!(matches!(Value::from(json!(5)), Value::UInt(5)));
        assert!(matches!(Value::from(json!(-5)), Value::Int(-5)));
        assert!(matches!(Value::from(json!(1.25)), Value::Float64(f) if f == 1.25));
    }

    #[test]
    fn from_json_object() {
        let value = Value::from(json!({"foo": "bar", "list": [1, null, true]}));
        let map = value.as_map().unwrap();
        assert_eq!(map.get(&Value::from("foo")), Some(&Value::from("bar")));
        assert_eq!(
            map.get(&Value::from("list")),
            Some(&Value::Array(vec![Value::UInt(1), Value::Nil, Value::Bool(true)]))
        );
    }

    #[test]
    fn to_json_roundtrip_for_json_shaped_values() {
        let doc = json!({"a": [1, -2, 3.5, "x"], "b": {"c": null}});
        assert_eq!(Value::from(doc.clone()).to_json(), doc);
    }

    #[test]
    fn to_json_lossy_forms() {
        assert_eq!(
            Value::Binary(vec![1, 2, 3]).to_json(),
            json!("data:application/octet-stream;base64,AQID")
        );
        assert_eq!(
            Value::Ext(7, vec![1, 2, 3]).to_json(),
            json!("data:application/octet-stream;base64,AQID")
        );
        assert_eq!(Value::Float64(f64::NAN).to_json(), Json::Null);
        let map: Value = vec![(Value::UInt(1), Value::Bool(true))].into_iter().collect();
        assert_eq!(map.to_json(), json!({"1": true}));
    }
}
