//! Hand-off of finished trees to serde-based serializers.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Value as JsonValue};

use crate::{ObjectValue, Value};

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			Self::Bool(v) => serializer.serialize_bool(*v),
			Self::String(v) => serializer.serialize_str(v),
			Self::Integer(v) => serializer.serialize_i64(*v),
			Self::Decimal(v) => serializer.serialize_f64(*v),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(item) => item.serialize(serializer),
		}
	}
}

impl Serialize for ObjectValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.fields.len()))?;
		for field in &self.fields {
			map.serialize_entry(field.name.as_ref(), &field.value)?;
		}
		map.end()
	}
}

impl Value {
	/// Convert into an in-memory JSON document with object key order preserved.
	///
	/// Non-finite decimals become JSON `null`.
	pub fn to_json(&self) -> JsonValue {
		match self {
			Self::Bool(v) => JsonValue::Bool(*v),
			Self::String(v) => JsonValue::String(v.to_string()),
			Self::Integer(v) => serde_json::json!(v),
			Self::Decimal(v) => serde_json::json!(v),
			Self::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
			Self::Object(item) => {
				let fields: Map<String, JsonValue> = item.fields.iter().map(|field| (field.name.to_string(), field.value.to_json())).collect();
				JsonValue::Object(fields)
			}
		}
	}
}
