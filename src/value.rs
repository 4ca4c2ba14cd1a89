/// Uniform node produced by [`Transformer::transform`](crate::Transformer::transform).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Boolean scalar.
	Bool(bool),
	/// Text scalar.
	String(Box<str>),
	/// Signed integer scalar; 32- and 64-bit sources both land here.
	Integer(i64),
	/// Floating point scalar; single and double precision sources both land here.
	Decimal(f64),
	/// Ordered sequence of child nodes.
	Array(Vec<Value>),
	/// Ordered keyed mapping of child nodes.
	Object(ObjectValue),
}

impl Value {
	/// Short label for the node variant.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Bool(_) => "bool",
			Self::String(_) => "string",
			Self::Integer(_) => "integer",
			Self::Decimal(_) => "decimal",
			Self::Array(_) => "array",
			Self::Object(_) => "object",
		}
	}

	/// Whether this node is a scalar leaf.
	pub fn is_leaf(&self) -> bool {
		!matches!(self, Self::Array(_) | Self::Object(_))
	}

	/// Boolean payload, if this is a boolean leaf.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Text payload, if this is a string leaf.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(v) => Some(v),
			_ => None,
		}
	}

	/// Integer payload, if this is an integer leaf.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Integer(v) => Some(*v),
			_ => None,
		}
	}

	/// Decimal payload, if this is a decimal leaf.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Decimal(v) => Some(*v),
			_ => None,
		}
	}

	/// Child nodes, if this is an array node.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Keyed children, if this is an object node.
	pub fn as_object(&self) -> Option<&ObjectValue> {
		match self {
			Self::Object(item) => Some(item),
			_ => None,
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Decimal(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.into())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value.into_boxed_str())
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::Array(value)
	}
}

impl From<ObjectValue> for Value {
	fn from(value: ObjectValue) -> Self {
		Self::Object(value)
	}
}

/// Object node body with keys in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectValue {
	/// Keyed children in insertion order.
	pub fields: Vec<FieldValue>,
}

/// Named child of an object node.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
	/// Field key.
	pub name: Box<str>,
	/// Child node.
	pub value: Value,
}

impl ObjectValue {
	/// Empty object node.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add `value` under `name`.
	///
	/// A repeated key keeps its original position and takes the new value.
	pub fn insert(&mut self, name: impl Into<Box<str>>, value: Value) {
		let name = name.into();
		if let Some(slot) = self.fields.iter_mut().find(|field| field.name == name) {
			slot.value = value;
			return;
		}
		self.fields.push(FieldValue { name, value });
	}

	/// Builder form of [`ObjectValue::insert`].
	pub fn with(mut self, name: impl Into<Box<str>>, value: impl Into<Value>) -> Self {
		self.insert(name, value.into());
		self
	}

	/// Child stored under `name`.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|field| field.name.as_ref())
	}

	/// Number of keyed children.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Whether the object has no children.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}
}
