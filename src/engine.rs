use serde::{Deserialize, Serialize};

use crate::fallback::reflect_object;
use crate::primitive::PrimitiveRegistry;
use crate::{AdapterRegistry, ObjectValue, Reflect, Value};

/// Policy for fields a type takes from an embedded base type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InheritedFields {
	/// Visit only fields declared on the exact runtime type.
	#[default]
	Skip,
	/// Visit base fields first, then declared fields.
	Include,
}

/// Behavior switches for [`Transformer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
	/// Whether the reflection fallback visits inherited fields.
	pub inherited_fields: InheritedFields,
}

impl TransformOptions {
	/// Preset that walks base-type fields as well as declared ones.
	pub fn with_inherited_fields() -> Self {
		Self {
			inherited_fields: InheritedFields::Include,
		}
	}
}

/// Recursive dispatch engine producing [`Value`] trees.
///
/// Register adapters during setup, then share the transformer freely: `transform` takes `&self`
/// and never mutates its input.
#[derive(Debug)]
pub struct Transformer {
	primitives: PrimitiveRegistry,
	adapters: AdapterRegistry,
	options: TransformOptions,
}

impl Default for Transformer {
	fn default() -> Self {
		Self::new()
	}
}

impl Transformer {
	/// Transformer with default options and no adapters.
	pub fn new() -> Self {
		Self::with_options(TransformOptions::default())
	}

	/// Transformer with explicit options and no adapters.
	pub fn with_options(options: TransformOptions) -> Self {
		Self {
			primitives: PrimitiveRegistry::new(),
			adapters: AdapterRegistry::new(),
			options,
		}
	}

	/// Active options.
	pub fn options(&self) -> &TransformOptions {
		&self.options
	}

	/// Registered adapters.
	pub fn adapters(&self) -> &AdapterRegistry {
		&self.adapters
	}

	/// Convert values of exactly type `T` through `adapter` before transforming the result.
	///
	/// The adapter may return another adapted type, a [`KeyedValues`](crate::KeyedValues), or a
	/// prebuilt [`Value`]. Registering again for the same `T` replaces the previous adapter.
	///
	/// `T` should be the pointee, not `Box<T>`, `Rc<T>` or `Arc<T>`: those wrappers are peeled
	/// before lookup and an adapter registered for them never runs.
	pub fn add_type_adapter<T, R, F>(&mut self, adapter: F)
	where
		T: Reflect,
		R: Reflect,
		F: Fn(&T) -> R + Send + Sync + 'static,
	{
		self.adapters.register(adapter);
	}

	/// Whether an adapter is registered for exactly `T`.
	pub fn has_type_adapter<T: Reflect>(&self) -> bool {
		self.adapters.contains::<T>()
	}

	/// Build the value tree for `value`.
	///
	/// Strategies are tried in a fixed order: existing node, keyed entries, primitive, adapter,
	/// sequential elements, indexed array, and finally the declared fields. Cyclic inputs recurse
	/// until the stack is exhausted.
	pub fn transform(&self, value: &dyn Reflect) -> Value {
		let mut value = value;
		while let Some(inner) = value.deref_reflect() {
			value = inner;
		}

		if let Some(node) = value.as_node() {
			return node.clone();
		}

		if let Some(entries) = value.entries() {
			let mut object = ObjectValue::new();
			for (key, item) in entries {
				object.insert(key, self.transform(item));
			}
			return Value::Object(object);
		}

		if let Some(leaf) = self.primitives.lookup(value.as_any().type_id()).and_then(|kind| kind.leaf(value.as_any())) {
			return leaf;
		}

		if let Some(adapted) = self.adapters.adapt(value) {
			return self.transform(adapted.as_ref());
		}

		if let Some(elements) = value.elements() {
			return Value::Array(elements.map(|item| self.transform(item)).collect());
		}

		if let Some(indexed) = value.indexed() {
			let items = (0..indexed.len()).filter_map(|idx| indexed.get(idx)).map(|item| self.transform(item)).collect();
			return Value::Array(items);
		}

		tracing::trace!(type_name = value.type_name(), "falling back to declared fields");
		Value::Object(reflect_object(self, value))
	}
}

#[cfg(test)]
mod tests;
