//! Capability surface the dispatch engine probes on every value.
//!
//! Rust has no runtime field introspection, so each transformable type states what it can offer:
//! a prebuilt node, keyed pairs, sequential elements, indexed elements, or declared fields. Every
//! method has an empty default, which makes `impl Reflect for T {}` a valid opaque type that the
//! engine resolves purely by its concrete [`TypeId`](std::any::TypeId).

use std::any::Any;

use crate::{FieldError, Value};

/// Ordered `(key, value)` pairs exposed through the keyed-iteration capability.
pub type Entries<'a> = Box<dyn Iterator<Item = (&'a str, &'a dyn Reflect)> + 'a>;

/// Elements exposed through the sequential-iteration capability.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a dyn Reflect> + 'a>;

/// Upcasts implemented for every [`Reflect`] type.
pub trait AsAny {
	/// Borrow as `dyn Any` for exact-type lookup and downcasting.
	fn as_any(&self) -> &dyn Any;
	/// Borrow as `dyn Reflect`.
	fn as_reflect(&self) -> &dyn Reflect;
	/// Concrete type name, used in diagnostics.
	fn type_name(&self) -> &'static str;
}

impl<T: Reflect> AsAny for T {
	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_reflect(&self) -> &dyn Reflect {
		self
	}

	fn type_name(&self) -> &'static str {
		std::any::type_name::<T>()
	}
}

/// A value the [`Transformer`](crate::Transformer) can turn into a [`Value`] tree.
pub trait Reflect: AsAny + Any {
	/// Transparent indirection to the value this one wraps (`Box`, `Rc`, `Arc`).
	fn deref_reflect(&self) -> Option<&dyn Reflect> {
		None
	}

	/// Already a value tree node.
	fn as_node(&self) -> Option<&Value> {
		None
	}

	/// Keyed-iteration capability: ordered string keys with their values.
	fn entries(&self) -> Option<Entries<'_>> {
		None
	}

	/// Sequential-iteration capability.
	fn elements(&self) -> Option<Elements<'_>> {
		None
	}

	/// Fixed-size indexed array capability.
	fn indexed(&self) -> Option<&dyn Indexed> {
		None
	}

	/// Fields visited by the reflection fallback, in declaration order.
	fn fields(&self) -> Vec<Field<'_>> {
		Vec::new()
	}

	/// Whether values of this type are always peeled through [`Reflect::deref_reflect`] before any
	/// lookup. Adapters registered for such a type never run.
	fn is_transparent() -> bool
	where
		Self: Sized,
	{
		false
	}
}

/// Fixed-size array accessed by position.
pub trait Indexed {
	/// Number of slots.
	fn len(&self) -> usize;

	/// Element at `index`.
	fn get(&self, index: usize) -> Option<&dyn Reflect>;

	/// Whether the array has no slots.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Whether a field belongs to the instance or to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldScope {
	/// Per-instance field.
	Instance,
	/// Type-level field; never visited.
	Static,
}

/// Where a field was declared relative to the reflected type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
	/// Declared on the exact runtime type.
	Declared,
	/// Taken from an embedded base type.
	Inherited {
		/// Type name of the declaring base.
		from: &'static str,
	},
}

/// One field reported by [`Reflect::fields`], with the outcome of reading it.
pub struct Field<'a> {
	/// Field name, used as the object key.
	pub name: &'static str,
	/// Instance or static.
	pub scope: FieldScope,
	/// Declared or inherited.
	pub origin: FieldOrigin,
	/// Current value, or why it could not be read.
	pub value: Result<&'a dyn Reflect, FieldError>,
}

impl<'a> Field<'a> {
	/// Readable instance field declared on the reflected type.
	pub fn declared(name: &'static str, value: &'a dyn Reflect) -> Self {
		Self {
			name,
			scope: FieldScope::Instance,
			origin: FieldOrigin::Declared,
			value: Ok(value),
		}
	}

	/// Instance field whose access failed.
	pub fn failed(name: &'static str, error: FieldError) -> Self {
		Self {
			name,
			scope: FieldScope::Instance,
			origin: FieldOrigin::Declared,
			value: Err(error),
		}
	}

	/// Instance field the type refuses to expose.
	pub fn inaccessible(name: &'static str) -> Self {
		Self::failed(name, FieldError::Inaccessible { field: name })
	}

	/// Mark the field as type-level.
	pub fn into_static(mut self) -> Self {
		self.scope = FieldScope::Static;
		self
	}

	/// Mark a declared field as coming from base type `from`; an existing inherited origin is kept.
	pub fn inherited_from(mut self, from: &'static str) -> Self {
		if self.origin == FieldOrigin::Declared {
			self.origin = FieldOrigin::Inherited { from };
		}
		self
	}

	/// Whether the field comes from a base type.
	pub fn is_inherited(&self) -> bool {
		matches!(self.origin, FieldOrigin::Inherited { .. })
	}
}

impl std::fmt::Debug for Field<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let value = self.value.as_ref().map(|item| item.type_name());
		f.debug_struct("Field")
			.field("name", &self.name)
			.field("scope", &self.scope)
			.field("origin", &self.origin)
			.field("value", &value)
			.finish()
	}
}
