use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::Reflect;

type AdapterFn = dyn Fn(&dyn Any) -> Option<Box<dyn Reflect>> + Send + Sync;

struct Adapter {
	type_name: &'static str,
	func: Box<AdapterFn>,
}

/// User-registered conversions keyed by exact concrete type.
///
/// Lookup never considers wrappers, embedded bases, or implemented traits: an adapter for `T`
/// applies to values whose concrete type is `T` and nothing else.
#[derive(Default)]
pub struct AdapterRegistry {
	adapters: HashMap<TypeId, Adapter>,
}

impl AdapterRegistry {
	/// Empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `adapter` for `T`, replacing any earlier adapter for the same type.
	///
	/// Pointer wrappers (`Box`, `Rc`, `Arc`) are peeled before lookup, so an adapter registered for
	/// one of them is stored but never runs; register it for the pointee instead.
	pub fn register<T, R, F>(&mut self, adapter: F)
	where
		T: Reflect,
		R: Reflect,
		F: Fn(&T) -> R + Send + Sync + 'static,
	{
		let type_name = std::any::type_name::<T>();
		if T::is_transparent() {
			tracing::debug!(type_name, "adapter registered for a peeled pointer type will never run");
		}
		let func: Box<AdapterFn> = Box::new(move |value: &dyn Any| {
			let item = value.downcast_ref::<T>()?;
			Some(Box::new(adapter(item)) as Box<dyn Reflect>)
		});

		if self.adapters.insert(TypeId::of::<T>(), Adapter { type_name, func }).is_some() {
			tracing::debug!(type_name, "replaced existing type adapter");
		}
	}

	/// Whether an adapter is registered for exactly `T`.
	pub fn contains<T: Reflect>(&self) -> bool {
		self.adapters.contains_key(&TypeId::of::<T>())
	}

	/// Number of registered adapters.
	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	/// Whether no adapters are registered.
	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}

	/// Run the adapter registered for the concrete type of `value`, if any.
	pub(crate) fn adapt(&self, value: &dyn Reflect) -> Option<Box<dyn Reflect>> {
		let adapter = self.adapters.get(&value.as_any().type_id())?;
		tracing::trace!(type_name = adapter.type_name, "applying type adapter");
		(adapter.func)(value.as_any())
	}
}

impl std::fmt::Debug for AdapterRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut names: Vec<&str> = self.adapters.values().map(|adapter| adapter.type_name).collect();
		names.sort_unstable();
		f.debug_struct("AdapterRegistry").field("types", &names).finish()
	}
}
