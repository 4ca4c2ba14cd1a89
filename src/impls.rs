//! `Reflect` implementations for standard library types.

use std::collections::{BTreeMap, BTreeSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

use crate::{Elements, Entries, Indexed, Reflect, Value};

/// Scalars carry no capabilities; the engine resolves them by concrete type alone.
macro_rules! impl_scalar {
	($($ty:ty),* $(,)?) => {
		$(impl Reflect for $ty {})*
	};
}

impl_scalar!(bool, i32, i64, f32, f64, String, &'static str);
impl_scalar!(i8, i16, i128, isize, u8, u16, u32, u64, u128, usize, char, ());

impl Reflect for Value {
	fn as_node(&self) -> Option<&Value> {
		Some(self)
	}
}

macro_rules! impl_sequence {
	($($ty:ident),* $(,)?) => {
		$(impl<T: Reflect> Reflect for $ty<T> {
			fn elements(&self) -> Option<Elements<'_>> {
				Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
			}
		})*
	};
}

// Hash-ordered collections are left out: their order varies between processes.
impl_sequence!(Vec, VecDeque, LinkedList, BTreeSet);

impl<T: Reflect> Reflect for Option<T> {
	fn elements(&self) -> Option<Elements<'_>> {
		Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
	}
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	fn indexed(&self) -> Option<&dyn Indexed> {
		Some(self)
	}
}

impl<T: Reflect, const N: usize> Indexed for [T; N] {
	fn len(&self) -> usize {
		N
	}

	fn get(&self, index: usize) -> Option<&dyn Reflect> {
		self.as_slice().get(index).map(|item| item as &dyn Reflect)
	}
}

impl<K, V> Reflect for BTreeMap<K, V>
where
	K: AsRef<str> + 'static,
	V: Reflect,
{
	fn entries(&self) -> Option<Entries<'_>> {
		Some(Box::new(self.iter().map(|(key, value)| (key.as_ref(), value as &dyn Reflect))))
	}
}

macro_rules! impl_pointer {
	($($ty:ident),* $(,)?) => {
		$(impl<T: Reflect + ?Sized> Reflect for $ty<T> {
			fn deref_reflect(&self) -> Option<&dyn Reflect> {
				Some((**self).as_reflect())
			}

			fn is_transparent() -> bool {
				true
			}
		})*
	};
}

impl_pointer!(Box, Rc, Arc);
