use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::Value;

/// Leaf constructor selected by exact concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimitiveKind {
	Bool,
	String,
	StaticStr,
	I32,
	I64,
	F32,
	F64,
}

impl PrimitiveKind {
	/// Build the leaf for `value`; `None` only if `value` is not the type this kind was keyed by.
	pub(crate) fn leaf(self, value: &dyn Any) -> Option<Value> {
		Some(match self {
			Self::Bool => Value::Bool(*value.downcast_ref::<bool>()?),
			Self::String => Value::String(value.downcast_ref::<String>()?.as_str().into()),
			Self::StaticStr => Value::String((*value.downcast_ref::<&'static str>()?).into()),
			Self::I32 => Value::Integer(i64::from(*value.downcast_ref::<i32>()?)),
			Self::I64 => Value::Integer(*value.downcast_ref::<i64>()?),
			Self::F32 => Value::Decimal(f64::from(*value.downcast_ref::<f32>()?)),
			Self::F64 => Value::Decimal(*value.downcast_ref::<f64>()?),
		})
	}
}

/// Fixed table of scalar types that map straight to leaves.
#[derive(Debug, Clone)]
pub(crate) struct PrimitiveRegistry {
	kinds: HashMap<TypeId, PrimitiveKind>,
}

impl PrimitiveRegistry {
	pub(crate) fn new() -> Self {
		let kinds = HashMap::from([
			(TypeId::of::<bool>(), PrimitiveKind::Bool),
			(TypeId::of::<String>(), PrimitiveKind::String),
			(TypeId::of::<&'static str>(), PrimitiveKind::StaticStr),
			(TypeId::of::<i32>(), PrimitiveKind::I32),
			(TypeId::of::<i64>(), PrimitiveKind::I64),
			(TypeId::of::<f32>(), PrimitiveKind::F32),
			(TypeId::of::<f64>(), PrimitiveKind::F64),
		]);
		Self { kinds }
	}

	pub(crate) fn lookup(&self, type_id: TypeId) -> Option<PrimitiveKind> {
		self.kinds.get(&type_id).copied()
	}
}
