use crate::{FieldScope, InheritedFields, ObjectValue, Reflect, Transformer};

/// Build an object node from the instance fields `value` reports.
///
/// Static fields are never visited. Inherited fields follow the transformer's
/// [`InheritedFields`] policy. A field whose read failed is left out.
pub(crate) fn reflect_object(transformer: &Transformer, value: &dyn Reflect) -> ObjectValue {
	let include_inherited = transformer.options().inherited_fields == InheritedFields::Include;
	let mut object = ObjectValue::new();

	for field in value.fields() {
		if field.scope == FieldScope::Static || (field.is_inherited() && !include_inherited) {
			continue;
		}

		match field.value {
			Ok(item) => object.insert(field.name, transformer.transform(item)),
			Err(err) => {
				tracing::debug!(type_name = value.type_name(), field = field.name, error = %err, "omitting unreadable field");
			}
		}
	}

	object
}
