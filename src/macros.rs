/// Implement [`Reflect`](crate::Reflect) for a struct by listing the fields the reflection fallback
/// should visit.
///
/// Every listed field must itself implement `Reflect`. Naming an embedded base after a colon
/// reports the base's own fields first, marked as inherited, so that
/// [`InheritedFields`](crate::InheritedFields) decides whether they appear.
///
/// ```
/// use recast::{Transformer, TransformOptions, Value};
///
/// struct Shape {
/// 	sides: i32,
/// }
///
/// struct Square {
/// 	shape: Shape,
/// 	length: f64,
/// }
///
/// recast::reflect_fields!(Shape { sides });
/// recast::reflect_fields!(Square: shape { length });
///
/// let square = Square { shape: Shape { sides: 4 }, length: 2.0 };
///
/// let declared = Transformer::new().transform(&square);
/// assert_eq!(declared.as_object().map(|item| item.len()), Some(1));
///
/// let all = Transformer::with_options(TransformOptions::with_inherited_fields()).transform(&square);
/// let object = all.as_object().expect("object node");
/// assert_eq!(object.keys().collect::<Vec<_>>(), ["sides", "length"]);
/// assert_eq!(object.get("length"), Some(&Value::Decimal(2.0)));
/// ```
#[macro_export]
macro_rules! reflect_fields {
	($ty:ty { $($field:ident),* $(,)? }) => {
		impl $crate::Reflect for $ty {
			fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
				::std::vec![$($crate::Field::declared(::std::stringify!($field), &self.$field)),*]
			}
		}
	};
	($ty:ty : $base:ident { $($field:ident),* $(,)? }) => {
		impl $crate::Reflect for $ty {
			fn fields(&self) -> ::std::vec::Vec<$crate::Field<'_>> {
				let from = ::std::any::type_name_of_val(&self.$base);
				let mut fields: ::std::vec::Vec<$crate::Field<'_>> =
					$crate::Reflect::fields(&self.$base).into_iter().map(|field| field.inherited_from(from)).collect();
				$(fields.push($crate::Field::declared(::std::stringify!($field), &self.$field));)*
				fields
			}
		}
	};
}
