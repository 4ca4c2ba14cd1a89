use crate::{Field, FieldError, Reflect};

pub(crate) struct Point {
	pub(crate) x: i32,
	pub(crate) y: String,
}

crate::reflect_fields!(Point { x, y });

pub(crate) struct Person {
	pub(crate) name: String,
	pub(crate) age: i64,
}

crate::reflect_fields!(Person { name, age });

pub(crate) struct Employee {
	pub(crate) person: Person,
	pub(crate) title: &'static str,
}

crate::reflect_fields!(Employee: person { title });

/// Exposes one readable field, one denied field, one failing field, and one static field.
pub(crate) struct Guarded {
	pub(crate) visible: i32,
	pub(crate) secret: String,
}

impl Guarded {
	pub(crate) const VERSION: i32 = 3;
}

impl Reflect for Guarded {
	fn fields(&self) -> Vec<Field<'_>> {
		vec![
			Field::declared("visible", &self.visible),
			Field::inaccessible("secret"),
			Field::failed(
				"lazy",
				FieldError::Unreadable {
					field: "lazy",
					reason: format!("not loaded ({} bytes pending)", self.secret.len()),
				},
			),
			Field::declared("VERSION", &Self::VERSION).into_static(),
		]
	}
}

pub(crate) struct Celsius(pub(crate) f32);

impl Reflect for Celsius {}

pub(crate) fn point(x: i32, y: &str) -> Point {
	Point { x, y: y.to_owned() }
}

pub(crate) fn employee() -> Employee {
	Employee {
		person: Person {
			name: "Ada".to_owned(),
			age: 36,
		},
		title: "engineer",
	}
}
