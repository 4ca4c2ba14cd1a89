use crate::{Entries, Reflect};

/// Ordered key/value pairs that transform into an object node.
///
/// This is the usual return type of a type adapter that wants to describe a value structurally:
///
/// ```
/// use recast::{KeyedValues, Reflect, Transformer};
///
/// struct Date {
/// 	year: i32,
/// 	month: u8,
/// }
///
/// impl Reflect for Date {}
///
/// let mut transformer = Transformer::new();
/// transformer.add_type_adapter(|date: &Date| KeyedValues::new().with("year", date.year).with("month", i32::from(date.month)));
///
/// let value = transformer.transform(&Date { year: 2024, month: 3 });
/// let object = value.as_object().expect("object node");
/// assert_eq!(object.keys().collect::<Vec<_>>(), ["year", "month"]);
/// ```
#[derive(Default)]
pub struct KeyedValues {
	entries: Vec<(Box<str>, Box<dyn Reflect>)>,
}

impl KeyedValues {
	/// Empty carrier.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a pair. Keys are not checked here; a repeated key overwrites on transform.
	pub fn add(&mut self, key: impl Into<Box<str>>, value: impl Reflect) {
		let value: Box<dyn Reflect> = Box::new(value);
		self.entries.push((key.into(), value));
	}

	/// Builder form of [`KeyedValues::add`].
	pub fn with(mut self, key: impl Into<Box<str>>, value: impl Reflect) -> Self {
		self.add(key, value);
		self
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no pairs were added.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Reflect for KeyedValues {
	fn entries(&self) -> Option<Entries<'_>> {
		Some(Box::new(self.entries.iter().map(|(key, value)| (key.as_ref(), value.as_ref()))))
	}
}

impl std::fmt::Debug for KeyedValues {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.entries.iter().map(|(key, value)| (key, (**value).type_name()))).finish()
	}
}
