use thiserror::Error;

/// Reasons a field could not be read during structural reflection.
///
/// These never escape [`Transformer::transform`](crate::Transformer::transform); a failed field is
/// left out of the resulting object node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
	/// The type refuses to expose the field.
	#[error("field {field} is not accessible")]
	Inaccessible {
		/// Field name.
		field: &'static str,
	},
	/// The field exists but its current value could not be produced.
	#[error("field {field} could not be read: {reason}")]
	Unreadable {
		/// Field name.
		field: &'static str,
		/// Accessor-supplied explanation.
		reason: String,
	},
}
