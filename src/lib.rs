//! Turn arbitrary runtime values into a uniform value tree for recording and comparison.

mod adapter;
mod engine;
mod error;
mod fallback;
mod impls;
mod json;
mod keyed;
mod macros;
mod primitive;
mod reflect;
mod value;

#[cfg(test)]
mod test_support;

/// Type adapter registry.
pub use adapter::AdapterRegistry;
/// Recursive dispatch engine and its options.
pub use engine::{InheritedFields, TransformOptions, Transformer};
/// Per-field read failures.
pub use error::FieldError;
/// Ordered key/value carrier for the keyed-iteration capability.
pub use keyed::KeyedValues;
/// Capability surface implemented by every transformable value.
pub use reflect::{AsAny, Elements, Entries, Field, FieldOrigin, FieldScope, Indexed, Reflect};
/// Value tree node types.
pub use value::{FieldValue, ObjectValue, Value};
