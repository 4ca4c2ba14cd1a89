use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::sync::Arc;

use crate::test_support::{Celsius, Point, employee, point};
use crate::{KeyedValues, ObjectValue, Reflect, TransformOptions, Transformer, Value};

#[test]
fn primitives_map_to_matching_leaves() {
	let transformer = Transformer::new();
	assert_eq!(transformer.transform(&true), Value::Bool(true));
	assert_eq!(transformer.transform(&"label".to_owned()), Value::from("label"));
	assert_eq!(transformer.transform(&"static"), Value::from("static"));
	assert_eq!(transformer.transform(&i32::MIN), Value::Integer(i64::from(i32::MIN)));
	assert_eq!(transformer.transform(&i64::MAX), Value::Integer(i64::MAX));
	assert_eq!(transformer.transform(&1.5_f32), Value::Decimal(1.5));
	assert_eq!(transformer.transform(&-2.25_f64), Value::Decimal(-2.25));
}

#[test]
fn transform_is_idempotent_on_nodes() {
	let transformer = Transformer::new();
	let once = transformer.transform(&point(1, "s"));
	let twice = transformer.transform(&once);
	assert_eq!(once, twice);
}

#[test]
fn keyed_entries_keep_their_order() {
	let transformer = Transformer::new();
	let keyed = KeyedValues::new().with("zulu", 1_i32).with("alpha", "a").with("mike", vec![2_i64, 3]);

	let value = transformer.transform(&keyed);
	let object = value.as_object().expect("object node");
	assert_eq!(object.keys().collect::<Vec<_>>(), ["zulu", "alpha", "mike"]);
	assert_eq!(object.get("mike"), Some(&Value::Array(vec![Value::Integer(2), Value::Integer(3)])));
}

#[test]
fn keyed_entries_win_over_adapters() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|_: &KeyedValues| "adapted");

	let value = transformer.transform(&KeyedValues::new().with("k", true));
	assert_eq!(value, Value::Object(ObjectValue::new().with("k", true)));
}

#[test]
fn primitives_win_over_adapters() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|value: &i32| format!("#{value}"));

	assert!(transformer.has_type_adapter::<i32>());
	assert_eq!(transformer.transform(&5_i32), Value::Integer(5));
}

#[test]
fn adapter_wins_over_declared_fields() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|item: &Point| format!("({}, {})", item.x, item.y));

	assert_eq!(transformer.transform(&point(1, "s")), Value::from("(1, s)"));
}

#[test]
fn latest_adapter_registration_wins() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|item: &Celsius| item.0);
	transformer.add_type_adapter(|item: &Celsius| format!("{}C", item.0));

	assert_eq!(transformer.adapters().len(), 1);
	assert_eq!(transformer.transform(&Celsius(21.5)), Value::from("21.5C"));
}

#[test]
fn adapters_chain_through_other_adapters() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|value: &u8| i64::from(*value));
	transformer.add_type_adapter(|item: &Celsius| KeyedValues::new().with("degrees", item.0).with("scale", 1_u8));

	let value = transformer.transform(&Celsius(-4.0));
	assert_eq!(value, Value::Object(ObjectValue::new().with("degrees", -4.0).with("scale", 1_i64)));
}

#[test]
fn adapter_can_return_prebuilt_subtree() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|item: &Celsius| Value::Array(vec![Value::Decimal(f64::from(item.0))]));

	assert_eq!(transformer.transform(&Celsius(1.0)), Value::Array(vec![Value::Decimal(1.0)]));
}

#[test]
fn adapter_for_base_does_not_apply_to_embedding_type() {
	let mut transformer = Transformer::with_options(TransformOptions::with_inherited_fields());
	transformer.add_type_adapter(|_: &crate::test_support::Person| "person");

	let value = transformer.transform(&employee());
	let object = value.as_object().expect("employee is reflected");
	assert_eq!(object.keys().collect::<Vec<_>>(), ["name", "age", "title"]);
	assert_eq!(object.get("name"), Some(&Value::from("Ada")));
}

#[test]
fn collections_become_arrays_in_order() {
	let transformer = Transformer::new();
	let expected = Value::Array(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);

	assert_eq!(transformer.transform(&vec![1_i32, 2, 3]), expected);
	assert_eq!(transformer.transform(&[1_i32, 2, 3]), expected);
	assert_eq!(transformer.transform(&std::collections::VecDeque::from([1_i64, 2, 3])), expected);
}

#[test]
fn equal_sets_build_identical_trees() {
	let transformer = Transformer::new();
	let first = transformer.transform(&(0..16_i64).rev().collect::<BTreeSet<_>>());

	for _ in 0..20 {
		let set: BTreeSet<i64> = (0..16).collect();
		assert_eq!(transformer.transform(&set), first);
	}
	assert_eq!(first.as_array().and_then(|items| items.first()), Some(&Value::Integer(0)));
}

#[test]
fn options_are_iterated() {
	let transformer = Transformer::new();
	assert_eq!(transformer.transform(&Some(2_i32)), Value::Array(vec![Value::Integer(2)]));
	assert_eq!(transformer.transform(&None::<i32>), Value::Array(Vec::new()));
}

#[test]
fn maps_become_objects() {
	let transformer = Transformer::new();
	let mut map = BTreeMap::new();
	map.insert("b", point(2, "two"));
	map.insert("a", point(1, "one"));

	let value = transformer.transform(&map);
	let object = value.as_object().expect("object node");
	assert_eq!(object.keys().collect::<Vec<_>>(), ["a", "b"]);
	assert_eq!(object.get("b").and_then(|item| item.as_object()).and_then(|item| item.get("x")), Some(&Value::Integer(2)));
}

#[test]
fn pointers_are_transparent() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|item: &Celsius| item.0);

	let mixed: Vec<Box<dyn Reflect>> = vec![Box::new(1_i32), Box::new(Celsius(0.5)), Box::new(Rc::new("rc"))];
	assert_eq!(
		transformer.transform(&mixed),
		Value::Array(vec![Value::Integer(1), Value::Decimal(0.5), Value::from("rc")])
	);
	assert_eq!(transformer.transform(&Arc::new(Value::Bool(false))), Value::Bool(false));
}

#[test]
fn adapter_for_pointer_wrapper_never_runs() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|_: &Box<Celsius>| "boxed");
	assert!(transformer.has_type_adapter::<Box<Celsius>>());
	assert_eq!(transformer.transform(&Box::new(Celsius(1.5))), Value::Object(ObjectValue::new()));

	transformer.add_type_adapter(|item: &Celsius| item.0);
	assert_eq!(transformer.transform(&Box::new(Celsius(1.5))), Value::Decimal(1.5));
}

#[test]
fn unsupported_values_become_empty_objects() {
	let transformer = Transformer::new();
	let empty = Value::Object(ObjectValue::new());
	assert_eq!(transformer.transform(&7_u8), empty);
	assert_eq!(transformer.transform(&'c'), empty);
	assert_eq!(transformer.transform(&()), empty);
	assert_eq!(transformer.transform(&Celsius(3.0)), empty);
}

#[test]
fn transformer_is_shareable_across_threads() {
	let mut transformer = Transformer::new();
	transformer.add_type_adapter(|value: &u64| i64::try_from(*value).unwrap_or(i64::MAX));
	let transformer = Arc::new(transformer);

	let handles: Vec<_> = (0..4_u64)
		.map(|n| {
			let transformer = Arc::clone(&transformer);
			std::thread::spawn(move || transformer.transform(&vec![n, u64::MAX]))
		})
		.collect();

	for (n, handle) in handles.into_iter().enumerate() {
		let value = handle.join().expect("worker finishes");
		assert_eq!(value, Value::Array(vec![Value::Integer(n as i64), Value::Integer(i64::MAX)]));
	}
}
