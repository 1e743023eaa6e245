use std::borrow::Cow;

use arrange::{
	ItemKey, PositionalSorter, PropertyPath, SortError, SorterConfig, property_access, resolve,
	resolve_sequence, resolve_to_pairs,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

const META_PATH: &str = "__meta.position";

/// An item whose position lives under `__meta.position`; `Null` means "no position at all".
fn item(key: &'static str, position: Value) -> (&'static str, Value) {
	if position.is_null() {
		return (key, json!({}));
	}
	(key, json!({ "__meta": { "position": position } }))
}

#[rstest]
#[case::end_goes_last(
	vec![item("second", json!("end")), item("first", Value::Null)],
	vec!["first", "second"]
)]
#[case::start_goes_first(
	vec![item("second", Value::Null), item("first", json!("start"))],
	vec!["first", "second"]
)]
#[case::start_respects_weight(
	vec![item("second", json!("start 50")), item("first", json!("start 52"))],
	vec!["first", "second"]
)]
#[case::end_respects_weight(
	vec![item("second", json!("end 17")), item("first", json!("end"))],
	vec!["first", "second"]
)]
#[case::numbers_fill_the_middle(
	vec![
		item("last", json!("end")),
		item("second", json!(17)),
		item("first", json!(5)),
		item("third", json!(18)),
	],
	vec!["first", "second", "third", "last"]
)]
#[case::before_named_item(
	vec![item("second", Value::Null), item("first", json!("before second"))],
	vec!["first", "second"]
)]
#[case::before_unknown_goes_to_start(
	vec![
		item("third", Value::Null),
		item("second", json!("before third")),
		item("first", json!("before unknown")),
	],
	vec!["first", "second", "third"]
)]
#[case::before_weight_sits_closest(
	vec![
		item("third", Value::Null),
		item("second", json!("before third")),
		item("first", json!("before third 12")),
	],
	vec!["second", "first", "third"]
)]
#[case::before_chains(
	vec![
		item("third", Value::Null),
		item("second", json!("before third")),
		item("first", json!("before second")),
	],
	vec!["first", "second", "third"]
)]
#[case::after_named_item(
	vec![item("second", json!("after first")), item("first", Value::Null)],
	vec!["first", "second"]
)]
#[case::after_unknown_precedes_end(
	vec![
		item("third", json!("end")),
		item("second", json!("after unknown")),
		item("first", Value::Null),
	],
	vec!["first", "second", "third"]
)]
#[case::after_weight_sits_closest(
	vec![
		item("third", json!("after first")),
		item("second", json!("after first 12")),
		item("first", Value::Null),
	],
	vec!["first", "second", "third"]
)]
#[case::after_chains(
	vec![
		item("third", json!("after second")),
		item("second", json!("after first")),
		item("first", Value::Null),
	],
	vec!["first", "second", "third"]
)]
#[case::keys_with_special_characters(
	vec![
		item("thi:rd", json!("end")),
		item("sec.ond", json!("before thi:rd")),
		item("fir-st", json!("before sec.ond")),
	],
	vec!["fir-st", "sec.ond", "thi:rd"]
)]
fn orders_by_meta_position(
	#[case] items: Vec<(&'static str, Value)>,
	#[case] expected: Vec<&'static str>,
) {
	let result = resolve(items, Some(&PropertyPath::new(META_PATH))).unwrap();
	assert_eq!(result, expected);
}

#[test]
fn reference_cycle_fails_instead_of_hanging() {
	let items = vec![item("a", json!("before b")), item("b", json!("before a"))];
	let err = resolve(items, Some(&PropertyPath::new(META_PATH))).unwrap_err();
	assert_eq!(
		err,
		SortError::Cycle {
			path: vec!["a".into(), "b".into(), "a".into()],
		}
	);
}

#[test]
fn empty_collection_is_empty_order() {
	let items: Vec<(&str, Value)> = Vec::new();
	assert_eq!(resolve(items, Some(&PropertyPath::new(META_PATH))).unwrap(), Vec::<&str>::new());
}

#[test]
fn readme_example_with_default_path() {
	let items = vec![
		("key1", json!({ "position": "start" })),
		("key2", json!({ "position": "before key1" })),
		("key3", json!({ "position": "after key2" })),
	];
	let sorter = PositionalSorter::new(items, &SorterConfig::default());
	assert_eq!(sorter.sorted_keys().unwrap(), vec![&"key2", &"key3", &"key1"]);
}

/// A collection keyed by both integers and names.
#[derive(Debug, Clone, PartialEq)]
enum MixedKey {
	Index(i64),
	Name(&'static str),
}

impl ItemKey for MixedKey {
	fn canonical(&self) -> Cow<'_, str> {
		match self {
			Self::Index(index) => Cow::Owned(index.to_string()),
			Self::Name(name) => Cow::Borrowed(name),
		}
	}

	fn positional_index(&self) -> Option<i64> {
		match self {
			Self::Index(index) => Some(*index),
			Self::Name(_) => None,
		}
	}
}

#[test]
fn integer_keys_drive_the_middle_slot() {
	let items = vec![
		(MixedKey::Index(2), "foo"),
		(MixedKey::Index(1), "bar"),
		(MixedKey::Name("z"), "baz"),
		(MixedKey::Name("a"), "quux"),
	];
	let result = resolve(items, None).unwrap();
	assert_eq!(
		result,
		vec![
			MixedKey::Name("z"),
			MixedKey::Name("a"),
			MixedKey::Index(1),
			MixedKey::Index(2),
		]
	);
}

#[test]
fn sequence_positions_override_numeric_text() {
	let values = vec![
		json!({ "position": 5 }),
		json!({ "position": 0 }),
		json!({ "position": "start" }),
	];
	let order = resolve_sequence(values, Some(&PropertyPath::new("position"))).unwrap();
	assert_eq!(order, vec![2, 0, 1]);
}

struct Meta {
	position: Option<&'static str>,
}

struct Stage {
	name: &'static str,
	meta: Meta,
}

property_access!(Meta { position });
property_access!(Stage { name, "__meta" => meta });

fn stage(name: &'static str, position: Option<&'static str>) -> Stage {
	Stage {
		name,
		meta: Meta { position },
	}
}

#[test]
fn records_are_ordered_through_their_fields() {
	let stages = vec![
		("render", stage("render", Some("end"))),
		("parse", stage("parse", Some("start"))),
		("lint", stage("lint", Some("after parse 1"))),
		("format", stage("format", Some("after parse 5"))),
		("check", stage("check", None)),
	];
	let pairs = resolve_to_pairs(stages, Some(&PropertyPath::new(META_PATH))).unwrap();
	let names: Vec<&str> = pairs.iter().map(|(_, stage)| stage.name).collect();
	assert_eq!(names, vec!["parse", "format", "lint", "check", "render"]);
}
