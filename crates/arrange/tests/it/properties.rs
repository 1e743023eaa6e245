use std::collections::HashSet;

use arrange::{PositionDirective, PropertyPath, SortError, resolve};
use proptest::prelude::*;
use serde_json::{Value, json};

const KEYS: usize = 10;

fn key(index: usize) -> String {
	format!("k{index}")
}

fn arb_reference() -> impl Strategy<Value = String> {
	prop_oneof![(0..KEYS).prop_map(key), Just("missing".to_string())]
}

/// Position values that reference existing keys, missing keys, or nothing at all.
fn arb_position() -> impl Strategy<Value = Option<String>> {
	prop_oneof![
		Just(None),
		(0u32..4).prop_map(|w| Some(format!("start {w}"))),
		(0u32..4).prop_map(|w| Some(format!("end {w}"))),
		(-3i64..6).prop_map(|i| Some(i.to_string())),
		(arb_reference(), 0u32..3).prop_map(|(r, w)| Some(format!("before {r} {w}"))),
		(arb_reference(), 0u32..3).prop_map(|(r, w)| Some(format!("after {r} {w}"))),
		Just(Some("start soon".to_string())),
	]
}

fn arb_unanchored_position() -> impl Strategy<Value = Option<String>> {
	prop_oneof![
		Just(None),
		(0u32..4).prop_map(|w| Some(format!("start {w}"))),
		(0u32..4).prop_map(|w| Some(format!("end {w}"))),
		(-3i64..6).prop_map(|i| Some(i.to_string())),
	]
}

fn items(positions: &[Option<String>]) -> Vec<(String, Value)> {
	positions
		.iter()
		.enumerate()
		.map(|(index, position)| {
			let value = match position {
				Some(position) => json!({ "position": position }),
				None => json!({}),
			};
			(key(index), value)
		})
		.collect()
}

fn position_of(order: &[String], key: &str) -> usize {
	order
		.iter()
		.position(|k| k == key)
		.expect("every key is in the order")
}

proptest! {
	/// Every run yields a permutation of the input keys, or reports a cycle.
	#[test]
	fn prop_result_is_permutation_or_cycle(
		positions in prop::collection::vec(arb_position(), 0..KEYS)
	) {
		let input = items(&positions);
		let expected: HashSet<String> = input.iter().map(|(k, _)| k.clone()).collect();

		match resolve(input, Some(&PropertyPath::new("position"))) {
			Ok(order) => {
				prop_assert_eq!(order.len(), expected.len(), "no duplicates or drops");
				let seen: HashSet<String> = order.into_iter().collect();
				prop_assert_eq!(seen, expected);
			}
			Err(SortError::Cycle { path }) => {
				prop_assert!(path.len() >= 2);
				prop_assert_eq!(path.first(), path.last());
			}
		}
	}

	/// Without before/after directives, start items lead and end items trail.
	#[test]
	fn prop_segments_partition_the_order(
		positions in prop::collection::vec(arb_unanchored_position(), 1..KEYS)
	) {
		let order = resolve(items(&positions), Some(&PropertyPath::new("position")))
			.expect("no anchors, no cycles");

		let directives: Vec<PositionDirective> = positions
			.iter()
			.map(|p| PositionDirective::parse(p.as_deref()))
			.collect();
		for (a, da) in directives.iter().enumerate() {
			for (b, db) in directives.iter().enumerate() {
				let (pa, pb) = (position_of(&order, &key(a)), position_of(&order, &key(b)));
				match (da, db) {
					(PositionDirective::Start(wa), PositionDirective::Start(wb)) if wa > wb => {
						prop_assert!(pa < pb, "heavier start leads");
					}
					(PositionDirective::End(wa), PositionDirective::End(wb)) if wa > wb => {
						prop_assert!(pa > pb, "heavier end trails");
					}
					(PositionDirective::Start(_), PositionDirective::End(_)) => {
						prop_assert!(pa < pb);
					}
					(PositionDirective::Start(_), PositionDirective::Index(_) | PositionDirective::Unspecified) => {
						prop_assert!(pa < pb);
					}
					(PositionDirective::End(_), PositionDirective::Index(_) | PositionDirective::Unspecified) => {
						prop_assert!(pa > pb);
					}
					_ => {}
				}
			}
		}
	}

	/// An item declaring `before`/`after` an existing, otherwise unclaimed key sits right next to it.
	#[test]
	fn prop_single_anchor_is_adjacent(
		positions in prop::collection::vec(arb_unanchored_position(), 1..KEYS),
		anchor in 0..KEYS,
		after in any::<bool>(),
	) {
		let anchor = anchor % positions.len();
		let mut positions = positions;
		let keyword = if after { "after" } else { "before" };
		positions.push(Some(format!("{keyword} {}", key(anchor))));
		let subject = key(positions.len() - 1);

		let order = resolve(items(&positions), Some(&PropertyPath::new("position")))
			.expect("a single anchor cannot cycle");
		let (pa, ps) = (position_of(&order, &key(anchor)), position_of(&order, &subject));
		if after {
			prop_assert_eq!(ps, pa + 1);
		} else {
			prop_assert_eq!(ps + 1, pa);
		}
	}
}
