//! Bucketing pass: classify every item by its directive.

use std::collections::BTreeMap;

use arrange_access::{PropertyAccess, PropertyPath, scalar_at};
use indexmap::IndexMap;
use tracing::trace;

use crate::directive::PositionDirective;


/// Weight (or middle slot) to entry indices, in input order within each cell.
pub(crate) type Cells<W> = BTreeMap<W, Vec<usize>>;

/// One item of a resolution run, with its directive already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Entry<'a> {
	pub key: &'a str,
	pub natural_index: Option<i64>,
	pub directive: PositionDirective,
}

impl<'a> Entry<'a> {
	/// Reads the position value of `value` at `path` and parses it.
	pub fn read<V>(
		key: &'a str,
		natural_index: Option<i64>,
		value: &V,
		path: Option<&PropertyPath>,
	) -> Self
	where
		V: PropertyAccess + ?Sized,
	{
		let raw = path
			.and_then(|path| scalar_at(value, path))
			.map(|scalar| scalar.to_string());
		Self {
			key,
			natural_index,
			directive: PositionDirective::parse(raw.as_deref()),
		}
	}
}

/// Entry indices grouped by directive kind.
///
/// Every entry lands in exactly one of `start`, `middle`, `end`, `before` or `after`. Anchored
/// cells are keyed by reference in first-seen order so orphan handling is deterministic.
#[derive(Debug, Default)]
pub(crate) struct Buckets {
	pub start: Cells<u32>,
	pub middle: Cells<i64>,
	pub end: Cells<u32>,
	pub before: IndexMap<String, Cells<u32>>,
	pub after: IndexMap<String, Cells<u32>>,
}

impl Buckets {
	/// Runs the bucketing pass over `entries`.
	pub fn index(entries: &[Entry<'_>]) -> Self {
		let mut buckets = Self::default();
		for (index, entry) in entries.iter().enumerate() {
			trace!(key = entry.key, directive = %entry.directive, "bucketing item");
			match &entry.directive {
				PositionDirective::Start(weight) => {
					buckets.start.entry(*weight).or_default().push(index);
				}
				PositionDirective::End(weight) => {
					buckets.end.entry(*weight).or_default().push(index);
				}
				PositionDirective::Before { reference, weight } => {
					push_anchored(&mut buckets.before, reference, *weight, index);
				}
				PositionDirective::After { reference, weight } => {
					push_anchored(&mut buckets.after, reference, *weight, index);
				}
				directive @ (PositionDirective::Index(_) | PositionDirective::Unspecified) => {
					let slot = directive.middle_index(entry.natural_index).unwrap_or_default();
					buckets.middle.entry(slot).or_default().push(index);
				}
			}
		}
		buckets
	}
}

fn push_anchored(
	anchored: &mut IndexMap<String, Cells<u32>>,
	reference: &str,
	weight: u32,
	index: usize,
) {
	if let Some(cells) = anchored.get_mut(reference) {
		cells.entry(weight).or_default().push(index);
		return;
	}
	anchored.insert(reference.to_owned(), Cells::from([(weight, vec![index])]));
}
