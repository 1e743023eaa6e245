//! Positional ordering of keyed contributions.
//!
//! # Purpose
//!
//! Merges a set of contributions (plugins, configuration fragments, pipeline stages) into one
//! deterministic sequence. No contributor needs to know where the others sit: each declares a
//! relative position hint and the resolver composes a total order from all of them.
//!
//! # Mental Model
//!
//! 1. **Read:** Each item's position value is read through a [`PropertyPath`] (default
//!    `position`) and parsed into a [`PositionDirective`].
//! 2. **Bucket:** Items are grouped into start, middle and end cells by weight or slot, and into
//!    before/after cells by the key they reference.
//! 3. **Compose:** Start (heaviest first), middle (lowest slot first) and end (lightest first)
//!    segments are built, expanding every key together with everything anchored to it.
//! 4. **Orphans:** Items anchored to a key that does not exist are placed at the very start
//!    (`before`) or at the end of the middle segment (`after`).
//!
//! # Directive Grammar
//!
//! | Value | Placement |
//! |-------|-----------|
//! | `start`, `start <n>` | Start segment, higher `n` first. |
//! | `end`, `end <n>` | End segment, higher `n` last. |
//! | `before <key>`, `before <key> <n>` | Immediately before `key`, higher `n` closer. |
//! | `after <key>`, `after <key> <n>` | Immediately after `key`, higher `n` closer. |
//! | `<integer>` | Middle segment, ascending. |
//! | absent or malformed | Middle segment, natural order. |
//!
//! # Invariants
//!
//! - The result is a permutation of the input keys, or an error.
//!   - Enforced in: `compose::compose` (orphan placement, unreached-item cycle check).
//!   - Tested by: `tests/it/properties.rs`
//!   - Failure symptom: Items silently dropped or duplicated.
//!
//! - Reference cycles fail fast instead of recursing forever.
//!   - Enforced in: `compose::Composer::expand` (in-progress marker).
//!   - Tested by: `compose::tests::two_item_cycle_is_reported`
//!   - Failure symptom: Stack overflow on `a before b`, `b before a`.
//!
//! - A memoized order is never served after a mutation.
//!   - Enforced in: [`PositionalSorter`] (`&mut self` mutators drop the memo).
//!   - Tested by: `sorter::tests::insert_invalidates_memo`
//!   - Failure symptom: Stale order after inserting or editing an item.
//!
//! # Example
//!
//! ```
//! use arrange::{PropertyPath, resolve};
//! use serde_json::json;
//!
//! let items = vec![
//! 	("key1", json!({ "position": "start" })),
//! 	("key2", json!({ "position": "before key1" })),
//! 	("key3", json!({ "position": "after key2" })),
//! ];
//! let order = resolve(items, Some(&PropertyPath::new("position"))).unwrap();
//! assert_eq!(order, vec!["key2", "key3", "key1"]);
//! ```

mod bucket;
mod compose;
pub mod config;
pub mod directive;
pub mod error;
mod key;
mod sorter;

pub use arrange_access::{PropertyAccess, PropertyPath, Scalar, property_access};
pub use config::{DEFAULT_POSITION_PATH, SorterConfig};
pub use directive::PositionDirective;
pub use error::{ConfigError, Result, SortError};
pub use key::ItemKey;
pub use sorter::PositionalSorter;

/// Orders `items` by the position value found at `position_path` and returns their keys.
///
/// `None` as the path orders everything by natural order.
pub fn resolve<K, V, I>(items: I, position_path: Option<&PropertyPath>) -> Result<Vec<K>>
where
	K: ItemKey,
	V: PropertyAccess,
	I: IntoIterator<Item = (K, V)>,
{
	PositionalSorter::with_position_path(items, position_path.cloned()).into_sorted_keys()
}

/// Like [`resolve`], but returns the key/value pairs.
pub fn resolve_to_pairs<K, V, I>(items: I, position_path: Option<&PropertyPath>) -> Result<Vec<(K, V)>>
where
	K: ItemKey,
	V: PropertyAccess,
	I: IntoIterator<Item = (K, V)>,
{
	PositionalSorter::with_position_path(items, position_path.cloned()).into_sorted()
}

/// Orders a keyless sequence and returns the input positions in resolved order.
pub fn resolve_sequence<V, I>(values: I, position_path: Option<&PropertyPath>) -> Result<Vec<usize>>
where
	V: PropertyAccess,
	I: IntoIterator<Item = V>,
{
	resolve(values.into_iter().enumerate(), position_path)
}
