//! Long-lived sorter with a memoized result.
//!
//! # Memoization
//!
//! The computed order is cached after the first read. Every method that can change the outcome
//! takes `&mut self` and drops the cache, so a stale order can only be observed through interior
//! mutability inside the values themselves; call [`PositionalSorter::invalidate`] in that case.

use std::sync::OnceLock;

use arrange_access::{PropertyAccess, PropertyPath};
use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::bucket::{Buckets, Entry};
use crate::compose::compose;
use crate::config::SorterConfig;
use crate::directive::PositionDirective;
use crate::error::Result;
use crate::key::ItemKey;


/// A keyed collection ordered by each item's position directive.
///
/// Items are held in insertion order under their canonical key. Inserting a second item with the
/// same canonical key replaces the first one in place (last write wins).
#[derive(Debug)]
pub struct PositionalSorter<K, V> {
	items: IndexMap<String, (K, V)>,
	position_path: Option<PropertyPath>,
	memo: OnceLock<Result<Vec<usize>>>,
}

impl<K: ItemKey, V: PropertyAccess> PositionalSorter<K, V> {
	/// Creates a sorter over `items` using `config`.
	pub fn new<I>(items: I, config: &SorterConfig) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		Self::with_position_path(items, config.position_path.clone())
	}

	/// Creates a sorter reading positions from `position_path`, or none at all.
	pub fn with_position_path<I>(items: I, position_path: Option<PropertyPath>) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut sorter = Self {
			items: IndexMap::new(),
			position_path,
			memo: OnceLock::new(),
		};
		for (key, value) in items {
			sorter.insert(key, value);
		}
		sorter
	}

	/// Returns the number of items.
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Returns true if there are no items.
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	/// Returns the configured position path.
	pub fn position_path(&self) -> Option<&PropertyPath> {
		self.position_path.as_ref()
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&V> {
		self.items.get(key).map(|(_, value)| value)
	}

	/// Inserts an item, returning the item it replaced.
	pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
		self.invalidate();
		let canonical = key.canonical().into_owned();
		let replaced = self.items.insert(canonical, (key, value));
		if replaced.is_some() {
			debug!("canonical key collision; last write wins");
		}
		replaced
	}

	/// Removes the item stored under `key`, keeping the order of the rest.
	pub fn remove(&mut self, key: &str) -> Option<(K, V)> {
		self.invalidate();
		self.items.shift_remove(key)
	}

	/// Returns a mutable reference to the value under `key`.
	pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
		self.invalidate();
		self.items.get_mut(key).map(|(_, value)| value)
	}

	/// Iterates items mutably in insertion order.
	pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
		self.invalidate();
		self.items.values_mut().map(|(key, value)| (&*key, value))
	}

	/// Replaces the position path.
	pub fn set_position_path(&mut self, position_path: Option<PropertyPath>) {
		self.invalidate();
		self.position_path = position_path;
	}

	/// Drops the memoized order.
	pub fn invalidate(&mut self) {
		if self.memo.take().is_some() {
			trace!("memoized order invalidated");
		}
	}

	/// Returns true if the order has been computed since the last change.
	pub fn is_memoized(&self) -> bool {
		self.memo.get().is_some()
	}

	/// Returns each item's parsed directive, in insertion order.
	pub fn directives(&self) -> impl Iterator<Item = (&K, PositionDirective)> {
		self.entries()
			.into_iter()
			.zip(self.items.values())
			.map(|(entry, (key, _))| (key, entry.directive))
	}

	/// Returns the keys in resolved order.
	pub fn sorted_keys(&self) -> Result<Vec<&K>> {
		Ok(self.sorted()?.into_iter().map(|(key, _)| key).collect())
	}

	/// Returns the items in resolved order.
	pub fn sorted(&self) -> Result<Vec<(&K, &V)>> {
		let order = self.order()?;
		Ok(order
			.iter()
			.filter_map(|&index| self.items.get_index(index))
			.map(|(_, (key, value))| (key, value))
			.collect())
	}

	/// Consumes the sorter, returning the keys in resolved order.
	pub fn into_sorted_keys(self) -> Result<Vec<K>> {
		Ok(self.into_sorted()?.into_iter().map(|(key, _)| key).collect())
	}

	/// Consumes the sorter, returning the items in resolved order.
	pub fn into_sorted(self) -> Result<Vec<(K, V)>> {
		let order = self.order()?.to_vec();
		let mut slots: Vec<Option<(K, V)>> = self.items.into_values().map(Some).collect();
		Ok(order
			.into_iter()
			.filter_map(|index| slots.get_mut(index).and_then(Option::take))
			.collect())
	}

	fn order(&self) -> Result<&[usize]> {
		if self.is_memoized() {
			trace!("reusing memoized order");
		}
		self.memo
			.get_or_init(|| self.compute())
			.as_deref()
			.map_err(Clone::clone)
	}

	fn entries(&self) -> Vec<Entry<'_>> {
		let path = self.position_path.as_ref();
		self.items
			.iter()
			.map(|(canonical, (key, value))| {
				Entry::read(canonical, key.positional_index(), value, path)
			})
			.collect()
	}

	fn compute(&self) -> Result<Vec<usize>> {
		let entries = self.entries();
		let buckets = Buckets::index(&entries);
		let order = compose(&entries, &buckets)?;
		debug!(items = entries.len(), "resolved positional order");
		Ok(order)
	}
}

impl<V: PropertyAccess> PositionalSorter<usize, V> {
	/// Creates a sorter over a keyless sequence; keys are the input positions.
	pub fn from_sequence<I>(values: I, config: &SorterConfig) -> Self
	where
		I: IntoIterator<Item = V>,
	{
		Self::new(values.into_iter().enumerate(), config)
	}
}

impl<K: ItemKey, V: PropertyAccess> FromIterator<(K, V)> for PositionalSorter<K, V> {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(items: I) -> Self {
		Self::new(items, &SorterConfig::default())
	}
}
