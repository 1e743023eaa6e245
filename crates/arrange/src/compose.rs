//! Composition pass: turn buckets into one ordered sequence.
//!
//! # Segments
//!
//! The output is `start ++ middle ++ end`:
//!
//! - **Start:** start cells by weight, descending.
//! - **Middle:** middle cells by slot, ascending.
//! - **End:** end cells by weight, ascending.
//!
//! Each key is expanded in place: its `before` cells (ascending) go first, then the key, then its
//! `after` cells (descending). Higher weights therefore sit closest to their anchor on both sides.
//!
//! # Orphans
//!
//! A reference that names no item of the run is orphaned. Orphaned `before` groups are expanded
//! (descending) and prepended to the start segment as one block. Orphaned `after` groups are
//! expanded (descending) and appended to the middle segment.
//!
//! # Cycles
//!
//! Every key is marked in progress while it expands; meeting an in-progress key again is a
//! reference cycle and fails with [`SortError::Cycle`]. Items hanging off a cycle are never
//! reached from a segment or an orphan group, so once composition is done any unprocessed item
//! is expanded again under the same guard to report the loop.

use rustc_hash::FxHashSet;
use tracing::{debug, warn};

use crate::bucket::{Buckets, Cells, Entry};
use crate::error::{Result, SortError};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum WeightOrder {
	Ascending,
	Descending,
}

/// Composes the final order as indices into `entries`.
pub(crate) fn compose(entries: &[Entry<'_>], buckets: &Buckets) -> Result<Vec<usize>> {
	let mut composer = Composer::new(entries, buckets);

	let mut start = Vec::new();
	composer.expand_cells(&buckets.start, WeightOrder::Descending, &mut start)?;
	let mut middle = Vec::new();
	composer.expand_cells(&buckets.middle, WeightOrder::Ascending, &mut middle)?;
	let mut end = Vec::new();
	composer.expand_cells(&buckets.end, WeightOrder::Ascending, &mut end)?;

	let known: FxHashSet<&str> = entries.iter().map(|entry| entry.key).collect();
	let mut orphans = Vec::new();
	for (reference, cells) in &buckets.before {
		if known.contains(reference.as_str()) {
			continue;
		}
		debug!(reference = %reference, "orphaned before reference; placing at start");
		composer.expand_cells(cells, WeightOrder::Descending, &mut orphans)?;
	}
	for (reference, cells) in &buckets.after {
		if known.contains(reference.as_str()) {
			continue;
		}
		debug!(reference = %reference, "orphaned after reference; placing at end of middle");
		composer.expand_cells(cells, WeightOrder::Descending, &mut middle)?;
	}

	composer.detect_cycle()?;

	orphans.extend(start);
	orphans.extend(middle);
	orphans.extend(end);
	Ok(orphans)
}

struct Composer<'e, 'k> {
	entries: &'e [Entry<'k>],
	buckets: &'e Buckets,
	processed: Vec<bool>,
	in_progress: Vec<bool>,
	stack: Vec<usize>,
}

impl<'e, 'k> Composer<'e, 'k> {
	fn new(entries: &'e [Entry<'k>], buckets: &'e Buckets) -> Self {
		Self {
			entries,
			buckets,
			processed: vec![false; entries.len()],
			in_progress: vec![false; entries.len()],
			stack: Vec::new(),
		}
	}

	fn expand_cells<W: Ord>(
		&mut self,
		cells: &Cells<W>,
		order: WeightOrder,
		out: &mut Vec<usize>,
	) -> Result<()> {
		match order {
			WeightOrder::Ascending => {
				for keys in cells.values() {
					self.expand_all(keys, out)?;
				}
			}
			WeightOrder::Descending => {
				for keys in cells.values().rev() {
					self.expand_all(keys, out)?;
				}
			}
		}
		Ok(())
	}

	fn expand_all(&mut self, keys: &[usize], out: &mut Vec<usize>) -> Result<()> {
		for &index in keys {
			self.expand(index, out)?;
		}
		Ok(())
	}

	/// Emits `index` surrounded by everything anchored to it.
	fn expand(&mut self, index: usize, out: &mut Vec<usize>) -> Result<()> {
		if self.in_progress[index] {
			return Err(self.cycle_through(index));
		}
		self.in_progress[index] = true;
		self.stack.push(index);

		let buckets = self.buckets;
		let key = self.entries[index].key;
		if let Some(cells) = buckets.before.get(key) {
			self.expand_cells(cells, WeightOrder::Ascending, out)?;
		}
		out.push(index);
		self.processed[index] = true;
		if let Some(cells) = buckets.after.get(key) {
			self.expand_cells(cells, WeightOrder::Descending, out)?;
		}

		self.stack.pop();
		self.in_progress[index] = false;
		Ok(())
	}

	/// Re-expands unreached items; only a reference cycle can leave items unreached.
	fn detect_cycle(&mut self) -> Result<()> {
		let mut scratch = Vec::new();
		for index in 0..self.entries.len() {
			if !self.processed[index] {
				self.expand(index, &mut scratch)?;
			}
		}
		Ok(())
	}

	fn cycle_through(&self, index: usize) -> SortError {
		let from = self.stack.iter().position(|&i| i == index).unwrap_or(0);
		let path: Vec<String> = self.stack[from..]
			.iter()
			.chain(std::iter::once(&index))
			.map(|&i| self.entries[i].key.to_owned())
			.collect();
		warn!(cycle = ?path, "position reference cycle detected");
		SortError::Cycle { path }
	}
}
