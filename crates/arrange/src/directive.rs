//! # Position directives
//!
//! Parses the free-form position value of an item into a [`PositionDirective`].
//!
//! ## Grammar
//!
//! ```text
//! directive = "start" weight?
//!           | "end" weight?
//!           | "before" ws reference weight?
//!           | "after" ws reference weight?
//!           | integer
//! weight    = ws digit+
//! reference = non-whitespace+
//! ```
//!
//! Keywords are case-sensitive and the whole value must match. A value that starts with a
//! keyword but does not match its pattern (`start soon`, `before`) is malformed and degrades to
//! [`PositionDirective::Unspecified`], as does anything that is neither a keyword nor an integer.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;


static START: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^start(?:\s+([0-9]+))?$").expect("start pattern is valid"));
static END: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^end(?:\s+([0-9]+))?$").expect("end pattern is valid"));
static AFTER: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^after\s+(\S+)(?:\s+([0-9]+))?$").expect("after pattern is valid")
});
static BEFORE: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^before\s+(\S+)(?:\s+([0-9]+))?$").expect("before pattern is valid")
});

/// Where an item asks to be placed in the final order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PositionDirective {
	/// Placed in the start segment; higher weights come first.
	Start(u32),
	/// Placed in the end segment; higher weights come last.
	End(u32),
	/// Placed immediately before `reference`; higher weights sit closer to it.
	Before { reference: String, weight: u32 },
	/// Placed immediately after `reference`; higher weights sit closer to it.
	After { reference: String, weight: u32 },
	/// Placed in the middle segment at this numeric slot.
	Index(i64),
	/// No usable directive; placed in the middle segment by natural order.
	Unspecified,
}

impl PositionDirective {
	/// Parses a raw position value. `None` means the item has no position value at all.
	pub fn parse(raw: Option<&str>) -> Self {
		let Some(text) = raw else {
			return Self::Unspecified;
		};

		let keyword = if text.starts_with("start") {
			START.captures(text).map(|c| Self::Start(weight(&c, 1, text)))
		} else if text.starts_with("end") {
			END.captures(text).map(|c| Self::End(weight(&c, 1, text)))
		} else if text.starts_with("after") {
			AFTER.captures(text).map(|c| Self::After {
				reference: c[1].to_owned(),
				weight: weight(&c, 2, text),
			})
		} else if text.starts_with("before") {
			BEFORE.captures(text).map(|c| Self::Before {
				reference: c[1].to_owned(),
				weight: weight(&c, 2, text),
			})
		} else {
			return Self::parse_index(text);
		};

		keyword.unwrap_or_else(|| {
			debug!(position = text, "malformed position directive; using natural order");
			Self::parse_index(text)
		})
	}

	fn parse_index(text: &str) -> Self {
		text.trim()
			.parse()
			.map_or(Self::Unspecified, Self::Index)
	}

	/// Returns the middle-segment slot for `Index` and `Unspecified` directives.
	///
	/// A positionally keyed item (`natural_index` is `Some`) always uses its natural index, even
	/// over an explicit numeric directive. Otherwise the numeric directive is used, and
	/// `Unspecified` falls back to slot 0.
	pub fn middle_index(&self, natural_index: Option<i64>) -> Option<i64> {
		let parsed = match self {
			Self::Index(value) => *value,
			Self::Unspecified => 0,
			_ => return None,
		};
		Some(natural_index.unwrap_or(parsed))
	}

	/// Returns the anchor key of `before`/`after` directives.
	pub fn reference(&self) -> Option<&str> {
		match self {
			Self::Before { reference, .. } | Self::After { reference, .. } => Some(reference),
			_ => None,
		}
	}
}

/// Reads the optional weight group. Digit runs that overflow count as weight 0.
fn weight(captures: &Captures<'_>, group: usize, text: &str) -> u32 {
	let Some(digits) = captures.get(group) else {
		return 0;
	};
	digits.as_str().parse().unwrap_or_else(|_| {
		debug!(position = text, "position weight out of range; using 0");
		0
	})
}

impl FromStr for PositionDirective {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::parse(Some(s)))
	}
}

impl fmt::Display for PositionDirective {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Start(0) => f.write_str("start"),
			Self::Start(weight) => write!(f, "start {weight}"),
			Self::End(0) => f.write_str("end"),
			Self::End(weight) => write!(f, "end {weight}"),
			Self::Before { reference, weight: 0 } => write!(f, "before {reference}"),
			Self::Before { reference, weight } => write!(f, "before {reference} {weight}"),
			Self::After { reference, weight: 0 } => write!(f, "after {reference}"),
			Self::After { reference, weight } => write!(f, "after {reference} {weight}"),
			Self::Index(value) => write!(f, "{value}"),
			Self::Unspecified => f.write_str("unspecified"),
		}
	}
}
