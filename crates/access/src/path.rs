use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A dotted property path such as `__meta.position`.
///
/// Segments are never dropped: `""` is one empty segment and `"a..b"` has an empty middle
/// segment, both of which simply fail to resolve against ordinary values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PropertyPath {
	segments: Vec<String>,
}

impl PropertyPath {
	/// Splits `path` on `.`.
	pub fn new(path: &str) -> Self {
		Self {
			segments: path.split('.').map(str::to_owned).collect(),
		}
	}

	/// Iterates the path segments in order.
	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().map(String::as_str)
	}

	/// Returns the number of segments (always at least one).
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns true if the path has no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}
}

impl fmt::Display for PropertyPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}

impl FromStr for PropertyPath {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(Self::new(s))
	}
}

impl From<&str> for PropertyPath {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for PropertyPath {
	fn from(path: String) -> Self {
		Self::new(&path)
	}
}

impl From<PropertyPath> for String {
	fn from(path: PropertyPath) -> Self {
		path.to_string()
	}
}
