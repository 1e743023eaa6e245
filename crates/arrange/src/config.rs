//! Sorter configuration.
//!
//! Embeds in a host's own config file, e.g. in TOML:
//!
//! ```toml
//! position_path = "__meta.position"
//! ```

use arrange_access::PropertyPath;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Property path read when no other path is configured.
pub const DEFAULT_POSITION_PATH: &str = "position";

/// Settings for a [`PositionalSorter`](crate::PositionalSorter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SorterConfig {
	/// Where each item's position value lives. `None` orders everything by natural order.
	pub position_path: Option<PropertyPath>,
}

impl Default for SorterConfig {
	fn default() -> Self {
		Self {
			position_path: Some(PropertyPath::new(DEFAULT_POSITION_PATH)),
		}
	}
}

impl SorterConfig {
	/// Creates a config reading positions from `path`.
	pub fn with_position_path(path: impl Into<PropertyPath>) -> Self {
		Self {
			position_path: Some(path.into()),
		}
	}

	/// Parses a TOML fragment. Missing fields keep their defaults.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	/// Decodes a JSON value. An explicit `null` path disables position lookup.
	pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
		Ok(serde_json::from_value(value)?)
	}
}
