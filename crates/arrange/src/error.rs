//! Error types for ordering and configuration.

use thiserror::Error;

/// Errors produced while resolving an order.
///
/// Malformed directives and missing anchors are not errors: they degrade to natural order and
/// the orphan placement respectively.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
	/// `before`/`after` references loop back onto themselves.
	///
	/// `path` lists the canonical keys of the loop, starting and ending with the same key.
	#[error("position reference cycle: {}", .path.join(" -> "))]
	Cycle {
		/// Canonical keys along the loop.
		path: Vec<String>,
	},
}

/// Result type for ordering operations.
pub type Result<T> = std::result::Result<T, SortError>;

/// Errors that can occur when parsing sorter configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML config error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error decoding a JSON configuration value.
	#[error("JSON config error: {0}")]
	Json(#[from] serde_json::Error),
}
