use std::fmt;

/// A leaf value read at the end of a property path.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	Text(String),
	Int(i64),
	Float(f64),
	Bool(bool),
}

impl Scalar {
	/// Returns the text if this is a [`Scalar::Text`].
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the integer if this is a [`Scalar::Int`].
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Text(text) => f.write_str(text),
			Self::Int(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Bool(value) => write!(f, "{value}"),
		}
	}
}

impl From<&str> for Scalar {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

impl From<String> for Scalar {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<i64> for Scalar {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}
