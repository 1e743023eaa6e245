//! [`PropertyAccess`] for standard containers, smart pointers, leaves and JSON values.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::{PropertyAccess, Scalar};

fn parse_index(name: &str) -> Option<usize> {
	name.parse().ok()
}

impl<K, T, S> PropertyAccess for HashMap<K, T, S>
where
	K: Borrow<str> + Hash + Eq,
	T: PropertyAccess,
	S: BuildHasher,
{
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.get(name).map(|v| v as &dyn PropertyAccess)
	}
}

impl<K, T, S> PropertyAccess for IndexMap<K, T, S>
where
	K: Borrow<str> + Hash + Eq,
	T: PropertyAccess,
	S: BuildHasher,
{
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.get(name).map(|v| v as &dyn PropertyAccess)
	}
}

impl<K, T> PropertyAccess for BTreeMap<K, T>
where
	K: Borrow<str> + Ord,
	T: PropertyAccess,
{
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.get(name).map(|v| v as &dyn PropertyAccess)
	}
}

impl<T: PropertyAccess> PropertyAccess for [T] {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.get(parse_index(name)?).map(|v| v as &dyn PropertyAccess)
	}
}

impl<T: PropertyAccess, const N: usize> PropertyAccess for [T; N] {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.as_slice().property(name)
	}
}

impl<T: PropertyAccess> PropertyAccess for Vec<T> {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.as_slice().property(name)
	}
}

impl<T: PropertyAccess> PropertyAccess for VecDeque<T> {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.get(parse_index(name)?).map(|v| v as &dyn PropertyAccess)
	}
}

impl<T: PropertyAccess> PropertyAccess for Option<T> {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		self.as_ref()?.property(name)
	}

	fn scalar(&self) -> Option<Scalar> {
		self.as_ref()?.scalar()
	}

	fn is_null(&self) -> bool {
		self.as_ref().is_none_or(PropertyAccess::is_null)
	}
}

macro_rules! forward_pointer {
	($($ptr:ident),* $(,)?) => {
		$(
			impl<T: PropertyAccess + ?Sized> PropertyAccess for $ptr<T> {
				fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
					(**self).property(name)
				}

				fn scalar(&self) -> Option<Scalar> {
					(**self).scalar()
				}

				fn is_null(&self) -> bool {
					(**self).is_null()
				}
			}
		)*
	};
}

forward_pointer!(Box, Rc, Arc);

impl<T: PropertyAccess + ?Sized> PropertyAccess for &T {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		(**self).property(name)
	}

	fn scalar(&self) -> Option<Scalar> {
		(**self).scalar()
	}

	fn is_null(&self) -> bool {
		(**self).is_null()
	}
}

/// An opaque item with no properties.
impl PropertyAccess for () {
	fn property(&self, _name: &str) -> Option<&dyn PropertyAccess> {
		None
	}
}

impl PropertyAccess for str {
	fn property(&self, _name: &str) -> Option<&dyn PropertyAccess> {
		None
	}

	fn scalar(&self) -> Option<Scalar> {
		Some(Scalar::Text(self.to_owned()))
	}
}

impl PropertyAccess for String {
	fn property(&self, _name: &str) -> Option<&dyn PropertyAccess> {
		None
	}

	fn scalar(&self) -> Option<Scalar> {
		Some(Scalar::Text(self.clone()))
	}
}

impl PropertyAccess for bool {
	fn property(&self, _name: &str) -> Option<&dyn PropertyAccess> {
		None
	}

	fn scalar(&self) -> Option<Scalar> {
		Some(Scalar::Bool(*self))
	}
}

macro_rules! integer_leaf {
	($($int:ty),* $(,)?) => {
		$(
			impl PropertyAccess for $int {
				fn property(&self, _name: &str) -> Option<&dyn PropertyAccess> {
					None
				}

				fn scalar(&self) -> Option<Scalar> {
					Some(match i64::try_from(*self) {
						Ok(value) => Scalar::Int(value),
						Err(_) => Scalar::Text(self.to_string()),
					})
				}
			}
		)*
	};
}

integer_leaf!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_leaf {
	($($float:ty),* $(,)?) => {
		$(
			impl PropertyAccess for $float {
				fn property(&self, _name: &str) -> Option<&dyn PropertyAccess> {
					None
				}

				fn scalar(&self) -> Option<Scalar> {
					Some(Scalar::Float(f64::from(*self)))
				}
			}
		)*
	};
}

float_leaf!(f32, f64);

impl PropertyAccess for Value {
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess> {
		match self {
			Value::Object(map) => map.get(name).map(|v| v as &dyn PropertyAccess),
			Value::Array(items) => items.property(name),
			_ => None,
		}
	}

	fn scalar(&self) -> Option<Scalar> {
		match self {
			Value::String(text) => Some(Scalar::Text(text.clone())),
			Value::Number(number) => number
				.as_i64()
				.map(Scalar::Int)
				.or_else(|| number.as_f64().map(Scalar::Float)),
			Value::Bool(value) => Some(Scalar::Bool(*value)),
			Value::Null | Value::Array(_) | Value::Object(_) => None,
		}
	}

	fn is_null(&self) -> bool {
		self.is_null()
	}
}
