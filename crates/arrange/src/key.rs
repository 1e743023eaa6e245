use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// Identity of an item in the collection being ordered.
///
/// The canonical form is the string that `before`/`after` directives refer to. Integer keys also
/// carry a positional index: an item keyed by an integer is ordered among the unanchored items by
/// that integer, ahead of whatever number its own position value spells out.
pub trait ItemKey {
	/// Returns the canonical string identity used for bucketing and references.
	fn canonical(&self) -> Cow<'_, str>;

	/// Returns the natural index for positionally keyed items.
	fn positional_index(&self) -> Option<i64> {
		None
	}
}

impl ItemKey for String {
	fn canonical(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl ItemKey for &str {
	fn canonical(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

impl ItemKey for Cow<'_, str> {
	fn canonical(&self) -> Cow<'_, str> {
		Cow::Borrowed(self)
	}
}

macro_rules! shared_str_key {
	($($ptr:ty),* $(,)?) => {
		$(
			impl ItemKey for $ptr {
				fn canonical(&self) -> Cow<'_, str> {
					Cow::Borrowed(self)
				}
			}
		)*
	};
}

shared_str_key!(Box<str>, Rc<str>, Arc<str>);

macro_rules! integer_key {
	($($int:ty),* $(,)?) => {
		$(
			impl ItemKey for $int {
				fn canonical(&self) -> Cow<'_, str> {
					Cow::Owned(self.to_string())
				}

				fn positional_index(&self) -> Option<i64> {
					i64::try_from(*self).ok()
				}
			}
		)*
	};
}

integer_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
