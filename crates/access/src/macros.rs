//! Record support for [`PropertyAccess`](crate::PropertyAccess).

/// Implements [`PropertyAccess`](crate::PropertyAccess) for a struct by exposing named fields.
///
/// Every listed field must itself implement `PropertyAccess`. A bare `field` is exposed under its
/// own name; `"name" => field` exposes it under another name (getter-style names, or keys that
/// are not valid identifiers). Both forms can be mixed.
///
/// ```ignore
/// struct Meta { position: Option<String> }
/// struct Plugin { name: String, meta: Meta }
///
/// property_access!(Meta { position });
/// property_access!(Plugin { name, "__meta" => meta });
/// ```
#[macro_export]
macro_rules! property_access {
	($ty:ty { $($entries:tt)* }) => {
		impl $crate::PropertyAccess for $ty {
			fn property(&self, name: &str) -> Option<&dyn $crate::PropertyAccess> {
				$crate::__property_access_entries!(self, name, $($entries)*);
				None
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __property_access_entries {
	($self:ident, $name:ident $(,)?) => {};
	($self:ident, $name:ident, $key:literal => $field:ident $(, $($rest:tt)*)?) => {
		if $name == $key {
			return Some(&$self.$field as &dyn $crate::PropertyAccess);
		}
		$crate::__property_access_entries!($self, $name, $($($rest)*)?);
	};
	($self:ident, $name:ident, $field:ident $(, $($rest:tt)*)?) => {
		if $name == stringify!($field) {
			return Some(&$self.$field as &dyn $crate::PropertyAccess);
		}
		$crate::__property_access_entries!($self, $name, $($($rest)*)?);
	};
}
