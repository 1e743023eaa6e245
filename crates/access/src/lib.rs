//! Dotted property-path access over heterogeneous values.
//!
//! # Purpose
//!
//! Reads a nested value such as `__meta.position` out of an arbitrary item without knowing its
//! concrete shape. Every container kind answers one question through [`PropertyAccess`]: "do you
//! have a child called `name`?".
//!
//! # Mental Model
//!
//! - **Mappings** (`HashMap`, `BTreeMap`, `IndexMap`, JSON objects) look the segment up as a key.
//! - **Sequences** (`Vec`, slices, arrays, `VecDeque`, JSON arrays) parse the segment as an index.
//! - **Records** expose named fields, usually through [`property_access!`].
//! - **Leaves** (strings, numbers, booleans) have no children and yield a [`Scalar`].
//!
//! # Found vs. Null
//!
//! "Not found" is always `None`. A property that exists but holds null is a found node whose
//! [`PropertyAccess::is_null`] returns true, so a legitimate null value is never confused with a
//! missing property. Resolving any further segment against a null node is "not found".

mod access;
mod impls;
mod macros;
mod path;
mod scalar;

pub use access::{PropertyAccess, resolve_path, scalar_at};
pub use path::PropertyPath;
pub use scalar::Scalar;
