use crate::{PropertyPath, Scalar};

/// A node that can be navigated by property name.
///
/// Implemented per container kind instead of through runtime introspection. The trait is object
/// safe: children are returned as `&dyn PropertyAccess`, which lets a path cross container kinds
/// (a record holding a map holding a JSON value).
pub trait PropertyAccess {
	/// Returns the child called `name`, or `None` if this node has no such property.
	fn property(&self, name: &str) -> Option<&dyn PropertyAccess>;

	/// Returns the leaf value of this node.
	///
	/// `None` for containers and for null nodes.
	fn scalar(&self) -> Option<Scalar> {
		None
	}

	/// Returns true if this node is a present-but-null value.
	fn is_null(&self) -> bool {
		false
	}
}

/// Walks `path` from `value`, one segment at a time.
///
/// Returns `None` the moment a segment is not found, or when a segment would have to be resolved
/// against a null node. The final node itself may be null.
pub fn resolve_path<'a, T>(value: &'a T, path: &PropertyPath) -> Option<&'a dyn PropertyAccess>
where
	T: PropertyAccess + ?Sized,
{
	let mut segments = path.segments();
	if value.is_null() {
		return None;
	}
	let mut node = value.property(segments.next()?)?;
	for segment in segments {
		if node.is_null() {
			return None;
		}
		node = node.property(segment)?;
	}
	Some(node)
}

/// Resolves `path` and returns the leaf value found there.
pub fn scalar_at<T>(value: &T, path: &PropertyPath) -> Option<Scalar>
where
	T: PropertyAccess + ?Sized,
{
	resolve_path(value, path)?.scalar()
}
