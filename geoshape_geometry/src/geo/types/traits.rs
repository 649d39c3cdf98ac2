use std::fmt::Debug;

/// Defines the basic interface shared by all geometric primitives.
pub trait GeometryTrait: Debug + Clone + Sized {
	/// Returns the geometric area of the geometry.
	/// For non-area geometries (e.g., points or lines), this returns 0.
	fn area(&self) -> f64;

	/// Compute the bounding box of this geometry.
	///
	/// Returns `Some([x_min, y_min, x_max, y_max])` covering all coordinates, or `None` if the
	/// geometry is empty.
	fn compute_bounds(&self) -> Option<[f64; 4]>;

	/// Estimates the number of bytes this geometry occupies, including its heap allocations.
	fn estimated_memory_size(&self) -> usize;
}

/// Merges a sequence of optional bounding boxes into one, skipping empty members.
pub(crate) fn merge_bounds(bounds: impl IntoIterator<Item = Option<[f64; 4]>>) -> Option<[f64; 4]> {
	bounds.into_iter().flatten().reduce(|a, b| {
		[a[0].min(b[0]), a[1].min(b[1]), a[2].max(b[2]), a[3].max(b[3])]
	})
}

/// Memory estimate of a vector-backed composite: its own size, unused capacity, and every member.
#[allow(clippy::ptr_arg)]
pub(crate) fn composite_memory_size<Outer, Item: GeometryTrait>(items: &Vec<Item>) -> usize {
	std::mem::size_of::<Outer>()
		+ (items.capacity() - items.len()) * std::mem::size_of::<Item>()
		+ items.iter().map(GeometryTrait::estimated_memory_size).sum::<usize>()
}
