use super::{Directed, Range};
use crate::RangeError;
use std::{cmp::Ordering, ops::Bound};

/// Position of a value relative to a range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeOrdering {
	Before,
	Intersecting,
	After,
}

impl RangeOrdering {
	pub fn is_before(&self) -> bool {
		matches!(self, RangeOrdering::Before)
	}

	pub fn is_after(&self) -> bool {
		matches!(self, RangeOrdering::After)
	}

	pub fn matches(&self) -> bool {
		matches!(self, RangeOrdering::Intersecting)
	}
}

pub trait RangePartialOrd<T = Self> {
	fn range_partial_cmp(&self, range: &Range<T>) -> Result<RangeOrdering, RangeError>;
}

impl<T: PartialOrd> RangePartialOrd<T> for T {
	fn range_partial_cmp(&self, range: &Range<T>) -> Result<RangeOrdering, RangeError> {
		let point = Directed::Start(Bound::Included(self));

		if point.try_cmp(&range.directed_start())? == Ordering::Less {
			Ok(RangeOrdering::Before)
		} else if point.try_cmp(&range.directed_end())? == Ordering::Greater {
			Ok(RangeOrdering::After)
		} else {
			Ok(RangeOrdering::Intersecting)
		}
	}
}

/// Finds the item whose range contains `value`.
///
/// The ranges given by `range_of` must be sorted and pairwise disjoint.
pub(crate) fn binary_search<I, T, F>(
	items: &[I],
	range_of: F,
	value: &T,
) -> Result<Option<usize>, RangeError>
where
	T: PartialOrd,
	F: Fn(&I) -> &Range<T>,
{
	let mut lo = 0;
	let mut hi = items.len();

	while lo < hi {
		let mid = lo + (hi - lo) / 2;
		match value.range_partial_cmp(range_of(&items[mid]))? {
			RangeOrdering::Before => hi = mid,
			RangeOrdering::After => lo = mid + 1,
			RangeOrdering::Intersecting => return Ok(Some(mid)),
		}
	}

	Ok(None)
}
