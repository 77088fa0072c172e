use super::Range;
use crate::RangeError;
use std::{
	ops::{Bound, RangeBounds},
	str::FromStr,
};

/// Range where the start bound is excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeFromExcluded<T> {
	pub start: T,
}

impl<T> RangeFromExcluded<T> {
	pub const fn new(start: T) -> RangeFromExcluded<T> {
		RangeFromExcluded { start }
	}
}

impl<T> RangeBounds<T> for RangeFromExcluded<T> {
	fn start_bound(&self) -> Bound<&T> {
		Bound::Excluded(&self.start)
	}

	fn end_bound(&self) -> Bound<&T> {
		Bound::Unbounded
	}
}

/// Range where both bounds are excluded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeFromExcludedTo<T> {
	pub start: T,
	pub end: T,
}

impl<T> RangeFromExcludedTo<T> {
	pub const fn new(start: T, end: T) -> RangeFromExcludedTo<T> {
		RangeFromExcludedTo { start, end }
	}
}

impl<T> RangeBounds<T> for RangeFromExcludedTo<T> {
	fn start_bound(&self) -> Bound<&T> {
		Bound::Excluded(&self.start)
	}

	fn end_bound(&self) -> Bound<&T> {
		Bound::Excluded(&self.end)
	}
}

/// Range where the start bound is excluded and the end bound included.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RangeFromExcludedToIncluded<T> {
	pub start: T,
	pub end: T,
}

impl<T> RangeFromExcludedToIncluded<T> {
	pub const fn new(start: T, end: T) -> RangeFromExcludedToIncluded<T> {
		RangeFromExcludedToIncluded { start, end }
	}
}

impl<T> RangeBounds<T> for RangeFromExcludedToIncluded<T> {
	fn start_bound(&self) -> Bound<&T> {
		Bound::Excluded(&self.start)
	}

	fn end_bound(&self) -> Bound<&T> {
		Bound::Included(&self.end)
	}
}

/// Values that describe a single range.
///
/// This covers the standard range syntax (`a..b`, `a..=b`, `a..`, `..b`,
/// `..=b`, `..`), `(start, end)` pairs read as `[start, end)`, bound pairs,
/// range literals such as `"(1, 7]"` and the excluded-start ranges of this
/// crate.
pub trait TryIntoRange<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError>;
}

impl<T: PartialOrd> TryIntoRange<T> for Range<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Ok(self)
	}
}

impl<'a, T: Clone + PartialOrd> TryIntoRange<T> for &'a Range<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Ok(self.clone())
	}
}

impl<T: PartialOrd> TryIntoRange<T> for std::ops::Range<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::new(self.start, self.end)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for std::ops::RangeInclusive<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		let (start, end) = self.into_inner();
		Range::closed(start, end)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for std::ops::RangeFrom<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::from_start(self.start)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for std::ops::RangeTo<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::until(self.end)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for std::ops::RangeToInclusive<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::with_bounds(Bound::Unbounded, Bound::Included(self.end))
	}
}

impl<T: PartialOrd> TryIntoRange<T> for std::ops::RangeFull {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Ok(Range::full())
	}
}

impl<T: PartialOrd> TryIntoRange<T> for RangeFromExcluded<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::with_bounds(Bound::Excluded(self.start), Bound::Unbounded)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for RangeFromExcludedTo<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::open(self.start, self.end)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for RangeFromExcludedToIncluded<T> {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::with_bounds(Bound::Excluded(self.start), Bound::Included(self.end))
	}
}

impl<T: PartialOrd> TryIntoRange<T> for (T, T) {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::new(self.0, self.1)
	}
}

impl<T: PartialOrd> TryIntoRange<T> for (Bound<T>, Bound<T>) {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		Range::with_bounds(self.0, self.1)
	}
}

impl<'a, T: FromStr + PartialOrd> TryIntoRange<T> for &'a str {
	fn try_into_range(self) -> Result<Range<T>, RangeError> {
		self.parse()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn std_ranges() {
		assert_eq!((1..4).try_into_range(), Range::new(1, 4));
		assert_eq!((1..=4).try_into_range(), Range::closed(1, 4));
		assert_eq!(
			(1..).try_into_range(),
			Range::with_bounds(Bound::Included(1), Bound::Unbounded)
		);
		assert_eq!((..4).try_into_range(), Range::until(4));
		assert_eq!(TryIntoRange::<i32>::try_into_range(..), Ok(Range::full()));
		assert_eq!(
			TryIntoRange::<i32>::try_into_range(4..1),
			Err(RangeError::InvalidRange)
		);
	}

	#[test]
	fn excluded_start() {
		assert_eq!(
			RangeFromExcludedTo::new(2, 4).try_into_range(),
			Range::open(2, 4)
		);
		assert_eq!(
			RangeFromExcludedToIncluded::new(0, 2).try_into_range(),
			Range::with_inclusivity(0, 2, false, true)
		);
		assert_eq!(
			RangeFromExcluded::new(3).try_into_range(),
			Range::with_bounds(Bound::Excluded(3), Bound::Unbounded)
		);
		assert_eq!(
			RangeFromExcludedTo::new(2, 2).try_into_range(),
			Err(RangeError::InvalidRange)
		);
	}

	#[test]
	fn pairs_and_literals() {
		assert_eq!((1.5, 7.0).try_into_range(), Range::new(1.5, 7.0));
		assert_eq!(
			TryIntoRange::<char>::try_into_range((Bound::Excluded('a'), Bound::Included('z'))),
			Range::with_inclusivity('a', 'z', false, true)
		);
		assert_eq!(
			TryIntoRange::<f64>::try_into_range("[1, 4.5]"),
			Range::closed(1.0, 4.5)
		);
	}
}
