use crate::{IntoRangeSet, RangeError, RangeSet};
use std::{
	cmp::Ordering,
	fmt,
	ops::{Bound, RangeBounds, Sub},
};

mod bound;
mod convert;
mod ordering;
mod parse;

pub(crate) use bound::{
	are_connected_bounds, bound_value, invert_bound, is_range_empty, max_bound, min_bound,
};
pub use bound::Directed;
pub use convert::*;
pub use ordering::*;
pub use parse::parse_bounds;

/// A single continuous interval over a partially ordered domain.
///
/// A range is never empty: its start bound never sorts after its end bound.
/// `[v, v]` is a valid single-value range while `[v, v)`, `(v, v]` and
/// `(v, v)` are rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range<T> {
	start: Bound<T>,
	end: Bound<T>,
}

fn check_comparable<T: PartialOrd>(bound: Bound<&T>) -> Result<(), RangeError> {
	match bound_value(bound) {
		Some(v) if v.partial_cmp(v).is_none() => Err(RangeError::Comparison),
		_ => Ok(()),
	}
}

impl<T> Range<T> {
	/// The range `(-inf, +inf)`.
	pub const fn full() -> Self {
		Range {
			start: Bound::Unbounded,
			end: Bound::Unbounded,
		}
	}

	pub(crate) const fn from_bounds_unchecked(start: Bound<T>, end: Bound<T>) -> Self {
		Range { start, end }
	}

	/// Builds a range from two bounds.
	pub fn with_bounds(start: Bound<T>, end: Bound<T>) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		check_comparable(start.as_ref())?;
		check_comparable(end.as_ref())?;

		if is_range_empty(start.as_ref(), end.as_ref())? {
			return Err(RangeError::InvalidRange);
		}

		Ok(Range { start, end })
	}

	/// The half-open range `[start, end)`.
	pub fn new(start: T, end: T) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		Self::with_bounds(Bound::Included(start), Bound::Excluded(end))
	}

	/// The closed range `[start, end]`.
	pub fn closed(start: T, end: T) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		Self::with_bounds(Bound::Included(start), Bound::Included(end))
	}

	/// The open range `(start, end)`.
	pub fn open(start: T, end: T) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		Self::with_bounds(Bound::Excluded(start), Bound::Excluded(end))
	}

	pub fn with_inclusivity(
		start: T,
		end: T,
		include_start: bool,
		include_end: bool,
	) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		let start = if include_start {
			Bound::Included(start)
		} else {
			Bound::Excluded(start)
		};

		let end = if include_end {
			Bound::Included(end)
		} else {
			Bound::Excluded(end)
		};

		Self::with_bounds(start, end)
	}

	/// The range `[start, +inf)`.
	pub fn from_start(start: T) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		Self::with_bounds(Bound::Included(start), Bound::Unbounded)
	}

	/// The range `(-inf, end)`.
	pub fn until(end: T) -> Result<Self, RangeError>
	where
		T: PartialOrd,
	{
		Self::with_bounds(Bound::Unbounded, Bound::Excluded(end))
	}

	pub fn start_bound(&self) -> Bound<&T> {
		self.start.as_ref()
	}

	pub fn end_bound(&self) -> Bound<&T> {
		self.end.as_ref()
	}

	/// Finite start value, if any.
	pub fn start(&self) -> Option<&T> {
		bound_value(self.start.as_ref())
	}

	/// Finite end value, if any.
	pub fn end(&self) -> Option<&T> {
		bound_value(self.end.as_ref())
	}

	/// Infinite bounds are always open.
	pub fn include_start(&self) -> bool {
		matches!(self.start, Bound::Included(_))
	}

	pub fn include_end(&self) -> bool {
		matches!(self.end, Bound::Included(_))
	}

	pub fn into_bounds(self) -> (Bound<T>, Bound<T>) {
		(self.start, self.end)
	}

	pub fn directed_start(&self) -> Directed<Bound<&T>> {
		Directed::Start(self.start.as_ref())
	}

	pub fn directed_end(&self) -> Directed<Bound<&T>> {
		Directed::End(self.end.as_ref())
	}

	/// Checks if the range reaches negative or positive infinity.
	pub fn is_infinite(&self) -> bool {
		matches!(self.start, Bound::Unbounded) || matches!(self.end, Bound::Unbounded)
	}

	pub fn contains(&self, value: &T) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		let point = Directed::Start(Bound::Included(value));
		Ok(self.directed_start().try_cmp(&point)? != Ordering::Greater
			&& point.try_cmp(&self.directed_end())? != Ordering::Greater)
	}

	/// Checks that `other` lies entirely inside this range.
	pub fn contains_range(&self, other: &Range<T>) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(self.directed_start().try_cmp(&other.directed_start())? != Ordering::Greater
			&& other.directed_end().try_cmp(&self.directed_end())? != Ordering::Greater)
	}

	/// Checks if at least one value belongs to both ranges.
	pub fn overlaps(&self, other: &Range<T>) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(self.directed_start().try_cmp(&other.directed_end())? != Ordering::Greater
			&& other.directed_start().try_cmp(&self.directed_end())? != Ordering::Greater)
	}

	pub fn is_disjoint(&self, other: &Range<T>) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(!self.overlaps(other)?)
	}

	/// Checks if the two ranges overlap or touch, leaving no value between
	/// them.
	///
	/// `[1, 4)` and `[4, 7)` touch, `[1, 4]` and `(4, 7)` touch, but
	/// `[1, 4)` and `(4, 7)` do not since `4` belongs to neither.
	pub fn is_connected(&self, other: &Range<T>) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(are_connected_bounds(self.end_bound(), other.start_bound())?
			&& are_connected_bounds(other.end_bound(), self.start_bound())?)
	}

	/// Checks if every value of this range is lower than every value of
	/// `other`.
	pub fn is_before(&self, other: &Range<T>) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		self.directed_end().is_left_of(&other.directed_start())
	}

	/// Sort order of ranges: by start bound, then by end bound.
	pub fn try_cmp(&self, other: &Range<T>) -> Result<Ordering, RangeError>
	where
		T: PartialOrd,
	{
		match self.directed_start().try_cmp(&other.directed_start())? {
			Ordering::Equal => self.directed_end().try_cmp(&other.directed_end()),
			ord => Ok(ord),
		}
	}

	/// Merges two connected ranges into one.
	pub(crate) fn merge(&self, other: &Range<T>) -> Result<Option<Range<T>>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		if !self.is_connected(other)? {
			return Ok(None);
		}

		let start = min_bound(self.directed_start(), other.directed_start())?.bound();
		let end = max_bound(self.directed_end(), other.directed_end())?.bound();
		Ok(Some(Range::from_bounds_unchecked(start.cloned(), end.cloned())))
	}

	pub(crate) fn intersect(&self, other: &Range<T>) -> Result<Option<Range<T>>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		if !self.overlaps(other)? {
			return Ok(None);
		}

		let start = max_bound(self.directed_start(), other.directed_start())?.bound();
		let end = min_bound(self.directed_end(), other.directed_end())?.bound();
		Ok(Some(Range::from_bounds_unchecked(start.cloned(), end.cloned())))
	}

	/// Removes `other` from this range.
	///
	/// Returns what is left below `other` and what is left above it. Both
	/// parts are `None` when `other` covers this range, and the range comes
	/// back whole on one side when they do not overlap.
	pub(crate) fn without(
		&self,
		other: &Range<T>,
	) -> Result<(Option<Range<T>>, Option<Range<T>>), RangeError>
	where
		T: Clone + PartialOrd,
	{
		let left = match invert_bound(other.start_bound()) {
			Some(cut) => {
				let end = min_bound(self.directed_end(), Directed::End(cut))?.bound();
				if is_range_empty(self.start_bound(), end)? {
					None
				} else {
					Some(Range::from_bounds_unchecked(self.start.clone(), end.cloned()))
				}
			}
			None => None,
		};

		let right = match invert_bound(other.end_bound()) {
			Some(cut) => {
				let start = max_bound(self.directed_start(), Directed::Start(cut))?.bound();
				if is_range_empty(start, self.end_bound())? {
					None
				} else {
					Some(Range::from_bounds_unchecked(start.cloned(), self.end.clone()))
				}
			}
			None => None,
		};

		Ok((left, right))
	}

	pub fn union<S: IntoRangeSet<T>>(&self, other: S) -> Result<RangeSet<T>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		RangeSet::from(self.clone()).union(other)
	}

	pub fn intersection<S: IntoRangeSet<T>>(&self, other: S) -> Result<RangeSet<T>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		RangeSet::from(self.clone()).intersection(other)
	}

	/// Everything in this range that is not in `other`.
	///
	/// The result holds two ranges when `other` splits this range in half.
	pub fn difference<S: IntoRangeSet<T>>(&self, other: S) -> Result<RangeSet<T>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		RangeSet::from(self.clone()).difference(other)
	}

	pub fn symmetric_difference<S: IntoRangeSet<T>>(
		&self,
		other: S,
	) -> Result<RangeSet<T>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		RangeSet::from(self.clone()).symmetric_difference(other)
	}

	/// Every value outside of this range.
	pub fn complement(&self) -> Result<RangeSet<T>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		let (left, right) = Range::full().without(self)?;
		Ok(RangeSet::from_sorted_unchecked(left.into_iter().chain(right).collect()))
	}

	/// Returns `value` if the range contains it, otherwise the closest bound
	/// value.
	pub fn clamp(&self, value: T) -> Result<T, RangeError>
	where
		T: Clone + PartialOrd,
	{
		if self.contains(&value)? {
			return Ok(value);
		}

		let point = Directed::Start(Bound::Included(&value));
		let nearest = if point.is_left_of(&self.directed_start())? {
			self.start()
		} else {
			self.end()
		};

		// a value outside of the range sits on a finite side.
		nearest.cloned().ok_or(RangeError::Comparison)
	}

	/// Returns `end - start` regardless of inclusivity, or `None` if the range
	/// is infinite.
	pub fn length<D>(&self) -> Option<D>
	where
		T: Clone + Sub<Output = D>,
	{
		match (self.start(), self.end()) {
			(Some(start), Some(end)) => Some(end.clone() - start.clone()),
			_ => None,
		}
	}
}

impl<T> RangeBounds<T> for Range<T> {
	fn start_bound(&self) -> Bound<&T> {
		self.start.as_ref()
	}

	fn end_bound(&self) -> Bound<&T> {
		self.end.as_ref()
	}
}

impl<T: fmt::Display> fmt::Display for Range<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match &self.start {
			Bound::Included(v) => write!(f, "[{}", v)?,
			Bound::Excluded(v) => write!(f, "({}", v)?,
			Bound::Unbounded => write!(f, "(-inf")?,
		}

		match &self.end {
			Bound::Included(v) => write!(f, ", {}]", v),
			Bound::Excluded(v) => write!(f, ", {})", v),
			Bound::Unbounded => write!(f, ", inf)"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn construction() {
		assert!(Range::new(1, 2).is_ok());
		assert!(Range::closed(3, 3).is_ok());
		assert_eq!(Range::new(3, 3), Err(RangeError::InvalidRange));
		assert_eq!(Range::open(3, 3), Err(RangeError::InvalidRange));
		assert_eq!(
			Range::with_inclusivity(3, 3, false, true),
			Err(RangeError::InvalidRange)
		);
		assert_eq!(Range::new(5, 1), Err(RangeError::InvalidRange));
		assert_eq!(Range::new(f64::NAN, 1.0), Err(RangeError::Comparison));
		assert_eq!(Range::from_start(f64::NAN), Err(RangeError::Comparison));
	}

	#[test]
	fn accessors() {
		let r = Range::with_inclusivity(1, 5, false, true).unwrap();
		assert_eq!(r.start(), Some(&1));
		assert_eq!(r.end(), Some(&5));
		assert!(!r.include_start());
		assert!(r.include_end());
		assert!(!r.is_infinite());

		let r = Range::until(5).unwrap();
		assert_eq!(r.start(), None);
		assert!(!r.include_start());
		assert!(r.is_infinite());
		assert_eq!(r.into_bounds(), (Bound::Unbounded, Bound::Excluded(5)));
	}

	#[test]
	fn contains() {
		let r = Range::new(1, 5).unwrap();
		assert_eq!(r.contains(&1), Ok(true));
		assert_eq!(r.contains(&4), Ok(true));
		assert_eq!(r.contains(&5), Ok(false));
		assert_eq!(r.contains(&0), Ok(false));

		let r = Range::open(1.0, 5.0).unwrap();
		assert_eq!(r.contains(&1.0), Ok(false));
		assert_eq!(r.contains(&4.999), Ok(true));
		assert_eq!(r.contains(&f64::NAN), Err(RangeError::Comparison));

		assert_eq!(Range::<i32>::full().contains(&i32::MIN), Ok(true));
	}

	#[test]
	fn overlaps_and_connected() {
		let a = Range::new(1, 4).unwrap();
		let b = Range::new(4, 7).unwrap();
		let c = Range::open(4, 7).unwrap();
		let d = Range::closed(1, 4).unwrap();

		assert_eq!(a.overlaps(&b), Ok(false));
		assert_eq!(a.is_connected(&b), Ok(true));
		assert_eq!(a.is_connected(&c), Ok(false));
		assert_eq!(d.overlaps(&b), Ok(true));
		assert_eq!(d.is_connected(&c), Ok(true));
		assert_eq!(c.is_connected(&d), Ok(true));
		assert_eq!(a.is_before(&c), Ok(true));
		assert_eq!(c.is_before(&a), Ok(false));
	}

	#[test]
	fn without() {
		let r = Range::new(0, 10).unwrap();

		let (left, right) = r.without(&Range::new(3, 5).unwrap()).unwrap();
		assert_eq!(left, Some(Range::new(0, 3).unwrap()));
		assert_eq!(right, Some(Range::new(5, 10).unwrap()));

		let (left, right) = r.without(&Range::closed(3, 5).unwrap()).unwrap();
		assert_eq!(left, Some(Range::new(0, 3).unwrap()));
		assert_eq!(right, Some(Range::open(5, 10).unwrap()));

		let (left, right) = r.without(&Range::from_start(5).unwrap()).unwrap();
		assert_eq!(left, Some(Range::new(0, 5).unwrap()));
		assert_eq!(right, None);

		let (left, right) = r.without(&Range::new(20, 30).unwrap()).unwrap();
		assert_eq!(left, Some(r));
		assert_eq!(right, None);

		let (left, right) = r.without(&Range::full()).unwrap();
		assert_eq!((left, right), (None, None));
	}

	#[test]
	fn complement() {
		let r = Range::new(1, 5).unwrap();
		let c = r.complement().unwrap();
		assert_eq!(
			c.as_slice(),
			&[
				Range::until(1).unwrap(),
				Range::with_bounds(Bound::Included(5), Bound::Unbounded).unwrap()
			]
		);

		assert!(Range::<i32>::full().complement().unwrap().is_empty());
	}

	#[test]
	fn clamp_and_length() {
		let r = Range::new(1.0, 5.0).unwrap();
		assert_eq!(r.clamp(3.0), Ok(3.0));
		assert_eq!(r.clamp(-2.0), Ok(1.0));
		assert_eq!(r.clamp(7.0), Ok(5.0));
		assert_eq!(r.length(), Some(4.0));
		assert_eq!(Range::<f64>::full().length::<f64>(), None);
	}

	#[test]
	fn sort_order() {
		let a = Range::new(1, 5).unwrap();
		let b = Range::closed(1, 5).unwrap();
		let c = Range::open(1, 2).unwrap();
		assert_eq!(a.try_cmp(&b), Ok(Ordering::Less));
		assert_eq!(b.try_cmp(&c), Ok(Ordering::Less));
		assert_eq!(a.try_cmp(&a), Ok(Ordering::Equal));
	}

	#[test]
	fn display() {
		assert_eq!(Range::new(1, 7).unwrap().to_string(), "[1, 7)");
		assert_eq!(Range::open(1.5, 2.0).unwrap().to_string(), "(1.5, 2)");
		assert_eq!(Range::until(5).unwrap().to_string(), "(-inf, 5)");
		assert_eq!(Range::from_start(3).unwrap().to_string(), "[3, inf)");
		assert_eq!(Range::<i32>::full().to_string(), "(-inf, inf)");
	}
}
