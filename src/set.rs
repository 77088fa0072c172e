use crate::{
	range::binary_search,
	util::{try_merge_by, try_sort_by},
	Range, RangeError, RangeFromExcluded, RangeFromExcludedTo, RangeFromExcludedToIncluded,
	TryIntoRange,
};
use std::{cmp::Ordering, fmt, ops::Bound, str::FromStr};
use tracing::trace;

/// Sorted, pairwise disjoint and non-touching ranges.
///
/// Every mutation leaves the set normalized: two members never overlap and
/// never touch (`[1, 4)` and `[4, 7)` are stored as `[1, 7)`). A mutation
/// that fails leaves the set unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RangeSet<T> {
	ranges: Vec<Range<T>>,
}

impl<T> Default for RangeSet<T> {
	fn default() -> Self {
		Self::new()
	}
}

/// Values that describe a set of ranges.
pub trait IntoRangeSet<T> {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError>;
}

impl<T> IntoRangeSet<T> for RangeSet<T> {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		Ok(self)
	}
}

impl<'a, T: Clone> IntoRangeSet<T> for &'a RangeSet<T> {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		Ok(self.clone())
	}
}

impl<T> IntoRangeSet<T> for Range<T> {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		Ok(RangeSet::from(self))
	}
}

impl<'a, T: Clone> IntoRangeSet<T> for &'a Range<T> {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		Ok(RangeSet::from(self.clone()))
	}
}

impl<T: Clone + PartialOrd, R: TryIntoRange<T>> IntoRangeSet<T> for Vec<R> {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		RangeSet::try_from_ranges(self)
	}
}

impl<T: Clone + PartialOrd, R: TryIntoRange<T>, const N: usize> IntoRangeSet<T> for [R; N] {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		RangeSet::try_from_ranges(self)
	}
}

macro_rules! single_range_set {
	($($ty:ty),*) => {
		$(
			impl<T: PartialOrd> IntoRangeSet<T> for $ty {
				fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
					let range: Range<T> = self.try_into_range()?;
					Ok(RangeSet::from(range))
				}
			}
		)*
	};
}

single_range_set!(
	(T, T),
	(Bound<T>, Bound<T>),
	std::ops::Range<T>,
	std::ops::RangeInclusive<T>,
	std::ops::RangeFrom<T>,
	std::ops::RangeTo<T>,
	std::ops::RangeToInclusive<T>,
	std::ops::RangeFull,
	RangeFromExcluded<T>,
	RangeFromExcludedTo<T>,
	RangeFromExcludedToIncluded<T>
);

impl<'a, T: FromStr + PartialOrd> IntoRangeSet<T> for &'a str {
	fn into_range_set(self) -> Result<RangeSet<T>, RangeError> {
		let range: Range<T> = self.try_into_range()?;
		Ok(RangeSet::from(range))
	}
}

/// Merges connected neighbours of a sorted sequence.
///
/// Only neighbours carrying equal tags are merged, so the same routine
/// normalizes untagged ranges (tagged with `()`) and value-tagged dictionary
/// entries.
pub(crate) fn coalesce<T, K>(
	sorted: impl IntoIterator<Item = (Range<T>, K)>,
) -> Result<Vec<(Range<T>, K)>, RangeError>
where
	T: Clone + PartialOrd,
	K: PartialEq,
{
	let mut result: Vec<(Range<T>, K)> = Vec::new();

	for (range, tag) in sorted {
		if let Some((last, last_tag)) = result.last_mut() {
			if *last_tag == tag {
				if let Some(merged) = last.merge(&range)? {
					*last = merged;
					continue;
				}
			}
		}

		result.push((range, tag))
	}

	Ok(result)
}

/// Removes the sorted, disjoint `cuts` from a sorted sequence of disjoint
/// tagged ranges.
///
/// A range cut in the middle is split in two, both parts keeping the tag.
pub(crate) fn carve<T, K>(
	members: impl IntoIterator<Item = (Range<T>, K)>,
	cuts: &[Range<T>],
) -> Result<Vec<(Range<T>, K)>, RangeError>
where
	T: Clone + PartialOrd,
	K: Clone,
{
	let mut result = Vec::new();
	let mut cuts = cuts.iter().peekable();

	for (member, tag) in members {
		let mut rest = Some(member);

		while let Some(piece) = rest.take() {
			match cuts.peek() {
				Some(cut) if cut.is_before(&piece)? => {
					cuts.next();
					rest = Some(piece)
				}
				Some(cut) if cut.overlaps(&piece)? => {
					let (left, right) = piece.without(cut)?;

					if let Some(left) = left {
						result.push((left, tag.clone()))
					}

					// the cut ends inside this piece: no further member can reach it.
					if right.is_some() {
						cuts.next();
					}

					rest = right
				}
				_ => result.push((piece, tag.clone())),
			}
		}
	}

	Ok(result)
}

fn untagged<T>(ranges: Vec<Range<T>>) -> impl Iterator<Item = (Range<T>, ())> {
	ranges.into_iter().map(|r| (r, ()))
}

fn strip<T>(tagged: Vec<(Range<T>, ())>) -> Vec<Range<T>> {
	tagged.into_iter().map(|(r, ())| r).collect()
}

impl<T> RangeSet<T> {
	pub fn new() -> Self {
		RangeSet { ranges: Vec::new() }
	}

	/// Wraps ranges that are already sorted, disjoint and non-touching.
	pub(crate) fn from_sorted_unchecked(ranges: Vec<Range<T>>) -> Self {
		RangeSet { ranges }
	}

	/// Number of member ranges.
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, Range<T>> {
		self.ranges.iter()
	}

	pub fn as_slice(&self) -> &[Range<T>] {
		&self.ranges
	}

	pub fn into_vec(self) -> Vec<Range<T>> {
		self.ranges
	}

	pub fn first(&self) -> Option<&Range<T>> {
		self.ranges.first()
	}

	pub fn last(&self) -> Option<&Range<T>> {
		self.ranges.last()
	}

	pub fn clear(&mut self) {
		self.ranges.clear()
	}

	/// Checks if the set reaches negative or positive infinity.
	pub fn is_infinite(&self) -> bool {
		self.first()
			.map(|r| r.directed_start().is_negative_infinity())
			.unwrap_or(false)
			|| self
				.last()
				.map(|r| r.directed_end().is_positive_infinity())
				.unwrap_or(false)
	}

	/// Checks if the set is `{(-inf, inf)}`.
	pub fn contains_everything(&self) -> bool {
		matches!(self.ranges.as_slice(), [r] if r.directed_start().is_negative_infinity() && r.directed_end().is_positive_infinity())
	}

	pub fn contains(&self, value: &T) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(binary_search(&self.ranges, |r| r, value)?.is_some())
	}

	/// Returns the member containing `value`.
	pub fn get_range(&self, value: &T) -> Result<&Range<T>, RangeError>
	where
		T: PartialOrd,
	{
		match binary_search(&self.ranges, |r| r, value)? {
			Some(i) => Ok(&self.ranges[i]),
			None => Err(RangeError::KeyNotFound),
		}
	}
}

impl<T: Clone + PartialOrd> RangeSet<T> {
	/// Sorts and merges arbitrary candidate ranges into normalized members.
	fn normalize(candidates: Vec<Range<T>>) -> Result<Vec<Range<T>>, RangeError> {
		let sorted = try_sort_by(candidates, &mut |a: &Range<T>, b: &Range<T>| a.try_cmp(b))?;
		Ok(strip(coalesce(untagged(sorted))?))
	}

	pub fn try_from_ranges<I, R>(ranges: I) -> Result<Self, RangeError>
	where
		I: IntoIterator<Item = R>,
		R: TryIntoRange<T>,
	{
		let candidates = ranges
			.into_iter()
			.map(TryIntoRange::try_into_range)
			.collect::<Result<Vec<_>, _>>()?;

		Ok(RangeSet {
			ranges: Self::normalize(candidates)?,
		})
	}

	/// Adds a range, merging it with every member it overlaps or touches.
	pub fn add<R: TryIntoRange<T>>(&mut self, range: R) -> Result<(), RangeError> {
		let mut pending = Some(range.try_into_range()?);
		let mut ranges = Vec::with_capacity(self.ranges.len() + 1);

		for member in &self.ranges {
			match pending.take() {
				Some(new) => {
					if let Some(merged) = new.merge(member)? {
						pending = Some(merged)
					} else if new.is_before(member)? {
						ranges.push(new);
						ranges.push(member.clone())
					} else {
						ranges.push(member.clone());
						pending = Some(new)
					}
				}
				None => ranges.push(member.clone()),
			}
		}

		ranges.extend(pending);

		trace!(before = self.ranges.len(), after = ranges.len(), "range added");
		self.ranges = ranges;
		Ok(())
	}

	/// Adds every range of `ranges`.
	///
	/// Either all of them are added or, on error, none is.
	pub fn try_extend<I, R>(&mut self, ranges: I) -> Result<(), RangeError>
	where
		I: IntoIterator<Item = R>,
		R: TryIntoRange<T>,
	{
		let mut candidates = self.ranges.clone();
		for range in ranges {
			candidates.push(range.try_into_range()?)
		}

		self.ranges = Self::normalize(candidates)?;
		trace!(len = self.ranges.len(), "range set extended");
		Ok(())
	}

	/// Removes every value of `range` from the set.
	///
	/// Members overlapping `range` are truncated or split, the others are
	/// kept as they are.
	pub fn discard<R: TryIntoRange<T>>(&mut self, range: R) -> Result<(), RangeError> {
		let range = range.try_into_range()?;
		let ranges = strip(carve(
			self.ranges.iter().cloned().map(|r| (r, ())),
			std::slice::from_ref(&range),
		)?);

		trace!(before = self.ranges.len(), after = ranges.len(), "range discarded");
		self.ranges = ranges;
		Ok(())
	}

	pub fn union<S: IntoRangeSet<T>>(&self, other: S) -> Result<RangeSet<T>, RangeError> {
		let other = other.into_range_set()?;
		let merged = try_merge_by(self.ranges.clone(), other.ranges, |a, b| a.try_cmp(b))?;
		Ok(RangeSet::from_sorted_unchecked(strip(coalesce(untagged(merged))?)))
	}

	pub fn intersection<S: IntoRangeSet<T>>(&self, other: S) -> Result<RangeSet<T>, RangeError> {
		let other = other.into_range_set()?;
		let (a, b) = (&self.ranges, &other.ranges);
		let (mut i, mut j) = (0, 0);
		let mut ranges = Vec::new();

		while i < a.len() && j < b.len() {
			ranges.extend(a[i].intersect(&b[j])?);

			// drop whichever range ends first, it cannot meet anything else.
			if a[i].directed_end().try_cmp(&b[j].directed_end())? == Ordering::Less {
				i += 1
			} else {
				j += 1
			}
		}

		Ok(RangeSet::from_sorted_unchecked(ranges))
	}

	pub fn difference<S: IntoRangeSet<T>>(&self, other: S) -> Result<RangeSet<T>, RangeError> {
		let other = other.into_range_set()?;
		let ranges = carve(self.ranges.iter().cloned().map(|r| (r, ())), &other.ranges)?;
		Ok(RangeSet::from_sorted_unchecked(strip(ranges)))
	}

	/// Values in exactly one of the two sets.
	pub fn symmetric_difference<S: IntoRangeSet<T>>(
		&self,
		other: S,
	) -> Result<RangeSet<T>, RangeError> {
		let other = other.into_range_set()?;
		let union = self.union(&other)?;
		let intersection = self.intersection(&other)?;
		union.difference(intersection)
	}

	/// Checks that no value belongs to both sets.
	///
	/// Returns as soon as an overlapping pair is found.
	pub fn is_disjoint<S: IntoRangeSet<T>>(&self, other: S) -> Result<bool, RangeError> {
		let other = other.into_range_set()?;
		let (a, b) = (&self.ranges, &other.ranges);
		let (mut i, mut j) = (0, 0);

		while i < a.len() && j < b.len() {
			if a[i].overlaps(&b[j])? {
				return Ok(false);
			}

			if a[i].is_before(&b[j])? {
				i += 1
			} else {
				j += 1
			}
		}

		Ok(true)
	}

	pub fn is_subset<S: IntoRangeSet<T>>(&self, other: S) -> Result<bool, RangeError> {
		Ok(self.difference(other)?.is_empty())
	}

	pub fn is_superset<S: IntoRangeSet<T>>(&self, other: S) -> Result<bool, RangeError> {
		Ok(other.into_range_set()?.difference(self)?.is_empty())
	}

	/// Every value outside of the set.
	pub fn complement(&self) -> Result<RangeSet<T>, RangeError> {
		RangeSet::from(Range::full()).difference(self)
	}

	pub fn update<S: IntoRangeSet<T>>(&mut self, other: S) -> Result<&mut Self, RangeError> {
		*self = self.union(other)?;
		trace!(len = self.ranges.len(), "range set updated");
		Ok(self)
	}

	pub fn intersection_update<S: IntoRangeSet<T>>(
		&mut self,
		other: S,
	) -> Result<&mut Self, RangeError> {
		*self = self.intersection(other)?;
		trace!(len = self.ranges.len(), "range set intersected");
		Ok(self)
	}

	pub fn difference_update<S: IntoRangeSet<T>>(
		&mut self,
		other: S,
	) -> Result<&mut Self, RangeError> {
		*self = self.difference(other)?;
		trace!(len = self.ranges.len(), "range set subtracted");
		Ok(self)
	}

	pub fn symmetric_difference_update<S: IntoRangeSet<T>>(
		&mut self,
		other: S,
	) -> Result<&mut Self, RangeError> {
		*self = self.symmetric_difference(other)?;
		trace!(len = self.ranges.len(), "range set symmetric difference");
		Ok(self)
	}
}

impl<T> From<Range<T>> for RangeSet<T> {
	fn from(range: Range<T>) -> Self {
		RangeSet {
			ranges: vec![range],
		}
	}
}

impl<T> IntoIterator for RangeSet<T> {
	type Item = Range<T>;
	type IntoIter = std::vec::IntoIter<Range<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.ranges.into_iter()
	}
}

impl<'a, T> IntoIterator for &'a RangeSet<T> {
	type Item = &'a Range<T>;
	type IntoIter = std::slice::Iter<'a, Range<T>>;

	fn into_iter(self) -> Self::IntoIter {
		self.ranges.iter()
	}
}

impl<T: fmt::Display> fmt::Display for RangeSet<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{{")?;
		for (i, range) in self.ranges.iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}
			write!(f, "{}", range)?;
		}
		write!(f, "}}")
	}
}
