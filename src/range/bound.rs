use crate::RangeError;
use std::{cmp::Ordering, ops::Bound};

#[inline(always)]
pub(crate) fn invert_bound<T>(bound: Bound<T>) -> Option<Bound<T>> {
	match bound {
		Bound::Unbounded => None,
		Bound::Included(t) => Some(Bound::Excluded(t)),
		Bound::Excluded(t) => Some(Bound::Included(t)),
	}
}

#[inline(always)]
pub(crate) fn bound_value<T>(bound: Bound<&T>) -> Option<&T> {
	match bound {
		Bound::Included(t) | Bound::Excluded(t) => Some(t),
		Bound::Unbounded => None,
	}
}

/// A bound tagged with the side of the range it delimits.
///
/// The direction gives meaning to `Bound::Unbounded`: an unbounded start is
/// negative infinity and an unbounded end is positive infinity, whatever the
/// domain. It also decides how an excluded value sorts against an included
/// one: `End(Excluded(v)) < Start(Included(v)) == End(Included(v)) < Start(Excluded(v))`.
#[derive(Clone, Copy, Debug)]
pub enum Directed<T> {
	Start(T),
	End(T),
}

impl<T> Directed<Bound<T>> {
	pub fn as_ref(&self) -> Directed<Bound<&T>> {
		match self {
			Directed::Start(b) => Directed::Start(b.as_ref()),
			Directed::End(b) => Directed::End(b.as_ref()),
		}
	}
}

/// Position of a directed bound on the extended line.
///
/// Finite positions carry an offset of one infinitesimal step below (`-1`) or
/// above (`1`) the value.
enum Position<'a, T> {
	NegativeInfinity,
	Finite(&'a T, i8),
	PositiveInfinity,
}

impl<'a, T> Position<'a, T> {
	fn rank(&self) -> u8 {
		match self {
			Position::NegativeInfinity => 0,
			Position::Finite(_, _) => 1,
			Position::PositiveInfinity => 2,
		}
	}
}

impl<'a, T> Directed<Bound<&'a T>> {
	pub fn bound(&self) -> Bound<&'a T> {
		match self {
			Directed::Start(b) | Directed::End(b) => *b,
		}
	}

	pub fn is_negative_infinity(&self) -> bool {
		matches!(self, Directed::Start(Bound::Unbounded))
	}

	pub fn is_positive_infinity(&self) -> bool {
		matches!(self, Directed::End(Bound::Unbounded))
	}

	pub fn is_infinite(&self) -> bool {
		matches!(self.bound(), Bound::Unbounded)
	}

	fn position(&self) -> Position<'a, T> {
		match self {
			Directed::Start(Bound::Unbounded) => Position::NegativeInfinity,
			Directed::Start(Bound::Included(v)) => Position::Finite(v, 0),
			Directed::Start(Bound::Excluded(v)) => Position::Finite(v, 1),
			Directed::End(Bound::Included(v)) => Position::Finite(v, 0),
			Directed::End(Bound::Excluded(v)) => Position::Finite(v, -1),
			Directed::End(Bound::Unbounded) => Position::PositiveInfinity,
		}
	}

	/// Compares two directed bounds.
	///
	/// Infinite bounds compare by sign alone. Finite bounds compare by value
	/// first and by inclusivity on ties. Fails when the two finite values
	/// cannot be ordered.
	pub fn try_cmp(&self, other: &Directed<Bound<&T>>) -> Result<Ordering, RangeError>
	where
		T: PartialOrd,
	{
		match (self.position(), other.position()) {
			(Position::Finite(a, da), Position::Finite(b, db)) => match a.partial_cmp(b) {
				Some(Ordering::Equal) => Ok(da.cmp(&db)),
				Some(ord) => Ok(ord),
				None => Err(RangeError::Comparison),
			},
			(a, b) => Ok(a.rank().cmp(&b.rank())),
		}
	}

	pub fn is_left_of(&self, other: &Directed<Bound<&T>>) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(self.try_cmp(other)? == Ordering::Less)
	}
}

/// Checks if no value lies between `start` and `end`.
#[inline(always)]
pub(crate) fn is_range_empty<T: PartialOrd>(
	start: Bound<&T>,
	end: Bound<&T>,
) -> Result<bool, RangeError> {
	Ok(Directed::Start(start).try_cmp(&Directed::End(end))? == Ordering::Greater)
}

/// Checks that nothing is left between an end bound and the start bound of
/// a following range.
#[inline(always)]
pub(crate) fn are_connected_bounds<T: PartialOrd>(
	end: Bound<&T>,
	start: Bound<&T>,
) -> Result<bool, RangeError> {
	match (invert_bound(end), invert_bound(start)) {
		(Some(gap_start), Some(gap_end)) => is_range_empty(gap_start, gap_end),
		_ => Ok(true),
	}
}

pub(crate) fn min_bound<'a, T: PartialOrd>(
	a: Directed<Bound<&'a T>>,
	b: Directed<Bound<&'a T>>,
) -> Result<Directed<Bound<&'a T>>, RangeError> {
	Ok(if b.try_cmp(&a)? == Ordering::Less { b } else { a })
}

pub(crate) fn max_bound<'a, T: PartialOrd>(
	a: Directed<Bound<&'a T>>,
	b: Directed<Bound<&'a T>>,
) -> Result<Directed<Bound<&'a T>>, RangeError> {
	Ok(if b.try_cmp(&a)? == Ordering::Greater { b } else { a })
}
