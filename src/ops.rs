//! Operator forms of the set algebra.
//!
//! Comparisons may fail, so every operator yields a `Result`. There are no
//! assignment operators: use the `*_update` methods of [`RangeSet`] instead.
use crate::{IntoRangeSet, Range, RangeError, RangeSet};
use std::ops::{BitAnd, BitOr, BitXor, Not, Sub};

macro_rules! set_operator {
	($trait:ident, $fn:ident, $method:ident) => {
		impl<'a, T: Clone + PartialOrd, S: IntoRangeSet<T>> $trait<S> for &'a RangeSet<T> {
			type Output = Result<RangeSet<T>, RangeError>;

			fn $fn(self, other: S) -> Self::Output {
				self.$method(other)
			}
		}

		impl<'a, T: Clone + PartialOrd, S: IntoRangeSet<T>> $trait<S> for &'a Range<T> {
			type Output = Result<RangeSet<T>, RangeError>;

			fn $fn(self, other: S) -> Self::Output {
				self.$method(other)
			}
		}
	};
}

set_operator!(BitOr, bitor, union);
set_operator!(BitAnd, bitand, intersection);
set_operator!(Sub, sub, difference);
set_operator!(BitXor, bitxor, symmetric_difference);

impl<'a, T: Clone + PartialOrd> Not for &'a RangeSet<T> {
	type Output = Result<RangeSet<T>, RangeError>;

	fn not(self) -> Self::Output {
		self.complement()
	}
}

impl<'a, T: Clone + PartialOrd> Not for &'a Range<T> {
	type Output = Result<RangeSet<T>, RangeError>;

	fn not(self) -> Self::Output {
		self.complement()
	}
}
