//! Continuous ranges over any partially ordered domain, normalized range sets
//! and range dictionaries.
//!
//! This library defines three basic types: `Range<T>`, a single interval with
//! included, excluded or infinite bounds; `RangeSet<T>`, an always normalized
//! set of ranges; and `RangeDict<T, V>`, a map from disjoint ranges to values.
//!
//! The domain only needs `PartialOrd`. When two values cannot be compared
//! (`partial_cmp` returns `None`, like `f64::NAN` does), the operation fails
//! with [`RangeError::Comparison`] instead of giving an arbitrary answer.
//!
//! ## Usage
//!
//! ```
//! use ordered_ranges::{Range, RangeError};
//!
//! # fn main() -> Result<(), RangeError> {
//! let a = Range::new(1.5, 7.0)?;
//! let b = Range::new(4.0, 8.5)?;
//!
//! assert_eq!(a.union(&b)?.as_slice(), &[Range::new(1.5, 8.5)?]);
//! assert_eq!(a.intersection(&b)?.as_slice(), &[Range::new(4.0, 7.0)?]);
//! assert_eq!(a.contains(&7.0)?, false);
//! # Ok(())
//! # }
//! ```
//!
//! Range sets merge the ranges they are given, and accept range literals:
//!
//! ```
//! use ordered_ranges::{Range, RangeSet, RangeError};
//!
//! # fn main() -> Result<(), RangeError> {
//! let mut set: RangeSet<f64> = RangeSet::try_from_ranges(["[1, 4.5]", "(6.5, 10)"])?;
//! set.add(Range::new(3.0, 8.0)?)?;
//! assert_eq!(set.to_string(), "{[1, 10)}");
//!
//! let set: RangeSet<f64> = RangeSet::try_from_ranges(["[1, 4.5]", "(6.5, 10)"])?;
//! let holes = RangeSet::try_from_ranges([(2.0, 3.0), (7.0, 8.0)])?;
//! assert_eq!(
//! 	set.difference(holes)?.to_string(),
//! 	"{[1, 2), [3, 4.5], (6.5, 7), [8, 10)}"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! Two ranges sharing a boundary value that both exclude are not merged,
//! since that value belongs to neither:
//!
//! ```
//! # use ordered_ranges::{Range, RangeSet, RangeError};
//! # fn main() -> Result<(), RangeError> {
//! let set = RangeSet::try_from_ranges([Range::new(1, 4)?, Range::open(4, 7)?])?;
//! assert_eq!(set.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! It also supports the standard range syntax and non standard ranges with
//! excluded start bounds:
//!
//! ```
//! use ordered_ranges::{RangeSet, RangeFromExcluded, RangeFromExcludedTo, RangeError};
//!
//! # fn main() -> Result<(), RangeError> {
//! let mut set: RangeSet<i32> = RangeSet::new();
//! set.add(..1)?;
//! set.add(1..=5)?;
//! assert_eq!(set.to_string(), "{(-inf, 5]}");
//!
//! set.add(RangeFromExcludedTo::new(6, 8))?;
//! set.add(RangeFromExcluded::new(8))?;
//! assert_eq!(set.to_string(), "{(-inf, 5], (6, 8), (8, inf)}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Dictionaries
//!
//! Inserting into a `RangeDict` overwrites the overlapped part of older
//! ranges only:
//!
//! ```
//! use ordered_ranges::{Range, RangeDict, RangeError};
//!
//! # fn main() -> Result<(), RangeError> {
//! let mut dict = RangeDict::new();
//! dict.insert(Range::new(0, 20)?, "Y")?;
//! dict.insert(Range::new(8, 16)?, "X")?;
//!
//! assert_eq!(dict.get(&4)?, &"Y");
//! assert_eq!(dict.get(&8)?, &"X");
//! assert_eq!(dict.get(&16)?, &"Y");
//! assert_eq!(dict.to_string(), "{{[0, 8), [16, 20)}: Y, {[8, 16)}: X}");
//! # Ok(())
//! # }
//! ```
mod error;
mod map;
mod ops;
mod range;
mod set;
mod util;

#[cfg(feature = "serde")]
mod serde;

pub use error::*;
pub use map::{Iter, RangeDict};
pub use range::*;
pub use set::{IntoRangeSet, RangeSet};
