use std::{marker::PhantomData, ops::Bound};

use serde::{
	de::Error,
	ser::{SerializeSeq, SerializeTuple},
	Deserialize, Serialize,
};

use crate::{Range, RangeDict, RangeSet};

impl<T: Serialize> Serialize for Range<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut t = serializer.serialize_tuple(2)?;
		t.serialize_element(&self.start_bound())?;
		t.serialize_element(&self.end_bound())?;
		t.end()
	}
}

impl<'de, T: PartialOrd + Deserialize<'de>> Deserialize<'de> for Range<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T>(PhantomData<T>);

		impl<'de, T: PartialOrd + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<T> {
			type Value = Range<T>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a pair of range bounds")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let start: Bound<T> = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing start bound"))?;
				let end: Bound<T> = seq
					.next_element()?
					.ok_or_else(|| A::Error::custom("missing end bound"))?;
				Range::with_bounds(start, end).map_err(A::Error::custom)
			}
		}

		deserializer.deserialize_tuple(2, Visitor(PhantomData))
	}
}

impl<T: Serialize> Serialize for RangeSet<T> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.len()))?;

		for range in self {
			seq.serialize_element(range)?;
		}

		seq.end()
	}
}

impl<'de, T: Clone + PartialOrd + Deserialize<'de>> Deserialize<'de> for RangeSet<T> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		struct Visitor<T>(PhantomData<T>);

		impl<'de, T: Clone + PartialOrd + Deserialize<'de>> serde::de::Visitor<'de> for Visitor<T> {
			type Value = RangeSet<T>;

			fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
				write!(formatter, "a range set")
			}

			fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
			where
				A: serde::de::SeqAccess<'de>,
			{
				let mut ranges = Vec::new();

				while let Some(range) = seq.next_element::<Range<T>>()? {
					ranges.push(range);
				}

				RangeSet::try_from_ranges(ranges).map_err(A::Error::custom)
			}
		}

		deserializer.deserialize_seq(Visitor(PhantomData))
	}
}

impl<T: Serialize, V: Serialize> Serialize for RangeDict<T, V> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		let mut seq = serializer.serialize_seq(Some(self.range_count()))?;

		for entry in self {
			seq.serialize_element(&entry)?;
		}

		seq.end()
	}
}

impl<'de, T, V> Deserialize<'de> for RangeDict<T, V>
where
	T: Clone + PartialOrd + Deserialize<'de>,
	V: PartialEq + Deserialize<'de>,
{
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let pairs = Vec::<(Range<T>, V)>::deserialize(deserializer)?;
		RangeDict::try_from_iter(pairs).map_err(D::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_test::{assert_de_tokens_error, assert_tokens, Token};

	#[test]
	fn range() {
		let r = Range::new(1, 7).unwrap();
		assert_tokens(
			&r,
			&[
				Token::Tuple { len: 2 },
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Included",
				},
				Token::I32(1),
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Excluded",
				},
				Token::I32(7),
				Token::TupleEnd,
			],
		);

		let r = Range::<i32>::until(0).unwrap();
		assert_tokens(
			&r,
			&[
				Token::Tuple { len: 2 },
				Token::UnitVariant {
					name: "Bound",
					variant: "Unbounded",
				},
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Excluded",
				},
				Token::I32(0),
				Token::TupleEnd,
			],
		);
	}

	#[test]
	fn invalid_range() {
		assert_de_tokens_error::<Range<i32>>(
			&[
				Token::Tuple { len: 2 },
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Included",
				},
				Token::I32(7),
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Excluded",
				},
				Token::I32(1),
				Token::TupleEnd,
			],
			"invalid range: start must not sort after end, and a range cannot be empty",
		);
	}

	#[test]
	fn set() {
		let s = RangeSet::try_from_ranges(vec![(1, 2), (4, 5)]).unwrap();
		assert_tokens(
			&s,
			&[
				Token::Seq { len: Some(2) },
				Token::Tuple { len: 2 },
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Included",
				},
				Token::I32(1),
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Excluded",
				},
				Token::I32(2),
				Token::TupleEnd,
				Token::Tuple { len: 2 },
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Included",
				},
				Token::I32(4),
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Excluded",
				},
				Token::I32(5),
				Token::TupleEnd,
				Token::SeqEnd,
			],
		);
	}

	#[test]
	fn dict() {
		let d = RangeDict::try_from_iter(vec![((0, 2), 'a')]).unwrap();
		assert_tokens(
			&d,
			&[
				Token::Seq { len: Some(1) },
				Token::Tuple { len: 2 },
				Token::Tuple { len: 2 },
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Included",
				},
				Token::I32(0),
				Token::NewtypeVariant {
					name: "Bound",
					variant: "Excluded",
				},
				Token::I32(2),
				Token::TupleEnd,
				Token::Char('a'),
				Token::TupleEnd,
				Token::SeqEnd,
			],
		);
	}
}
