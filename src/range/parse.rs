use super::Range;
use crate::{ParseError, RangeError};
use std::{ops::Bound, str::FromStr};

/// Reads a range literal into a pair of bounds.
///
/// The literal opens with `[` (included) or `(` (excluded), closes with `]`
/// or `)`, and separates its two values with `,` or `..`. A start of `-inf`
/// or an end of `inf`/`+inf` stands for an unbounded side.
///
/// ```
/// use std::ops::Bound;
/// use ordered_ranges::parse_bounds;
///
/// assert_eq!(
/// 	parse_bounds::<i32>("(3, inf)"),
/// 	Ok((Bound::Excluded(3), Bound::Unbounded))
/// );
/// ```
pub fn parse_bounds<T: FromStr>(text: &str) -> Result<(Bound<T>, Bound<T>), ParseError> {
	let text = text.trim();

	let (include_start, rest) = if let Some(rest) = text.strip_prefix('[') {
		(true, rest)
	} else if let Some(rest) = text.strip_prefix('(') {
		(false, rest)
	} else {
		return Err(ParseError::MissingOpeningBracket);
	};

	let (include_end, inner) = if let Some(inner) = rest.strip_suffix(']') {
		(true, inner)
	} else if let Some(inner) = rest.strip_suffix(')') {
		(false, inner)
	} else {
		return Err(ParseError::MissingClosingBracket);
	};

	let (start, end) = inner
		.split_once(',')
		.or_else(|| inner.split_once(".."))
		.ok_or(ParseError::MissingSeparator)?;

	let start = match start.trim() {
		"-inf" => Bound::Unbounded,
		token => bound(token, include_start)?,
	};

	let end = match end.trim() {
		"inf" | "+inf" => Bound::Unbounded,
		token => bound(token, include_end)?,
	};

	Ok((start, end))
}

fn bound<T: FromStr>(token: &str, included: bool) -> Result<Bound<T>, ParseError> {
	let value = token
		.parse()
		.map_err(|_| ParseError::InvalidValue(token.to_string()))?;

	if included {
		Ok(Bound::Included(value))
	} else {
		Ok(Bound::Excluded(value))
	}
}

impl<T: FromStr + PartialOrd> FromStr for Range<T> {
	type Err = RangeError;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		let (start, end) = parse_bounds(text)?;
		Range::with_bounds(start, end)
	}
}
