//! Error types.

use thiserror::Error;

/// Errors raised by range construction, range algebra and lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RangeError {
	/// Two bound values could not be ordered relative to each other
	/// (`partial_cmp` returned `None`).
	#[error("bound values are not mutually comparable")]
	Comparison,

	#[error("invalid range: start must not sort after end, and a range cannot be empty")]
	InvalidRange,

	#[error("no range contains the given key")]
	KeyNotFound,

	#[error("malformed range literal: {0}")]
	Parse(#[from] ParseError),
}

/// Errors raised while reading a range literal such as `"[1, 7)"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	#[error("expected `[` or `(` at the start of the literal")]
	MissingOpeningBracket,

	#[error("expected `]` or `)` at the end of the literal")]
	MissingClosingBracket,

	#[error("expected `,` or `..` between the two bounds")]
	MissingSeparator,

	#[error("invalid bound value `{0}`")]
	InvalidValue(String),
}
