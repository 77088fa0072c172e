use std::cmp::Ordering;

/// Merges two sorted vectors into one, keeping the order of equal items.
///
/// Stops at the first comparison failure.
pub(crate) fn try_merge_by<T, E, F>(a: Vec<T>, b: Vec<T>, mut compare: F) -> Result<Vec<T>, E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	let mut result = Vec::with_capacity(a.len() + b.len());
	let mut a = a.into_iter().peekable();
	let mut b = b.into_iter().peekable();

	loop {
		let take_a = match (a.peek(), b.peek()) {
			(Some(x), Some(y)) => compare(x, y)? != Ordering::Greater,
			(Some(_), None) => true,
			(None, Some(_)) => false,
			(None, None) => break,
		};

		result.extend(if take_a { a.next() } else { b.next() });
	}

	Ok(result)
}

/// Stable merge sort with a fallible comparison.
///
/// `slice::sort_by` cannot report a failed comparison and may panic on an
/// inconsistent order.
pub(crate) fn try_sort_by<T, E, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, E>
where
	F: FnMut(&T, &T) -> Result<Ordering, E>,
{
	if items.len() <= 1 {
		return Ok(items);
	}

	let right = items.split_off(items.len() / 2);
	let left = try_sort_by(items, compare)?;
	let right = try_sort_by(right, compare)?;
	try_merge_by(left, right, compare)
}
