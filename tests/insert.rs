use ordered_ranges::{Range, RangeDict, RangeError};

#[test]
fn insert_range() -> Result<(), RangeError> {
	let mut range_dict: RangeDict<i32, bool> = RangeDict::new();

	range_dict.insert(0..42, true)?;
	range_dict.insert(10..=20, false)?;

	assert_eq!(range_dict.range_count(), 3);
	assert_eq!(range_dict.get(&9), Ok(&true));
	assert_eq!(range_dict.get(&10), Ok(&false));
	assert_eq!(range_dict.get(&20), Ok(&false));
	assert_eq!(range_dict.get(&21), Ok(&true));
	assert_eq!(range_dict.get(&42), Err(RangeError::KeyNotFound));
	Ok(())
}

#[test]
fn insert_splits_older_range() -> Result<(), RangeError> {
	let mut range_dict = RangeDict::new();
	range_dict.insert(Range::new(0, 20)?, "Y")?;
	range_dict.insert(Range::new(8, 16)?, "X")?;

	let entries: Vec<_> = range_dict.iter().map(|(r, v)| (*r, *v)).collect();
	assert_eq!(
		entries,
		vec![
			(Range::new(0, 8)?, "Y"),
			(Range::new(8, 16)?, "X"),
			(Range::new(16, 20)?, "Y")
		]
	);
	Ok(())
}

#[test]
fn insert_multiple_ranges_at_once() -> Result<(), RangeError> {
	let mut range_dict: RangeDict<i32, char> = RangeDict::new();
	range_dict.insert(vec![(0, 2), (4, 6)], 'a')?;
	range_dict.insert("[1, 5)", 'b')?;

	assert_eq!(range_dict.to_string(), "{{[0, 1), [5, 6)}: a, {[1, 5)}: b}");
	assert_eq!(range_dict.len(), 2);
	assert_eq!(range_dict.range_count(), 3);
	Ok(())
}

#[test]
fn insert_default() -> Result<(), RangeError> {
	let mut range_dict = RangeDict::new();
	range_dict.insert(5..10, 1)?;
	range_dict.insert_default(..20, 0)?;

	assert_eq!(range_dict.get(&-100), Ok(&0));
	assert_eq!(range_dict.get(&7), Ok(&1));
	assert_eq!(range_dict.get(&15), Ok(&0));
	assert_eq!(range_dict.ranges_of(&0).len(), 2);
	Ok(())
}

#[test]
fn insert_string_keys() -> Result<(), RangeError> {
	let range_dict = RangeDict::try_from_iter(vec![
		(Range::until("I")?, "A"),
		(Range::new("I", "Q")?, "B"),
		(Range::from_start("Q")?, "C"),
	])?;

	assert_eq!(range_dict.get(&"M"), Ok(&"B"));
	assert_eq!(range_dict.get(&"A"), Ok(&"A"));
	assert_eq!(range_dict.get(&"Q"), Ok(&"C"));
	assert!(range_dict.keys()?.contains_everything());
	Ok(())
}
