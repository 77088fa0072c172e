use crate::{
	range::binary_search,
	set::{carve, coalesce},
	util::try_merge_by,
	IntoRangeSet, Range, RangeError, RangeSet,
};
use slab::Slab;
use std::{cmp::Ordering, fmt};
use tracing::trace;

#[derive(Clone, Debug)]
struct Entry<T> {
	range: Range<T>,
	slot: usize,
}

/// Map from disjoint ranges to values.
///
/// Values are stored once: every range mapped to an equal value points to the
/// same slot, and such ranges are merged when they touch. Ranges mapped to
/// different values may touch.
///
/// Inserting over an already mapped region overwrites it: older ranges are
/// truncated or split so that the new value is the only one over the
/// inserted key.
#[derive(Clone)]
pub struct RangeDict<T, V> {
	entries: Vec<Entry<T>>,
	values: Slab<V>,
}

impl<T, V> Default for RangeDict<T, V> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, V> RangeDict<T, V> {
	pub fn new() -> Self {
		RangeDict {
			entries: Vec::new(),
			values: Slab::new(),
		}
	}

	/// Number of stored ranges.
	pub fn range_count(&self) -> usize {
		self.entries.len()
	}

	/// Number of distinct values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.values.clear()
	}

	/// Iterates over the `(range, value)` pairs in range order.
	pub fn iter(&self) -> Iter<'_, T, V> {
		Iter {
			entries: self.entries.iter(),
			values: &self.values,
		}
	}

	pub fn ranges(&self) -> impl Iterator<Item = &Range<T>> {
		self.entries.iter().map(|e| &e.range)
	}

	/// Distinct values, in the order of their first range.
	pub fn values(&self) -> Vec<&V> {
		self.slots_in_order()
			.into_iter()
			.filter_map(|slot| self.values.get(slot))
			.collect()
	}

	fn slots_in_order(&self) -> Vec<usize> {
		let mut seen = vec![false; self.values.capacity()];
		let mut slots = Vec::with_capacity(self.values.len());

		for entry in &self.entries {
			if let Some(seen) = seen.get_mut(entry.slot) {
				if !*seen {
					*seen = true;
					slots.push(entry.slot)
				}
			}
		}

		slots
	}

	fn slot_of(&self, value: &V) -> Option<usize>
	where
		V: PartialEq,
	{
		self.values
			.iter()
			.find(|(_, v)| *v == value)
			.map(|(slot, _)| slot)
	}

	fn find(&self, point: &T) -> Result<usize, RangeError>
	where
		T: PartialOrd,
	{
		binary_search(&self.entries, |e| &e.range, point)?.ok_or(RangeError::KeyNotFound)
	}

	fn group(&self, slot: usize) -> RangeSet<T>
	where
		T: Clone,
	{
		RangeSet::from_sorted_unchecked(
			self.entries
				.iter()
				.filter(|e| e.slot == slot)
				.map(|e| e.range.clone())
				.collect(),
		)
	}

	/// Installs `entries` and drops the values no entry refers to anymore.
	fn commit(&mut self, entries: Vec<Entry<T>>) {
		let mut used = vec![false; self.values.capacity()];
		for entry in &entries {
			if let Some(used) = used.get_mut(entry.slot) {
				*used = true
			}
		}

		self.values
			.retain(|slot, _| used.get(slot).copied().unwrap_or(false));
		self.entries = entries
	}

	fn pop_slot(&mut self, slot: usize) -> Result<(RangeSet<T>, V), RangeError>
	where
		T: Clone,
	{
		if !self.values.contains(slot) {
			return Err(RangeError::KeyNotFound);
		}

		let ranges = self.group(slot);
		self.entries.retain(|e| e.slot != slot);
		let value = self.values.remove(slot);

		trace!(ranges = ranges.len(), remaining = self.entries.len(), "value popped");
		Ok((ranges, value))
	}

	pub fn get(&self, point: &T) -> Result<&V, RangeError>
	where
		T: PartialOrd,
	{
		let slot = self.entries[self.find(point)?].slot;
		self.values.get(slot).ok_or(RangeError::KeyNotFound)
	}

	/// Returns the stored range containing `point` with its value.
	pub fn get_key_value(&self, point: &T) -> Result<(&Range<T>, &V), RangeError>
	where
		T: PartialOrd,
	{
		let entry = &self.entries[self.find(point)?];
		let value = self.values.get(entry.slot).ok_or(RangeError::KeyNotFound)?;
		Ok((&entry.range, value))
	}

	pub fn contains_key(&self, point: &T) -> Result<bool, RangeError>
	where
		T: PartialOrd,
	{
		Ok(binary_search(&self.entries, |e| &e.range, point)?.is_some())
	}

	/// Every range mapped to the value found at `point`.
	pub fn get_range_set(&self, point: &T) -> Result<RangeSet<T>, RangeError>
	where
		T: Clone + PartialOrd,
	{
		let slot = self.entries[self.find(point)?].slot;
		Ok(self.group(slot))
	}

	/// Every range mapped to `value`, empty if the value is not stored.
	pub fn ranges_of(&self, value: &V) -> RangeSet<T>
	where
		T: Clone,
		V: PartialEq,
	{
		match self.slot_of(value) {
			Some(slot) => self.group(slot),
			None => RangeSet::new(),
		}
	}

	/// Ranges grouped by value, in the order of the first range of each
	/// group.
	pub fn items(&self) -> Vec<(RangeSet<T>, &V)>
	where
		T: Clone,
	{
		self.slots_in_order()
			.into_iter()
			.filter_map(|slot| self.values.get(slot).map(|v| (self.group(slot), v)))
			.collect()
	}

	/// Removes every range sharing the value found at `point`.
	pub fn pop(&mut self, point: &T) -> Result<(RangeSet<T>, V), RangeError>
	where
		T: Clone + PartialOrd,
	{
		let slot = self.entries[self.find(point)?].slot;
		self.pop_slot(slot)
	}

	/// Removes every range mapped to `value`.
	pub fn pop_value(&mut self, value: &V) -> Result<(RangeSet<T>, V), RangeError>
	where
		T: Clone,
		V: PartialEq,
	{
		let slot = self.slot_of(value).ok_or(RangeError::KeyNotFound)?;
		self.pop_slot(slot)
	}
}

impl<T: Clone + PartialOrd, V> RangeDict<T, V> {
	pub fn try_from_iter<I, K>(pairs: I) -> Result<Self, RangeError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: IntoRangeSet<T>,
		V: PartialEq,
	{
		let mut dict = RangeDict::new();
		for (key, value) in pairs {
			dict.insert(key, value)?
		}

		Ok(dict)
	}

	/// Inserts every pair in order, later keys overwriting earlier ones.
	///
	/// On error the dictionary is left as it was.
	pub fn try_extend<I, K>(&mut self, pairs: I) -> Result<(), RangeError>
	where
		I: IntoIterator<Item = (K, V)>,
		K: IntoRangeSet<T>,
		V: Clone + PartialEq,
	{
		let mut result = self.clone();
		for (key, value) in pairs {
			result.insert(key, value)?
		}

		*self = result;
		Ok(())
	}

	/// The union of all stored ranges.
	pub fn keys(&self) -> Result<RangeSet<T>, RangeError> {
		let ranges = coalesce(self.entries.iter().map(|e| (e.range.clone(), ())))?;
		Ok(RangeSet::from_sorted_unchecked(
			ranges.into_iter().map(|(r, ())| r).collect(),
		))
	}

	/// Maps every value of `key` to `value`.
	///
	/// Stored ranges overlapping `key` lose the overlapped part, and keep
	/// their value elsewhere.
	pub fn insert<K: IntoRangeSet<T>>(&mut self, key: K, value: V) -> Result<(), RangeError>
	where
		V: PartialEq,
	{
		let key = key.into_range_set()?;
		let existing = self.slot_of(&value);

		let kept = carve(
			self.entries.iter().map(|e| (e.range.clone(), Some(e.slot))),
			key.as_slice(),
		)?;
		let added = key.into_iter().map(|range| (range, existing)).collect();
		let merged = try_merge_by(kept, added, |a, b| a.0.try_cmp(&b.0))?;
		let entries = coalesce(merged)?;

		let slot = match existing {
			Some(slot) => slot,
			None => self.values.insert(value),
		};

		self.commit(
			entries
				.into_iter()
				.map(|(range, tag)| Entry {
					range,
					slot: tag.unwrap_or(slot),
				})
				.collect(),
		);

		trace!(
			ranges = self.entries.len(),
			values = self.values.len(),
			"range dict insert"
		);
		Ok(())
	}

	/// Maps to `value` the parts of `key` that are not mapped yet.
	pub fn insert_default<K: IntoRangeSet<T>>(&mut self, key: K, value: V) -> Result<(), RangeError>
	where
		V: PartialEq,
	{
		let key = key.into_range_set()?;
		let taken: Vec<Range<T>> = self.entries.iter().map(|e| e.range.clone()).collect();
		let gaps = carve(key.into_iter().map(|r| (r, ())), &taken)?;
		self.insert(
			RangeSet::from_sorted_unchecked(gaps.into_iter().map(|(r, ())| r).collect()),
			value,
		)
	}

	/// Unmaps every value of `key`.
	pub fn remove<K: IntoRangeSet<T>>(&mut self, key: K) -> Result<(), RangeError> {
		let key = key.into_range_set()?;
		let entries = carve(
			self.entries.iter().map(|e| (e.range.clone(), e.slot)),
			key.as_slice(),
		)?;

		self.commit(
			entries
				.into_iter()
				.map(|(range, slot)| Entry { range, slot })
				.collect(),
		);

		trace!(
			ranges = self.entries.len(),
			values = self.values.len(),
			"range dict remove"
		);
		Ok(())
	}

	/// Stored values over `key`, each paired with the part of `key` it covers.
	pub fn get_overlap<K: IntoRangeSet<T>>(&self, key: K) -> Result<Vec<(Range<T>, &V)>, RangeError> {
		let key = key.into_range_set()?;
		let (a, b) = (&self.entries, key.as_slice());
		let (mut i, mut j) = (0, 0);
		let mut result = Vec::new();

		while i < a.len() && j < b.len() {
			if let Some(range) = a[i].range.intersect(&b[j])? {
				let value = self.values.get(a[i].slot).ok_or(RangeError::KeyNotFound)?;
				result.push((range, value))
			}

			if a[i].range.directed_end().try_cmp(&b[j].directed_end())? == Ordering::Less {
				i += 1
			} else {
				j += 1
			}
		}

		Ok(result)
	}

	/// Replaces the value found at `point`, for every range sharing it.
	///
	/// If `value` is already mapped elsewhere, the two groups are merged.
	/// Returns the previous value.
	pub fn replace(&mut self, point: &T, value: V) -> Result<V, RangeError>
	where
		V: PartialEq,
	{
		let slot = self.entries[self.find(point)?].slot;
		self.replace_slot(slot, value)
	}

	/// Computes a new value from the one found at `point` and stores it for
	/// every range sharing it, as [`replace`](Self::replace) does.
	///
	/// Returns the previous value.
	pub fn update<F>(&mut self, point: &T, f: F) -> Result<V, RangeError>
	where
		F: FnOnce(&V) -> V,
		V: PartialEq,
	{
		let slot = self.entries[self.find(point)?].slot;
		let value = f(self.values.get(slot).ok_or(RangeError::KeyNotFound)?);
		self.replace_slot(slot, value)
	}

	/// Maps every range of `old` to `new` instead.
	pub fn replace_value(&mut self, old: &V, new: V) -> Result<V, RangeError>
	where
		V: PartialEq,
	{
		let slot = self.slot_of(old).ok_or(RangeError::KeyNotFound)?;
		self.replace_slot(slot, new)
	}

	fn replace_slot(&mut self, slot: usize, value: V) -> Result<V, RangeError>
	where
		V: PartialEq,
	{
		let target = self
			.values
			.iter()
			.find(|(other, v)| *other != slot && **v == value)
			.map(|(other, _)| other);

		match target {
			Some(target) => {
				let entries = coalesce(self.entries.iter().map(|e| {
					let tag = if e.slot == slot { target } else { e.slot };
					(e.range.clone(), tag)
				}))?;

				if !self.values.contains(slot) {
					return Err(RangeError::KeyNotFound);
				}

				let old = self.values.remove(slot);
				self.entries = entries
					.into_iter()
					.map(|(range, slot)| Entry { range, slot })
					.collect();

				trace!(ranges = self.entries.len(), "value groups merged");
				Ok(old)
			}
			None => {
				let current = self.values.get_mut(slot).ok_or(RangeError::KeyNotFound)?;
				trace!(slot, "value replaced");
				Ok(std::mem::replace(current, value))
			}
		}
	}
}

pub struct Iter<'a, T, V> {
	entries: std::slice::Iter<'a, Entry<T>>,
	values: &'a Slab<V>,
}

impl<'a, T, V> Iterator for Iter<'a, T, V> {
	type Item = (&'a Range<T>, &'a V);

	fn next(&mut self) -> Option<Self::Item> {
		let entry = self.entries.next()?;
		self.values.get(entry.slot).map(|v| (&entry.range, v))
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.entries.size_hint()
	}
}

impl<'a, T, V> IntoIterator for &'a RangeDict<T, V> {
	type Item = (&'a Range<T>, &'a V);
	type IntoIter = Iter<'a, T, V>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<T: PartialEq, V: PartialEq> PartialEq for RangeDict<T, V> {
	fn eq(&self, other: &Self) -> bool {
		self.range_count() == other.range_count() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
	}
}

impl<T: fmt::Debug, V: fmt::Debug> fmt::Debug for RangeDict<T, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

impl<T: fmt::Display, V: fmt::Display> fmt::Display for RangeDict<T, V> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{{")?;
		for (i, slot) in self.slots_in_order().into_iter().enumerate() {
			if i > 0 {
				write!(f, ", ")?;
			}

			write!(f, "{{")?;
			let ranges = self.entries.iter().filter(|e| e.slot == slot);
			for (j, entry) in ranges.enumerate() {
				if j > 0 {
					write!(f, ", ")?;
				}
				write!(f, "{}", entry.range)?;
			}
			write!(f, "}}")?;

			if let Some(value) = self.values.get(slot) {
				write!(f, ": {}", value)?;
			}
		}
		write!(f, "}}")
	}
}
