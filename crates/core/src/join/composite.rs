// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

//! Joins under dynamically shaped [`CompositeKey`]s.
//!
//! The typed operations in the crate root leave key agreement to the
//! compiler. Here the key shape is data, so agreement is a run-time
//! contract: all right-side keys must share one shape and every left-side
//! key must match it. Validation is best-effort: the first extracted key
//! fixes the expected shape, and the first deviating key fails the call with
//! [`JoinError::KeyShapeMismatch`].

use crate::{
	error::JoinError,
	join::{JoinStrategy, hash::RightIndex},
	key::{CompositeKey, KeyShape},
};

/// Tracks the reference shape across one call; the first key seen fixes it.
struct ShapeCheck {
	expected: Option<KeyShape>,
}

impl ShapeCheck {
	fn new() -> Self {
		Self {
			expected: None,
		}
	}

	fn check(&mut self, key: &CompositeKey) -> crate::Result<()> {
		let found = key.shape();
		match &self.expected {
			Some(expected) if *expected == found => Ok(()),
			Some(expected) => Err(JoinError::KeyShapeMismatch {
				expected: expected.clone(),
				found,
			}),
			None => {
				self.expected = Some(found);
				Ok(())
			}
		}
	}
}

/// One-to-one join on composite keys; see
/// [`join_one`](crate::join_one) for the cardinality contract.
pub fn join_one<L, R, O>(
	left: &[L],
	right: &[R],
	left_key: impl Fn(&L) -> CompositeKey,
	right_key: impl Fn(&R) -> CompositeKey,
	mut combine: impl FnMut(&L, &R) -> O,
	strategy: JoinStrategy,
) -> crate::Result<Vec<O>> {
	let mut shapes = ShapeCheck::new();

	match strategy {
		JoinStrategy::Hash => {
			let index = RightIndex::try_build(right, |row| {
				let key = right_key(row);
				shapes.check(&key)?;
				Ok(key)
			})?;

			let mut output = Vec::with_capacity(left.len());
			for record in left {
				let key = left_key(record);
				shapes.check(&key)?;
				match index.get(&key).map(Vec::as_slice) {
					Some([row_idx]) => output.push(combine(record, &right[*row_idx])),
					Some(rows) => {
						return Err(JoinError::Cardinality {
							key: key.to_string(),
							matches: rows.len(),
						});
					}
					None => {
						return Err(JoinError::Cardinality {
							key: key.to_string(),
							matches: 0,
						});
					}
				}
			}
			Ok(output)
		}
		JoinStrategy::NestedLoop => {
			let right_keys = validated_keys(right, right_key, &mut shapes)?;

			let mut output = Vec::with_capacity(left.len());
			for record in left {
				let key = left_key(record);
				shapes.check(&key)?;
				let mut found: Option<&R> = None;
				let mut count = 0usize;
				for (row_idx, candidate) in right_keys.iter().enumerate() {
					if *candidate == key {
						found = Some(&right[row_idx]);
						count += 1;
					}
				}
				match (found, count) {
					(Some(matched), 1) => output.push(combine(record, matched)),
					(_, matches) => {
						return Err(JoinError::Cardinality {
							key: key.to_string(),
							matches,
						});
					}
				}
			}
			Ok(output)
		}
	}
}

/// Group join on composite keys; see [`join_group`](crate::join_group) for
/// the grouping contract. Fallible only through shape validation.
pub fn join_group<L, R, O>(
	left: &[L],
	right: &[R],
	left_key: impl Fn(&L) -> CompositeKey,
	right_key: impl Fn(&R) -> CompositeKey,
	mut combine: impl FnMut(&L, &[&R]) -> O,
	strategy: JoinStrategy,
) -> crate::Result<Vec<O>> {
	let mut shapes = ShapeCheck::new();

	match strategy {
		JoinStrategy::Hash => {
			let index = RightIndex::try_build(right, |row| {
				let key = right_key(row);
				shapes.check(&key)?;
				Ok(key)
			})?;

			let mut output = Vec::with_capacity(left.len());
			let mut matches: Vec<&R> = Vec::new();
			for record in left {
				let key = left_key(record);
				shapes.check(&key)?;
				matches.clear();
				if let Some(rows) = index.get(&key) {
					matches.extend(rows.iter().map(|&row_idx| &right[row_idx]));
				}
				output.push(combine(record, &matches));
			}
			Ok(output)
		}
		JoinStrategy::NestedLoop => {
			let right_keys = validated_keys(right, right_key, &mut shapes)?;

			let mut output = Vec::with_capacity(left.len());
			let mut matches: Vec<&R> = Vec::new();
			for record in left {
				let key = left_key(record);
				shapes.check(&key)?;
				matches.clear();
				for (row_idx, candidate) in right_keys.iter().enumerate() {
					if *candidate == key {
						matches.push(&right[row_idx]);
					}
				}
				output.push(combine(record, &matches));
			}
			Ok(output)
		}
	}
}

/// Extract all right-side keys up front so their shapes are validated in
/// input order, matching the hash variant's behavior on an empty left side.
fn validated_keys<R>(
	right: &[R],
	right_key: impl Fn(&R) -> CompositeKey,
	shapes: &mut ShapeCheck,
) -> crate::Result<Vec<CompositeKey>> {
	let mut keys = Vec::with_capacity(right.len());
	for row in right {
		let key = right_key(row);
		shapes.check(&key)?;
		keys.push(key);
	}
	Ok(keys)
}
