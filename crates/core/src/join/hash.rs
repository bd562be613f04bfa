// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

use std::{collections::HashMap, fmt::Debug, hash::Hash, ops::Deref};

use tracing::trace;

use crate::error::JoinError;

/// Index from key to the right-side row positions sharing it, positions in
/// input order. Built by one scan of the right sequence, never mutated while
/// probing, and discarded when the join call returns.
pub(crate) struct RightIndex<K>(HashMap<K, Vec<usize>>);

impl<K> Deref for RightIndex<K> {
	type Target = HashMap<K, Vec<usize>>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<K: Hash + Eq> RightIndex<K> {
	pub(crate) fn build<R>(right: &[R], right_key: impl Fn(&R) -> K) -> Self {
		let mut index: HashMap<K, Vec<usize>> = HashMap::new();
		for (row_idx, row) in right.iter().enumerate() {
			index.entry(right_key(row)).or_default().push(row_idx);
		}
		trace!(entries = index.len(), rows = right.len(), "built right-side join index");
		Self(index)
	}

	/// Like [`RightIndex::build`] with a fallible extractor; the first
	/// extraction error aborts the build.
	pub(crate) fn try_build<R>(
		right: &[R],
		mut right_key: impl FnMut(&R) -> crate::Result<K>,
	) -> crate::Result<Self> {
		let mut index: HashMap<K, Vec<usize>> = HashMap::new();
		for (row_idx, row) in right.iter().enumerate() {
			index.entry(right_key(row)?).or_default().push(row_idx);
		}
		trace!(entries = index.len(), rows = right.len(), "built right-side join index");
		Ok(Self(index))
	}
}

pub(crate) fn join_one<L, R, K, O>(
	left: &[L],
	right: &[R],
	left_key: impl Fn(&L) -> K,
	right_key: impl Fn(&R) -> K,
	mut combine: impl FnMut(&L, &R) -> O,
) -> crate::Result<Vec<O>>
where
	K: Hash + Eq + Debug,
{
	let index = RightIndex::build(right, right_key);

	let mut output = Vec::with_capacity(left.len());
	for record in left {
		let key = left_key(record);
		// The index groups by key without any cardinality constraint;
		// one-to-one requires exactly one, so the entry is validated
		// here rather than taking an arbitrary first match.
		match index.get(&key).map(Vec::as_slice) {
			Some([row_idx]) => output.push(combine(record, &right[*row_idx])),
			Some(rows) => {
				return Err(JoinError::Cardinality {
					key: format!("{:?}", key),
					matches: rows.len(),
				});
			}
			None => {
				return Err(JoinError::Cardinality {
					key: format!("{:?}", key),
					matches: 0,
				});
			}
		}
	}
	Ok(output)
}

pub(crate) fn join_group<L, R, K, O>(
	left: &[L],
	right: &[R],
	left_key: impl Fn(&L) -> K,
	right_key: impl Fn(&R) -> K,
	mut combine: impl FnMut(&L, &[&R]) -> O,
) -> Vec<O>
where
	K: Hash + Eq,
{
	let index = RightIndex::build(right, right_key);

	let mut output = Vec::with_capacity(left.len());
	let mut matches: Vec<&R> = Vec::new();
	for record in left {
		matches.clear();
		if let Some(rows) = index.get(&left_key(record)) {
			matches.extend(rows.iter().map(|&row_idx| &right[row_idx]));
		}
		output.push(combine(record, &matches));
	}
	output
}
