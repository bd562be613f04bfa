// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

use std::fmt::Debug;

use crate::error::JoinError;

pub(crate) fn join_one<L, R, K, O>(
	left: &[L],
	right: &[R],
	left_key: impl Fn(&L) -> K,
	right_key: impl Fn(&R) -> K,
	mut combine: impl FnMut(&L, &R) -> O,
) -> crate::Result<Vec<O>>
where
	K: Eq + Debug,
{
	let mut output = Vec::with_capacity(left.len());
	for record in left {
		let key = left_key(record);
		// Full scan counting every match: the contract is strict
		// single-match, not first-match.
		let mut found: Option<&R> = None;
		let mut count = 0usize;
		for candidate in right {
			if right_key(candidate) == key {
				found = Some(candidate);
				count += 1;
			}
		}
		match (found, count) {
			(Some(matched), 1) => output.push(combine(record, matched)),
			(_, matches) => {
				return Err(JoinError::Cardinality {
					key: format!("{:?}", key),
					matches,
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
	K: Eq,
{
	let mut output = Vec::with_capacity(left.len());
	let mut matches: Vec<&R> = Vec::new();
	for record in left {
		let key = left_key(record);
		matches.clear();
		matches.extend(right.iter().filter(|&candidate| right_key(candidate) == key));
		output.push(combine(record, &matches));
	}
	output
}
