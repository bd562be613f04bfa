// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

use crate::key::KeyShape;

/// Errors raised by the join operations.
///
/// A cardinality violation is a data problem the caller must fix, either in
/// the dataset or in the choice of join mode; a key shape mismatch is a
/// programming-contract violation between the two key extractors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
	#[error("cardinality violation: key {key} has {matches} matching right records, exactly one required")]
	Cardinality {
		key: String,
		matches: usize,
	},

	#[error("key shape mismatch: expected {expected}, found {found}")]
	KeyShapeMismatch {
		expected: KeyShape,
		found: KeyShape,
	},
}
