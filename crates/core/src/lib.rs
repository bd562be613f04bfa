// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

//! In-memory equi-join engine.
//!
//! Two interchangeable strategies serve the same contracts: a hash join that
//! builds a right-side index once and probes it per left record, and the
//! nested-loop reference it is benchmarked against. Single-key joins are
//! generic over any `Hash + Eq` key, which covers scalars, newtype ids and
//! plain tuples; callers with dynamically shaped multi-field keys go through
//! [`CompositeKey`] and the [`composite`] module, which validates key shapes
//! at run time.
//!
//! The engine is stateless: inputs are read-only for the duration of a call,
//! the transient index is discarded on return, and `combine` is expected to
//! produce new records rather than mutate its arguments.

pub use error::JoinError;
pub use join::{JoinStrategy, composite, join_group, join_one};
pub use key::{CompositeKey, KeyKind, KeyShape, KeyValue};

mod error;
mod join;
mod key;

pub type Result<T> = std::result::Result<T, JoinError>;
