// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Equijoin Contributors

//! Dynamically shaped multi-field join keys.
//!
//! Typed callers key their joins on scalars, newtype ids or plain tuples and
//! never touch this module; the compiler already guarantees that both sides
//! agree on the key type. [`CompositeKey`] exists for callers whose key shape
//! is only known at run time: equality and hashing are structural over the
//! ordered components, and the [`KeyShape`] of each key is validated by the
//! [`composite`](crate::composite) join operations.

use std::fmt::{self, Display, Formatter};

use smallvec::SmallVec;

/// A single scalar component of a [`CompositeKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyValue {
	Int(i64),
	Text(String),
}

impl KeyValue {
	pub fn kind(&self) -> KeyKind {
		match self {
			KeyValue::Int(_) => KeyKind::Int,
			KeyValue::Text(_) => KeyKind::Text,
		}
	}
}

impl From<i64> for KeyValue {
	fn from(value: i64) -> Self {
		KeyValue::Int(value)
	}
}

impl From<&str> for KeyValue {
	fn from(value: &str) -> Self {
		KeyValue::Text(value.to_string())
	}
}

impl From<String> for KeyValue {
	fn from(value: String) -> Self {
		KeyValue::Text(value)
	}
}

impl Display for KeyValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			KeyValue::Int(value) => write!(f, "{}", value),
			KeyValue::Text(value) => write!(f, "{:?}", value),
		}
	}
}

/// The kind of one key component, used for shape checking only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
	Int,
	Text,
}

impl Display for KeyKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			KeyKind::Int => f.write_str("int"),
			KeyKind::Text => f.write_str("text"),
		}
	}
}

/// A multi-field join key compared and hashed structurally: two keys are
/// equal iff all corresponding components are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey(SmallVec<[KeyValue; 4]>);

impl CompositeKey {
	pub fn new(components: impl IntoIterator<Item = KeyValue>) -> Self {
		Self(components.into_iter().collect())
	}

	pub fn components(&self) -> &[KeyValue] {
		&self.0
	}

	/// The arity and component kinds this key compares under.
	pub fn shape(&self) -> KeyShape {
		KeyShape(self.0.iter().map(KeyValue::kind).collect())
	}
}

impl<const N: usize> From<[KeyValue; N]> for CompositeKey {
	fn from(components: [KeyValue; N]) -> Self {
		Self(SmallVec::from_iter(components))
	}
}

impl FromIterator<KeyValue> for CompositeKey {
	fn from_iter<I: IntoIterator<Item = KeyValue>>(components: I) -> Self {
		Self(components.into_iter().collect())
	}
}

impl Display for CompositeKey {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (idx, component) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", component)?;
		}
		f.write_str(")")
	}
}

/// The shape of a composite key: its arity and per-component kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyShape(SmallVec<[KeyKind; 4]>);

impl KeyShape {
	pub fn kinds(&self) -> &[KeyKind] {
		&self.0
	}
}

impl Display for KeyShape {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (idx, kind) in self.0.iter().enumerate() {
			if idx > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", kind)?;
		}
		f.write_str(")")
	}
}
