use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Represents a numeric value, either a 64-bit integer or a 64-bit float.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
	/// An integer number.
	Int(i64),
	/// A floating point number.
	Float(f64),
}

impl Number {
	/// Check if this number is an integer
	pub fn is_int(&self) -> bool {
		matches!(self, Number::Int(_))
	}

	/// Check if this number is a float
	pub fn is_float(&self) -> bool {
		matches!(self, Number::Float(_))
	}

	/// Converts this number to a float
	pub fn as_float(self) -> f64 {
		match self {
			Number::Int(v) => v as f64,
			Number::Float(v) => v,
		}
	}
}

impl PartialEq for Number {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Number::Int(a), Number::Int(b)) => a == b,
			(Number::Float(a), Number::Float(b)) => a == b,
			(Number::Int(a), Number::Float(b)) => (*a as f64) == *b,
			(Number::Float(a), Number::Int(b)) => *a == (*b as f64),
		}
	}
}

impl From<i64> for Number {
	fn from(v: i64) -> Self {
		Number::Int(v)
	}
}

impl From<i32> for Number {
	fn from(v: i32) -> Self {
		Number::Int(v as i64)
	}
}

impl From<f64> for Number {
	fn from(v: f64) -> Self {
		Number::Float(v)
	}
}

impl Display for Number {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Number::Int(v) => Display::fmt(v, f),
			Number::Float(v) => Display::fmt(v, f),
		}
	}
}
