use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The kind, or data type, of a value.
///
/// This is the runtime type tag surfaced in schema summaries, where each
/// field of a sub-document is paired with the kind of its value.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Kind {
	/// Null type.
	Null,
	/// Boolean type.
	Bool,
	/// 64-bit signed integer type.
	Int,
	/// 64-bit floating point type.
	Float,
	/// String type.
	String,
	/// Array type.
	Array,
	/// Object type.
	Object,
}

impl Kind {
	/// Returns the type tag of this kind as a string.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Int => "int",
			Self::Float => "float",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl Display for Kind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
