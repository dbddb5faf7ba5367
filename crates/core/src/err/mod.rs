use thiserror::Error;

/// An error originating from the treeflat core library.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// The flatten results can only be attached to an object
	#[error("Found {value} for the flatten target, but an object is expected")]
	InvalidFlattenTarget {
		value: String,
	},
}
