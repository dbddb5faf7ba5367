//! # Treeflat Types
//!
//! This crate is the value model of the treeflat document flattener.
//! It defines the JSON-like value universe the flattener traverses:
//! documents are ordered mappings from field name to value, and values
//! may be scalars, nested documents, or sequences of values.
//!
//! The model is intentionally small. There is no temporal, binary, or
//! identifier type here; a document is opaque data except for the field
//! the flattener branches on.

/// Runtime type tags for values
pub mod kind;
/// Value types for tree-shaped documents
pub mod value;

pub use self::kind::Kind;
pub use self::value::{Array, Number, Object, Value};
