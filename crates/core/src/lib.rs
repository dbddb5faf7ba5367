//! # Treeflat Core
//!
//! This crate linearizes a self-contained, arbitrarily nested tree-shaped
//! document into a flat, breadth-first-ordered sequence of its
//! sub-documents, annotating each with its depth, a stable path
//! identifier, and a global sequence position.
//!
//! A [`FlattenPlan`] captures the traversal parameters: the field holding
//! child sub-documents (which may differ at the root), an element budget,
//! a depth bound, a set of fields to omit from emitted records, and an
//! optional per-record field-type summary. Evaluating the plan against a
//! document is a pure transformation; neither the plan nor the document is
//! mutated, and the same plan applied to the same document always yields
//! the same output.
//!
//! ```
//! use treeflat_core::{FlattenPlan, Value};
//!
//! let doc = Value::from(serde_json::json!({
//! 	"name": "root",
//! 	"properties": [
//! 		{ "name": "a", "children": [{ "name": "a_0" }] },
//! 		{ "name": "b" },
//! 	],
//! }));
//!
//! let plan = FlattenPlan::new("children").start_with("properties");
//! let records = plan.process(&doc);
//! assert_eq!(records.len(), 4);
//! ```

#[macro_use]
extern crate tracing;

pub mod err;
pub mod expr;

pub use self::err::Error;
pub use self::expr::FlattenPlan;
pub use treeflat_types::{Array, Kind, Number, Object, Value};
