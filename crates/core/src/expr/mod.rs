//! The flatten plan and its evaluation.
//!
//! A [`FlattenPlan`] is plan-as-data: its parameters serialize, and the
//! traversal it describes needs only a small, fixed primitive set, so a
//! lowering layer can re-target it at an external expression evaluator
//! instead of calling [`FlattenPlan::process`] here. Such an evaluator
//! must offer conditional branching, arithmetic comparison and addition,
//! array range/slice/concat/index/size operations, a fold with an explicit
//! initial value, absence-safe field lookup, object-to-entries conversion,
//! runtime type tagging, and string concatenation. No such lowering is
//! shipped in this crate.

pub(crate) mod flatten;
pub(crate) mod node;
pub(crate) mod output;
pub(crate) mod schema;
pub(crate) mod walk;

pub use self::flatten::FlattenPlan;
