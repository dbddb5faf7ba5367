use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// The hard nesting ceiling of the target document format.
pub(crate) const MAX_TREE_DEPTH: i64 = 100;

/// The default number of elements emitted before truncation.
pub(crate) const DEFAULT_MAX_ELEMENTS: i64 = 25;

/// A pure plan for linearizing one tree-shaped document into a flat,
/// breadth-first-ordered array of its sub-documents.
///
/// A plan is built once, carries immutable traversal parameters, and can
/// be evaluated any number of times against any number of documents.
/// Evaluation never mutates the plan or its input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlattenPlan {
	/// The field holding child sub-documents at inner levels.
	pub(crate) connect_to_field: String,
	/// The field holding child sub-documents at the root level, when it
	/// differs from the inner one.
	pub(crate) start_with: Option<String>,
	/// Upper bound on the number of emitted records.
	pub(crate) max_elements: i64,
	/// Fields dropped from every emitted record.
	pub(crate) omit_fields: Vec<String>,
	/// Maximum depth descended to, clamped into `[0, MAX_TREE_DEPTH]`.
	pub(crate) max_depth: i64,
	/// Whether emitted records carry a field-type summary.
	pub(crate) show_schema: bool,
}

impl FlattenPlan {
	/// Create a plan branching on the given field, with default bounds.
	pub fn new(connect_to_field: impl Into<String>) -> Self {
		FlattenPlan {
			connect_to_field: connect_to_field.into(),
			start_with: None,
			max_elements: DEFAULT_MAX_ELEMENTS,
			omit_fields: Vec::new(),
			max_depth: MAX_TREE_DEPTH,
			show_schema: false,
		}
	}

	/// Use a different branching field at the root level.
	pub fn start_with(mut self, field: impl Into<String>) -> Self {
		self.start_with = Some(field.into());
		self
	}

	/// Bound the total number of emitted records.
	///
	/// When the bound is reached with nodes still pending, the output ends
	/// with a single overrun marker instead of a normal record. A bound of
	/// zero yields the marker alone.
	pub fn max_elements(mut self, max: i64) -> Self {
		self.max_elements = max;
		self
	}

	/// Drop the named fields from every emitted record.
	pub fn omit_fields<I, S>(mut self, fields: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.omit_fields = fields.into_iter().map(Into::into).collect();
		self
	}

	/// Bound the depth descended to.
	///
	/// Values outside `[0, 100]` are silently clamped to 100, the nesting
	/// ceiling of the target document format.
	pub fn max_depth(mut self, max: i64) -> Self {
		self.max_depth = if (0..=MAX_TREE_DEPTH).contains(&max) {
			max
		} else {
			MAX_TREE_DEPTH
		};
		self
	}

	/// Add a field-type summary to every emitted record.
	pub fn show_schema(mut self, enabled: bool) -> Self {
		self.show_schema = enabled;
		self
	}

	/// The branching field active at the given depth.
	pub(crate) fn branch_field(&self, depth: i64) -> &str {
		match (&self.start_with, depth) {
			(Some(field), 0) => field,
			_ => &self.connect_to_field,
		}
	}
}

impl Display for FlattenPlan {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "FLATTEN {}", self.connect_to_field)?;
		if let Some(ref field) = self.start_with {
			write!(f, " START WITH {field}")?;
		}
		write!(f, " LIMIT {} DEPTH {}", self.max_elements, self.max_depth)?;
		if !self.omit_fields.is_empty() {
			f.write_str(" OMIT ")?;
			for (i, field) in self.omit_fields.iter().enumerate() {
				if i > 0 {
					f.write_str(", ")?;
				}
				f.write_str(field)?;
			}
		}
		if self.show_schema {
			f.write_str(" WITH SCHEMA")?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	use rstest::rstest;

	#[test]
	fn plan_defaults() {
		let plan = FlattenPlan::new("children");
		assert_eq!(plan.connect_to_field, "children");
		assert_eq!(plan.start_with, None);
		assert_eq!(plan.max_elements, 25);
		assert!(plan.omit_fields.is_empty());
		assert_eq!(plan.max_depth, 100);
		assert!(!plan.show_schema);
	}

	#[rstest]
	#[case::negative(-1, 100)]
	#[case::zero(0, 0)]
	#[case::inside(50, 50)]
	#[case::ceiling(100, 100)]
	#[case::above(101, 100)]
	fn plan_depth_clamping(#[case] given: i64, #[case] stored: i64) {
		let plan = FlattenPlan::new("children").max_depth(given);
		assert_eq!(plan.max_depth, stored);
	}

	#[test]
	fn plan_branch_field_per_depth() {
		let plan = FlattenPlan::new("children").start_with("properties");
		assert_eq!(plan.branch_field(0), "properties");
		assert_eq!(plan.branch_field(1), "children");
		assert_eq!(plan.branch_field(7), "children");
		// Without a root override, all levels branch on the same field
		let plan = FlattenPlan::new("children");
		assert_eq!(plan.branch_field(0), "children");
	}

	#[test]
	fn plan_display() {
		let plan = FlattenPlan::new("children")
			.start_with("properties")
			.max_elements(5)
			.omit_fields(["val", "meta"]);
		assert_eq!(
			plan.to_string(),
			"FLATTEN children START WITH properties LIMIT 5 DEPTH 100 OMIT val, meta"
		);
	}
}
