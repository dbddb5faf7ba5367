use std::collections::VecDeque;

use treeflat_types::{Array, Object, Value};

use super::flatten::FlattenPlan;
use super::node::TreeNode;
use super::schema::field_summary;

/// The field distinguishing the overrun marker from a normal record.
const OVERRUN_FIELD: &str = "warning";

impl FlattenPlan {
	/// Evaluates this plan against one input document.
	///
	/// The document's tree is walked breadth-first through a FIFO worklist:
	/// all sub-documents at one depth are emitted, in left-to-right sibling
	/// order, before any sub-document at the next depth. Each emitted
	/// record carries its iteration position (`order`), its distance from
	/// the root (`depth`), and a stable path identifier (`path`), followed
	/// by the sub-document's own fields minus the branching field active at
	/// that depth and any omitted fields.
	///
	/// The walk is bounded. Descent stops at the depth bound, and when the
	/// element budget runs out with nodes still pending, the output ends
	/// with a single overrun marker (see [`FlattenPlan::is_overrun`])
	/// instead of a normal record.
	pub fn process(&self, doc: &Value) -> Array {
		trace!("Processing {self}");
		let mut emitted = Array::new();
		let mut worklist = VecDeque::from([TreeNode::root(doc)]);
		// One step beyond the element budget, so that a non-empty worklist
		// at the budget boundary surfaces as an overrun marker.
		for order in 0..=self.max_elements {
			let Some(head) = worklist.pop_front() else {
				break;
			};
			if order == self.max_elements {
				debug!("Element budget of {} reached, output truncated", self.max_elements);
				emitted.push(self.overrun_marker());
				break;
			}
			emitted.push(self.emit(order, &head));
			if head.depth + 1 > self.max_depth {
				continue;
			}
			if let Value::Object(fields) = head.subdocument {
				if let Some(Value::Array(children)) = fields.get(self.branch_field(head.depth)) {
					for (index, child) in children.iter().enumerate() {
						worklist.push_back(head.child(index, child));
					}
				}
			}
		}
		emitted
	}

	/// Builds the output record for one visited node.
	fn emit(&self, order: i64, node: &TreeNode) -> Value {
		let mut record = Object::with_capacity(4);
		record.insert("order", order);
		record.insert("depth", node.depth);
		record.insert("path", node.path.as_str());
		if self.show_schema {
			record.insert("schema", field_summary(node.subdocument));
		}
		if let Value::Object(fields) = node.subdocument {
			let branch = self.branch_field(node.depth);
			for (name, value) in fields.iter() {
				if name == branch || self.omit_fields.contains(name) {
					continue;
				}
				record.insert(name.as_str(), value.clone());
			}
		}
		Value::Object(record)
	}

	/// Builds the record emitted in place of further output when the
	/// element budget runs out.
	fn overrun_marker(&self) -> Value {
		let mut marker = Object::with_capacity(1);
		marker.insert(
			OVERRUN_FIELD,
			format!(
				"Truncated the output after {} elements, the tree has more nodes",
				self.max_elements
			),
		);
		Value::Object(marker)
	}

	/// Returns true if the given record is the overrun marker appended
	/// when the element budget ran out before the tree was fully
	/// traversed.
	pub fn is_overrun(record: &Value) -> bool {
		match record {
			Value::Object(fields) => fields.len() == 1 && fields.contains_key(OVERRUN_FIELD),
			_ => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	fn doc() -> Value {
		Value::from(json!({
			"name": "root",
			"children": [
				{ "name": "a", "children": [{ "name": "a_0" }] },
				{ "name": "b" },
			],
		}))
	}

	#[test]
	fn walk_emits_breadth_first_with_paths() {
		let records = FlattenPlan::new("children").process(&doc());
		assert_eq!(
			Value::Array(records),
			Value::from(json!([
				{ "order": 0, "depth": 0, "path": "0", "name": "root" },
				{ "order": 1, "depth": 1, "path": "0_0", "name": "a" },
				{ "order": 2, "depth": 1, "path": "0_1", "name": "b" },
				{ "order": 3, "depth": 2, "path": "0_0_0", "name": "a_0" },
			]))
		);
	}

	#[test]
	fn walk_root_branching_field_can_differ() {
		let val = Value::from(json!({
			"name": "root",
			"properties": [{ "name": "a", "children": [{ "name": "a_0" }] }],
		}));
		let records = FlattenPlan::new("children").start_with("properties").process(&val);
		assert_eq!(
			Value::Array(records),
			Value::from(json!([
				{ "order": 0, "depth": 0, "path": "0", "name": "root" },
				{ "order": 1, "depth": 1, "path": "0_0", "name": "a" },
				{ "order": 2, "depth": 2, "path": "0_0_0", "name": "a_0" },
			]))
		);
	}

	#[test]
	fn walk_treats_non_array_branching_values_as_leaves() {
		for branch in [json!(5), json!(null), json!({ "name": "single" }), json!("x")] {
			let val = Value::from(json!({ "name": "root", "children": branch.clone() }));
			let records = FlattenPlan::new("children").process(&val);
			assert_eq!(records.len(), 1, "expected a single record for {branch}");
			assert!(!FlattenPlan::is_overrun(&records[0]));
		}
		// An absent branching field and an empty array behave the same way
		let val = Value::from(json!({ "name": "root", "children": [] }));
		assert_eq!(FlattenPlan::new("children").process(&val).len(), 1);
		let val = Value::from(json!({ "name": "root" }));
		assert_eq!(FlattenPlan::new("children").process(&val).len(), 1);
	}

	#[test]
	fn walk_enqueues_non_object_children_at_their_index() {
		let val = Value::from(json!({
			"name": "root",
			"children": [5, { "name": "b" }],
		}));
		let records = FlattenPlan::new("children").process(&val);
		assert_eq!(
			Value::Array(records),
			Value::from(json!([
				{ "order": 0, "depth": 0, "path": "0", "name": "root" },
				{ "order": 1, "depth": 1, "path": "0_0" },
				{ "order": 2, "depth": 1, "path": "0_1", "name": "b" },
			]))
		);
	}

	#[test]
	fn walk_emits_marker_when_budget_runs_out() {
		let records = FlattenPlan::new("children").max_elements(2).process(&doc());
		assert_eq!(records.len(), 3);
		assert!(!FlattenPlan::is_overrun(&records[0]));
		assert!(!FlattenPlan::is_overrun(&records[1]));
		assert!(FlattenPlan::is_overrun(&records[2]));
		// The marker carries no traversal annotations
		let marker = records[2].as_object().unwrap();
		assert!(!marker.contains_key("order"));
		assert!(!marker.contains_key("depth"));
		assert!(!marker.contains_key("path"));
	}

	#[test]
	fn walk_with_a_zero_budget_emits_the_marker_alone() {
		let records = FlattenPlan::new("children").max_elements(0).process(&doc());
		assert_eq!(records.len(), 1);
		assert!(FlattenPlan::is_overrun(&records[0]));
	}

	#[test]
	fn walk_with_a_negative_budget_emits_nothing() {
		let records = FlattenPlan::new("children").max_elements(-3).process(&doc());
		assert!(records.is_empty());
	}

	#[test]
	fn walk_with_an_exact_budget_emits_no_marker() {
		let records = FlattenPlan::new("children").max_elements(4).process(&doc());
		assert_eq!(records.len(), 4);
		assert!(records.iter().all(|r| !FlattenPlan::is_overrun(r)));
	}

	#[test]
	fn walk_depth_bound_stops_descent_not_emission() {
		let records = FlattenPlan::new("children").max_depth(1).process(&doc());
		assert_eq!(records.len(), 3);
		assert_eq!(records[2].as_object().unwrap().get("name"), Some(&Value::from("b")));
	}

	#[test]
	fn walk_annotation_collisions_keep_the_subdocument_value() {
		let val = Value::from(json!({ "name": "root", "order": "mine", "depth": 9 }));
		let records = FlattenPlan::new("children").process(&val);
		assert_eq!(
			Value::Array(records),
			Value::from(json!([
				{ "order": "mine", "depth": 9, "path": "0", "name": "root" },
			]))
		);
	}

	#[test]
	fn walk_a_non_object_root_yields_annotations_only() {
		let records = FlattenPlan::new("children").process(&Value::from(5));
		assert_eq!(
			Value::Array(records),
			Value::from(json!([{ "order": 0, "depth": 0, "path": "0" }]))
		);
	}
}
