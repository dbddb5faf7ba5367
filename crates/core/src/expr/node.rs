use treeflat_types::Value;

/// A pending node in the breadth-first worklist.
///
/// A node borrows its sub-document from the source value for the duration
/// of one evaluation; nothing is copied until the node is emitted.
#[derive(Clone, Debug)]
pub(crate) struct TreeNode<'a> {
	/// Distance from the root, 0 at the root.
	pub(crate) depth: i64,
	/// Stable position identifier, `"0"` at the root and
	/// `parent.path + "_" + index` below it.
	pub(crate) path: String,
	/// Read-only view into the source document.
	pub(crate) subdocument: &'a Value,
}

impl<'a> TreeNode<'a> {
	const ROOT_PATH: &'static str = "0";

	/// The root node of a traversal.
	pub(crate) fn root(subdocument: &'a Value) -> Self {
		TreeNode {
			depth: 0,
			path: Self::ROOT_PATH.to_owned(),
			subdocument,
		}
	}

	/// A child of this node at the given index within the branching field.
	pub(crate) fn child(&self, index: usize, subdocument: &'a Value) -> Self {
		TreeNode {
			depth: self.depth + 1,
			path: format!("{}_{index}", self.path),
			subdocument,
		}
	}
}
