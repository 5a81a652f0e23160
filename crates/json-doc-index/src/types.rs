//! Core types of the document index.

use serde_json::Value;

/// Dense node identifier, unique within one built store.
///
/// Ids are assigned in preorder traversal order starting at 0 for the root,
/// so ascending id order is the preorder enumeration of the tree.
pub type NodeId = u32;

/// Id of the root node of any non-empty store.
pub const ROOT_ID: NodeId = 0;

/// JSON kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
    Null,
}

impl NodeKind {
    /// A branch is an `Object` or `Array` node; branches carry children
    /// instead of a scalar value.
    pub fn is_branch(self) -> bool {
        matches!(self, NodeKind::Object | NodeKind::Array)
    }
}

/// One entry in the document index: a key, a kind, and either a scalar
/// value (leaf) or ordered children recorded in the store (branch).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    /// Owning node; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Object member name, formatted array index (`"[i]"`), or `""` for
    /// the root.
    pub key: String,
    pub kind: NodeKind,
    /// Scalar payload; `Some` exactly for leaf kinds.
    pub value: Option<Value>,
}

impl Node {
    /// Literal textual rendering of a leaf value: the raw string, the
    /// canonical number text, `"true"`/`"false"`, or `"null"`. `None` for
    /// branches.
    pub fn render(&self) -> Option<String> {
        match self.value.as_ref()? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Null => Some("null".to_owned()),
            _ => None,
        }
    }
}

/// Which facet of a node a search pattern is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Compare against the node's key.
    Key,
    /// Compare against the value of `String` leaves.
    String,
    /// Compare against the canonical rendering of `Number` leaves.
    Number,
    /// Compare against the rendering of `Boolean`/`Null` leaves; the
    /// pattern must be exactly `"true"`, `"false"`, or `"null"`.
    Keyword,
}

/// Terminal outcome of a search.
///
/// `NotFound` and `Canceled` are expected, recoverable results and stay
/// out of the error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(NodeId),
    NotFound,
    Canceled,
}
