//! Arena node store and read-only navigation queries.

use crate::types::{Node, NodeId, NodeKind};
use crate::IndexError;
use serde_json::Value;

/// Owns all nodes of the currently loaded document.
///
/// Ids are indices into a contiguous arena; child lists live in a parallel
/// side table, so the "parent already exists" invariant is an array-bounds
/// check rather than a map probe. The store is populated once by the tree
/// builder and read-only afterwards, which makes every query below safe to
/// run concurrently with search.
#[derive(Debug, Default)]
pub struct NodeStore {
    nodes: Vec<Node>,
    children: Vec<Vec<NodeId>>,
}

impl NodeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total node count of the current store.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discard all nodes.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.children.clear();
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
        self.children.reserve(additional);
    }

    /// Append the root node to an empty store.
    pub(crate) fn push_root(&mut self, kind: NodeKind) -> NodeId {
        debug_assert!(self.nodes.is_empty());
        self.nodes.push(Node {
            id: 0,
            parent: None,
            key: String::new(),
            kind,
            value: None,
        });
        self.children.push(Vec::new());
        0
    }

    /// Append a node under `parent`, returning the new id.
    ///
    /// A parent id not already present in the arena is reported as
    /// [`IndexError::InvalidParent`]; the store is left untouched.
    pub(crate) fn push_child(
        &mut self,
        parent: NodeId,
        key: String,
        kind: NodeKind,
        value: Option<Value>,
    ) -> Result<NodeId, IndexError> {
        let id = self.nodes.len() as NodeId;
        let slot = self
            .children
            .get_mut(parent as usize)
            .ok_or(IndexError::InvalidParent(parent))?;
        slot.push(id);
        self.nodes.push(Node {
            id,
            parent: Some(parent),
            key,
            kind,
            value,
        });
        self.children.push(Vec::new());
        Ok(id)
    }

    /// Ordered child ids of `id`; empty for leaves.
    pub fn children_of(&self, id: NodeId) -> Result<&[NodeId], IndexError> {
        self.node(id)?;
        Ok(&self.children[id as usize])
    }

    /// Whether `id` is an object or array node.
    pub fn is_branch(&self, id: NodeId) -> Result<bool, IndexError> {
        Ok(self.node(id)?.kind.is_branch())
    }

    /// The node record for `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, IndexError> {
        self.nodes.get(id as usize).ok_or(IndexError::NotFound(id))
    }

    /// Parent id of `id`; `None` only for the root.
    pub fn parent_of(&self, id: NodeId) -> Result<Option<NodeId>, IndexError> {
        Ok(self.node(id)?.parent)
    }

    /// Ancestor ids of `id`, ordered root first, excluding `id` itself.
    ///
    /// Consumers open each returned id in order to reveal `id`; the root's
    /// path is empty.
    pub fn path_to(&self, id: NodeId) -> Result<Vec<NodeId>, IndexError> {
        let mut node = self.node(id)?;
        let mut path = Vec::new();
        while let Some(parent) = node.parent {
            path.push(parent);
            node = &self.nodes[parent as usize];
        }
        path.reverse();
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn small_store() -> NodeStore {
        // {"a": {"b": 1}, "c": true} laid out by hand
        let mut store = NodeStore::new();
        let root = store.push_root(NodeKind::Object);
        let a = store
            .push_child(root, "a".to_owned(), NodeKind::Object, None)
            .unwrap();
        store
            .push_child(a, "b".to_owned(), NodeKind::Number, Some(json!(1)))
            .unwrap();
        store
            .push_child(root, "c".to_owned(), NodeKind::Boolean, Some(json!(true)))
            .unwrap();
        store
    }

    #[test]
    fn ids_are_dense_and_preordered() {
        let store = small_store();
        assert_eq!(store.size(), 4);
        for id in 0..4 {
            assert_eq!(store.node(id).unwrap().id, id);
        }
    }

    #[test]
    fn children_are_ordered() {
        let store = small_store();
        assert_eq!(store.children_of(0).unwrap(), &[1, 3]);
        assert_eq!(store.children_of(1).unwrap(), &[2]);
        assert_eq!(store.children_of(2).unwrap(), &[] as &[NodeId]);
    }

    #[test]
    fn branch_test() {
        let store = small_store();
        assert!(store.is_branch(0).unwrap());
        assert!(store.is_branch(1).unwrap());
        assert!(!store.is_branch(2).unwrap());
        assert!(!store.is_branch(3).unwrap());
    }

    #[test]
    fn parent_links() {
        let store = small_store();
        assert_eq!(store.parent_of(0).unwrap(), None);
        assert_eq!(store.parent_of(1).unwrap(), Some(0));
        assert_eq!(store.parent_of(2).unwrap(), Some(1));
        assert_eq!(store.parent_of(3).unwrap(), Some(0));
    }

    #[test]
    fn path_excludes_target() {
        let store = small_store();
        assert_eq!(store.path_to(0).unwrap(), Vec::<NodeId>::new());
        assert_eq!(store.path_to(2).unwrap(), vec![0, 1]);
        assert_eq!(store.path_to(3).unwrap(), vec![0]);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = small_store();
        assert_eq!(store.node(99).unwrap_err(), IndexError::NotFound(99));
        assert_eq!(store.children_of(99).unwrap_err(), IndexError::NotFound(99));
        assert_eq!(store.path_to(99).unwrap_err(), IndexError::NotFound(99));
    }

    #[test]
    fn missing_parent_is_invalid() {
        let mut store = NodeStore::new();
        store.push_root(NodeKind::Array);
        let err = store
            .push_child(7, "[0]".to_owned(), NodeKind::Null, Some(json!(null)))
            .unwrap_err();
        assert_eq!(err, IndexError::InvalidParent(7));
    }

    #[test]
    fn reset_empties_the_store() {
        let mut store = small_store();
        store.reset();
        assert!(store.is_empty());
        assert_eq!(store.size(), 0);
        assert!(store.node(0).is_err());
    }
}
