//! `DocIndex` — the boundary facade over the store, builder, and search.

use crate::build;
use crate::cancel::CancelToken;
use crate::extract;
use crate::progress::ProgressMeter;
use crate::search;
use crate::store::NodeStore;
use crate::types::{Node, NodeId, SearchKind, SearchOutcome};
use crate::IndexError;
use serde_json::Value;

/// Flat index over one loaded JSON document.
///
/// [`load`](DocIndex::load) populates the index wholesale; every other
/// operation is read-only against the finished store until the next
/// `load`/`reset` replaces it, so navigation, extraction, and search may
/// run concurrently with each other through a shared reference.
#[derive(Debug, Default)]
pub struct DocIndex {
    store: NodeStore,
    progress: ProgressMeter,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `value`, replacing any previously loaded document.
    ///
    /// `size_estimate` is the expected node count (see
    /// [`estimate`](crate::estimate::estimate)) and only drives the
    /// progress fraction. Fails with
    /// [`IndexError::UnrecognizedFormat`] if `value` is not an object or
    /// array, leaving the index empty.
    pub fn load(&mut self, value: &Value, size_estimate: usize) -> Result<(), IndexError> {
        build::build(&mut self.store, &self.progress, value, size_estimate)
    }

    /// Discard the current document and reset progress to zero.
    pub fn reset(&mut self) {
        self.store.reset();
        self.progress.reset();
    }

    /// Total node count of the current document.
    pub fn size(&self) -> usize {
        self.store.size()
    }

    /// Ordered child ids of `id`; empty for leaves.
    pub fn child_uids(&self, id: NodeId) -> Result<&[NodeId], IndexError> {
        self.store.children_of(id)
    }

    /// Whether `id` is an object or array node.
    pub fn is_branch(&self, id: NodeId) -> Result<bool, IndexError> {
        self.store.is_branch(id)
    }

    /// The node record for `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, IndexError> {
        self.store.node(id)
    }

    /// Parent of `id`; `None` only for the root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, IndexError> {
        self.store.parent_of(id)
    }

    /// Ancestors of `id`, root first, excluding `id` itself.
    pub fn path(&self, id: NodeId) -> Result<Vec<NodeId>, IndexError> {
        self.store.path_to(id)
    }

    /// Canonical JSON bytes of the subtree rooted at `id`.
    pub fn extract(&self, id: NodeId) -> Result<Vec<u8>, IndexError> {
        extract::extract(&self.store, id)
    }

    /// Find the next node after `from` (wrapping once) whose `kind` facet
    /// matches the wildcard `pattern`. See [`crate::search::search`].
    pub fn search(
        &self,
        cancel: &CancelToken,
        from: NodeId,
        pattern: &str,
        kind: SearchKind,
    ) -> Result<SearchOutcome, IndexError> {
        search::search(&self.store, cancel, from, pattern, kind)
    }

    /// Current build progress fraction in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress.get()
    }

    /// Shared handle to the progress fraction, for polling from another
    /// thread while `load` runs on this one.
    pub fn progress_meter(&self) -> ProgressMeter {
        self.progress.clone()
    }

    /// Read access to the underlying store, for composing custom
    /// traversals.
    pub fn store(&self) -> &NodeStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;
    use crate::types::ROOT_ID;
    use serde_json::json;

    #[test]
    fn failed_load_leaves_the_index_empty() {
        let mut index = DocIndex::new();
        let err = index.load(&json!("not-a-container"), 1).unwrap_err();
        assert_eq!(err, IndexError::UnrecognizedFormat);
        assert_eq!(index.size(), 0);
        assert_eq!(index.progress(), 0.0);
    }

    #[test]
    fn load_after_failed_load_works() {
        let mut index = DocIndex::new();
        index.load(&json!(42), 1).unwrap_err();
        let doc = json!({"a": 1});
        index.load(&doc, estimate(&doc).unwrap()).unwrap();
        assert_eq!(index.size(), 2);
        assert_eq!(index.progress(), 1.0);
    }

    #[test]
    fn reset_clears_store_and_progress() {
        let mut index = DocIndex::new();
        let doc = json!({"a": 1});
        index.load(&doc, 2).unwrap();
        index.reset();
        assert_eq!(index.size(), 0);
        assert_eq!(index.progress(), 0.0);
        assert!(index.node(ROOT_ID).is_err());
    }

    #[test]
    fn progress_meter_is_shared() {
        let mut index = DocIndex::new();
        let meter = index.progress_meter();
        index.load(&json!({"a": 1}), 2).unwrap();
        assert_eq!(meter.get(), 1.0);
    }
}
