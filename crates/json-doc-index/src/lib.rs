//! json-doc-index — flat, randomly-addressable index over a decoded JSON
//! document.
//!
//! Turns a [`serde_json::Value`] into an arena of dense-id nodes
//! supporting navigation, breadcrumb paths, canonical subtree
//! re-serialization, and cancellable wildcard search. Ids are assigned in
//! preorder document order (objects by sorted key, arrays by index), the
//! store is immutable after a build, and a shared progress fraction lets
//! a UI follow builds of documents with millions of nodes.
//!
//! Decoding raw bytes into a `Value` is the caller's job; this crate
//! starts where the decoder ends.
//!
//! # Example
//!
//! ```
//! use json_doc_index::{estimate, CancelToken, DocIndex, SearchKind, SearchOutcome, ROOT_ID};
//! use serde_json::json;
//!
//! let doc = json!({"alpha": {"sub": "one"}});
//! let mut index = DocIndex::new();
//! index.load(&doc, estimate(&doc).unwrap()).unwrap();
//! assert_eq!(index.size(), 3);
//!
//! let top = index.child_uids(ROOT_ID).unwrap();
//! assert_eq!(index.node(top[0]).unwrap().key, "alpha");
//!
//! let outcome = index
//!     .search(&CancelToken::new(), ROOT_ID, "su*", SearchKind::Key)
//!     .unwrap();
//! assert!(matches!(outcome, SearchOutcome::Found(_)));
//! ```

use thiserror::Error;

pub mod build;
pub mod cancel;
pub mod estimate;
pub mod extract;
pub mod index;
pub mod progress;
pub mod search;
pub mod store;
pub mod types;
pub mod wildcard;

pub use cancel::CancelToken;
pub use estimate::estimate;
pub use index::DocIndex;
pub use progress::ProgressMeter;
pub use store::NodeStore;
pub use types::{Node, NodeId, NodeKind, SearchKind, SearchOutcome, ROOT_ID};
pub use wildcard::compile_wildcard;

/// Errors reported by the document index.
///
/// Every failure is an ordinary return value; malformed or adversarial
/// input degrades to a reported error, never an abort, since the index is
/// embedded in interactive applications that must stay usable after a
/// failed operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// The top-level decoded value was not an object or array.
    #[error("top-level JSON value must be an object or array")]
    UnrecognizedFormat,
    /// Build invariant breach: a node referenced a parent that does not
    /// exist in the store. The build aborts and the store stays empty.
    #[error("parent node {0} does not exist")]
    InvalidParent(crate::types::NodeId),
    /// The requested node id is not present in the store.
    #[error("node {0} does not exist")]
    NotFound(crate::types::NodeId),
    /// A `Keyword` search pattern other than `"true"`, `"false"`, or
    /// `"null"`.
    #[error("invalid keyword pattern {0:?}: expected \"true\", \"false\" or \"null\"")]
    InvalidKeywordPattern(String),
    /// The wildcard pattern did not compile to a regular expression.
    #[error("invalid search pattern: {0}")]
    Pattern(String),
}
