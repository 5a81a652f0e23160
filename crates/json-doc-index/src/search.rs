//! Cancellable pattern search over a built store.

use crate::cancel::CancelToken;
use crate::store::NodeStore;
use crate::types::{Node, NodeId, NodeKind, SearchKind, SearchOutcome};
use crate::wildcard::compile_wildcard;
use crate::IndexError;
use regex::Regex;

/// Find the next node after `from` whose facet matches `pattern`.
///
/// Ids are assigned in preorder, so the preorder ring is ascending id
/// order: the traversal visits `from+1 .. size`, wraps to `0`, and stops
/// before revisiting `from` — every other node is examined exactly once,
/// `from` itself never.
///
/// The cancel token is polled before the traversal and once per node, and
/// always wins over a would-be `NotFound`. Usage errors — an unknown
/// `from` id, a `Keyword` pattern other than `"true"`/`"false"`/`"null"`
/// — are reported before any node is examined.
pub fn search(
    store: &NodeStore,
    cancel: &CancelToken,
    from: NodeId,
    pattern: &str,
    kind: SearchKind,
) -> Result<SearchOutcome, IndexError> {
    store.node(from)?;
    let matcher = Matcher::compile(pattern, kind)?;

    if cancel.is_canceled() {
        return Ok(SearchOutcome::Canceled);
    }
    let size = store.size() as NodeId;
    for id in (from + 1..size).chain(0..from) {
        if cancel.is_canceled() {
            return Ok(SearchOutcome::Canceled);
        }
        if matcher.matches(store.node(id)?) {
            return Ok(SearchOutcome::Found(id));
        }
    }
    if cancel.is_canceled() {
        Ok(SearchOutcome::Canceled)
    } else {
        Ok(SearchOutcome::NotFound)
    }
}

/// Compiled form of one search invocation's pattern.
enum Matcher {
    Key(Regex),
    Str(Regex),
    Num(Regex),
    Keyword(&'static str),
}

impl Matcher {
    fn compile(pattern: &str, kind: SearchKind) -> Result<Self, IndexError> {
        Ok(match kind {
            SearchKind::Key => Matcher::Key(compile_wildcard(pattern)?),
            SearchKind::String => Matcher::Str(compile_wildcard(pattern)?),
            SearchKind::Number => Matcher::Num(compile_wildcard(pattern)?),
            // Keywords have exactly three spellings; anything else is a
            // caller usage error, not a traversal failure.
            SearchKind::Keyword => match pattern {
                "true" => Matcher::Keyword("true"),
                "false" => Matcher::Keyword("false"),
                "null" => Matcher::Keyword("null"),
                other => return Err(IndexError::InvalidKeywordPattern(other.to_owned())),
            },
        })
    }

    fn matches(&self, node: &Node) -> bool {
        match self {
            Matcher::Key(re) => re.is_match(&node.key),
            Matcher::Str(re) => {
                node.kind == NodeKind::String
                    && node.render().is_some_and(|s| re.is_match(&s))
            }
            Matcher::Num(re) => {
                node.kind == NodeKind::Number
                    && node.render().is_some_and(|s| re.is_match(&s))
            }
            Matcher::Keyword(kw) => {
                matches!(node.kind, NodeKind::Boolean | NodeKind::Null)
                    && node.render().as_deref() == Some(*kw)
            }
        }
    }
}
