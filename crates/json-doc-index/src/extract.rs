//! Canonical JSON re-serialization of a subtree.

use crate::store::NodeStore;
use crate::types::NodeId;
use crate::IndexError;
use serde_json::Value;

/// Emit instruction for the iterative serializer.
enum Emit {
    /// Serialize the subtree rooted at this node.
    Node(NodeId),
    /// Emit this node's key as `"key":`.
    Key(NodeId),
    /// Emit a literal separator or closer.
    Text(&'static str),
}

/// Reconstruct canonical JSON text for the subtree rooted at `id`.
///
/// Object members are emitted in the store's child order, which is the
/// sorted key order rather than the source order — a deliberate
/// canonicalization, not a bug. Strings are escaped per JSON; numbers keep
/// serde_json's canonical rendering. Fails with [`IndexError::NotFound`]
/// for an unknown id and returns no partial output.
pub fn extract(store: &NodeStore, id: NodeId) -> Result<Vec<u8>, IndexError> {
    store.node(id)?;

    let mut out = String::new();
    // Emit instructions on an explicit stack so nesting depth never
    // becomes call stack depth.
    let mut stack = vec![Emit::Node(id)];
    while let Some(emit) = stack.pop() {
        match emit {
            Emit::Text(text) => out.push_str(text),
            Emit::Key(id) => {
                let node = store.node(id)?;
                out.push('"');
                out.push_str(&escape(&node.key));
                out.push_str("\":");
            }
            Emit::Node(id) => {
                let node = store.node(id)?;
                match node.value.as_ref() {
                    Some(Value::String(s)) => {
                        out.push('"');
                        out.push_str(&escape(s));
                        out.push('"');
                    }
                    Some(Value::Number(n)) => out.push_str(&n.to_string()),
                    Some(Value::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
                    Some(Value::Null) => out.push_str("null"),
                    Some(_) => return Err(IndexError::NotFound(id)),
                    None if node.kind.is_branch() => {
                        let object = node.kind == crate::types::NodeKind::Object;
                        out.push(if object { '{' } else { '[' });
                        stack.push(Emit::Text(if object { "}" } else { "]" }));
                        let children = store.children_of(id)?;
                        for (i, &child) in children.iter().enumerate().rev() {
                            stack.push(Emit::Node(child));
                            if object {
                                stack.push(Emit::Key(child));
                            }
                            if i > 0 {
                                stack.push(Emit::Text(","));
                            }
                        }
                    }
                    // A leaf without a value cannot be produced by the
                    // builder; report it instead of emitting garbage.
                    None => return Err(IndexError::NotFound(id)),
                }
            }
        }
    }
    Ok(out.into_bytes())
}

/// Escape a string for JSON output.
///
/// Control characters, the double quote, and the backslash are escaped;
/// everything else passes through untouched.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\u{0020}' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}
