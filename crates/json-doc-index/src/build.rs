//! Tree builder: populates a node store from a decoded JSON value.

use crate::progress::ProgressMeter;
use crate::store::NodeStore;
use crate::types::{NodeId, NodeKind};
use crate::IndexError;
use serde_json::Value;

/// Progress is pushed to the meter once per this many created nodes.
const PROGRESS_TICK: usize = 10_000;

fn kind_of(value: &Value) -> NodeKind {
    match value {
        Value::Object(_) => NodeKind::Object,
        Value::Array(_) => NodeKind::Array,
        Value::String(_) => NodeKind::String,
        Value::Number(_) => NodeKind::Number,
        Value::Bool(_) => NodeKind::Boolean,
        Value::Null => NodeKind::Null,
    }
}

/// Build `store` from `value`, assigning ids in preorder document order.
///
/// Object members are walked in bytewise-ascending key order and array
/// elements in index order, so child lists come out sorted without a
/// post-pass. `size_estimate` is only the denominator of the progress
/// fraction (see [`estimate`](crate::estimate::estimate)); a wrong
/// estimate skews the fraction, nothing else.
///
/// The store is reset before the walk. The top-level value must be an
/// object or array; on any failure the store is left empty and progress
/// at zero.
pub fn build(
    store: &mut NodeStore,
    progress: &ProgressMeter,
    value: &Value,
    size_estimate: usize,
) -> Result<(), IndexError> {
    store.reset();
    progress.reset();
    if !matches!(value, Value::Object(_) | Value::Array(_)) {
        return Err(IndexError::UnrecognizedFormat);
    }
    store.reserve(size_estimate);

    if let Err(e) = walk(store, progress, value, size_estimate) {
        store.reset();
        progress.reset();
        return Err(e);
    }
    progress.set(1.0);
    Ok(())
}

fn walk(
    store: &mut NodeStore,
    progress: &ProgressMeter,
    value: &Value,
    size_estimate: usize,
) -> Result<(), IndexError> {
    let root = store.push_root(kind_of(value));
    let mut created = 1usize;

    // Explicit work stack instead of recursion: frames pushed in reverse
    // child order pop in document order, so popped order is the preorder
    // id order and nesting depth never becomes call stack depth.
    let mut stack: Vec<(NodeId, String, &Value)> = Vec::new();
    push_children(&mut stack, root, value);

    while let Some((parent, key, val)) = stack.pop() {
        let kind = kind_of(val);
        let scalar = if kind.is_branch() {
            None
        } else {
            Some(val.clone())
        };
        let id = store.push_child(parent, key, kind, scalar)?;
        if kind.is_branch() {
            push_children(&mut stack, id, val);
        }
        created += 1;
        if created % PROGRESS_TICK == 0 && size_estimate > 0 {
            progress.set(created as f64 / size_estimate as f64);
        }
    }
    Ok(())
}

/// Push the children of `value` onto the work stack, last child first.
fn push_children<'a>(
    stack: &mut Vec<(NodeId, String, &'a Value)>,
    parent: NodeId,
    value: &'a Value,
) {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&str> = map.keys().map(|k| k.as_str()).collect();
            keys.sort_unstable();
            for key in keys.into_iter().rev() {
                stack.push((parent, key.to_owned(), &map[key]));
            }
        }
        Value::Array(arr) => {
            for (i, item) in arr.iter().enumerate().rev() {
                stack.push((parent, format!("[{i}]"), item));
            }
        }
        _ => {}
    }
}
