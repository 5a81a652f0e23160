use json_doc_index::{estimate, DocIndex, IndexError, NodeId, NodeKind, ROOT_ID};
use serde_json::{json, Value};

fn loaded(doc: &Value) -> DocIndex {
    let mut index = DocIndex::new();
    index.load(doc, estimate(doc).unwrap()).unwrap();
    index
}

#[test]
fn size_equals_independent_estimate() {
    let docs = [
        json!({}),
        json!([]),
        json!({"a": 1, "b": [true, null, "x"], "c": {"d": {"e": 2.5}}}),
        json!([[], {}, [[[1]]], {"k": []}]),
    ];
    for doc in &docs {
        let index = loaded(doc);
        assert_eq!(index.size(), estimate(doc).unwrap(), "doc: {doc}");
    }
}

#[test]
fn nested_object_scenario() {
    let index = loaded(&json!({"alpha": {"sub": "one"}}));

    let top = index.child_uids(ROOT_ID).unwrap();
    assert_eq!(top.len(), 1);
    let alpha = index.node(top[0]).unwrap();
    assert_eq!(alpha.key, "alpha");
    assert!(index.is_branch(alpha.id).unwrap());

    let inner = index.child_uids(alpha.id).unwrap();
    assert_eq!(inner.len(), 1);
    let sub = index.node(inner[0]).unwrap();
    assert_eq!(sub.key, "sub");
    assert_eq!(sub.kind, NodeKind::String);
    assert_eq!(sub.value, Some(json!("one")));
}

#[test]
fn scalar_top_level_fails_and_leaves_nothing() {
    let mut index = DocIndex::new();
    let err = index.load(&json!("not-a-container"), 1).unwrap_err();
    assert_eq!(err, IndexError::UnrecognizedFormat);
    assert_eq!(index.size(), 0);
}

#[test]
fn child_order_is_stable_across_calls() {
    let index = loaded(&json!({"z": 1, "m": 2, "a": 3, "list": [3, 1, 2]}));
    let first = index.child_uids(ROOT_ID).unwrap().to_vec();
    for _ in 0..10 {
        assert_eq!(index.child_uids(ROOT_ID).unwrap(), &first[..]);
    }
}

#[test]
fn object_children_are_key_sorted_even_when_decoder_preserves_order() {
    // serde_json is built with preserve_order here, so the decoded map
    // keeps source order and the sort is the index's own doing.
    let doc: Value = serde_json::from_str(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#).unwrap();
    let index = loaded(&doc);
    let keys: Vec<String> = index
        .child_uids(ROOT_ID)
        .unwrap()
        .iter()
        .map(|&id| index.node(id).unwrap().key.clone())
        .collect();
    assert_eq!(keys, ["alpha", "mid", "zeta"]);
}

#[test]
fn path_opens_every_ancestor_down_to_the_node() {
    let index = loaded(&json!({"a": {"b": [{"c": 1}]}}));
    for id in 0..index.size() as NodeId {
        let mut walk = index.path(id).unwrap();
        walk.push(id);
        // Each entry is a child of the previous one, starting at the root.
        assert_eq!(walk[0], ROOT_ID);
        for pair in walk.windows(2) {
            assert!(index.child_uids(pair[0]).unwrap().contains(&pair[1]));
        }
        assert_eq!(*walk.last().unwrap(), id);
    }
}

#[test]
fn parent_is_none_only_for_root() {
    let index = loaded(&json!({"a": {"b": 1}, "c": [2]}));
    assert_eq!(index.parent(ROOT_ID).unwrap(), None);
    for id in 1..index.size() as NodeId {
        assert!(index.parent(id).unwrap().is_some());
    }
}

#[test]
fn branches_carry_no_value_and_leaves_no_children() {
    let index = loaded(&json!({"a": {"b": 1}, "c": [true, null], "d": "s"}));
    for id in 0..index.size() as NodeId {
        let node = index.node(id).unwrap();
        if node.kind.is_branch() {
            assert_eq!(node.value, None, "branch {id} has a scalar");
        } else {
            assert!(node.value.is_some(), "leaf {id} has no scalar");
            assert!(index.child_uids(id).unwrap().is_empty());
        }
    }
}

#[test]
fn ids_are_contiguous_from_zero() {
    let index = loaded(&json!({"a": [1, 2, {"b": 3}], "c": 4}));
    for id in 0..index.size() as NodeId {
        assert_eq!(index.node(id).unwrap().id, id);
    }
    assert!(index.node(index.size() as NodeId).is_err());
}

#[test]
fn reload_discards_the_previous_document() {
    let mut index = DocIndex::new();
    index.load(&json!({"a": 1, "b": 2}), 3).unwrap();
    let before = index.size();
    index.load(&json!([null]), 2).unwrap();
    assert_ne!(index.size(), before);
    assert_eq!(index.node(ROOT_ID).unwrap().kind, NodeKind::Array);
    assert_eq!(index.node(1).unwrap().key, "[0]");
}

#[test]
fn array_keys_are_formatted_indices() {
    let index = loaded(&json!(["a", "b", "c"]));
    let keys: Vec<String> = index
        .child_uids(ROOT_ID)
        .unwrap()
        .iter()
        .map(|&id| index.node(id).unwrap().key.clone())
        .collect();
    assert_eq!(keys, ["[0]", "[1]", "[2]"]);
}
