//! Size estimation pre-pass.

use crate::IndexError;
use serde_json::Value;

/// Count the nodes the tree builder would create for `value`.
///
/// The root container counts as one node and every object member or array
/// element adds one more, recursively — the same rule the builder applies,
/// so the result is an exact denominator for the build progress fraction.
///
/// The top-level value must be an object or array; anything else fails
/// with [`IndexError::UnrecognizedFormat`].
///
/// # Example
///
/// ```
/// use json_doc_index::estimate;
/// use serde_json::json;
///
/// assert_eq!(estimate(&json!({"a": [1, 2]})).unwrap(), 4);
/// assert!(estimate(&json!("not-a-container")).is_err());
/// ```
pub fn estimate(value: &Value) -> Result<usize, IndexError> {
    if !matches!(value, Value::Object(_) | Value::Array(_)) {
        return Err(IndexError::UnrecognizedFormat);
    }
    // Explicit stack: input nesting depth must not become call stack depth.
    let mut count = 0usize;
    let mut stack = vec![value];
    while let Some(val) = stack.pop() {
        count += 1;
        match val {
            Value::Object(map) => stack.extend(map.values()),
            Value::Array(arr) => stack.extend(arr.iter()),
            _ => {}
        }
    }
    Ok(count)
}
