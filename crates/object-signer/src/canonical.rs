use serde::Serialize;
use serde_json::Value;

use crate::error::SignerError;

/// Maximum nesting depth the canonicalizer accepts.
pub const MAX_DEPTH: usize = 128;

/// Serializes `value` as RFC 8785 (JCS) canonical JSON.
///
/// Structurally-equal values produce byte-identical output regardless of
/// object key order at any nesting depth. Values nested deeper than
/// [`MAX_DEPTH`] are rejected with [`SignerError::Serialization`] — a
/// self-referential structure surfaces as unbounded depth, and truncating
/// it would silently change what gets signed.
pub fn to_canonical_json<T>(value: &T) -> Result<String, SignerError>
where
    T: Serialize + ?Sized,
{
    let value =
        serde_json::to_value(value).map_err(|e| SignerError::Serialization(e.to_string()))?;
    check_depth(&value)?;
    serde_jcs::to_string(&value).map_err(|e| SignerError::Serialization(e.to_string()))
}

// Iterative traversal — an over-deep input must not be able to overflow
// the stack before it is rejected.
fn check_depth(root: &Value) -> Result<(), SignerError> {
    let mut stack = vec![(root, 1usize)];
    while let Some((node, depth)) = stack.pop() {
        if depth > MAX_DEPTH {
            return Err(SignerError::Serialization(format!(
                "value exceeds maximum nesting depth of {MAX_DEPTH}"
            )));
        }
        match node {
            Value::Array(items) => stack.extend(items.iter().map(|v| (v, depth + 1))),
            Value::Object(map) => stack.extend(map.values().map(|v| (v, depth + 1))),
            _ => {}
        }
    }
    Ok(())
}
