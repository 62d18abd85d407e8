//! Order-preserving deduplication for configuration lists.

use serde_json::Value;

/// Rebuild `items` with duplicates removed, keeping first occurrences in
/// their original order. The input is left unmodified.
///
/// Membership is tested by equality rather than hashing, so elements may be
/// any value, nested mappings included. Quadratic in the worst case, which
/// is fine for config-sized lists.
pub fn deduplicate(items: &[Value]) -> Vec<Value> {
    let mut result: Vec<Value> = Vec::new();
    for item in items {
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}
