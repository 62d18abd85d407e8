//! Deep merge for layered configuration values.
//!
//! Implements the reconciliation step applied when a higher-priority layer
//! ("new") lands on top of previously loaded data ("old"): same-shape
//! containers merge element-by-element, anything else keeps the new value.

use serde_json::Value;
use serde_json::map::Entry;

/// Recursively merge `old` (lower priority) into `new` (higher priority),
/// mutating `new` in place.
///
/// Merge semantics:
/// - Lists: elements of `old` are prepended to `new`, preserving the relative
///   order of both sides. Equal lists are left untouched. With `unique`,
///   elements already present anywhere in `new` are skipped.
/// - Mappings: keys only in `old` are copied into `new`; keys present on both
///   sides are merged recursively. `unique` does not propagate into nested
///   merges.
/// - Any other pairing (scalar vs anything, list vs mapping): `new` wins and
///   is left untouched. A `new` null is a value like any other and survives.
///
/// Inputs must be finite trees; owned `Value`s cannot form cycles, so
/// recursion always terminates.
pub fn object_merge(old: &Value, new: &mut Value, unique: bool) {
    match (old, new) {
        (Value::Array(old_items), Value::Array(new_items)) => {
            if *old_items == *new_items {
                return;
            }
            // Reverse walk so the prepended block keeps old's relative order.
            for item in old_items.iter().rev() {
                if unique && new_items.contains(item) {
                    continue;
                }
                new_items.insert(0, item.clone());
            }
        }
        (Value::Object(old_map), Value::Object(new_map)) => {
            for (key, value) in old_map {
                match new_map.entry(key.clone()) {
                    Entry::Occupied(mut entry) => object_merge(value, entry.get_mut(), false),
                    Entry::Vacant(entry) => {
                        entry.insert(value.clone());
                    }
                }
            }
        }
        _ => {}
    }
}
