//! Minimal settings container.
//!
//! A flat key/value store with layered-merge support. Mirrors the runtime
//! settings object closely enough to run loaders against it in tests: values
//! live in a single mapping, lookups distinguish absent keys from stored
//! nulls via [`Missing`], and incoming layers are reconciled with existing
//! data through [`object_merge`], one call per conflicting key.

use crate::merge::object_merge;
use crate::missing::Missing;
use anyhow::{Result, bail};
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use tracing::debug;

/// Dict-like settings store.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    data: Map<String, Value>,
    loaded_files: Vec<PathBuf>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.data.insert(key.into(), value);
    }

    /// Look up `key`. Absent keys are `Err(Missing)`; a stored null is a
    /// legitimate value and comes back as `Ok`.
    pub fn get(&self, key: &str) -> Result<&Value, Missing> {
        self.data.get(key).ok_or(Missing)
    }

    /// Whether `key` holds any value, a stored null included.
    pub fn exists(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }

    /// Process-environment passthrough for loaders.
    pub fn get_environ(key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    /// Merge one key from a higher-priority layer.
    ///
    /// The existing value (if any) participates as the lower-priority side;
    /// `incoming` wins on any shape conflict and is what ends up stored.
    pub fn merge_key(&mut self, key: impl Into<String>, mut incoming: Value, unique: bool) {
        let key = key.into();
        if let Some(existing) = self.data.get(&key) {
            object_merge(existing, &mut incoming, unique);
        }
        self.data.insert(key, incoming);
    }

    /// Merge a whole layer, one [`Self::merge_key`] per entry.
    pub fn merge_layer(&mut self, layer: Map<String, Value>, unique: bool) {
        debug!(keys = layer.len(), "merging configuration layer");
        for (key, value) in layer {
            self.merge_key(key, value, unique);
        }
    }

    /// Serialize a typed layer (e.g. a defaults struct) and merge it.
    ///
    /// Errors if `layer` does not serialize to a mapping.
    pub fn merge_layer_from<T: Serialize>(&mut self, layer: &T, unique: bool) -> Result<()> {
        match serde_json::to_value(layer)? {
            Value::Object(map) => {
                self.merge_layer(map, unique);
                Ok(())
            }
            other => bail!("layer must serialize to a mapping, got {other}"),
        }
    }

    /// Record a source file consumed by a loader.
    pub fn record_loaded_file(&mut self, path: impl Into<PathBuf>) {
        self.loaded_files.push(path.into());
    }

    /// Files recorded by loaders, in load order.
    pub fn loaded_files(&self) -> &[PathBuf] {
        &self.loaded_files
    }

    /// Read-only view of the stored data.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_set_get_exists() {
        let mut settings = Settings::new();
        settings.set("debug", json!(true));

        assert!(settings.exists("debug"));
        assert_eq!(settings.get("debug"), Ok(&json!(true)));
        assert!(!settings.exists("verbose"));
        assert_eq!(settings.get("verbose"), Err(Missing));
    }

    #[test]
    fn test_stored_null_is_not_missing() {
        let mut settings = Settings::new();
        settings.set("proxy", Value::Null);

        assert!(settings.exists("proxy"));
        assert_eq!(settings.get("proxy"), Ok(&Value::Null));
    }

    #[test]
    fn test_merge_key_reconciles_with_existing() {
        let mut settings = Settings::new();
        settings.set("db", json!({"host": "localhost", "port": 5432}));
        settings.merge_key("db", json!({"port": 6543}), false);

        assert_eq!(settings.get("db"), Ok(&json!({"host": "localhost", "port": 6543})));
    }

    #[test]
    fn test_merge_key_without_existing_stores_incoming() {
        let mut settings = Settings::new();
        settings.merge_key("name", json!("strata"), false);
        assert_eq!(settings.get("name"), Ok(&json!("strata")));
    }

    #[test]
    fn test_merge_key_unique_lists() {
        let mut settings = Settings::new();
        settings.set("features", json!(["a", "b"]));
        settings.merge_key("features", json!(["b", "c"]), true);

        assert_eq!(settings.get("features"), Ok(&json!(["a", "b", "c"])));
    }

    #[test]
    fn test_merge_layer_applies_every_key() {
        let mut settings = Settings::new();
        settings.set("a", json!([1, 2]));
        settings.set("b", json!({"x": 1}));

        let layer = json!({"a": [3], "b": {"y": 2}, "c": "fresh"});
        let Value::Object(layer) = layer else {
            unreachable!()
        };
        settings.merge_layer(layer, false);

        assert_eq!(settings.get("a"), Ok(&json!([1, 2, 3])));
        assert_eq!(settings.get("b"), Ok(&json!({"x": 1, "y": 2})));
        assert_eq!(settings.get("c"), Ok(&json!("fresh")));
    }

    #[test]
    fn test_merge_layer_from_rejects_non_mapping() {
        let mut settings = Settings::new();
        assert!(settings.merge_layer_from(&vec![1, 2, 3], false).is_err());
    }

    #[test]
    fn test_get_environ_matches_process_env() {
        assert_eq!(
            Settings::get_environ("PATH"),
            std::env::var("PATH").ok()
        );
        assert_eq!(Settings::get_environ("STRATA_TEST_SURELY_UNSET"), None);
    }

    #[test]
    fn test_loaded_file_bookkeeping() {
        let mut settings = Settings::new();
        assert!(settings.loaded_files().is_empty());

        settings.record_loaded_file("config/settings.json");
        settings.record_loaded_file("config/production.json");
        assert_eq!(settings.loaded_files().len(), 2);
        assert_eq!(settings.loaded_files()[0], PathBuf::from("config/settings.json"));
    }
}
