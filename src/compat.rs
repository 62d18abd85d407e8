//! Backward-compatible renaming of settings options.
//!
//! Option names have been renamed across releases; loaders consult this
//! table before any configuration data reaches the merge engine, so callers
//! using either spelling keep working.

use serde_json::{Map, Value};
use tracing::warn;

/// Obsolete option names mapped to their current equivalents.
///
/// Several old names can map to one current name;
/// [`apply_renamed_options`] keeps all aliases of a renamed option in sync.
pub const RENAMED_OPTIONS: &[(&str, &str)] = &[
    ("STRATA_NAMESPACE", "STRATA_ENV"),
    ("NAMESPACE_FOR_STRATA", "STRATA_ENV"),
    ("STRATA_SETTINGS_MODULE", "STRATA_SETTINGS_FILE"),
    ("SETTINGS_MODULE_FOR_STRATA", "STRATA_SETTINGS_FILE"),
    ("PROJECT_ROOT", "STRATA_ROOT_PATH"),
    ("PROJECT_ROOT_FOR_STRATA", "STRATA_ROOT_PATH"),
    ("STRATA_SILENT_ERRORS", "STRATA_SILENT"),
    ("STRATA_ALWAYS_FRESH", "STRATA_FRESH_KEYS"),
];

/// Rewrite obsolete option names in `options` to their current names.
///
/// The value stored under an old name is copied to the new name, then to
/// every other old alias of that name, so readers of any spelling observe
/// the same value. Deprecation warnings are emitted for each old name found.
pub fn apply_renamed_options(options: &mut Map<String, Value>) {
    warn_deprecations(options);
    for (old, new) in RENAMED_OPTIONS {
        let Some(value) = options.get(*old).cloned() else {
            continue;
        };
        options.insert((*new).to_string(), value.clone());
        // Keep cross references in sync.
        for (alias, target) in RENAMED_OPTIONS {
            if target == new {
                options.insert((*alias).to_string(), value.clone());
            }
        }
    }
}

/// Warn about deprecated option names present in `options`.
pub fn warn_deprecations(options: &Map<String, Value>) {
    if options
        .get("STRATA_MERGE_ENABLED")
        .is_some_and(|v| v.as_bool().unwrap_or(false))
    {
        warn!(
            "STRATA_MERGE_ENABLED is deprecated; request merging per layer \
             with the merge/unique flags instead"
        );
    }
    for (old, new) in RENAMED_OPTIONS {
        if options.contains_key(*old) {
            warn!(option = *old, replacement = *new, "deprecated option name");
        }
    }
}
