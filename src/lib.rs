//! Strata: merge core for layered configuration.
//!
//! When configuration layers (defaults, per-environment files, overrides)
//! are combined, a deterministic rule must decide for every key whether the
//! higher-priority value wins outright, is extended, or is reconciled
//! recursively. This crate provides that rule ([`object_merge`]), the
//! sentinel that keeps "absent" distinguishable from a stored null
//! ([`Missing`]), and the order-preserving dedup used to keep merged lists
//! clean ([`deduplicate`]).

pub mod banner;
pub mod compat;
pub mod dedup;
pub mod logging;
pub mod merge;
pub mod missing;
pub mod settings;

pub use banner::BANNER;
pub use compat::{RENAMED_OPTIONS, apply_renamed_options, warn_deprecations};
pub use dedup::deduplicate;
pub use logging::init_logging;
pub use merge::object_merge;
pub use missing::{MISSING, Missing};
pub use settings::Settings;
