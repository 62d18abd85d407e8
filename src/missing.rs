//! Missing-value sentinel for settings lookups.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Marker for "no value present", distinct from an explicitly stored null.
///
/// Lookups return `Err(Missing)` when a key is absent, so `null` can be
/// stored and retrieved as a legitimate configured value. All instances
/// compare equal; equality against any [`Value`] (null included) is always
/// false. The marker is falsy under boolean coercion.
#[derive(Clone, Copy, Default, PartialEq, Eq, Error)]
#[error("<strata.missing>")]
pub struct Missing;

/// Shared sentinel instance.
pub const MISSING: Missing = Missing;

impl Missing {
    /// Boolean coercion contract: the marker is always falsy.
    pub const fn as_bool(self) -> bool {
        false
    }
}

impl From<Missing> for bool {
    fn from(_: Missing) -> Self {
        false
    }
}

impl PartialEq<Value> for Missing {
    fn eq(&self, _: &Value) -> bool {
        false
    }
}

impl PartialEq<Missing> for Value {
    fn eq(&self, _: &Missing) -> bool {
        false
    }
}

impl fmt::Debug for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<strata.missing>")
    }
}
