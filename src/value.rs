//! The scalar value domain that world states, effects, and masks are built from.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::hash::Hash;

/// A concrete scalar stored in a [`State`](crate::state::State) or an
/// [`Effect`](crate::effect::Effect).
///
/// `Value` never carries the wildcard sentinel — that lives one level up, in
/// [`MaskValue`](crate::mask::MaskValue), so a real `-1` integer state value can
/// never be confused with "don't care" the way the repository's historical
/// `-1`-encoded wildcard could.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let flag: Value = true.into();
/// let quantity: Value = 7.into();
/// let label: Value = "north".into();
///
/// assert_eq!(flag, Value::Bool(true));
/// assert_eq!(quantity, Value::Int(7));
/// assert_eq!(label, Value::Str("north".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// A boolean flag, e.g. `has_weapon`.
    Bool(bool),
    /// A 64-bit signed integer, e.g. `windows_remaining`.
    Int(i64),
    /// A short string, e.g. `location`.
    Str(String),
}

impl Value {
    /// Returns a short name for this value's variant, used in error messages
    /// and in [`InvalidEffectType`](crate::error::GoapError::InvalidEffectType).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "str",
        }
    }

    /// `true` for every variant except [`Value::Bool`]. Strict-mode catalogs
    /// reject effect values for which this returns `true` (§4.2, "boolean
    /// required in strict mode").
    pub fn is_non_boolean(&self) -> bool {
        !matches!(self, Value::Bool(_))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v}"),
        }
    }
}

/// Writes `value` in the `canonical_key` encoding from §4.1: booleans as
/// `1`/`0`, integers in decimal, strings verbatim.
pub(crate) fn write_canonical(buf: &mut String, value: &Value) {
    match value {
        Value::Bool(true) => buf.push('1'),
        Value::Bool(false) => buf.push('0'),
        Value::Int(v) => buf.push_str(&v.to_string()),
        Value::Str(v) => buf.push_str(v),
    }
}
