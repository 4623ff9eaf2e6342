//! [`MaskValue`]: the wildcard-capable counterpart of [`Value`](crate::value::Value).

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// An entry in a precondition, goal, or heuristic mask: either a concrete
/// value to match exactly, or [`MaskValue::Wildcard`] meaning "don't care".
///
/// Keeping this as its own type, rather than reusing `Value` with a sentinel
/// `-1`, means the type system — not a magic number — is what keeps a real
/// `-1` integer state value from ever being read as a wildcard.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let exact: MaskValue = true.into();
/// let dont_care = MaskValue::Wildcard;
///
/// assert!(exact.matches(&Value::Bool(true)));
/// assert!(dont_care.matches(&Value::Int(-1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaskValue {
    /// Must equal this concrete value.
    Concrete(Value),
    /// Matches any value, including an absent key in `satisfies`-style checks
    /// is still a mismatch — wildcard only relaxes the *value* comparison.
    Wildcard,
}

impl MaskValue {
    /// `true` iff this mask entry is satisfied by `value`: always true for
    /// `Wildcard`, otherwise exact equality (§4.1 `satisfies`).
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            MaskValue::Wildcard => true,
            MaskValue::Concrete(expected) => expected == value,
        }
    }

    /// `true` for [`MaskValue::Wildcard`].
    pub fn is_wildcard(&self) -> bool {
        matches!(self, MaskValue::Wildcard)
    }

    /// The concrete value this entry requires, if any.
    pub fn as_concrete(&self) -> Option<&Value> {
        match self {
            MaskValue::Concrete(v) => Some(v),
            MaskValue::Wildcard => None,
        }
    }
}

impl<T> From<T> for MaskValue
where
    T: Into<Value>,
{
    fn from(value: T) -> Self {
        MaskValue::Concrete(value.into())
    }
}

impl Display for MaskValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskValue::Wildcard => write!(f, "*"),
            MaskValue::Concrete(v) => write!(f, "{v}"),
        }
    }
}
