//! The state algebra (§4.1): canonical keying, satisfaction, mismatch counting,
//! and effect application over symbolic world states.

use crate::mask::MaskValue;
use crate::value::{Value, write_canonical};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A complete, concrete key → value mapping of the world.
///
/// States carry only concrete values — never [`MaskValue::Wildcard`] — and
/// are built functionally: every mutating method returns a new `State`.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let state = State::new().set("hungry", true).set("has_food", false);
/// assert_eq!(state.get("hungry"), Some(&Value::Bool(true)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct State(pub(crate) BTreeMap<String, Value>);

/// A mapping from key to [`MaskValue`], used for preconditions, goals, and
/// heuristic inputs. Stored sorted by key for the same reason `State` is:
/// determinism falls out of `BTreeMap`'s iteration order for free.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mask(pub(crate) BTreeMap<String, MaskValue>);

impl State {
    /// An empty state.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `key` to `value`, overwriting any previous value, and returns the
    /// updated state for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The value stored at `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// `true` if `key` has a value in this state.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys with a value in this state.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` iff this state has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the state's entries in ascending key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// `canonical_key` (§4.1): keys sorted ascending, each entry rendered as
    /// `key=value` (booleans as `1`/`0`, integers decimal, strings verbatim),
    /// entries joined by `;`. Total and injective over states sharing a key
    /// set — the basis for hashing and closed/open-set lookups.
    pub fn canonical_key(&self) -> String {
        let mut out = String::new();
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                out.push(';');
            }
            first = false;
            out.push_str(key);
            out.push('=');
            write_canonical(&mut out, value);
        }
        out
    }

    /// `satisfies(state, mask)` (§4.1): true iff every non-wildcard mask
    /// entry is present in `self` with an equal value.
    pub fn satisfies(&self, mask: &Mask) -> bool {
        mask.0.iter().all(|(key, expected)| match self.0.get(key) {
            Some(actual) => expected.matches(actual),
            None => expected.is_wildcard(),
        })
    }

    /// `mismatch(state, mask)` (§4.1): count of non-wildcard mask entries
    /// that are absent from `self` or differ from the required value. Keys
    /// in `self` but absent from `mask` are ignored.
    pub fn mismatch(&self, mask: &Mask) -> usize {
        mask.0
            .iter()
            .filter(|(_, expected)| !expected.is_wildcard())
            .filter(|(key, expected)| match self.0.get(*key) {
                Some(actual) => !expected.matches(actual),
                None => true,
            })
            .count()
    }
}

impl Mask {
    /// An empty mask (every key "don't care").
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `key` to the given mask value (concrete or wildcard), merging
    /// last-write-wins into any existing entry.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MaskValue>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Merges `other` into `self`, last-write-wins per key (used by
    /// `add_condition`'s repeated-merge contract in §4.2).
    pub fn merge(mut self, other: &Mask) -> Self {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// The mask entry for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&MaskValue> {
        self.0.get(key)
    }

    /// Iterates the mask's entries in ascending key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, MaskValue> {
        self.0.iter()
    }

    /// `true` iff the mask has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "State {{ ")?;
        let mut first = true;
        for (key, value) in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, " }}")
    }
}
