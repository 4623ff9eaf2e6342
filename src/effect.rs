//! [`Effect`]: the concrete, wildcard-free key → value assignment an
//! [`Action`](crate::action::Action) applies to a [`State`] on success.

use crate::state::State;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The outcome of executing an action: every key mentioned is overwritten in
/// the resulting state; every other key is left untouched (§3).
///
/// Carries no cost and no increment/decrement/delete mutation kinds — costs
/// live on [`Action`](crate::action::Action), and this effect model is
/// overwrite-only (numeric arithmetic in preconditions, and by extension in
/// effects, is an explicit non-goal).
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let effect = Effect::new().with("has_food", true).with("is_hungry", false);
/// let state = State::new().set("has_food", false).set("is_hungry", true);
/// let next = effect.apply_to(&state);
///
/// assert_eq!(next.get("has_food"), Some(&Value::Bool(true)));
/// assert_eq!(next.get("is_hungry"), Some(&Value::Bool(false)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect(pub(crate) BTreeMap<String, Value>);

impl Effect {
    /// An effect with no keys (applying it is always a no-op).
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Adds `key -> value` to this effect, merging last-write-wins into any
    /// existing entry for `key` (§4.2 `add_effect`'s merge contract).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Merges `other` into `self`, last-write-wins per key.
    pub fn merge(mut self, other: &Effect) -> Self {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    /// `apply(state, effect)` (§4.1): returns a new state with every key in
    /// this effect overwritten; all other keys are copied unchanged.
    pub fn apply_to(&self, state: &State) -> State {
        let mut next = state.0.clone();
        for (key, value) in &self.0 {
            next.insert(key.clone(), value.clone());
        }
        State(next)
    }

    /// Iterates the effect's entries in ascending key order.
    pub fn iter(&self) -> std::collections::btree_map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// `true` iff the effect has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value this effect sets `key` to, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}
