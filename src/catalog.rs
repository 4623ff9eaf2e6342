//! [`ActionCatalog`]: the validated collection of named actions (§4.2).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::effect::Effect;
use crate::error::GoapError;
use crate::state::Mask;

/// Whether a catalog's effects may only assign booleans, or any permitted
/// scalar (`bool | i64 | String`). Strict mode mirrors the "boolean required
/// in strict mode" clause of §4.2's `add_effect` contract.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strictness {
    /// Effect values must be booleans.
    Strict,
    /// Effect values may be any permitted scalar type.
    #[default]
    Relaxed,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct ActionEntry {
    precondition: Mask,
    effect: Option<Effect>,
    cost: Option<f64>,
}

/// Accumulates and validates [`Action`]s by name (§4.2, "Catalog Builder
/// Interface" in §6(a)).
///
/// Building is last-write-wins per key, per action, matching §4.2's
/// `add_condition`/`add_effect`/`set_cost` contracts. Order across action
/// names never matters; order of calls within one action name does, in that
/// each call's keys overwrite any earlier value at the same key.
///
/// The catalog is read-only once handed to a
/// [`Planner`](crate::planner::Planner) — `calculate` deep-copies the
/// validated action list on entry (§5, "Shared-resource policy") so the
/// caller's own table is never mutated by planning.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let mut catalog = ActionCatalog::new(Strictness::Relaxed);
/// catalog
///     .add_condition("cook", Mask::new().with("hungry", true).with("has_food", false))
///     .unwrap();
/// catalog.add_effect("cook", Effect::new().with("has_food", true)).unwrap();
/// catalog.set_cost("cook", 1.0).unwrap();
///
/// let actions = catalog.validate().unwrap();
/// assert_eq!(actions.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ActionCatalog {
    strictness: Strictness,
    entries: BTreeMap<String, ActionEntry>,
}

impl ActionCatalog {
    /// An empty catalog with the given effect-value strictness.
    pub fn new(strictness: Strictness) -> Self {
        Self {
            strictness,
            entries: BTreeMap::new(),
        }
    }

    /// `add_condition(name, mask)` (§4.2): merges `mask` into the named
    /// action's precondition, creating the entry if this is its first
    /// mention. Never fails.
    pub fn add_condition(
        &mut self,
        name: impl Into<String>,
        mask: Mask,
    ) -> Result<&mut Self, GoapError> {
        let entry = self.entries.entry(name.into()).or_default();
        entry.precondition = std::mem::take(&mut entry.precondition).merge(&mask);
        Ok(self)
    }

    /// `add_effect(name, effect)` (§4.2): merges `effect` into the named
    /// action's effect. Fails if the action has no precondition yet, if any
    /// value is the wildcard sentinel (effects are always concrete, §3), or
    /// if a value's type is outside the catalog's permitted scalar domain.
    pub fn add_effect(
        &mut self,
        name: impl Into<String>,
        effect: Effect,
    ) -> Result<&mut Self, GoapError> {
        let name = name.into();
        if !self.entries.contains_key(&name) {
            return Err(GoapError::NoMatchingCondition { action: name });
        }
        for (key, value) in effect.iter() {
            if self.strictness == Strictness::Strict && value.is_non_boolean() {
                return Err(GoapError::InvalidEffectType {
                    action: name.clone(),
                    key: key.clone(),
                    value_type: value.type_name(),
                });
            }
        }
        let entry = self.entries.get_mut(&name).expect("checked above");
        let merged = entry
            .effect
            .clone()
            .unwrap_or_else(Effect::new)
            .merge(&effect);
        entry.effect = Some(merged);
        Ok(self)
    }

    /// `set_cost(name, cost)` (§4.2): overwrites the named action's cost.
    /// Fails if the action has no precondition, or if `cost` is not a finite,
    /// strictly positive number.
    pub fn set_cost(&mut self, name: impl Into<String>, cost: f64) -> Result<&mut Self, GoapError> {
        let name = name.into();
        if !self.entries.contains_key(&name) {
            return Err(GoapError::NoMatchingCondition { action: name });
        }
        if !cost.is_finite() || cost <= 0.0 {
            return Err(GoapError::InvalidCost {
                action: name,
                detail: format!("cost must be a finite positive number, got {cost}"),
            });
        }
        self.entries.get_mut(&name).expect("checked above").cost = Some(cost);
        Ok(self)
    }

    /// Action names currently registered, in ascending order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of distinct action names registered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` iff no action has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads back the precondition masks keyed by action name (§6(a)).
    pub fn conditions(&self) -> BTreeMap<String, Mask> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.precondition.clone()))
            .collect()
    }

    /// Reads back the effects keyed by action name, for actions that have one
    /// (§6(a)).
    pub fn effects(&self) -> BTreeMap<String, Effect> {
        self.entries
            .iter()
            .filter_map(|(name, entry)| entry.effect.clone().map(|effect| (name.clone(), effect)))
            .collect()
    }

    /// Reads back the costs keyed by action name, for actions that have one
    /// (§6(a)).
    pub fn costs(&self) -> BTreeMap<String, f64> {
        self.entries
            .iter()
            .filter_map(|(name, entry)| entry.cost.map(|cost| (name.clone(), cost)))
            .collect()
    }

    /// Full validation at planner-invocation time (§4.2): every action with a
    /// precondition must carry an effect and a cost, and every cost must be a
    /// finite positive number. Returns the validated `Action`s sorted by
    /// name — the same order the planner's §4.4 step 5 requires for
    /// deterministic neighbor enumeration.
    pub fn validate(&self) -> Result<Vec<Action>, GoapError> {
        let mut actions = Vec::with_capacity(self.entries.len());
        for (name, entry) in &self.entries {
            let effect = entry.effect.clone().ok_or_else(|| GoapError::MissingEffect {
                action: name.clone(),
            })?;
            let cost = entry.cost.ok_or_else(|| GoapError::MissingCost {
                action: name.clone(),
            })?;
            if !cost.is_finite() || cost <= 0.0 {
                return Err(GoapError::InvalidCost {
                    action: name.clone(),
                    detail: format!("cost must be a finite positive number, got {cost}"),
                });
            }
            if self.strictness == Strictness::Strict {
                for (key, value) in effect.iter() {
                    if value.is_non_boolean() {
                        return Err(GoapError::InvalidEffectType {
                            action: name.clone(),
                            key: key.clone(),
                            value_type: value.type_name(),
                        });
                    }
                }
            }
            actions.push(Action::new(name.clone(), entry.precondition.clone(), effect, cost));
        }
        actions.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(actions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_effect_without_condition_fails() {
        let mut catalog = ActionCatalog::new(Strictness::Relaxed);
        let err = catalog
            .add_effect("ghost", Effect::new().with("x", true))
            .unwrap_err();
        assert_eq!(
            err,
            GoapError::NoMatchingCondition {
                action: "ghost".to_string()
            }
        );
    }

    #[test]
    fn set_cost_rejects_non_positive() {
        let mut catalog = ActionCatalog::new(Strictness::Relaxed);
        catalog.add_condition("a", Mask::new().with("x", true)).unwrap();
        assert!(catalog.set_cost("a", 0.0).is_err());
        assert!(catalog.set_cost("a", -1.0).is_err());
        assert!(catalog.set_cost("a", f64::NAN).is_err());
        assert!(catalog.set_cost("a", f64::INFINITY).is_err());
        assert!(catalog.set_cost("a", 1.0).is_ok());
    }

    #[test]
    fn strict_mode_rejects_non_boolean_effects() {
        let mut catalog = ActionCatalog::new(Strictness::Strict);
        catalog.add_condition("a", Mask::new().with("x", true)).unwrap();
        let err = catalog
            .add_effect("a", Effect::new().with("count", 1))
            .unwrap_err();
        assert!(matches!(err, GoapError::InvalidEffectType { .. }));
    }

    #[test]
    fn validate_requires_effect_and_cost() {
        let mut catalog = ActionCatalog::new(Strictness::Relaxed);
        catalog.add_condition("a", Mask::new().with("x", true)).unwrap();
        assert_eq!(
            catalog.validate().unwrap_err(),
            GoapError::MissingEffect {
                action: "a".to_string()
            }
        );
        catalog.add_effect("a", Effect::new().with("y", true)).unwrap();
        assert_eq!(
            catalog.validate().unwrap_err(),
            GoapError::MissingCost {
                action: "a".to_string()
            }
        );
        catalog.set_cost("a", 1.0).unwrap();
        let actions = catalog.validate().unwrap();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].name(), "a");
    }

    #[test]
    fn validate_returns_actions_sorted_by_name() {
        let mut catalog = ActionCatalog::new(Strictness::Relaxed);
        for name in ["zeta", "alpha", "mid"] {
            catalog.add_condition(name, Mask::new().with("x", true)).unwrap();
            catalog.add_effect(name, Effect::new().with("y", true)).unwrap();
            catalog.set_cost(name, 1.0).unwrap();
        }
        let actions = catalog.validate().unwrap();
        let names: Vec<&str> = actions.iter().map(Action::name).collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn merging_conditions_is_last_write_wins_per_key() {
        let mut catalog = ActionCatalog::new(Strictness::Relaxed);
        catalog.add_condition("a", Mask::new().with("x", true)).unwrap();
        catalog.add_condition("a", Mask::new().with("x", false).with("y", true)).unwrap();
        let conditions = catalog.conditions();
        let mask = &conditions["a"];
        assert_eq!(mask.get("x"), Some(&false.into()));
        assert_eq!(mask.get("y"), Some(&true.into()));
    }
}
