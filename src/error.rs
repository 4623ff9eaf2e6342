//! Structured errors (§7) and the runtime status that accompanies a [`Plan`](crate::planner::Plan).

use thiserror::Error;

/// Every validation failure the catalog builder and `calculate`'s up-front
/// validation pass can raise (§7). These are always fatal — surfaced
/// immediately as `Err`, never swallowed — and are distinct from the two
/// runtime search outcomes carried by [`PlanStatus`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GoapError {
    /// A state or goal used a key outside the planner's declared universe.
    #[error("unknown key {key:?} is not part of the planner's declared universe")]
    UnknownKey {
        /// The key that was not declared.
        key: String,
    },

    /// An action has a precondition but no effect at `calculate` time.
    #[error("action {action:?} has a precondition but no effect")]
    MissingEffect {
        /// The action missing an effect.
        action: String,
    },

    /// An action has a precondition but no cost at `calculate` time.
    #[error("action {action:?} has a precondition but no cost")]
    MissingCost {
        /// The action missing a cost.
        action: String,
    },

    /// A cost was non-numeric, non-finite, or not strictly positive.
    #[error("action {action:?} has an invalid cost: {detail}")]
    InvalidCost {
        /// The action the cost was attached to.
        action: String,
        /// Why the cost was rejected.
        detail: String,
    },

    /// An effect contained the wildcard sentinel, which is only legal in masks.
    ///
    /// Structurally unreachable in this crate: [`Effect`](crate::effect::Effect)
    /// is typed over [`Value`](crate::value::Value), which has no wildcard
    /// variant, so the type system supersedes the runtime check §4.2
    /// describes. Kept for parity with the spec's error surface.
    #[error("action {action:?} effect for key {key:?} cannot be a wildcard")]
    InvalidEffectValue {
        /// The action whose effect was rejected.
        action: String,
        /// The offending key.
        key: String,
    },

    /// An effect value's type fell outside the permitted scalar domain for
    /// the catalog's strictness mode.
    #[error("action {action:?} effect for key {key:?} has disallowed type {value_type:?}")]
    InvalidEffectType {
        /// The action whose effect was rejected.
        action: String,
        /// The offending key.
        key: String,
        /// The rejected value's type name (see [`Value::type_name`](crate::value::Value::type_name)).
        value_type: &'static str,
    },

    /// An effect or cost was attached to an action that has no precondition yet.
    #[error("action {action:?} has no precondition to attach an effect or cost to")]
    NoMatchingCondition {
        /// The action with no precondition.
        action: String,
    },
}

/// The terminal status of a `calculate()` call, reported alongside the
/// (possibly empty) plan rather than as an error (§7's "Propagation policy").
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PlanStatus {
    /// A plan satisfying the goal was found.
    Found,
    /// The start state already satisfied the goal; the plan is empty.
    AlreadySatisfied,
    /// The open set was exhausted without finding a goal-satisfying state.
    #[default]
    NoPlan,
    /// `max_expansions` or `time_budget_ms` was reached before a plan was found.
    BudgetExhausted,
}

impl PlanStatus {
    /// `true` for [`PlanStatus::Found`] and [`PlanStatus::AlreadySatisfied`].
    pub fn is_success(&self) -> bool {
        matches!(self, PlanStatus::Found | PlanStatus::AlreadySatisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_action_and_key() {
        let err = GoapError::UnknownKey {
            key: "mana".to_string(),
        };
        assert!(err.to_string().contains("mana"));

        let err = GoapError::InvalidEffectType {
            action: "cast".to_string(),
            key: "power".to_string(),
            value_type: "str",
        };
        let msg = err.to_string();
        assert!(msg.contains("cast"));
        assert!(msg.contains("power"));
        assert!(msg.contains("str"));
    }

    #[test]
    fn is_success_covers_found_and_already_satisfied_only() {
        assert!(PlanStatus::Found.is_success());
        assert!(PlanStatus::AlreadySatisfied.is_success());
        assert!(!PlanStatus::NoPlan.is_success());
        assert!(!PlanStatus::BudgetExhausted.is_success());
    }
}
