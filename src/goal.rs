//! [`Goal`]: the target world condition a [`Planner`](crate::planner::Planner)
//! searches for, expressed as a wildcard-capable [`Mask`].

use crate::mask::MaskValue;
use crate::state::Mask;
use serde::{Deserialize, Serialize};

/// A goal mask: the values selected keys must take on (wildcards ignored).
///
/// `Goal` is a thin named wrapper over [`Mask`]: since masks carry
/// [`MaskValue`] directly rather than a separate comparison-operator type, a
/// goal is exactly a mask used in the "what do we want" position.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let goal = Goal::new().with("is_hungry", false);
/// let state = State::new().set("is_hungry", false).set("has_food", false);
/// assert!(state.satisfies(goal.mask()));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal(Mask);

impl Goal {
    /// An empty goal (vacuously satisfied by any state).
    pub fn new() -> Self {
        Self(Mask::new())
    }

    /// Requires `key` to equal `value` (or pass `MaskValue::Wildcard` to
    /// leave `key` unconstrained).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<MaskValue>) -> Self {
        self.0 = self.0.with(key, value);
        self
    }

    /// Builds a goal from a list of `(key, value)` requirements.
    pub fn from_requirements(requirements: &[(String, MaskValue)]) -> Self {
        let mut goal = Goal::new();
        for (key, value) in requirements {
            goal = goal.with(key.clone(), value.clone());
        }
        goal
    }

    /// The underlying mask, for use with [`State::satisfies`](crate::state::State::satisfies)
    /// and [`State::mismatch`](crate::state::State::mismatch).
    pub fn mask(&self) -> &Mask {
        &self.0
    }
}

impl From<Mask> for Goal {
    fn from(mask: Mask) -> Self {
        Self(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::State;

    #[test]
    fn goal_satisfied_checks_delegate_to_the_mask() {
        let goal = Goal::new().with("hungry", false);
        assert!(State::new().set("hungry", false).satisfies(goal.mask()));
        assert!(!State::new().set("hungry", true).satisfies(goal.mask()));
    }

    #[test]
    fn from_requirements_builds_the_same_goal_as_with() {
        let a = Goal::new().with("a", true).with("b", 1);
        let b = Goal::from_requirements(&[
            ("a".to_string(), true.into()),
            ("b".to_string(), 1.into()),
        ]);
        assert_eq!(a, b);
    }
}
