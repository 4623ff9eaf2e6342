//! [`Action`]: a named (precondition, effect, cost) triple (§3).

use crate::effect::Effect;
use crate::state::Mask;
use serde::{Deserialize, Serialize};

/// One entry in an [`ActionCatalog`](crate::catalog::ActionCatalog): a name,
/// the precondition mask that must hold before it can fire, the effect it
/// applies, and its strictly positive cost.
///
/// Unlike a `Vec<(String, Assert)>` precondition list paired with an
/// `Option<Effect>` built up imperatively, this type is an immutable
/// snapshot: [`ActionCatalog`](crate::catalog::ActionCatalog) owns the
/// builder mutability (§4.2) and hands the planner a `Vec<Action>` of these
/// once validation passes.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let cook = Action::new(
///     "cook",
///     Mask::new().with("hungry", true).with("has_food", false),
///     Effect::new().with("has_food", true),
///     1.0,
/// );
/// assert_eq!(cook.name(), "cook");
/// assert_eq!(cook.cost(), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    name: String,
    precondition: Mask,
    effect: Effect,
    cost: f64,
}

impl Action {
    /// Builds an action directly from its parts, bypassing the catalog's
    /// incremental builder. Useful for tests and for callers assembling
    /// already-validated actions.
    pub fn new(name: impl Into<String>, precondition: Mask, effect: Effect, cost: f64) -> Self {
        Self {
            name: name.into(),
            precondition,
            effect,
            cost,
        }
    }

    /// The action's unique name within its catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The precondition mask that must be satisfied before this action fires.
    pub fn precondition(&self) -> &Mask {
        &self.precondition
    }

    /// The effect applied to the state when this action fires.
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// The strictly positive cost of executing this action once.
    pub fn cost(&self) -> f64 {
        self.cost
    }
}
