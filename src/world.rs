//! [`World`]: a container aggregating zero or more [`Planner`]s that share a
//! common action catalog (§5.1, §6(b) "companion `World` container").

use crate::error::{GoapError, PlanStatus};
use crate::plan::PlanResult;
use crate::planner::{Planner, PlannerOptions};

/// Owns a registration-ordered list of [`Planner`]s and runs each to
/// completion in turn, returning the cheapest plan found (§5.1).
///
/// Planners are still run single-threaded and synchronously, one after
/// another — concurrent planning across threads remains an explicit
/// non-goal (§1, §5) — but sharing one `World` lets a caller, e.g., plan for
/// several NPCs against the same catalog without re-validating it per call.
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let mut cheap = Planner::new(["a", "z"]);
/// cheap.set_start_state(State::new().set("a", true).set("z", false)).unwrap();
/// cheap.set_goal_state(Mask::new().with("z", true)).unwrap();
/// let mut cheap_catalog = ActionCatalog::new(Strictness::Relaxed);
/// cheap_catalog.add_condition("cheap_step", Mask::new().with("a", true)).unwrap();
/// cheap_catalog.add_effect("cheap_step", Effect::new().with("z", true)).unwrap();
/// cheap_catalog.set_cost("cheap_step", 1.0).unwrap();
/// cheap.set_action_list(cheap_catalog);
///
/// let mut world = World::new();
/// world.register(cheap);
///
/// let result = world.calculate_all(PlannerOptions::default()).unwrap();
/// assert_eq!(result.status, PlanStatus::Found);
/// ```
#[derive(Clone, Debug, Default)]
pub struct World {
    planners: Vec<Planner>,
}

impl World {
    /// A `World` with no registered planners.
    pub fn new() -> Self {
        Self {
            planners: Vec::new(),
        }
    }

    /// Registers `planner`, appending it to the end of the registration
    /// order used to break ties in `calculate_all`.
    pub fn register(&mut self, planner: Planner) -> &mut Self {
        self.planners.push(planner);
        self
    }

    /// Number of registered planners.
    pub fn len(&self) -> usize {
        self.planners.len()
    }

    /// `true` iff no planner has been registered.
    pub fn is_empty(&self) -> bool {
        self.planners.is_empty()
    }

    /// Runs `calculate` on every registered planner in turn and returns the
    /// minimum-cost result among those that found a plan, breaking ties by
    /// registration order (first registered wins, §5.1). If none found a
    /// plan, returns a `NoPlan` result rather than picking among
    /// budget-exhausted runs.
    pub fn calculate_all(&self, options: PlannerOptions) -> Result<PlanResult, GoapError> {
        let mut best: Option<PlanResult> = None;
        for planner in &self.planners {
            let result = planner.calculate(options)?;
            if !result.status.is_success() {
                continue;
            }
            match &best {
                Some(current_best) if current_best.total_cost() <= result.total_cost() => {}
                _ => best = Some(result),
            }
        }
        Ok(best.unwrap_or(PlanResult {
            plan: Vec::new(),
            status: PlanStatus::NoPlan,
            expansions: 0,
        }))
    }
}
