//! [`Plan`] and [`PlanStep`]: the ordered result of a successful `calculate`
//! call (§3 "Plan", §6(c) "Plan Output").

use serde::{Deserialize, Serialize};

use crate::error::PlanStatus;
use crate::state::State;

/// One step of a [`Plan`]: the action taken, the cumulative cost after
/// taking it, and the resulting state (§6(c)).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanStep {
    /// The name of the action executed to reach this step.
    pub action_name: String,
    /// Cumulative cost (`g`) after this step.
    pub g: f64,
    /// The world state after this step's action was applied.
    pub state: State,
}

/// An ordered sequence of [`PlanStep`]s transforming the start state into one
/// satisfying the goal (§3).
///
/// The empty plan is returned both when the start already satisfies the goal
/// and when no plan exists (§3); callers distinguish the two cases via
/// [`PlanResult::status`].
pub type Plan = Vec<PlanStep>;

/// The full outcome of a `calculate` call: the plan (possibly empty) plus the
/// status explaining why (§7 "Propagation policy").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    /// The ordered steps found, or empty per [`Plan`]'s contract.
    pub plan: Plan,
    /// Why the plan is what it is.
    #[serde(skip)]
    pub status: PlanStatus,
    /// Number of nodes popped from open and expanded during this call.
    pub expansions: usize,
}

impl PlanResult {
    /// Total cost of the plan — the last step's `g`, or `0.0` for an empty
    /// plan (§6(c): "Total plan cost equals the final step's g").
    pub fn total_cost(&self) -> f64 {
        self.plan.last().map(|step| step.g).unwrap_or(0.0)
    }
}
