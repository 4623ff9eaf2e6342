//! Heuristic providers (§4.3): pluggable estimators of remaining cost,
//! selected by name at planner configuration time.

use crate::action::Action;
use crate::mask::MaskValue;
use crate::rpg::RelaxedPlanningGraph;
use crate::state::{Mask, State};

/// Context a heuristic needs beyond `(state, goal)`, precomputed once per
/// `calculate` call (§4.4 step 3) rather than recomputed per expansion.
#[derive(Clone, Debug)]
pub(crate) struct HeuristicContext {
    /// `max_fixes` for `domain_aware`: the largest number of goal-relevant
    /// keys any single action's effect can satisfy at once.
    max_fixes: usize,
    /// The catalog's minimum action cost, used by both heuristics' optional
    /// cost-scaling modes.
    min_cost: f64,
    /// Present only when the selected heuristic is `rpg_add`.
    rpg: Option<RelaxedPlanningGraph>,
}

impl HeuristicContext {
    /// Precomputes `max_fixes` and `min_cost` from `actions` against `goal`,
    /// and builds the RPG from `start` and `actions` only if `needs_rpg`
    /// (heuristic is `rpg_add`) — RPG construction is the most expensive
    /// part of setup, so heuristics that don't need it skip it entirely.
    pub(crate) fn build(start: &State, goal: &Mask, actions: &[Action], needs_rpg: bool) -> Self {
        let min_cost = actions
            .iter()
            .map(Action::cost)
            .fold(f64::INFINITY, f64::min);
        let min_cost = if min_cost.is_finite() { min_cost } else { 1.0 };

        let max_fixes = actions
            .iter()
            .map(|action| {
                goal.iter()
                    .filter(|(key, expected)| match expected.as_concrete() {
                        Some(expected_value) => action.effect().get(key) == Some(expected_value),
                        None => false,
                    })
                    .count()
            })
            .max()
            .unwrap_or(0);

        let rpg = needs_rpg.then(|| RelaxedPlanningGraph::build(start, actions));

        Self {
            max_fixes,
            min_cost,
            rpg,
        }
    }
}

/// The selected heuristic provider and its configuration (§4.3, §4.3.1).
///
/// Each variant implements the same `estimate` signature — `(state, goal,
/// context) -> f64` — so the planner dispatches on `self` once per node
/// without a trait object.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum HeuristicKind {
    /// Always 0 — makes A* equivalent to Dijkstra's algorithm; admissible
    /// and consistent by construction.
    #[default]
    Zero,
    /// Raw goal-mismatch count. Cheap but may be inadmissible when one
    /// action fixes several goal keys, or costs vary widely.
    Mismatch,
    /// `ceil(mismatch / max(1, max_fixes))`, optionally scaled by the
    /// catalog's minimum cost to stay admissible under varied costs (§4.3.1).
    DomainAware {
        /// When `true`, multiply the quotient by the catalog's minimum
        /// action cost.
        scale_by_min_cost: bool,
    },
    /// Sum of RPG first-appearance layer indices for each unsatisfied goal
    /// key, optionally weighted by a per-layer minimum cost (§4.3.1). The
    /// spec's prescribed default (§9 "RESOLVED") is the unweighted sum.
    RpgAdd {
        /// When `true`, each layer index is scaled by the catalog's minimum
        /// action cost before summing.
        weight_by_min_cost: bool,
    },
}

impl HeuristicKind {
    /// `true` iff this heuristic requires an RPG to be built (§4.4 step 3).
    pub(crate) fn needs_rpg(&self) -> bool {
        matches!(self, HeuristicKind::RpgAdd { .. })
    }

    /// Computes `h(state)` for this heuristic against `goal`, using the
    /// precomputed `context`.
    pub(crate) fn estimate(&self, state: &State, goal: &Mask, context: &HeuristicContext) -> f64 {
        match self {
            HeuristicKind::Zero => 0.0,
            HeuristicKind::Mismatch => state.mismatch(goal) as f64,
            HeuristicKind::DomainAware { scale_by_min_cost } => {
                let mismatch = state.mismatch(goal);
                let divisor = context.max_fixes.max(1);
                let quotient = (mismatch as f64 / divisor as f64).ceil();
                if *scale_by_min_cost {
                    quotient * context.min_cost
                } else {
                    quotient
                }
            }
            HeuristicKind::RpgAdd { weight_by_min_cost } => {
                let rpg = context
                    .rpg
                    .as_ref()
                    .expect("RpgAdd heuristic always builds its RPG context");
                let mut total = 0.0;
                for (key, expected) in goal.iter() {
                    let MaskValue::Concrete(expected_value) = expected else {
                        continue;
                    };
                    if state.get(key) == Some(expected_value) {
                        continue;
                    }
                    match rpg.first_level(key, expected_value) {
                        Some(level) => {
                            total += if *weight_by_min_cost {
                                level as f64 * context.min_cost
                            } else {
                                level as f64
                            };
                        }
                        None => return f64::INFINITY,
                    }
                }
                total
            }
        }
    }
}
