//! The A* planner (§4.4): the public `Planner` type, its builder lifecycle
//! (§6(b)), and the search loop itself.

pub(crate) mod node;
pub(crate) mod open_set;

use std::collections::{BTreeSet, HashMap};
use std::time::{Duration, Instant};

use crate::catalog::ActionCatalog;
use crate::error::{GoapError, PlanStatus};
use crate::heuristic::{HeuristicContext, HeuristicKind};
use crate::plan::{Plan, PlanResult, PlanStep};
use crate::state::{Mask, State};

use node::{NodeArena, NodeId, SearchNode, NO_PARENT};
use open_set::{OpenEntry, OpenSet};

/// Budgets on one `calculate()` call (§4.4, §5 "Cancellation/timeout
/// semantics"). `None` means unbounded.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlannerOptions {
    /// Maximum number of nodes to pop-and-expand before giving up.
    pub max_expansions: Option<usize>,
    /// Wall-clock budget in milliseconds before giving up.
    pub time_budget_ms: Option<f64>,
}

/// Forward A* search over symbolic [`State`]s (§4.4).
///
/// Lifecycle (§6(b)): construct with the declared universe of state keys,
/// then `set_start_state`, `set_goal_state`, `set_action_list`, and
/// `set_heuristic` in any order, then `calculate`. Each field setter rejects
/// a key outside the declared universe with [`GoapError::UnknownKey`].
///
/// # Examples
/// ```
/// use goap_core::prelude::*;
///
/// let mut planner = Planner::new(["hungry", "has_food"]);
/// planner.set_start_state(State::new().set("hungry", true).set("has_food", false)).unwrap();
/// planner.set_goal_state(Mask::new().with("hungry", false)).unwrap();
///
/// let mut catalog = ActionCatalog::new(Strictness::Relaxed);
/// catalog.add_condition("cook", Mask::new().with("hungry", true).with("has_food", false)).unwrap();
/// catalog.add_effect("cook", Effect::new().with("has_food", true)).unwrap();
/// catalog.set_cost("cook", 1.0).unwrap();
/// catalog.add_condition("eat", Mask::new().with("hungry", true).with("has_food", true)).unwrap();
/// catalog.add_effect("eat", Effect::new().with("hungry", false).with("has_food", false)).unwrap();
/// catalog.set_cost("eat", 1.0).unwrap();
/// planner.set_action_list(catalog);
///
/// let result = planner.calculate(PlannerOptions::default()).unwrap();
/// assert_eq!(result.status, PlanStatus::Found);
/// assert_eq!(result.total_cost(), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct Planner {
    universe: BTreeSet<String>,
    start: State,
    goal: Mask,
    catalog: ActionCatalog,
    heuristic: HeuristicKind,
}

impl Planner {
    /// Declares the universe of state keys this planner will ever see.
    pub fn new<I, S>(universe: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            universe: universe.into_iter().map(Into::into).collect(),
            start: State::new(),
            goal: Mask::new(),
            catalog: ActionCatalog::new(crate::catalog::Strictness::Relaxed),
            heuristic: HeuristicKind::default(),
        }
    }

    /// Sets the initial world state. Rejects any key outside the declared
    /// universe (§6(b)).
    pub fn set_start_state(&mut self, state: State) -> Result<&mut Self, GoapError> {
        self.reject_unknown_keys(state.iter().map(|(k, _)| k.as_str()))?;
        self.start = state;
        Ok(self)
    }

    /// Sets the goal mask. Rejects any key outside the declared universe
    /// (§6(b)).
    pub fn set_goal_state(&mut self, goal: Mask) -> Result<&mut Self, GoapError> {
        self.reject_unknown_keys(goal.iter().map(|(k, _)| k.as_str()))?;
        self.goal = goal;
        Ok(self)
    }

    /// Installs the action catalog this planner searches over.
    pub fn set_action_list(&mut self, catalog: ActionCatalog) -> &mut Self {
        self.catalog = catalog;
        self
    }

    /// Selects the heuristic provider (§4.3).
    pub fn set_heuristic(&mut self, heuristic: HeuristicKind) -> &mut Self {
        self.heuristic = heuristic;
        self
    }

    fn reject_unknown_keys<'a>(
        &self,
        keys: impl Iterator<Item = &'a str>,
    ) -> Result<(), GoapError> {
        for key in keys {
            if !self.universe.contains(key) {
                return Err(GoapError::UnknownKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Runs A* search (§4.4) to completion or until a budget in `options` is
    /// reached.
    pub fn calculate(&self, options: PlannerOptions) -> Result<PlanResult, GoapError> {
        let actions = self.catalog.validate()?;

        tracing::debug!(
            heuristic = ?self.heuristic,
            max_expansions = ?options.max_expansions,
            time_budget_ms = ?options.time_budget_ms,
            "calculate: starting search"
        );

        if self.start.satisfies(&self.goal) {
            tracing::info!("calculate: start state already satisfies the goal");
            return Ok(PlanResult {
                plan: Vec::new(),
                status: PlanStatus::AlreadySatisfied,
                expansions: 0,
            });
        }

        let context = HeuristicContext::build(
            &self.start,
            &self.goal,
            &actions,
            self.heuristic.needs_rpg(),
        );

        let mut arena = NodeArena::new();
        let start_key = self.start.canonical_key();
        let start_h = self.heuristic.estimate(&self.start, &self.goal, &context);
        let start_id = arena.push(SearchNode {
            state: self.start.clone(),
            g: 0.0,
            h: start_h,
            parent: NO_PARENT,
            action_name: "start".to_string(),
        });

        let mut open = OpenSet::new();
        open.push(OpenEntry {
            node_id: start_id,
            canonical_key: start_key,
            f: start_h,
            g: 0.0,
            action_name: "start".to_string(),
        });
        let mut closed: HashMap<String, f64> = HashMap::new();

        let deadline = options
            .time_budget_ms
            .map(|ms| Instant::now() + Duration::from_secs_f64((ms.max(0.0)) / 1000.0));
        let mut expansions: usize = 0;

        loop {
            if open.is_empty() {
                tracing::warn!(expansions, "calculate: open set exhausted, no plan");
                return Ok(PlanResult {
                    plan: Vec::new(),
                    status: PlanStatus::NoPlan,
                    expansions,
                });
            }
            if let Some(max) = options.max_expansions {
                if expansions >= max {
                    tracing::warn!(expansions, "calculate: max_expansions reached");
                    return Ok(PlanResult {
                        plan: Vec::new(),
                        status: PlanStatus::BudgetExhausted,
                        expansions,
                    });
                }
            }
            if let Some(deadline) = deadline {
                if Instant::now() >= deadline {
                    tracing::warn!(expansions, "calculate: time_budget_ms reached");
                    return Ok(PlanResult {
                        plan: Vec::new(),
                        status: PlanStatus::BudgetExhausted,
                        expansions,
                    });
                }
            }

            let entry = open.pop_min().expect("checked open.is_empty() above");
            expansions += 1;
            let node = arena.get(entry.node_id).clone();

            tracing::trace!(
                node_id = entry.node_id,
                f = entry.f,
                g = entry.g,
                action = %entry.action_name,
                "calculate: expanding node"
            );

            if node.state.satisfies(&self.goal) {
                let plan = reconstruct(&arena, entry.node_id);
                tracing::info!(
                    expansions,
                    steps = plan.len(),
                    cost = entry.g,
                    "calculate: plan found"
                );
                return Ok(PlanResult {
                    plan,
                    status: PlanStatus::Found,
                    expansions,
                });
            }

            closed.insert(entry.canonical_key.clone(), entry.g);

            for action in &actions {
                if !node.state.satisfies(action.precondition()) {
                    continue;
                }
                let succ = action.effect().apply_to(&node.state);
                if succ == node.state {
                    continue;
                }
                let succ_key = succ.canonical_key();
                let tentative_g = entry.g + action.cost();

                if let Some(&closed_g) = closed.get(&succ_key) {
                    if closed_g <= tentative_g {
                        continue;
                    }
                }
                if let Some(open_g) = open.g_of(&succ_key) {
                    if open_g <= tentative_g {
                        continue;
                    }
                }

                let h = self.heuristic.estimate(&succ, &self.goal, &context);
                let new_id = arena.push(SearchNode {
                    state: succ,
                    g: tentative_g,
                    h,
                    parent: entry.node_id,
                    action_name: action.name().to_string(),
                });
                let f = tentative_g + h;

                if open.g_of(&succ_key).is_some() {
                    open.decrease(&succ_key, new_id, f, tentative_g, action.name().to_string());
                } else {
                    closed.remove(&succ_key);
                    open.push(OpenEntry {
                        node_id: new_id,
                        canonical_key: succ_key,
                        f,
                        g: tentative_g,
                        action_name: action.name().to_string(),
                    });
                }
            }
        }
    }
}

/// Reconstructs the plan by walking parent pointers from `goal_id` back to
/// the start node and reversing (§4.6). The start node itself is excluded.
fn reconstruct(arena: &NodeArena, goal_id: NodeId) -> Plan {
    arena
        .path_to(goal_id)
        .into_iter()
        .skip(1)
        .map(|id| {
            let node = arena.get(id);
            PlanStep {
                action_name: node.action_name.clone(),
                g: node.g,
                state: node.state.clone(),
            }
        })
        .collect()
}
