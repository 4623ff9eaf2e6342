//! The Relaxed Planning Graph (§4.5): a monotone layered reachability
//! structure over `(fact_layer, action_layer)` pairs, built once from a start
//! state and an action catalog by ignoring effect "deletions".

use std::collections::{BTreeMap, HashMap};

use crate::action::Action;
use crate::mask::MaskValue;
use crate::state::State;
use crate::value::Value;

/// Hard cap on fact layers (§4.5, "a hard cap (e.g., 50 layers) is a
/// guardrail, not a correctness requirement").
const MAX_LAYERS: usize = 50;

/// A relaxed (delete-free) reachability graph built from a start state and a
/// catalog of actions, used by the `rpg_add` heuristic and exposed as a
/// standalone diagnostic (§4.5: "available to external diagnostics").
///
/// Each key's values accumulate monotonically across layers: once a key
/// takes a value at layer `k`, later layers either keep it (no action
/// touches the key again) or overwrite it with a new value — but the first
/// layer at which each distinct value appeared is recorded forever, which is
/// exactly what `first_level` answers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelaxedPlanningGraph {
    /// `first_level[key][value] = layer index` of the first layer at which
    /// `key` took `value`.
    first_level: BTreeMap<String, HashMap<Value, usize>>,
    /// Number of fact layers actually built, including layer 0.
    layer_count: usize,
}

impl RelaxedPlanningGraph {
    /// Builds the graph from `start` and `actions` (§4.5).
    ///
    /// Layer 0 is `start`. Each subsequent layer's applicable-action set is
    /// every action whose precondition the previous fact layer satisfies;
    /// the new fact layer merges the previous one with every applicable
    /// action's effect, last-writer-wins among applicable actions sorted by
    /// name (determinism, mirroring the planner's own sorted-action
    /// enumeration in §4.4 step 5). Construction halts when no new action
    /// becomes applicable, the fact layer stops changing, or `MAX_LAYERS` is
    /// reached.
    pub fn build(start: &State, actions: &[Action]) -> Self {
        let mut sorted_actions: Vec<&Action> = actions.iter().collect();
        sorted_actions.sort_by_key(|a| a.name());

        let mut first_level: BTreeMap<String, HashMap<Value, usize>> = BTreeMap::new();
        record_layer(&mut first_level, start, 0);

        let mut current = start.clone();
        let mut layer_count = 1;

        for level in 1..=MAX_LAYERS {
            let applicable: Vec<&&Action> = sorted_actions
                .iter()
                .filter(|action| current.satisfies(action.precondition()))
                .collect();
            if applicable.is_empty() {
                break;
            }

            let mut next = current.clone();
            for action in &applicable {
                next = action.effect().apply_to(&next);
            }

            if next == current {
                break;
            }

            record_layer(&mut first_level, &next, level);
            current = next;
            layer_count = level + 1;
        }

        Self {
            first_level,
            layer_count,
        }
    }

    /// `first_level((k, v))` (§4.5 Query): the smallest layer index at which
    /// `key` took `value`, or `None` ("+∞") if it never did.
    pub fn first_level(&self, key: &str, value: &Value) -> Option<usize> {
        self.first_level.get(key)?.get(value).copied()
    }

    /// Looks up `first_level` for a mask entry, treating `Wildcard` as
    /// trivially satisfied at layer 0 (no key constraint to locate).
    pub fn first_level_for_mask_value(&self, key: &str, value: &MaskValue) -> Option<usize> {
        match value {
            MaskValue::Wildcard => Some(0),
            MaskValue::Concrete(v) => self.first_level(key, v),
        }
    }

    /// Number of fact layers built, including layer 0.
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }
}

fn record_layer(
    first_level: &mut BTreeMap<String, HashMap<Value, usize>>,
    state: &State,
    level: usize,
) {
    for (key, value) in state.iter() {
        first_level
            .entry(key.clone())
            .or_default()
            .entry(value.clone())
            .or_insert(level);
    }
}
