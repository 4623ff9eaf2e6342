//! End-to-end scenarios exercising `goap_core` purely through its public API.

use goap_core::prelude::*;

fn names(result: &PlanResult) -> Vec<&str> {
    result.plan.iter().map(|step| step.action_name.as_str()).collect()
}

#[test]
fn cook_and_eat() {
    let mut planner = Planner::new(["hungry", "has_food"]);
    planner
        .set_start_state(State::new().set("hungry", true).set("has_food", false))
        .unwrap();
    planner.set_goal_state(Mask::new().with("hungry", false)).unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    catalog
        .add_condition("cook", Mask::new().with("hungry", true).with("has_food", false))
        .unwrap();
    catalog.add_effect("cook", Effect::new().with("has_food", true)).unwrap();
    catalog.set_cost("cook", 1.0).unwrap();
    catalog
        .add_condition("eat", Mask::new().with("hungry", true).with("has_food", true))
        .unwrap();
    catalog
        .add_effect("eat", Effect::new().with("hungry", false).with("has_food", false))
        .unwrap();
    catalog.set_cost("eat", 1.0).unwrap();
    planner.set_action_list(catalog);

    let result = planner.calculate(PlannerOptions::default()).unwrap();
    assert_eq!(result.status, PlanStatus::Found);
    assert_eq!(names(&result), vec!["cook", "eat"]);
    assert_eq!(result.total_cost(), 2.0);
}

#[test]
fn cheapest_of_competing_paths() {
    let mut planner = Planner::new(["a", "b", "c", "z"]);
    planner.set_start_state(State::new().set("a", true)).unwrap();
    planner.set_goal_state(Mask::new().with("z", true)).unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    catalog.add_condition("step1", Mask::new().with("a", true)).unwrap();
    catalog.add_effect("step1", Effect::new().with("b", true)).unwrap();
    catalog.set_cost("step1", 1.0).unwrap();
    catalog.add_condition("step2", Mask::new().with("b", true)).unwrap();
    catalog.add_effect("step2", Effect::new().with("z", true)).unwrap();
    catalog.set_cost("step2", 1.0).unwrap();
    catalog.add_condition("heavy", Mask::new().with("c", true)).unwrap();
    catalog.add_effect("heavy", Effect::new().with("z", true)).unwrap();
    catalog.set_cost("heavy", 100.0).unwrap();
    planner.set_action_list(catalog);

    let result = planner.calculate(PlannerOptions::default()).unwrap();
    assert_eq!(result.status, PlanStatus::Found);
    assert_eq!(names(&result), vec!["step1", "step2"]);
    assert_eq!(result.total_cost(), 2.0);
}

#[test]
fn infeasible_goal() {
    let mut planner = Planner::new(["a", "b", "c", "z"]);
    planner.set_start_state(State::new().set("a", true)).unwrap();
    planner.set_goal_state(Mask::new().with("z", true)).unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    catalog.add_condition("x", Mask::new().with("a", true)).unwrap();
    catalog.add_effect("x", Effect::new().with("a", true)).unwrap();
    catalog.set_cost("x", 1.0).unwrap();
    planner.set_action_list(catalog);

    let result = planner.calculate(PlannerOptions::default()).unwrap();
    assert_eq!(result.status, PlanStatus::NoPlan);
    assert!(result.plan.is_empty());
}

#[test]
fn budget_exhaustion() {
    let keys = ["a", "b", "c", "d", "z"];
    let mut planner = Planner::new(keys);
    let mut start = State::new().set("z", false);
    for key in ["a", "b", "c", "d"] {
        start = start.set(key, false);
    }
    planner.set_start_state(start).unwrap();
    planner.set_goal_state(Mask::new().with("z", true)).unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    for key in ["a", "b", "c", "d"] {
        let on = format!("{key}_on");
        catalog.add_condition(&on, Mask::new().with(key, false)).unwrap();
        catalog.add_effect(&on, Effect::new().with(key, true)).unwrap();
        catalog.set_cost(&on, 1.0).unwrap();
        let off = format!("{key}_off");
        catalog.add_condition(&off, Mask::new().with(key, true)).unwrap();
        catalog.add_effect(&off, Effect::new().with(key, false)).unwrap();
        catalog.set_cost(&off, 1.0).unwrap();
    }
    planner.set_action_list(catalog);

    let result = planner
        .calculate(PlannerOptions {
            max_expansions: Some(5),
            time_budget_ms: None,
        })
        .unwrap();
    assert_eq!(result.status, PlanStatus::BudgetExhausted);
    assert!(result.plan.is_empty());
    assert_eq!(result.expansions, 5);
}

#[test]
fn deterministic_tie_break() {
    let mut planner = Planner::new(["s", "z"]);
    planner.set_start_state(State::new().set("s", true).set("z", false)).unwrap();
    planner.set_goal_state(Mask::new().with("z", true)).unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    catalog.add_condition("b_action", Mask::new().with("s", true)).unwrap();
    catalog.add_effect("b_action", Effect::new().with("z", true)).unwrap();
    catalog.set_cost("b_action", 1.0).unwrap();
    catalog.add_condition("a_action", Mask::new().with("s", true)).unwrap();
    catalog.add_effect("a_action", Effect::new().with("z", true)).unwrap();
    catalog.set_cost("a_action", 1.0).unwrap();
    planner.set_action_list(catalog);

    let result = planner.calculate(PlannerOptions::default()).unwrap();
    assert_eq!(names(&result), vec!["a_action"]);
    assert_eq!(result.total_cost(), 1.0);
}

/// Barricades three windows: gather resources and tools, then find/walk/
/// barricade each window in descending order. The setup actions
/// (`ensureResources`, `equipTools`, `findWindow3`, `walkToWindow`) are
/// mutually independent except for two ordering constraints (resources before
/// tools, finding before walking), so several interleavings share the same
/// minimum cost; this engine's `(f, g, action_name)` tie-break picks the one
/// where `equipTools` — alphabetically first among the four — is expanded as
/// soon as its precondition is met.
#[test]
fn barricade_three_windows() {
    let keys = [
        "hasHammer",
        "hasPlank",
        "hasNails",
        "atBuilding",
        "windowsRemaining",
        "hasTarget",
        "nearWindow",
        "equipped",
    ];
    let mut planner = Planner::new(keys);
    let start = State::new()
        .set("hasHammer", false)
        .set("hasPlank", false)
        .set("hasNails", false)
        .set("atBuilding", true)
        .set("windowsRemaining", 3_i64)
        .set("hasTarget", false)
        .set("nearWindow", false)
        .set("equipped", false);
    planner.set_start_state(start).unwrap();
    planner.set_goal_state(Mask::new().with("windowsRemaining", 0_i64)).unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    catalog
        .add_condition("ensureResources", Mask::new().with("atBuilding", true))
        .unwrap();
    catalog
        .add_effect(
            "ensureResources",
            Effect::new().with("hasHammer", true).with("hasPlank", true).with("hasNails", true),
        )
        .unwrap();
    catalog.set_cost("ensureResources", 1.0).unwrap();

    catalog
        .add_condition(
            "equipTools",
            Mask::new().with("hasHammer", true).with("hasPlank", true).with("hasNails", true),
        )
        .unwrap();
    catalog.add_effect("equipTools", Effect::new().with("equipped", true)).unwrap();
    catalog.set_cost("equipTools", 1.0).unwrap();

    catalog
        .add_condition("walkToWindow", Mask::new().with("hasTarget", true))
        .unwrap();
    catalog.add_effect("walkToWindow", Effect::new().with("nearWindow", true)).unwrap();
    catalog.set_cost("walkToWindow", 2.0).unwrap();

    for remaining in [3_i64, 2, 1] {
        let find_name = format!("findWindow{remaining}");
        catalog
            .add_condition(&find_name, Mask::new().with("windowsRemaining", remaining))
            .unwrap();
        catalog.add_effect(&find_name, Effect::new().with("hasTarget", true)).unwrap();
        catalog.set_cost(&find_name, 2.0).unwrap();

        let barricade_name = format!("barricadeWindow{remaining}");
        catalog
            .add_condition(
                &barricade_name,
                Mask::new()
                    .with("windowsRemaining", remaining)
                    .with("hasTarget", true)
                    .with("nearWindow", true)
                    .with("equipped", true),
            )
            .unwrap();
        catalog
            .add_effect(
                &barricade_name,
                Effect::new()
                    .with("windowsRemaining", remaining - 1)
                    .with("hasTarget", false)
                    .with("nearWindow", false),
            )
            .unwrap();
        catalog.set_cost(&barricade_name, 5.0).unwrap();
    }

    planner.set_action_list(catalog);
    let result = planner.calculate(PlannerOptions::default()).unwrap();

    assert_eq!(result.status, PlanStatus::Found);
    assert_eq!(
        names(&result),
        vec![
            "ensureResources",
            "equipTools",
            "findWindow3",
            "walkToWindow",
            "barricadeWindow3",
            "findWindow2",
            "walkToWindow",
            "barricadeWindow2",
            "findWindow1",
            "walkToWindow",
            "barricadeWindow1",
        ]
    );
    assert_eq!(result.total_cost(), 29.0);
}
