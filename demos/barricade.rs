//! Barricades three windows, mirroring the external barricade action-factory
//! scenario used as a worked example in the design documentation: gather
//! resources and tools once, then find/walk/barricade each of three windows
//! in turn. This crate does not ship the factory itself (§1: task-factory
//! modules are an external collaborator) — this demo hand-assembles the same
//! catalog a factory would produce.

use goap_core::prelude::*;

fn main() {
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
    planner
        .set_goal_state(Mask::new().with("windowsRemaining", 0_i64))
        .unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);

    catalog
        .add_condition("ensureResources", Mask::new().with("atBuilding", true))
        .unwrap();
    catalog
        .add_effect(
            "ensureResources",
            Effect::new()
                .with("hasHammer", true)
                .with("hasPlank", true)
                .with("hasNails", true),
        )
        .unwrap();
    catalog.set_cost("ensureResources", 1.0).unwrap();

    catalog
        .add_condition("equipTools", Mask::new().with("hasHammer", true).with("hasPlank", true).with("hasNails", true))
        .unwrap();
    catalog
        .add_effect("equipTools", Effect::new().with("equipped", true))
        .unwrap();
    catalog.set_cost("equipTools", 1.0).unwrap();

    for remaining in [3_i64, 2, 1] {
        let find_name = format!("findWindow{remaining}");
        catalog
            .add_condition(&find_name, Mask::new().with("windowsRemaining", remaining))
            .unwrap();
        catalog
            .add_effect(&find_name, Effect::new().with("hasTarget", true))
            .unwrap();
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

    catalog
        .add_condition("walkToWindow", Mask::new().with("hasTarget", true))
        .unwrap();
    catalog
        .add_effect("walkToWindow", Effect::new().with("nearWindow", true))
        .unwrap();
    catalog.set_cost("walkToWindow", 2.0).unwrap();

    planner.set_action_list(catalog);

    let result = planner
        .calculate(PlannerOptions::default())
        .expect("catalog validates");

    println!("status: {:?}, total cost: {}", result.status, result.total_cost());
    for step in &result.plan {
        println!("{} (g={})", step.action_name, step.g);
    }
}
