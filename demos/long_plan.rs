//! This example shows a plan with many steps: there is no precondition
//! operator beyond equality (§1 non-goals exclude numeric arithmetic in
//! preconditions), so reaching `gold == N` takes a chain of N
//! exact-value-to-exact-value actions rather than one "earn gold" action
//! with an inequality guard.

use goap_core::prelude::*;

const TARGET_GOLD: i64 = 20;

fn main() {
    let mut planner = Planner::new(["gold"]);
    planner
        .set_start_state(State::new().set("gold", 0_i64))
        .unwrap();
    planner
        .set_goal_state(Mask::new().with("gold", TARGET_GOLD))
        .unwrap();

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    for level in 0..TARGET_GOLD {
        let name = format!("earn_gold_{level}");
        catalog
            .add_condition(&name, Mask::new().with("gold", level))
            .unwrap();
        catalog
            .add_effect(&name, Effect::new().with("gold", level + 1))
            .unwrap();
        catalog.set_cost(&name, 1.0).unwrap();
    }
    planner.set_action_list(catalog);

    let result = planner
        .calculate(PlannerOptions::default())
        .expect("catalog validates");

    println!(
        "status: {:?}, steps: {}, total cost: {}",
        result.status,
        result.plan.len(),
        result.total_cost()
    );
    for step in &result.plan {
        println!("{} -> gold={:?}", step.action_name, step.state.get("gold"));
    }
}
