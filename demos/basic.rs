use goap_core::prelude::*;

fn main() {
    let mut planner = Planner::new(["is_hungry", "has_food"]);
    planner
        .set_start_state(State::new().set("is_hungry", true).set("has_food", false))
        .expect("start state uses only declared keys");
    planner
        .set_goal_state(Mask::new().with("is_hungry", false))
        .expect("goal uses only declared keys");

    let mut catalog = ActionCatalog::new(Strictness::Relaxed);
    catalog
        .add_condition("buy_food", Mask::new().with("has_food", false))
        .unwrap();
    catalog
        .add_effect("buy_food", Effect::new().with("has_food", true))
        .unwrap();
    catalog.set_cost("buy_food", 2.0).unwrap();

    catalog
        .add_condition(
            "eat",
            Mask::new().with("is_hungry", true).with("has_food", true),
        )
        .unwrap();
    catalog
        .add_effect(
            "eat",
            Effect::new().with("is_hungry", false).with("has_food", false),
        )
        .unwrap();
    catalog.set_cost("eat", 1.0).unwrap();

    planner.set_action_list(catalog);

    let result = planner
        .calculate(PlannerOptions::default())
        .expect("catalog validates");

    for step in &result.plan {
        println!("{} -> cost so far: {}", step.action_name, step.g);
    }
    println!("status: {:?}, total cost: {}", result.status, result.total_cost());
}
