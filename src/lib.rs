//! `goap_core`: a symbolic Goal-Oriented Action Planning engine.
//!
//! Given a symbolic initial world, a symbolic goal, and a catalog of
//! parameterized actions (preconditions, effects, positive cost), [`Planner`]
//! produces a minimum-cost ordered [`Plan`] that transforms the start state
//! into one satisfying the goal, or reports why it could not.
//!
//! The crate is organized leaf-first, matching the four cooperating
//! components of the design this was built to:
//!
//! - [`mod@value`] / [`mod@mask`] / [`mod@state`]: the scalar and state
//!   algebra — canonical keying, `satisfies`, `mismatch`, `apply`.
//! - [`mod@effect`] / [`mod@action`] / [`mod@catalog`]: effects, actions, and
//!   the validated [`ActionCatalog`] builder.
//! - [`mod@heuristic`] / [`mod@rpg`]: the pluggable heuristic providers and
//!   the Relaxed Planning Graph `rpg_add` is built on.
//! - [`mod@planner`] / [`mod@plan`] / [`mod@world`]: the A* search itself,
//!   its result types, and the multi-planner [`World`] container.
//!
//! See [`prelude`] for the common import set.

pub mod action;
pub mod catalog;
pub mod effect;
pub mod error;
pub mod goal;
pub mod heuristic;
pub mod mask;
pub mod plan;
pub mod planner;
pub mod prelude;
pub mod rpg;
pub mod state;
pub mod value;
pub mod world;

pub use action::Action;
pub use catalog::{ActionCatalog, Strictness};
pub use effect::Effect;
pub use error::{GoapError, PlanStatus};
pub use goal::Goal;
pub use heuristic::HeuristicKind;
pub use mask::MaskValue;
pub use plan::{Plan, PlanResult, PlanStep};
pub use planner::{Planner, PlannerOptions};
pub use rpg::RelaxedPlanningGraph;
pub use state::{Mask, State};
pub use value::Value;
pub use world::World;
