//! Common imports for consumers of this crate: `use goap_core::prelude::*;`.

pub use crate::action::Action;
pub use crate::catalog::{ActionCatalog, Strictness};
pub use crate::effect::Effect;
pub use crate::error::{GoapError, PlanStatus};
pub use crate::goal::Goal;
pub use crate::heuristic::HeuristicKind;
pub use crate::mask::MaskValue;
pub use crate::plan::{Plan, PlanResult, PlanStep};
pub use crate::planner::{Planner, PlannerOptions};
pub use crate::rpg::RelaxedPlanningGraph;
pub use crate::state::{Mask, State};
pub use crate::value::Value;
pub use crate::world::World;
