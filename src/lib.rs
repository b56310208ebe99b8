#![forbid(unsafe_code)]
//! plansel: plan selection policies for a document database query optimizer.
//!
//! Re-exports the member crates so applications and the integration tests
//! can depend on a single package.

pub use plansel_core as model;
pub use plansel_planner as planner;
pub use plansel_policy as policy;

pub use plansel_core::prelude::*;
pub use plansel_planner::{CandidatePlan, CursorOptions, Optimizer, PlanRequest, Selection};
pub use plansel_policy::{registry, SelectionPolicy};
