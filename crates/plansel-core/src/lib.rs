#![forbid(unsafe_code)]
//! plansel-core: the read-only plan view that selection policies inspect,
//! plus the hint type, error taxonomy, and optimizer configuration shared by
//! the policy and planner crates.
//!
//! Nothing here decides anything. Policies live in `plansel-policy`, and the
//! optimizer that consults them lives in `plansel-planner`.

pub mod config;
pub mod error;
pub mod hint;
pub mod plan;
pub mod prelude;
