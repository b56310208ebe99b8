#![forbid(unsafe_code)]
//! plansel-planner: a minimal optimizer that honors a `SelectionPolicy`.
//!
//! Candidate generation and cost estimation are the caller's business: a
//! `PlanRequest` arrives with its candidates already costed. This crate only
//! decides, in order:
//!     * whether the natural-scan shortcut may be taken
//!     * whether a hint replaces the search
//!     * which candidates survive `permit_plan`, and the cheapest of those
//!     * how the cursor for the winner is parameterized
//!
//! A policy that leaves nothing selectable yields `Error::NoViablePlan`.

pub mod cursor;
pub mod optimizer;

pub use cursor::CursorOptions;
pub use optimizer::{
    filter_candidates, CandidatePlan, Optimizer, PlanRequest, Selection, SelectionReason,
};
