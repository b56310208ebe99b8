#![forbid(unsafe_code)]
//! plansel-policy: strategies that constrain which plans the optimizer may
//! choose, without touching its search or cost model.
//!
//! The optimizer holds a `&dyn SelectionPolicy` and asks it:
//! - before enumeration: `permit_optimal_natural_plan()` and `plan_hint(ns)`
//! - per candidate: `permit_plan(&plan)`
//! - when building the cursor: `request_matcher()` and
//!   `request_counting_cursor()`
//!
//! Answers flow one way. A policy never calls back into the optimizer,
//! never fails, and never has side effects, so one instance can be shared
//! by any number of concurrent queries.

pub mod any;
pub mod count;
pub mod hint;
pub mod index_only;
pub mod policy;
pub mod registry;

pub use any::AnyPolicy;
pub use count::CountPolicy;
pub use hint::HintPolicy;
pub use index_only::IndexOnlyPolicy;
pub use policy::SelectionPolicy;
pub use registry::{any, by_name, index_only};
