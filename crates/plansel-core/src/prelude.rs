//! Convenient re-exports for downstream crates.

pub use crate::config::OptimizerConfig;
pub use crate::error::{Error, Result};
pub use crate::hint::HintSpec;
pub use crate::plan::{AccessMethod, Direction, IndexSpec, KeyPart, PlanDescriptor};
