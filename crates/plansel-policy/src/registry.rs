//! Process-wide policy instances.
//!
//! The built-ins are stateless, so each lives in an immutable `static` that
//! is constructed at compile time: every accessor call returns the same
//! instance and there is nothing to initialize, lock or tear down. The
//! name lookup table is built once on first use.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use plansel_core::config::OptimizerConfig;
use plansel_core::error::{Error, Result};

use crate::any::AnyPolicy;
use crate::count::CountPolicy;
use crate::index_only::IndexOnlyPolicy;
use crate::policy::SelectionPolicy;

static ANY: AnyPolicy = AnyPolicy;
static INDEX_ONLY: IndexOnlyPolicy = IndexOnlyPolicy;
static COUNT: CountPolicy = CountPolicy;

static BUILTINS: Lazy<BTreeMap<&'static str, &'static dyn SelectionPolicy>> = Lazy::new(|| {
    let entries: [&'static dyn SelectionPolicy; 2] = [&ANY, &INDEX_ONLY];
    entries.into_iter().map(|p| (p.name(), p)).collect()
});

/// Allow any plan selection.
pub fn any() -> &'static dyn SelectionPolicy {
    &ANY
}

/// Prevent unindexed collection scans.
pub fn index_only() -> &'static dyn SelectionPolicy {
    &INDEX_ONLY
}

/// Policy used by count queries. Not listed in `builtins()`.
pub fn count() -> &'static dyn SelectionPolicy {
    &COUNT
}

/// Built-in policies keyed by name.
pub fn builtins() -> &'static BTreeMap<&'static str, &'static dyn SelectionPolicy> {
    &BUILTINS
}

pub fn by_name(name: &str) -> Option<&'static dyn SelectionPolicy> {
    BUILTINS.get(name).copied()
}

/// Look up the policy named in `config`.
pub fn resolve(config: &OptimizerConfig) -> Result<&'static dyn SelectionPolicy> {
    by_name(&config.policy).ok_or_else(|| Error::UnknownPolicy(config.policy.clone()))
}

/// Identity comparison. Zero-sized statics may share an address, so the
/// name is compared as well.
pub fn same_policy(a: &dyn SelectionPolicy, b: &dyn SelectionPolicy) -> bool {
    std::ptr::addr_eq(a as *const dyn SelectionPolicy, b as *const dyn SelectionPolicy)
        && a.name() == b.name()
}
