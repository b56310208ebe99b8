//! Optimizer configuration that downstream crates can serialize/deserialize.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Name of the plan selection policy to consult (see `plansel-policy`).
    pub policy: String,

    /// Allow the natural-scan shortcut for unfiltered queries. The shortcut
    /// is taken only when this is set *and* the policy permits it.
    pub natural_shortcut: bool,

    /// Consult `plan_hint` before enumeration.
    pub honor_hints: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            policy: "any".to_string(),
            natural_shortcut: true,
            honor_hints: true,
        }
    }
}

impl OptimizerConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `PLANSEL_POLICY`: policy name (`any`, `indexOnly`, ...)
    /// - `PLANSEL_NATURAL_SHORTCUT`: `true`/`false`
    /// - `PLANSEL_HONOR_HINTS`: `true`/`false`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();

        if let Some(s) = lookup("PLANSEL_POLICY") {
            let s = s.trim();
            if !s.is_empty() {
                cfg.policy = s.to_string();
            }
        }

        if let Some(s) = lookup("PLANSEL_NATURAL_SHORTCUT") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.natural_shortcut = v;
            }
        }

        if let Some(s) = lookup("PLANSEL_HONOR_HINTS") {
            if let Ok(v) = s.trim().parse::<bool>() {
                cfg.honor_hints = v;
            }
        }

        cfg
    }

    pub fn with_policy(mut self, policy: impl Into<String>) -> Self {
        self.policy = policy.into();
        self
    }
}
