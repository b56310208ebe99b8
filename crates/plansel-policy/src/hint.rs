//! A policy that pins the access path through `plan_hint`.

use plansel_core::hint::HintSpec;

use crate::policy::SelectionPolicy;

/// Returns a fixed hint, optionally only for one namespace.
///
/// Unlike the built-ins this carries data, so callers construct and own it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintPolicy {
    hint: HintSpec,
    namespace: Option<String>,
}

impl HintPolicy {
    /// Hint every namespace.
    pub fn new(hint: HintSpec) -> Self {
        Self {
            hint,
            namespace: None,
        }
    }

    /// Hint only `namespace`; other namespaces get no hint.
    pub fn for_namespace(hint: HintSpec, namespace: impl Into<String>) -> Self {
        Self {
            hint,
            namespace: Some(namespace.into()),
        }
    }

    pub fn hint(&self) -> &HintSpec {
        &self.hint
    }
}

impl SelectionPolicy for HintPolicy {
    fn name(&self) -> &'static str {
        "hint"
    }

    fn plan_hint(&self, namespace: &str) -> Option<HintSpec> {
        match &self.namespace {
            Some(ns) if ns != namespace => None,
            _ => Some(self.hint.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscoped_hint_applies_everywhere() {
        let p = HintPolicy::new(HintSpec::IndexName("a_1".into()));
        assert_eq!(p.plan_hint(""), Some(HintSpec::IndexName("a_1".into())));
        assert_eq!(p.plan_hint("db.x.y"), Some(HintSpec::IndexName("a_1".into())));
    }

    #[test]
    fn scoped_hint_only_for_its_namespace() {
        let p = HintPolicy::for_namespace(HintSpec::Natural { reverse: false }, "db.logs");
        assert!(p.plan_hint("db.logs").is_some());
        assert_eq!(p.plan_hint("db.users"), None);
        assert_eq!(p.hint(), &HintSpec::Natural { reverse: false });
    }
}
