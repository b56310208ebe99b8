//! Forbid unindexed collection scans.
//!
//! Meant for contexts where a full scan is unacceptable (large collections,
//! latency-sensitive paths). Index choice itself stays with the optimizer.

use plansel_core::plan::PlanDescriptor;

use crate::policy::SelectionPolicy;

#[derive(Debug, Clone, Copy, Default)]
pub struct IndexOnlyPolicy;

impl SelectionPolicy for IndexOnlyPolicy {
    fn name(&self) -> &'static str {
        "indexOnly"
    }

    /// Even when a natural scan looks cheapest, indexed plans must be
    /// enumerated.
    fn permit_optimal_natural_plan(&self) -> bool {
        false
    }

    fn permit_plan(&self, plan: &PlanDescriptor) -> bool {
        !plan.is_natural()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plansel_core::plan::{IndexSpec, KeyPart};

    #[test]
    fn rejects_natural_scans_in_both_directions() {
        let p = IndexOnlyPolicy;
        assert!(!p.permit_plan(&PlanDescriptor::natural()));
        assert!(!p.permit_plan(&PlanDescriptor::natural_reverse()));
    }

    #[test]
    fn accepts_any_index_scan() {
        let p = IndexOnlyPolicy;
        let single = IndexSpec::from_pattern(vec![KeyPart::asc("a")]);
        let compound = IndexSpec::from_pattern(vec![KeyPart::asc("a"), KeyPart::desc("b")])
            .with_multikey(true);
        assert!(p.permit_plan(&PlanDescriptor::index(single)));
        assert!(p.permit_plan(&PlanDescriptor::index(compound)));
    }

    #[test]
    fn keeps_remaining_defaults() {
        let p = IndexOnlyPolicy;
        assert!(!p.permit_optimal_natural_plan());
        assert_eq!(p.plan_hint("test.users"), None);
        assert!(p.request_matcher());
        assert!(!p.request_counting_cursor());
    }
}
