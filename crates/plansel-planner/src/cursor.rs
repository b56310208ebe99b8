//! Cursor construction parameters derived from a policy.

use plansel_core::error::{Error, Result};
use plansel_core::plan::PlanDescriptor;
use plansel_policy::SelectionPolicy;
use serde::{Deserialize, Serialize};

/// How the cursor for a selected plan is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorOptions {
    /// Attach a matcher that re-evaluates the predicate per document.
    pub matcher: bool,
    /// Count index entries instead of materializing documents. The cursor
    /// then only reports a count; keys and documents are unavailable.
    pub counting: bool,
}

impl CursorOptions {
    /// Apply `policy`'s cursor preferences to `plan`.
    ///
    /// `matcher_required` states that the access method alone cannot
    /// guarantee correct results. A counting cursor cannot match, cannot
    /// de-duplicate, and needs index entries, so requesting one for a plan
    /// that violates any of those is an error.
    pub fn for_plan(
        policy: &dyn SelectionPolicy,
        plan: &PlanDescriptor,
        matcher_required: bool,
    ) -> Result<Self> {
        let matcher = matcher_required || policy.request_matcher();

        if !policy.request_counting_cursor() {
            return Ok(Self {
                matcher,
                counting: false,
            });
        }

        let reason = match plan.index_spec() {
            None => Some("natural scans have no index entries to count"),
            Some(spec) if spec.multikey => Some("multikey index requires de-duplication"),
            Some(_) if matcher_required => Some("predicate is not covered by the index bounds"),
            Some(_) => None,
        };
        if let Some(reason) = reason {
            return Err(Error::CountingCursorUnsupported {
                plan: plan.to_string(),
                reason,
            });
        }

        Ok(Self {
            matcher,
            counting: true,
        })
    }
}
