//! The selection policy trait.

use std::fmt;

use plansel_core::hint::HintSpec;
use plansel_core::plan::PlanDescriptor;

/// Overrides the optimizer's default behavior for selecting plans and
/// creating cursors.
///
/// Every method except `name` has a permissive default, so a new policy only
/// overrides what it changes. All methods are O(1), infallible and free of
/// side effects.
pub trait SelectionPolicy: Send + Sync + 'static {
    /// Stable, non-empty identifier. For diagnostics only; callers must not
    /// branch on it.
    fn name(&self) -> &'static str;

    /// May the optimizer skip plan comparison and go straight to a natural
    /// scan when it judges that scan optimal?
    fn permit_optimal_natural_plan(&self) -> bool {
        true
    }

    /// May `plan` be chosen? `false` discards the candidate; it is not an
    /// error.
    fn permit_plan(&self, _plan: &PlanDescriptor) -> bool {
        true
    }

    /// Access path to use instead of searching, if any.
    fn plan_hint(&self, _namespace: &str) -> Option<HintSpec> {
        None
    }

    /// Ask for the cursor to carry a matcher even when its access method
    /// could select documents without one, e.g. so match details can be
    /// reported. Advisory: the cursor builder may ignore it.
    fn request_matcher(&self) -> bool {
        true
    }

    /// Ask for a cursor optimized for counting index entries. Such a cursor
    /// only yields a count; it cannot return keys or documents, and it
    /// cannot de-duplicate, so it is invalid on multikey indexes. The
    /// optimizer enforces that, not the policy.
    fn request_counting_cursor(&self) -> bool {
        false
    }
}

impl fmt::Debug for dyn SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionPolicy")
            .field("name", &self.name())
            .finish()
    }
}
