use crate::policy::SelectionPolicy;

/// Allow any plan, leaving the optimizer's default behavior untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyPolicy;

impl SelectionPolicy for AnyPolicy {
    fn name(&self) -> &'static str {
        "any"
    }
}
