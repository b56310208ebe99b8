use crate::policy::SelectionPolicy;

/// Policy for count queries: no matcher needed, and a counting cursor is
/// preferred over materializing documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountPolicy;

impl SelectionPolicy for CountPolicy {
    fn name(&self) -> &'static str {
        "count"
    }

    fn request_matcher(&self) -> bool {
        false
    }

    fn request_counting_cursor(&self) -> bool {
        true
    }
}
