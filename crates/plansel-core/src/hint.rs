//! Explicit access-path overrides returned by `plan_hint`.
//!
//! "No hint" is `None` at the call site; there is no empty-hint sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::plan::{AccessMethod, KeyPart, PlanDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintSpec {
    /// Force a collection scan in the given direction.
    Natural {
        #[serde(default)]
        reverse: bool,
    },
    /// Force the index with this name.
    IndexName(String),
    /// Force the index with exactly this key pattern.
    KeyPattern(Vec<KeyPart>),
}

impl HintSpec {
    /// Does `plan` realise this hint?
    pub fn matches(&self, plan: &PlanDescriptor) -> bool {
        match (self, &plan.access) {
            (HintSpec::Natural { reverse }, AccessMethod::NaturalScan { reverse: r }) => {
                reverse == r
            }
            (HintSpec::IndexName(name), AccessMethod::IndexScan(spec)) => &spec.name == name,
            (HintSpec::KeyPattern(pattern), AccessMethod::IndexScan(spec)) => {
                &spec.key_pattern == pattern
            }
            _ => false,
        }
    }
}

impl fmt::Display for HintSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintSpec::Natural { reverse: false } => write!(f, "{{$natural: 1}}"),
            HintSpec::Natural { reverse: true } => write!(f, "{{$natural: -1}}"),
            HintSpec::IndexName(name) => write!(f, "\"{name}\""),
            HintSpec::KeyPattern(pattern) => {
                write!(f, "{{")?;
                for (i, part) in pattern.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", part.field, part.direction.as_i8())?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::IndexSpec;

    fn idx(fields: &[&str]) -> PlanDescriptor {
        PlanDescriptor::index(IndexSpec::from_pattern(
            fields.iter().map(|f| KeyPart::asc(*f)).collect(),
        ))
    }

    #[test]
    fn natural_hint_respects_direction() {
        let fwd = HintSpec::Natural { reverse: false };
        assert!(fwd.matches(&PlanDescriptor::natural()));
        assert!(!fwd.matches(&PlanDescriptor::natural_reverse()));
        assert!(!fwd.matches(&idx(&["a"])));
    }

    #[test]
    fn index_hints_match_by_name_or_pattern() {
        let plan = idx(&["a", "b"]);
        assert!(HintSpec::IndexName("a_1_b_1".into()).matches(&plan));
        assert!(!HintSpec::IndexName("a_1".into()).matches(&plan));
        assert!(HintSpec::KeyPattern(vec![KeyPart::asc("a"), KeyPart::asc("b")]).matches(&plan));
        assert!(!HintSpec::KeyPattern(vec![KeyPart::asc("a")]).matches(&plan));
        assert!(!HintSpec::IndexName("a_1_b_1".into()).matches(&PlanDescriptor::natural()));
    }

    #[test]
    fn display_uses_key_pattern_syntax() {
        let hint = HintSpec::KeyPattern(vec![KeyPart::asc("a"), KeyPart::desc("b")]);
        assert_eq!(hint.to_string(), "{a: 1, b: -1}");
        assert_eq!(HintSpec::Natural { reverse: true }.to_string(), "{$natural: -1}");
    }
}
