//! Read-only view of a candidate execution plan.
//!
//! This is the *only* part of a query plan a selection policy may inspect:
//! how the plan reaches documents. Cost estimates, predicates and bounds
//! belong to the optimizer and are deliberately absent.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering of one component of an index key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl Direction {
    pub(crate) fn as_i8(self) -> i8 {
        match self {
            Direction::Ascending => 1,
            Direction::Descending => -1,
        }
    }
}

/// One `field: direction` entry of an index key pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyPart {
    pub field: String,
    pub direction: Direction,
}

impl KeyPart {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Ascending,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: Direction::Descending,
        }
    }
}

/// Opaque identity of an index, as far as policies are concerned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexSpec {
    pub name: String,
    pub key_pattern: Vec<KeyPart>,
    /// At least one indexed field holds arrays, so one document may produce
    /// several index entries.
    #[serde(default)]
    pub multikey: bool,
}

impl IndexSpec {
    /// Build a spec whose name is derived from the key pattern
    /// (`a_1_b_-1`), the usual default index naming.
    pub fn from_pattern(key_pattern: Vec<KeyPart>) -> Self {
        let name = key_pattern
            .iter()
            .map(|k| format!("{}_{}", k.field, k.direction.as_i8()))
            .collect::<Vec<_>>()
            .join("_");
        Self {
            name,
            key_pattern,
            multikey: false,
        }
    }

    pub fn with_multikey(mut self, multikey: bool) -> Self {
        self.multikey = multikey;
        self
    }
}

/// How a plan reaches documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AccessMethod {
    /// Collection scan in storage order.
    NaturalScan {
        #[serde(default)]
        reverse: bool,
    },
    /// Scan driven by the ordering of a specific index.
    IndexScan(IndexSpec),
}

/// The policy-visible part of a candidate plan.
///
/// Policies receive it by shared reference for the duration of a single call
/// and must not keep it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanDescriptor {
    pub access: AccessMethod,
}

impl PlanDescriptor {
    pub fn natural() -> Self {
        Self {
            access: AccessMethod::NaturalScan { reverse: false },
        }
    }

    pub fn natural_reverse() -> Self {
        Self {
            access: AccessMethod::NaturalScan { reverse: true },
        }
    }

    pub fn index(spec: IndexSpec) -> Self {
        Self {
            access: AccessMethod::IndexScan(spec),
        }
    }

    pub fn is_natural(&self) -> bool {
        matches!(self.access, AccessMethod::NaturalScan { .. })
    }

    pub fn index_spec(&self) -> Option<&IndexSpec> {
        match &self.access {
            AccessMethod::IndexScan(spec) => Some(spec),
            AccessMethod::NaturalScan { .. } => None,
        }
    }
}

impl From<IndexSpec> for PlanDescriptor {
    fn from(spec: IndexSpec) -> Self {
        Self::index(spec)
    }
}

impl fmt::Display for PlanDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.access {
            AccessMethod::NaturalScan { reverse: false } => write!(f, "natural"),
            AccessMethod::NaturalScan { reverse: true } => write!(f, "natural(reverse)"),
            AccessMethod::IndexScan(spec) => write!(f, "index {}", spec.name),
        }
    }
}
