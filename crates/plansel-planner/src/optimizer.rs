//! Plan selection driven by a `SelectionPolicy`.

use plansel_core::config::OptimizerConfig;
use plansel_core::error::{Error, Result};
use plansel_core::hint::HintSpec;
use plansel_core::plan::{AccessMethod, PlanDescriptor};
use plansel_policy::{registry, SelectionPolicy};
use serde::{Deserialize, Serialize};

use crate::cursor::CursorOptions;

/// A candidate produced (and costed) by the caller's enumerator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidatePlan {
    pub plan: PlanDescriptor,
    pub estimated_cost: f64,
    /// Index bounds alone select exactly the matching documents.
    #[serde(default)]
    pub covers_predicate: bool,
}

impl CandidatePlan {
    pub fn new(plan: PlanDescriptor, estimated_cost: f64) -> Self {
        Self {
            plan,
            estimated_cost,
            covers_predicate: false,
        }
    }

    pub fn covering(mut self) -> Self {
        self.covers_predicate = true;
        self
    }

    /// Cost used for comparison. A NaN estimate of either sign ranks as
    /// +inf, so it only wins when nothing else is permitted.
    fn cost_key(&self) -> f64 {
        if self.estimated_cost.is_nan() {
            f64::INFINITY
        } else {
            self.estimated_cost
        }
    }

    fn needs_matcher(&self, unfiltered: bool) -> bool {
        !unfiltered && !(self.covers_predicate && !self.plan.is_natural())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub namespace: String,
    /// No predicate and no sort: a forward natural scan is optimal.
    #[serde(default)]
    pub unfiltered: bool,
    pub candidates: Vec<CandidatePlan>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionReason {
    /// Natural scan chosen without comparing plans.
    Shortcut,
    /// Plan dictated by the policy's hint.
    Hinted,
    /// Cheapest permitted candidate.
    Costed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub plan: CandidatePlan,
    pub reason: SelectionReason,
    /// Candidates the policy was asked about.
    pub considered: usize,
    /// Candidates vetoed by `permit_plan`, in request order.
    pub discarded: Vec<PlanDescriptor>,
}

/// Candidates `policy` permits, in their original order.
pub fn filter_candidates<'a>(
    policy: &dyn SelectionPolicy,
    candidates: &'a [CandidatePlan],
) -> Vec<&'a CandidatePlan> {
    candidates
        .iter()
        .filter(|c| policy.permit_plan(&c.plan))
        .collect()
}

#[derive(Debug)]
pub struct Optimizer<'p> {
    config: OptimizerConfig,
    policy: &'p dyn SelectionPolicy,
}

impl Optimizer<'static> {
    /// Build an optimizer using the policy named in `config`.
    pub fn new(config: OptimizerConfig) -> Result<Self> {
        let policy = registry::resolve(&config)?;
        Ok(Self { config, policy })
    }
}

impl<'p> Optimizer<'p> {
    /// Build an optimizer around an explicit policy; `config.policy` is
    /// ignored.
    pub fn with_policy(config: OptimizerConfig, policy: &'p dyn SelectionPolicy) -> Self {
        Self { config, policy }
    }

    pub fn policy(&self) -> &'p dyn SelectionPolicy {
        self.policy
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Choose a plan for `request`.
    pub fn select(&self, request: &PlanRequest) -> Result<Selection> {
        let policy = self.policy;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            policy = policy.name(),
            ns = %request.namespace,
            candidates = request.candidates.len(),
            "selecting plan"
        );

        if request.unfiltered
            && self.config.natural_shortcut
            && policy.permit_optimal_natural_plan()
        {
            let natural = request
                .candidates
                .iter()
                .find(|c| c.plan.access == AccessMethod::NaturalScan { reverse: false });
            // The shortcut skips comparison, not the per-candidate veto.
            if let Some(candidate) = natural.filter(|c| policy.permit_plan(&c.plan)) {
                #[cfg(feature = "tracing")]
                tracing::debug!(ns = %request.namespace, "optimal natural plan shortcut");
                return Ok(Selection {
                    plan: candidate.clone(),
                    reason: SelectionReason::Shortcut,
                    considered: 0,
                    discarded: Vec::new(),
                });
            }
        }

        if self.config.honor_hints {
            if let Some(hint) = policy.plan_hint(&request.namespace) {
                return self.select_hinted(request, &hint);
            }
        }

        let mut best: Option<&CandidatePlan> = None;
        let mut discarded = Vec::new();
        for candidate in &request.candidates {
            if !policy.permit_plan(&candidate.plan) {
                #[cfg(feature = "tracing")]
                tracing::trace!(policy = policy.name(), plan = %candidate.plan, "candidate discarded");
                discarded.push(candidate.plan.clone());
                continue;
            }
            best = match best {
                Some(b) if b.cost_key().total_cmp(&candidate.cost_key()).is_le() => Some(b),
                _ => Some(candidate),
            };
        }

        let Some(best) = best else {
            return Err(self.no_viable_plan(request));
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            plan = %best.plan,
            cost = best.estimated_cost,
            discarded = discarded.len(),
            "plan selected"
        );

        Ok(Selection {
            plan: best.clone(),
            reason: SelectionReason::Costed,
            considered: request.candidates.len(),
            discarded,
        })
    }

    fn select_hinted(
        &self,
        request: &PlanRequest,
        hint: &HintSpec,
    ) -> Result<Selection> {
        let candidate = request
            .candidates
            .iter()
            .find(|c| hint.matches(&c.plan))
            .ok_or_else(|| Error::BadHint {
                namespace: request.namespace.clone(),
                hint: hint.to_string(),
            })?;

        // A hint picks the access path; it does not bypass the policy's veto.
        if !self.policy.permit_plan(&candidate.plan) {
            return Err(self.no_viable_plan(request));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(ns = %request.namespace, %hint, plan = %candidate.plan, "hinted plan");

        Ok(Selection {
            plan: candidate.clone(),
            reason: SelectionReason::Hinted,
            considered: 1,
            discarded: Vec::new(),
        })
    }

    fn no_viable_plan(&self, request: &PlanRequest) -> Error {
        #[cfg(feature = "tracing")]
        tracing::debug!(policy = self.policy.name(), ns = %request.namespace, "no viable plan");
        Error::NoViablePlan {
            namespace: request.namespace.clone(),
            policy: self.policy.name().to_string(),
        }
    }

    /// Cursor parameters for a plan previously selected from `request`.
    pub fn cursor_options(
        &self,
        selection: &Selection,
        request: &PlanRequest,
    ) -> Result<CursorOptions> {
        CursorOptions::for_plan(
            self.policy,
            &selection.plan.plan,
            selection.plan.needs_matcher(request.unfiltered),
        )
    }

    /// Plan a count query with the count policy.
    ///
    /// The configured policy is *not* consulted: counts select with
    /// `registry::count()`, which permits every plan, so a count may use a
    /// collection scan even when this optimizer was built for `indexOnly`.
    /// Falls back to a regular cursor when the chosen plan cannot support a
    /// counting cursor.
    pub fn count(&self, request: &PlanRequest) -> Result<(Selection, CursorOptions)> {
        let counter = Optimizer::with_policy(self.config.clone(), registry::count());
        let selection = counter.select(request)?;
        let matcher_required = selection.plan.needs_matcher(request.unfiltered);

        let options = match counter.cursor_options(&selection, request) {
            Ok(options) => options,
            #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
            Err(err @ Error::CountingCursorUnsupported { .. }) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(%err, "using regular cursor for count");
                CursorOptions {
                    matcher: matcher_required,
                    counting: false,
                }
            }
            Err(e) => return Err(e),
        };
        Ok((selection, options))
    }
}
