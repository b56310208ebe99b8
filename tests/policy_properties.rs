//! Behavioral properties of the built-in selection policies.

use plansel::model::hint::HintSpec;
use plansel::model::plan::{IndexSpec, KeyPart, PlanDescriptor};
use plansel::planner::filter_candidates;
use plansel::policy::registry::{self, same_policy};
use plansel::CandidatePlan;
use std::sync::{Arc, Barrier};
use std::thread;

fn index(name: &str, fields: &[&str], multikey: bool) -> PlanDescriptor {
    PlanDescriptor::index(IndexSpec {
        name: name.to_string(),
        key_pattern: fields.iter().map(|f| KeyPart::asc(*f)).collect(),
        multikey,
    })
}

fn sample_plans() -> Vec<PlanDescriptor> {
    vec![
        PlanDescriptor::natural(),
        PlanDescriptor::natural_reverse(),
        index("a_1", &["a"], false),
        index("a_1_b_1", &["a", "b"], false),
        index("tags_1", &["tags"], true),
        index("", &[], false),
    ]
}

#[test]
fn any_permits_every_plan() {
    for plan in sample_plans() {
        assert!(registry::any().permit_plan(&plan), "any() rejected {plan}");
    }
}

#[test]
fn index_only_rejects_exactly_the_natural_scans() {
    for plan in sample_plans() {
        assert_eq!(
            registry::index_only().permit_plan(&plan),
            !plan.is_natural(),
            "wrong answer for {plan}"
        );
    }
}

#[test]
fn natural_shortcut_gating() {
    assert!(registry::any().permit_optimal_natural_plan());
    assert!(!registry::index_only().permit_optimal_natural_plan());
}

#[test]
fn registry_returns_one_instance_per_variant() {
    let first = registry::any();
    let second = registry::any();
    assert!(std::ptr::addr_eq(first, second));
    assert!(same_policy(first, second));

    let first = registry::index_only();
    let second = registry::index_only();
    assert!(std::ptr::addr_eq(first, second));
    assert!(same_policy(first, second));
}

#[test]
fn registry_identity_holds_under_concurrent_first_access() {
    const THREADS: usize = 8;
    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (registry::index_only(), registry::by_name("indexOnly"))
            })
        })
        .collect();

    let expected = registry::index_only();
    for handle in handles {
        let (direct, by_name) = handle.join().unwrap();
        assert!(std::ptr::addr_eq(direct, expected));
        assert!(std::ptr::addr_eq(by_name.unwrap(), expected));
    }
}

#[test]
fn no_builtin_hints_for_any_namespace() {
    for ns in ["", "test", "test.users", "a.b.c.d", "db.$cmd"] {
        assert_eq!(registry::any().plan_hint(ns), None::<HintSpec>);
        assert_eq!(registry::index_only().plan_hint(ns), None);
    }
}

#[test]
fn builtin_cursor_flags() {
    for policy in [registry::any(), registry::index_only()] {
        assert!(policy.request_matcher());
        assert!(!policy.request_counting_cursor());
    }
}

#[test]
fn filtering_candidates_by_policy() {
    let a = index("A", &["a"], false);
    let b = index("B", &["b"], false);
    let candidates = vec![
        CandidatePlan::new(PlanDescriptor::natural(), 1.0),
        CandidatePlan::new(a.clone(), 2.0),
        CandidatePlan::new(b.clone(), 3.0),
    ];

    assert_eq!(filter_candidates(registry::any(), &candidates).len(), 3);

    let kept: Vec<_> = filter_candidates(registry::index_only(), &candidates)
        .into_iter()
        .map(|c| c.plan.clone())
        .collect();
    assert_eq!(kept, vec![a, b]);
}

#[test]
fn names_are_stable_and_distinct() {
    assert_eq!(registry::any().name(), "any");
    assert_eq!(registry::index_only().name(), "indexOnly");
    assert_ne!(registry::any().name(), registry::index_only().name());
    assert_ne!(registry::count().name(), registry::any().name());
    assert_ne!(registry::count().name(), registry::index_only().name());
}

#[test]
fn identity_distinguishes_variants_through_the_facade() {
    let by_name = plansel::registry::by_name("any").unwrap();
    assert!(same_policy(by_name, plansel::registry::any()));
    assert!(!same_policy(plansel::registry::any(), plansel::registry::count()));
    assert!(!same_policy(plansel::registry::any(), plansel::registry::index_only()));
    assert!(!same_policy(plansel::registry::index_only(), plansel::registry::count()));
}
