//! Property-based tests for the step combinator laws.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use proptest::prelude::*;
use stepwise::steps::string;
use stepwise::{any_err, optional, that, Check, Outcome, Step};

fn outcome() -> impl Strategy<Value = Outcome<u8>> {
    prop_oneof![
        Just(Outcome::Pass),
        Just(Outcome::Skip),
        any::<u8>().prop_map(Outcome::Fail),
    ]
}

fn constant(outcome: Outcome<u8>) -> Step<'static, str, u8> {
    Step::new(move |_| outcome)
}

/// A small catalogue of string steps, including one that always skips.
fn catalogue(index: usize) -> Step<'static, str> {
    match index % 6 {
        0 => string::is_empty(),
        1 => string::is_not_empty(),
        2 => string::has_length(3),
        3 => string::has_prefix("a"),
        4 => string::is_in(["abc", "xyz"]),
        _ => optional(),
    }
}

proptest! {
    #[test]
    fn prop_err_replaces_only_failures(inner in outcome(), replacement in any::<u8>(), target in ".*") {
        let expected = match inner {
            Outcome::Fail(_) => Outcome::Fail(replacement),
            other => other,
        };
        prop_assert_eq!(constant(inner).err(replacement).check(&target), expected);
    }

    #[test]
    fn prop_when_matches_if_on_same_target(
        subject in 0usize..6,
        condition in 0usize..6,
        target in "[a-z]{0,4}",
    ) {
        let when = catalogue(subject).when(catalogue(condition));
        let if_ = catalogue(subject).if_(target.clone(), catalogue(condition));
        prop_assert_eq!(when.check(&target), if_.check(&target));
    }

    #[test]
    fn prop_optional_when_skips_iff_condition_passes(condition in 0usize..6, target in "[a-z]{0,4}") {
        let cond = catalogue(condition);
        let expected = if cond.check(&target).is_pass() {
            Outcome::Skip
        } else {
            Outcome::Pass
        };
        let step: Step<'_, str> = optional().when(cond);
        prop_assert_eq!(step.check(&target), expected);
    }

    #[test]
    fn prop_sequence_stops_at_first_non_pass(outcomes in prop::collection::vec(outcome(), 0..8)) {
        let calls = Arc::new(AtomicUsize::new(0));
        let steps: Vec<Step<'_, str, u8>> = outcomes
            .iter()
            .map(|&outcome| {
                let calls = Arc::clone(&calls);
                Step::<'static, str, u8>::new(move |_| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    outcome
                })
            })
            .collect();

        let stop = outcomes.iter().position(|o| !o.is_pass());
        let expected = match stop {
            Some(i) => outcomes[i].into_result(),
            None => Ok(()),
        };

        prop_assert_eq!(that("target", steps).run(), expected);
        prop_assert_eq!(calls.load(Ordering::SeqCst), stop.map_or(outcomes.len(), |i| i + 1));
    }

    #[test]
    fn prop_any_err_returns_first_failure(results in prop::collection::vec(prop::option::of(any::<u8>()), 0..8)) {
        let checks: Vec<Check<'_, u8>> = results
            .iter()
            .map(|&result| Check::new(move || result.map_or(Ok(()), Err)))
            .collect();

        let expected = results.iter().flatten().next().map_or(Ok(()), |&e| Err(e));
        prop_assert_eq!(any_err(checks), expected);
    }
}
