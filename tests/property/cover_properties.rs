//! Properties of the greedy driver, coverage index and local sampler.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use u_cover::greedy::{greedy_search, GreedyConfig, GreedySearch};
use u_cover::models::{Candidate, CoverProblem};
use u_cover::sampling::{LocalSampler, SamplerConfig};
use u_cover::selection::{select_best, CoverageIndex};
use u_cover::CoverError;

fn target(t: u8) -> String {
    format!("t{t}")
}

fn problem_strategy() -> impl Strategy<Value = CoverProblem> {
    (
        prop::collection::vec(prop::collection::btree_set(0u8..12, 0..5), 0..8),
        prop::collection::btree_set(0u8..12, 0..10),
    )
        .prop_map(|(coverages, universe)| {
            let mut problem = CoverProblem::new(universe.into_iter().map(target));
            for (i, coverage) in coverages.into_iter().enumerate() {
                problem = problem.with_candidate(
                    Candidate::new(format!("k{i}")).with_targets(coverage.into_iter().map(target)),
                );
            }
            problem
        })
}

proptest! {
    #[test]
    fn cumulative_coverage_is_running_gain_sum(problem in problem_strategy()) {
        let result = greedy_search(&problem).unwrap();
        let mut running = 0;
        for (&gain, &cumulative) in result.gains.iter().zip(&result.cumulative_covered) {
            running += gain;
            prop_assert_eq!(cumulative, running);
        }
        prop_assert!(result.cumulative_covered.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn selection_bounded_by_pool(problem in problem_strategy()) {
        let result = greedy_search(&problem).unwrap();
        prop_assert!(result.len() <= problem.candidate_count());
        let unique: BTreeSet<&String> = result.selection.iter().collect();
        prop_assert_eq!(unique.len(), result.len());
    }

    #[test]
    fn coverable_universe_is_covered(problem in problem_strategy()) {
        let result = greedy_search(&problem).unwrap();
        prop_assert_eq!(result.is_complete(&problem.universe), problem.is_coverable());
    }

    #[test]
    fn every_pick_is_argmax(problem in problem_strategy()) {
        let result = greedy_search(&problem).unwrap();
        let index = CoverageIndex::new();
        let mut remaining = problem.candidates.clone();
        let mut covered = BTreeSet::new();

        for step in result.steps() {
            let max_gain = index.gains(&remaining, &covered).into_iter().max().unwrap_or(0);
            prop_assert_eq!(step.gain, max_gain);

            let pos = remaining.iter().position(|c| c.id == step.candidate).unwrap();
            let chosen = remaining.remove(pos);
            covered.extend(chosen.coverage);
        }
        prop_assert_eq!(covered, result.final_covered);
    }

    #[test]
    fn exhausts_pool_when_universe_uncoverable(problem in problem_strategy()) {
        let result = greedy_search(&problem).unwrap();
        if !problem.is_coverable() {
            prop_assert_eq!(result.len(), problem.candidate_count());
        }
    }

    #[test]
    fn zero_gain_stop_keeps_gains_positive(problem in problem_strategy()) {
        let search =
            GreedySearch::new().with_config(GreedyConfig::default().with_stop_on_zero_gain(true));
        let result = search.search(&problem).unwrap();
        prop_assert!(result.gains.iter().all(|&g| g > 0));
        prop_assert_eq!(result.is_complete(&problem.universe), problem.is_coverable());
    }

    #[test]
    fn gains_never_increase(problem in problem_strategy()) {
        let result = greedy_search(&problem).unwrap();
        prop_assert!(result.gains.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn select_best_is_stable(problem in problem_strategy()) {
        let covered: BTreeSet<String> = problem.universe.iter().take(3).cloned().collect();
        let first = select_best(&problem.candidates, &covered);
        let second = select_best(&problem.candidates, &covered);
        prop_assert_eq!(first.gain, second.gain);
        prop_assert_eq!(first.candidate.is_none(), problem.candidates.is_empty());
    }

    #[test]
    fn sampler_outcomes_within_universe(
        problem in problem_strategy(),
        trials in 0usize..20,
        seed in any::<u64>(),
    ) {
        let sample_size = problem.candidate_count() / 2;
        let sampler = LocalSampler::new(SamplerConfig::new(trials, sample_size));
        let outcomes = sampler.run(&problem, &mut SmallRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(outcomes.len(), trials);
        prop_assert!(outcomes.iter().all(|&u| u <= problem.universe_size()));
    }

    #[test]
    fn oversized_sample_rejected(problem in problem_strategy(), extra in 1usize..5) {
        let sample_size = problem.candidate_count() + extra;
        let sampler = LocalSampler::new(SamplerConfig::new(10, sample_size));
        let err = sampler.run(&problem, &mut SmallRng::seed_from_u64(0)).unwrap_err();
        let is_sample_too_large = matches!(err, CoverError::SampleTooLarge { .. });
        prop_assert!(is_sample_too_large);
    }
}
