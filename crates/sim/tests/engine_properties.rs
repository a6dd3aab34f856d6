//! Property-style checks of the mutation engine over many seeds.

use dnasim_sim::evolution::{ContextModel, MutationEngine, SubstitutionModel};
use dnasim_sim::provider::{random_sequence, regulatory_cassette};
use dnasim_sim::{mutate, MutationError, Sequence};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::collections::HashSet;
use std::str::FromStr;

fn mismatches(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

#[test]
fn test_shape_holds_across_seeds_and_rates() {
    let engine = MutationEngine::default();
    for seed in 0..50 {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let input = random_sequence(30, 0.5, &mut rng).unwrap().to_string();
        for &rate in &[0.05, 0.3, 1.0] {
            let variants = engine.mutate(&input, rate, 4, &mut rng).unwrap();
            assert_eq!(variants.len(), 4);
            let unique: HashSet<&String> = variants.iter().collect();
            assert_eq!(unique.len(), 4, "seed={seed} rate={rate}");
            for v in &variants {
                assert_eq!(v.len(), input.len());
                assert!(v.chars().all(|c| "ACGT".contains(c)));
            }
        }
    }
}

#[test]
fn test_zero_rate_law() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
    for input in ["a", "AcGt", "ttttttttt"] {
        let variants = mutate(input, 0.0, 3, &mut rng).unwrap();
        assert_eq!(variants, vec![input.to_uppercase(); 3]);
    }
}

#[test]
fn test_full_rate_law_on_reference_input() {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(17);
    let input = regulatory_cassette().to_string();
    let variants = mutate(&input, 1.0, 10, &mut rng).unwrap();
    for v in &variants {
        assert_eq!(mismatches(v, &input), input.len());
    }
}

#[test]
fn test_scenario_atcg_half_rate() {
    // ATCG carries a CpG at position 2, which always mutates at rate 0.5.
    let engine = MutationEngine::default();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
    let mut total = 0;
    let runs = 500;
    for _ in 0..runs {
        let variants = engine.mutate("ATCG", 0.5, 3, &mut rng).unwrap();
        assert_eq!(variants.len(), 3);
        assert_eq!(variants.iter().collect::<HashSet<_>>().len(), 3);
        total += variants.iter().map(|v| mismatches(v, "ATCG")).sum::<usize>();
    }
    let fraction = total as f64 / (runs * 3 * 4) as f64;
    assert!(fraction > 0.45 && fraction < 0.8, "mismatch fraction {fraction}");
}

#[test]
fn test_exhaustion_is_reported_not_escalated() {
    let engine = MutationEngine::new(SubstitutionModel::uniform(), ContextModel::neutral());
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    // Two bases admit at most 16 distinct strings.
    let err = engine.mutate("AC", 0.9, 17, &mut rng).unwrap_err();
    assert!(matches!(
        err,
        MutationError::UniquenessExhausted { requested: 17, .. }
    ));
}

#[test]
fn test_typed_api_matches_string_api() {
    let engine = MutationEngine::default();
    let original = Sequence::from_str("GATTACA").unwrap();

    let mut rng_a = Xoshiro256PlusPlus::seed_from_u64(9);
    let typed: Vec<String> = engine
        .mutate_sequence(&original, 0.2, 3, &mut rng_a)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut rng_b = Xoshiro256PlusPlus::seed_from_u64(9);
    let text = engine.mutate("gattaca", 0.2, 3, &mut rng_b).unwrap();

    assert_eq!(typed, text);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = MutationEngine::default();
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4u64)
            .map(|seed| {
                let engine = &engine;
                s.spawn(move || {
                    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                    engine.mutate("ACGTACGTACGT", 0.2, 5, &mut rng).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 5);
        }
    });
}
