//! Integration tests for the bucket-histogram learner.

use beuron::{
    Beuron, BooleanFunction, Learner, Traced,
    utils::{bernoulli, random_input, rng_from_seed}
};

const INPUTS: [[u8; 2]; 4] = [[0, 0], [0, 1], [1, 0], [1, 1]];

fn xor_data() -> (Vec<[u8; 2]>, Vec<u8>) {
    (INPUTS.to_vec(), vec![0, 1, 1, 0])
}

fn assert_xor(b: &Beuron) {
    assert_eq!(b.solve([1, 1]), 0);
    assert_eq!(b.solve([0, 1]), 1);
    assert_eq!(b.solve([1, 0]), 1);
    assert_eq!(b.solve([0, 0]), 0);
}

/// Stream of `n` samples of `f` with outputs flipped at rate `noise`.
fn noisy_stream(f: BooleanFunction, n: usize, noise: f64, seed: u64) -> Vec<([u8; 2], u8)> {
    let mut rng = rng_from_seed(seed);
    (0..n)
        .map(|_| {
            let x = random_input(&mut rng);
            let y = f.eval(x);
            (x, if bernoulli(&mut rng, noise) { 1 - y } else { y })
        })
        .collect()
}

#[test]
fn untouched_learner_answers_zero() {
    let b = Beuron::new();
    for x in INPUTS {
        assert_eq!(b.solve(x), 0);
    }
}

#[test]
fn xor_default_limit() {
    let mut b = Beuron::new();
    b.learn([1, 1], 0)
        .learn([0, 1], 1)
        .learn([1, 0], 1)
        .learn([0, 0], 0);

    assert_xor(&b);
}

#[test]
fn xor_limit_two() {
    let mut b = Beuron::with_size_limit(2.0);
    b.learn([1, 1], 0)
        .learn([0, 1], 1)
        .learn([1, 0], 1)
        .learn([0, 0], 0);

    assert_xor(&b);
}

#[test]
fn xor_with_minority_noise_limit_four() {
    let mut b = Beuron::with_size_limit(4.0);
    b.learn([1, 1], 0)
        .learn([0, 1], 1)
        .learn([1, 0], 1)
        .learn([0, 0], 0)
        .learn([1, 1], 0)
        .learn([0, 1], 1)
        .learn([1, 1], 1)
        .learn([0, 0], 0)
        .learn([0, 0], 1);

    assert_xor(&b);
}

#[test]
fn xor_with_minority_noise_default_limit() {
    let mut b = Beuron::new();
    for _ in 0..3 {
        b.learn([1, 1], 0)
            .learn([0, 1], 1)
            .learn([1, 0], 1)
            .learn([0, 0], 0);
    }
    b.learn([1, 1], 1).learn([0, 0], 1);

    assert_xor(&b);
}

#[test]
fn confidence_grows_and_holds() {
    let mut b = Beuron::new();
    for _ in 0..100 {
        b.learn([0, 1], 1);
        assert_eq!(b.solve([0, 1]), 1);
    }
    assert_eq!(b.pair([0, 1]), (0.0, 100.0));
}

#[test]
fn limited_learner_forgets_old_evidence() {
    let mut b = Beuron::with_size_limit(10.0);
    for _ in 0..1000 {
        b.learn([1, 0], 0);
    }
    assert_eq!(b.pair([1, 0]), (10.0, 0.0));

    // Each new sample keeps 9/10 of the old weight: ones overtake at the 7th.
    for _ in 0..6 {
        b.learn([1, 0], 1);
    }
    assert_eq!(b.solve([1, 0]), 0);
    b.learn([1, 0], 1);
    assert_eq!(b.solve([1, 0]), 1);
}

#[test]
fn unlimited_learner_does_not_forget() {
    let mut b = Beuron::new();
    for _ in 0..1000 {
        b.learn([1, 0], 0);
    }
    for _ in 0..7 {
        b.learn([1, 0], 1);
    }
    assert_eq!(b.solve([1, 0]), 0);
}

#[test]
fn adapts_when_function_changes() {
    let mut b = Beuron::with_size_limit(8.0);
    for _ in 0..200 {
        for x in INPUTS {
            b.learn(x, BooleanFunction::Conjunction.eval(x));
        }
    }
    assert_eq!(b.function(), BooleanFunction::Conjunction);

    for _ in 0..10 {
        for x in INPUTS {
            b.learn(x, BooleanFunction::Disjunction.eval(x));
        }
    }
    assert_eq!(b.function(), BooleanFunction::Disjunction);
}

#[test]
fn capacity_holds_under_random_stream() {
    let limit = 5.5;
    let mut b = Beuron::with_size_limit(limit);
    for (x, y) in noisy_stream(BooleanFunction::Nand, 5000, 0.3, 11) {
        b.learn(x, y);
        for pair in b.buckets().chunks_exact(2) {
            assert!(pair[0] >= 0.0 && pair[1] >= 0.0);
            assert!(pair[0] + pair[1] <= limit + 1e-9);
        }
    }
}

#[test]
fn recovers_function_from_noisy_stream() {
    for f in [
        BooleanFunction::ExclusiveDisjunction,
        BooleanFunction::MaterialImplication,
        BooleanFunction::NegationA
    ] {
        let mut b = Beuron::with_size_limit(20.0);
        for (x, y) in noisy_stream(f, 2000, 0.1, 42) {
            b.learn(x, y);
        }
        assert_eq!(b.function(), f);
    }
}

#[test]
fn deterministic_for_same_sequence() {
    let stream = noisy_stream(BooleanFunction::Biconditional, 500, 0.2, 5);
    let mut a = Beuron::with_size_limit(6.0);
    let mut b = Beuron::with_size_limit(6.0);

    for &(x, y) in &stream {
        a.learn(x, y);
        b.learn(x, y);
    }

    assert_eq!(a.save(), b.save());
    for x in INPUTS {
        assert_eq!(a.solve(x), b.solve(x));
    }
}

#[test]
fn snapshot_round_trip_after_learning() {
    let mut a = Beuron::with_size_limit(3.0);
    for (x, y) in noisy_stream(BooleanFunction::ProjectionB, 300, 0.25, 8) {
        a.learn(x, y);
    }

    let snapshot = a.save();
    assert_eq!(snapshot.len(), 9);
    assert_eq!(snapshot[8], 3.0);

    let mut b = Beuron::new();
    b.load(&snapshot).unwrap();
    for x in INPUTS {
        assert_eq!(a.solve(x), b.solve(x));
    }

    // Restored learners keep evolving identically.
    a.learn([1, 1], 0);
    b.learn([1, 1], 0);
    assert_eq!(a, b);
}

#[test]
fn shrinking_limit_speeds_adaptation() {
    let mut b = Beuron::new();
    for _ in 0..1000 {
        b.learn([0, 0], 1);
    }
    b.set_size_limit(2.0);
    assert_eq!(b.pair([0, 0]), (0.0, 2.0));

    b.learn([0, 0], 0).learn([0, 0], 0);
    assert_eq!(b.solve([0, 0]), 0);
    assert_eq!(b.pair([0, 0]), (1.5, 0.5));
}

#[test]
fn fit_replays_dataset() {
    let (x, y) = xor_data();
    let mut b = Beuron::with_size_limit(4.0);

    b.fit(&x, &y, 20, 42);

    assert_eq!(b.evaluate(&x, &y), 1.0);
    assert_eq!(b.function(), BooleanFunction::ExclusiveDisjunction);
    for pair in b.buckets().chunks_exact(2) {
        assert!(pair[0] + pair[1] <= 4.0 + 1e-9);
    }
}

#[test]
fn evaluate_needs_matching_lengths() {
    let mut b = Beuron::new();
    b.learn([0, 1], 1);

    assert_eq!(b.evaluate(&[[0, 1]; 4], &[1]), 0.0);
}

#[test]
fn learn_all_matches_chained_learning() {
    let stream = noisy_stream(BooleanFunction::ConverseImplication, 200, 0.2, 13);
    let mut batch = Beuron::with_size_limit(6.0);
    let mut single = Beuron::with_size_limit(6.0);

    batch.learn_all(&stream);
    for &(x, y) in &stream {
        single.learn(x, y);
    }

    assert_eq!(batch, single);
}

#[test]
fn version_is_exposed() {
    assert!(!beuron::VERSION.is_empty());
}

#[test]
fn decorated_learner_matches_plain() {
    let stream = noisy_stream(BooleanFunction::Nor, 400, 0.15, 21);
    let mut plain = Beuron::with_size_limit(5.0);
    let mut traced = Traced::new(Beuron::with_size_limit(5.0));

    for &(x, y) in &stream {
        plain.learn(x, y);
        traced.learn(x, y);
    }

    assert_eq!(traced.samples(), 400);
    assert_eq!(traced.inner(), &plain);
    assert_eq!(traced.solve_batch(&INPUTS), plain.solve_batch(&INPUTS));
}

#[cfg(feature = "serde")]
#[test]
fn serde_round_trip() {
    let mut a = Beuron::with_size_limit(12.0);
    a.learn([0, 1], 1).learn([1, 1], 0);

    let json = serde_json::to_string(&a).unwrap();
    let b: Beuron = serde_json::from_str(&json).unwrap();

    assert_eq!(a, b);
}
