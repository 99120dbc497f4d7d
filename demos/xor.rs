//! XOR learning and adaptation example.
//!
//! Run with `RUST_LOG=debug` to see when predictions flip.

use beuron::{Beuron, BooleanFunction, Learner, Traced};

fn main() {
    env_logger::builder().format_timestamp(None).init();

    let x = vec![[0, 0], [0, 1], [1, 0], [1, 1]];
    let y = vec![0, 1, 1, 0];

    let mut learner = Traced::new(Beuron::with_size_limit(4.0));

    println!("Learning XOR...");
    learner.fit(&x, &y, 3, 42);

    println!("\nPredictions:");
    for (xi, &yi) in x.iter().zip(y.iter()) {
        let pred = learner.solve(*xi);
        let status = if pred == yi { "OK" } else { "WRONG" };
        println!("  {:?} -> {} (expected: {}) {}", xi, pred, yi, status);
    }
    println!("\nLearned function: {}", learner.function());

    println!("\nSwitching target to logical disjunction...");
    let target = BooleanFunction::Disjunction;
    let mut rounds = 0;
    while learner.function() != target {
        for xi in &x {
            learner.learn(*xi, target.eval(*xi));
        }
        rounds += 1;
    }
    println!("Adapted after {} rounds ({} samples total)", rounds, learner.samples());

    let snapshot = learner.save();
    println!("\nSnapshot: {:?}", snapshot);
}
