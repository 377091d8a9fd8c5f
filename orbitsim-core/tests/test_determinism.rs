//! Determinism tests - ensure the same input produces identical outputs

use orbitsim_core::tests::test_helpers::{
    positions_bit_equal, reference_particles, run_particles,
};
use orbitsim_core::Particle;

#[test]
fn test_reference_determinism() {
    let result1 = run_particles(reference_particles(), 0.1).expect("First run failed");
    let result2 = run_particles(reference_particles(), 0.1).expect("Second run failed");

    assert!(
        positions_bit_equal(&result1, &result2),
        "Running the same scenario twice should produce identical results"
    );
}

#[test]
fn test_multiple_runs_determinism() {
    let particles = vec![
        Particle::new(0.9, 0.0, 5.0),
        Particle::new(-0.2, 0.7, -2.5),
        Particle::new(0.01, -0.01, 0.5),
    ];

    let results: Vec<_> = (0..5)
        .map(|_| run_particles(particles.clone(), 0.05).expect("Run failed"))
        .collect();

    for i in 1..results.len() {
        assert!(
            positions_bit_equal(&results[0], &results[i]),
            "Run {} should match run 0",
            i
        );
    }
}
