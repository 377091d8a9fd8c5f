//! Test helper utilities for orbitsim tests

use crate::error::SimError;
use crate::particle::Particle;
use crate::simulator::Simulator;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// The three-particle scenario with known positions after `advance(0.1)`
pub fn reference_particles() -> Vec<Particle> {
    vec![
        Particle::new(0.3, 0.5, 1.0),
        Particle::new(0.0, -0.5, -1.0),
        Particle::new(-0.1, -0.4, 3.0),
    ]
}

/// Expected `(x, y)` of each reference particle after `advance(0.1)`
pub const REFERENCE_AFTER_0_1: [(f64, f64); 3] = [
    (0.210269, 0.543863),
    (-0.099334, -0.490034),
    (0.191358, -0.365227),
];

/// Run a fresh simulator over `particles` for `duration` and return the final states
pub fn run_particles(particles: Vec<Particle>, duration: f64) -> Result<Vec<Particle>, SimError> {
    let mut sim = Simulator::new(particles);
    sim.advance(duration)?;
    Ok(sim.into_particles())
}

/// Compare positions of two particle sets with tolerance
pub fn positions_approx_equal(a: &[Particle], b: &[Particle], tol: f64) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(p, q)| approx_eq(p.x, q.x, tol) && approx_eq(p.y, q.y, tol))
}

/// Compare positions of two particle sets bit for bit
pub fn positions_bit_equal(a: &[Particle], b: &[Particle]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(p, q)| p.x.to_bits() == q.x.to_bits() && p.y.to_bits() == q.y.to_bits())
}
