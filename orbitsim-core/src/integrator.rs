use crate::particle::Particle;

/// Fixed integration sub-step, in simulation time units
pub const SUB_STEP: f64 = 1e-5;

/// Number of whole sub-steps that fit in `duration`.
///
/// The remainder is dropped, not carried over to a later call. Callers must
/// reject negative or NaN durations first.
pub fn sub_step_count(duration: f64) -> u64 {
    (duration / SUB_STEP).floor() as u64
}

/// Move one particle along its tangent for a single sub-step (explicit Euler).
///
/// The particle must have a nonzero finite radius.
pub fn step(particle: &mut Particle) {
    let r = (particle.x * particle.x + particle.y * particle.y).sqrt();
    let vx = -particle.y / r;
    let vy = particle.x / r;
    let dx = SUB_STEP * particle.angular_velocity * vx;
    let dy = SUB_STEP * particle.angular_velocity * vy;
    particle.x += dx;
    particle.y += dy;
}
