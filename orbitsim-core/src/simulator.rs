use crate::error::{Result, SimError};
use crate::integrator::{step, sub_step_count, SUB_STEP};
use crate::particle::Particle;
use glam::DVec2;
use log::{debug, trace};

/// Advances an ordered, fixed set of particles through time.
///
/// The simulator owns its particles. Renderers read them through
/// [`Simulator::particles`] after each [`Simulator::advance`]; nothing outside
/// the simulator can mutate them while it is alive.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    particles: Vec<Particle>,
}

impl Simulator {
    pub fn new(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Current particle states, in construction order
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Snapshot of the current `(x, y)` pairs
    pub fn positions(&self) -> Vec<DVec2> {
        self.particles.iter().map(Particle::position).collect()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Give the particle storage back to the caller
    pub fn into_particles(self) -> Vec<Particle> {
        self.particles
    }

    /// Advance every particle by `duration` time units and return the number of
    /// sub-steps taken.
    ///
    /// Time is covered in `floor(duration / SUB_STEP)` fixed sub-steps; any
    /// leftover finer than one sub-step is dropped and not carried into the next
    /// call. Within a sub-step particles are updated in construction order.
    ///
    /// Fails before touching any particle if `duration` is negative or not finite,
    /// if a particle has zero (or non-finite) radius, or if its angular velocity
    /// is not finite. A particle that starts with a nonzero radius only moves
    /// outward, so the up-front check covers every sub-step and a failed call
    /// leaves the state unchanged.
    pub fn advance(&mut self, duration: f64) -> Result<u64> {
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimError::InvalidDuration(duration));
        }
        self.check_particles()?;

        let steps = sub_step_count(duration);
        debug!(
            "advancing {} particles by {} ({} sub-steps, {:e} dropped)",
            self.particles.len(),
            duration,
            steps,
            duration - steps as f64 * SUB_STEP
        );

        for _ in 0..steps {
            for particle in self.particles.iter_mut() {
                step(particle);
            }
        }

        trace!("positions after advance: {:?}", self.positions());
        Ok(steps)
    }

    fn check_particles(&self) -> Result<()> {
        for (index, particle) in self.particles.iter().enumerate() {
            let r = particle.radius();
            if r == 0.0 || !r.is_finite() {
                return Err(SimError::DegenerateParticle {
                    index,
                    x: particle.x,
                    y: particle.y,
                });
            }
            if !particle.angular_velocity.is_finite() {
                return Err(SimError::InvalidAngularVelocity {
                    index,
                    angular_velocity: particle.angular_velocity,
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<Particle>> for Simulator {
    fn from(particles: Vec<Particle>) -> Self {
        Self::new(particles)
    }
}

impl FromIterator<Particle> for Simulator {
    fn from_iter<I: IntoIterator<Item = Particle>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
