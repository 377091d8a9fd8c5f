use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while advancing a simulation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// The particle sits at the origin (or its radius is not finite), so it has no
    /// tangential direction
    #[error("particle {index} at ({x}, {y}) has no defined tangential direction")]
    DegenerateParticle { index: usize, x: f64, y: f64 },

    /// The particle's angular velocity is NaN or infinite
    #[error("particle {index} has non-finite angular velocity {angular_velocity}")]
    InvalidAngularVelocity { index: usize, angular_velocity: f64 },

    /// The duration is negative, NaN or infinite
    #[error("duration must be a finite non-negative number, got {0}")]
    InvalidDuration(f64),
}

impl SimError {
    /// Index of the offending particle, if the error concerns one
    pub fn particle_index(&self) -> Option<usize> {
        match self {
            Self::DegenerateParticle { index, .. }
            | Self::InvalidAngularVelocity { index, .. } => Some(*index),
            Self::InvalidDuration(_) => None,
        }
    }
}
