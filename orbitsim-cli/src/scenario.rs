//! Particle arguments for the command line

use orbitsim_core::Particle;
use std::str::FromStr;

/// A particle given on the command line as `X,Y,OMEGA`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleArg(pub Particle);

impl FromStr for ParticleArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').map(str::trim).collect();
        if fields.len() != 3 {
            return Err(format!("expected X,Y,OMEGA but got '{}'", s));
        }

        let mut values = [0.0; 3];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field
                .parse::<f64>()
                .map_err(|e| format!("invalid number '{}': {}", field, e))?;
        }

        Ok(Self(Particle::new(values[0], values[1], values[2])))
    }
}

/// The scene animated by default
pub fn demo_particles() -> Vec<Particle> {
    vec![
        Particle::new(0.3, 0.5, 1.0),
        Particle::new(0.0, -0.5, -1.0),
        Particle::new(-0.1, -0.4, 3.0),
    ]
}

/// Particles from the command line, or the demo scene if none were given
pub fn particles_or_default(args: &[ParticleArg]) -> Vec<Particle> {
    if args.is_empty() {
        demo_particles()
    } else {
        args.iter().map(|arg| arg.0).collect()
    }
}
