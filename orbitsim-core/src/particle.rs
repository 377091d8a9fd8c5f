use glam::DVec2;

/// A point particle rotating about the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    /// Radians per unit time; positive is counter-clockwise
    pub angular_velocity: f64,
}

impl Particle {
    /// Values are stored verbatim. A particle at the origin is accepted here and
    /// rejected by `Simulator::advance`.
    pub fn new(x: f64, y: f64, angular_velocity: f64) -> Self {
        Self {
            x,
            y,
            angular_velocity,
        }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_values_verbatim() {
        let p = Particle::new(0.3, -0.5, -2.0);
        assert_eq!(p.x, 0.3);
        assert_eq!(p.y, -0.5);
        assert_eq!(p.angular_velocity, -2.0);
    }

    #[test]
    fn test_zero_radius_is_accepted_at_construction() {
        let p = Particle::new(0.0, 0.0, 1.0);
        assert_eq!(p.radius(), 0.0);
    }

    #[test]
    fn test_radius_and_position() {
        let p = Particle::new(3.0, 4.0, 1.0);
        assert_eq!(p.radius(), 5.0);
        assert_eq!(p.position(), DVec2::new(3.0, 4.0));
        assert_eq!(p.position().length(), p.radius());
    }
}
