/// A parametric interval along a ray.
///
/// Intersection tests accept a root only when it lies strictly inside
/// the interval, see [`Interval::surrounds`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns true if x is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Clamps x to be within the interval [min, max].
    pub fn clamp(&self, x: f32) -> f32 {
        x.clamp(self.min, self.max)
    }

    /// Same interval with its upper bound pulled in to `max`.
    pub fn with_max(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }

    /// Range of an 8-bit color channel.
    pub const CHANNEL: Interval = Interval {
        min: 0.0,
        max: 255.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_surrounds() {
        let interval = Interval::new(0.0, 10.0);

        // Endpoints are excluded
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(10.0));

        assert!(interval.surrounds(5.0));
        assert!(interval.surrounds(0.1));
        assert!(!interval.surrounds(-0.1));
        assert!(!interval.surrounds(10.1));
    }

    #[test]
    fn test_interval_clamp() {
        assert_eq!(Interval::CHANNEL.clamp(-5.0), 0.0);
        assert_eq!(Interval::CHANNEL.clamp(128.0), 128.0);
        assert_eq!(Interval::CHANNEL.clamp(300.0), 255.0);
    }

    #[test]
    fn test_interval_with_max() {
        let shrunk = Interval::new(0.001, 1.0e6).with_max(2.5);
        assert_eq!(shrunk.min, 0.001);
        assert_eq!(shrunk.max, 2.5);
    }
}
