//! A single star.

use paperbuddy_core::Size;
use rand::Rng;

/// Largest star radius in pixels.
pub const MAX_RADIUS: f32 = 1.5;

/// Slowest upward drift in pixels per frame.
pub const MIN_SPEED: f32 = 0.1;

/// Fastest upward drift in pixels per frame (exclusive).
pub const MAX_SPEED: f32 = 0.6;

/// A star drifting upward. Only the position changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position in pixels.
    pub x: f32,
    /// Vertical position in pixels, 0 at the top edge.
    pub y: f32,
    radius: f32,
    speed: f32,
    alpha: f32,
}

impl Particle {
    /// Create a particle with explicit attributes.
    pub fn new(x: f32, y: f32, radius: f32, speed: f32, alpha: f32) -> Self {
        Self {
            x,
            y,
            radius,
            speed,
            alpha,
        }
    }

    /// Create a particle placed uniformly within `size`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, size: Size) -> Self {
        Self {
            x: rng.gen_range(0.0..1.0) * size.width as f32,
            y: rng.gen_range(0.0..1.0) * size.height as f32,
            radius: rng.gen_range(0.0..1.0) * MAX_RADIUS,
            speed: MIN_SPEED + rng.gen_range(0.0..1.0) * (MAX_SPEED - MIN_SPEED),
            alpha: rng.gen_range(0.0..1.0),
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Drift upward by `speed * multiplier`. Once above the top edge the star
    /// re-enters at the bottom at a fresh random column. Returns true on wrap.
    pub fn advance<R: Rng + ?Sized>(&mut self, multiplier: f32, size: Size, rng: &mut R) -> bool {
        self.y -= self.speed * multiplier;
        if self.y < 0.0 {
            self.y = size.height as f32;
            self.x = rng.gen_range(0.0..1.0) * size.width as f32;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_random_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        let size = Size::new(800, 600);
        for _ in 0..1000 {
            let p = Particle::random(&mut rng, size);
            assert!((0.0..800.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!((0.0..=MAX_RADIUS).contains(&p.radius()));
            assert!((MIN_SPEED..=MAX_SPEED).contains(&p.speed()));
            assert!((0.0..=1.0).contains(&p.alpha()));
        }
    }

    #[test]
    fn test_random_on_empty_size() {
        let mut rng = StdRng::seed_from_u64(2);
        let p = Particle::random(&mut rng, Size::new(0, 0));
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_advance_drifts_up() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::new(10.0, 5.0, 1.0, 0.5, 0.8);
        assert!(!p.advance(1.0, Size::new(100, 50), &mut rng));
        assert_eq!(p.y, 4.5);
        assert_eq!(p.x, 10.0);
    }

    #[test]
    fn test_advance_at_zero_does_not_wrap() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut p = Particle::new(10.0, 0.5, 1.0, 0.5, 0.8);
        assert!(!p.advance(1.0, Size::new(100, 50), &mut rng));
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_advance_wraps_to_bottom() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut p = Particle::new(10.0, 0.2, 1.0, 0.5, 0.8);
        assert!(p.advance(1.0, Size::new(100, 50), &mut rng));
        assert_eq!(p.y, 50.0);
        assert!((0.0..100.0).contains(&p.x));
        assert_eq!(p.radius(), 1.0);
        assert_eq!(p.speed(), 0.5);
        assert_eq!(p.alpha(), 0.8);
    }

    #[test]
    fn test_multiplier_scales_drift() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut p = Particle::new(0.0, 10.0, 1.0, 0.5, 1.0);
        p.advance(2.0, Size::new(100, 50), &mut rng);
        assert_eq!(p.y, 9.0);
        p.advance(0.5, Size::new(100, 50), &mut rng);
        assert_eq!(p.y, 8.75);
    }
}
