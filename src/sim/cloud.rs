//! Decorative background clouds

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Vertical band clouds are drawn in (top edge)
const CLOUD_Y_MIN: f32 = 20.0;
const CLOUD_Y_MAX: f32 = 120.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// Pixels per tick, independent of game speed
    pub speed: f32,
}

impl Cloud {
    fn random<R: Rng + ?Sized>(canvas_width: f32, rng: &mut R) -> Self {
        Self {
            x: rng.random_range(0.0..canvas_width),
            y: rng.random_range(CLOUD_Y_MIN..CLOUD_Y_MAX),
            width: rng.random_range(30.0..80.0),
            speed: rng.random_range(0.5..1.5),
        }
    }

    /// Drift left; wrap to the right edge at a new height once fully gone
    pub fn drift<R: Rng + ?Sized>(&mut self, canvas_width: f32, rng: &mut R) {
        self.x -= self.speed;
        if self.x + self.width < 0.0 {
            self.x = canvas_width;
            self.y = rng.random_range(CLOUD_Y_MIN..CLOUD_Y_MAX);
        }
    }
}

/// Scatter `count` clouds across the sky
pub fn scatter<R: Rng + ?Sized>(count: usize, canvas_width: f32, rng: &mut R) -> Vec<Cloud> {
    (0..count).map(|_| Cloud::random(canvas_width, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_scatter_within_sky() {
        let mut rng = Pcg32::seed_from_u64(5);
        let clouds = scatter(3, 800.0, &mut rng);
        assert_eq!(clouds.len(), 3);
        for c in &clouds {
            assert!((0.0..800.0).contains(&c.x));
            assert!((20.0..120.0).contains(&c.y));
            assert!((0.5..1.5).contains(&c.speed));
        }
    }

    #[test]
    fn test_cloud_wraps_to_right_edge() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut cloud = Cloud {
            x: -49.5,
            y: 30.0,
            width: 50.0,
            speed: 1.0,
        };
        cloud.drift(800.0, &mut rng);
        assert_eq!(cloud.x, 800.0);
        assert!((20.0..120.0).contains(&cloud.y));
    }

    #[test]
    fn test_cloud_drifts_left() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut cloud = Cloud {
            x: 300.0,
            y: 30.0,
            width: 50.0,
            speed: 0.75,
        };
        cloud.drift(800.0, &mut rng);
        assert_eq!(cloud.x, 299.25);
        assert_eq!(cloud.y, 30.0);
    }
}
