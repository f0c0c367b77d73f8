//! Noise source for the small waves.
//!
//! The evaluator only needs "some smooth 3D noise in roughly [-1, 1]", so the
//! source is a trait: Perlin noise by default, any closure in tests.

use ::noise::{NoiseFn, Perlin};

/// 3D noise sampled at (x, z, time)
pub trait WaveNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Seeded Perlin noise
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl WaveNoise for PerlinNoise {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.perlin.get([x, y, z])
    }
}

impl<F> WaveNoise for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}
