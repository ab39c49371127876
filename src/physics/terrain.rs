use noise::{NoiseFn, OpenSimplex};

use crate::physics::TerrainQuery;

/// Terrain at a constant height.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatTerrain {
    pub height: f64,
}

impl FlatTerrain {
    pub fn new(height: f64) -> Self {
        Self { height }
    }
}

impl TerrainQuery for FlatTerrain {
    fn height_at(&self, _x: f64, _z: f64) -> f64 {
        self.height
    }
}

/// Rolling terrain built from octaves of OpenSimplex noise.
pub struct NoiseTerrain {
    noise: OpenSimplex,
    /// Horizontal feature size (m).
    pub scale: f64,
    /// Peak deviation from `base_height` (m).
    pub amplitude: f64,
    pub base_height: f64,
    pub octaves: u32,
    pub persistence: f64,
    pub lacunarity: f64,
}

impl NoiseTerrain {
    pub fn new(seed: u64) -> Self {
        Self {
            noise: OpenSimplex::new(seed as u32),
            scale: 800.0,
            amplitude: 120.0,
            base_height: 0.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    // Normalised fractal noise in [-1, 1]
    fn sample(&self, x: f64, z: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut value = 0.0;
        let mut weight = 0.0;

        for _ in 0..self.octaves {
            let sample = [x * frequency / self.scale, z * frequency / self.scale];
            value += self.noise.get(sample) * amplitude;
            weight += amplitude;
            amplitude *= self.persistence;
            frequency *= self.lacunarity;
        }

        if weight > 0.0 {
            value / weight
        } else {
            0.0
        }
    }
}

impl TerrainQuery for NoiseTerrain {
    fn height_at(&self, x: f64, z: f64) -> f64 {
        self.base_height + self.amplitude * self.sample(x, z)
    }
}
