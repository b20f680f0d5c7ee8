//! Deterministic star scatter for the backdrop.

use glam::Vec3;
use rand::prelude::*;

/// Scatter `count` stars uniformly within +-spread/2 on each axis.
/// Seeded so a scene renders the same sky every visit.
pub fn scatter(count: usize, spread: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
                (rng.gen::<f32>() - 0.5) * spread,
            )
        })
        .collect()
}
