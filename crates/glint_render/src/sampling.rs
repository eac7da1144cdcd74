//! Random sampling helpers shared by materials and the camera lens.
//!
//! Every stochastic function takes an explicit RNG so rendering stays
//! reproducible under a fixed seed and tiles can carry private streams.

use glint_math::Vec3;
use rand::{Rng, RngCore};

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    (&mut *rng).gen()
}

/// Sample a uniformly distributed point inside the unit ball.
///
/// Rejection sampling: draw from the cube [-1, 1]^3 until the point
/// lands inside the sphere.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), gen_f32(rng)) - Vec3::ONE;
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Sample a uniformly distributed point inside the unit disk (z = 0).
///
/// Used for lens aperture sampling.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = 2.0 * Vec3::new(gen_f32(rng), gen_f32(rng), 0.0) - Vec3::new(1.0, 1.0, 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
