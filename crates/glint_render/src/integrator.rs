//! Core path tracing integrator.
//!
//! Estimates per-pixel radiance by Monte Carlo: jittered camera rays,
//! material scattering with a running attenuation product, and a sky
//! gradient for rays that escape the scene.

use crate::{gen_f32, Camera, Color, Hittable};
use glint_math::{Interval, Ray, Vec3};
use rand::RngCore;

/// Self-intersection cutoff: hits closer than this are ignored so a
/// scattered ray does not re-hit its own origin ("shadow acne").
pub const T_MIN: f32 = 0.001;

/// Far cutoff for hit queries. A large finite sentinel, consistent with
/// the scene's coordinate scale, rather than infinity.
pub const T_MAX: f32 = 1.0e5;

/// Render configuration.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
    /// Base seed for the per-tile RNG streams
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 8,
            seed: 0,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Written as a loop carrying the attenuation product instead of true
/// recursion, so stack depth is constant. Semantics per bounce:
/// - miss: return the accumulated throughput times the sky gradient
///   (this still applies to the ray cast after the final bounce);
/// - hit past the bounce budget: black;
/// - absorption: black;
/// - scatter: multiply throughput by the attenuation and continue.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut ray = *ray;
    let mut throughput = Vec3::ONE;
    let mut depth = 0;

    loop {
        let Some(rec) = world.hit(&ray, Interval::new(T_MIN, T_MAX)) else {
            return throughput * sky_gradient(&ray);
        };

        if depth >= config.max_depth {
            return Color::ZERO;
        }

        let Some(result) = rec.material.scatter(&ray, &rec, rng) else {
            return Color::ZERO;
        };

        throughput *= result.attenuation;
        ray = result.scattered;
        depth += 1;
    }
}

/// Background color for an escaped ray: a vertical blend from white at
/// the horizon to sky blue overhead.
pub fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let t = 0.5 * (unit_direction.y + 1.0);
    (1.0 - t) * Color::ONE + t * Color::new(0.5, 0.7, 1.0)
}

/// Render a single pixel: average jittered samples, then gamma-correct.
///
/// `y` counts rows from the image top; the image-plane `t` coordinate
/// counts from the bottom, hence the flip.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut color = Color::ZERO;
    let j = height - 1 - y;

    for _ in 0..config.samples_per_pixel {
        let s = (x as f32 + gen_f32(rng)) / width as f32;
        let t = (j as f32 + gen_f32(rng)) / height as f32;
        let ray = camera.get_ray(s, t, rng);
        color += ray_color(&ray, world, config, rng);
    }

    gamma_correct(color / config.samples_per_pixel as f32)
}

/// Gamma 2.0 encoding: component-wise square root of a linear color.
#[inline]
fn gamma_correct(color: Color) -> Color {
    Color::new(color.x.sqrt(), color.y.sqrt(), color.z.sqrt())
}
