//! Surface scattering models.
//!
//! Materials form a closed set, so scattering is dispatched by a match on
//! a tagged enum instead of a trait object. A single `Material` value is
//! shared across spheres through an `Arc`.

use crate::{gen_f32, random_in_unit_sphere, HitRecord, SceneError};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Outcome of a successful scattering event.
///
/// Absorption (a terminated ray) is `None` from [`Material::scatter`],
/// not a zeroed result.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Per-channel color multiplier for the scattered ray's contribution
    pub attenuation: Vec3,
    /// The outgoing ray, originating at the hit point
    pub scattered: Ray,
}

/// A surface material.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Diffuse surface: bounces into the hemisphere around the normal.
    Lambertian { albedo: Vec3 },
    /// Specular surface: mirror reflection perturbed by `fuzz`.
    Metal { albedo: Vec3, fuzz: f32 },
    /// Clear refractive surface (glass, water); never absorbs.
    Dielectric { ref_idx: f32 },
}

impl Material {
    /// Create a diffuse material with the given albedo color.
    pub fn lambertian(albedo: Vec3) -> Self {
        Material::Lambertian { albedo }
    }

    /// Create a metal material.
    ///
    /// `fuzz` is the roughness: 0.0 is a perfect mirror, 1.0 very rough.
    /// Values outside [0, 1] are rejected.
    pub fn metal(albedo: Vec3, fuzz: f32) -> Result<Self, SceneError> {
        if !(0.0..=1.0).contains(&fuzz) {
            return Err(SceneError::InvalidFuzz(fuzz));
        }
        Ok(Material::Metal { albedo, fuzz })
    }

    /// Create a dielectric material from its index of refraction
    /// (1.0 = air, 1.5 = glass, 2.4 = diamond).
    pub fn dielectric(ref_idx: f32) -> Result<Self, SceneError> {
        if !ref_idx.is_finite() || ref_idx <= 0.0 {
            return Err(SceneError::InvalidRefractiveIndex(ref_idx));
        }
        Ok(Material::Dielectric { ref_idx })
    }

    /// Scatter an incoming ray at a hit point.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(
        &self,
        ray_in: &Ray,
        rec: &HitRecord<'_>,
        rng: &mut dyn RngCore,
    ) -> Option<ScatterResult> {
        match self {
            Material::Lambertian { albedo } => {
                let target = rec.p + rec.normal + random_in_unit_sphere(rng);
                Some(ScatterResult {
                    attenuation: *albedo,
                    scattered: Ray::new(rec.p, target - rec.p),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction.normalize(), rec.normal);
                let scattered = Ray::new(rec.p, reflected + *fuzz * random_in_unit_sphere(rng));
                // The sign test uses the post-fuzz direction: high fuzz can
                // push an otherwise valid reflection below the horizon, and
                // that ray is absorbed.
                if scattered.direction.dot(rec.normal) > 0.0 {
                    Some(ScatterResult {
                        attenuation: *albedo,
                        scattered,
                    })
                } else {
                    None
                }
            }
            Material::Dielectric { ref_idx } => {
                let reflected = reflect(ray_in.direction.normalize(), rec.normal);
                let d_dot_n = ray_in.direction.dot(rec.normal);

                // rec.normal is the raw outward normal, so its sign against
                // the ray direction tells entering from exiting.
                let (outward_normal, ni_over_nt, cosine) = if d_dot_n > 0.0 {
                    (
                        -rec.normal,
                        *ref_idx,
                        ref_idx * d_dot_n / ray_in.direction.length_squared(),
                    )
                } else {
                    (
                        rec.normal,
                        1.0 / ref_idx,
                        -d_dot_n / ray_in.direction.length_squared(),
                    )
                };

                let refracted = refract(ray_in.direction, outward_normal, ni_over_nt);
                let reflect_prob = match refracted {
                    Some(_) => schlick(cosine, *ref_idx),
                    // Total internal reflection
                    None => 1.0,
                };

                let direction = match refracted {
                    Some(r) if gen_f32(rng) >= reflect_prob => r,
                    _ => reflected,
                };

                Some(ScatterResult {
                    attenuation: Vec3::ONE,
                    scattered: Ray::new(rec.p, direction),
                })
            }
        }
    }
}

/// Reflect `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract `v` through a surface with unit normal `n`.
///
/// Returns `None` when refraction is infeasible (total internal
/// reflection).
pub fn refract(v: Vec3, n: Vec3, ni_over_nt: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let discriminant = 1.0 - ni_over_nt * ni_over_nt * (1.0 - dt * dt);
    if discriminant > 0.0 {
        Some(ni_over_nt * (uv - n * dt) - n * discriminant.sqrt())
    } else {
        None
    }
}

/// Schlick's approximation for Fresnel reflectance.
#[inline]
pub fn schlick(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hit_at<'a>(p: Vec3, normal: Vec3, material: &'a Material) -> HitRecord<'a> {
        HitRecord {
            t: 1.0,
            p,
            normal,
            material,
        }
    }

    #[test]
    fn test_lambertian_always_scatters() {
        let material = Material::lambertian(Vec3::new(0.8, 0.3, 0.3));
        let rec = hit_at(Vec3::new(0.0, 0.0, -0.5), Vec3::Z, &material);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..100 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Vec3::new(0.8, 0.3, 0.3));
            assert_eq!(result.scattered.origin, rec.p);
        }
    }

    #[test]
    fn test_metal_mirror_reflection() {
        let material = Material::metal(Vec3::new(0.7, 0.6, 0.5), 0.0).unwrap();
        let rec = hit_at(Vec3::ZERO, Vec3::Y, &material);
        let incoming = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(0);

        let result = material.scatter(&incoming, &rec, &mut rng).unwrap();
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((result.scattered.direction - expected).length() < 1e-4);
    }

    #[test]
    fn test_metal_absorbs_below_horizon() {
        let material = Material::metal(Vec3::ONE, 0.0).unwrap();
        let rec = hit_at(Vec3::ZERO, Vec3::Z, &material);
        // Incoming along the normal (a back-face hit): the reflection
        // points into the surface and the ray is absorbed.
        let incoming = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::Z);
        let mut rng = StdRng::seed_from_u64(0);

        assert!(material.scatter(&incoming, &rec, &mut rng).is_none());
    }

    #[test]
    fn test_metal_scatter_stays_above_horizon() {
        let material = Material::metal(Vec3::ONE, 0.9).unwrap();
        let rec = hit_at(Vec3::ZERO, Vec3::Y, &material);
        let incoming = Ray::new(Vec3::new(-1.0, 1.0, 0.0), Vec3::new(1.0, -1.0, 0.0));
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..200 {
            if let Some(result) = material.scatter(&incoming, &rec, &mut rng) {
                assert!(result.scattered.direction.dot(rec.normal) > 0.0);
            }
        }
    }

    #[test]
    fn test_dielectric_always_scatters() {
        let material = Material::dielectric(1.5).unwrap();
        let rec = hit_at(Vec3::new(0.0, 0.0, -0.5), Vec3::Z, &material);
        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..100 {
            let result = material.scatter(&ray, &rec, &mut rng).unwrap();
            assert_eq!(result.attenuation, Vec3::ONE);
        }
    }

    #[test]
    fn test_dielectric_total_internal_reflection() {
        let material = Material::dielectric(1.5).unwrap();
        // Exiting hit (direction and outward normal agree) at a grazing
        // angle past the critical angle: must always reflect.
        let rec = hit_at(Vec3::ZERO, Vec3::Z, &material);
        let direction = Vec3::new(0.75_f32.sqrt(), 0.0, 0.5);
        let incoming = Ray::new(Vec3::ZERO, direction);
        let mut rng = StdRng::seed_from_u64(3);

        let expected = reflect(direction.normalize(), Vec3::Z);
        for _ in 0..50 {
            let result = material.scatter(&incoming, &rec, &mut rng).unwrap();
            assert!((result.scattered.direction - expected).length() < 1e-4);
        }
    }

    #[test]
    fn test_refract_index_one_is_pass_through() {
        // ref_idx 1.0 means no optical boundary: the refracted direction
        // equals the (unit) incoming direction.
        let v = Vec3::new(0.3, -0.8, -0.6);
        let n = Vec3::Y;
        let refracted = refract(v, n, 1.0).unwrap();
        assert!((refracted - v.normalize()).length() < 1e-4);
    }

    #[test]
    fn test_reflect_preserves_unit_length() {
        let d = Vec3::new(0.1, -2.0, 3.5);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = reflect(d.normalize(), n);
        assert!((r.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_schlick_r0_at_normal_incidence() {
        let r0 = ((1.0 - 1.5_f32) / (1.0 + 1.5)).powi(2);
        assert!((schlick(1.0, 1.5) - r0).abs() < 1e-6);
    }

    #[test]
    fn test_schlick_monotonic_in_grazing_angle() {
        let mut last = schlick(1.0, 1.5);
        for i in 1..=10 {
            let cosine = 1.0 - i as f32 * 0.1;
            let next = schlick(cosine, 1.5);
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        assert_eq!(
            Material::metal(Vec3::ONE, 1.5).unwrap_err(),
            SceneError::InvalidFuzz(1.5)
        );
        assert!(Material::metal(Vec3::ONE, -0.1).is_err());
        assert!(Material::dielectric(0.0).is_err());
        assert!(Material::dielectric(-1.5).is_err());
        assert!(Material::dielectric(f32::NAN).is_err());
    }
}
