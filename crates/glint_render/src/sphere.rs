//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material, SceneError,
};
use glint_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// Materials are shared by reference; many spheres can point at the same
/// `Material`.
#[derive(Debug)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// The radius must be finite and positive.
    pub fn new(center: Vec3, radius: f32, material: Arc<Material>) -> Result<Self, SceneError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = 2.0 * oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();

        // Smaller root first: nearest surface, and correct for rays that
        // start inside the sphere.
        let mut root = (-b - sqrt_d) / (2.0 * a);
        if !ray_t.surrounds(root) {
            root = (-b + sqrt_d) / (2.0 * a);
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
            material: self.material.as_ref(),
        })
    }
}
