//! Hittable trait and HitRecord for ray-surface intersection.

use crate::Material;
use glint_math::{Interval, Ray, Vec3};

/// Record of a ray-surface intersection.
///
/// Absence of a hit is represented by `Option::None` at the query site,
/// never by a zeroed record.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward-facing unit normal, `(p - center) / radius` for spheres.
    ///
    /// Never flipped toward the ray: for a hit from inside a sphere it
    /// points away from the ray. The dielectric scatter relies on this
    /// raw convention to tell entering from exiting.
    pub normal: Vec3,
    /// Material at the intersection point
    pub material: &'a Material,
}

/// Trait for surfaces that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Find the nearest intersection with `ray` whose parameter lies
    /// strictly inside `ray_t`, or `None` if the ray misses.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>>;
}

/// An ordered collection of surfaces, queried as a whole.
pub struct SurfaceList {
    objects: Vec<Box<dyn Hittable>>,
}

impl SurfaceList {
    /// Create a new empty surface list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add a surface to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Get the number of surfaces.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl Default for SurfaceList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for SurfaceList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest_so_far = ray_t.max;
        let mut closest_hit = None;

        // Each probe narrows its own t_max to the nearest t found so far,
        // so a single pass yields the nearest hit.
        for object in &self.objects {
            if let Some(hit) = object.hit(ray, Interval::new(ray_t.min, closest_so_far)) {
                closest_so_far = hit.t;
                closest_hit = Some(hit);
            }
        }

        closest_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};
    use std::sync::Arc;

    fn gray() -> Arc<Material> {
        Arc::new(Material::lambertian(Vec3::splat(0.5)))
    }

    #[test]
    fn test_empty_list_never_hits() {
        let list = SurfaceList::new();
        assert!(list.is_empty());

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        assert!(list.hit(&ray, Interval::new(0.001, 1.0e5)).is_none());
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut list = SurfaceList::new();
        list.add(Box::new(
            Sphere::new(Vec3::new(0.0, 0.0, -10.0), 0.5, gray()).unwrap(),
        ));
        list.add(Box::new(
            Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, gray()).unwrap(),
        ));
        assert_eq!(list.len(), 2);

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let hit = list.hit(&ray, Interval::new(0.001, 1.0e5)).unwrap();

        // The near sphere at z=-2 shadows the far one
        assert!((hit.t - 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_order_does_not_change_result() {
        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, gray()).unwrap();
        let far = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 0.5, gray()).unwrap();

        let mut a = SurfaceList::new();
        a.add(Box::new(near));
        a.add(Box::new(far));

        let near = Sphere::new(Vec3::new(0.0, 0.0, -2.0), 0.5, gray()).unwrap();
        let far = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 0.5, gray()).unwrap();

        let mut b = SurfaceList::new();
        b.add(Box::new(far));
        b.add(Box::new(near));

        let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
        let range = Interval::new(0.001, 1.0e5);
        let ta = a.hit(&ray, range).unwrap().t;
        let tb = b.hit(&ray, range).unwrap().t;
        assert_eq!(ta, tb);
    }
}
