//! Camera for ray generation with depth of field.

use crate::{random_in_unit_disk, Ray};
use glint_math::Vec3;
use rand::RngCore;

/// View parameters, consumed once at camera construction.
#[derive(Debug, Clone, Copy)]
pub struct CameraConfig {
    pub look_from: Vec3,
    pub look_at: Vec3,
    pub vup: Vec3,
    /// Vertical field of view in degrees
    pub vfov: f32,
    /// Width / height of the image
    pub aspect: f32,
    /// Lens diameter; 0.0 disables depth of field
    pub aperture: f32,
    /// Distance from the camera to the plane of perfect focus
    pub focus_dist: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            look_from: Vec3::ZERO,
            look_at: Vec3::NEG_Z,
            vup: Vec3::Y,
            vfov: 90.0,
            aspect: 16.0 / 9.0,
            aperture: 0.0,
            focus_dist: 1.0,
        }
    }
}

/// Camera for generating rays into the scene.
///
/// All derived vectors are computed once at construction and constant
/// thereafter.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f32,
}

impl Camera {
    /// Build a camera from view parameters.
    pub fn new(config: &CameraConfig) -> Self {
        let lens_radius = config.aperture / 2.0;

        let theta = config.vfov.to_radians();
        let half_height = (theta / 2.0).tan();
        let half_width = config.aspect * half_height;

        // Orthonormal basis: w looks backward, u right, v up
        let w = (config.look_from - config.look_at).normalize();
        let u = config.vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = config.look_from;

        // Image plane spans are scaled by focus_dist to place the focal
        // plane; lens offsets then blur everything off that plane.
        let lower_left_corner = origin
            - half_width * config.focus_dist * u
            - half_height * config.focus_dist * v
            - config.focus_dist * w;
        let horizontal = 2.0 * half_width * config.focus_dist * u;
        let vertical = 2.0 * half_height * config.focus_dist * v;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius,
        }
    }

    /// Generate a ray through image-plane coordinates (s, t) in [0, 1].
    ///
    /// The lens disk is sampled once per ray, which is what averages into
    /// defocus blur over many samples.
    pub fn get_ray(&self, s: f32, t: f32, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;
        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_center_ray_points_at_target() {
        let camera = Camera::new(&CameraConfig {
            look_from: Vec3::ZERO,
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::Y,
            vfov: 90.0,
            aspect: 1.0,
            aperture: 0.0,
            focus_dist: 1.0,
        });
        let mut rng = StdRng::seed_from_u64(0);

        let ray = camera.get_ray(0.5, 0.5, &mut rng);
        assert_eq!(ray.origin, Vec3::ZERO);
        assert!((ray.direction.normalize() - Vec3::NEG_Z).length() < 1e-4);
    }

    #[test]
    fn test_zero_aperture_rays_share_origin() {
        let camera = Camera::new(&CameraConfig {
            look_from: Vec3::new(3.0, 2.0, 1.0),
            ..CameraConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(1);

        for i in 0..10 {
            let ray = camera.get_ray(i as f32 / 10.0, 0.3, &mut rng);
            assert_eq!(ray.origin, Vec3::new(3.0, 2.0, 1.0));
        }
    }

    #[test]
    fn test_aperture_samples_lens_disk() {
        let config = CameraConfig {
            aperture: 2.0,
            ..CameraConfig::default()
        };
        let camera = Camera::new(&config);
        let mut rng = StdRng::seed_from_u64(2);

        // Lens offsets stay within the lens radius of the nominal origin
        let mut saw_offset = false;
        for _ in 0..50 {
            let ray = camera.get_ray(0.5, 0.5, &mut rng);
            let offset = (ray.origin - config.look_from).length();
            assert!(offset < config.aperture / 2.0);
            saw_offset |= offset > 0.0;
        }
        assert!(saw_offset);
    }

    #[test]
    fn test_corner_coordinates_span_the_plane() {
        let camera = Camera::new(&CameraConfig {
            vfov: 90.0,
            aspect: 2.0,
            ..CameraConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(3);

        let left = camera.get_ray(0.0, 0.5, &mut rng);
        let right = camera.get_ray(1.0, 0.5, &mut rng);
        assert!(left.direction.x < 0.0);
        assert!(right.direction.x > 0.0);

        let bottom = camera.get_ray(0.5, 0.0, &mut rng);
        let top = camera.get_ray(0.5, 1.0, &mut rng);
        assert!(bottom.direction.y < 0.0);
        assert!(top.direction.y > 0.0);
    }
}
