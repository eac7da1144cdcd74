//! glint - CPU Path Tracing
//!
//! A Monte Carlo path tracer for sphere scenes: stochastic camera rays,
//! probabilistic surface scattering, and sample-averaged radiance
//! estimation with a sky-gradient background.

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod integrator;
mod material;
mod sampling;
mod scene;
mod sphere;
mod tile;

pub use camera::{Camera, CameraConfig};
pub use error::{OutputError, SceneError};
pub use framebuffer::Framebuffer;
pub use hittable::{HitRecord, Hittable, SurfaceList};
pub use integrator::{ray_color, render_pixel, sky_gradient, RenderConfig, T_MAX, T_MIN};
pub use material::{reflect, refract, schlick, Material, ScatterResult};
pub use sampling::{gen_f32, random_in_unit_disk, random_in_unit_sphere};
pub use scene::random_scene;
pub use sphere::Sphere;
pub use tile::{generate_tiles, render, render_tile, Tile, DEFAULT_TILE_SIZE};

/// Re-export math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;
