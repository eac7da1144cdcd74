//! Scene construction.

use crate::{gen_f32, Material, Sphere, SceneError, SurfaceList};
use glint_math::Vec3;
use rand::RngCore;
use std::sync::Arc;

/// Build the classic random sphere field: a gray ground sphere, a grid of
/// small spheres with randomly chosen materials, and three hero spheres.
pub fn random_scene(rng: &mut dyn RngCore) -> Result<SurfaceList, SceneError> {
    let mut scene = SurfaceList::new();

    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        Arc::new(Material::lambertian(Vec3::splat(0.5))),
    )?));

    // One glass material shared by every glass sphere
    let glass = Arc::new(Material::dielectric(1.5)?);

    for a in -11..12 {
        for b in -11..12 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                0.2,
                b as f32 + 0.9 * gen_f32(rng),
            );

            // Keep the area around the big metal sphere clear
            if (center - Vec3::new(4.0, 0.2, 0.0)).length_squared() <= 0.9 {
                continue;
            }

            let material = if choose_mat < 0.8 {
                // Diffuse
                Arc::new(Material::lambertian(Vec3::new(
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                    gen_f32(rng) * gen_f32(rng),
                )))
            } else if choose_mat < 0.95 {
                // Metal
                Arc::new(Material::metal(
                    Vec3::new(
                        0.5 * (1.0 + gen_f32(rng)),
                        0.5 * (1.0 + gen_f32(rng)),
                        0.5 * (1.0 + gen_f32(rng)),
                    ),
                    0.5 * gen_f32(rng),
                )?)
            } else {
                // Glass
                glass.clone()
            };

            scene.add(Box::new(Sphere::new(center, 0.2, material)?));
        }
    }

    scene.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        glass.clone(),
    )?));
    scene.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::lambertian(Vec3::new(0.4, 0.2, 0.1))),
    )?));
    scene.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Material::metal(Vec3::new(0.7, 0.6, 0.5), 0.0)?),
    )?));

    log::info!("built random scene with {} spheres", scene.len());
    Ok(scene)
}
