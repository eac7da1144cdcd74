//! Tile-based parallel rendering.
//!
//! The image is divided into tiles rendered independently with rayon.
//! Each tile derives a private RNG stream from the base seed and its own
//! index, so the output is pixel-identical for a given seed no matter how
//! the tiles are scheduled across threads.

use crate::integrator::render_pixel;
use crate::{Camera, Color, Framebuffer, Hittable, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Default tile size in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Index of this tile, also the offset of its RNG stream
    pub index: usize,
}

impl Tile {
    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Split an image into tiles in scanline order.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32) -> Vec<Tile> {
    let mut tiles = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            tiles.push(Tile {
                x,
                y,
                width: tile_size.min(width - x),
                height: tile_size.min(height - y),
                index,
            });
            index += 1;
            x += tile_size;
        }
        y += tile_size;
    }

    tiles
}

/// Render a single tile to a vector of colors in row-major order.
pub fn render_tile(
    tile: &Tile,
    camera: &Camera,
    world: &dyn Hittable,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Vec<Color> {
    let mut rng = StdRng::seed_from_u64(tile_seed(config.seed, tile.index));
    let mut pixels = Vec::with_capacity(tile.pixel_count() as usize);

    for local_y in 0..tile.height {
        for local_x in 0..tile.width {
            let color = render_pixel(
                camera,
                world,
                tile.x + local_x,
                tile.y + local_y,
                width,
                height,
                config,
                &mut rng,
            );
            pixels.push(color);
        }
    }

    pixels
}

/// Derive a per-tile RNG seed from the base seed.
fn tile_seed(seed: u64, index: usize) -> u64 {
    // SplitMix64 increment keeps neighboring tile streams decorrelated
    seed.wrapping_add((index as u64 + 1).wrapping_mul(0x9e37_79b9_7f4a_7c15))
}

/// Render the whole image, tiles in parallel.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> Framebuffer {
    let tiles = generate_tiles(width, height, DEFAULT_TILE_SIZE);
    log::debug!("rendering {} tiles of {}px", tiles.len(), DEFAULT_TILE_SIZE);

    let results: Vec<(Tile, Vec<Color>)> = tiles
        .par_iter()
        .map(|tile| (*tile, render_tile(tile, camera, world, width, height, config)))
        .collect();

    let mut image = Framebuffer::new(width, height);
    for (tile, pixels) in results {
        for local_y in 0..tile.height {
            for local_x in 0..tile.width {
                let color = pixels[(local_y * tile.width + local_x) as usize];
                image.set(tile.x + local_x, tile.y + local_y, color);
            }
        }
    }

    image
}
