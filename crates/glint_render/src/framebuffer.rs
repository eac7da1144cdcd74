//! Framebuffer and image serialization.
//!
//! The renderer stores display-ready (gamma-corrected, [0,1]) colors;
//! this module maps them to 8-bit channels and writes PPM or PNG.

use crate::{Color, OutputError};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Image buffer for storing render output. Row 0 is the image top.
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Convert to packed RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }

    /// Write the image as plain-text PPM (P3), rows top to bottom.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> Result<(), OutputError> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for y in 0..self.height {
            for x in 0..self.width {
                let [r, g, b] = color_to_rgb8(self.get(x, y));
                writeln!(writer, "{} {} {}", r, g, b)?;
            }
        }

        Ok(())
    }

    /// Save to `path`, picking the format from the extension:
    /// `.png` via the image crate, anything else as PPM.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), OutputError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("png") => {
                let buffer = image::RgbImage::from_vec(self.width, self.height, self.to_rgb8())
                    .ok_or_else(|| {
                        image::ImageError::Parameter(image::error::ParameterError::from_kind(
                            image::error::ParameterErrorKind::DimensionMismatch,
                        ))
                    })?;
                buffer.save(path)?;
            }
            _ => {
                let file = File::create(path)?;
                let mut writer = BufWriter::new(file);
                self.write_ppm(&mut writer)?;
            }
        }
        Ok(())
    }
}

/// Map one display-ready channel triple to 8-bit values.
///
/// floor(255.99 * c), after clamping to [0, 1].
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        (255.99 * color.x.clamp(0.0, 1.0)) as u8,
        (255.99 * color.y.clamp(0.0, 1.0)) as u8,
        (255.99 * color.z.clamp(0.0, 1.0)) as u8,
    ]
}
