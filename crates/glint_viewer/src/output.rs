//! PNG frame output.

use std::path::Path;

use anyhow::{Context, Result};
use glint_renderer::{FrameBuffer, PixelSink};
use image::{Rgba, RgbaImage};

/// Pixel sink backed by an in-memory RGBA image.
pub struct ImageSink {
    image: RgbaImage,
}

impl ImageSink {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Copy a rendered frame into the image.
    pub fn write_frame(&mut self, frame: &FrameBuffer) {
        frame.copy_to(self);
    }

    /// Encode the image, picking the format from the file extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.image
            .save(path)
            .with_context(|| format!("Failed to write {}", path.display()))
    }
}

impl PixelSink for ImageSink {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.image.put_pixel(x, y, Rgba(rgba));
    }

    fn set_row(&mut self, y: u32, rgba: &[u8]) {
        let start = (y * self.image.width()) as usize * 4;
        let bytes: &mut [u8] = &mut self.image;
        bytes[start..start + rgba.len()].copy_from_slice(rgba);
    }
}
