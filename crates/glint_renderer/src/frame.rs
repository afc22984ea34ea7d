//! Pixel output: the sink interface, the RGBA frame buffer and tone mapping.

use glint_core::Color;

/// Destination for rendered pixels. Write-only from the renderer's side.
pub trait PixelSink {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]);

    /// Write row `y` from packed RGBA8 bytes, four per pixel.
    fn set_row(&mut self, y: u32, rgba: &[u8]) {
        for (x, px) in rgba.chunks_exact(4).enumerate() {
            self.set_pixel(x as u32, y, [px[0], px[1], px[2], px[3]]);
        }
    }
}

/// Map a linear color into `[0, 1]` and encode it as opaque RGBA8.
///
/// Colors brighter than 1 are scaled down by their largest channel, which
/// keeps the hue. Negative channels become 0.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let peak = color.max_element();
    let color = if peak > 1.0 { color / peak } else { color };
    let color = color.max(Color::ZERO);

    [
        (color.x * 255.0) as u8,
        (color.y * 255.0) as u8,
        (color.z * 255.0) as u8,
        255,
    ]
}

/// Row-major RGBA8 frame, top row first.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl FrameBuffer {
    /// Create a new frame filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; (width * height) as usize],
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut self.pixels
    }

    /// The frame as a flat RGBA byte slice.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Forward the frame to another sink of the same size, one row at a time.
    pub fn copy_to(&self, sink: &mut dyn PixelSink) {
        debug_assert_eq!((sink.width(), sink.height()), (self.width, self.height));
        if self.width == 0 {
            return;
        }

        let stride = self.width as usize * 4;
        for (y, row) in self.as_bytes().chunks_exact(stride).enumerate() {
            sink.set_row(y as u32, row);
        }
    }
}

impl PixelSink for FrameBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        self.pixels[(y * self.width + x) as usize] = rgba;
    }
}
