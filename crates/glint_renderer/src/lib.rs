//! Glint Renderer - CPU direct-lighting renderer.
//!
//! Casts one primary ray per pixel in parallel with rayon, shades the closest
//! hit against every light with an optional shadow ray, and tone maps the
//! result into an RGBA8 [`FrameBuffer`].

mod config;
mod frame;
mod renderer;

pub use config::{LightingMode, RenderConfig};
pub use frame::{color_to_rgba, FrameBuffer, PixelSink};
pub use renderer::{render, render_pixel, shade_light, PrimaryRays};
