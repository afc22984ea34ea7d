// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod aabb;
mod camera;
mod interval;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use camera::Camera;
pub use interval::Interval;
pub use ray::Ray;
pub use transform::Mat4Ext;

/// Tolerance used for parallel/degenerate checks across the renderer.
pub const EPSILON: f32 = 1e-6;
