use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and a valid parameter range.
///
/// Intersection routines only accept hits whose parameter `t` lies in
/// `[min, max]`. The direction is expected to be normalized by whoever
/// builds the ray; nothing here renormalizes it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

impl Ray {
    /// Default lower bound, keeps primary rays from hitting at the eye point.
    pub const DEFAULT_MIN: f32 = 1e-4;

    /// Default upper bound, "infinity" for practical purposes.
    pub const DEFAULT_MAX: f32 = f32::MAX;

    /// Create a new ray with the default `(1e-4, f32::MAX)` bounds.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_bounds(origin, direction, Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }

    /// Create a ray restricted to `[min, max]`.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        debug_assert!(min < max, "ray bounds must satisfy min < max");
        Self {
            origin,
            direction,
            min,
            max,
        }
    }

    /// The valid parameter range as an [`Interval`].
    #[inline]
    pub fn bounds(&self) -> Interval {
        Interval::new(self.min, self.max)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
