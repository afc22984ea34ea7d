//! Point and directional lights.

use glint_math::Vec3;

use crate::material::Color;

/// Where light comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Emits from a position, falling off with the squared distance.
    Point { position: Vec3 },
    /// Infinitely far away, shining along `direction`.
    Directional { direction: Vec3 },
}

/// A light source with a scalar intensity and an RGB tint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub intensity: f32,
    pub color: Color,
}

impl Light {
    pub fn point(position: Vec3, intensity: f32, color: Color) -> Self {
        debug_assert!(intensity >= 0.0, "light intensity must be non-negative");
        Self {
            kind: LightKind::Point { position },
            intensity,
            color,
        }
    }

    /// The direction is normalized.
    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        debug_assert!(intensity >= 0.0, "light intensity must be non-negative");
        Self {
            kind: LightKind::Directional {
                direction: direction.normalize(),
            },
            intensity,
            color,
        }
    }

    /// Unit direction from `point` toward the light and the distance to it.
    ///
    /// Directional lights are infinitely far away.
    pub fn direction_to(&self, point: Vec3) -> (Vec3, f32) {
        match self.kind {
            LightKind::Point { position } => {
                let to_light = position - point;
                let distance = to_light.length();
                (to_light / distance, distance)
            }
            LightKind::Directional { direction } => (-direction, f32::INFINITY),
        }
    }

    /// Incident radiance arriving at `point`.
    pub fn radiance_at(&self, point: Vec3) -> Color {
        match self.kind {
            LightKind::Point { position } => {
                self.color * self.intensity / position.distance_squared(point)
            }
            LightKind::Directional { .. } => self.color * self.intensity,
        }
    }
}
