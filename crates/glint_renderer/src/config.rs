//! Render settings.

use serde::{Deserialize, Serialize};

/// Which lighting term a pixel displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightingMode {
    /// Clamped cosine between normal and light direction.
    ObservedArea,
    /// Incident radiance only.
    Radiance,
    /// Material reflectance only.
    Brdf,
    /// Radiance times reflectance times observed area.
    #[default]
    Combined,
}

impl LightingMode {
    /// The next mode in display order, wrapping around.
    pub fn next(self) -> Self {
        let next = match self {
            Self::ObservedArea => Self::Radiance,
            Self::Radiance => Self::Brdf,
            Self::Brdf => Self::Combined,
            Self::Combined => Self::ObservedArea,
        };
        log::info!("Lighting mode: {:?}", next);
        next
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    /// Cast one shadow ray per light
    pub shadows_enabled: bool,
    /// Offset along the normal for shadow ray origins, also their minimum `t`
    pub shadow_epsilon: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::Combined,
            shadows_enabled: true,
            shadow_epsilon: 1e-3,
        }
    }
}

impl RenderConfig {
    pub fn with_lighting_mode(mut self, lighting_mode: LightingMode) -> Self {
        self.lighting_mode = lighting_mode;
        self
    }

    pub fn with_shadows(mut self, enabled: bool) -> Self {
        self.shadows_enabled = enabled;
        self
    }

    pub fn with_shadow_epsilon(mut self, epsilon: f32) -> Self {
        self.shadow_epsilon = epsilon;
        self
    }

    /// Advance to the next lighting mode.
    pub fn cycle_lighting_mode(&mut self) {
        self.lighting_mode = self.lighting_mode.next();
    }

    pub fn toggle_shadows(&mut self) {
        self.shadows_enabled = !self.shadows_enabled;
        log::info!("Shadows {}", if self.shadows_enabled { "enabled" } else { "disabled" });
    }
}
