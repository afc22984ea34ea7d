//! Viewer settings, optionally read from a JSON file.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glint_renderer::RenderConfig;
use serde::{Deserialize, Serialize};

/// Which demo scene to build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SceneKind {
    /// Planes, Cook-Torrance spheres and the three cull-mode triangles.
    Reference,
    /// An OBJ mesh inside the same room of planes.
    Bunny { obj_path: PathBuf },
}

/// Everything the viewer needs to produce a sequence of frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub scene: SceneKind,
    /// Number of frames to render
    pub frames: u32,
    /// Animation time between frames, in seconds
    pub frame_time: f32,
    /// Advance the lighting mode after every frame
    pub cycle_lighting_modes: bool,
    pub output_dir: PathBuf,
    pub render: RenderConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            scene: SceneKind::Reference,
            frames: 1,
            frame_time: 1.0 / 30.0,
            cycle_lighting_modes: false,
            output_dir: PathBuf::from("frames"),
            render: RenderConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Read a config file. Missing fields take their default values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;

        anyhow::ensure!(
            config.width > 0 && config.height > 0,
            "Resolution must be non-zero, got {}x{}",
            config.width,
            config.height
        );
        Ok(config)
    }
}
