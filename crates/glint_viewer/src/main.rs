mod config;
mod output;
mod scenes;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use glint_renderer::{render, FrameBuffer};

use config::{SceneKind, ViewerConfig};
use output::ImageSink;
use scenes::DemoScene;

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Glint Viewer");

    let mut config = match std::env::args().nth(1) {
        Some(path) => ViewerConfig::load(Path::new(&path))?,
        None => ViewerConfig::default(),
    };

    let mut demo: DemoScene = match &config.scene {
        SceneKind::Reference => scenes::reference_scene(),
        SceneKind::Bunny { obj_path } => scenes::bunny_scene(obj_path),
    };
    log::info!(
        "{}: {} spheres, {} planes, {} meshes ({} triangles), {} lights",
        demo.name,
        demo.scene.spheres().len(),
        demo.scene.planes().len(),
        demo.scene.meshes().len(),
        demo.scene.triangle_count(),
        demo.scene.lights().len()
    );

    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("Failed to create {}", config.output_dir.display()))?;

    let mut frame = FrameBuffer::new(config.width, config.height);
    let mut sink = ImageSink::new(config.width, config.height);
    let start = Instant::now();

    for index in 0..config.frames {
        demo.update(index as f32 * config.frame_time);

        let frame_start = Instant::now();
        render(&demo.scene, &mut demo.camera, &config.render, &mut frame);
        let elapsed = frame_start.elapsed();

        let path: PathBuf = config.output_dir.join(format!("frame_{:04}.png", index));
        sink.write_frame(&frame);
        sink.save(&path)?;
        log::info!(
            "Frame {} ({:?}) rendered in {:.2} ms -> {}",
            index,
            config.render.lighting_mode,
            elapsed.as_secs_f64() * 1000.0,
            path.display()
        );

        if config.cycle_lighting_modes {
            config.render.cycle_lighting_mode();
        }
    }

    log::info!(
        "Rendered {} frames in {:.2} s",
        config.frames,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
