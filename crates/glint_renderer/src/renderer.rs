//! Parallel per-pixel direct-lighting renderer.
//!
//! One primary ray per pixel, one optional shadow ray per light, no bounces.
//! Pixels are independent; rayon splits the frame buffer into disjoint
//! pixels so no synchronization is needed.

use glint_core::{Color, HitRecord, Light, Scene};
use glint_math::{Camera, Mat4, Ray, Vec3};
use rayon::prelude::*;

use crate::config::{LightingMode, RenderConfig};
use crate::frame::{color_to_rgba, FrameBuffer, PixelSink};

/// Per-frame camera data shared read-only by every pixel.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryRays {
    origin: Vec3,
    camera_to_world: Mat4,
    fov_scale: f32,
    aspect_ratio: f32,
    width: u32,
    height: u32,
}

impl PrimaryRays {
    /// Rebuild the camera basis once for a `width` x `height` frame.
    pub fn new(camera: &mut Camera, width: u32, height: u32) -> Self {
        Self {
            origin: camera.origin,
            camera_to_world: camera.camera_to_world(),
            fov_scale: camera.fov_scale(),
            aspect_ratio: width as f32 / height as f32,
            width,
            height,
        }
    }

    /// World-space ray through the center of pixel `(x, y)`, row 0 at the top.
    pub fn ray(&self, x: u32, y: u32) -> Ray {
        let ndc_x = 2.0 * (x as f32 + 0.5) / self.width as f32 - 1.0;
        let ndc_y = 1.0 - 2.0 * (y as f32 + 0.5) / self.height as f32;

        let local = Vec3::new(
            ndc_x * self.aspect_ratio * self.fov_scale,
            ndc_y * self.fov_scale,
            1.0,
        );
        let direction = self.camera_to_world.transform_vector3(local).normalize();

        Ray::new(self.origin, direction)
    }
}

/// Render `scene` as seen by `camera` into `frame`.
///
/// The scene must not change while this runs, and every mesh transform
/// cache must be current (see [`Scene::update_transforms`]).
pub fn render(scene: &Scene, camera: &mut Camera, config: &RenderConfig, frame: &mut FrameBuffer) {
    debug_assert!(scene.is_ready(), "render called with stale mesh transforms");

    let width = frame.width();
    let rays = PrimaryRays::new(camera, width, frame.height());

    frame
        .pixels_mut()
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, pixel)| {
            let x = index as u32 % width;
            let y = index as u32 / width;
            *pixel = color_to_rgba(render_pixel(scene, &rays, x, y, config));
        });
}

/// Linear color of one pixel.
pub fn render_pixel(scene: &Scene, rays: &PrimaryRays, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = rays.ray(x, y);
    let hit = scene.closest_hit(&ray);
    if !hit.did_hit {
        return Color::ZERO;
    }

    scene
        .lights()
        .iter()
        .map(|light| shade_light(scene, light, &hit, -ray.direction, config))
        .sum()
}

/// Contribution of a single light to a hit, zero if the light is occluded.
pub fn shade_light(scene: &Scene, light: &Light, hit: &HitRecord, view: Vec3, config: &RenderConfig) -> Color {
    let (to_light, distance) = light.direction_to(hit.origin);

    if config.shadows_enabled && distance > config.shadow_epsilon {
        let shadow_ray = Ray::with_bounds(
            hit.origin + hit.normal * config.shadow_epsilon,
            to_light,
            config.shadow_epsilon,
            distance,
        );
        if scene.does_hit(&shadow_ray) {
            return Color::ZERO;
        }
    }

    let observed_area = hit.normal.dot(to_light).max(0.0);
    match config.lighting_mode {
        LightingMode::ObservedArea => Color::splat(observed_area),
        LightingMode::Radiance => light.radiance_at(hit.origin),
        LightingMode::Brdf => scene.material(hit.material).shade(hit, to_light, view),
        LightingMode::Combined => {
            let brdf = scene.material(hit.material).shade(hit, to_light, view);
            light.radiance_at(hit.origin) * brdf * observed_area
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::Material;

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, -5.0), 90.0)
    }

    #[test]
    fn test_center_ray_looks_forward() {
        let mut camera = camera();
        let rays = PrimaryRays::new(&mut camera, 5, 5);
        let ray = rays.ray(2, 2);

        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, -5.0));
        assert!((ray.direction - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_corner_rays() {
        let mut camera = camera();
        let rays = PrimaryRays::new(&mut camera, 2, 2);

        // Top-left pixel points up and left
        let top_left = rays.ray(0, 0).direction;
        assert!(top_left.x < 0.0 && top_left.y > 0.0);

        let bottom_right = rays.ray(1, 1).direction;
        assert!(bottom_right.x > 0.0 && bottom_right.y < 0.0);
        assert!((top_left.x + bottom_right.x).abs() < 1e-6);
    }

    #[test]
    fn test_aspect_ratio_widens_x() {
        let mut camera = camera();
        let rays = PrimaryRays::new(&mut camera, 4, 2);
        let d = rays.ray(0, 0).direction;

        // 90 degree vertical fov: at z = 1 the pixel center sits at x = -1.5, y = 0.5
        let expected = Vec3::new(-1.5, 0.5, 1.0).normalize();
        assert!((d - expected).length() < 1e-6);
    }

    #[test]
    fn test_miss_is_black() {
        let scene = Scene::new();
        let mut camera = camera();
        let rays = PrimaryRays::new(&mut camera, 3, 3);

        assert_eq!(render_pixel(&scene, &rays, 1, 1, &RenderConfig::default()), Color::ZERO);
    }

    #[test]
    fn test_shade_light_modes() {
        let mut scene = Scene::new();
        let white = scene.add_material(Material::lambert(1.0, Color::ONE));
        scene.add_point_light(Vec3::new(0.0, 2.0, 0.0), 8.0, Color::ONE);

        let hit = HitRecord {
            t: 1.0,
            did_hit: true,
            material: white,
            origin: Vec3::ZERO,
            normal: Vec3::Y,
        };
        let light = scene.lights()[0];
        let config = RenderConfig::default();
        let shade = |mode| shade_light(&scene, &light, &hit, Vec3::Y, &config.with_lighting_mode(mode));

        assert_eq!(shade(LightingMode::ObservedArea), Color::ONE);
        assert!((shade(LightingMode::Radiance) - Color::splat(2.0)).length() < 1e-6);
        let brdf = Color::splat(1.0 / std::f32::consts::PI);
        assert!((shade(LightingMode::Brdf) - brdf).length() < 1e-6);
        assert!((shade(LightingMode::Combined) - brdf * 2.0).length() < 1e-6);
    }

    #[test]
    fn test_light_below_surface_contributes_no_area() {
        let mut scene = Scene::new();
        scene.add_point_light(Vec3::new(0.0, -2.0, 0.0), 8.0, Color::ONE);

        let hit = HitRecord {
            t: 1.0,
            did_hit: true,
            origin: Vec3::ZERO,
            normal: Vec3::Y,
            ..Default::default()
        };
        let config = RenderConfig::default().with_lighting_mode(LightingMode::ObservedArea);
        let light = scene.lights()[0];

        assert_eq!(shade_light(&scene, &light, &hit, Vec3::Y, &config), Color::ZERO);
    }
}
