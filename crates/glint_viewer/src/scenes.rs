//! Demo scenes and their per-frame animation.

use std::f32::consts::{PI, TAU};
use std::path::Path;

use glint_core::{load_obj_into, Color, Material, MaterialId, MeshId, Scene, Triangle, TriangleCullMode};
use glint_math::{Camera, Vec3};

/// A scene, the camera looking at it and the meshes that spin.
pub struct DemoScene {
    pub name: &'static str,
    pub scene: Scene,
    pub camera: Camera,
    animated: Vec<MeshId>,
}

impl DemoScene {
    /// Pose the animated meshes for time `total_time` (seconds) and refresh their caches.
    pub fn update(&mut self, total_time: f32) {
        let yaw = (total_time.cos() + 1.0) / 2.0 * TAU;
        for &id in &self.animated {
            self.scene.mesh_mut(id).set_rotation_y(yaw);
        }

        let updated = self.scene.update_transforms();
        log::debug!("Animated {} meshes to yaw {:.3}", updated, yaw);
    }
}

fn room_camera() -> Camera {
    Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0)
}

/// Five walls around the origin, open toward the camera.
fn add_room(scene: &mut Scene, material: MaterialId) {
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0), material);
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0), material);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::new(0.0, -1.0, 0.0), material);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), material);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), material);
}

/// Warm back light, warm key light and a cool fill.
fn add_three_point_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}

/// Metal and plastic spheres at three roughness levels, plus one triangle per cull mode.
pub fn reference_scene() -> DemoScene {
    let mut scene = Scene::new();

    let metal = Color::new(0.972, 0.960, 0.915);
    let plastic = Color::new(0.75, 0.75, 0.75);
    let spheres = [
        (Vec3::new(-1.75, 1.0, 0.0), Material::cook_torrance(metal, 1.0, 1.0)),
        (Vec3::new(0.0, 1.0, 0.0), Material::cook_torrance(metal, 1.0, 0.6)),
        (Vec3::new(1.75, 1.0, 0.0), Material::cook_torrance(metal, 1.0, 0.1)),
        (Vec3::new(-1.75, 3.0, 0.0), Material::cook_torrance(plastic, 0.0, 1.0)),
        (Vec3::new(0.0, 3.0, 0.0), Material::cook_torrance(plastic, 0.0, 0.6)),
        (Vec3::new(1.75, 3.0, 0.0), Material::cook_torrance(plastic, 0.0, 0.1)),
    ];

    let grey_blue = scene.add_material(Material::lambert(1.0, Color::new(0.49, 0.57, 0.57)));
    let white = scene.add_material(Material::lambert(1.0, Color::ONE));

    add_room(&mut scene, grey_blue);
    for (center, material) in spheres {
        let id = scene.add_material(material);
        scene.add_sphere(center, 0.75, id);
    }

    // Clockwise seen from the camera, so the front face looks down -Z
    let base = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        TriangleCullMode::BackFaceCulling,
        white,
    );
    let placements = [
        (TriangleCullMode::BackFaceCulling, -1.75),
        (TriangleCullMode::FrontFaceCulling, 0.0),
        (TriangleCullMode::NoCulling, 1.75),
    ];
    let mut animated = Vec::with_capacity(placements.len());
    for (cull_mode, x) in placements {
        let id = scene.add_triangle_mesh(cull_mode, white);
        let mesh = scene.mesh_mut(id);
        mesh.append_triangle(&base);
        mesh.set_translation(Vec3::new(x, 4.5, 0.0));
        animated.push(id);
    }

    add_three_point_lights(&mut scene);
    scene.update_transforms();

    DemoScene {
        name: "Reference Scene",
        scene,
        camera: room_camera(),
        animated,
    }
}

/// An OBJ mesh, scaled up and turned to face the camera.
///
/// A mesh that fails to load is logged and left empty; the room still renders.
pub fn bunny_scene(obj_path: &Path) -> DemoScene {
    let mut scene = Scene::new();

    let grey_blue = scene.add_material(Material::lambert(1.0, Color::new(0.49, 0.57, 0.57)));
    let white = scene.add_material(Material::lambert(1.0, Color::ONE));
    add_room(&mut scene, grey_blue);

    let bunny = scene.add_triangle_mesh(TriangleCullMode::BackFaceCulling, white);
    let mesh = scene.mesh_mut(bunny);
    if let Err(err) = load_obj_into(mesh, obj_path) {
        log::warn!("Could not load {}: {}", obj_path.display(), err);
    }
    mesh.set_scale(Vec3::splat(2.0));
    mesh.set_rotation_y(PI);

    add_three_point_lights(&mut scene);
    scene.update_transforms();

    DemoScene {
        name: "Bunny Scene",
        scene,
        camera: room_camera(),
        animated: vec![bunny],
    }
}
