//! Scene ownership and ray queries.
//!
//! The [`Scene`] owns every primitive, mesh, light and material. Geometry
//! refers to materials by [`MaterialId`]; slot 0 always holds the fallback
//! material. Queries fan out over spheres, then planes, then meshes.

use glint_math::{Ray, Vec3};

use crate::geometry::{MaterialId, Plane, Sphere, TriangleCullMode};
use crate::hit::{HitRecord, Hittable};
use crate::light::Light;
use crate::material::{Color, Material};
use crate::mesh::TriangleMesh;

/// Index of a mesh in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

impl MeshId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// All geometry, lights and materials of a render.
#[derive(Debug, Clone)]
pub struct Scene {
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create an empty scene holding only the fallback material.
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            planes: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::default()],
        }
    }

    /// Add a material, returning its stable index.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len());
        self.materials.push(material);
        id
    }

    /// Look up a material.
    ///
    /// An id from another scene is a bug; debug builds panic, release builds
    /// shade with the fallback material.
    pub fn material(&self, id: MaterialId) -> &Material {
        debug_assert!(
            id.0 < self.materials.len(),
            "material index {} out of range ({} materials)",
            id.0,
            self.materials.len()
        );
        self.materials.get(id.0).unwrap_or(&self.materials[0])
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material: MaterialId) {
        self.spheres.push(Sphere::new(origin, radius, material));
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: MaterialId) {
        self.planes.push(Plane::new(origin, normal, material));
    }

    /// Add an empty mesh to be filled through [`Scene::mesh_mut`].
    pub fn add_triangle_mesh(&mut self, cull_mode: TriangleCullMode, material: MaterialId) -> MeshId {
        self.add_mesh(TriangleMesh::new(cull_mode, material))
    }

    /// Take ownership of a prepared mesh.
    pub fn add_mesh(&mut self, mesh: TriangleMesh) -> MeshId {
        let id = MeshId(self.meshes.len());
        self.meshes.push(mesh);
        id
    }

    pub fn mesh(&self, id: MeshId) -> &TriangleMesh {
        &self.meshes[id.0]
    }

    /// Mutable access to a mesh. Its transform cache must be refreshed
    /// (see [`Scene::update_transforms`]) before the next render.
    pub fn mesh_mut(&mut self, id: MeshId) -> &mut TriangleMesh {
        &mut self.meshes[id.0]
    }

    pub fn meshes_mut(&mut self) -> impl Iterator<Item = &mut TriangleMesh> {
        self.meshes.iter_mut()
    }

    pub fn add_point_light(&mut self, position: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::point(position, intensity, color));
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) {
        self.lights.push(Light::directional(direction, intensity, color));
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Total triangle count across all meshes.
    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(TriangleMesh::triangle_count).sum()
    }

    /// Refresh the transform cache of every stale mesh. Returns how many were updated.
    pub fn update_transforms(&mut self) -> usize {
        let mut updated = 0;
        for mesh in self.meshes.iter_mut().filter(|m| !m.is_transform_cache_valid()) {
            mesh.update_transforms();
            updated += 1;
        }
        updated
    }

    /// True if every mesh cache is current, i.e. the scene can be rendered.
    pub fn is_ready(&self) -> bool {
        self.meshes.iter().all(TriangleMesh::is_transform_cache_valid)
    }

    /// Closest hit along `ray` over all geometry.
    ///
    /// A hit replaces the record only when strictly closer, so surfaces at
    /// exactly the same `t` resolve to the first one visited: spheres, then
    /// planes, then meshes, each in insertion order.
    pub fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut rec = HitRecord::default();

        for sphere in &self.spheres {
            sphere.hit(ray, &mut rec);
        }
        for plane in &self.planes {
            plane.hit(ray, &mut rec);
        }
        for mesh in &self.meshes {
            mesh.hit(ray, &mut rec);
        }

        rec
    }

    /// True if anything blocks `ray` within its bounds.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        self.spheres.iter().any(|s| s.hit_any(ray))
            || self.planes.iter().any(|p| p.hit_any(ray))
            || self.meshes.iter().any(|m| m.hit_any(ray))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
