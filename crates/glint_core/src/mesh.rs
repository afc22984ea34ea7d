//! Triangle meshes with an explicit world-space transform cache.
//!
//! A mesh keeps its object-space data (positions, index triples, one normal
//! per triangle) plus a local scale/rotation/translation. Intersection tests
//! read the *cached* world-space copies, which are only valid between a call
//! to [`TriangleMesh::update_transforms`] and the next mutation. Every
//! mutator marks the cache stale; [`TriangleMesh::is_transform_cache_valid`]
//! reports it.

use glint_math::{Aabb, Mat4, Mat4Ext, Quat, Vec3};

use crate::geometry::{face_normal, MaterialId, Triangle, TriangleCullMode};
use crate::loader::MeshLoadError;

/// An indexed triangle mesh.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    positions: Vec<Vec3>,
    indices: Vec<u32>,
    normals: Vec<Vec3>,

    pub cull_mode: TriangleCullMode,
    pub material: MaterialId,

    translation: Vec3,
    rotation: Quat,
    scale: Vec3,

    world_positions: Vec<Vec3>,
    world_normals: Vec<Vec3>,
    world_bounds: Aabb,
    cache_valid: bool,
}

impl TriangleMesh {
    /// Create an empty mesh with an identity transform.
    pub fn new(cull_mode: TriangleCullMode, material: MaterialId) -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
            normals: Vec::new(),
            cull_mode,
            material,
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            world_positions: Vec::new(),
            world_normals: Vec::new(),
            world_bounds: Aabb::EMPTY,
            // An empty mesh with an empty cache is consistent
            cache_valid: true,
        }
    }

    /// Replace the object-space geometry.
    ///
    /// `indices` are consumed in triples, each referring into `positions`.
    /// Per-triangle normals are derived from the clockwise winding. On error
    /// the mesh is left empty.
    pub fn set_geometry(&mut self, positions: Vec<Vec3>, indices: Vec<u32>) -> Result<(), MeshLoadError> {
        if let Err(err) = validate_indices(&positions, &indices) {
            self.clear_geometry();
            return Err(err);
        }

        self.normals = indices
            .chunks_exact(3)
            .map(|tri| {
                face_normal(
                    positions[tri[0] as usize],
                    positions[tri[1] as usize],
                    positions[tri[2] as usize],
                )
            })
            .collect();
        self.positions = positions;
        self.indices = indices;
        self.cache_valid = false;
        Ok(())
    }

    /// Drop all object-space and cached geometry.
    pub fn clear_geometry(&mut self) {
        self.positions.clear();
        self.indices.clear();
        self.normals.clear();
        self.world_positions.clear();
        self.world_normals.clear();
        self.world_bounds = Aabb::EMPTY;
        self.cache_valid = true;
    }

    /// Append one triangle in object space, keeping its normal.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let start = self.positions.len() as u32;
        self.positions.extend([triangle.v0, triangle.v1, triangle.v2]);
        self.indices.extend([start, start + 1, start + 2]);
        self.normals.push(triangle.normal);
        self.cache_valid = false;
    }

    /// Set the translation part of the local transform.
    pub fn set_translation(&mut self, translation: Vec3) {
        self.translation = translation;
        self.cache_valid = false;
    }

    /// Set the rotation to a yaw of `angle` radians around +Y.
    pub fn set_rotation_y(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle);
        self.cache_valid = false;
    }

    /// Set the scale part of the local transform.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.cache_valid = false;
    }

    /// Local-to-world matrix: scale, then rotate, then translate.
    pub fn transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Recompute world-space positions, normals and bounds from object space.
    pub fn update_transforms(&mut self) {
        let transform = self.transform();

        self.world_positions.clear();
        self.world_positions
            .extend(self.positions.iter().map(|p| transform.transform_point3(*p)));

        self.world_normals.clear();
        self.world_normals
            .extend(self.normals.iter().map(|n| transform.transform_normal(*n)));

        self.world_bounds = transform.transform_aabb(&self.object_bounds());
        self.cache_valid = true;

        log::debug!(
            "Updated mesh transforms: {} triangles, bounds min={:?} max={:?}",
            self.triangle_count(),
            self.world_bounds.min(),
            self.world_bounds.max()
        );
    }

    /// True if the world-space cache reflects the current geometry and transform.
    pub fn is_transform_cache_valid(&self) -> bool {
        self.cache_valid
    }

    /// Object-space bounding box.
    pub fn object_bounds(&self) -> Aabb {
        Aabb::from_positions(&self.positions)
    }

    /// Cached world-space bounding box.
    pub fn world_bounds(&self) -> &Aabb {
        &self.world_bounds
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// One object-space normal per index triple.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn world_positions(&self) -> &[Vec3] {
        &self.world_positions
    }

    pub fn world_normals(&self) -> &[Vec3] {
        &self.world_normals
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// World-space triangles built from the cache, carrying the mesh's cull mode and material.
    ///
    /// A stale cache yields stale triangles. Index triples that reach past the
    /// cached positions, left behind by geometry changed since the last
    /// [`TriangleMesh::update_transforms`], are skipped.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let positions = &self.world_positions;
        let world = move |index: u32| positions.get(index as usize).copied();

        self.indices
            .chunks_exact(3)
            .zip(&self.world_normals)
            .filter_map(move |(tri, normal)| {
                Some(Triangle::with_normal(
                    world(tri[0])?,
                    world(tri[1])?,
                    world(tri[2])?,
                    *normal,
                    self.cull_mode,
                    self.material,
                ))
            })
    }
}

fn validate_indices(positions: &[Vec3], indices: &[u32]) -> Result<(), MeshLoadError> {
    if indices.len() % 3 != 0 {
        return Err(MeshLoadError::IncompleteTriangle {
            index_count: indices.len(),
        });
    }

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= positions.len()) {
        return Err(MeshLoadError::IndexOutOfRange {
            index,
            vertex_count: positions.len(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn quad_mesh() -> TriangleMesh {
        let mut mesh = TriangleMesh::new(TriangleCullMode::NoCulling, MaterialId::DEFAULT);
        let positions = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        mesh.set_geometry(positions, vec![0, 2, 1, 0, 3, 2]).unwrap();
        mesh
    }

    #[test]
    fn test_set_geometry_computes_normals() {
        let mesh = quad_mesh();

        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.normals().len(), 2);
        for normal in mesh.normals() {
            assert!((*normal - Vec3::Z).length() < 1e-6);
        }
    }

    #[test]
    fn test_set_geometry_rejects_incomplete_triangles() {
        let mut mesh = quad_mesh();
        let err = mesh
            .set_geometry(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1])
            .unwrap_err();

        assert!(matches!(err, MeshLoadError::IncompleteTriangle { index_count: 2 }));
        // Failed loads leave the mesh empty, not half-filled
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_set_geometry_rejects_bad_index() {
        let mut mesh = TriangleMesh::new(TriangleCullMode::NoCulling, MaterialId::DEFAULT);
        let err = mesh
            .set_geometry(vec![Vec3::ZERO, Vec3::X, Vec3::Y], vec![0, 1, 3])
            .unwrap_err();

        assert!(matches!(
            err,
            MeshLoadError::IndexOutOfRange {
                index: 3,
                vertex_count: 3
            }
        ));
        assert!(mesh.normals().is_empty());
    }

    #[test]
    fn test_stale_cache_after_regrow_skips_unknown_vertices() {
        let mut mesh = TriangleMesh::new(TriangleCullMode::NoCulling, MaterialId::DEFAULT);
        mesh.append_triangle(&Triangle::new(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            TriangleCullMode::NoCulling,
            MaterialId::DEFAULT,
        ));
        mesh.update_transforms();
        assert_eq!(mesh.world_positions().len(), 3);

        // New geometry indexes vertices the cache has never seen
        let positions = vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::Y,
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        mesh.set_geometry(positions, vec![3, 4, 5]).unwrap();
        assert!(!mesh.is_transform_cache_valid());
        assert_eq!(mesh.world_triangles().count(), 0);

        mesh.update_transforms();
        assert_eq!(mesh.world_triangles().count(), 1);
    }

    #[test]
    fn test_stale_cache_after_append_keeps_old_triangles() {
        let mut mesh = quad_mesh();
        mesh.update_transforms();

        mesh.append_triangle(&Triangle::new(
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(3.0, 0.0, 0.0),
            TriangleCullMode::NoCulling,
            MaterialId::DEFAULT,
        ));
        assert_eq!(mesh.world_triangles().count(), 2);
    }

    #[test]
    fn test_mutation_invalidates_cache() {
        let mut mesh = quad_mesh();
        assert!(!mesh.is_transform_cache_valid());

        mesh.update_transforms();
        assert!(mesh.is_transform_cache_valid());

        mesh.set_translation(Vec3::X);
        assert!(!mesh.is_transform_cache_valid());
        mesh.update_transforms();

        mesh.set_rotation_y(PI);
        assert!(!mesh.is_transform_cache_valid());
        mesh.update_transforms();

        mesh.set_scale(Vec3::splat(2.0));
        assert!(!mesh.is_transform_cache_valid());
        mesh.update_transforms();

        mesh.append_triangle(&Triangle::new(
            Vec3::ZERO,
            Vec3::Y,
            Vec3::X,
            TriangleCullMode::NoCulling,
            MaterialId::DEFAULT,
        ));
        assert!(!mesh.is_transform_cache_valid());
    }

    #[test]
    fn test_stale_cache_keeps_old_world_data() {
        let mut mesh = quad_mesh();
        mesh.update_transforms();
        let before = mesh.world_positions().to_vec();

        mesh.set_translation(Vec3::new(0.0, 0.0, 5.0));
        // Nothing is recomputed until update_transforms runs
        assert_eq!(mesh.world_positions(), before.as_slice());

        mesh.update_transforms();
        assert_eq!(mesh.world_positions()[0], Vec3::new(0.0, 0.0, 5.0));
    }

    #[test]
    fn test_update_transforms_world_data() {
        let mut mesh = quad_mesh();
        mesh.set_scale(Vec3::splat(2.0));
        mesh.set_rotation_y(PI / 2.0);
        mesh.set_translation(Vec3::new(10.0, 0.0, 0.0));
        mesh.update_transforms();

        // (1, 0, 0) -> scaled (2, 0, 0) -> rotated (0, 0, -2) -> translated
        let p = mesh.world_positions()[1];
        assert!((p - Vec3::new(10.0, 0.0, -2.0)).length() < 1e-5);

        // +Z rotates to +X
        for normal in mesh.world_normals() {
            assert!((*normal - Vec3::X).length() < 1e-5);
        }

        let bounds = mesh.world_bounds();
        assert!((bounds.y.max - 2.0).abs() < 1e-5);
        assert!((bounds.z.min + 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_append_triangle_keeps_normal() {
        let mut mesh = TriangleMesh::new(TriangleCullMode::BackFaceCulling, MaterialId::DEFAULT);
        let tri = Triangle::new(
            Vec3::new(-0.75, 1.5, 0.0),
            Vec3::new(0.75, 0.0, 0.0),
            Vec3::new(-0.75, 0.0, 0.0),
            TriangleCullMode::BackFaceCulling,
            MaterialId::DEFAULT,
        );
        mesh.append_triangle(&tri);
        mesh.update_transforms();

        assert_eq!(mesh.indices(), &[0, 1, 2]);
        let world: Vec<Triangle> = mesh.world_triangles().collect();
        assert_eq!(world.len(), 1);
        assert!((world[0].normal - tri.normal).length() < 1e-6);
    }
}
