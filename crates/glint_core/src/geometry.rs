//! Plain geometry records.
//!
//! Everything here is `Copy` data. Surfaces refer to their material through a
//! [`MaterialId`] into the owning [`crate::Scene`], never through a reference.

use glint_math::Vec3;

/// Index of a material in a [`crate::Scene`]'s material arena.
///
/// Index 0 is always the scene's fallback material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaterialId(pub(crate) usize);

impl MaterialId {
    /// The fallback material every scene starts with.
    pub const DEFAULT: MaterialId = MaterialId(0);

    /// Position in the material arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive.
    pub fn new(origin: Vec3, radius: f32, material: MaterialId) -> Self {
        debug_assert!(radius > 0.0, "sphere radius must be positive");
        Self {
            origin,
            radius,
            material,
        }
    }
}

/// An infinite plane through `origin` facing along `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    /// Create a new plane; the normal is normalized.
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            material,
        }
    }
}

/// Which triangle faces a ray is allowed to hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriangleCullMode {
    /// Only back faces are visible.
    FrontFaceCulling,
    /// Only front faces are visible.
    #[default]
    BackFaceCulling,
    /// Both faces are visible.
    NoCulling,
}

impl TriangleCullMode {
    /// Swap front and back culling; `NoCulling` is unchanged.
    ///
    /// Shadow queries use the inverted mode so a culled back face still blocks light.
    pub fn inverted(self) -> Self {
        match self {
            Self::FrontFaceCulling => Self::BackFaceCulling,
            Self::BackFaceCulling => Self::FrontFaceCulling,
            Self::NoCulling => Self::NoCulling,
        }
    }

    /// True if a ray whose direction has `normal_dot_direction` against the
    /// triangle normal is culled.
    pub fn culls(self, normal_dot_direction: f32) -> bool {
        match self {
            Self::FrontFaceCulling => normal_dot_direction < 0.0,
            Self::BackFaceCulling => normal_dot_direction > 0.0,
            Self::NoCulling => false,
        }
    }
}

/// A single triangle with a precomputed face normal.
///
/// Vertices are wound clockwise when seen from the front face, so the normal
/// is `(v2 - v0) x (v1 - v0)` and points toward the front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub normal: Vec3,
    pub cull_mode: TriangleCullMode,
    pub material: MaterialId,
}

impl Triangle {
    /// Create a triangle, deriving the normal from the winding.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull_mode: TriangleCullMode, material: MaterialId) -> Self {
        Self::with_normal(v0, v1, v2, face_normal(v0, v1, v2), cull_mode, material)
    }

    /// Create a triangle with a pre-computed normal (mesh triangles reuse their cached one).
    pub fn with_normal(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normal: Vec3,
        cull_mode: TriangleCullMode,
        material: MaterialId,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material,
        }
    }
}

/// Unit normal of a clockwise-wound triangle. Degenerate triangles get a zero normal.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v2 - v0).cross(v1 - v0).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triangle_normal_from_winding() {
        let tri = Triangle::new(
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            TriangleCullMode::BackFaceCulling,
            MaterialId::DEFAULT,
        );

        // Clockwise as seen from -Z, so the front faces -Z
        assert!((tri.normal - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let n = face_normal(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(n, Vec3::ZERO);
    }

    #[test]
    fn test_cull_mode_inversion() {
        use TriangleCullMode::*;

        assert_eq!(BackFaceCulling.inverted(), FrontFaceCulling);
        assert_eq!(FrontFaceCulling.inverted(), BackFaceCulling);
        assert_eq!(NoCulling.inverted(), NoCulling);
        assert_eq!(BackFaceCulling.inverted().inverted(), BackFaceCulling);
    }

    #[test]
    fn test_cull_mode_culls() {
        use TriangleCullMode::*;

        // Ray travelling along the normal sees the back face
        assert!(BackFaceCulling.culls(1.0));
        assert!(!BackFaceCulling.culls(-1.0));
        assert!(FrontFaceCulling.culls(-1.0));
        assert!(!FrontFaceCulling.culls(1.0));
        assert!(!NoCulling.culls(1.0) && !NoCulling.culls(-1.0));
    }

    #[test]
    fn test_plane_normal_is_normalized() {
        let plane = Plane::new(Vec3::ZERO, Vec3::new(0.0, 3.0, 0.0), MaterialId::DEFAULT);
        assert_eq!(plane.normal, Vec3::Y);
    }
}
