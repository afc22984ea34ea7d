//! Glint Core - geometry, intersection and shading for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle` and `TriangleMesh` with an
//!   explicit world-space transform cache
//! - **Intersection**: closest-hit and shadow queries through [`Hittable`]
//! - **Shading**: the [`brdf`] functions and the [`Material`] variants built on them
//! - **Scene**: ownership of geometry, lights and materials, plus the query fan-out
//! - **Loading**: OBJ files into meshes
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{Material, Scene};
//! use glint_math::{Ray, Vec3};
//!
//! let mut scene = Scene::new();
//! let white = scene.add_material(Material::lambert(1.0, Vec3::ONE));
//! scene.add_sphere(Vec3::ZERO, 1.0, white);
//!
//! let hit = scene.closest_hit(&Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z));
//! assert!(hit.did_hit);
//! ```

pub mod brdf;
pub mod geometry;
pub mod hit;
pub mod intersect;
pub mod light;
pub mod loader;
pub mod material;
pub mod mesh;
pub mod scene;

// Re-export commonly used types
pub use geometry::{MaterialId, Plane, Sphere, Triangle, TriangleCullMode};
pub use hit::{HitRecord, Hittable};
pub use light::{Light, LightKind};
pub use loader::{load_obj_into, MeshLoadError};
pub use material::{Color, Material};
pub use mesh::TriangleMesh;
pub use scene::{MeshId, Scene};
