//! Closed-form ray/primitive intersection tests.
//!
//! Each primitive answers two queries through [`Hittable`]: a closest-hit
//! query that may overwrite a [`HitRecord`], and an existence query for
//! shadow rays that never touches one. Degenerate configurations (parallel
//! rays, no real root, non-finite parameters) are plain misses.

use glint_math::{Ray, EPSILON};

use crate::geometry::{Plane, Sphere, Triangle};
use crate::hit::{HitRecord, Hittable};
use crate::mesh::TriangleMesh;

/// Which kind of query a triangle test is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Query {
    Closest,
    /// Shadow ray; the cull mode is inverted so culled faces still cast shadows
    Existence,
}

/// Nearest valid root of a ray/sphere intersection.
///
/// Solved geometrically: `t_mid` is where the ray passes closest to the
/// center, `d2` the squared distance there, and `t_half` the half chord.
fn sphere_root(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let to_center = sphere.origin - ray.origin;
    let t_mid = to_center.dot(ray.direction);
    let d2 = to_center.length_squared() - t_mid * t_mid;

    let radicand = sphere.radius * sphere.radius - d2;
    if radicand < 0.0 {
        return None;
    }

    let t_half = radicand.sqrt();
    let bounds = ray.bounds();
    [t_mid - t_half, t_mid + t_half]
        .into_iter()
        .find(|t| bounds.contains(*t))
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match sphere_root(self, ray) {
            Some(t) if rec.accepts(ray, t) => {
                let normal = (ray.at(t) - self.origin).normalize();
                rec.record(ray, t, normal, self.material);
                true
            }
            _ => false,
        }
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        sphere_root(self, ray).is_some()
    }
}

/// Ray parameter where the ray meets the plane, if it does so inside its bounds.
fn plane_root(plane: &Plane, ray: &Ray) -> Option<f32> {
    let denom = ray.direction.dot(plane.normal);
    if denom.abs() < EPSILON {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(plane.normal) / denom;
    ray.bounds().contains(t).then_some(t)
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match plane_root(self, ray) {
            Some(t) if rec.accepts(ray, t) => {
                rec.record(ray, t, self.normal, self.material);
                true
            }
            _ => false,
        }
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        plane_root(self, ray).is_some()
    }
}

/// Test a triangle, returning its hit parameter and ray-facing normal.
///
/// `closest` is the current closest hit; anything it does not accept is a miss.
fn triangle_hit(
    triangle: &Triangle,
    ray: &Ray,
    closest: &HitRecord,
    query: Query,
) -> Option<(f32, glint_math::Vec3)> {
    let n = triangle.normal;
    let n_dot_d = n.dot(ray.direction);
    if n_dot_d.abs() < EPSILON {
        return None;
    }

    let cull_mode = match query {
        Query::Closest => triangle.cull_mode,
        Query::Existence => triangle.cull_mode.inverted(),
    };
    if cull_mode.culls(n_dot_d) {
        return None;
    }

    let t = (triangle.v0 - ray.origin).dot(n) / n_dot_d;
    if !closest.accepts(ray, t) {
        return None;
    }

    // Inside test: for each edge in winding order, (p - a) x (b - a) must
    // point along the normal.
    let p = ray.at(t);
    let edges = [
        (triangle.v0, triangle.v1),
        (triangle.v1, triangle.v2),
        (triangle.v2, triangle.v0),
    ];
    for (a, b) in edges {
        if (p - a).cross(b - a).dot(n) < 0.0 {
            return None;
        }
    }

    // Back-face hits report the flipped normal so shading sees a front face
    let normal = if n_dot_d > 0.0 { -n } else { n };
    Some((t, normal))
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match triangle_hit(self, ray, rec, Query::Closest) {
            Some((t, normal)) => {
                rec.record(ray, t, normal, self.material);
                true
            }
            None => false,
        }
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        triangle_hit(self, ray, &HitRecord::default(), Query::Existence).is_some()
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        debug_assert!(
            self.is_transform_cache_valid(),
            "mesh queried with a stale transform cache; call update_transforms first"
        );
        if !self.world_bounds().hit(ray) {
            return false;
        }

        // Scratch record so a miss never leaks partial state into `rec`
        let mut temp = HitRecord::default();
        for triangle in self.world_triangles() {
            if let Some((t, normal)) = triangle_hit(&triangle, ray, &temp, Query::Closest) {
                temp.record(ray, t, normal, self.material);
            }
        }

        if temp.did_hit && rec.accepts(ray, temp.t) {
            *rec = temp;
            true
        } else {
            false
        }
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        debug_assert!(
            self.is_transform_cache_valid(),
            "mesh queried with a stale transform cache; call update_transforms first"
        );
        if !self.world_bounds().hit(ray) {
            return false;
        }

        let unbounded = HitRecord::default();
        self.world_triangles()
            .any(|triangle| triangle_hit(&triangle, ray, &unbounded, Query::Existence).is_some())
    }
}
