//! Hittable trait and HitRecord for ray-object intersection.

use crate::geometry::MaterialId;
use glint_math::{Ray, Vec3};

/// Record of the closest ray-surface intersection found so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Ray parameter of the hit; `+inf` until something is hit
    pub t: f32,
    pub did_hit: bool,
    pub material: MaterialId,
    /// World-space intersection point
    pub origin: Vec3,
    /// Unit surface normal, oriented against the incoming ray
    pub normal: Vec3,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            t: f32::INFINITY,
            did_hit: false,
            material: MaterialId::DEFAULT,
            origin: Vec3::ZERO,
            normal: Vec3::ZERO,
        }
    }
}

impl HitRecord {
    /// True if `t` is a valid hit for `ray` and strictly closer than the current record.
    #[inline]
    pub fn accepts(&self, ray: &Ray, t: f32) -> bool {
        ray.bounds().contains(t) && t < self.t
    }

    /// Overwrite the record with a new closest hit.
    #[inline]
    pub(crate) fn record(&mut self, ray: &Ray, t: f32, normal: Vec3, material: MaterialId) {
        self.t = t;
        self.did_hit = true;
        self.material = material;
        self.origin = ray.at(t);
        self.normal = normal;
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Closest-hit query.
    ///
    /// Overwrites `rec` only when this object has a hit inside the ray's
    /// bounds that is strictly closer than `rec.t`. Returns whether it did.
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Existence query used for shadow rays. Never records anything.
    fn hit_any(&self, ray: &Ray) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_empty() {
        let rec = HitRecord::default();

        assert!(!rec.did_hit);
        assert_eq!(rec.t, f32::INFINITY);
        assert_eq!(rec.material, MaterialId::DEFAULT);
    }

    #[test]
    fn test_accepts_closer_hits_only() {
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.0, 10.0);
        let mut rec = HitRecord::default();

        assert!(rec.accepts(&ray, 5.0));
        rec.record(&ray, 5.0, -Vec3::Z, MaterialId::DEFAULT);

        assert!(rec.accepts(&ray, 4.0));
        assert!(!rec.accepts(&ray, 5.0));
        assert!(!rec.accepts(&ray, 6.0));
        assert!(!rec.accepts(&ray, -1.0));
        assert!(!rec.accepts(&ray, f32::NAN));
    }

    #[test]
    fn test_record_fills_hit_point() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        let mut rec = HitRecord::default();
        rec.record(&ray, 4.0, -Vec3::Z, MaterialId(2));

        assert!(rec.did_hit);
        assert_eq!(rec.origin, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(rec.material.index(), 2);
    }
}
