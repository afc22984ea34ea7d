//! Surface materials.

use glint_math::Vec3;

use crate::brdf;
use crate::hit::HitRecord;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Base reflectivity of dielectrics in the metalness workflow.
const DIELECTRIC_F0: f32 = 0.04;

/// Keeps the Cook-Torrance denominator away from zero at grazing angles.
const COOK_TORRANCE_EPSILON: f32 = 1e-4;

/// A shading model and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Constant color, unaffected by lighting.
    SolidColor { color: Color },

    /// Ideal diffuse reflector.
    Lambert { kd: f32, diffuse_color: Color },

    /// Lambert diffuse plus a Phong specular lobe.
    LambertPhong {
        kd: f32,
        diffuse_color: Color,
        ks: f32,
        phong_exponent: f32,
    },

    /// Microfacet model: GGX distribution, Smith geometry, Schlick Fresnel.
    CookTorrance {
        /// Base color; the Fresnel reflectance at normal incidence for metals
        albedo: Color,
        /// 0 for dielectrics, 1 for metals
        metalness: f32,
        roughness: f32,
    },
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Self::SolidColor { color }
    }

    pub fn lambert(kd: f32, diffuse_color: Color) -> Self {
        Self::Lambert { kd, diffuse_color }
    }

    pub fn lambert_phong(kd: f32, diffuse_color: Color, ks: f32, phong_exponent: f32) -> Self {
        Self::LambertPhong {
            kd,
            diffuse_color,
            ks,
            phong_exponent,
        }
    }

    /// Metalness is clamped to `[0, 1]` and roughness to `[1e-3, 1]`.
    pub fn cook_torrance(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Self::CookTorrance {
            albedo,
            metalness: metalness.clamp(0.0, 1.0),
            roughness: roughness.clamp(1e-3, 1.0),
        }
    }

    /// Reflected color at `hit` for light arriving from direction `l`
    /// (pointing toward the light) and seen from direction `v` (pointing
    /// toward the viewer).
    pub fn shade(&self, hit: &HitRecord, l: Vec3, v: Vec3) -> Color {
        match *self {
            Self::SolidColor { color } => color,
            Self::Lambert { kd, diffuse_color } => brdf::lambert(kd, diffuse_color),
            Self::LambertPhong {
                kd,
                diffuse_color,
                ks,
                phong_exponent,
            } => brdf::lambert(kd, diffuse_color) + brdf::phong(ks, phong_exponent, l, v, hit.normal),
            Self::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => cook_torrance(albedo, metalness, roughness, hit.normal, l, v),
        }
    }
}

impl Default for Material {
    /// Opaque red, so missing assignments stand out in a render.
    fn default() -> Self {
        Self::SolidColor {
            color: Color::new(1.0, 0.0, 0.0),
        }
    }
}

fn cook_torrance(albedo: Color, metalness: f32, roughness: f32, n: Vec3, l: Vec3, v: Vec3) -> Color {
    let f0 = Color::splat(DIELECTRIC_F0).lerp(albedo, metalness);
    let h = (l + v).normalize_or_zero();

    let f = brdf::fresnel_schlick(h, v, f0);
    let d = brdf::normal_distribution_ggx(n, h, roughness);
    let g = brdf::geometry_smith(n, v, l, roughness);

    let n_dot_v = n.dot(v).max(COOK_TORRANCE_EPSILON);
    let n_dot_l = n.dot(l).max(COOK_TORRANCE_EPSILON);
    let specular = f * (d * g) / (4.0 * n_dot_v * n_dot_l);

    // Whatever Fresnel does not reflect is diffused, except by metals
    let kd = (Color::ONE - f) * (1.0 - metalness);
    let diffuse = brdf::lambert_colored(kd, albedo);

    diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    const TOLERANCE: f32 = 1e-5;

    fn hit_facing_up() -> HitRecord {
        HitRecord {
            t: 1.0,
            did_hit: true,
            normal: Vec3::Y,
            ..Default::default()
        }
    }

    #[test]
    fn test_solid_color_ignores_lighting() {
        let material = Material::solid_color(Color::new(0.2, 0.4, 0.6));
        let hit = hit_facing_up();

        assert_eq!(material.shade(&hit, Vec3::Y, Vec3::Y), Color::new(0.2, 0.4, 0.6));
        assert_eq!(material.shade(&hit, -Vec3::Y, Vec3::X), Color::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_default_is_red() {
        assert_eq!(
            Material::default(),
            Material::SolidColor {
                color: Color::new(1.0, 0.0, 0.0)
            }
        );
    }

    #[test]
    fn test_lambert_is_view_independent() {
        let material = Material::lambert(0.5, Color::ONE);
        let hit = hit_facing_up();

        let a = material.shade(&hit, Vec3::Y, Vec3::Y);
        let b = material.shade(&hit, Vec3::Y, Vec3::new(1.0, 1.0, 0.0).normalize());
        assert_eq!(a, b);
        assert!((a - Color::splat(0.5 / PI)).length() < TOLERANCE);
    }

    #[test]
    fn test_lambert_phong_adds_highlight() {
        let diffuse_only = Material::lambert(1.0, Color::ONE);
        let glossy = Material::lambert_phong(1.0, Color::ONE, 0.5, 20.0);
        let hit = hit_facing_up();

        let l = Vec3::new(1.0, 1.0, 0.0).normalize();
        let mirror = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let highlight = glossy.shade(&hit, l, mirror) - diffuse_only.shade(&hit, l, mirror);
        assert!((highlight - Color::splat(0.5)).length() < TOLERANCE);
    }

    #[test]
    fn test_cook_torrance_parameters_are_clamped() {
        let Material::CookTorrance {
            metalness,
            roughness,
            ..
        } = Material::cook_torrance(Color::ONE, 2.0, 0.0)
        else {
            panic!("expected Cook-Torrance");
        };

        assert_eq!(metalness, 1.0);
        assert!(roughness > 0.0);
    }

    #[test]
    fn test_metal_has_no_diffuse() {
        let albedo = Color::new(0.97, 0.96, 0.91);
        let metal = Material::cook_torrance(albedo, 1.0, 1.0);
        let hit = hit_facing_up();

        let l = Vec3::Y;
        let v = Vec3::Y;
        let shaded = metal.shade(&hit, l, v);

        // Head-on: F = f0 = albedo, D = 1/pi at roughness 1, G = 1
        let expected = albedo / (4.0 * PI);
        assert!((shaded - expected).length() < 1e-4);
    }

    #[test]
    fn test_dielectric_has_diffuse() {
        let albedo = Color::new(0.75, 0.75, 0.75);
        let plastic = Material::cook_torrance(albedo, 0.0, 1.0);
        let hit = hit_facing_up();

        let shaded = plastic.shade(&hit, Vec3::Y, Vec3::Y);
        let f0 = Color::splat(DIELECTRIC_F0);
        let expected = (Color::ONE - f0) * albedo / PI + f0 / (4.0 * PI);
        assert!((shaded - expected).length() < 1e-4);
    }

    #[test]
    fn test_smooth_metal_is_sharper() {
        let hit = hit_facing_up();
        let l = Vec3::new(0.3, 1.0, 0.0).normalize();
        let mirror = Vec3::new(-0.3, 1.0, 0.0).normalize();

        let smooth = Material::cook_torrance(Color::ONE, 1.0, 0.1).shade(&hit, l, mirror);
        let rough = Material::cook_torrance(Color::ONE, 1.0, 1.0).shade(&hit, l, mirror);
        assert!(smooth.x > rough.x);
    }

    #[test]
    fn test_cook_torrance_finite_at_grazing() {
        let material = Material::cook_torrance(Color::ONE, 0.5, 0.6);
        let hit = hit_facing_up();

        let shaded = material.shade(&hit, Vec3::X, -Vec3::X);
        assert!(shaded.is_finite());
    }
}
