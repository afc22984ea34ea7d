//! Analytic reflectance functions.
//!
//! Stateless and allocation-free. Direction arguments are unit vectors
//! pointing *away* from the surface unless stated otherwise. Roughness follows
//! the Unreal convention: the GGX `alpha` is `roughness²`.

use std::f32::consts::PI;

use glint_math::Vec3;

use crate::material::Color;

/// Lambertian diffuse with a scalar reflectance `kd`.
#[inline]
pub fn lambert(kd: f32, cd: Color) -> Color {
    cd * kd / PI
}

/// Lambertian diffuse with a per-channel reflectance `kd`.
#[inline]
pub fn lambert_colored(kd: Color, cd: Color) -> Color {
    cd * kd / PI
}

/// Phong specular lobe, replicated across channels.
///
/// `l` points toward the light; it is negated and reflected about `n` before
/// being compared against the view direction `v`.
pub fn phong(ks: f32, exponent: f32, l: Vec3, v: Vec3, n: Vec3) -> Color {
    let incoming = -l;
    let reflected = incoming - 2.0 * incoming.dot(n) * n;
    let cos_alpha = reflected.dot(v).max(0.0);
    Color::splat(ks * cos_alpha.powf(exponent))
}

/// Schlick's Fresnel approximation.
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let cos_theta = h.dot(v).max(0.0);
    f0 + (Color::ONE - f0) * (1.0 - cos_theta).powi(5)
}

/// Trowbridge-Reitz GGX normal distribution.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let a2 = alpha * alpha;
    let n_dot_h = n.dot(h).max(0.0);

    let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
    a2 / (PI * denom * denom)
}

/// Schlick-GGX masking for one direction, with the direct-lighting `k` remap.
pub fn geometry_schlick_ggx(n: Vec3, x: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;
    let n_dot_x = n.dot(x).max(0.0);

    n_dot_x / (n_dot_x * (1.0 - k) + k)
}

/// Smith shadowing-masking: Schlick-GGX for the view and light directions.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}
