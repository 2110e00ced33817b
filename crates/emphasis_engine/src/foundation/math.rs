//! Math utilities and types
//!
//! Provides the vector types used by render state and materials.

pub use nalgebra::Vector3;

/// 3D vector type, also used for RGB colors
pub type Vec3 = Vector3<f32>;

/// Build a color vector from an RGB triple
pub fn rgb(color: [f32; 3]) -> Vec3 {
    Vec3::from(color)
}

/// Flatten a color vector into an RGB triple
pub fn to_rgb(color: &Vec3) -> [f32; 3] {
    [color.x, color.y, color.z]
}

/// Fold `-0.0` into `0.0` so equal floats hash equally
pub fn canonical_bits(value: f32) -> u32 {
    if value == 0.0 {
        0.0_f32.to_bits()
    } else {
        value.to_bits()
    }
}
