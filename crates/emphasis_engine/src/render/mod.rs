//! Rendering-side data for emphasis effects
//!
//! - [`state`]: change-tracked render state descriptors and the pool they live in
//! - [`materials`]: emphasis materials, presets and their GPU projection

pub mod state;
pub mod materials;
