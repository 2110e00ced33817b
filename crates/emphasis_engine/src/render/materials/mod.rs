//! Emphasis material system
//!
//! Materials that control how meshes are drawn while ghosted, highlighted or
//! selected, the preset table they can be configured from, and their GPU
//! uniform layout.

pub mod emphasis_config;
pub mod emphasis_material;
pub mod emphasis_presets;
pub mod emphasis_set;
pub mod emphasis_ubo;
pub mod redraw;

// Re-export commonly used types
pub use emphasis_config::EmphasisMaterialConfig;
pub use emphasis_material::{EmphasisMaterial, MaterialError, MaterialResult};
pub use emphasis_presets::{find_preset, preset_names, EmphasisPreset, DEFAULT_PRESET, PRESETS};
pub use emphasis_set::EmphasisMaterials;
pub use emphasis_ubo::{EmphasisFlags, EmphasisMaterialUBO};
pub use redraw::{RedrawFlag, RedrawListener, SharedRedraw};
