//! Scene-wide emphasis materials
//!
//! Meshes without their own emphasis material fall back to these. All three
//! share the scene's state pool and redraw listener.

use std::rc::Rc;

use super::emphasis_config::EmphasisMaterialConfig;
use super::emphasis_material::{EmphasisMaterial, MaterialResult};
use super::redraw::RedrawListener;
use crate::render::state::SharedStatePool;

/// Preset used by the scene's ghost material
pub const GHOST_PRESET: &str = "sepia";
/// Preset used by the scene's highlight material
pub const HIGHLIGHT_PRESET: &str = "yellowHighlight";
/// Preset used by the scene's selection material
pub const SELECTED_PRESET: &str = "greenSelected";

/// Default ghost, highlight and selection materials of a scene
#[derive(Debug)]
pub struct EmphasisMaterials {
    /// Applied to ghosted meshes
    pub ghost: EmphasisMaterial,
    /// Applied to highlighted meshes
    pub highlight: EmphasisMaterial,
    /// Applied to selected meshes
    pub selected: EmphasisMaterial,
}

impl EmphasisMaterials {
    /// Create the three defaults from their presets
    pub fn new(pool: &SharedStatePool, redraw: &Rc<dyn RedrawListener>) -> MaterialResult<Self> {
        let create = |id: &str, preset: &str| {
            EmphasisMaterial::new(
                pool,
                Rc::clone(redraw),
                &EmphasisMaterialConfig::from_preset(preset).with_id(id),
            )
        };

        Ok(Self {
            ghost: create("default.ghostMaterial", GHOST_PRESET)?,
            highlight: create("default.highlightMaterial", HIGHLIGHT_PRESET)?,
            selected: create("default.selectedMaterial", SELECTED_PRESET)?,
        })
    }

    /// All three materials, ghost first
    pub fn iter(&self) -> impl Iterator<Item = &EmphasisMaterial> {
        [&self.ghost, &self.highlight, &self.selected].into_iter()
    }

    /// Release all three materials
    pub fn destroy(self) {
        self.ghost.destroy();
        self.highlight.destroy();
        self.selected.destroy();
    }
}
