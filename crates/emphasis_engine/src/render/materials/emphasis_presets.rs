//! Named emphasis looks
//!
//! The table is static and read-only. Applying a preset writes all seven of
//! its fields through the material's normal setters; backface visibility is
//! not part of a preset.

#![allow(clippy::excessive_precision)]

/// Complete set of values written by one preset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisPreset {
    /// Whether surfaces are filled
    pub fill: bool,
    /// RGB fill color
    pub fill_color: [f32; 3],
    /// Fill transparency (0.0 transparent, 1.0 opaque)
    pub fill_alpha: f32,
    /// Whether edges are drawn
    pub edges: bool,
    /// RGB edge color
    pub edge_color: [f32; 3],
    /// Edge transparency (0.0 transparent, 1.0 opaque)
    pub edge_alpha: f32,
    /// Edge width in pixels
    pub edge_width: f32,
}

/// Preset applied when none is named
pub const DEFAULT_PRESET: &str = "default";

/// Every built-in preset, in declaration order
pub static PRESETS: &[(&str, EmphasisPreset)] = &[
    // Grey wireframe with translucent fill, for light backgrounds
    (
        "default",
        EmphasisPreset {
            fill: true,
            fill_color: [0.4, 0.4, 0.4],
            fill_alpha: 0.2,
            edges: true,
            edge_color: [0.2, 0.2, 0.2],
            edge_alpha: 0.5,
            edge_width: 1.0,
        },
    ),
    (
        "defaultWhiteBG",
        EmphasisPreset {
            fill: true,
            fill_color: [1.0, 1.0, 1.0],
            fill_alpha: 0.6,
            edges: true,
            edge_color: [0.2, 0.2, 0.2],
            edge_alpha: 1.0,
            edge_width: 1.0,
        },
    ),
    (
        "defaultLightBG",
        EmphasisPreset {
            fill: true,
            fill_color: [0.4, 0.4, 0.4],
            fill_alpha: 0.2,
            edges: true,
            edge_color: [0.2, 0.2, 0.2],
            edge_alpha: 0.5,
            edge_width: 1.0,
        },
    ),
    (
        "defaultDarkBG",
        EmphasisPreset {
            fill: true,
            fill_color: [0.4, 0.4, 0.4],
            fill_alpha: 0.2,
            edges: true,
            edge_color: [0.5, 0.5, 0.5],
            edge_alpha: 0.5,
            edge_width: 1.0,
        },
    ),
    (
        "phosphorous",
        EmphasisPreset {
            fill: true,
            fill_color: [0.0, 0.0, 0.0],
            fill_alpha: 0.4,
            edges: true,
            edge_color: [0.9, 0.9, 0.9],
            edge_alpha: 0.5,
            edge_width: 2.0,
        },
    ),
    (
        "sunset",
        EmphasisPreset {
            fill: true,
            fill_color: [0.9, 0.9, 0.6],
            fill_alpha: 0.2,
            edges: true,
            edge_color: [0.9, 0.9, 0.9],
            edge_alpha: 0.5,
            edge_width: 1.0,
        },
    ),
    // Green wireframe, black translucent fill
    (
        "vectorscope",
        EmphasisPreset {
            fill: true,
            fill_color: [0.0, 0.0, 0.0],
            fill_alpha: 0.7,
            edges: true,
            edge_color: [0.2, 1.0, 0.2],
            edge_alpha: 1.0,
            edge_width: 2.0,
        },
    ),
    // Opaque black fill gives a hidden-lines-removed look
    (
        "battlezone",
        EmphasisPreset {
            fill: true,
            fill_color: [0.0, 0.0, 0.0],
            fill_alpha: 1.0,
            edges: true,
            edge_color: [0.2, 1.0, 0.2],
            edge_alpha: 1.0,
            edge_width: 3.0,
        },
    ),
    (
        "sepia",
        EmphasisPreset {
            fill: true,
            fill_color: [0.970588207244873, 0.7965892553329468, 0.6660899519920349],
            fill_alpha: 0.4,
            edges: true,
            edge_color: [0.529411792755127, 0.4577854573726654, 0.4100345969200134],
            edge_alpha: 1.0,
            edge_width: 1.0,
        },
    ),
    (
        "yellowHighlight",
        EmphasisPreset {
            fill: true,
            fill_color: [1.0, 1.0, 0.0],
            fill_alpha: 0.5,
            edges: true,
            edge_color: [0.529411792755127, 0.4577854573726654, 0.4100345969200134],
            edge_alpha: 1.0,
            edge_width: 1.0,
        },
    ),
    (
        "greenSelected",
        EmphasisPreset {
            fill: true,
            fill_color: [0.0, 1.0, 0.0],
            fill_alpha: 0.5,
            edges: true,
            edge_color: [0.4577854573726654, 0.529411792755127, 0.4100345969200134],
            edge_alpha: 1.0,
            edge_width: 1.0,
        },
    ),
    // Tron
    (
        "gamegrid",
        EmphasisPreset {
            fill: true,
            fill_color: [0.2, 0.2, 0.7],
            fill_alpha: 0.9,
            edges: true,
            edge_color: [0.4, 0.4, 1.6],
            edge_alpha: 0.8,
            edge_width: 3.0,
        },
    ),
];

/// Look a preset up by name
pub fn find_preset(name: &str) -> Option<&'static EmphasisPreset> {
    PRESETS
        .iter()
        .find(|(preset_name, _)| *preset_name == name)
        .map(|(_, preset)| preset)
}

/// Names of every built-in preset, in declaration order
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}
