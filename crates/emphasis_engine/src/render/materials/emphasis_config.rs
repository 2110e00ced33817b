//! Construction options for emphasis materials

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Options recognised when creating an [`EmphasisMaterial`](super::EmphasisMaterial)
///
/// Every field is optional. With a `preset`, the preset is applied first and
/// the fields that are set override it; without one, unset fields take their
/// defaults.
///
/// ```toml
/// id = "ghost"
/// preset = "sepia"
/// fill_alpha = 0.6
/// edge_width = 2.0
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmphasisMaterialConfig {
    /// Name used in logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Preset to start from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    /// Whether surfaces are filled (default `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// RGB fill color (default `[0.4, 0.4, 0.4]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<[f32; 3]>,
    /// Fill transparency (default `0.2`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_alpha: Option<f32>,
    /// Whether edges are drawn (default `true`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<bool>,
    /// RGB edge color (default `[0.2, 0.2, 0.2]`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_color: Option<[f32; 3]>,
    /// Edge transparency (default `0.5`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_alpha: Option<f32>,
    /// Edge width in pixels (default `1.0`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edge_width: Option<f32>,
    /// Whether backfaces are drawn (default `false`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backfaces: Option<bool>,
}

impl EmphasisMaterialConfig {
    /// Create an empty configuration (all defaults)
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a named preset
    pub fn from_preset(preset: impl Into<String>) -> Self {
        Self {
            preset: Some(preset.into()),
            ..Self::default()
        }
    }

    /// Set the material id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set fill on/off
    pub fn with_fill(mut self, fill: bool) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set fill color
    pub fn with_fill_color(mut self, color: [f32; 3]) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Set fill transparency
    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = Some(alpha);
        self
    }

    /// Set edges on/off
    pub fn with_edges(mut self, edges: bool) -> Self {
        self.edges = Some(edges);
        self
    }

    /// Set edge color
    pub fn with_edge_color(mut self, color: [f32; 3]) -> Self {
        self.edge_color = Some(color);
        self
    }

    /// Set edge transparency
    pub fn with_edge_alpha(mut self, alpha: f32) -> Self {
        self.edge_alpha = Some(alpha);
        self
    }

    /// Set edge width
    pub fn with_edge_width(mut self, width: f32) -> Self {
        self.edge_width = Some(width);
        self
    }

    /// Set backface visibility
    pub fn with_backfaces(mut self, backfaces: bool) -> Self {
        self.backfaces = Some(backfaces);
        self
    }
}

impl Config for EmphasisMaterialConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigFormat;

    #[test]
    fn test_builder() {
        let config = EmphasisMaterialConfig::from_preset("battlezone")
            .with_id("ghost")
            .with_fill_alpha(0.1)
            .with_backfaces(true);

        assert_eq!(config.preset.as_deref(), Some("battlezone"));
        assert_eq!(config.id.as_deref(), Some("ghost"));
        assert_eq!(config.fill_alpha, Some(0.1));
        assert_eq!(config.backfaces, Some(true));
        assert_eq!(config.edge_width, None);
    }

    #[test]
    fn test_partial_toml() {
        let config: EmphasisMaterialConfig = ConfigFormat::Toml
            .parse("preset = \"sepia\"\nfill_alpha = 0.6\nedge_color = [0.1, 0.2, 0.3]\n")
            .unwrap();

        assert_eq!(config.preset.as_deref(), Some("sepia"));
        assert_eq!(config.fill_alpha, Some(0.6));
        assert_eq!(config.edge_color, Some([0.1, 0.2, 0.3]));
        assert_eq!(config.fill, None);
    }

    #[test]
    fn test_toml_and_ron_round_trip() {
        let config = EmphasisMaterialConfig::new()
            .with_fill(false)
            .with_edge_color([0.2, 1.0, 0.2])
            .with_edge_width(2.0);

        for format in [ConfigFormat::Toml, ConfigFormat::Ron] {
            let text = format.render(&config).unwrap();
            let parsed: EmphasisMaterialConfig = format.parse(&text).unwrap();
            assert_eq!(parsed, config, "{format:?} round trip");
        }
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir()
            .join(format!("emphasis_config_{}.toml", std::process::id()));
        let config = EmphasisMaterialConfig::from_preset("gamegrid").with_edge_alpha(0.3);

        config.save_to_file(&path).unwrap();
        let loaded = EmphasisMaterialConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
    }
}
