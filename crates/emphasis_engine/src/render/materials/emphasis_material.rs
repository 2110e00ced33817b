//! Emphasis material
//!
//! Defines how meshes look while ghosted, highlighted or selected: a fill
//! (color + alpha), an edge wireframe (color + alpha + width) and backface
//! visibility. All values live in one [`RenderState`] owned by the material.

use std::rc::Rc;

use super::emphasis_config::EmphasisMaterialConfig;
use super::emphasis_presets::{find_preset, preset_names, EmphasisPreset, DEFAULT_PRESET};
use super::redraw::RedrawListener;
use crate::foundation::math::{rgb, to_rgb, Vec3};
use crate::render::state::{
    DirtyMask, FieldId, FieldSpec, RenderState, SharedStatePool, StateError, StateResult,
};

/// Default for [`EmphasisMaterial::fill`]
pub const DEFAULT_FILL: bool = true;
/// Default for [`EmphasisMaterial::fill_color`]
pub const DEFAULT_FILL_COLOR: [f32; 3] = [0.4, 0.4, 0.4];
/// Default for [`EmphasisMaterial::fill_alpha`]
pub const DEFAULT_FILL_ALPHA: f32 = 0.2;
/// Default for [`EmphasisMaterial::edges`]
pub const DEFAULT_EDGES: bool = true;
/// Default for [`EmphasisMaterial::edge_color`]
pub const DEFAULT_EDGE_COLOR: [f32; 3] = [0.2, 0.2, 0.2];
/// Default for [`EmphasisMaterial::edge_alpha`]
pub const DEFAULT_EDGE_ALPHA: f32 = 0.5;
/// Default for [`EmphasisMaterial::edge_width`]
pub const DEFAULT_EDGE_WIDTH: f32 = 1.0;
/// Default for [`EmphasisMaterial::backfaces`]
pub const DEFAULT_BACKFACES: bool = false;

/// Material errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Preset name not in the preset table
    #[error("Unsupported preset: '{name}' - supported values are {}", .supported.join(", "))]
    UnknownPreset {
        /// Requested name
        name: String,
        /// Every valid name
        supported: Vec<&'static str>,
    },

    /// Render state failure
    #[error("Render state error: {0}")]
    State(#[from] StateError),
}

/// Result type for material operations
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Appearance of emphasised meshes
///
/// Setters normalise their input, ignore writes that would not change the
/// stored value, and otherwise request exactly one redraw.
///
/// `preset` records the last preset applied; editing a field afterwards does
/// not clear it.
pub struct EmphasisMaterial {
    id: Option<String>,
    state: RenderState,
    preset: Option<String>,
    redraw: Rc<dyn RedrawListener>,
}

impl EmphasisMaterial {
    /// Type tag of the owned render state
    pub const TYPE_NAME: &'static str = "EmphasisMaterial";

    /// Fill on/off field
    pub const FILL: FieldId = FieldId(0);
    /// Fill color field
    pub const FILL_COLOR: FieldId = FieldId(1);
    /// Fill alpha field
    pub const FILL_ALPHA: FieldId = FieldId(2);
    /// Edges on/off field
    pub const EDGES: FieldId = FieldId(3);
    /// Edge color field
    pub const EDGE_COLOR: FieldId = FieldId(4);
    /// Edge alpha field
    pub const EDGE_ALPHA: FieldId = FieldId(5);
    /// Edge width field
    pub const EDGE_WIDTH: FieldId = FieldId(6);
    /// Backface visibility field
    pub const BACKFACES: FieldId = FieldId(7);

    /// Render state layout, in field-id order
    pub fn layout() -> [FieldSpec; 8] {
        [
            FieldSpec::boolean("fill", DEFAULT_FILL),
            FieldSpec::color("fillColor", DEFAULT_FILL_COLOR),
            FieldSpec::scalar("fillAlpha", DEFAULT_FILL_ALPHA),
            FieldSpec::boolean("edges", DEFAULT_EDGES),
            FieldSpec::color("edgeColor", DEFAULT_EDGE_COLOR),
            FieldSpec::scalar("edgeAlpha", DEFAULT_EDGE_ALPHA),
            FieldSpec::scalar("edgeWidth", DEFAULT_EDGE_WIDTH),
            FieldSpec::boolean("backfaces", DEFAULT_BACKFACES),
        ]
    }

    /// Create a material and register its state with `pool`
    ///
    /// With `config.preset` set, the preset is applied and then every field
    /// present in `config` overrides it, in layout order. Without a preset
    /// every field is written, absent ones taking their defaults.
    pub fn new(
        pool: &SharedStatePool,
        redraw: Rc<dyn RedrawListener>,
        config: &EmphasisMaterialConfig,
    ) -> MaterialResult<Self> {
        let state = RenderState::new(pool, Self::TYPE_NAME, &Self::layout())?;
        let mut material = Self {
            id: config.id.clone(),
            state,
            preset: None,
            redraw,
        };

        match config.preset.as_deref().filter(|name| !name.is_empty()) {
            Some(preset) => {
                material.set_preset(Some(preset))?;
                if let Some(fill) = config.fill {
                    material.set_fill(fill);
                }
                if let Some(color) = config.fill_color {
                    material.set_fill_color(rgb(color));
                }
                if let Some(alpha) = config.fill_alpha {
                    material.set_fill_alpha(alpha);
                }
                if let Some(edges) = config.edges {
                    material.set_edges(edges);
                }
                if let Some(color) = config.edge_color {
                    material.set_edge_color(rgb(color));
                }
                if let Some(alpha) = config.edge_alpha {
                    material.set_edge_alpha(alpha);
                }
                if let Some(width) = config.edge_width {
                    material.set_edge_width(width);
                }
                if let Some(backfaces) = config.backfaces {
                    material.set_backfaces(backfaces);
                }
            }
            None => {
                material.set_fill(config.fill);
                material.set_fill_color(config.fill_color.map(rgb));
                material.set_fill_alpha(config.fill_alpha);
                material.set_edges(config.edges);
                material.set_edge_color(config.edge_color.map(rgb));
                material.set_edge_alpha(config.edge_alpha);
                material.set_edge_width(config.edge_width);
                material.set_backfaces(config.backfaces);
            }
        }

        // Backfaces are never part of a preset, so make sure the field is set.
        if material.state.bool_value(Self::BACKFACES).is_none() {
            material.set_backfaces(None);
        }

        log::debug!(
            "Created {} '{}' (preset {:?})",
            Self::TYPE_NAME,
            material.label(),
            material.preset
        );
        Ok(material)
    }

    /// Id from the construction config
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Owned render state
    pub const fn state(&self) -> &RenderState {
        &self.state
    }

    /// Drain the fields changed since the last call
    pub fn take_dirty(&mut self) -> DirtyMask {
        self.state.take_dirty()
    }

    /// Whether surfaces are filled with color
    pub fn fill(&self) -> bool {
        self.state.bool_value(Self::FILL).unwrap_or(DEFAULT_FILL)
    }

    /// Enable or disable the fill; `None` enables it
    pub fn set_fill(&mut self, fill: impl Into<Option<bool>>) {
        let outcome = self.state.set_bool(Self::FILL, fill.into());
        self.commit(Self::FILL, outcome);
    }

    /// RGB fill color
    pub fn fill_color(&self) -> Vec3 {
        self.color_or(Self::FILL_COLOR, DEFAULT_FILL_COLOR)
    }

    /// Set the fill color; `None` restores `[0.4, 0.4, 0.4]`
    pub fn set_fill_color(&mut self, color: impl Into<Option<Vec3>>) {
        let color = color.into();
        let outcome = self.state.set_color(Self::FILL_COLOR, color.as_ref());
        self.commit(Self::FILL_COLOR, outcome);
    }

    /// Fill transparency (0.0 transparent, 1.0 opaque)
    pub fn fill_alpha(&self) -> f32 {
        self.state.scalar(Self::FILL_ALPHA).unwrap_or(DEFAULT_FILL_ALPHA)
    }

    /// Set fill transparency; `None` restores `0.2`
    ///
    /// Values outside `[0, 1]` are stored as given.
    pub fn set_fill_alpha(&mut self, alpha: impl Into<Option<f32>>) {
        let outcome = self.state.set_scalar(Self::FILL_ALPHA, alpha.into());
        self.commit(Self::FILL_ALPHA, outcome);
    }

    /// Whether edges are drawn
    pub fn edges(&self) -> bool {
        self.state.bool_value(Self::EDGES).unwrap_or(DEFAULT_EDGES)
    }

    /// Enable or disable edges; `None` enables them
    pub fn set_edges(&mut self, edges: impl Into<Option<bool>>) {
        let outcome = self.state.set_bool(Self::EDGES, edges.into());
        self.commit(Self::EDGES, outcome);
    }

    /// RGB edge color
    pub fn edge_color(&self) -> Vec3 {
        self.color_or(Self::EDGE_COLOR, DEFAULT_EDGE_COLOR)
    }

    /// Set the edge color; `None` restores `[0.2, 0.2, 0.2]`
    pub fn set_edge_color(&mut self, color: impl Into<Option<Vec3>>) {
        let color = color.into();
        let outcome = self.state.set_color(Self::EDGE_COLOR, color.as_ref());
        self.commit(Self::EDGE_COLOR, outcome);
    }

    /// Edge transparency (0.0 transparent, 1.0 opaque)
    pub fn edge_alpha(&self) -> f32 {
        self.state.scalar(Self::EDGE_ALPHA).unwrap_or(DEFAULT_EDGE_ALPHA)
    }

    /// Set edge transparency; `None` restores `0.5`
    ///
    /// Values outside `[0, 1]` are stored as given.
    pub fn set_edge_alpha(&mut self, alpha: impl Into<Option<f32>>) {
        let outcome = self.state.set_scalar(Self::EDGE_ALPHA, alpha.into());
        self.commit(Self::EDGE_ALPHA, outcome);
    }

    /// Edge width in pixels
    pub fn edge_width(&self) -> f32 {
        self.state.scalar(Self::EDGE_WIDTH).unwrap_or(DEFAULT_EDGE_WIDTH)
    }

    /// Set edge width; `None` restores `1.0`
    ///
    /// An explicit `0.0` is kept as zero.
    pub fn set_edge_width(&mut self, width: impl Into<Option<f32>>) {
        let outcome = self.state.set_scalar(Self::EDGE_WIDTH, width.into());
        self.commit(Self::EDGE_WIDTH, outcome);
    }

    /// Whether backfaces of attached geometry are drawn
    pub fn backfaces(&self) -> bool {
        self.state.bool_value(Self::BACKFACES).unwrap_or(DEFAULT_BACKFACES)
    }

    /// Show or hide backfaces; `None` hides them
    pub fn set_backfaces(&mut self, backfaces: impl Into<Option<bool>>) {
        let outcome = self.state.set_bool(Self::BACKFACES, backfaces.into());
        self.commit(Self::BACKFACES, outcome);
    }

    /// Name of the last preset applied
    pub fn preset(&self) -> Option<&str> {
        self.preset.as_deref()
    }

    /// Apply a named preset; `None` selects `"default"`
    ///
    /// Does nothing when `name` is already the recorded preset. An unknown
    /// name is logged and returned as [`MaterialError::UnknownPreset`], and
    /// leaves every field unchanged. Otherwise the seven preset fields go
    /// through the regular setters, so each field that differs requests its
    /// own redraw.
    pub fn set_preset(&mut self, name: Option<&str>) -> MaterialResult<()> {
        let name = name.filter(|name| !name.is_empty()).unwrap_or(DEFAULT_PRESET);
        if self.preset.as_deref() == Some(name) {
            return Ok(());
        }

        let Some(preset) = find_preset(name) else {
            let err = MaterialError::UnknownPreset {
                name: name.to_string(),
                supported: preset_names().collect(),
            };
            log::error!("{} '{}': {}", Self::TYPE_NAME, self.label(), err);
            return Err(err);
        };

        self.apply(preset);
        self.preset = Some(name.to_string());
        log::debug!("{} '{}' switched to preset '{}'", Self::TYPE_NAME, self.label(), name);
        Ok(())
    }

    /// Current values as a config that recreates them without a preset
    pub fn to_config(&self) -> EmphasisMaterialConfig {
        EmphasisMaterialConfig {
            id: self.id.clone(),
            preset: None,
            fill: Some(self.fill()),
            fill_color: Some(to_rgb(&self.fill_color())),
            fill_alpha: Some(self.fill_alpha()),
            edges: Some(self.edges()),
            edge_color: Some(to_rgb(&self.edge_color())),
            edge_alpha: Some(self.edge_alpha()),
            edge_width: Some(self.edge_width()),
            backfaces: Some(self.backfaces()),
        }
    }

    /// Release the render state and consume the material
    ///
    /// Ownership rules out a second destroy or any access afterwards:
    ///
    /// ```compile_fail
    /// # use std::rc::Rc;
    /// # use emphasis_engine::prelude::*;
    /// let pool = StatePool::shared();
    /// let material =
    ///     EmphasisMaterial::new(&pool, Rc::new(RedrawFlag::new()), &Default::default()).unwrap();
    /// material.destroy();
    /// let _ = material.fill();
    /// ```
    pub fn destroy(mut self) {
        self.state.release();
        log::debug!("Destroyed {} '{}'", Self::TYPE_NAME, self.label());
    }

    fn apply(&mut self, preset: &EmphasisPreset) {
        self.set_fill(preset.fill);
        self.set_fill_color(rgb(preset.fill_color));
        self.set_fill_alpha(preset.fill_alpha);
        self.set_edges(preset.edges);
        self.set_edge_color(rgb(preset.edge_color));
        self.set_edge_alpha(preset.edge_alpha);
        self.set_edge_width(preset.edge_width);
    }

    fn color_or(&self, field: FieldId, fallback: [f32; 3]) -> Vec3 {
        self.state.color(field).copied().unwrap_or_else(|| rgb(fallback))
    }

    fn commit(&self, field: FieldId, outcome: StateResult<bool>) {
        match outcome {
            Ok(true) => self.redraw.request_redraw(),
            Ok(false) => {}
            Err(err) => log::error!(
                "{} '{}': failed to write field {:?}: {}",
                Self::TYPE_NAME,
                self.label(),
                field,
                err
            ),
        }
    }

    fn label(&self) -> &str {
        self.id.as_deref().unwrap_or("<anonymous>")
    }
}

impl std::fmt::Debug for EmphasisMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmphasisMaterial")
            .field("id", &self.id)
            .field("preset", &self.preset)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::materials::RedrawFlag;
    use crate::render::state::StatePool;
    use approx::assert_relative_eq;

    fn material_with(config: &EmphasisMaterialConfig) -> (EmphasisMaterial, Rc<RedrawFlag>, SharedStatePool) {
        let pool = StatePool::shared();
        let redraw = Rc::new(RedrawFlag::new());
        let material = EmphasisMaterial::new(&pool, redraw.clone(), config).unwrap();
        (material, redraw, pool)
    }

    fn assert_matches_preset(material: &EmphasisMaterial, name: &str) {
        let preset = find_preset(name).unwrap();
        assert_eq!(material.fill(), preset.fill);
        assert_eq!(material.fill_color(), rgb(preset.fill_color));
        assert_eq!(material.fill_alpha(), preset.fill_alpha);
        assert_eq!(material.edges(), preset.edges);
        assert_eq!(material.edge_color(), rgb(preset.edge_color));
        assert_eq!(material.edge_alpha(), preset.edge_alpha);
        assert_eq!(material.edge_width(), preset.edge_width);
    }

    #[test]
    fn test_defaults_without_preset() {
        let (material, _, _) = material_with(&EmphasisMaterialConfig::new());

        assert!(material.fill());
        assert_eq!(material.fill_color(), Vec3::new(0.4, 0.4, 0.4));
        assert_relative_eq!(material.fill_alpha(), 0.2);
        assert!(material.edges());
        assert_eq!(material.edge_color(), Vec3::new(0.2, 0.2, 0.2));
        assert_relative_eq!(material.edge_alpha(), 0.5);
        assert_relative_eq!(material.edge_width(), 1.0);
        assert!(!material.backfaces());
        assert_eq!(material.preset(), None);
    }

    #[test]
    fn test_every_field_is_set_after_construction() {
        let (material, _, _) = material_with(&EmphasisMaterialConfig::from_preset("sunset"));
        for index in 0..EmphasisMaterial::layout().len() {
            assert!(material.state().get(FieldId(index)).is_some(), "field {index} unset");
        }
        assert!(!material.backfaces());
    }

    #[test]
    fn test_repeated_color_write_redraws_once() {
        let (mut material, redraw, _) = material_with(&EmphasisMaterialConfig::new());
        let before = redraw.requests();

        for color in [Vec3::new(0.1, 0.2, 0.3), Vec3::new(1.0, 0.0, 0.5), Vec3::zeros()] {
            let start = redraw.requests();
            material.set_fill_color(color);
            material.set_fill_color(color);
            assert_eq!(redraw.requests(), start + 1);
            assert_eq!(material.fill_color(), color);
        }
        assert_eq!(redraw.requests(), before + 3);
    }

    #[test]
    fn test_equal_writes_do_not_redraw() {
        let (mut material, redraw, _) = material_with(&EmphasisMaterialConfig::new());
        redraw.take();
        let before = redraw.requests();

        material.set_fill(true);
        material.set_fill_alpha(0.2);
        material.set_edges(None);
        material.set_edge_color(None);
        material.set_edge_alpha(0.5);
        material.set_edge_width(1.0);
        material.set_backfaces(false);

        assert_eq!(redraw.requests(), before);
        assert!(!redraw.is_pending());
    }

    #[test]
    fn test_booleans_default_true_only_false_disables() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::new());

        material.set_fill(false);
        assert!(!material.fill());
        material.set_fill(None);
        assert!(material.fill());
        material.set_fill(false);
        material.set_fill(true);
        assert!(material.fill());

        material.set_edges(false);
        assert!(!material.edges());
        material.set_edges(None);
        assert!(material.edges());
    }

    #[test]
    fn test_backfaces_default_false() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::new().with_backfaces(true));
        assert!(material.backfaces());
        material.set_backfaces(None);
        assert!(!material.backfaces());
    }

    #[test]
    fn test_alpha_resets_to_defaults() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::from_preset("battlezone"));

        material.set_edge_alpha(None);
        assert_relative_eq!(material.edge_alpha(), 0.5);
        material.set_fill_alpha(None);
        assert_relative_eq!(material.fill_alpha(), 0.2);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::new());

        material.set_fill_alpha(1.5);
        material.set_edge_alpha(-0.25);
        material.set_edge_width(-3.0);

        assert_relative_eq!(material.fill_alpha(), 1.5);
        assert_relative_eq!(material.edge_alpha(), -0.25);
        assert_relative_eq!(material.edge_width(), -3.0);
    }

    #[test]
    fn test_edge_width_zero_is_kept() {
        let (mut material, redraw, _) = material_with(&EmphasisMaterialConfig::new());
        let before = redraw.requests();

        material.set_edge_width(0.0);
        assert_eq!(material.edge_width(), 0.0);
        assert_eq!(redraw.requests(), before + 1);

        material.set_edge_width(None);
        assert_relative_eq!(material.edge_width(), 1.0);
    }

    #[test]
    fn test_sepia_preset_values() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::new());

        material.set_preset(Some("sepia")).unwrap();

        assert_eq!(
            material.fill_color(),
            Vec3::new(0.970588207244873, 0.7965892553329468, 0.6660899519920349)
        );
        assert_eq!(material.edge_width(), 1.0);
        assert_eq!(material.preset(), Some("sepia"));
        assert_matches_preset(&material, "sepia");
    }

    #[test]
    fn test_every_preset_applies() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::new());
        for name in preset_names() {
            material.set_preset(Some(name)).unwrap();
            assert_matches_preset(&material, name);
            assert_eq!(material.preset(), Some(name));
        }
    }

    #[test]
    fn test_unknown_preset_changes_nothing() {
        let (mut material, redraw, _) = material_with(&EmphasisMaterialConfig::from_preset("vectorscope"));
        material.set_fill_alpha(0.33);
        let before = material.to_config();
        let requests = redraw.requests();
        let revision = material.state().revision();

        let err = material.set_preset(Some("tron")).unwrap_err();

        match &err {
            MaterialError::UnknownPreset { name, supported } => {
                assert_eq!(name, "tron");
                assert_eq!(supported.len(), crate::render::materials::PRESETS.len());
                assert!(supported.contains(&"gamegrid"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().contains("'tron'"));
        assert!(err.to_string().contains("default, defaultWhiteBG"));

        assert_eq!(material.to_config(), before);
        assert_eq!(material.preset(), Some("vectorscope"));
        assert_eq!(redraw.requests(), requests);
        assert_eq!(material.state().revision(), revision);
    }

    #[test]
    fn test_same_preset_is_noop() {
        let (mut material, redraw, _) = material_with(&EmphasisMaterialConfig::from_preset("gamegrid"));
        material.set_fill_alpha(0.1);
        let requests = redraw.requests();

        material.set_preset(Some("gamegrid")).unwrap();

        assert_relative_eq!(material.fill_alpha(), 0.1);
        assert_eq!(redraw.requests(), requests);
    }

    #[test]
    fn test_missing_preset_name_selects_default() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::from_preset("battlezone"));
        material.set_preset(None).unwrap();
        assert_eq!(material.preset(), Some("default"));
        assert_matches_preset(&material, "default");
    }

    #[test]
    fn test_preset_switch_redraws_per_changed_field() {
        let (mut material, redraw, _) = material_with(&EmphasisMaterialConfig::from_preset("vectorscope"));
        let before = redraw.requests();

        // Only fill alpha (0.7 -> 1.0) and edge width (2 -> 3) differ.
        material.set_preset(Some("battlezone")).unwrap();

        assert_eq!(redraw.requests(), before + 2);
        let dirty = material.take_dirty();
        assert!(dirty.contains(EmphasisMaterial::FILL_ALPHA));
        assert!(dirty.contains(EmphasisMaterial::EDGE_WIDTH));
    }

    #[test]
    fn test_manual_edit_keeps_preset_name() {
        let (mut material, _, _) = material_with(&EmphasisMaterialConfig::from_preset("sepia"));
        material.set_edge_color(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(material.preset(), Some("sepia"));
    }

    #[test]
    fn test_preset_with_overrides() {
        let (material, _, _) =
            material_with(&EmphasisMaterialConfig::from_preset("battlezone").with_fill_alpha(0.1));
        let battlezone = find_preset("battlezone").unwrap();

        assert_eq!(material.fill(), battlezone.fill);
        assert_eq!(material.fill_color(), rgb(battlezone.fill_color));
        assert_relative_eq!(material.fill_alpha(), 0.1);
        assert_eq!(material.edges(), battlezone.edges);
        assert_eq!(material.edge_color(), rgb(battlezone.edge_color));
        assert_eq!(material.edge_alpha(), battlezone.edge_alpha);
        assert_eq!(material.edge_width(), battlezone.edge_width);
        assert_eq!(material.preset(), Some("battlezone"));
    }

    #[test]
    fn test_default_preset_at_construction_applies() {
        let (material, _, _) = material_with(&EmphasisMaterialConfig::from_preset("default"));
        assert_eq!(material.preset(), Some("default"));
        assert_matches_preset(&material, "default");
    }

    #[test]
    fn test_unknown_preset_at_construction_fails() {
        let pool = StatePool::shared();
        let result = EmphasisMaterial::new(
            &pool,
            Rc::new(RedrawFlag::new()),
            &EmphasisMaterialConfig::from_preset("neon"),
        );

        assert!(matches!(result, Err(MaterialError::UnknownPreset { .. })));
        assert!(pool.borrow().is_empty());
    }

    #[test]
    fn test_empty_preset_name_is_ignored() {
        let (material, _, _) =
            material_with(&EmphasisMaterialConfig::from_preset("").with_edge_width(4.0));
        assert_eq!(material.preset(), None);
        assert_relative_eq!(material.edge_width(), 4.0);
        assert_relative_eq!(material.fill_alpha(), 0.2);
    }

    #[test]
    fn test_to_config_recreates_values() {
        let (mut material, _, pool) = material_with(&EmphasisMaterialConfig::from_preset("sunset").with_id("ghost"));
        material.set_backfaces(true);

        let config = material.to_config();
        assert_eq!(config.preset, None);
        assert_eq!(config.id.as_deref(), Some("ghost"));

        let copy = EmphasisMaterial::new(&pool, Rc::new(RedrawFlag::new()), &config).unwrap();
        assert_eq!(copy.to_config(), config);
        assert_eq!(copy.state().cache_key(), material.state().cache_key());
        assert_eq!(pool.borrow().equivalents(material.state().id()), vec![copy.state().id()]);
    }

    #[test]
    fn test_destroy_releases_state() {
        let (material, _, pool) = material_with(&EmphasisMaterialConfig::new());
        let id = material.state().id();
        assert!(pool.borrow().contains(id));

        material.destroy();

        assert!(!pool.borrow().contains(id));
        assert!(pool.borrow().is_empty());
    }

    #[test]
    fn test_drop_releases_state() {
        let (material, _, pool) = material_with(&EmphasisMaterialConfig::new());
        drop(material);
        assert!(pool.borrow().is_empty());
    }

    #[test]
    fn test_closure_listener_receives_redraws() {
        use std::cell::Cell;

        let pool = StatePool::shared();
        let hits = Rc::new(Cell::new(0_u32));
        let counter = Rc::clone(&hits);
        let mut material = EmphasisMaterial::new(
            &pool,
            Rc::new(move || counter.set(counter.get() + 1)),
            &EmphasisMaterialConfig::new(),
        )
        .unwrap();
        let start = hits.get();

        material.set_edge_alpha(0.9);
        material.set_edge_alpha(0.9);

        assert_eq!(hits.get(), start + 1);
    }
}
