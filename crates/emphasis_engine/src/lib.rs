//! # Emphasis Engine
//!
//! Emphasis materials for the rendering engine: the parameter sets that control
//! how meshes look when they are ghosted, highlighted or selected.
//!
//! ## Features
//!
//! - **Change-tracked render state**: every material owns one [`RenderState`]
//!   with a revision counter, a dirty mask and a semantic cache key
//! - **State pool**: live render states are registered by id and cache key so
//!   renderers can find descriptors with identical parameters
//! - **Presets**: a static library of named emphasis looks
//! - **Redraw signalling**: one redraw request per field that actually changes
//! - **Config files**: materials can be described in TOML or RON
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use emphasis_engine::prelude::*;
//!
//! let pool = StatePool::shared();
//! let redraw = Rc::new(RedrawFlag::new());
//!
//! let config = EmphasisMaterialConfig::from_preset("sepia").with_edge_width(2.0);
//! let mut ghost = EmphasisMaterial::new(&pool, redraw.clone(), &config).unwrap();
//!
//! ghost.set_fill_alpha(0.6);
//! assert!(redraw.take());
//! assert_eq!(ghost.preset(), Some("sepia"));
//!
//! ghost.destroy();
//! assert!(pool.borrow().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod foundation;
pub mod render;

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        foundation::math::Vec3,
        render::materials::{
            find_preset, preset_names, EmphasisFlags, EmphasisMaterial, EmphasisMaterialConfig,
            EmphasisMaterialUBO, EmphasisMaterials, EmphasisPreset, MaterialError, MaterialResult,
            RedrawFlag, RedrawListener, PRESETS,
        },
        render::state::{
            DirtyMask, FieldId, RenderState, SharedStatePool, StateError, StateId, StateKey,
            StatePool,
        },
    };
}

pub use render::state::RenderState;
