//! Render state descriptors
//!
//! A [`RenderState`] is the renderer-facing snapshot of a fixed set of
//! parameters. Writes that do not change a value are ignored; writes that do
//! bump the state's revision, mark the field dirty and refresh the state's
//! cache key in the owning [`StatePool`].

pub mod state_value;
pub mod render_state;
pub mod state_pool;

pub use state_value::{FieldKind, FieldSpec, StateValue};
pub use render_state::{DirtyMask, FieldId, RenderState, StateError, StateResult, MAX_FIELDS};
pub use state_pool::{SharedStatePool, StateId, StateKey, StatePool};
