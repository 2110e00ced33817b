//! Change-tracked render state descriptor

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::state_pool::{SharedStatePool, StateId, StateKey};
use super::state_value::{FieldKind, FieldSpec, StateValue};
use crate::foundation::math::Vec3;

/// Maximum number of fields in one layout (one dirty bit per field)
pub const MAX_FIELDS: usize = 64;

/// Render state errors
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum StateError {
    /// The state was released and can no longer be written
    #[error("Render state {0:?} has been released")]
    Released(StateId),

    /// Field index outside the state's layout
    #[error("Field #{index} is not part of the '{type_name}' layout")]
    UnknownField {
        /// Requested field index
        index: usize,
        /// Type tag of the state
        type_name: &'static str,
    },

    /// Value kind does not match the field
    #[error("Field '{field}' holds {expected:?} values, got {found:?}")]
    KindMismatch {
        /// Field name
        field: &'static str,
        /// Kind declared by the layout
        expected: FieldKind,
        /// Kind of the attempted write
        found: FieldKind,
    },

    /// Layout has more fields than the dirty mask can track
    #[error("Render state layouts are limited to {max} fields, got {count}")]
    LayoutTooLarge {
        /// Fields in the rejected layout
        count: usize,
        /// Supported maximum
        max: usize,
    },
}

/// Result type for render state operations
pub type StateResult<T> = Result<T, StateError>;

/// Index of a field within a render state layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub usize);

/// Set of fields changed since the consumer last drained them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DirtyMask(u64);

impl DirtyMask {
    /// Whether nothing changed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether a field changed
    pub const fn contains(self, field: FieldId) -> bool {
        field.0 < MAX_FIELDS && self.0 & (1 << field.0) != 0
    }

    /// Number of changed fields
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Raw bits, one per field index
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Changed fields in layout order
    pub fn iter(self) -> impl Iterator<Item = FieldId> {
        (0..MAX_FIELDS).filter(move |&index| self.0 & (1 << index) != 0).map(FieldId)
    }

    const fn with(self, field: FieldId) -> Self {
        Self(self.0 | (1 << field.0))
    }
}

/// Renderer-facing snapshot of a fixed set of parameters
///
/// The layout is fixed at creation. Colors are allocated once and updated in
/// place. Every write that changes a value bumps [`revision`](Self::revision),
/// sets the field's bit in the dirty mask and pushes the new cache key to the
/// pool. Writes of an equal value change nothing.
pub struct RenderState {
    id: StateId,
    type_name: &'static str,
    layout: Box<[FieldSpec]>,
    values: Vec<Option<StateValue>>,
    dirty: DirtyMask,
    revision: u64,
    key: StateKey,
    pool: SharedStatePool,
    released: bool,
}

impl RenderState {
    /// Create a state and register it with `pool`
    pub fn new(
        pool: &SharedStatePool,
        type_name: &'static str,
        layout: &[FieldSpec],
    ) -> StateResult<Self> {
        if layout.len() > MAX_FIELDS {
            return Err(StateError::LayoutTooLarge {
                count: layout.len(),
                max: MAX_FIELDS,
            });
        }

        let values: Vec<Option<StateValue>> = layout
            .iter()
            .map(|spec| match spec.kind {
                FieldKind::Color => Some(StateValue::Color(Vec3::zeros())),
                FieldKind::Bool | FieldKind::Scalar => spec.initial,
            })
            .collect();

        let key = Self::compute_key(type_name, &values);
        let id = pool.borrow_mut().register(type_name, key);

        Ok(Self {
            id,
            type_name,
            layout: layout.into(),
            values,
            dirty: DirtyMask::default(),
            revision: 0,
            key,
            pool: SharedStatePool::clone(pool),
            released: false,
        })
    }

    /// Pool identifier
    pub const fn id(&self) -> StateId {
        self.id
    }

    /// Type tag
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of effective changes since creation
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Semantic identity of the current values
    pub const fn cache_key(&self) -> StateKey {
        self.key
    }

    /// Whether [`release`](Self::release) has run
    pub const fn is_released(&self) -> bool {
        self.released
    }

    /// Fields changed since the last drain, without draining
    pub const fn dirty(&self) -> DirtyMask {
        self.dirty
    }

    /// Drain the dirty mask
    pub fn take_dirty(&mut self) -> DirtyMask {
        std::mem::take(&mut self.dirty)
    }

    /// Field layout
    pub fn layout(&self) -> &[FieldSpec] {
        &self.layout
    }

    /// Look a field up by name
    pub fn field_id(&self, name: &str) -> Option<FieldId> {
        self.layout.iter().position(|spec| spec.name == name).map(FieldId)
    }

    /// Current value of a field (`None` if unset or out of range)
    pub fn get(&self, field: FieldId) -> Option<&StateValue> {
        self.values.get(field.0)?.as_ref()
    }

    /// Current boolean value of a field
    pub fn bool_value(&self, field: FieldId) -> Option<bool> {
        self.get(field)?.as_bool()
    }

    /// Current scalar value of a field
    pub fn scalar(&self, field: FieldId) -> Option<f32> {
        self.get(field)?.as_scalar()
    }

    /// Current color of a field, borrowed from the state's own buffer
    pub fn color(&self, field: FieldId) -> Option<&Vec3> {
        self.get(field)?.as_color()
    }

    /// Write a boolean; `None` writes the field's fallback
    ///
    /// Returns whether the stored value changed.
    pub fn set_bool(&mut self, field: FieldId, value: Option<bool>) -> StateResult<bool> {
        let spec = self.writable(field, FieldKind::Bool)?;
        let value = StateValue::Bool(value.unwrap_or_else(|| spec.fallback.as_bool().unwrap_or_default()));
        Ok(self.replace(field, value))
    }

    /// Write a scalar; `None` writes the field's fallback
    ///
    /// Values are stored as given, without clamping. Returns whether the
    /// stored value changed.
    pub fn set_scalar(&mut self, field: FieldId, value: Option<f32>) -> StateResult<bool> {
        let spec = self.writable(field, FieldKind::Scalar)?;
        let value =
            StateValue::Scalar(value.unwrap_or_else(|| spec.fallback.as_scalar().unwrap_or_default()));
        Ok(self.replace(field, value))
    }

    /// Copy a color into the field's buffer; `None` writes the fallback
    ///
    /// Returns whether any component changed.
    pub fn set_color(&mut self, field: FieldId, value: Option<&Vec3>) -> StateResult<bool> {
        let spec = self.writable(field, FieldKind::Color)?;
        let target = match value {
            Some(color) => *color,
            None => spec.fallback.as_color().copied().unwrap_or_else(Vec3::zeros),
        };

        match self.values.get_mut(field.0) {
            Some(Some(StateValue::Color(current))) => {
                if *current == target {
                    return Ok(false);
                }
                current.copy_from(&target);
            }
            Some(slot) => *slot = Some(StateValue::Color(target)),
            None => {
                return Err(StateError::UnknownField {
                    index: field.0,
                    type_name: self.type_name,
                })
            }
        }
        self.mark_changed(field);
        Ok(true)
    }

    /// Unregister from the pool; later writes fail with [`StateError::Released`]
    ///
    /// Calling this more than once has no further effect.
    pub fn release(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        self.pool.borrow_mut().unregister(self.id);
        log::debug!("Released {} state {:?} at revision {}", self.type_name, self.id, self.revision);
    }

    fn writable(&self, field: FieldId, kind: FieldKind) -> StateResult<FieldSpec> {
        if self.released {
            return Err(StateError::Released(self.id));
        }
        let spec = *self.layout.get(field.0).ok_or(StateError::UnknownField {
            index: field.0,
            type_name: self.type_name,
        })?;
        if spec.kind != kind {
            return Err(StateError::KindMismatch {
                field: spec.name,
                expected: spec.kind,
                found: kind,
            });
        }
        Ok(spec)
    }

    fn replace(&mut self, field: FieldId, value: StateValue) -> bool {
        let slot = &mut self.values[field.0];
        if *slot == Some(value) {
            return false;
        }
        *slot = Some(value);
        self.mark_changed(field);
        true
    }

    fn mark_changed(&mut self, field: FieldId) {
        self.dirty = self.dirty.with(field);
        self.revision += 1;
        self.key = Self::compute_key(self.type_name, &self.values);
        self.pool.borrow_mut().update_key(self.id, self.key);
    }

    fn compute_key(type_name: &str, values: &[Option<StateValue>]) -> StateKey {
        let mut hasher = DefaultHasher::new();
        type_name.hash(&mut hasher);
        for value in values {
            match value {
                Some(value) => {
                    true.hash(&mut hasher);
                    value.hash_into(&mut hasher);
                }
                None => false.hash(&mut hasher),
            }
        }
        StateKey(hasher.finish())
    }
}

impl std::fmt::Debug for RenderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fields = f.debug_struct(self.type_name);
        fields.field("id", &self.id).field("revision", &self.revision);
        for (spec, value) in self.layout.iter().zip(&self.values) {
            fields.field(spec.name, value);
        }
        fields.finish()
    }
}

impl Drop for RenderState {
    fn drop(&mut self) {
        self.release();
    }
}
