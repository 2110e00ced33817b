//! Typed values held by render state fields

use std::hash::{Hash, Hasher};

use crate::foundation::math::{canonical_bits, Vec3};

/// Kind of value a render state field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// On/off switch
    Bool,
    /// RGB color, always three components
    Color,
    /// Single float (alpha, width, ...)
    Scalar,
}

/// A value stored in a render state field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateValue {
    /// Boolean value
    Bool(bool),
    /// RGB color
    Color(Vec3),
    /// Scalar value
    Scalar(f32),
}

impl StateValue {
    /// Kind of this value
    pub const fn kind(&self) -> FieldKind {
        match self {
            Self::Bool(_) => FieldKind::Bool,
            Self::Color(_) => FieldKind::Color,
            Self::Scalar(_) => FieldKind::Scalar,
        }
    }

    /// Boolean payload, if this is a boolean
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Scalar payload, if this is a scalar
    pub const fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Color payload, if this is a color
    pub const fn as_color(&self) -> Option<&Vec3> {
        match self {
            Self::Color(value) => Some(value),
            _ => None,
        }
    }

    /// Feed this value into a cache-key hasher
    pub(crate) fn hash_into<H: Hasher>(&self, hasher: &mut H) {
        self.kind().hash(hasher);
        match self {
            Self::Bool(value) => value.hash(hasher),
            Self::Scalar(value) => canonical_bits(*value).hash(hasher),
            Self::Color(value) => {
                for component in value.iter() {
                    canonical_bits(*component).hash(hasher);
                }
            }
        }
    }
}

/// Static description of one field in a render state layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Field name, used for lookups and diagnostics
    pub name: &'static str,
    /// Value kind accepted by this field
    pub kind: FieldKind,
    /// Value before the first write (`None` = unset; ignored for colors)
    pub initial: Option<StateValue>,
    /// Value written when a setter receives no value
    pub fallback: StateValue,
}

impl FieldSpec {
    /// Boolean field, unset until first write
    pub const fn boolean(name: &'static str, fallback: bool) -> Self {
        Self {
            name,
            kind: FieldKind::Bool,
            initial: None,
            fallback: StateValue::Bool(fallback),
        }
    }

    /// Scalar field, unset until first write
    pub const fn scalar(name: &'static str, fallback: f32) -> Self {
        Self {
            name,
            kind: FieldKind::Scalar,
            initial: None,
            fallback: StateValue::Scalar(fallback),
        }
    }

    /// Color field; storage starts zeroed
    pub fn color(name: &'static str, fallback: [f32; 3]) -> Self {
        Self {
            name,
            kind: FieldKind::Color,
            initial: None,
            fallback: StateValue::Color(Vec3::from(fallback)),
        }
    }

    /// Seed the field with a value before the first write
    pub const fn with_initial(mut self, initial: StateValue) -> Self {
        self.initial = Some(initial);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn key_of(value: &StateValue) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_into(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(StateValue::Bool(true).as_bool(), Some(true));
        assert_eq!(StateValue::Bool(true).as_scalar(), None);
        assert_eq!(StateValue::Scalar(0.5).as_scalar(), Some(0.5));
        assert_eq!(
            StateValue::Color(Vec3::new(1.0, 0.0, 0.0)).as_color(),
            Some(&Vec3::new(1.0, 0.0, 0.0))
        );
        assert_eq!(StateValue::Scalar(1.0).kind(), FieldKind::Scalar);
    }

    #[test]
    fn test_hash_distinguishes_kinds() {
        assert_ne!(key_of(&StateValue::Bool(false)), key_of(&StateValue::Scalar(0.0)));
        assert_eq!(key_of(&StateValue::Scalar(-0.0)), key_of(&StateValue::Scalar(0.0)));
    }

    #[test]
    fn test_field_spec_constructors() {
        let spec = FieldSpec::boolean("backfaces", false).with_initial(StateValue::Bool(true));
        assert_eq!(spec.kind, FieldKind::Bool);
        assert_eq!(spec.initial, Some(StateValue::Bool(true)));
        assert_eq!(spec.fallback, StateValue::Bool(false));

        let color = FieldSpec::color("edgeColor", [0.2, 0.2, 0.2]);
        assert_eq!(color.fallback.as_color(), Some(&Vec3::new(0.2, 0.2, 0.2)));
    }
}
