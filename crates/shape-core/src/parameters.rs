//! Shape kinds and creation parameters

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The closed set of shapes the editor can generate
///
/// Adding a kind requires adding a generator in [`crate::primitive`] and a
/// descriptor variant in [`crate::factory::ShapeDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Box = 0,
    Sphere = 1,
    Prism = 2,
    Capsule = 3,
}

impl ShapeKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "Box",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Prism => "Prism",
            ShapeKind::Capsule => "Capsule",
        }
    }

    /// All shape kinds for UI
    pub fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Box,
            ShapeKind::Sphere,
            ShapeKind::Prism,
            ShapeKind::Capsule,
        ]
    }

    /// The parameter keys that must be present to generate this kind
    ///
    /// Color is required for every kind; keys outside this set are ignored.
    pub fn required_keys(&self) -> &'static [ParameterKey] {
        match self {
            ShapeKind::Box => &[
                ParameterKey::Width,
                ParameterKey::Height,
                ParameterKey::Depth,
                ParameterKey::Color,
            ],
            ShapeKind::Sphere => &[
                ParameterKey::Radius,
                ParameterKey::Smoothing,
                ParameterKey::Color,
            ],
            ShapeKind::Prism => &[
                ParameterKey::Radius,
                ParameterKey::Height,
                ParameterKey::SideCount,
                ParameterKey::Color,
            ],
            ShapeKind::Capsule => &[
                ParameterKey::Radius,
                ParameterKey::Height,
                ParameterKey::Smoothing,
                ParameterKey::Color,
            ],
        }
    }
}

impl TryFrom<u32> for ShapeKind {
    type Error = ShapeError;

    /// Parse a dispatch tag (e.g. a UI popup index) into a kind
    fn try_from(tag: u32) -> Result<Self, ShapeError> {
        match tag {
            0 => Ok(ShapeKind::Box),
            1 => Ok(ShapeKind::Sphere),
            2 => Ok(ShapeKind::Prism),
            3 => Ok(ShapeKind::Capsule),
            other => Err(ShapeError::InvalidShapeKind(other)),
        }
    }
}

/// Keys a parameter bag can carry
///
/// Each shape kind reads a fixed subset, see [`ShapeKind::required_keys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterKey {
    Width,
    Height,
    Depth,
    Radius,
    Smoothing,
    SideCount,
    Color,
}

/// A single parameter value: scalar, count, or color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    /// Continuous dimension (width, height, depth, radius)
    Scalar(f32),
    /// Discrete resolution knob (smoothing, side count)
    Count(u32),
    /// Flat material color (RGBA)
    Color([f32; 4]),
}

impl ParameterValue {
    /// Variant name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            ParameterValue::Scalar(_) => "scalar",
            ParameterValue::Count(_) => "count",
            ParameterValue::Color(_) => "color",
        }
    }
}

impl From<f32> for ParameterValue {
    fn from(value: f32) -> Self {
        ParameterValue::Scalar(value)
    }
}

impl From<u32> for ParameterValue {
    fn from(value: u32) -> Self {
        ParameterValue::Count(value)
    }
}

impl From<[f32; 4]> for ParameterValue {
    fn from(value: [f32; 4]) -> Self {
        ParameterValue::Color(value)
    }
}

/// A key -> value bag describing one shape instance
///
/// Filled in by the parameter-collection collaborator (the editor panel) and
/// validated at the factory boundary. Reading a key back always returns the
/// value as supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    values: HashMap<ParameterKey, ParameterValue>,
}

impl ShapeParameters {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value for the key
    pub fn set(&mut self, key: ParameterKey, value: impl Into<ParameterValue>) {
        self.values.insert(key, value.into());
    }

    /// Builder-style insert
    pub fn with(mut self, key: ParameterKey, value: impl Into<ParameterValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get the raw value for a key, if present
    pub fn get(&self, key: ParameterKey) -> Option<&ParameterValue> {
        self.values.get(&key)
    }

    /// Check whether a key is present
    pub fn contains(&self, key: ParameterKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of values in the bag
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a scalar parameter
    ///
    /// A `Count` value is widened to `f32`. This and the narrowing documented
    /// on [`count`](Self::count) are the only numeric coercions.
    pub fn scalar(&self, kind: ShapeKind, key: ParameterKey) -> Result<f32, ShapeError> {
        match self.values.get(&key) {
            Some(ParameterValue::Scalar(value)) => Ok(*value),
            Some(ParameterValue::Count(value)) => Ok(*value as f32),
            Some(other) => Err(ShapeError::ParameterType {
                kind,
                key,
                expected: "scalar",
                found: other.type_name(),
            }),
            None => Err(ShapeError::MissingParameter { kind, key }),
        }
    }

    /// Read a count parameter
    ///
    /// A finite, non-negative `Scalar` value is narrowed by truncation.
    pub fn count(&self, kind: ShapeKind, key: ParameterKey) -> Result<u32, ShapeError> {
        match self.values.get(&key) {
            Some(ParameterValue::Count(value)) => Ok(*value),
            Some(ParameterValue::Scalar(value)) if value.is_finite() && *value >= 0.0 => {
                Ok(*value as u32)
            }
            Some(other) => Err(ShapeError::ParameterType {
                kind,
                key,
                expected: "count",
                found: other.type_name(),
            }),
            None => Err(ShapeError::MissingParameter { kind, key }),
        }
    }

    /// Read a color parameter; colors never coerce
    pub fn color(&self, kind: ShapeKind, key: ParameterKey) -> Result<[f32; 4], ShapeError> {
        match self.values.get(&key) {
            Some(ParameterValue::Color(value)) => Ok(*value),
            Some(other) => Err(ShapeError::ParameterType {
                kind,
                key,
                expected: "color",
                found: other.type_name(),
            }),
            None => Err(ShapeError::MissingParameter { kind, key }),
        }
    }
}

/// Errors surfaced by parameter validation and shape creation
///
/// All of these are caller-input problems reported once; nothing is retried
/// and no partial mesh is ever produced.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShapeError {
    #[error("{kind:?}: required parameter {key:?} is missing")]
    MissingParameter { kind: ShapeKind, key: ParameterKey },

    #[error("{kind:?}: parameter {key:?} must be a {expected} value, got {found}")]
    ParameterType {
        kind: ShapeKind,
        key: ParameterKey,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Unknown shape kind tag: {0}")]
    InvalidShapeKind(u32),

    #[error("{kind:?}: degenerate geometry ({detail})")]
    DegenerateGeometry { kind: ShapeKind, detail: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_tag() {
        assert!(matches!(ShapeKind::try_from(0), Ok(ShapeKind::Box)));
        assert!(matches!(ShapeKind::try_from(2), Ok(ShapeKind::Prism)));
        assert!(matches!(
            ShapeKind::try_from(4),
            Err(ShapeError::InvalidShapeKind(4))
        ));
    }

    #[test]
    fn test_all_kinds_require_color() {
        for kind in ShapeKind::all() {
            assert!(kind.required_keys().contains(&ParameterKey::Color));
        }
    }

    #[test]
    fn test_scalar_getter() {
        let params = ShapeParameters::new().with(ParameterKey::Radius, 1.5f32);
        assert_eq!(
            params.scalar(ShapeKind::Sphere, ParameterKey::Radius).unwrap(),
            1.5
        );
    }

    #[test]
    fn test_count_widens_to_scalar() {
        let params = ShapeParameters::new().with(ParameterKey::Radius, 2u32);
        assert_eq!(
            params.scalar(ShapeKind::Sphere, ParameterKey::Radius).unwrap(),
            2.0
        );
    }

    #[test]
    fn test_scalar_narrows_to_count() {
        let params = ShapeParameters::new().with(ParameterKey::SideCount, 6.9f32);
        assert_eq!(
            params.count(ShapeKind::Prism, ParameterKey::SideCount).unwrap(),
            6
        );
    }

    #[test]
    fn test_negative_scalar_does_not_narrow() {
        let params = ShapeParameters::new().with(ParameterKey::SideCount, -3.0f32);
        assert!(matches!(
            params.count(ShapeKind::Prism, ParameterKey::SideCount),
            Err(ShapeError::ParameterType { .. })
        ));
    }

    #[test]
    fn test_color_never_coerces() {
        let params = ShapeParameters::new().with(ParameterKey::Color, 1.0f32);
        assert!(matches!(
            params.color(ShapeKind::Box, ParameterKey::Color),
            Err(ShapeError::ParameterType { .. })
        ));
    }

    #[test]
    fn test_missing_key() {
        let params = ShapeParameters::new();
        assert!(matches!(
            params.scalar(ShapeKind::Box, ParameterKey::Width),
            Err(ShapeError::MissingParameter {
                kind: ShapeKind::Box,
                key: ParameterKey::Width,
            })
        ));
    }

    #[test]
    fn test_set_replaces_value() {
        let mut params = ShapeParameters::new().with(ParameterKey::Height, 1.0f32);
        params.set(ParameterKey::Height, 3.0f32);
        assert_eq!(params.len(), 1);
        assert_eq!(
            params.get(ParameterKey::Height),
            Some(&ParameterValue::Scalar(3.0))
        );
    }

    #[test]
    fn test_contains_and_empty() {
        let params = ShapeParameters::new();
        assert!(params.is_empty());

        let params = params.with(ParameterKey::Color, [1.0, 0.0, 0.0, 1.0]);
        assert!(params.contains(ParameterKey::Color));
        assert!(!params.contains(ParameterKey::Radius));
    }
}
