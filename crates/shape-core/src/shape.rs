//! Shape entity: generated mesh buffers plus material state

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::buffers::MeshBuffers;
use crate::factory::generate_from_parameters;
use crate::parameters::{ShapeError, ShapeKind, ShapeParameters};

/// A generated shape: one set of mesh buffers and one flat color
///
/// The buffers are always the deterministic image of the current parameter
/// bag. The placement collaborator owns the entity's lifetime; there are no
/// resources to release beyond the buffers themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub id: Uuid,
    pub name: String,
    kind: ShapeKind,
    parameters: ShapeParameters,
    color: [f32; 4],
    buffers: MeshBuffers,
}

impl Shape {
    /// Assemble an entity from already-generated buffers
    pub(crate) fn from_buffers(
        kind: ShapeKind,
        parameters: ShapeParameters,
        color: [f32; 4],
        buffers: MeshBuffers,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: kind.display_name().to_string(),
            kind,
            parameters,
            color,
            buffers,
        }
    }

    /// The kind this entity was generated as
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The parameter bag the mesh was last generated from
    pub fn parameters(&self) -> &ShapeParameters {
        &self.parameters
    }

    /// Flat material color (RGBA)
    pub fn color(&self) -> [f32; 4] {
        self.color
    }

    /// Update material state only; the buffers stay untouched
    pub fn set_color(&mut self, color: [f32; 4]) {
        self.color = color;
    }

    /// The generated mesh buffers
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }

    /// Re-validate a new parameter bag and regenerate the buffers in place
    ///
    /// Validation and generation complete before any field is replaced, so a
    /// failed update leaves the previous mesh fully intact. There is no
    /// incremental update: the mesh is rebuilt from the bag every time.
    pub fn update_parameters(&mut self, parameters: ShapeParameters) -> Result<(), ShapeError> {
        let (color, buffers) = generate_from_parameters(self.kind, &parameters)?;

        self.parameters = parameters;
        self.color = color;
        self.buffers = buffers;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_COLOR;
    use crate::factory::create_shape;
    use crate::parameters::{ParameterKey, ParameterValue};

    fn prism_parameters() -> ShapeParameters {
        ShapeParameters::new()
            .with(ParameterKey::Radius, 1.0f32)
            .with(ParameterKey::Height, 2.0f32)
            .with(ParameterKey::SideCount, 6u32)
            .with(ParameterKey::Color, DEFAULT_COLOR)
    }

    #[test]
    fn test_parameters_round_trip() {
        let shape = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        let parameters = shape.parameters();
        assert_eq!(
            parameters.get(ParameterKey::Radius),
            Some(&ParameterValue::Scalar(1.0))
        );
        assert_eq!(
            parameters.get(ParameterKey::Height),
            Some(&ParameterValue::Scalar(2.0))
        );
        assert_eq!(
            parameters.get(ParameterKey::SideCount),
            Some(&ParameterValue::Count(6))
        );
        assert_eq!(
            parameters.get(ParameterKey::Color),
            Some(&ParameterValue::Color(DEFAULT_COLOR))
        );
    }

    #[test]
    fn test_update_is_idempotent() {
        let mut shape = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        shape.update_parameters(prism_parameters()).unwrap();
        let first = shape.buffers().clone();
        shape.update_parameters(prism_parameters()).unwrap();
        assert_eq!(shape.buffers(), &first);
    }

    #[test]
    fn test_update_regenerates_buffers() {
        let mut shape = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        assert_eq!(shape.buffers().vertex_count(), 4 * 6 + 2 * 6 + 2);

        let updated = prism_parameters().with(ParameterKey::SideCount, 8u32);
        shape.update_parameters(updated).unwrap();
        assert_eq!(shape.buffers().vertex_count(), 4 * 8 + 2 * 8 + 2);
    }

    #[test]
    fn test_failed_update_preserves_state() {
        let mut shape = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        let before_buffers = shape.buffers().clone();
        let before_parameters = shape.parameters().clone();

        let bad = prism_parameters().with(ParameterKey::SideCount, 2u32);
        assert!(matches!(
            shape.update_parameters(bad),
            Err(ShapeError::DegenerateGeometry { .. })
        ));

        assert_eq!(shape.buffers(), &before_buffers);
        assert_eq!(shape.parameters(), &before_parameters);
    }

    #[test]
    fn test_set_color_keeps_buffers() {
        let mut shape = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        let before = shape.buffers().clone();
        shape.set_color([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(shape.color(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(shape.buffers(), &before);
    }

    #[test]
    fn test_entities_get_unique_ids() {
        let a = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        let b = create_shape(ShapeKind::Prism, prism_parameters()).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Prism");
    }
}
