//! Shape creation: parameter validation and generator dispatch

use serde::{Deserialize, Serialize};

use crate::buffers::MeshBuffers;
use crate::constants::{CAPSULE_SMOOTHING, PRISM_SIDE_COUNT, SPHERE_SMOOTHING};
use crate::parameters::{ParameterKey, ShapeError, ShapeKind, ShapeParameters};
use crate::primitive::{
    generate_box_mesh, generate_capsule_mesh, generate_prism_mesh, generate_sphere_mesh,
};
use crate::shape::Shape;

/// Validated per-shape parameters
///
/// Extracted from a [`ShapeParameters`] bag at the factory boundary, so the
/// generators only ever run on checked, positive, finite inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ShapeDescriptor {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    Sphere {
        radius: f32,
        smoothing: u32,
    },
    Prism {
        radius: f32,
        height: f32,
        side_count: u32,
    },
    Capsule {
        radius: f32,
        height: f32,
        smoothing: u32,
    },
}

impl ShapeDescriptor {
    /// Extract and validate the parameters required by `kind`
    ///
    /// Returns the descriptor together with the mandatory flat color. Keys
    /// unrelated to `kind` are ignored. Fails before any buffer allocation.
    pub fn from_parameters(
        kind: ShapeKind,
        parameters: &ShapeParameters,
    ) -> Result<(Self, [f32; 4]), ShapeError> {
        let color = parameters.color(kind, ParameterKey::Color)?;

        let descriptor = match kind {
            ShapeKind::Box => Self::Box {
                width: parameters.scalar(kind, ParameterKey::Width)?,
                height: parameters.scalar(kind, ParameterKey::Height)?,
                depth: parameters.scalar(kind, ParameterKey::Depth)?,
            },
            ShapeKind::Sphere => Self::Sphere {
                radius: parameters.scalar(kind, ParameterKey::Radius)?,
                smoothing: parameters.count(kind, ParameterKey::Smoothing)?,
            },
            ShapeKind::Prism => Self::Prism {
                radius: parameters.scalar(kind, ParameterKey::Radius)?,
                height: parameters.scalar(kind, ParameterKey::Height)?,
                side_count: parameters.count(kind, ParameterKey::SideCount)?,
            },
            ShapeKind::Capsule => Self::Capsule {
                radius: parameters.scalar(kind, ParameterKey::Radius)?,
                height: parameters.scalar(kind, ParameterKey::Height)?,
                smoothing: parameters.count(kind, ParameterKey::Smoothing)?,
            },
        };

        descriptor.validate()?;
        Ok((descriptor, color))
    }

    /// Default descriptor for each kind, matching the editor's initial values
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Box => Self::Box {
                width: 1.0,
                height: 1.0,
                depth: 1.0,
            },
            ShapeKind::Sphere => Self::Sphere {
                radius: 1.0,
                smoothing: SPHERE_SMOOTHING,
            },
            ShapeKind::Prism => Self::Prism {
                radius: 1.0,
                height: 2.0,
                side_count: PRISM_SIDE_COUNT,
            },
            ShapeKind::Capsule => Self::Capsule {
                radius: 0.5,
                height: 2.0,
                smoothing: CAPSULE_SMOOTHING,
            },
        }
    }

    /// The kind this descriptor generates
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Box { .. } => ShapeKind::Box,
            Self::Sphere { .. } => ShapeKind::Sphere,
            Self::Prism { .. } => ShapeKind::Prism,
            Self::Capsule { .. } => ShapeKind::Capsule,
        }
    }

    /// Reject zero/negative-area geometry before any buffers are built
    fn validate(&self) -> Result<(), ShapeError> {
        let kind = self.kind();
        let positive = |value: f32, name: &str| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ShapeError::DegenerateGeometry {
                    kind,
                    detail: format!("{name} must be positive, got {value}"),
                })
            }
        };
        let at_least = |value: u32, minimum: u32, name: &str| {
            if value >= minimum {
                Ok(())
            } else {
                Err(ShapeError::DegenerateGeometry {
                    kind,
                    detail: format!("{name} must be at least {minimum}, got {value}"),
                })
            }
        };

        match *self {
            Self::Box {
                width,
                height,
                depth,
            } => {
                positive(width, "width")?;
                positive(height, "height")?;
                positive(depth, "depth")
            }
            Self::Sphere { radius, smoothing } => {
                positive(radius, "radius")?;
                at_least(smoothing, 1, "smoothing")
            }
            Self::Prism {
                radius,
                height,
                side_count,
            } => {
                positive(radius, "radius")?;
                positive(height, "height")?;
                at_least(side_count, 3, "side count")
            }
            Self::Capsule {
                radius,
                height,
                smoothing,
            } => {
                positive(radius, "radius")?;
                positive(height, "height")?;
                // Each cap needs at least one hemisphere row
                at_least(smoothing, 2, "smoothing")
            }
        }
    }

    /// Run the generator for this descriptor, producing fresh buffers
    pub fn generate(&self) -> MeshBuffers {
        match *self {
            Self::Box {
                width,
                height,
                depth,
            } => generate_box_mesh(width, height, depth),
            Self::Sphere { radius, smoothing } => generate_sphere_mesh(radius, smoothing),
            Self::Prism {
                radius,
                height,
                side_count,
            } => generate_prism_mesh(radius, height, side_count),
            Self::Capsule {
                radius,
                height,
                smoothing,
            } => generate_capsule_mesh(radius, height, smoothing),
        }
    }
}

/// Validate a bag and generate buffers for `kind`
///
/// Shared by [`create_shape`] and [`Shape::update_parameters`].
pub(crate) fn generate_from_parameters(
    kind: ShapeKind,
    parameters: &ShapeParameters,
) -> Result<([f32; 4], MeshBuffers), ShapeError> {
    let (descriptor, color) = ShapeDescriptor::from_parameters(kind, parameters)?;
    let buffers = descriptor.generate();

    tracing::debug!(
        "Generated {} mesh: {} vertices, {} triangles",
        kind.display_name(),
        buffers.vertex_count(),
        buffers.triangle_count()
    );

    Ok((color, buffers))
}

/// Create a shape entity from a kind and a parameter bag
///
/// Validates the bag against the kind's required key set, dispatches to the
/// matching generator and attaches the flat material color. On error no
/// entity is produced.
pub fn create_shape(kind: ShapeKind, parameters: ShapeParameters) -> Result<Shape, ShapeError> {
    let (color, buffers) = generate_from_parameters(kind, &parameters)?;
    Ok(Shape::from_buffers(kind, parameters, color, buffers))
}
