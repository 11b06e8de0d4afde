//! Global constants for shape-core

/// Default color for generated shapes (gray, RGBA)
pub const DEFAULT_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];

/// Default smoothing (segment count) for sphere generation
pub const SPHERE_SMOOTHING: u32 = 24;

/// Default smoothing for capsule generation
pub const CAPSULE_SMOOTHING: u32 = 16;

/// Default number of side panels for prism generation
pub const PRISM_SIDE_COUNT: u32 = 3;

/// Practical lower bound for smoothing sliders in the editor panel
pub const MIN_SMOOTHING: u32 = 12;

/// Practical upper bound for smoothing values; keeps per-call cost predictable
pub const MAX_SMOOTHING: u32 = 256;

/// Minimum number of prism side panels
pub const MIN_SIDE_COUNT: u32 = 3;

/// Practical upper bound for prism side panels
pub const MAX_SIDE_COUNT: u32 = 256;

/// Dimension slider range for the editor panel
pub const MIN_DIMENSION: f32 = 0.1;

/// Upper end of the dimension slider range
pub const MAX_DIMENSION: f32 = 10.0;
